use time::OffsetDateTime;

use sprout_domain::{PlantRecord, validate_reminder_time};

use crate::{Error, Result, SproutService};

impl SproutService {
	pub async fn reschedule(&self, plant_id: i64, when: OffsetDateTime) -> Result<PlantRecord> {
		validate_reminder_time(when, OffsetDateTime::now_utc())?;

		let record = self.get(plant_id).await?.ok_or_else(|| Error::NotFound {
			message: format!("Plant {plant_id} is not saved."),
		})?;

		self.save(&record.with_notification(when)).await
	}
}
