use time::OffsetDateTime;

use sprout_domain::{CatalogPlant, PlantRecord, validate_reminder_time};

use crate::{Result, SproutService};

impl SproutService {
	/// Saves a catalog plant with its first reminder at `when`, which must be in the future.
	pub async fn select_plant(
		&self,
		plant: CatalogPlant,
		when: OffsetDateTime,
	) -> Result<PlantRecord> {
		validate_reminder_time(when, OffsetDateTime::now_utc())?;

		let record = plant.into_record(when);

		record.validate()?;

		self.save(&record).await
	}
}
