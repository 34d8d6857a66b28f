use time::OffsetDateTime;

use sprout_domain::{NextWatering, PlantRecord, next_watering};
use sprout_storage::plants;

use crate::{Result, SproutService, records};

impl SproutService {
	/// Every saved record, soonest reminder first.
	pub async fn load_all(&self) -> Result<Vec<PlantRecord>> {
		let rows = plants::list_plants(&self.db).await?;

		rows.into_iter().map(records::from_row).collect()
	}

	pub async fn get(&self, plant_id: i64) -> Result<Option<PlantRecord>> {
		plants::get_plant(&self.db, plant_id).await?.map(records::from_row).transpose()
	}

	pub async fn next_watering(&self, now: OffsetDateTime) -> Result<Option<NextWatering>> {
		let records = self.load_all().await?;

		Ok(next_watering(&records, now))
	}
}
