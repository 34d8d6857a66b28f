use sprout_storage::plants;

use crate::{Result, SproutService};

impl SproutService {
	/// Cancels the reminder for `plant_id` and deletes the record. Returns `false`, touching
	/// nothing, when no such record exists.
	pub async fn remove(&self, plant_id: i64) -> Result<bool> {
		if plants::get_plant(&self.db, plant_id).await?.is_none() {
			tracing::debug!(plant_id, "Nothing to remove.");

			return Ok(false);
		}

		self.scheduler.cancel(plant_id).await?;

		let removed = plants::delete_plant(&self.db, plant_id).await?;

		tracing::info!(plant_id, "Plant removed.");

		Ok(removed)
	}
}
