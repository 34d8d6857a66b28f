use time::OffsetDateTime;

use sprout_domain::PlantRecord;
use sprout_storage::{models::unix_millis, plants};

use crate::{Error, Result, SproutService, records};

impl SproutService {
	/// Stores `record` and (re)registers its reminder. On success exactly one trigger is live for
	/// `record.id` and the returned record carries the instant it fires at.
	///
	/// A scheduling failure leaves the record stored without a trigger and returns
	/// [`Error::Scheduling`]; [`SproutService::reconcile`] picks it up later.
	pub async fn save(&self, record: &PlantRecord) -> Result<PlantRecord> {
		record.validate()?;

		let row = records::to_row(record, OffsetDateTime::now_utc())?;

		plants::upsert_plant(&self.db, &row).await?;

		let scheduled = match self.scheduler.schedule(record).await {
			Ok(scheduled) => scheduled,
			Err(err) => {
				tracing::warn!(plant_id = record.id, error = %err, "Saved without a reminder.");

				return Err(Error::Scheduling { message: err.to_string() });
			},
		};
		let fire_at = records::format_instant(scheduled.fire_at)?;

		plants::mark_scheduled(
			&self.db,
			record.id,
			scheduled.handle.0,
			&fire_at,
			unix_millis(scheduled.fire_at)?,
		)
		.await?;

		tracing::info!(plant_id = record.id, handle = %scheduled.handle, "Plant saved.");

		Ok(record.clone().with_notification(scheduled.fire_at))
	}
}
