use time::OffsetDateTime;

use sprout_notify::Trigger;
use sprout_storage::plants;

use crate::{Result, SproutService, records};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredReminder {
	pub plant_id: i64,
	pub fired_at: OffsetDateTime,
	/// Next reminder, or `None` when the record is gone or could not be rescheduled.
	pub next_at: Option<OffsetDateTime>,
	/// Why the next reminder was not set. A stored record is left without a trigger until
	/// [`SproutService::reconcile`] succeeds for it.
	pub error: Option<String>,
}
impl FiredReminder {
	pub fn needs_repair(&self) -> bool {
		self.error.is_some()
	}
}

impl SproutService {
	/// Delivers every trigger due at `now` and moves each watered plant to its next reminder.
	///
	/// Taken triggers are gone from the platform, so a failure for one plant is recorded on its
	/// [`FiredReminder`] and the rest of the batch is still processed.
	pub async fn process_fired(&self, now: OffsetDateTime) -> Result<Vec<FiredReminder>> {
		let fired = self.scheduler.poll(now).await?;
		let mut out = Vec::with_capacity(fired.len());

		for trigger in fired {
			let (next_at, error) = match self.advance(&trigger, now).await {
				Ok(next_at) => (next_at, None),
				Err(err) => {
					tracing::warn!(
						plant_id = trigger.plant_id,
						error = %err,
						"Failed to schedule the next reminder."
					);

					(None, Some(err.to_string()))
				},
			};

			out.push(FiredReminder {
				plant_id: trigger.plant_id,
				fired_at: trigger.fire_at,
				next_at,
				error,
			});
		}

		Ok(out)
	}

	async fn advance(
		&self,
		trigger: &Trigger,
		now: OffsetDateTime,
	) -> Result<Option<OffsetDateTime>> {
		let Some(row) = plants::get_plant(&self.db, trigger.plant_id).await? else {
			tracing::debug!(plant_id = trigger.plant_id, "Fired reminder has no record.");

			return Ok(None);
		};
		let record = records::from_row(row)?;
		let next = record.frequency.next_after(trigger.fire_at, now);
		let saved = self.save(&record.with_notification(next)).await?;

		Ok(Some(saved.date_time_notification))
	}
}
