use std::collections::HashMap;

use sprout_storage::plants;

use crate::{Result, SproutService, records};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
	pub checked: usize,
	pub rescheduled: usize,
	pub orphans_cancelled: usize,
	/// Records still without a trigger because rescheduling failed again.
	pub failed: usize,
	/// Rows that cannot be decoded. Their triggers are left alone.
	pub corrupt: usize,
}
impl ReconcileReport {
	/// Whether every readable record now has its trigger.
	pub fn is_settled(&self) -> bool {
		self.failed == 0
	}
}

impl SproutService {
	/// Restores one live trigger per record: missing or stale triggers are registered again and
	/// triggers without a record are cancelled.
	pub async fn reconcile(&self) -> Result<ReconcileReport> {
		let rows = plants::list_plants(&self.db).await?;
		let mut live = self
			.scheduler
			.live_triggers()
			.await?
			.into_iter()
			.map(|trigger| (trigger.plant_id, trigger))
			.collect::<HashMap<_, _>>();
		let mut report = ReconcileReport::default();

		for row in rows {
			let plant_id = row.plant_id;
			let stored_handle = row.trigger_id;
			let trigger = live.remove(&plant_id);

			report.checked += 1;

			let record = match records::from_row(row) {
				Ok(record) => record,
				Err(err) => {
					tracing::error!(plant_id, error = %err, "Skipping unreadable plant record.");

					report.corrupt += 1;

					continue;
				},
			};
			let in_sync = trigger.is_some_and(|trigger| {
				stored_handle == Some(trigger.handle.0)
					&& trigger.fire_at == record.date_time_notification
			});

			if in_sync {
				continue;
			}

			match self.save(&record).await {
				Ok(_) => report.rescheduled += 1,
				Err(err) => {
					tracing::warn!(plant_id, error = %err, "Reminder still unscheduled.");

					report.failed += 1;
				},
			}
		}

		for plant_id in live.into_keys() {
			if self.scheduler.cancel(plant_id).await? {
				report.orphans_cancelled += 1;
			}
		}

		tracing::info!(
			checked = report.checked,
			rescheduled = report.rescheduled,
			orphans_cancelled = report.orphans_cancelled,
			failed = report.failed,
			corrupt = report.corrupt,
			"Reminders reconciled."
		);

		Ok(report)
	}
}
