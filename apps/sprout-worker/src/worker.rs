use std::time::Duration;

use color_eyre::Result;
use time::OffsetDateTime;
use tokio::{signal, time as tokio_time};

use sprout_service::SproutService;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
	pub fired: usize,
	/// Fired reminders whose next trigger could not be set this round.
	pub failed: usize,
}

/// Polling state carried between rounds. A round that leaves a record without its trigger
/// schedules a repair, and [`SproutService::reconcile`] is retried every round until it settles.
#[derive(Debug, Default)]
pub struct Rounds {
	pending_repair: bool,
}
impl Rounds {
	pub fn new(pending_repair: bool) -> Self {
		Self { pending_repair }
	}

	pub fn pending_repair(&self) -> bool {
		self.pending_repair
	}

	pub async fn step(&mut self, service: &SproutService, now: OffsetDateTime) -> RoundReport {
		let report = process_once(service, now).await;

		if report.failed > 0 {
			self.pending_repair = true;
		}
		if self.pending_repair {
			self.pending_repair = !repair(service).await;
		}

		report
	}
}

/// Delivers reminders every `poll_interval` until Ctrl-C. `pending_repair` carries an unsettled
/// startup reconcile into the loop.
pub async fn run_worker(
	service: &SproutService,
	poll_interval: Duration,
	pending_repair: bool,
) -> Result<()> {
	let subscription = service.scheduler.on_fired(|payload| {
		tracing::info!(
			plant_id = payload.plant_id,
			title = %payload.title,
			body = %payload.body,
			"Watering reminder delivered."
		);
	});
	let shutdown = signal::ctrl_c();
	let mut rounds = Rounds::new(pending_repair);

	tokio::pin!(shutdown);

	tracing::info!(?poll_interval, "Reminder worker started.");

	loop {
		rounds.step(service, OffsetDateTime::now_utc()).await;

		tokio::select! {
			res = &mut shutdown => {
				res?;

				break;
			},
			_ = tokio_time::sleep(poll_interval) => {},
		}
	}

	subscription.unsubscribe();

	tracing::info!("Reminder worker stopped.");

	Ok(())
}

/// One polling round. Failures are logged so the loop keeps running.
pub async fn process_once(service: &SproutService, now: OffsetDateTime) -> RoundReport {
	match service.process_fired(now).await {
		Ok(fired) => {
			let mut report = RoundReport { fired: fired.len(), failed: 0 };

			for reminder in &fired {
				if reminder.needs_repair() {
					report.failed += 1;
				}

				tracing::debug!(
					plant_id = reminder.plant_id,
					next_at = ?reminder.next_at,
					error = ?reminder.error,
					"Fired reminder processed."
				);
			}

			report
		},
		Err(err) => {
			tracing::error!(error = %err, "Fired reminder processing failed.");

			RoundReport { fired: 0, failed: 1 }
		},
	}
}

/// Runs [`SproutService::reconcile`]. Returns `true` once every readable record has a trigger.
pub async fn repair(service: &SproutService) -> bool {
	match service.reconcile().await {
		Ok(report) => report.is_settled(),
		Err(err) => {
			tracing::error!(error = %err, "Reminder repair failed.");

			false
		},
	}
}
