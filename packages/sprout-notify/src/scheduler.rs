use std::sync::{
	Arc, Mutex, Weak,
	atomic::{AtomicU64, Ordering},
};

use time::OffsetDateTime;

use sprout_domain::{PlantRecord, normalize_fire_at};

use crate::{
	NotificationContent, NotificationPlatform, Result, Trigger, TriggerHandle, TriggerPayload,
};

type Handler = Arc<dyn Fn(&TriggerPayload) + Send + Sync>;
type HandlerSlot = Mutex<Option<ActiveHandler>>;

struct ActiveHandler {
	token: u64,
	handler: Handler,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTrigger {
	pub handle: TriggerHandle,
	/// Instant actually registered. Differs from the record's time only when that was in the past.
	pub fire_at: OffsetDateTime,
}

pub struct NotificationScheduler {
	platform: Arc<dyn NotificationPlatform>,
	content: NotificationContent,
	slot: Arc<HandlerSlot>,
	next_token: AtomicU64,
}
impl NotificationScheduler {
	pub fn new(platform: Arc<dyn NotificationPlatform>, content: NotificationContent) -> Self {
		Self { platform, content, slot: Arc::new(Mutex::new(None)), next_token: AtomicU64::new(0) }
	}

	pub async fn schedule(&self, record: &PlantRecord) -> Result<ScheduledTrigger> {
		if self.platform.cancel_trigger(record.id).await? {
			tracing::debug!(plant_id = record.id, "Replaced existing reminder trigger.");
		}

		let fire_at = normalize_fire_at(record.date_time_notification, OffsetDateTime::now_utc());

		if fire_at != record.date_time_notification {
			tracing::warn!(
				plant_id = record.id,
				requested = %record.date_time_notification,
				%fire_at,
				"Reminder time is in the past; firing now instead."
			);
		}

		let payload = self.content.payload(record.clone().with_notification(fire_at));
		let handle = self.platform.register_trigger(record.id, fire_at, &payload).await?;

		tracing::info!(plant_id = record.id, %handle, %fire_at, "Reminder trigger registered.");

		Ok(ScheduledTrigger { handle, fire_at })
	}

	pub async fn cancel(&self, plant_id: i64) -> Result<bool> {
		let cancelled = self.platform.cancel_trigger(plant_id).await?;

		if cancelled {
			tracing::info!(plant_id, "Reminder trigger cancelled.");
		}

		Ok(cancelled)
	}

	pub async fn live_trigger(&self, plant_id: i64) -> Result<Option<Trigger>> {
		self.platform.find_trigger(plant_id).await
	}

	pub async fn live_triggers(&self) -> Result<Vec<Trigger>> {
		self.platform.pending_triggers().await
	}

	/// Installs `handler` as the only fired-trigger handler, replacing any previous one. The
	/// handler stays installed until the returned [`Subscription`] is dropped or replaced.
	pub fn on_fired<F>(&self, handler: F) -> Subscription
	where
		F: Fn(&TriggerPayload) + Send + Sync + 'static,
	{
		let token = self.next_token.fetch_add(1, Ordering::SeqCst);
		let mut slot = self.slot.lock().unwrap_or_else(|err| err.into_inner());

		if slot.is_some() {
			tracing::debug!("Replacing fired-trigger handler.");
		}

		*slot = Some(ActiveHandler { token, handler: Arc::new(handler) });

		Subscription { slot: Arc::downgrade(&self.slot), token }
	}

	/// Hands `payload` to the active handler. Returns `false` when none is installed.
	pub fn deliver(&self, payload: &TriggerPayload) -> bool {
		// Clone out of the lock so a handler may re-subscribe.
		let handler = {
			let slot = self.slot.lock().unwrap_or_else(|err| err.into_inner());

			slot.as_ref().map(|active| active.handler.clone())
		};

		match handler {
			Some(handler) => {
				handler(payload);

				true
			},
			None => false,
		}
	}

	/// Takes every trigger due at `now` from the platform and delivers each one.
	pub async fn poll(&self, now: OffsetDateTime) -> Result<Vec<Trigger>> {
		let fired = self.platform.take_due(now).await?;

		for trigger in &fired {
			tracing::info!(
				plant_id = trigger.plant_id,
				handle = %trigger.handle,
				"Reminder fired."
			);

			if !self.deliver(&trigger.payload) {
				tracing::debug!(plant_id = trigger.plant_id, "No fired-trigger handler installed.");
			}
		}

		Ok(fired)
	}
}

/// Keeps a fired-trigger handler installed. Dropping it uninstalls the handler unless a newer
/// subscription already replaced it.
#[must_use = "dropping the subscription uninstalls the handler"]
pub struct Subscription {
	slot: Weak<HandlerSlot>,
	token: u64,
}
impl Subscription {
	pub fn is_active(&self) -> bool {
		let Some(slot) = self.slot.upgrade() else {
			return false;
		};
		let slot = slot.lock().unwrap_or_else(|err| err.into_inner());

		slot.as_ref().is_some_and(|active| active.token == self.token)
	}

	pub fn unsubscribe(self) {}
}
impl Drop for Subscription {
	fn drop(&mut self) {
		let Some(slot) = self.slot.upgrade() else {
			return;
		};
		let mut slot = slot.lock().unwrap_or_else(|err| err.into_inner());

		if slot.as_ref().is_some_and(|active| active.token == self.token) {
			*slot = None;
		}
	}
}
