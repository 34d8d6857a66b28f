//! Local reminder triggers for saved plants.
//!
//! [`NotificationScheduler`] owns the "at most one live trigger per plant" rule and the single
//! fired-trigger handler. Where triggers actually live is behind [`NotificationPlatform`];
//! [`LocalPlatform`] keeps them in the same SQLite file as the plant records.

pub mod local;
pub mod scheduler;

mod error;

pub use error::{Error, Result};
pub use local::LocalPlatform;
pub use scheduler::{NotificationScheduler, ScheduledTrigger, Subscription};

use std::{fmt, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use sprout_domain::PlantRecord;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait NotificationPlatform
where
	Self: Send + Sync,
{
	/// Registers a trigger firing at `fire_at`. Replaces any trigger already registered for
	/// `plant_id`.
	fn register_trigger<'a>(
		&'a self,
		plant_id: i64,
		fire_at: OffsetDateTime,
		payload: &'a TriggerPayload,
	) -> BoxFuture<'a, Result<TriggerHandle>>;

	/// Returns `false` when nothing was registered for `plant_id`.
	fn cancel_trigger<'a>(&'a self, plant_id: i64) -> BoxFuture<'a, Result<bool>>;

	fn find_trigger<'a>(&'a self, plant_id: i64) -> BoxFuture<'a, Result<Option<Trigger>>>;

	fn pending_triggers<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Trigger>>>;

	/// Removes and returns the triggers due at or before `now`, earliest first.
	fn take_due<'a>(&'a self, now: OffsetDateTime) -> BoxFuture<'a, Result<Vec<Trigger>>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerHandle(pub Uuid);
impl TriggerHandle {
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}
}
impl Default for TriggerHandle {
	fn default() -> Self {
		Self::new()
	}
}
impl fmt::Display for TriggerHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerPayload {
	pub plant_id: i64,
	pub title: String,
	pub body: String,
	pub plant: PlantRecord,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trigger {
	pub plant_id: i64,
	pub handle: TriggerHandle,
	pub fire_at: OffsetDateTime,
	pub payload: TriggerPayload,
}

/// Title and body shown for every reminder.
#[derive(Clone, Debug)]
pub struct NotificationContent {
	pub title: String,
	pub body: String,
}
impl NotificationContent {
	pub fn from_config(cfg: &sprout_config::Notifications) -> Self {
		Self { title: cfg.title.clone(), body: cfg.body.clone() }
	}

	pub fn payload(&self, plant: PlantRecord) -> TriggerPayload {
		TriggerPayload {
			plant_id: plant.id,
			title: self.title.clone(),
			body: self.body.replace("{name}", &plant.name),
			plant,
		}
	}
}
