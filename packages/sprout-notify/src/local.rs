use sqlx::types::Json;
use time::OffsetDateTime;

use sprout_domain::time_serde;
use sprout_storage::{
	db::Db,
	models::{TriggerRow, unix_millis, unix_millis_ceil},
	triggers,
};

use crate::{
	BoxFuture, Error, NotificationPlatform, Result, Trigger, TriggerHandle, TriggerPayload,
};

/// Triggers kept in the `notification_triggers` table and fired by whoever calls
/// [`NotificationPlatform::take_due`].
pub struct LocalPlatform {
	db: Db,
	enabled: bool,
}
impl LocalPlatform {
	pub fn new(db: Db, cfg: &sprout_config::Notifications) -> Self {
		Self { db, enabled: cfg.enabled }
	}

	async fn register(
		&self,
		plant_id: i64,
		fire_at: OffsetDateTime,
		payload: &TriggerPayload,
	) -> Result<TriggerHandle> {
		if !self.enabled {
			return Err(Error::PermissionDenied);
		}

		let handle = TriggerHandle::new();
		let row = TriggerRow {
			plant_id,
			trigger_id: handle.0,
			fire_at: format_instant(plant_id, fire_at)?,
			fire_at_unix_ms: unix_millis_ceil(fire_at)?,
			payload: Json(serde_json::to_value(payload)?),
			created_at: format_instant(plant_id, OffsetDateTime::now_utc())?,
		};

		triggers::upsert_trigger(&self.db, &row).await?;

		Ok(handle)
	}

	async fn take(&self, now: OffsetDateTime) -> Result<Vec<Trigger>> {
		let rows = triggers::take_due_triggers(&self.db, unix_millis(now)?).await?;

		rows.into_iter().map(trigger_from_row).collect()
	}

	async fn find(&self, plant_id: i64) -> Result<Option<Trigger>> {
		triggers::get_trigger(&self.db, plant_id).await?.map(trigger_from_row).transpose()
	}

	async fn pending(&self) -> Result<Vec<Trigger>> {
		let rows = triggers::list_triggers(&self.db).await?;

		rows.into_iter().map(trigger_from_row).collect()
	}
}
impl NotificationPlatform for LocalPlatform {
	fn register_trigger<'a>(
		&'a self,
		plant_id: i64,
		fire_at: OffsetDateTime,
		payload: &'a TriggerPayload,
	) -> BoxFuture<'a, Result<TriggerHandle>> {
		Box::pin(self.register(plant_id, fire_at, payload))
	}

	fn cancel_trigger<'a>(&'a self, plant_id: i64) -> BoxFuture<'a, Result<bool>> {
		Box::pin(async move { Ok(triggers::delete_trigger(&self.db, plant_id).await?) })
	}

	fn find_trigger<'a>(&'a self, plant_id: i64) -> BoxFuture<'a, Result<Option<Trigger>>> {
		Box::pin(self.find(plant_id))
	}

	fn pending_triggers<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Trigger>>> {
		Box::pin(self.pending())
	}

	fn take_due<'a>(&'a self, now: OffsetDateTime) -> BoxFuture<'a, Result<Vec<Trigger>>> {
		Box::pin(self.take(now))
	}
}

fn format_instant(plant_id: i64, at: OffsetDateTime) -> Result<String> {
	time_serde::format(&at).map_err(|err| {
		sprout_storage::Error::InvalidArgument(format!("Plant {plant_id} instant {at}: {err}."))
			.into()
	})
}

fn trigger_from_row(row: TriggerRow) -> Result<Trigger> {
	let fire_at = time_serde::parse(&row.fire_at)
		.map_err(|err| Error::Corrupt { plant_id: row.plant_id, message: err.to_string() })?;
	let payload: TriggerPayload = serde_json::from_value(row.payload.0)?;

	if payload.plant_id != row.plant_id {
		return Err(Error::Corrupt {
			plant_id: row.plant_id,
			message: format!("payload belongs to plant {}", payload.plant_id),
		});
	}

	Ok(Trigger { plant_id: row.plant_id, handle: TriggerHandle(row.trigger_id), fire_at, payload })
}
