use crate::{Result, db::Db, models::TriggerRow};

/// Registers the trigger for `row.plant_id`, replacing any existing one.
pub async fn upsert_trigger(db: &Db, row: &TriggerRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO notification_triggers (
	plant_id,
	trigger_id,
	fire_at,
	fire_at_unix_ms,
	payload,
	created_at
)
VALUES ($1, $2, $3, $4, $5, $6)
ON CONFLICT (plant_id) DO UPDATE SET
	trigger_id = excluded.trigger_id,
	fire_at = excluded.fire_at,
	fire_at_unix_ms = excluded.fire_at_unix_ms,
	payload = excluded.payload,
	created_at = excluded.created_at",
	)
	.bind(row.plant_id)
	.bind(row.trigger_id)
	.bind(row.fire_at.as_str())
	.bind(row.fire_at_unix_ms)
	.bind(&row.payload)
	.bind(row.created_at.as_str())
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn delete_trigger(db: &Db, plant_id: i64) -> Result<bool> {
	let result = sqlx::query("DELETE FROM notification_triggers WHERE plant_id = $1")
		.bind(plant_id)
		.execute(&db.pool)
		.await?;

	Ok(result.rows_affected() > 0)
}

pub async fn get_trigger(db: &Db, plant_id: i64) -> Result<Option<TriggerRow>> {
	let row = sqlx::query_as::<_, TriggerRow>(
		"\
SELECT plant_id, trigger_id, fire_at, fire_at_unix_ms, payload, created_at
FROM notification_triggers
WHERE plant_id = $1",
	)
	.bind(plant_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn list_triggers(db: &Db) -> Result<Vec<TriggerRow>> {
	let rows = sqlx::query_as::<_, TriggerRow>(
		"\
SELECT plant_id, trigger_id, fire_at, fire_at_unix_ms, payload, created_at
FROM notification_triggers
ORDER BY fire_at_unix_ms ASC, plant_id ASC",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Removes and returns every trigger due at or before `now_unix_ms`, earliest first. A single
/// statement, so a trigger is handed out at most once.
pub async fn take_due_triggers(db: &Db, now_unix_ms: i64) -> Result<Vec<TriggerRow>> {
	let mut rows = sqlx::query_as::<_, TriggerRow>(
		"\
DELETE FROM notification_triggers
WHERE fire_at_unix_ms <= $1
RETURNING plant_id, trigger_id, fire_at, fire_at_unix_ms, payload, created_at",
	)
	.bind(now_unix_ms)
	.fetch_all(&db.pool)
	.await?;

	rows.sort_by_key(|row| (row.fire_at_unix_ms, row.plant_id));

	Ok(rows)
}
