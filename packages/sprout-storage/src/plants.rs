use crate::{Result, db::Db, models::PlantRow};

const PLANT_COLUMNS: &str = "plant_id, name, about, water_tips, photo_uri, environments, \
frequency_times, frequency_repeat_every, date_time_notification, due_unix_ms, trigger_id, \
created_at, updated_at";

/// Inserts or overwrites the row for `row.plant_id`. An overwrite keeps the stored
/// `created_at`.
pub async fn upsert_plant(db: &Db, row: &PlantRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO plant_records (
	plant_id,
	name,
	about,
	water_tips,
	photo_uri,
	environments,
	frequency_times,
	frequency_repeat_every,
	date_time_notification,
	due_unix_ms,
	trigger_id,
	created_at,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
ON CONFLICT (plant_id) DO UPDATE SET
	name = excluded.name,
	about = excluded.about,
	water_tips = excluded.water_tips,
	photo_uri = excluded.photo_uri,
	environments = excluded.environments,
	frequency_times = excluded.frequency_times,
	frequency_repeat_every = excluded.frequency_repeat_every,
	date_time_notification = excluded.date_time_notification,
	due_unix_ms = excluded.due_unix_ms,
	trigger_id = excluded.trigger_id,
	updated_at = excluded.updated_at",
	)
	.bind(row.plant_id)
	.bind(row.name.as_str())
	.bind(row.about.as_str())
	.bind(row.water_tips.as_str())
	.bind(row.photo_uri.as_str())
	.bind(&row.environments)
	.bind(row.frequency_times)
	.bind(row.frequency_repeat_every.as_str())
	.bind(row.date_time_notification.as_str())
	.bind(row.due_unix_ms)
	.bind(row.trigger_id)
	.bind(row.created_at.as_str())
	.bind(row.updated_at.as_str())
	.execute(&db.pool)
	.await?;

	Ok(())
}

/// Records the trigger registered for `plant_id` together with the instant it fires at, so the
/// stored reminder time always matches the live trigger.
pub async fn mark_scheduled(
	db: &Db,
	plant_id: i64,
	trigger_id: uuid::Uuid,
	date_time_notification: &str,
	due_unix_ms: i64,
) -> Result<bool> {
	let result = sqlx::query(
		"\
UPDATE plant_records
SET trigger_id = $1, date_time_notification = $2, due_unix_ms = $3
WHERE plant_id = $4",
	)
	.bind(trigger_id)
	.bind(date_time_notification)
	.bind(due_unix_ms)
	.bind(plant_id)
	.execute(&db.pool)
	.await?;

	Ok(result.rows_affected() > 0)
}

pub async fn get_plant(db: &Db, plant_id: i64) -> Result<Option<PlantRow>> {
	let sql = format!("SELECT {PLANT_COLUMNS} FROM plant_records WHERE plant_id = $1");
	let row = sqlx::query_as::<_, PlantRow>(&sql).bind(plant_id).fetch_optional(&db.pool).await?;

	Ok(row)
}

/// All rows, soonest reminder first.
pub async fn list_plants(db: &Db) -> Result<Vec<PlantRow>> {
	let sql = format!(
		"SELECT {PLANT_COLUMNS} FROM plant_records ORDER BY due_unix_ms ASC, plant_id ASC"
	);
	let rows = sqlx::query_as::<_, PlantRow>(&sql).fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn delete_plant(db: &Db, plant_id: i64) -> Result<bool> {
	let result = sqlx::query("DELETE FROM plant_records WHERE plant_id = $1")
		.bind(plant_id)
		.execute(&db.pool)
		.await?;

	Ok(result.rows_affected() > 0)
}
