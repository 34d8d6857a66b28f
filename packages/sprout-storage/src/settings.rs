use crate::{Result, db::Db};

pub const USER_NAME_KEY: &str = "user.name";

pub async fn get_setting(db: &Db, key: &str) -> Result<Option<String>> {
	let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = $1")
		.bind(key)
		.fetch_optional(&db.pool)
		.await?;

	Ok(value)
}

pub async fn set_setting(db: &Db, key: &str, value: &str, updated_at: &str) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO settings (key, value, updated_at)
VALUES ($1, $2, $3)
ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
	)
	.bind(key)
	.bind(value)
	.bind(updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}
