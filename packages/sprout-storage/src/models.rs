use serde_json::Value;
use sqlx::types::Json;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, Result};

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Instants are stored as RFC 3339 text so the user's UTC offset survives a round trip; the
/// `*_unix_ms` columns exist only for ordering and range scans.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct PlantRow {
	pub plant_id: i64,
	pub name: String,
	pub about: String,
	pub water_tips: String,
	pub photo_uri: String,
	pub environments: Json<Vec<String>>,
	pub frequency_times: i64,
	pub frequency_repeat_every: String,
	pub date_time_notification: String,
	pub due_unix_ms: i64,
	pub trigger_id: Option<Uuid>,
	pub created_at: String,
	pub updated_at: String,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct TriggerRow {
	pub plant_id: i64,
	pub trigger_id: Uuid,
	pub fire_at: String,
	pub fire_at_unix_ms: i64,
	pub payload: Json<Value>,
	pub created_at: String,
}

/// Whole milliseconds at or before `at`. Use for "due by" bounds.
pub fn unix_millis(at: OffsetDateTime) -> Result<i64> {
	millis(at, at.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI))
}

/// Whole milliseconds at or after `at`. Use for fire instants, so a trigger compared against a
/// [`unix_millis`] bound is never due before its exact instant.
pub fn unix_millis_ceil(at: OffsetDateTime) -> Result<i64> {
	let nanos = at.unix_timestamp_nanos();
	let mut ms = nanos.div_euclid(NANOS_PER_MILLI);

	if nanos.rem_euclid(NANOS_PER_MILLI) != 0 {
		ms += 1;
	}

	millis(at, ms)
}

fn millis(at: OffsetDateTime, ms: i128) -> Result<i64> {
	i64::try_from(ms).map_err(|_| Error::InvalidArgument(format!("Instant {at} is out of range.")))
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	#[test]
	fn unix_millis_ignores_offset() {
		let utc = datetime!(2026-10-15 12:00:00.250 UTC);
		let local = datetime!(2026-10-15 09:00:00.250 -3);

		assert_eq!(unix_millis(utc).expect("in range"), unix_millis(local).expect("in range"));
		assert_eq!(unix_millis(utc).expect("in range") % 1_000, 250);
	}

	#[test]
	fn ceil_rounds_partial_milliseconds_up() {
		let exact = datetime!(2026-10-15 12:00:00.250 UTC);
		let partial = datetime!(2026-10-15 12:00:00.250000001 UTC);

		assert_eq!(
			unix_millis_ceil(exact).expect("in range"),
			unix_millis(exact).expect("in range")
		);
		assert_eq!(unix_millis(partial).expect("in range") % 1_000, 250);
		assert_eq!(unix_millis_ceil(partial).expect("in range") % 1_000, 251);
	}
}
