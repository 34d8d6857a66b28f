use sqlx::types::Json;
use time::OffsetDateTime;

use sprout_domain::{Frequency, PlantRecord, RepeatEvery, time_serde};
use sprout_storage::models::{PlantRow, unix_millis};

use crate::{Error, Result};

pub(crate) fn format_instant(at: OffsetDateTime) -> Result<String> {
	time_serde::format(&at).map_err(|err| Error::Validation {
		message: format!("Instant {at} cannot be stored: {err}."),
	})
}

/// Row for `record` with no trigger attached yet.
pub(crate) fn to_row(record: &PlantRecord, now: OffsetDateTime) -> Result<PlantRow> {
	let stamp = format_instant(now)?;

	Ok(PlantRow {
		plant_id: record.id,
		name: record.name.clone(),
		about: record.about.clone(),
		water_tips: record.water_tips.clone(),
		photo_uri: record.photo_uri.clone(),
		environments: Json(record.environments.iter().cloned().collect()),
		frequency_times: i64::from(record.frequency.times),
		frequency_repeat_every: record.frequency.repeat_every.as_str().to_string(),
		date_time_notification: format_instant(record.date_time_notification)?,
		due_unix_ms: unix_millis(record.date_time_notification)?,
		trigger_id: None,
		created_at: stamp.clone(),
		updated_at: stamp,
	})
}

pub(crate) fn from_row(row: PlantRow) -> Result<PlantRecord> {
	let plant_id = row.plant_id;
	let times = u32::try_from(row.frequency_times).map_err(|_| {
		corrupt(plant_id, format!("frequency_times {} is out of range", row.frequency_times))
	})?;
	let repeat_every = RepeatEvery::parse(&row.frequency_repeat_every).ok_or_else(|| {
		corrupt(plant_id, format!("unknown repeat_every {:?}", row.frequency_repeat_every))
	})?;
	let date_time_notification = time_serde::parse(&row.date_time_notification)
		.map_err(|err| corrupt(plant_id, err.to_string()))?;

	Ok(PlantRecord {
		id: plant_id,
		name: row.name,
		about: row.about,
		water_tips: row.water_tips,
		photo_uri: row.photo_uri,
		environments: row.environments.0.into_iter().collect(),
		frequency: Frequency { times, repeat_every },
		date_time_notification,
	})
}

fn corrupt(plant_id: i64, message: String) -> Error {
	Error::Storage { message: format!("Plant {plant_id} row is corrupt: {message}.") }
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use time::macros::datetime;

	use super::*;

	fn fern() -> PlantRecord {
		PlantRecord {
			id: 9,
			name: "Fern".to_string(),
			about: "Shade.".to_string(),
			water_tips: "Keep moist.".to_string(),
			photo_uri: "https://storage.example/fern.svg".to_string(),
			environments: BTreeSet::from(["bathroom".to_string(), "kitchen".to_string()]),
			frequency: Frequency { times: 3, repeat_every: RepeatEvery::Week },
			date_time_notification: datetime!(2026-10-20 07:30 -3),
		}
	}

	#[test]
	fn row_conversion_keeps_offset_and_environments() {
		let row = to_row(&fern(), datetime!(2026-10-15 12:00 UTC)).expect("to_row");

		assert_eq!(row.date_time_notification, "2026-10-20T07:30:00-03:00");
		assert_eq!(row.trigger_id, None);
		assert_eq!(from_row(row).expect("from_row"), fern());
	}

	#[test]
	fn unknown_repeat_every_is_corrupt() {
		let mut row = to_row(&fern(), datetime!(2026-10-15 12:00 UTC)).expect("to_row");

		row.frequency_repeat_every = "month".to_string();

		let err = from_row(row).expect_err("Expected corrupt row.");

		assert!(matches!(err, Error::Storage { .. }), "Unexpected error: {err}");
	}
}
