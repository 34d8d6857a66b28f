use time::{Duration, OffsetDateTime};

use crate::{PlantRecord, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextWatering {
	pub plant_id: i64,
	pub name: String,
	pub due_at: OffsetDateTime,
	/// Zero when the reminder is already due.
	pub due_in: Duration,
}
impl NextWatering {
	pub fn message(&self) -> String {
		if self.due_in.is_zero() {
			return format!("Don't forget to water the {} now.", self.name);
		}

		format!("Don't forget to water the {} in {}.", self.name, describe_distance(self.due_in))
	}
}

/// Input-boundary check for user-picked reminder times.
pub fn validate_reminder_time(
	at: OffsetDateTime,
	now: OffsetDateTime,
) -> Result<(), ValidationError> {
	if at <= now {
		let at = crate::time_serde::format(&at).unwrap_or_else(|_| at.to_string());

		return Err(ValidationError::PastReminder { at });
	}

	Ok(())
}

/// Trigger instant actually registered for `at`. Past instants fire immediately instead of
/// being dropped; the result keeps the offset of `at`.
pub fn normalize_fire_at(at: OffsetDateTime, now: OffsetDateTime) -> OffsetDateTime {
	if at < now { now.to_offset(at.offset()) } else { at }
}

/// Summary for the soonest record. `records` may be in any order.
pub fn next_watering(records: &[PlantRecord], now: OffsetDateTime) -> Option<NextWatering> {
	let soonest = records.iter().min_by_key(|record| (record.date_time_notification, record.id))?;
	let due_in = soonest.date_time_notification - now;

	Some(NextWatering {
		plant_id: soonest.id,
		name: soonest.name.clone(),
		due_at: soonest.date_time_notification,
		due_in: if due_in.is_negative() { Duration::ZERO } else { due_in },
	})
}

fn describe_distance(distance: Duration) -> String {
	let minutes = distance.whole_minutes();
	let hours = distance.whole_hours();
	let days = distance.whole_days();

	if minutes < 1 {
		"less than a minute".to_string()
	} else if hours < 1 {
		plural(minutes, "minute")
	} else if days < 1 {
		plural(hours, "hour")
	} else {
		plural(days, "day")
	}
}

fn plural(count: i64, unit: &str) -> String {
	if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use time::macros::datetime;

	use super::*;
	use crate::{Frequency, RepeatEvery};

	fn record(id: i64, name: &str, at: OffsetDateTime) -> PlantRecord {
		PlantRecord {
			id,
			name: name.to_string(),
			about: String::new(),
			water_tips: String::new(),
			photo_uri: String::new(),
			environments: BTreeSet::new(),
			frequency: Frequency { times: 1, repeat_every: RepeatEvery::Week },
			date_time_notification: at,
		}
	}

	#[test]
	fn past_and_present_times_are_rejected() {
		let now = datetime!(2026-10-15 12:00 UTC);

		assert!(validate_reminder_time(now, now).is_err());
		assert!(validate_reminder_time(now - Duration::minutes(1), now).is_err());
		assert!(validate_reminder_time(now + Duration::minutes(1), now).is_ok());
	}

	#[test]
	fn normalize_clamps_to_now_in_original_offset() {
		let now = datetime!(2026-10-15 12:00 UTC);
		let at = datetime!(2026-10-15 06:00 -3);
		let fire_at = normalize_fire_at(at, now);

		assert_eq!(fire_at, now);
		assert_eq!(fire_at.offset(), at.offset());
		assert_eq!(normalize_fire_at(now + Duration::hours(1), now), now + Duration::hours(1));
	}

	#[test]
	fn next_watering_picks_soonest() {
		let now = datetime!(2026-10-15 12:00 UTC);
		let records = vec![
			record(2, "Fern", now + Duration::days(2)),
			record(1, "Aloe", now + Duration::hours(2)),
		];
		let next = next_watering(&records, now).expect("Expected a summary.");

		assert_eq!(next.plant_id, 1);
		assert_eq!(next.message(), "Don't forget to water the Aloe in 2 hours.");
	}

	#[test]
	fn overdue_reminder_reads_as_now() {
		let now = datetime!(2026-10-15 12:00 UTC);
		let next = next_watering(&[record(1, "Aloe", now - Duration::hours(1))], now)
			.expect("Expected a summary.");

		assert_eq!(next.due_in, Duration::ZERO);
		assert_eq!(next.message(), "Don't forget to water the Aloe now.");
	}

	#[test]
	fn empty_store_has_no_summary() {
		assert!(next_watering(&[], datetime!(2026-10-15 12:00 UTC)).is_none());
	}

	#[test]
	fn distances_pluralize() {
		assert_eq!(describe_distance(Duration::seconds(30)), "less than a minute");
		assert_eq!(describe_distance(Duration::minutes(1)), "1 minute");
		assert_eq!(describe_distance(Duration::minutes(45)), "45 minutes");
		assert_eq!(describe_distance(Duration::days(3)), "3 days");
	}
}
