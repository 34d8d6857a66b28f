use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::ValidationError;

const DAYS_PER_WEEK: u32 = 7;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatEvery {
	Day,
	Week,
}
impl RepeatEvery {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Day => "day",
			Self::Week => "week",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"day" => Some(Self::Day),
			"week" => Some(Self::Week),
			_ => None,
		}
	}
}

/// How often a plant wants water: `times` waterings per `repeat_every`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Frequency {
	pub times: u32,
	pub repeat_every: RepeatEvery,
}
impl Frequency {
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.times == 0 {
			return Err(ValidationError::ZeroFrequency);
		}

		Ok(())
	}

	/// Whole days between two waterings. Weekly schedules truncate `7 / times` and never go
	/// below one day; daily schedules always advance by one day.
	pub fn interval(&self) -> Duration {
		let days = match self.repeat_every {
			RepeatEvery::Week => (DAYS_PER_WEEK / self.times.max(1)).max(1),
			RepeatEvery::Day => 1,
		};

		Duration::days(i64::from(days))
	}

	/// First occurrence of the schedule anchored at `due` that is strictly after `now`.
	pub fn next_after(&self, due: OffsetDateTime, now: OffsetDateTime) -> OffsetDateTime {
		if due > now {
			return due;
		}

		let step = self.interval().whole_seconds();
		let behind = (now - due).whole_seconds();
		let steps = behind / step + 1;

		due + Duration::seconds(step.saturating_mul(steps))
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlantRecord {
	pub id: i64,
	pub name: String,
	pub about: String,
	pub water_tips: String,
	pub photo_uri: String,
	pub environments: BTreeSet<String>,
	pub frequency: Frequency,
	#[serde(with = "crate::time_serde")]
	pub date_time_notification: OffsetDateTime,
}
impl PlantRecord {
	/// `HH:mm` of the next reminder in the offset it was scheduled with.
	pub fn hour(&self) -> String {
		format!(
			"{:02}:{:02}",
			self.date_time_notification.hour(),
			self.date_time_notification.minute()
		)
	}

	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.name.trim().is_empty() {
			return Err(ValidationError::Blank { field: "name" });
		}

		self.frequency.validate()
	}

	pub fn with_notification(mut self, at: OffsetDateTime) -> Self {
		self.date_time_notification = at;

		self
	}
}
