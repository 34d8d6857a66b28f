use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Frequency, PlantRecord};

/// Key of the synthetic environment that matches every plant.
pub const ALL_ENVIRONMENTS: &str = "all";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Environment {
	pub key: String,
	pub title: String,
}
impl Environment {
	pub fn all() -> Self {
		Self { key: ALL_ENVIRONMENTS.to_string(), title: "All".to_string() }
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CatalogPlant {
	pub id: i64,
	pub name: String,
	pub about: String,
	pub water_tips: String,
	pub photo: String,
	#[serde(default)]
	pub environments: Vec<String>,
	pub frequency: Frequency,
}
impl CatalogPlant {
	pub fn grows_in(&self, environment: &str) -> bool {
		environment == ALL_ENVIRONMENTS || self.environments.iter().any(|env| env == environment)
	}

	pub fn into_record(self, date_time_notification: OffsetDateTime) -> PlantRecord {
		PlantRecord {
			id: self.id,
			name: self.name,
			about: self.about,
			water_tips: self.water_tips,
			photo_uri: self.photo,
			environments: self.environments.into_iter().collect(),
			frequency: self.frequency,
			date_time_notification,
		}
	}
}
