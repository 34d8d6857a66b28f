pub mod catalog;
pub mod plant;
pub mod schedule;
pub mod time_serde;

mod error;

pub use catalog::{ALL_ENVIRONMENTS, CatalogPlant, Environment};
pub use error::ValidationError;
pub use plant::{Frequency, PlantRecord, RepeatEvery};
pub use schedule::{NextWatering, next_watering, normalize_fire_at, validate_reminder_time};
