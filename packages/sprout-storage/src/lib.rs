pub mod db;
pub mod models;
pub mod plants;
pub mod schema;
pub mod settings;
pub mod triggers;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
