use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub notifications: Notifications,
	pub catalog: Catalog,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Storage {
	pub sqlite: Sqlite,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Sqlite {
	/// Database file. Created on first connect.
	pub path: PathBuf,
	#[serde(default = "default_pool_max_conns")]
	pub pool_max_conns: u32,
	#[serde(default = "default_busy_timeout_ms")]
	pub busy_timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Notifications {
	/// Whether the platform may register triggers at all. `false` behaves like a revoked
	/// notification permission.
	#[serde(default = "default_true")]
	pub enabled: bool,
	#[serde(default = "default_poll_interval_ms")]
	pub poll_interval_ms: u64,
	pub title: String,
	/// Body template. `{name}` is replaced by the plant name.
	pub body: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Catalog {
	pub api_base: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

fn default_pool_max_conns() -> u32 {
	1
}

fn default_busy_timeout_ms() -> u64 {
	5_000
}

fn default_poll_interval_ms() -> u64 {
	1_000
}

fn default_true() -> bool {
	true
}
