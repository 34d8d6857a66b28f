mod error;

pub use error::{Error, Result};

use std::{
	env, fs, io,
	path::{Path, PathBuf},
};

use serde_json::Map;
use uuid::Uuid;

use sprout_config::{Catalog, Config, Notifications, Service, Sqlite, Storage};

// SQLite in WAL mode keeps these next to the database file.
const SIDECAR_SUFFIXES: [&str; 3] = ["", "-wal", "-shm"];

/// A throwaway SQLite database file under the system temp dir. Removed by [`cleanup`] or, as a
/// fallback, on drop.
///
/// [`cleanup`]: TestDatabase::cleanup
pub struct TestDatabase {
	name: String,
	path: PathBuf,
	cleaned: bool,
}
impl TestDatabase {
	pub fn new() -> Result<Self> {
		let name = format!("sprout_test_{}", Uuid::new_v4().simple());
		let dir = env::temp_dir();

		if !dir.is_dir() {
			return Err(Error::Message(format!("Temp dir {dir:?} is not a directory.")));
		}

		let path = dir.join(format!("{name}.db"));

		Ok(Self { name, path, cleaned: false })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn sqlite_config(&self) -> Sqlite {
		Sqlite { path: self.path.clone(), pool_max_conns: 1, busy_timeout_ms: 5_000 }
	}

	pub fn config(&self) -> Config {
		sample_config(self.sqlite_config())
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		remove_database_files(&self.path)?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestDatabase {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Test database cleanup failed: {err}.");
		}
	}
}

pub fn sample_config(sqlite: Sqlite) -> Config {
	Config {
		service: Service { log_level: "debug".to_string() },
		storage: Storage { sqlite },
		notifications: Notifications {
			enabled: true,
			poll_interval_ms: 50,
			title: "Heeey, 🌱".to_string(),
			body: "It's time to take care of your {name}.".to_string(),
		},
		catalog: Catalog {
			api_base: "http://localhost:3333".to_string(),
			timeout_ms: 1_000,
			default_headers: Map::new(),
		},
	}
}

fn remove_database_files(path: &Path) -> Result<()> {
	for suffix in SIDECAR_SUFFIXES {
		let mut file = path.as_os_str().to_owned();

		file.push(suffix);

		match fs::remove_file(&file) {
			Ok(()) => {},
			Err(err) if err.kind() == io::ErrorKind::NotFound => {},
			Err(err) => return Err(err.into()),
		}
	}

	Ok(())
}
