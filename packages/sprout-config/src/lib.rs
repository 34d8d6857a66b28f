mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Notifications, Service, Sqlite, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config =
		toml::from_str(&raw).map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "storage.sqlite.path must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.sqlite.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.notifications.poll_interval_ms == 0 {
		return Err(Error::Validation {
			message: "notifications.poll_interval_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.notifications.title.is_empty() {
		return Err(Error::Validation {
			message: "notifications.title must be non-empty.".to_string(),
		});
	}
	if !cfg.notifications.body.contains("{name}") {
		return Err(Error::Validation {
			message: "notifications.body must contain the {name} placeholder.".to_string(),
		});
	}
	if cfg.catalog.api_base.is_empty() {
		return Err(Error::Validation {
			message: "catalog.api_base must be non-empty.".to_string(),
		});
	}
	if !cfg.catalog.api_base.starts_with("http://") && !cfg.catalog.api_base.starts_with("https://")
	{
		return Err(Error::Validation {
			message: "catalog.api_base must be an http or https URL.".to_string(),
		});
	}
	if cfg.catalog.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "catalog.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &cfg.catalog.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("catalog.default_headers.{key} must be a string."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
	cfg.notifications.title = cfg.notifications.title.trim().to_string();
	cfg.catalog.api_base = cfg.catalog.api_base.trim().trim_end_matches('/').to_string();
}
