use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use sprout_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml() -> String {
	SAMPLE_CONFIG_TEMPLATE_TOML.to_string()
}

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let mut table = root.as_table_mut().expect("Template config must be a table.");

	for part in section.split('.') {
		table = table
			.get_mut(part)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Template config must include [{section}]."));
	}

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("sprout_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> sprout_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = sprout_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn base_config() -> Config {
	toml::from_str(&sample_toml()).expect("Failed to parse test config.")
}

#[test]
fn sample_config_loads_and_normalizes() {
	let cfg = load_payload(sample_toml()).expect("Sample config must load.");

	assert_eq!(cfg.catalog.api_base, "http://localhost:3333");
	assert_eq!(cfg.storage.sqlite.pool_max_conns, 1);
	assert!(cfg.notifications.enabled);
	assert_eq!(cfg.notifications.title, "Heeey, 🌱");
}

#[test]
fn optional_fields_fall_back_to_defaults() {
	let payload = "\
[service]
log_level = \"debug\"

[storage.sqlite]
path = \"plants.db\"

[notifications]
title = \"Water time\"
body = \"Water the {name}.\"

[catalog]
api_base = \"https://catalog.example\"
timeout_ms = 2000
"
	.to_string();
	let cfg = load_payload(payload).expect("Minimal config must load.");

	assert_eq!(cfg.storage.sqlite.pool_max_conns, 1);
	assert_eq!(cfg.storage.sqlite.busy_timeout_ms, 5_000);
	assert_eq!(cfg.notifications.poll_interval_ms, 1_000);
	assert!(cfg.notifications.enabled);
	assert!(cfg.catalog.default_headers.is_empty());
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("sprout_config_test_does_not_exist.toml");
	let err = sprout_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::Read { .. }), "Unexpected error: {err}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err =
		load_payload("[service\nlog_level = ".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::Parse { .. }), "Unexpected error: {err}");
}

#[test]
fn body_must_reference_plant_name() {
	let payload =
		sample_toml_with("notifications", "body", Value::String("Water your plant.".to_string()));
	let err = load_payload(payload).expect_err("Expected body validation error.");

	assert!(
		err.to_string().contains("notifications.body must contain the {name} placeholder."),
		"Unexpected error: {err}"
	);
}

#[test]
fn poll_interval_must_be_positive() {
	let payload = sample_toml_with("notifications", "poll_interval_ms", Value::Integer(0));
	let err = load_payload(payload).expect_err("Expected poll interval validation error.");

	assert!(
		err.to_string().contains("notifications.poll_interval_ms must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn pool_must_allow_a_connection() {
	let mut cfg = base_config();

	cfg.storage.sqlite.pool_max_conns = 0;

	let err = sprout_config::validate(&cfg).expect_err("Expected pool validation error.");

	assert!(
		err.to_string().contains("storage.sqlite.pool_max_conns must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn catalog_base_must_be_http() {
	let mut cfg = base_config();

	cfg.catalog.api_base = "ftp://catalog.example".to_string();

	let err = sprout_config::validate(&cfg).expect_err("Expected api_base validation error.");

	assert!(
		err.to_string().contains("catalog.api_base must be an http or https URL."),
		"Unexpected error: {err}"
	);
}

#[test]
fn catalog_headers_must_be_strings() {
	let mut cfg = base_config();

	cfg.catalog.default_headers.insert("x-retries".to_string(), serde_json::json!(3));

	let err = sprout_config::validate(&cfg).expect_err("Expected header validation error.");

	assert!(
		err.to_string().contains("catalog.default_headers.x-retries must be a string."),
		"Unexpected error: {err}"
	);
}

#[test]
fn blank_title_is_rejected_after_trimming() {
	let payload = sample_toml_with("notifications", "title", Value::String("   ".to_string()));
	let err = load_payload(payload).expect_err("Expected title validation error.");

	assert!(
		err.to_string().contains("notifications.title must be non-empty."),
		"Unexpected error: {err}"
	);
}
