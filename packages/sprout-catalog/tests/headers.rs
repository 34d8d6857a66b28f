use reqwest::header::ACCEPT;
use serde_json::{Map, Value};

#[test]
fn sends_json_accept_by_default() {
	let headers = sprout_catalog::default_headers(&Map::new()).expect("Failed to build headers.");
	let value = headers.get(ACCEPT).expect("Missing accept header.");

	assert_eq!(value, "application/json");
}

#[test]
fn extra_headers_override_and_extend() {
	let mut extra = Map::new();

	extra.insert("x-api-key".to_string(), Value::String("secret".to_string()));

	let headers = sprout_catalog::default_headers(&extra).expect("Failed to build headers.");

	assert_eq!(headers.get("x-api-key").expect("Missing x-api-key header."), "secret");
}

#[test]
fn non_string_header_is_rejected() {
	let mut extra = Map::new();

	extra.insert("x-retries".to_string(), Value::from(3));

	let err = sprout_catalog::default_headers(&extra).expect_err("Expected header error.");

	assert!(err.to_string().contains("x-retries must be a string"), "Unexpected error: {err}");
}
