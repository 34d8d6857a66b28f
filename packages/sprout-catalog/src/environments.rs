use serde_json::Value;

use sprout_domain::Environment;

use crate::Result;

const RESOURCE: &str = "plants_environments";

/// `GET plants_environments`, ordered by title.
pub async fn fetch_environments(cfg: &sprout_config::Catalog) -> Result<Vec<Environment>> {
	let json = crate::get_sorted(cfg, RESOURCE, "title").await?;

	parse_environments(json)
}

fn parse_environments(json: Value) -> Result<Vec<Environment>> {
	crate::parse_list(json, RESOURCE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_key_title_pairs() {
		let json = serde_json::json!([
			{ "key": "living_room", "title": "Living room" },
			{ "key": "bathroom", "title": "Bathroom" }
		]);
		let parsed = parse_environments(json).expect("parse failed");

		assert_eq!(parsed.len(), 2);
		assert_eq!(
			parsed[0],
			Environment { key: "living_room".into(), title: "Living room".into() }
		);
	}

	#[test]
	fn rejects_non_array_body() {
		let err =
			parse_environments(serde_json::json!({ "data": [] })).expect_err("expected error");

		assert!(err.to_string().contains("must be a JSON array"), "Unexpected error: {err}");
	}
}
