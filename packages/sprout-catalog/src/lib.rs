//! Read-only client for the remote plant catalog.

pub mod environments;
pub mod plants;

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::{
	Client,
	header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub fn default_headers(extra: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

	for (key, value) in extra {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: format!("Catalog header {key} must be a string."),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(headers)
}

fn client(cfg: &sprout_config::Catalog) -> Result<Client> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.default_headers(default_headers(&cfg.default_headers)?)
		.build()?;

	Ok(client)
}

async fn get_sorted(cfg: &sprout_config::Catalog, resource: &str, sort_by: &str) -> Result<Value> {
	let url = format!("{}/{resource}", cfg.api_base);
	let res = client(cfg)?.get(url).query(&[("_sort", sort_by), ("_order", "asc")]).send().await?;

	Ok(res.error_for_status()?.json().await?)
}

fn parse_list<T>(json: Value, resource: &str) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	let Value::Array(items) = json else {
		return Err(Error::InvalidResponse {
			message: format!("Catalog {resource} response must be a JSON array."),
		});
	};
	let mut out = Vec::with_capacity(items.len());

	for (index, item) in items.into_iter().enumerate() {
		let parsed = serde_json::from_value(item).map_err(|err| Error::InvalidResponse {
			message: format!("Catalog {resource} item {index} is malformed: {err}."),
		})?;

		out.push(parsed);
	}

	Ok(out)
}
