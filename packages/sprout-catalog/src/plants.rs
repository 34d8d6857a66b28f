use serde_json::Value;

use sprout_domain::CatalogPlant;

use crate::Result;

const RESOURCE: &str = "plants";

/// `GET plants`, ordered by name.
pub async fn fetch_plants(cfg: &sprout_config::Catalog) -> Result<Vec<CatalogPlant>> {
	let json = crate::get_sorted(cfg, RESOURCE, "name").await?;

	parse_plants(json)
}

fn parse_plants(json: Value) -> Result<Vec<CatalogPlant>> {
	crate::parse_list(json, RESOURCE)
}
