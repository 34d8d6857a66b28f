use sprout_domain::{ALL_ENVIRONMENTS, CatalogPlant, Environment};

use crate::{Result, SproutService};

impl SproutService {
	/// Catalog environments with the synthetic "all" entry first.
	pub async fn environments(&self) -> Result<Vec<Environment>> {
		let fetched = self.catalog.environments(&self.cfg.catalog).await?;
		let mut out = Vec::with_capacity(fetched.len() + 1);

		out.push(Environment::all());
		out.extend(fetched.into_iter().filter(|env| env.key != ALL_ENVIRONMENTS));

		Ok(out)
	}

	/// Catalog plants growing in `environment`. `None` and `"all"` skip filtering.
	pub async fn plants(&self, environment: Option<&str>) -> Result<Vec<CatalogPlant>> {
		let plants = self.catalog.plants(&self.cfg.catalog).await?;
		let environment = environment.unwrap_or(ALL_ENVIRONMENTS);

		Ok(plants.into_iter().filter(|plant| plant.grows_in(environment)).collect())
	}
}
