pub mod catalog;
pub mod fired;
pub mod list;
pub mod reconcile;
pub mod remove;
pub mod reschedule;
pub mod save;
pub mod select;
pub mod user;

mod error;
mod records;

pub use error::{Error, Result};
pub use fired::FiredReminder;
pub use reconcile::ReconcileReport;

use std::sync::Arc;

use sprout_catalog::{environments, plants};
use sprout_config::Config;
use sprout_domain::{CatalogPlant, Environment};
use sprout_notify::{
	BoxFuture, LocalPlatform, NotificationContent, NotificationPlatform, NotificationScheduler,
};
use sprout_storage::db::Db;

pub trait CatalogProvider
where
	Self: Send + Sync,
{
	fn environments<'a>(
		&'a self,
		cfg: &'a sprout_config::Catalog,
	) -> BoxFuture<'a, sprout_catalog::Result<Vec<Environment>>>;

	fn plants<'a>(
		&'a self,
		cfg: &'a sprout_config::Catalog,
	) -> BoxFuture<'a, sprout_catalog::Result<Vec<CatalogPlant>>>;
}

pub struct SproutService {
	pub cfg: Config,
	pub db: Db,
	pub scheduler: NotificationScheduler,
	pub catalog: Arc<dyn CatalogProvider>,
}
impl SproutService {
	pub fn new(cfg: Config, db: Db) -> Self {
		let platform = Arc::new(LocalPlatform::new(db.clone(), &cfg.notifications));

		Self::with_parts(cfg, db, platform, Arc::new(RemoteCatalog))
	}

	pub fn with_parts(
		cfg: Config,
		db: Db,
		platform: Arc<dyn NotificationPlatform>,
		catalog: Arc<dyn CatalogProvider>,
	) -> Self {
		let content = NotificationContent::from_config(&cfg.notifications);
		let scheduler = NotificationScheduler::new(platform, content);

		Self { cfg, db, scheduler, catalog }
	}
}

struct RemoteCatalog;
impl CatalogProvider for RemoteCatalog {
	fn environments<'a>(
		&'a self,
		cfg: &'a sprout_config::Catalog,
	) -> BoxFuture<'a, sprout_catalog::Result<Vec<Environment>>> {
		Box::pin(environments::fetch_environments(cfg))
	}

	fn plants<'a>(
		&'a self,
		cfg: &'a sprout_config::Catalog,
	) -> BoxFuture<'a, sprout_catalog::Result<Vec<CatalogPlant>>> {
		Box::pin(plants::fetch_plants(cfg))
	}
}
