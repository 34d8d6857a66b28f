use time::OffsetDateTime;

use sprout_domain::ValidationError;
use sprout_storage::settings::{self, USER_NAME_KEY};

use crate::{Result, SproutService, records};

impl SproutService {
	/// Stores the trimmed display name and returns it.
	pub async fn set_user_name(&self, name: &str) -> Result<String> {
		let name = name.trim();

		if name.is_empty() {
			return Err(ValidationError::Blank { field: "user_name" }.into());
		}

		let updated_at = records::format_instant(OffsetDateTime::now_utc())?;

		settings::set_setting(&self.db, USER_NAME_KEY, name, &updated_at).await?;

		Ok(name.to_string())
	}

	pub async fn user_name(&self) -> Result<Option<String>> {
		Ok(settings::get_setting(&self.db, USER_NAME_KEY).await?)
	}
}
