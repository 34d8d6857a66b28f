pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Notification permission is not granted.")]
	PermissionDenied,
	#[error("Notification platform unavailable: {message}")]
	Unavailable { message: String },
	#[error("Corrupt trigger for plant {plant_id}: {message}")]
	Corrupt { plant_id: i64, message: String },
	#[error(transparent)]
	Storage(#[from] sprout_storage::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}
