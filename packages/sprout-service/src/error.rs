use sprout_domain::ValidationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Scheduling error: {message}")]
	Scheduling { message: String },
	#[error("Validation error: {message}")]
	Validation { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Catalog error: {message}")]
	Catalog { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<sprout_storage::Error> for Error {
	fn from(err: sprout_storage::Error) -> Self {
		match err {
			sprout_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			sprout_storage::Error::InvalidArgument(message) => Self::Validation { message },
		}
	}
}

// Every trigger failure is a scheduling failure, including the local platform's own storage.
impl From<sprout_notify::Error> for Error {
	fn from(err: sprout_notify::Error) -> Self {
		Self::Scheduling { message: err.to_string() }
	}
}

impl From<ValidationError> for Error {
	fn from(err: ValidationError) -> Self {
		Self::Validation { message: err.to_string() }
	}
}

impl From<sprout_catalog::Error> for Error {
	fn from(err: sprout_catalog::Error) -> Self {
		Self::Catalog { message: err.to_string() }
	}
}
