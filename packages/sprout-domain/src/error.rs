#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Reminder time {at} is not in the future.")]
	PastReminder { at: String },
	#[error("frequency.times must be at least 1.")]
	ZeroFrequency,
	#[error("{field} must be non-empty.")]
	Blank { field: &'static str },
}
