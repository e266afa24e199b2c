//! Error types for the test-support crate.
//!
//! This module defines the error types used throughout the broccoli-test crate.

use thiserror::Error;

/// Errors that can occur while loading fixtures or registering stubs.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// No fixture file exists for the requested logical resource name.
	///
	/// The message carries the name exactly as requested, for diagnostics.
	#[error("Could not find resource [{0}]")]
	ResourceNotFound(String),

	/// I/O operation failed.
	///
	/// Covers read failures and invalid UTF-8 content (surfaced as
	/// [`std::io::ErrorKind::InvalidData`]).
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_resource_not_found_message_carries_name() {
		let err = FixtureError::ResourceNotFound("./arAboutResponse.json".to_string());
		assert_eq!(
			err.to_string(),
			"Could not find resource [./arAboutResponse.json]"
		);
	}

	#[rstest]
	fn test_io_error_conversion() {
		let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
		let err: FixtureError = io.into();
		assert!(matches!(err, FixtureError::Io(_)));
	}
}
