//! Error handling for the OOPSpam API client.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OopSpamError>;

#[derive(Error, Debug)]
pub enum OopSpamError {
	/// The request body could not be serialized; nothing was sent.
	#[error("Error marshaling request: {0}")]
	EncodeError(#[source] serde_json::Error),

	/// The service answered 200 but the body did not match the expected shape.
	#[error("Error decoding response: {0}")]
	DecodeError(#[source] serde_json::Error),

	/// The service answered with a status other than 200.
	#[error("API error: status code {status}, body: {body}")]
	ApiError { status: u16, body: String },

	#[error("Configuration error: {0}")]
	ConfigError(String),

	#[error("URL parsing error: {0}")]
	ParseError(#[from] url::ParseError),

	#[cfg(feature = "async")]
	#[error("Invalid HTTP header value: {0}")]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

	#[cfg(feature = "async")]
	#[error("Network error: {0}")]
	NetworkError(#[from] reqwest::Error),

	#[cfg(feature = "sync")]
	#[error("Invalid HTTP header value: {0}")]
	InvalidHeaderValue(#[from] attohttpc::header::InvalidHeaderValue),

	#[cfg(feature = "sync")]
	#[error("Network error: {0}")]
	NetworkError(#[from] attohttpc::Error),
}

impl OopSpamError {
	/// HTTP status returned by the service, if this is an API error.
	pub fn status(&self) -> Option<u16> {
		match self {
			OopSpamError::ApiError { status, .. } => Some(*status),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_error_reports_status_and_body() {
		let err = OopSpamError::ApiError {
			status: 429,
			body: "rate limited".to_string(),
		};
		assert_eq!(err.status(), Some(429));
		assert_eq!(err.to_string(), "API error: status code 429, body: rate limited");
	}

	#[test]
	fn non_api_errors_have_no_status() {
		let err = OopSpamError::ConfigError("missing key".to_string());
		assert_eq!(err.status(), None);
	}
}
