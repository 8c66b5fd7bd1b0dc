//! Client-level error types shared across validation, admission, and transport.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Document or credential failed pre-submission checks; never retried, admission is never
	/// attempted.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Network or endpoint failure after admission; the deferred capacity release still fires.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Admission wait aborted; no reservation was taken.
	#[error(transparent)]
	Interrupted(#[from] InterruptedError),
}

/// Pre-submission failures raised before any capacity is reserved.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Document failed the validator's structural or business rules.
	#[error("Document failed pre-submission validation.")]
	InvalidDocument,
	/// Client token was absent or blank.
	#[error("Client token must not be empty.")]
	MissingClientToken,
}

/// Transport-level failures (network, endpoint, response decoding).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the rollout endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the rollout endpoint.")]
	Io(#[from] std::io::Error),
	/// Endpoint returned a non-success status.
	#[error("Rollout endpoint returned a non-success status: {status}.")]
	Status {
		/// HTTP status code returned by the endpoint.
		status: u16,
	},
	/// Endpoint responded with a body that could not be parsed.
	#[error("Rollout endpoint returned a malformed response body.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Raised when a caller waiting for admission is cancelled because the gate closed.
///
/// The counter is never incremented on this path, so an interrupted wait leaks no reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
#[error("Submission was interrupted while waiting for admission.")]
pub struct InterruptedError;
