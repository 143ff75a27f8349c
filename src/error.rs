//! Client-level error types shared across authentication and gateway operations.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller-side precondition failed before any network I/O.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Gateway answered with a non-2xx status.
	#[error(transparent)]
	HttpStatus(Box<HttpStatusError>),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Gateway answered 2xx with a body that is not the expected JSON.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
impl From<HttpStatusError> for Error {
	fn from(e: HttpStatusError) -> Self {
		Self::HttpStatus(Box::new(e))
	}
}
impl Error {
	/// Returns the HTTP status attached to the failure, when the gateway produced one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::HttpStatus(e) => Some(e.status),
			Self::Decode(e) => Some(e.status),
			Self::Transport(TransportError::Network(e)) => e.status().map(|code| code.as_u16()),
			_ => None,
		}
	}
}

/// Precondition failures raised by operation methods.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// App key or app secret is absent from the client configuration.
	#[error("App key and app secret must be provided for authentication.")]
	MissingCredentials,
}

/// Configuration failures raised while resolving endpoints or loading settings.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL or endpoint path cannot be parsed.
	#[error("Gateway URL is invalid.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Environment name is neither `sandbox` nor `production`.
	#[error("Unknown environment `{0}`; expected `sandbox` or `production`.")]
	UnknownEnvironment(String),
	/// Required environment variable is not set.
	#[error("Environment variable `{0}` is not set.")]
	MissingVariable(&'static str),
	/// Request timestamp could not be rendered.
	#[error("Request timestamp could not be formatted.")]
	TimestampFormat(#[from] time::error::Format),
}
impl From<url::ParseError> for ConfigError {
	fn from(source: url::ParseError) -> Self {
		Self::InvalidUrl { source }
	}
}

/// Non-2xx response returned by the OAuth or an operation endpoint.
#[derive(Clone, Debug, ThisError)]
#[error("Gateway returned HTTP {status} from {url}.")]
pub struct HttpStatusError {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body, decoded lossily as UTF-8.
	pub body: String,
	/// URL that produced the response.
	pub url: Url,
	/// Retry-After hint from upstream, if supplied. Surfaced only; never acted upon.
	pub retry_after: Option<Duration>,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the gateway.")]
	Network(#[source] ReqwestError),
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::Network(e)
	}
}

/// Successful response whose body could not be decoded into the expected shape.
///
/// Covers both invalid JSON and valid JSON of the wrong type, such as an array where an
/// object is expected; the message carries the underlying cause.
#[derive(Debug, ThisError)]
#[error("Gateway response body could not be decoded: {source}.")]
pub struct DecodeError {
	/// Structured parsing failure, including the offending JSON path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response.
	pub status: u16,
}
