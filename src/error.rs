//! Client-level error types shared across the credential manager, dispatcher, and resources.

// self
use crate::{_prelude::*, http::Method};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// No usable credential source could resolve a token.
	#[error(transparent)]
	Credential(#[from] CredentialError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The per-call timer fired before a response arrived.
	#[error("{method} {url} timed out.")]
	TimedOut {
		/// HTTP method of the timed-out call.
		method: Method,
		/// Fully composed request URL.
		url: Url,
	},
	/// The caller's cancellation token fired before a response arrived.
	#[error("{method} {url} was aborted by the caller.")]
	Aborted {
		/// HTTP method of the aborted call.
		method: Method,
		/// Fully composed request URL.
		url: Url,
	},
	/// Transport-level failure not attributable to timeout or cancellation.
	#[error("{method} {url} failed before a response was received.")]
	Fetch {
		/// HTTP method of the failed call.
		method: Method,
		/// Fully composed request URL.
		url: Url,
		/// Underlying transport failure.
		#[source]
		source: TransportError,
	},
	/// Non-2xx terminal response normalized at the boundary.
	#[error(transparent)]
	Api(Box<ApiError>),
	/// A 2xx response body did not match the caller's expected shape.
	#[error("{method} {url} returned a body that failed to decode.")]
	Decode {
		/// HTTP method of the call.
		method: Method,
		/// Fully composed request URL.
		url: Url,
		/// Structured decoding failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns the HTTP status when this is an API error.
	pub fn status(&self) -> Option<u16> {
		self.api().map(|e| e.status)
	}

	/// Returns the normalized API error payload, if any.
	pub fn api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}
}
impl From<ApiError> for Error {
	fn from(e: ApiError) -> Self {
		Self::Api(Box::new(e))
	}
}

/// Failures raised while resolving or parsing credentials.
#[derive(Debug, ThisError)]
pub enum CredentialError {
	/// No provider and no client id/secret pair is configured.
	#[error("Client credentials are required to fetch an access token.")]
	MissingCredentials,
	/// Token endpoint response did not carry an access token field.
	#[error("Token response did not include an access token.")]
	MissingAccessToken,
	/// Token endpoint responded with a body that could not be decoded.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponseParse {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration and construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The configured base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The configured base URL cannot serve as a base for endpoint paths.
	#[error("Base URL must be a hierarchical http(s) URL.")]
	UnsupportedBaseUrl,
	/// No HTTP transport is available.
	#[error(
		"No HTTP transport is available. Enable the `reqwest` feature or supply a transport via the builder."
	)]
	MissingTransport,
	/// A request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	SerializeBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while executing the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while executing the request.")]
	Io(#[from] std::io::Error),
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

/// Normalized HTTP-status error carrying full diagnostic context.
///
/// Constructed at the boundary for every non-2xx terminal response, including
/// token endpoint and revocation failures.
#[derive(Debug, ThisError)]
#[error("{method} {url} failed with status {status}: {message}")]
pub struct ApiError {
	/// HTTP status of the terminal response.
	pub status: u16,
	/// Upstream error message (body `message`/`error`, else the status reason).
	pub message: String,
	/// Upstream error code (body `code`/`errorCode`), when present.
	pub code: Option<String>,
	/// Structured validation details (body `errors`/`details`), when present.
	pub details: Option<Value>,
	/// Request id echoed by the API, when present.
	pub request_id: Option<String>,
	/// Parsed response body as returned by the server.
	pub response_body: Option<Value>,
	/// HTTP method of the failed call.
	pub method: Method,
	/// Fully composed request URL.
	pub url: Url,
}
