//! Client-level error types shared across sessions, exchanges, and resource calls.

// self
use crate::{_prelude::*, auth::PermissionLevel};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token endpoint rejected a password or refresh exchange.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Temporary upstream failure.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The declared identity ranks below the endpoint's documented permission level.
	#[error("Endpoint `{endpoint}` requires {required} permissions but the session holds {held}.")]
	InsufficientPermission {
		/// Endpoint name.
		endpoint: &'static str,
		/// Level documented for the endpoint.
		required: PermissionLevel,
		/// Level declared for the authenticated identity.
		held: PermissionLevel,
	},
}

/// Configuration and validation failures raised before any request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Service descriptor contains an invalid URL.
	#[error("Descriptor contains an invalid URL.")]
	InvalidDescriptor {
		/// Underlying parsing failure.
		#[source]
		source: oauth2::url::ParseError,
	},
	/// Service descriptor failed validation.
	#[error(transparent)]
	Descriptor(#[from] crate::service::ServiceDescriptorError),
	/// A mandatory credential field was absent or blank.
	#[error("Credential field `{field}` is required.")]
	MissingCredential {
		/// Name of the missing field.
		field: &'static str,
	},
	/// Credential configuration could not be deserialized.
	#[error("Credential configuration is malformed.")]
	CredentialParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
	},
	/// No access token is held, so resource calls cannot be signed.
	#[error("Session holds no access token; authenticate first.")]
	MissingAccessToken,
	/// No refresh token is held, so the refresh grant cannot be attempted.
	#[error("Session holds no refresh token; authenticate first.")]
	MissingRefreshToken,
	/// Token endpoint accepted the exchange but omitted a refresh token.
	#[error("Token endpoint response is missing refresh_token.")]
	MissingRefreshTokenInResponse,
	/// The token endpoint returned an excessively large `expires_in`.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
	/// Endpoint path template and supplied identifiers disagree.
	#[error("Endpoint `{endpoint}` expects {expected} path parameter(s) but received {actual}.")]
	PathParameters {
		/// Endpoint name.
		endpoint: &'static str,
		/// Placeholder count in the template.
		expected: usize,
		/// Identifier count supplied by the caller.
		actual: usize,
	},
	/// API base URL cannot carry path segments.
	#[error("API base URL cannot be used as a base for endpoint paths.")]
	OpaqueApiBase,
	/// Token pair could not be assembled from the exchange response.
	#[error(transparent)]
	TokenPair(#[from] crate::auth::TokenPairBuilderError),
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	JsonBody(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token endpoint rejection carrying the provider's OAuth error fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthError {
	/// Provider-supplied OAuth `error` code.
	pub error: String,
	/// Provider-supplied `error_description`, when present.
	pub error_description: Option<String>,
	/// HTTP status code, when available.
	pub status: Option<u16>,
}
impl AuthError {
	/// Human-readable description: the provider's `error_description`, else the `error` code.
	pub fn description(&self) -> &str {
		self.error_description.as_deref().unwrap_or(&self.error)
	}
}
impl Display for AuthError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Token endpoint rejected the exchange: {}.", self.description())
	}
}
impl StdError for AuthError {}

/// Temporary failure variants.
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// Upstream returned an unexpected but non-fatal response, or the call timed out.
	#[error("Humanity API call failed transiently: {message}")]
	Upstream {
		/// Provider- or client-supplied message summarizing the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Token endpoint responded with malformed JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Resource endpoint responded with a body that is not JSON.
	#[error("Endpoint `{endpoint}` returned malformed JSON.")]
	ResponseParse {
		/// Endpoint name.
		endpoint: &'static str,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code.
		status: u16,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Humanity API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Humanity API.")]
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

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn auth_error_prefers_provider_description() {
		let described = AuthError {
			error: "invalid_grant".into(),
			error_description: Some("The user credentials were incorrect".into()),
			status: Some(400),
		};

		assert_eq!(described.description(), "The user credentials were incorrect");
		assert_eq!(
			Error::from(described).to_string(),
			"Token endpoint rejected the exchange: The user credentials were incorrect."
		);

		let bare = AuthError { error: "invalid_client".into(), error_description: None, status: None };

		assert_eq!(bare.description(), "invalid_client");
	}

	#[test]
	fn insufficient_permission_names_both_levels() {
		let err = Error::InsufficientPermission {
			endpoint: "put_company_settings",
			required: PermissionLevel::Manager,
			held: PermissionLevel::Employee,
		};

		assert_eq!(
			err.to_string(),
			"Endpoint `put_company_settings` requires manager permissions but the session holds employee."
		);
	}
}
