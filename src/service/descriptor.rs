//! Service descriptor data structures shared by sessions and the request dispatcher.

/// Builder API for assembling service descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Default Humanity OAuth 2.0 token endpoint.
pub const HUMANITY_TOKEN_ENDPOINT: &str = "https://www.humanity.com/oauth2/token.php";
/// Default Humanity v2 resource API base.
pub const HUMANITY_API_BASE: &str = "https://www.humanity.com/api/v2/";

/// Client authentication modes for token endpoint calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
	/// HTTP Basic with `client_id`/`client_secret`.
	ClientSecretBasic,
	#[default]
	/// Form POST body parameters for `client_id`/`client_secret`.
	ClientSecretPost,
}

/// Immutable service descriptor consumed by sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
	/// Token endpoint used for password and refresh exchanges.
	pub token_endpoint: Url,
	/// Base URL every endpoint path template is appended to.
	pub api_base: Url,
	/// Client authentication mechanism for the token endpoint.
	pub client_auth_method: ClientAuthMethod,
}
impl ServiceDescriptor {
	/// Creates a new builder seeded with the public Humanity endpoints.
	pub fn builder() -> ServiceDescriptorBuilder {
		ServiceDescriptorBuilder::new()
	}

	/// Descriptor for the public Humanity deployment.
	pub fn humanity() -> Result<Self, ServiceDescriptorError> {
		Self::builder().build()
	}
}
