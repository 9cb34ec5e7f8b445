// std
use std::net::IpAddr;
// self
use crate::{
	_prelude::*,
	service::{ClientAuthMethod, HUMANITY_API_BASE, HUMANITY_TOKEN_ENDPOINT, ServiceDescriptor},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ServiceDescriptorError {
	/// A default URL failed to parse.
	#[error("The {endpoint} URL is invalid: {source}.")]
	InvalidUrl {
		/// Which URL failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} URL must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which URL failed validation.
		endpoint: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// The API base must be a hierarchical URL without query or fragment.
	#[error("The API base cannot carry endpoint paths: {url}.")]
	UnusableApiBase {
		/// URL that failed validation.
		url: String,
	},
}

/// Builder for [`ServiceDescriptor`] values.
#[derive(Debug, Default)]
pub struct ServiceDescriptorBuilder {
	/// Token endpoint override; defaults to [`HUMANITY_TOKEN_ENDPOINT`].
	pub token_endpoint: Option<Url>,
	/// API base override; defaults to [`HUMANITY_API_BASE`].
	pub api_base: Option<Url>,
	/// Client authentication method for the token endpoint.
	pub client_auth_method: ClientAuthMethod,
}
impl ServiceDescriptorBuilder {
	/// Creates a new builder that targets the public Humanity deployment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Overrides the resource API base.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(url);

		self
	}

	/// Overrides the client authentication method.
	pub fn client_auth_method(mut self, method: ClientAuthMethod) -> Self {
		self.client_auth_method = method;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ServiceDescriptor, ServiceDescriptorError> {
		let token_endpoint = match self.token_endpoint {
			Some(url) => url,
			None => parse_default("token", HUMANITY_TOKEN_ENDPOINT)?,
		};
		let api_base = match self.api_base {
			Some(url) => url,
			None => parse_default("api_base", HUMANITY_API_BASE)?,
		};
		let descriptor = ServiceDescriptor {
			token_endpoint,
			api_base,
			client_auth_method: self.client_auth_method,
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ServiceDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), ServiceDescriptorError> {
		validate_endpoint("token", &self.token_endpoint)?;
		validate_endpoint("api_base", &self.api_base)?;

		if self.api_base.cannot_be_a_base()
			|| self.api_base.query().is_some()
			|| self.api_base.fragment().is_some()
		{
			return Err(ServiceDescriptorError::UnusableApiBase {
				url: self.api_base.to_string(),
			});
		}

		Ok(())
	}
}

fn parse_default(endpoint: &'static str, raw: &str) -> Result<Url, ServiceDescriptorError> {
	Url::parse(raw).map_err(|source| ServiceDescriptorError::InvalidUrl { endpoint, source })
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ServiceDescriptorError> {
	if url.scheme() == "https" || (url.scheme() == "http" && is_loopback(url)) {
		Ok(())
	} else {
		Err(ServiceDescriptorError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host_str() {
		Some("localhost") => true,
		Some(host) => host
			.trim_start_matches('[')
			.trim_end_matches(']')
			.parse::<IpAddr>()
			.is_ok_and(|ip| ip.is_loopback()),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse descriptor test URL.")
	}

	#[test]
	fn defaults_target_public_deployment() {
		let descriptor = ServiceDescriptor::humanity().expect("Default descriptor should build.");

		assert_eq!(descriptor.token_endpoint.as_str(), HUMANITY_TOKEN_ENDPOINT);
		assert_eq!(descriptor.api_base.as_str(), HUMANITY_API_BASE);
		assert_eq!(descriptor.client_auth_method, ClientAuthMethod::ClientSecretPost);
	}

	#[test]
	fn insecure_remote_endpoints_are_rejected() {
		let err = ServiceDescriptor::builder()
			.token_endpoint(url("http://auth.example.com/token"))
			.build()
			.expect_err("Plain HTTP must be rejected for remote hosts.");

		assert!(matches!(err, ServiceDescriptorError::InsecureEndpoint { endpoint: "token", .. }));
	}

	#[test]
	fn loopback_hosts_may_use_plain_http() {
		for root in ["http://127.0.0.1:8080", "http://localhost:9000", "http://[::1]:7000"] {
			ServiceDescriptor::builder()
				.token_endpoint(url(&format!("{root}/oauth2/token.php")))
				.api_base(url(&format!("{root}/api/v2/")))
				.build()
				.expect("Loopback descriptors should build.");
		}
	}

	#[test]
	fn api_base_must_accept_paths() {
		let err = ServiceDescriptor::builder()
			.api_base(url("https://example.com/api/v2/?debug=1"))
			.build()
			.expect_err("API bases with queries must be rejected.");

		assert!(matches!(err, ServiceDescriptorError::UnusableApiBase { .. }));
	}
}
