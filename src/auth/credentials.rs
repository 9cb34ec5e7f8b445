//! Client and resource-owner credentials for the password grant.
//!
//! [`Credentials`] is immutable once built. Every mandatory field is checked up front so a
//! misconfigured session fails with [`ConfigError::MissingCredential`] before any network call.
//! Configuration maps use the same keys as the token endpoint form (`client_id`,
//! `client_secret`, `username`, `password`, `redirect_uri`); a legacy `grant_type` key is
//! accepted and ignored because the session always chooses the grant itself.

// self
use crate::{_prelude::*, error::ConfigError};

/// Validated OAuth client and user credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	client_id: String,
	client_secret: String,
	username: String,
	password: String,
	redirect_uri: Option<String>,
}
impl Credentials {
	/// Returns a builder with every field unset.
	pub fn builder() -> CredentialsBuilder {
		CredentialsBuilder::default()
	}

	/// Parses and validates a JSON configuration object.
	pub fn from_json(raw: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config: CredentialsConfig = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::CredentialParse { source })?;

		Self::try_from(config)
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth client secret. Callers must avoid logging this string.
	pub fn client_secret(&self) -> &str {
		&self.client_secret
	}

	/// Resource-owner username.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Resource-owner password. Callers must avoid logging this string.
	pub fn password(&self) -> &str {
		&self.password
	}

	/// Optional redirect URI registered with the application, exactly as configured.
	pub fn redirect_uri(&self) -> Option<&str> {
		self.redirect_uri.as_deref()
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.field("redirect_uri", &self.redirect_uri)
			.finish()
	}
}
impl TryFrom<CredentialsConfig> for Credentials {
	type Error = Error;

	fn try_from(config: CredentialsConfig) -> Result<Self> {
		let mut builder = Credentials::builder();

		builder.client_id = config.client_id;
		builder.client_secret = config.client_secret;
		builder.username = config.username;
		builder.password = config.password;
		builder.redirect_uri = config.redirect_uri;

		builder.build()
	}
}

/// Raw, unvalidated credential configuration as it appears in config files.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
	/// OAuth client identifier.
	pub client_id: Option<String>,
	/// OAuth client secret.
	pub client_secret: Option<String>,
	/// Resource-owner username.
	pub username: Option<String>,
	/// Resource-owner password.
	pub password: Option<String>,
	/// Optional redirect URI.
	pub redirect_uri: Option<String>,
	/// Accepted for compatibility with older configuration files; always ignored.
	#[serde(default, rename = "grant_type")]
	pub legacy_grant_type: Option<String>,
}
impl Debug for CredentialsConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialsConfig")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("username", &self.username)
			.field("password_set", &self.password.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.finish()
	}
}

/// Builder for [`Credentials`].
#[derive(Clone, Default)]
pub struct CredentialsBuilder {
	client_id: Option<String>,
	client_secret: Option<String>,
	username: Option<String>,
	password: Option<String>,
	redirect_uri: Option<String>,
}
impl CredentialsBuilder {
	/// Sets the OAuth client identifier.
	pub fn client_id(mut self, value: impl Into<String>) -> Self {
		self.client_id = Some(value.into());

		self
	}

	/// Sets the OAuth client secret.
	pub fn client_secret(mut self, value: impl Into<String>) -> Self {
		self.client_secret = Some(value.into());

		self
	}

	/// Sets the resource-owner username.
	pub fn username(mut self, value: impl Into<String>) -> Self {
		self.username = Some(value.into());

		self
	}

	/// Sets the resource-owner password.
	pub fn password(mut self, value: impl Into<String>) -> Self {
		self.password = Some(value.into());

		self
	}

	/// Sets the optional redirect URI.
	pub fn redirect_uri(mut self, value: impl Into<String>) -> Self {
		self.redirect_uri = Some(value.into());

		self
	}

	/// Validates the fields and produces [`Credentials`].
	pub fn build(self) -> Result<Credentials> {
		let client_id = required("client_id", self.client_id)?;
		let client_secret = required("client_secret", self.client_secret)?;
		let username = required("username", self.username)?;
		let password = required("password", self.password)?;
		let redirect_uri = self.redirect_uri.filter(|value| !value.trim().is_empty());

		Ok(Credentials { client_id, client_secret, username, password, redirect_uri })
	}
}
impl Debug for CredentialsBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialsBuilder")
			.field("client_id", &self.client_id)
			.field("username", &self.username)
			.finish_non_exhaustive()
	}
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
	match value {
		Some(value) if !value.trim().is_empty() => Ok(value),
		_ => Err(ConfigError::MissingCredential { field }),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn complete() -> CredentialsBuilder {
		Credentials::builder()
			.client_id("app-id")
			.client_secret("app-secret")
			.username("manager@example.com")
			.password("hunter2")
	}

	#[test]
	fn builder_accepts_complete_credentials() {
		let credentials = complete()
			.redirect_uri("https://example.com/callback")
			.build()
			.expect("Complete credentials should build.");

		assert_eq!(credentials.client_id(), "app-id");
		assert_eq!(credentials.username(), "manager@example.com");
		assert_eq!(credentials.redirect_uri(), Some("https://example.com/callback"));
	}

	#[test]
	fn builder_names_each_missing_field() {
		let cases = [
			("client_id", CredentialsBuilder { client_id: None, ..complete() }),
			("client_secret", CredentialsBuilder { client_secret: None, ..complete() }),
			("username", CredentialsBuilder { username: Some("  ".into()), ..complete() }),
			("password", CredentialsBuilder { password: Some(String::new()), ..complete() }),
		];

		for (expected, builder) in cases {
			let err = builder.build().expect_err("Incomplete credentials must be rejected.");

			assert!(
				matches!(err, Error::Config(ConfigError::MissingCredential { field }) if field == expected),
				"Unexpected error for {expected}: {err:?}."
			);
		}
	}

	#[test]
	fn redirect_uri_is_kept_verbatim() {
		let bare = complete()
			.redirect_uri("https://app.example.com")
			.build()
			.expect("Absolute redirect URIs should build.");
		let relative =
			complete().redirect_uri("/callback").build().expect("Relative redirect URIs should build.");
		let blank =
			complete().redirect_uri("   ").build().expect("Blank redirect URIs should be dropped.");

		assert_eq!(bare.redirect_uri(), Some("https://app.example.com"));
		assert_eq!(relative.redirect_uri(), Some("/callback"));
		assert!(blank.redirect_uri().is_none());
	}

	#[test]
	fn json_config_ignores_legacy_grant_type() {
		let credentials = Credentials::from_json(
			r#"{"client_id":"a","client_secret":"b","grant_type":"password","username":"c","password":"d"}"#,
		)
		.expect("Legacy configuration maps should parse.");

		assert_eq!(credentials.client_secret(), "b");
		assert_eq!(credentials.password(), "d");
		assert!(credentials.redirect_uri().is_none());
	}

	#[test]
	fn json_config_reports_missing_and_malformed_fields() {
		let err = Credentials::from_json(r#"{"client_id":"a","client_secret":"b","username":"c"}"#)
			.expect_err("Missing password must be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::MissingCredential { field: "password" })
		));

		let err = Credentials::from_json(r#"{"client_id":7}"#)
			.expect_err("Non-string client_id must be rejected.");

		match err {
			Error::Config(ConfigError::CredentialParse { source }) =>
				assert_eq!(source.path().to_string(), "client_id"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let rendered = format!("{:?}", complete().build().expect("Fixture should build."));

		assert!(!rendered.contains("app-secret"));
		assert!(!rendered.contains("hunter2"));
	}
}
