//! Access/refresh token pair issued by the token endpoint, plus its builder.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Errors produced by [`TokenPairBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum TokenPairBuilderError {
	/// Issued when no access token value was provided.
	#[error("Access token is required.")]
	MissingAccessToken,
	/// Issued when no refresh token value was provided.
	#[error("Refresh token is required.")]
	MissingRefreshToken,
}

/// Bearer credentials held by a session.
///
/// The pair is replaced wholesale on every successful exchange and never persisted by the
/// crate. Expiry is informational: nothing refreshes automatically.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenPair {
	/// Access token sent as the `access_token` query parameter; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Refresh token used for the `refresh_token` grant.
	pub refresh_token: TokenSecret,
	/// Instant the exchange completed.
	pub issued_at: OffsetDateTime,
	/// Expiry derived from `expires_in`, when the provider reported one.
	pub expires_at: Option<OffsetDateTime>,
}
impl TokenPair {
	/// Returns a builder for constructing token pairs.
	pub fn builder() -> TokenPairBuilder {
		TokenPairBuilder::default()
	}

	/// Returns `true` when a known expiry has passed at the provided instant.
	///
	/// Pairs without an expiry never report as expired.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Returns `true` when a known expiry has passed relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Remaining lifetime at `instant`, if an expiry is known.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Option<Duration> {
		self.expires_at.map(|expires_at| expires_at - instant)
	}
}
impl Debug for TokenPair {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenPair")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &"<redacted>")
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// Builder for [`TokenPair`].
#[derive(Clone, Debug, Default)]
pub struct TokenPairBuilder {
	access_token: Option<TokenSecret>,
	refresh_token: Option<TokenSecret>,
	issued_at: Option<OffsetDateTime>,
	expires_at: Option<OffsetDateTime>,
	expires_in: Option<Duration>,
}
impl TokenPairBuilder {
	/// Provides the access token value.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(TokenSecret::new(token));

		self
	}

	/// Provides the refresh token value.
	pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Sets the issued-at instant.
	pub fn issued_at(mut self, instant: OffsetDateTime) -> Self {
		self.issued_at = Some(instant);

		self
	}

	/// Sets an absolute expiry instant.
	pub fn expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Sets a relative expiry duration from the issued instant.
	pub fn expires_in(mut self, duration: Duration) -> Self {
		self.expires_in = Some(duration);

		self
	}

	/// Consumes the builder and produces a [`TokenPair`].
	pub fn build(self) -> Result<TokenPair, TokenPairBuilderError> {
		let access_token = self.access_token.ok_or(TokenPairBuilderError::MissingAccessToken)?;
		let refresh_token = self.refresh_token.ok_or(TokenPairBuilderError::MissingRefreshToken)?;
		let issued_at = self.issued_at.unwrap_or_else(OffsetDateTime::now_utc);
		let expires_at = self.expires_at.or_else(|| self.expires_in.map(|delta| issued_at + delta));

		Ok(TokenPair { access_token, refresh_token, issued_at, expires_at })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn builder_requires_both_tokens() {
		assert_eq!(
			TokenPair::builder().refresh_token("refresh").build(),
			Err(TokenPairBuilderError::MissingAccessToken)
		);
		assert_eq!(
			TokenPair::builder().access_token("access").build(),
			Err(TokenPairBuilderError::MissingRefreshToken)
		);
	}

	#[test]
	fn builder_handles_relative_expiry() {
		let pair = TokenPair::builder()
			.access_token("access")
			.refresh_token("refresh")
			.issued_at(macros::datetime!(2025-01-01 00:00 UTC))
			.expires_in(Duration::hours(1))
			.build()
			.expect("Token pair builder should support relative expiry calculations.");

		assert_eq!(pair.expires_at, Some(macros::datetime!(2025-01-01 01:00 UTC)));
		assert!(!pair.is_expired_at(macros::datetime!(2025-01-01 00:59 UTC)));
		assert!(pair.is_expired_at(macros::datetime!(2025-01-01 01:00 UTC)));
		assert_eq!(
			pair.remaining_at(macros::datetime!(2025-01-01 00:45 UTC)),
			Some(Duration::minutes(15))
		);
	}

	#[test]
	fn pairs_without_expiry_never_expire() {
		let pair = TokenPair::builder()
			.access_token("access")
			.refresh_token("refresh")
			.build()
			.expect("Token pair without expiry should build.");

		assert_eq!(pair.expires_at, None);
		assert!(!pair.is_expired());
		assert_eq!(pair.remaining_at(OffsetDateTime::now_utc()), None);
	}

	#[test]
	fn debug_output_redacts_tokens() {
		let pair = TokenPair::builder()
			.access_token("visible-access")
			.refresh_token("visible-refresh")
			.build()
			.expect("Token pair fixture should build.");
		let rendered = format!("{pair:?}");

		assert!(!rendered.contains("visible-access"));
		assert!(!rendered.contains("visible-refresh"));
	}
}
