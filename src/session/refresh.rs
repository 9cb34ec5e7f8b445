//! Refresh token grant.
//!
//! Refreshing is always caller-driven. The stored refresh token is sent with
//! `grant_type=refresh_token`; the returned pair replaces the held one wholesale.

// self
use crate::{
	_prelude::*,
	auth::TokenPair,
	error::ConfigError,
	http::ApiHttpClient,
	oauth::{TokenExchange, TransportErrorMapper},
	obs::{FlowKind, FlowSpan},
	session::{Session, observe},
};

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges the held refresh token for a new token pair.
	///
	/// Fails with [`ConfigError::MissingRefreshToken`] before any network call when no pair is
	/// held; the lifecycle state is left untouched in that case. Provider errors behave as in
	/// [`Session::authenticate`].
	pub async fn refresh(&self) -> Result<TokenPair> {
		const KIND: FlowKind = FlowKind::Refresh;

		let span = FlowSpan::new(KIND, "refresh");

		observe(KIND, &span, async {
			let _exchange = self.exchange_guard.lock().await;
			let refresh_token = self.refresh_secret().ok_or(ConfigError::MissingRefreshToken)?;

			self.exchange_metrics.record_attempt(KIND);

			let outcome = match self.facade() {
				Ok(facade) => facade.refresh_token(&refresh_token).await,
				Err(err) => Err(err),
			};

			self.settle(KIND, &span, outcome)
		})
		.await
	}
}
