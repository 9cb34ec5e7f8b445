//! Resource-owner password grant.

// self
use crate::{
	_prelude::*,
	auth::TokenPair,
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
	/// Exchanges the session credentials for a fresh token pair.
	///
	/// Sends `grant_type=password` with the client identifier, client secret, username,
	/// password, and the redirect URI when one is configured. On success the pair replaces any
	/// held tokens and the session becomes [`SessionState::Authenticated`]. A provider `error`
	/// payload fails with [`Error::Auth`], whatever the HTTP status, and moves the session to
	/// [`SessionState::Failed`] without touching earlier tokens.
	///
	/// [`SessionState::Authenticated`]: crate::session::SessionState::Authenticated
	/// [`SessionState::Failed`]: crate::session::SessionState::Failed
	pub async fn authenticate(&self) -> Result<TokenPair> {
		const KIND: FlowKind = FlowKind::Password;

		let span = FlowSpan::new(KIND, "authenticate");

		observe(KIND, &span, async {
			let _exchange = self.exchange_guard.lock().await;

			self.exchange_metrics.record_attempt(KIND);

			let outcome = match self.facade() {
				Ok(facade) => facade.exchange_password(&self.credentials).await,
				Err(err) => Err(err),
			};

			self.settle(KIND, &span, outcome)
		})
		.await
	}
}
