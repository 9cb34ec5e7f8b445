//! Authenticated sessions against a Humanity deployment.
//!
//! A [`Session`] owns the credentials, the service descriptor, the HTTP transport, and the single
//! [`TokenPair`] obtained from the token endpoint. Exchanges are explicit: nothing refreshes on
//! its own, and a failed exchange leaves the previous pair in place while the session moves to
//! [`SessionState::Failed`].

mod metrics;
mod password;
mod refresh;

pub use metrics::{ExchangeCounters, ExchangeMetrics};

// self
use crate::{
	_prelude::*,
	auth::{Credentials, PermissionLevel, TokenPair, TokenSecret},
	http::ApiHttpClient,
	oauth::{BasicFacade, TransportErrorMapper},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	service::ServiceDescriptor,
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Session specialized for the crate's default reqwest transport stack.
pub type ReqwestSession = Session<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Token lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
	/// No exchange has completed yet.
	Unauthenticated,
	/// The most recent exchange succeeded.
	Authenticated,
	/// The most recent exchange failed; earlier tokens, if any, are still held.
	Failed,
}

#[derive(Debug)]
struct TokenSlot {
	state: SessionState,
	tokens: Option<TokenPair>,
}
impl Default for TokenSlot {
	fn default() -> Self {
		Self { state: SessionState::Unauthenticated, tokens: None }
	}
}

/// Client session bound to one set of credentials and one Humanity deployment.
///
/// Cloning a session shares its token state, so every clone signs requests with the same pair.
pub struct Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for token exchanges and resource calls.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Token endpoint and API base for this session.
	pub descriptor: ServiceDescriptor,
	/// Counters for password and refresh exchanges.
	pub exchange_metrics: Arc<ExchangeMetrics>,
	credentials: Credentials,
	permission: Option<PermissionLevel>,
	slot: Arc<RwLock<TokenSlot>>,
	exchange_guard: Arc<AsyncMutex<()>>,
}
impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates an unauthenticated session that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		descriptor: ServiceDescriptor,
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			descriptor,
			exchange_metrics: Default::default(),
			credentials,
			permission: None,
			slot: Default::default(),
			exchange_guard: Default::default(),
		}
	}

	/// Declares the permission level of the authenticated identity.
	///
	/// Once declared, resource calls whose documented level the identity does not meet fail with
	/// [`Error::InsufficientPermission`] before any request is sent.
	pub fn with_permission(mut self, level: PermissionLevel) -> Self {
		self.permission = Some(level);

		self
	}

	/// Declared permission level, if any.
	pub fn permission(&self) -> Option<PermissionLevel> {
		self.permission
	}

	/// Credentials used for exchanges.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Current lifecycle state.
	pub fn state(&self) -> SessionState {
		self.slot.read().state
	}

	/// Snapshot of the held token pair.
	pub fn tokens(&self) -> Option<TokenPair> {
		self.slot.read().tokens.clone()
	}

	/// Access token used to sign resource calls.
	pub fn access_token(&self) -> Option<TokenSecret> {
		self.slot.read().tokens.as_ref().map(|pair| pair.access_token.clone())
	}

	fn refresh_secret(&self) -> Option<TokenSecret> {
		self.slot.read().tokens.as_ref().map(|pair| pair.refresh_token.clone())
	}

	fn facade(&self) -> Result<BasicFacade<C, M>> {
		BasicFacade::from_descriptor(
			&self.descriptor,
			&self.credentials,
			self.http_client.clone(),
			self.transport_mapper.clone(),
		)
	}

	/// Stores the outcome of an exchange and updates metrics + lifecycle state.
	fn settle(
		&self,
		kind: FlowKind,
		span: &FlowSpan,
		outcome: Result<TokenPair>,
	) -> Result<TokenPair> {
		let mut slot = self.slot.write();

		match outcome {
			Ok(pair) => {
				span.record_token(&pair.access_token.fingerprint());
				self.exchange_metrics.record_success(kind);

				slot.state = SessionState::Authenticated;
				slot.tokens = Some(pair.clone());

				Ok(pair)
			},
			Err(err) => {
				self.exchange_metrics.record_failure(kind);

				slot.state = SessionState::Failed;

				Err(err)
			},
		}
	}
}
#[cfg(feature = "reqwest")]
impl Session<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a new session backed by a default reqwest transport.
	pub fn new(descriptor: ServiceDescriptor, credentials: Credentials) -> Self {
		Self::with_http_client(
			descriptor,
			credentials,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}

	/// Creates a session for the public Humanity deployment and performs the password grant.
	pub async fn connect(credentials: Credentials) -> Result<Self> {
		let descriptor = ServiceDescriptor::humanity().map_err(crate::error::ConfigError::from)?;
		let session = Self::new(descriptor, credentials);

		session.authenticate().await?;

		Ok(session)
	}
}
impl<C, M> Clone for Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			descriptor: self.descriptor.clone(),
			exchange_metrics: self.exchange_metrics.clone(),
			credentials: self.credentials.clone(),
			permission: self.permission,
			slot: self.slot.clone(),
			exchange_guard: self.exchange_guard.clone(),
		}
	}
}
impl<C, M> Debug for Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("descriptor", &self.descriptor)
			.field("credentials", &self.credentials)
			.field("permission", &self.permission)
			.field("state", &self.state())
			.finish()
	}
}

/// Wraps an operation body with span instrumentation and outcome metrics.
pub(crate) async fn observe<T, Fut>(kind: FlowKind, span: &FlowSpan, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	obs::record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => obs::record_flow_outcome(kind, FlowOutcome::Success),
		Err(_) => obs::record_flow_outcome(kind, FlowOutcome::Failure),
	}

	result
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	#[test]
	fn new_sessions_start_unauthenticated() {
		let session = build_reqwest_test_session(
			test_descriptor("http://127.0.0.1:9"),
			test_credentials(),
		);

		assert_eq!(session.state(), SessionState::Unauthenticated);
		assert!(session.tokens().is_none());
		assert!(session.access_token().is_none());
		assert_eq!(session.permission(), None);
	}

	#[test]
	fn clones_share_token_state() {
		let session = build_reqwest_test_session(
			test_descriptor("http://127.0.0.1:9"),
			test_credentials(),
		)
		.with_permission(PermissionLevel::Supervisor);
		let clone = session.clone();
		let pair = TokenPair::builder()
			.access_token("shared-access")
			.refresh_token("shared-refresh")
			.build()
			.expect("Failed to build token pair fixture.");
		let span = FlowSpan::new(FlowKind::Password, "clones_share_token_state");

		session
			.settle(FlowKind::Password, &span, Ok(pair))
			.expect("Successful outcomes should be stored.");

		assert_eq!(clone.state(), SessionState::Authenticated);
		assert_eq!(clone.access_token().map(|t| t.expose().to_owned()), Some("shared-access".into()));
		assert_eq!(clone.permission(), Some(PermissionLevel::Supervisor));
	}

	#[test]
	fn debug_output_redacts_credentials() {
		let session = build_reqwest_test_session(
			test_descriptor("http://127.0.0.1:9"),
			test_credentials(),
		);
		let rendered = format!("{session:?}");

		assert!(rendered.contains("Unauthenticated"));
		assert!(!rendered.contains("hunter2"));
		assert!(!rendered.contains("client-secret"));
	}
}
