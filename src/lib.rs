//! Async client for the Humanity v2 workforce-management API: OAuth 2.0 password-grant sessions,
//! typed endpoint descriptors, and a single dispatcher behind roughly two hundred resource calls.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod service;
pub mod session;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Credentials,
		http::ReqwestHttpClient,
		oauth::ReqwestTransportErrorMapper,
		service::ServiceDescriptor,
		session::Session,
	};

	/// Session type alias used by reqwest-backed integration tests.
	pub type ReqwestTestSession = Session<ReqwestHttpClient, ReqwestTransportErrorMapper>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a descriptor whose token endpoint and API base point at a mock server root.
	pub fn test_descriptor(root: &str) -> ServiceDescriptor {
		let root = root.trim_end_matches('/');

		ServiceDescriptor::builder()
			.token_endpoint(
				Url::parse(&format!("{root}/oauth2/token.php"))
					.expect("Failed to parse mock token endpoint URL."),
			)
			.api_base(
				Url::parse(&format!("{root}/api/v2/")).expect("Failed to parse mock API base URL."),
			)
			.build()
			.expect("Failed to build mock service descriptor.")
	}

	/// Credentials fixture shared by integration tests.
	pub fn test_credentials() -> Credentials {
		Credentials::builder()
			.client_id("client-id")
			.client_secret("client-secret")
			.username("manager@example.com")
			.password("hunter2")
			.build()
			.expect("Failed to build credential fixture.")
	}

	/// Constructs an unauthenticated [`Session`] backed by the reqwest transport used across
	/// integration tests.
	pub fn build_reqwest_test_session(
		descriptor: ServiceDescriptor,
		credentials: Credentials,
	) -> ReqwestTestSession {
		Session::with_http_client(
			descriptor,
			credentials,
			test_reqwest_http_client(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _, tokio as _};
