#![cfg(all(feature = "test", feature = "reqwest"))]

// crates.io
use httpmock::prelude::*;
// self
use humanity_api::{
	_preludet::*,
	auth::Credentials,
	error::{ConfigError, Error},
	session::SessionState,
};

const TOKEN_PATH: &str = "/oauth2/token.php";

#[tokio::test]
async fn password_grant_posts_credentials_as_form() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("grant_type", "password")
				.form_urlencoded_tuple("client_id", "client-id")
				.form_urlencoded_tuple("client_secret", "client-secret")
				.form_urlencoded_tuple("username", "manager@example.com")
				.form_urlencoded_tuple("password", "hunter2");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"access-1\",\"refresh_token\":\"refresh-1\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let pair = session.authenticate().await.expect("Password grant should succeed.");

	mock.assert_async().await;

	assert_eq!(pair.access_token.expose(), "access-1");
	assert_eq!(pair.refresh_token.expose(), "refresh-1");
	assert!(pair.expires_at.is_some());
	assert_eq!(session.state(), SessionState::Authenticated);
	assert_eq!(session.exchange_metrics.password.attempts(), 1);
	assert_eq!(session.exchange_metrics.password.successes(), 1);
}

#[tokio::test]
async fn password_grant_forwards_redirect_uri() {
	let server = MockServer::start_async().await;
	let credentials = Credentials::builder()
		.client_id("client-id")
		.client_secret("client-secret")
		.username("manager@example.com")
		.password("hunter2")
		.redirect_uri("https://app.example.com/callback")
		.build()
		.expect("Credentials with a redirect URI should build.");
	let session = build_reqwest_test_session(test_descriptor(&server.base_url()), credentials);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.form_urlencoded_tuple("redirect_uri", "https://app.example.com/callback");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"access-r\",\"refresh_token\":\"refresh-r\",\"token_type\":\"bearer\"}",
			);
		})
		.await;
	let pair = session.authenticate().await.expect("Password grant should succeed.");

	mock.assert_async().await;

	assert_eq!(pair.access_token.expose(), "access-r");
	assert!(pair.expires_at.is_none());
}

#[tokio::test]
async fn redirect_uri_reaches_the_form_unchanged() {
	let server = MockServer::start_async().await;
	let credentials = Credentials::builder()
		.client_id("client-id")
		.client_secret("client-secret")
		.username("manager@example.com")
		.password("hunter2")
		.redirect_uri("https://app.example.com")
		.build()
		.expect("Credentials with a bare-host redirect URI should build.");
	let session = build_reqwest_test_session(test_descriptor(&server.base_url()), credentials);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.form_urlencoded_tuple("redirect_uri", "https://app.example.com");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"access-b\",\"refresh_token\":\"refresh-b\",\"token_type\":\"bearer\"}",
			);
		})
		.await;

	session.authenticate().await.expect("Password grant should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn token_type_is_optional_in_grant_responses() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"a\",\"refresh_token\":\"r\"}");
		})
		.await;
	let pair = session.authenticate().await.expect("Responses without token_type should succeed.");

	mock.assert_async().await;

	assert_eq!(pair.access_token.expose(), "a");
	assert_eq!(pair.refresh_token.expose(), "r");
	assert_eq!(session.state(), SessionState::Authenticated);
}

#[tokio::test]
async fn html_labelled_token_bodies_are_read_as_json() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "text/html; charset=UTF-8").body(
				"{\"access_token\":\"access-h\",\"refresh_token\":\"refresh-h\",\"expires_in\":3600}",
			);
		})
		.await;
	let pair = session.authenticate().await.expect("JSON served as text/html should succeed.");

	mock.assert_async().await;

	assert_eq!(pair.access_token.expose(), "access-h");
	assert!(pair.expires_at.is_some());
}

#[tokio::test]
async fn html_labelled_error_bodies_are_rejections() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "text/html")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"Bad creds\"}");
		})
		.await;
	let err = session.authenticate().await.expect_err("Error payloads must not authenticate.");

	mock.assert_async().await;

	match err {
		Error::Auth(auth) => {
			assert_eq!(auth.error, "invalid_grant");
			assert_eq!(auth.description(), "Bad creds");
			assert_eq!(auth.status, Some(200));
		},
		other => panic!("Expected an auth error, got {other:?}."),
	}

	assert_eq!(session.state(), SessionState::Failed);
}

#[tokio::test]
async fn provider_rejection_surfaces_description_and_fails_session() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(400).header("content-type", "application/json").body(
				"{\"error\":\"invalid_grant\",\"error_description\":\"Invalid username and password combination\"}",
			);
		})
		.await;
	let err = session.authenticate().await.expect_err("Rejected credentials must fail.");

	mock.assert_async().await;

	match err {
		Error::Auth(auth) => {
			assert_eq!(auth.error, "invalid_grant");
			assert_eq!(auth.description(), "Invalid username and password combination");
			assert_eq!(auth.status, Some(400));
		},
		other => panic!("Expected an auth error, got {other:?}."),
	}

	assert_eq!(session.state(), SessionState::Failed);
	assert!(session.tokens().is_none());
	assert_eq!(session.exchange_metrics.password.failures(), 1);
}

#[tokio::test]
async fn error_body_with_success_status_is_still_a_rejection() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(
				"{\"error\":\"invalid_client\",\"error_description\":\"The client credentials are invalid\"}",
			);
		})
		.await;
	let err = session.authenticate().await.expect_err("Error payloads must not authenticate.");

	mock.assert_async().await;

	assert!(matches!(
		&err,
		Error::Auth(auth) if auth.description() == "The client credentials are invalid"
	));
	assert_eq!(session.state(), SessionState::Failed);
}

#[tokio::test]
async fn missing_refresh_token_in_response_is_rejected() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"access-1\",\"token_type\":\"bearer\"}");
		})
		.await;
	let err = session.authenticate().await.expect_err("A pair without refresh token must fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Config(ConfigError::MissingRefreshTokenInResponse)));
	assert_eq!(session.state(), SessionState::Failed);
}

#[tokio::test]
async fn concurrent_authentications_are_serialized() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"access-c\",\"refresh_token\":\"refresh-c\",\"token_type\":\"bearer\"}",
			);
		})
		.await;
	let clone = session.clone();
	let (first, second) = tokio::join!(session.authenticate(), clone.authenticate());

	first.expect("First concurrent grant should succeed.");
	second.expect("Second concurrent grant should succeed.");
	mock.assert_calls_async(2).await;

	assert_eq!(session.exchange_metrics.password.successes(), 2);
	assert_eq!(session.state(), SessionState::Authenticated);
}

#[test]
fn blank_credential_fields_fail_before_any_exchange() {
	let err = Credentials::builder()
		.client_id("client-id")
		.client_secret("client-secret")
		.username("   ")
		.password("hunter2")
		.build()
		.expect_err("Blank usernames must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::MissingCredential { field: "username" })));
}
