//! Demonstrates a password-grant session against a mocked Humanity deployment: authenticate,
//! call a couple of resources, then rotate the token pair with an explicit refresh.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use humanity_api::{
	auth::{Credentials, PermissionLevel},
	dispatch::Params,
	http::ReqwestHttpClient,
	oauth::ReqwestTransportErrorMapper,
	service::ServiceDescriptor,
	session::ReqwestSession,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let grant_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token.php").form_urlencoded_tuple("grant_type", "password");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"refresh_token\":\"demo-refresh\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let refresh_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/token.php")
				.form_urlencoded_tuple("grant_type", "refresh_token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access-2\",\"refresh_token\":\"demo-refresh-2\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let me_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/me");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"status\":1,\"data\":{\"id\":1,\"name\":\"Demo Manager\",\"group\":2}}");
		})
		.await;
	let shifts_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/shifts").query_param("mode", "overview");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"status\":1,\"data\":[{\"id\":10,\"title\":\"Morning\"}]}");
		})
		.await;
	let descriptor = ServiceDescriptor::builder()
		.token_endpoint(Url::parse(&server.url("/oauth2/token.php"))?)
		.api_base(Url::parse(&server.url("/api/v2/"))?)
		.build()?;
	let credentials = Credentials::builder()
		.client_id("demo-client")
		.client_secret("demo-secret")
		.username("manager@example.com")
		.password("correct horse battery staple")
		.build()?;
	let session = ReqwestSession::with_http_client(
		descriptor,
		credentials,
		ReqwestHttpClient::default(),
		ReqwestTransportErrorMapper,
	)
	.with_permission(PermissionLevel::Manager);
	let pair = session.authenticate().await?;

	println!("Authenticated; access token fingerprint {}.", pair.access_token.fingerprint());

	let me = session.get_me().await?;

	println!("GET me -> {} {}", me.status, me.body);

	let shifts = session.get_shifts(Params::new().with("mode", "overview")).await?;

	println!("GET shifts -> {} {}", shifts.status, shifts.body);

	let rotated = session.refresh().await?;

	println!("Refreshed; access token fingerprint {}.", rotated.access_token.fingerprint());

	grant_mock.assert_async().await;
	refresh_mock.assert_async().await;
	me_mock.assert_async().await;
	shifts_mock.assert_async().await;

	Ok(())
}
