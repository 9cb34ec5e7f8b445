//! Token exchange facade over the `oauth2` crate plus transport error mapping.

pub use oauth2;

// std
use std::time::Duration as StdDuration;
// crates.io
use oauth2::{
	AccessToken, AsyncHttpClient, AuthType, Client, ClientId, ClientSecret, EndpointNotSet,
	EndpointSet, HttpClientError, HttpRequest, HttpResponse, RefreshToken, RequestTokenError,
	ResourceOwnerPassword, ResourceOwnerUsername, Scope, StandardRevocableToken, TokenResponse,
	TokenUrl,
	basic::{
		BasicErrorResponse, BasicRequestTokenError, BasicRevocationErrorResponse,
		BasicTokenIntrospectionResponse, BasicTokenType,
	},
	http::{HeaderValue, header::CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenPair, TokenSecret},
	error::{AuthError, ConfigError, TransientError},
	http::{ApiHttpClient, ResponseMetadata, ResponseMetadataSlot},
	obs::FlowKind,
	service::{ClientAuthMethod, ServiceDescriptor},
};
#[cfg(feature = "reqwest")] use crate::error::TransportError;

type ConfiguredClient = Client<
	BasicErrorResponse,
	GrantResponse,
	BasicTokenIntrospectionResponse,
	StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointSet,
>;
type FacadeFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Maps HTTP transport failures into crate [`Error`] values.
///
/// The same mapper classifies failures of token exchanges and resource calls; `flow` tells the
/// two apart.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a crate error.
	fn map_transport_error(
		&self,
		flow: FlowKind,
		metadata: Option<&ResponseMetadata>,
		error: HttpClientError<E>,
	) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(
		&self,
		flow: FlowKind,
		meta: Option<&ResponseMetadata>,
		err: HttpClientError<ReqwestError>,
	) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(flow, meta, *inner),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::Io(inner).into(),
			HttpClientError::Other(message) => map_generic_transport_error(flow, meta, message),
			_ => map_unknown_transport_error(flow, meta),
		}
	}
}

/// Password and refresh grants against the token endpoint.
pub(crate) trait TokenExchange {
	fn exchange_password<'a>(&'a self, credentials: &'a Credentials) -> FacadeFuture<'a, TokenPair>;

	fn refresh_token<'a>(&'a self, refresh_token: &'a TokenSecret) -> FacadeFuture<'a, TokenPair>;
}

pub(crate) struct BasicFacade<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	oauth_client: ConfiguredClient,
	http_client: Arc<C>,
	error_mapper: Arc<M>,
}
impl<C, M> BasicFacade<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	pub(crate) fn from_descriptor(
		descriptor: &ServiceDescriptor,
		credentials: &Credentials,
		http_client: impl Into<Arc<C>>,
		error_mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let token_url = TokenUrl::new(descriptor.token_endpoint.to_string())
			.map_err(|source| ConfigError::InvalidDescriptor { source })?;
		let mut oauth_client: ConfiguredClient =
			Client::new(ClientId::new(credentials.client_id().to_owned()))
				.set_client_secret(ClientSecret::new(credentials.client_secret().to_owned()))
				.set_token_uri(token_url);

		if matches!(descriptor.client_auth_method, ClientAuthMethod::ClientSecretPost) {
			oauth_client = oauth_client.set_auth_type(AuthType::RequestBody);
		}

		Ok(Self {
			oauth_client,
			http_client: http_client.into(),
			error_mapper: error_mapper.into(),
		})
	}
}
impl<C, M> TokenExchange for BasicFacade<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn exchange_password<'a>(&'a self, credentials: &'a Credentials) -> FacadeFuture<'a, TokenPair> {
		let meta = ResponseMetadataSlot::default();

		Box::pin(async move {
			let instrumented = JsonBodyHandle(self.http_client.with_metadata(meta.clone()));
			let username = ResourceOwnerUsername::new(credentials.username().to_owned());
			let password = ResourceOwnerPassword::new(credentials.password().to_owned());
			let mut request = self.oauth_client.exchange_password(&username, &password);

			if let Some(redirect) = credentials.redirect_uri() {
				request = request.add_extra_param("redirect_uri", redirect.to_owned());
			}

			let response = request.request_async(&instrumented).await.map_err(|err| {
				map_request_error(FlowKind::Password, meta.take(), err, self.error_mapper.as_ref())
			})?;

			map_token_response(response, None)
		})
	}

	fn refresh_token<'a>(&'a self, refresh_token: &'a TokenSecret) -> FacadeFuture<'a, TokenPair> {
		let meta = ResponseMetadataSlot::default();

		Box::pin(async move {
			let instrumented = JsonBodyHandle(self.http_client.with_metadata(meta.clone()));
			let refresh_secret = RefreshToken::new(refresh_token.expose().to_owned());
			let response = self
				.oauth_client
				.exchange_refresh_token(&refresh_secret)
				.request_async(&instrumented)
				.await
				.map_err(|err| {
					map_request_error(
						FlowKind::Refresh,
						meta.take(),
						err,
						self.error_mapper.as_ref(),
					)
				})?;

			map_token_response(response, Some(refresh_token))
		})
	}
}

/// Token endpoint success payload.
///
/// Unlike [`oauth2::basic::BasicTokenResponse`], `token_type` may be omitted and defaults to
/// `bearer`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct GrantResponse {
	access_token: AccessToken,
	#[serde(default = "default_token_type")]
	token_type: BasicTokenType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	expires_in: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	refresh_token: Option<RefreshToken>,
}
impl TokenResponse for GrantResponse {
	type TokenType = BasicTokenType;

	fn access_token(&self) -> &AccessToken {
		&self.access_token
	}

	fn token_type(&self) -> &Self::TokenType {
		&self.token_type
	}

	fn expires_in(&self) -> Option<StdDuration> {
		self.expires_in.map(StdDuration::from_secs)
	}

	fn refresh_token(&self) -> Option<&RefreshToken> {
		self.refresh_token.as_ref()
	}

	fn scopes(&self) -> Option<&Vec<Scope>> {
		None
	}
}

fn default_token_type() -> BasicTokenType {
	BasicTokenType::Bearer
}

/// Token endpoint transport that relabels JSON bodies served under a non-JSON content type.
///
/// `oauth2` refuses a successful response whose `Content-Type` is not `application/json` before
/// reading its body. Some deployments answer with `text/html`, so the header is rewritten when
/// the body starts like a JSON document.
struct JsonBodyHandle<H>(H);
impl<'c, H> AsyncHttpClient<'c> for JsonBodyHandle<H>
where
	H: for<'x> AsyncHttpClient<'x, Future: 'x + Send>,
{
	type Error = <H as AsyncHttpClient<'c>>::Error;
	type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let pending = self.0.call(request);

		Box::pin(async move {
			let mut response = pending.await?;

			relabel_json_body(&mut response);

			Ok(response)
		})
	}
}

fn relabel_json_body(response: &mut HttpResponse) {
	let labelled = response.headers().get(CONTENT_TYPE).is_none_or(|value| {
		value.to_str().is_ok_and(|value| value.to_ascii_lowercase().starts_with("application/json"))
	});
	let looks_like_json = response
		.body()
		.iter()
		.find(|byte| !byte.is_ascii_whitespace())
		.is_some_and(|byte| matches!(byte, b'{' | b'['));

	if !labelled && looks_like_json {
		response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
	}
}

/// OAuth error payload some deployments return with a success status.
#[derive(Deserialize)]
struct ErrorBody {
	error: String,
	#[serde(default)]
	error_description: Option<String>,
}

/// Converts a grant response into a [`TokenPair`].
///
/// `held_refresh` is the refresh token that was just exchanged; it is kept when the provider
/// does not rotate it. Password grants pass `None` and require a refresh token in the response.
fn map_token_response(
	response: GrantResponse,
	held_refresh: Option<&TokenSecret>,
) -> Result<TokenPair> {
	let refresh = match (response.refresh_token(), held_refresh) {
		(Some(issued), _) => issued.secret().to_owned(),
		(None, Some(held)) => held.expose().to_owned(),
		(None, None) => return Err(ConfigError::MissingRefreshTokenInResponse.into()),
	};
	let mut builder = TokenPair::builder()
		.access_token(response.access_token().secret().to_owned())
		.refresh_token(refresh)
		.issued_at(OffsetDateTime::now_utc());

	if let Some(expires_in) = response.expires_in() {
		let secs = i64::try_from(expires_in.as_secs())
			.map_err(|_| ConfigError::ExpiresInOutOfRange)?;

		builder = builder.expires_in(Duration::seconds(secs));
	}

	builder.build().map_err(|err| ConfigError::from(err).into())
}

fn map_request_error<E, M>(
	flow: FlowKind,
	meta: Option<ResponseMetadata>,
	err: BasicRequestTokenError<HttpClientError<E>>,
	mapper: &M,
) -> Error
where
	E: 'static + Send + Sync + StdError,
	M: ?Sized + TransportErrorMapper<E>,
{
	let meta_ref = meta.as_ref();

	match err {
		RequestTokenError::ServerResponse(response) => map_server_response_error(response, meta_ref),
		RequestTokenError::Request(error) => mapper.map_transport_error(flow, meta_ref, error),
		RequestTokenError::Parse(error, body) => match serde_json::from_slice::<ErrorBody>(&body) {
			Ok(payload) => AuthError {
				error: payload.error,
				error_description: payload.error_description,
				status: meta_status(meta_ref),
			}
			.into(),
			Err(_) =>
				TransientError::TokenResponseParse { source: error, status: meta_status(meta_ref) }
					.into(),
		},
		RequestTokenError::Other(message) => TransientError::Upstream {
			message: format!("Token endpoint returned an unexpected response: {message}."),
			status: meta_status(meta_ref),
			retry_after: meta_retry_after(meta_ref),
		}
		.into(),
	}
}

fn map_server_response_error(response: BasicErrorResponse, meta: Option<&ResponseMetadata>) -> Error {
	AuthError {
		error: response.error().as_ref().to_owned(),
		error_description: response.error_description().cloned(),
		status: meta_status(meta),
	}
	.into()
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(flow: FlowKind, meta: Option<&ResponseMetadata>, err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TransientError::Upstream {
			message: format!("Request timed out during the {flow} call."),
			status: meta_status(meta).or_else(|| err.status().map(|code| code.as_u16())),
			retry_after: meta_retry_after(meta),
		}
		.into();
	}

	TransportError::from(err).into()
}

#[cfg(feature = "reqwest")]
fn map_generic_transport_error(
	flow: FlowKind,
	meta: Option<&ResponseMetadata>,
	message: impl Display,
) -> Error {
	TransientError::Upstream {
		message: format!("HTTP client error occurred during the {flow} call: {message}."),
		status: meta_status(meta),
		retry_after: meta_retry_after(meta),
	}
	.into()
}

#[cfg(feature = "reqwest")]
fn map_unknown_transport_error(flow: FlowKind, meta: Option<&ResponseMetadata>) -> Error {
	TransientError::Upstream {
		message: format!("HTTP client error occurred during the {flow} call."),
		status: meta_status(meta),
		retry_after: meta_retry_after(meta),
	}
	.into()
}

fn meta_status(meta: Option<&ResponseMetadata>) -> Option<u16> {
	meta.and_then(|value| value.status)
}

fn meta_retry_after(meta: Option<&ResponseMetadata>) -> Option<Duration> {
	meta.and_then(|value| value.retry_after)
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::http::ReqwestHttpClient;

	fn credentials() -> Credentials {
		Credentials::builder()
			.client_id("client-id")
			.client_secret("client-secret")
			.username("manager@example.com")
			.password("hunter2")
			.build()
			.expect("Failed to build credential fixture.")
	}

	fn facade(
		method: ClientAuthMethod,
	) -> Result<BasicFacade<ReqwestHttpClient, ReqwestTransportErrorMapper>> {
		let descriptor = ServiceDescriptor::builder()
			.client_auth_method(method)
			.build()
			.expect("Failed to build service descriptor.");

		BasicFacade::from_descriptor(
			&descriptor,
			&credentials(),
			Arc::new(ReqwestHttpClient::default()),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}

	#[test]
	fn builds_post_and_basic_auth_clients() {
		assert!(facade(ClientAuthMethod::ClientSecretPost).is_ok());
		assert!(facade(ClientAuthMethod::ClientSecretBasic).is_ok());
	}

	#[test]
	fn success_status_error_bodies_become_auth_errors() {
		let body = br#"{"error":"invalid_grant","error_description":"Bad password"}"#.to_vec();
		let source = serde_path_to_error::deserialize::<_, GrantResponse>(
			&mut serde_json::Deserializer::from_slice(&body),
		)
		.expect_err("Error payloads are not token responses.");
		let meta = ResponseMetadata { status: Some(200), retry_after: None };
		let err = map_request_error(
			FlowKind::Password,
			Some(meta),
			RequestTokenError::<HttpClientError<ReqwestError>, BasicErrorResponse>::Parse(
				source, body,
			),
			&ReqwestTransportErrorMapper,
		);

		match err {
			Error::Auth(auth) => {
				assert_eq!(auth.error, "invalid_grant");
				assert_eq!(auth.description(), "Bad password");
				assert_eq!(auth.status, Some(200));
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn malformed_bodies_stay_parse_errors() {
		let body = b"<html>maintenance</html>".to_vec();
		let source = serde_path_to_error::deserialize::<_, GrantResponse>(
			&mut serde_json::Deserializer::from_slice(&body),
		)
		.expect_err("HTML is not a token response.");
		let err = map_request_error(
			FlowKind::Refresh,
			None,
			RequestTokenError::<HttpClientError<ReqwestError>, BasicErrorResponse>::Parse(
				source, body,
			),
			&ReqwestTransportErrorMapper,
		);

		assert!(matches!(err, Error::Transient(TransientError::TokenResponseParse { .. })));
	}

	fn grant(body: &str) -> GrantResponse {
		serde_json::from_str(body).expect("Grant fixture should deserialize.")
	}

	#[test]
	fn token_type_defaults_to_bearer() {
		let response = grant(r#"{"access_token":"a","refresh_token":"r"}"#);

		assert_eq!(response.token_type(), &BasicTokenType::Bearer);

		let pair =
			map_token_response(response, None).expect("Pair should build without a token type.");

		assert_eq!(pair.access_token.expose(), "a");
		assert_eq!(pair.refresh_token.expose(), "r");
		assert!(pair.expires_at.is_none());
	}

	#[test]
	fn refresh_keeps_the_held_token_when_not_rotated() {
		let held = TokenSecret::new("refresh-1");
		let pair = map_token_response(grant(r#"{"access_token":"access-2"}"#), Some(&held))
			.expect("Refresh responses may omit the refresh token.");

		assert_eq!(pair.access_token.expose(), "access-2");
		assert_eq!(pair.refresh_token.expose(), "refresh-1");

		let rotated = map_token_response(
			grant(r#"{"access_token":"access-3","refresh_token":"refresh-3"}"#),
			Some(&held),
		)
		.expect("Rotated refresh tokens should be taken.");

		assert_eq!(rotated.refresh_token.expose(), "refresh-3");

		let err = map_token_response(grant(r#"{"access_token":"access-4"}"#), None)
			.expect_err("Password grants require a refresh token.");

		assert!(matches!(err, Error::Config(ConfigError::MissingRefreshTokenInResponse)));
	}

	fn response(content_type: &str, body: &str) -> HttpResponse {
		let mut response = HttpResponse::new(body.as_bytes().to_vec());

		response.headers_mut().insert(
			CONTENT_TYPE,
			HeaderValue::from_str(content_type).expect("Content type fixture should be valid."),
		);

		response
	}

	#[test]
	fn json_bodies_under_other_content_types_are_relabelled() {
		let mut html_json = response("text/html; charset=UTF-8", " {\"error\":\"invalid_grant\"}");

		relabel_json_body(&mut html_json);

		assert_eq!(
			html_json.headers().get(CONTENT_TYPE),
			Some(&HeaderValue::from_static("application/json"))
		);

		let mut html_page = response("text/html", "<html>maintenance</html>");

		relabel_json_body(&mut html_page);

		assert_eq!(
			html_page.headers().get(CONTENT_TYPE),
			Some(&HeaderValue::from_static("text/html"))
		);

		let mut json = response("application/json; charset=utf-8", "{}");

		relabel_json_body(&mut json);

		assert_eq!(
			json.headers().get(CONTENT_TYPE),
			Some(&HeaderValue::from_static("application/json; charset=utf-8"))
		);
	}
}
