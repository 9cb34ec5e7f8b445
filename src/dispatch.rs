//! Resource request dispatcher.
//!
//! Every resource method funnels into [`Session::dispatch`], which checks the declared
//! permission level, expands the endpoint's path template against the API base, appends the
//! held access token after the caller's query parameters, sends the request through the
//! session's [`ApiHttpClient`], and decodes the JSON reply.

mod call;
mod endpoint;

pub use call::*;
pub use endpoint::*;

// crates.io
use oauth2::{
	AsyncHttpClient, HttpRequest,
	http::header::{ACCEPT, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::{ConfigError, TransientError},
	http::{ApiHttpClient, ResponseMetadataSlot},
	oauth::TransportErrorMapper,
	obs::{FlowKind, FlowSpan},
	session::{Session, observe},
};

/// Query parameter carrying the access token on every resource call.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Sends one resource call signed with the held access token.
	///
	/// Fails before touching the network when the declared permission level is insufficient,
	/// when no access token is held, or when the identifiers do not match the path template.
	/// Any HTTP status is returned as an [`ApiResponse`]; only transport failures and non-JSON
	/// bodies are errors.
	pub async fn dispatch(&self, call: Call) -> Result<ApiResponse> {
		const KIND: FlowKind = FlowKind::Request;

		let span = FlowSpan::new(KIND, call.endpoint.name);

		observe(KIND, &span, async {
			self.authorize(&call.endpoint)?;

			let token = self.access_token().ok_or(ConfigError::MissingAccessToken)?;

			span.record_token(&token.fingerprint());

			let url = resolve_url(&self.descriptor.api_base, &call, &token)?;
			let request = build_request(&call, url)?;
			let slot = ResponseMetadataSlot::default();
			let handle = self.http_client.with_metadata(slot.clone());
			let response = handle.call(request).await.map_err(|err| {
				self.transport_mapper.map_transport_error(KIND, slot.take().as_ref(), err)
			})?;
			let status = response.status().as_u16();

			span.record_status(status);

			decode(call.endpoint.name, status, response.body())
		})
		.await
	}

	fn authorize(&self, endpoint: &Endpoint) -> Result<()> {
		match self.permission() {
			Some(held) if !held.satisfies(endpoint.permission) => Err(Error::InsufficientPermission {
				endpoint: endpoint.name,
				required: endpoint.permission,
				held,
			}),
			_ => Ok(()),
		}
	}
}

/// Expands `call` against `base`: path identifiers as encoded segments, caller query first,
/// then the access token.
fn resolve_url(base: &Url, call: &Call, token: &TokenSecret) -> Result<Url> {
	let endpoint = &call.endpoint;
	let expected = endpoint.placeholders();

	if expected != call.ids.len() {
		return Err(ConfigError::PathParameters {
			endpoint: endpoint.name,
			expected,
			actual: call.ids.len(),
		}
		.into());
	}

	let mut url = base.clone();

	{
		let mut segments = url.path_segments_mut().map_err(|_| ConfigError::OpaqueApiBase)?;
		let mut ids = call.ids.iter();

		segments.pop_if_empty();

		for segment in endpoint.path.split('/') {
			if segment == PATH_PLACEHOLDER {
				segments.push(ids.next().map(String::as_str).unwrap_or_default());
			} else {
				segments.push(segment);
			}
		}
	}
	{
		let mut pairs = url.query_pairs_mut();

		for (key, value) in call.query.iter() {
			pairs.append_pair(key, value);
		}

		pairs.append_pair(ACCESS_TOKEN_PARAM, token.expose());
	}

	Ok(url)
}

fn build_request(call: &Call, url: Url) -> Result<HttpRequest> {
	let mut builder = oauth2::http::Request::builder()
		.method(call.endpoint.method.to_http())
		.uri(url.as_str())
		.header(ACCEPT, "application/json");

	if let Some(content_type) = call.body.content_type() {
		builder = builder.header(CONTENT_TYPE, content_type);
	}

	Ok(builder.body(call.body.to_bytes()?).map_err(ConfigError::from)?)
}

fn decode(endpoint: &'static str, status: u16, body: &[u8]) -> Result<ApiResponse> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(ApiResponse { status, body: Value::Null });
	}

	let mut de = serde_json::Deserializer::from_slice(body);
	let body: Value = serde_path_to_error::deserialize(&mut de)
		.map_err(|source| TransientError::ResponseParse { endpoint, source, status })?;

	Ok(ApiResponse { status, body })
}
