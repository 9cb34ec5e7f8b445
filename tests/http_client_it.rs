#![cfg(all(feature = "test", feature = "reqwest"))]

// self
use humanity_api::{
	_preludet::*,
	error::{ConfigError, Error, TransientError, TransportError},
	http::{ApiHttpClient, ResponseMetadata, ResponseMetadataSlot},
	oauth::{
		TransportErrorMapper,
		oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse},
	},
	obs::FlowKind,
	session::{Session, SessionState},
};

#[derive(Debug)]
enum FakeTransportError {
	Throttled,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Throttled => write!(f, "Transport throttled."),
		}
	}
}
impl StdError for FakeTransportError {}

/// Fake transport that either throttles every request or answers from a script.
#[derive(Clone, Default)]
struct FakeHttpClient {
	throttle: Option<Duration>,
	seen: Arc<Mutex<Vec<String>>>,
}
impl FakeHttpClient {
	fn throttled(retry_after: Duration) -> Self {
		Self { throttle: Some(retry_after), ..Default::default() }
	}

	fn seen(&self) -> Vec<String> {
		self.seen.lock().clone()
	}
}
impl ApiHttpClient for FakeHttpClient {
	type Handle = FakeHttpHandle;
	type TransportError = FakeTransportError;

	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle {
		FakeHttpHandle { slot, client: self.clone() }
	}
}

struct FakeHttpHandle {
	slot: ResponseMetadataSlot,
	client: FakeHttpClient,
}
impl<'a> AsyncHttpClient<'a> for FakeHttpHandle {
	type Error = HttpClientError<FakeTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send + Sync>>;

	fn call(&'a self, request: HttpRequest) -> Self::Future {
		Box::pin(async move {
			assert!(
				self.slot.take().is_none(),
				"ResponseMetadataSlot must be clear before dispatching a request."
			);

			self.client.seen.lock().push(request.uri().to_string());

			if let Some(retry_after) = self.client.throttle {
				self.slot.store(ResponseMetadata { status: Some(429), retry_after: Some(retry_after) });

				return Err(HttpClientError::Reqwest(Box::new(FakeTransportError::Throttled)));
			}

			let body = if request.uri().path().ends_with("/token.php") {
				"{\"access_token\":\"fake-access\",\"refresh_token\":\"fake-refresh\",\"token_type\":\"bearer\"}"
			} else {
				"{\"status\":1,\"data\":[]}"
			};

			self.slot.store(ResponseMetadata { status: Some(200), retry_after: None });

			Ok(oauth2::http::Response::builder()
				.status(200)
				.header("content-type", "application/json")
				.body(body.as_bytes().to_vec())
				.expect("Scripted response should build."))
		})
	}
}

#[derive(Clone, Default)]
struct RecordingTransportErrorMapper {
	calls: Arc<Mutex<Vec<(FlowKind, Option<ResponseMetadata>)>>>,
}
impl RecordingTransportErrorMapper {
	fn recorded(&self) -> Vec<(FlowKind, Option<ResponseMetadata>)> {
		self.calls.lock().clone()
	}
}
impl TransportErrorMapper<FakeTransportError> for RecordingTransportErrorMapper {
	fn map_transport_error(
		&self,
		flow: FlowKind,
		meta: Option<&ResponseMetadata>,
		err: HttpClientError<FakeTransportError>,
	) -> Error {
		let status = meta.and_then(|value| value.status);
		let retry_after = meta.and_then(|value| value.retry_after);

		self.calls.lock().push((flow, meta.cloned()));

		match err {
			HttpClientError::Reqwest(inner) => TransientError::Upstream {
				message: format!("Fake transport error: {inner}"),
				status,
				retry_after,
			}
			.into(),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::Io(inner).into(),
			other => TransientError::Upstream {
				message: format!("Unhandled fake transport error: {other:?}"),
				status,
				retry_after,
			}
			.into(),
		}
	}
}

fn build_session(
	http_client: FakeHttpClient,
	mapper: RecordingTransportErrorMapper,
) -> Session<FakeHttpClient, RecordingTransportErrorMapper> {
	Session::with_http_client(
		test_descriptor("https://mock.example.com"),
		test_credentials(),
		http_client,
		mapper,
	)
}

#[tokio::test]
async fn throttled_exchanges_surface_status_and_retry_hint() {
	let mapper = RecordingTransportErrorMapper::default();
	let session = build_session(FakeHttpClient::throttled(Duration::seconds(5)), mapper.clone());
	let err = session.authenticate().await.expect_err("Throttled grants must fail.");

	match err {
		Error::Transient(TransientError::Upstream { status, retry_after, .. }) => {
			assert_eq!(status, Some(429));
			assert_eq!(retry_after, Some(Duration::seconds(5)));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert_eq!(session.state(), SessionState::Failed);

	let recorded = mapper.recorded();

	assert_eq!(recorded.len(), 1);
	assert_eq!(recorded[0].0, FlowKind::Password);
	assert_eq!(recorded[0].1.as_ref().and_then(|meta| meta.status), Some(429));
}

#[tokio::test]
async fn custom_transports_serve_exchanges_and_resource_calls() {
	let http_client = FakeHttpClient::default();
	let mapper = RecordingTransportErrorMapper::default();
	let session = build_session(http_client.clone(), mapper.clone());

	session.authenticate().await.expect("Scripted grant should succeed.");

	let response = session.get_skills().await.expect("Scripted resource call should succeed.");

	assert_eq!(response.status, 200);
	assert_eq!(response.data(), Some(&Value::Array(Vec::new())));
	assert!(mapper.recorded().is_empty());
	assert_eq!(
		http_client.seen(),
		vec![
			"https://mock.example.com/oauth2/token.php".to_owned(),
			"https://mock.example.com/api/v2/skills?access_token=fake-access".to_owned(),
		]
	);
}
