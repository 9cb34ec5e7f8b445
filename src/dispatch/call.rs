//! Per-call inputs (identifiers, query, body) and the decoded response.

// self
use crate::{_prelude::*, dispatch::Endpoint, error::ConfigError};

/// Ordered key/value pairs used for query strings and form-encoded bodies.
///
/// Keys may repeat; insertion order is kept on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Vec<(String, String)>);
impl Params {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a pair and returns the list.
	pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		self.push(key, value);

		self
	}

	/// Appends a pair.
	pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
		self.0.push((key.into(), value.to_string()));
	}

	/// Replaces every pair stored under `key` with a single pair at the end of the list.
	pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
		let key = key.into();

		self.0.retain(|(k, _)| *k != key);
		self.0.push((key, value.to_string()));
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Iterates over the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no pairs are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Encodes the pairs as `application/x-www-form-urlencoded`.
	pub fn to_form(&self) -> String {
		url::form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: ToString,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.to_string())).collect())
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
	K: Into<String>,
	V: ToString,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

/// Request body attached to a call.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
	/// No body.
	#[default]
	Empty,
	/// `application/x-www-form-urlencoded` body.
	Form(Params),
	/// `application/json` body.
	Json(Value),
}
impl Body {
	pub(crate) fn content_type(&self) -> Option<&'static str> {
		match self {
			Body::Empty => None,
			Body::Form(_) => Some("application/x-www-form-urlencoded"),
			Body::Json(_) => Some("application/json"),
		}
	}

	pub(crate) fn to_bytes(&self) -> Result<Vec<u8>> {
		match self {
			Body::Empty => Ok(Vec::new()),
			Body::Form(params) => Ok(params.to_form().into_bytes()),
			Body::Json(value) => Ok(serde_json::to_vec(value).map_err(ConfigError::JsonBody)?),
		}
	}
}

/// One resource call: endpoint plus identifiers, query, and body.
#[derive(Clone, Debug)]
pub struct Call {
	/// Endpoint being called.
	pub endpoint: Endpoint,
	/// Positional path identifiers, already rendered.
	pub ids: Vec<String>,
	/// Caller query parameters; `access_token` is appended after them.
	pub query: Params,
	/// Request body.
	pub body: Body,
}
impl Call {
	/// Starts a call with no identifiers, query, or body.
	pub fn new(endpoint: Endpoint) -> Self {
		Self { endpoint, ids: Vec::new(), query: Params::new(), body: Body::Empty }
	}

	/// Appends a positional path identifier.
	pub fn id(mut self, id: impl Display) -> Self {
		self.ids.push(id.to_string());

		self
	}

	/// Replaces the query parameters.
	pub fn query(mut self, query: Params) -> Self {
		self.query = query;

		self
	}

	/// Sends `data` as a form-encoded body.
	pub fn form(mut self, data: Params) -> Self {
		self.body = Body::Form(data);

		self
	}

	/// Sends `value` as a JSON body.
	pub fn json(mut self, value: Value) -> Self {
		self.body = Body::Json(value);

		self
	}
}

/// HTTP status plus decoded JSON body.
///
/// Non-2xx statuses are not errors; callers inspect [`ApiResponse::is_success`] and the
/// provider's error fields themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Decoded JSON body, or `null` when the body was empty.
	pub body: Value,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Humanity's `data` envelope field, when present.
	pub fn data(&self) -> Option<&Value> {
		self.body.get("data")
	}

	/// Consumes the response, returning the decoded body.
	pub fn into_body(self) -> Value {
		self.body
	}

	/// Deserializes the body into `T`, reporting the failing JSON path.
	pub fn parse<T>(&self) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
	where
		T: for<'de> Deserialize<'de>,
	{
		serde_path_to_error::deserialize(&self.body)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn params_keep_order_and_encode_as_form() {
		let params =
			Params::new().with("start_date", "2025-01-06").with("note", "a b&c").with("mode", 2);

		assert_eq!(params.len(), 3);
		assert_eq!(params.get("mode"), Some("2"));
		assert_eq!(params.to_form(), "start_date=2025-01-06&note=a+b%26c&mode=2");
	}

	#[test]
	fn set_replaces_existing_keys() {
		let mut params = Params::from([("is_hourly", "1"), ("reason", "trip"), ("is_hourly", "1")]);

		params.set("is_hourly", 0);

		assert_eq!(params.iter().collect::<Vec<_>>(), vec![("reason", "trip"), ("is_hourly", "0")]);
	}

	#[test]
	fn params_collect_from_pairs() {
		let params = Params::from([("status", 1), ("id", 7)]);

		assert_eq!(params.iter().collect::<Vec<_>>(), vec![("status", "1"), ("id", "7")]);
	}

	#[test]
	fn json_bodies_carry_json_content_type() {
		let body = Body::Json(serde_json::json!({ "datapoints": [1, 2] }));

		assert_eq!(body.content_type(), Some("application/json"));
		assert_eq!(
			body.to_bytes().expect("JSON bodies should encode."),
			br#"{"datapoints":[1,2]}"#.to_vec()
		);
		assert_eq!(Body::Empty.content_type(), None);
	}

	#[test]
	fn response_exposes_data_envelope() {
		let response = ApiResponse {
			status: 200,
			body: serde_json::json!({ "status": 1, "data": { "id": 42 } }),
		};

		assert!(response.is_success());
		assert_eq!(response.data().and_then(|data| data.get("id")), Some(&Value::from(42)));

		#[derive(Deserialize)]
		struct Envelope {
			data: Item,
		}
		#[derive(Deserialize)]
		struct Item {
			id: u64,
		}

		let envelope: Envelope = response.parse().expect("Envelope should deserialize.");

		assert_eq!(envelope.data.id, 42);
	}
}
