//! Endpoint descriptors: stable name, verb, path template, and documented permission level.

// self
use crate::{_prelude::*, auth::PermissionLevel};

/// Placeholder marking a positional path identifier inside an endpoint template.
pub const PATH_PLACEHOLDER: &str = "{}";

/// HTTP verbs used by the Humanity API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Returns the verb as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}

	pub(crate) fn to_http(self) -> oauth2::http::Method {
		match self {
			Method::Get => oauth2::http::Method::GET,
			Method::Post => oauth2::http::Method::POST,
			Method::Put => oauth2::http::Method::PUT,
			Method::Delete => oauth2::http::Method::DELETE,
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Static description of one resource endpoint.
///
/// `path` is relative to the service's API base and never starts with `/`. Every segment equal
/// to [`PATH_PLACEHOLDER`] is replaced, in order, by an identifier supplied with the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
	/// Stable snake_case name used in spans, metrics, and errors.
	pub name: &'static str,
	/// HTTP verb.
	pub method: Method,
	/// Path template relative to the API base.
	pub path: &'static str,
	/// Lowest-privileged level allowed to call the endpoint.
	pub permission: PermissionLevel,
}
impl Endpoint {
	/// Declares an endpoint.
	pub const fn new(
		name: &'static str,
		method: Method,
		path: &'static str,
		permission: PermissionLevel,
	) -> Self {
		Self { name, method, path, permission }
	}

	/// Number of positional identifiers the path template expects.
	pub fn placeholders(&self) -> usize {
		self.path.split('/').filter(|segment| *segment == PATH_PLACEHOLDER).count()
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} {}", self.method, self.path)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn placeholders_count_whole_segments() {
		let nested = Endpoint::new(
			"get_employee_position",
			Method::Get,
			"employees/{}/positions/{}",
			PermissionLevel::ScheduleViewer,
		);
		let trailing = Endpoint::new(
			"get_group_reports",
			Method::Get,
			"groupaccounts/reports/",
			PermissionLevel::Supervisor,
		);

		assert_eq!(nested.placeholders(), 2);
		assert_eq!(trailing.placeholders(), 0);
		assert_eq!(nested.to_string(), "GET employees/{}/positions/{}");
	}
}
