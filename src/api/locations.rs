//! Locations, positions, and position break rules.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET locations`.
pub const GET_LOCATIONS: Endpoint =
	Endpoint::new("get_locations", Method::Get, "locations", PermissionLevel::ScheduleViewer);
/// `GET locations/{}`.
pub const GET_LOCATION: Endpoint =
	Endpoint::new("get_location", Method::Get, "locations/{}", PermissionLevel::Employee);
/// `POST locations`.
pub const POST_LOCATION: Endpoint =
	Endpoint::new("post_location", Method::Post, "locations", PermissionLevel::Employee);
/// `PUT locations/{}`.
pub const PUT_LOCATION: Endpoint =
	Endpoint::new("put_location", Method::Put, "locations/{}", PermissionLevel::Supervisor);
/// `DELETE locations/{}`.
pub const DELETE_LOCATION: Endpoint =
	Endpoint::new("delete_location", Method::Delete, "locations/{}", PermissionLevel::Employee);
/// `GET positions`.
pub const GET_POSITIONS: Endpoint =
	Endpoint::new("get_positions", Method::Get, "positions", PermissionLevel::ScheduleViewer);
/// `GET positions/{}`.
pub const GET_POSITION: Endpoint =
	Endpoint::new("get_position", Method::Get, "positions/{}", PermissionLevel::ScheduleViewer);
/// `POST positions`.
pub const POST_POSITION: Endpoint =
	Endpoint::new("post_position", Method::Post, "positions", PermissionLevel::Supervisor);
/// `PUT positions/{}`.
pub const PUT_POSITION: Endpoint =
	Endpoint::new("put_position", Method::Put, "positions/{}", PermissionLevel::Supervisor);
/// `DELETE positions/{}`.
pub const DELETE_POSITION: Endpoint =
	Endpoint::new("delete_position", Method::Delete, "positions/{}", PermissionLevel::Supervisor);
/// `GET positions/{}/breakrules`.
pub const GET_POSITION_BREAK_RULES: Endpoint = Endpoint::new(
	"get_position_break_rules",
	Method::Get,
	"positions/{}/breakrules",
	PermissionLevel::ScheduleViewer,
);
/// `POST breakrules`.
pub const POST_POSITION_BREAK_RULES: Endpoint = Endpoint::new(
	"post_position_break_rules",
	Method::Post,
	"breakrules",
	PermissionLevel::Supervisor,
);
/// `DELETE breakrules/{}`.
pub const DELETE_POSITION_BREAK_RULES: Endpoint = Endpoint::new(
	"delete_position_break_rules",
	Method::Delete,
	"breakrules/{}",
	PermissionLevel::Supervisor,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_LOCATIONS,
	GET_LOCATION,
	POST_LOCATION,
	PUT_LOCATION,
	DELETE_LOCATION,
	GET_POSITIONS,
	GET_POSITION,
	POST_POSITION,
	PUT_POSITION,
	DELETE_POSITION,
	GET_POSITION_BREAK_RULES,
	POST_POSITION_BREAK_RULES,
	DELETE_POSITION_BREAK_RULES,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists locations.
	pub async fn get_locations(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_LOCATIONS).query(query)).await
	}

	/// Returns one location.
	pub async fn get_location(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_LOCATION).id(id)).await
	}

	/// Creates a location.
	pub async fn post_location(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_LOCATION).form(data)).await
	}

	/// Updates a location.
	pub async fn put_location(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_LOCATION).id(id).form(data)).await
	}

	/// Deletes a location.
	pub async fn delete_location(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_LOCATION).id(id)).await
	}

	/// Lists positions (schedules).
	pub async fn get_positions(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_POSITIONS).query(query)).await
	}

	/// Returns one position.
	pub async fn get_position(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_POSITION).id(id)).await
	}

	/// Creates a position.
	pub async fn post_position(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_POSITION).form(data)).await
	}

	/// Updates a position.
	pub async fn put_position(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_POSITION).id(id).form(data)).await
	}

	/// Deletes a position.
	pub async fn delete_position(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_POSITION).id(id)).await
	}

	/// Lists the break rules of a position.
	pub async fn get_position_break_rules(&self, schedule_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_POSITION_BREAK_RULES).id(schedule_id)).await
	}

	/// Creates break rules.
	pub async fn post_position_break_rules(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_POSITION_BREAK_RULES).form(data)).await
	}

	/// Deletes a break rule.
	pub async fn delete_position_break_rules(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_POSITION_BREAK_RULES).id(id)).await
	}
}
