//! Leave requests, leave types, and per-employee leave type settings.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET leaves`.
pub const GET_LEAVES: Endpoint =
	Endpoint::new("get_leaves", Method::Get, "leaves", PermissionLevel::ScheduleViewer);
/// `GET leaves/{}`.
pub const GET_LEAVE: Endpoint =
	Endpoint::new("get_leave", Method::Get, "leaves/{}", PermissionLevel::ScheduleViewer);
/// `POST leaves`.
pub const POST_LEAVE_REQUEST: Endpoint =
	Endpoint::new("post_leave_request", Method::Post, "leaves", PermissionLevel::Employee);
/// `POST leaves`.
pub const POST_LEAVE_REQUEST_HOURLY: Endpoint =
	Endpoint::new("post_leave_request_hourly", Method::Post, "leaves", PermissionLevel::Employee);
/// `PUT leaves/{}`.
pub const PUT_LEAVE: Endpoint =
	Endpoint::new("put_leave", Method::Put, "leaves/{}", PermissionLevel::Employee);
/// `PUT leaves/{}`.
pub const PUT_APPROVING_LEAVE_REQUEST: Endpoint = Endpoint::new(
	"put_approving_leave_request",
	Method::Put,
	"leaves/{}",
	PermissionLevel::ScheduleViewer,
);
/// `PUT leaves/{}`.
pub const PUT_REJECTING_LEAVE_REQUEST: Endpoint = Endpoint::new(
	"put_rejecting_leave_request",
	Method::Put,
	"leaves/{}",
	PermissionLevel::ScheduleViewer,
);
/// `DELETE leaves/{}`.
pub const DELETE_LEAVE: Endpoint =
	Endpoint::new("delete_leave", Method::Delete, "leaves/{}", PermissionLevel::Employee);
/// `GET leave-types`.
pub const GET_LEAVE_TYPES: Endpoint =
	Endpoint::new("get_leave_types", Method::Get, "leave-types", PermissionLevel::ScheduleViewer);
/// `DELETE leave-types/{}`.
pub const DELETE_LEAVE_TYPE: Endpoint =
	Endpoint::new("delete_leave_type", Method::Delete, "leave-types/{}", PermissionLevel::Employee);
/// `POST leave-types`.
pub const POST_LEAVE_TYPE: Endpoint =
	Endpoint::new("post_leave_type", Method::Post, "leave-types", PermissionLevel::Employee);
/// `PUT leave-types/{}`.
pub const PUT_LEAVE_TYPE: Endpoint =
	Endpoint::new("put_leave_type", Method::Put, "leave-types/{}", PermissionLevel::ScheduleViewer);
/// `GET employees/{}/leave-types`.
pub const GET_EMPLOYEE_LEAVE_TYPES: Endpoint = Endpoint::new(
	"get_employee_leave_types",
	Method::Get,
	"employees/{}/leave-types",
	PermissionLevel::ScheduleViewer,
);
/// `PUT employees/{}/leave-types`.
pub const PUT_EMPLOYEE_LEAVE_TYPES: Endpoint = Endpoint::new(
	"put_employee_leave_types",
	Method::Put,
	"employees/{}/leave-types",
	PermissionLevel::ScheduleViewer,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_LEAVES,
	GET_LEAVE,
	POST_LEAVE_REQUEST,
	POST_LEAVE_REQUEST_HOURLY,
	PUT_LEAVE,
	PUT_APPROVING_LEAVE_REQUEST,
	PUT_REJECTING_LEAVE_REQUEST,
	DELETE_LEAVE,
	GET_LEAVE_TYPES,
	DELETE_LEAVE_TYPE,
	POST_LEAVE_TYPE,
	PUT_LEAVE_TYPE,
	GET_EMPLOYEE_LEAVE_TYPES,
	PUT_EMPLOYEE_LEAVE_TYPES,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists leave requests.
	pub async fn get_leaves(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_LEAVES).query(query)).await
	}

	/// Returns one leave request.
	pub async fn get_leave(&self, id: impl Display, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_LEAVE).id(id).query(query)).await
	}

	/// Requests a full-day leave. `is_hourly` is forced to `0`.
	pub async fn post_leave_request(&self, mut data: Params) -> Result<ApiResponse> {
		data.set("is_hourly", 0);

		self.dispatch(Call::new(POST_LEAVE_REQUEST).form(data)).await
	}

	/// Requests an hourly leave. `is_hourly` is forced to `1`.
	pub async fn post_leave_request_hourly(&self, mut data: Params) -> Result<ApiResponse> {
		data.set("is_hourly", 1);

		self.dispatch(Call::new(POST_LEAVE_REQUEST_HOURLY).form(data)).await
	}

	/// Updates a leave request.
	pub async fn put_leave(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_LEAVE).id(id).form(data)).await
	}

	/// Approves a leave request (`status=1`).
	pub async fn put_approving_leave_request(&self, leave_id: impl Display) -> Result<ApiResponse> {
		let call = Call::new(PUT_APPROVING_LEAVE_REQUEST)
			.id(leave_id)
			.form(Params::from([("status", 1)]));

		self.dispatch(call).await
	}

	/// Rejects a leave request (`status=-1`).
	pub async fn put_rejecting_leave_request(&self, leave_id: impl Display) -> Result<ApiResponse> {
		let call = Call::new(PUT_REJECTING_LEAVE_REQUEST)
			.id(leave_id)
			.form(Params::from([("status", -1)]));

		self.dispatch(call).await
	}

	/// Deletes a leave request.
	pub async fn delete_leave(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_LEAVE).id(id)).await
	}

	/// Lists leave types.
	pub async fn get_leave_types(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_LEAVE_TYPES)).await
	}

	/// Deletes a leave type.
	pub async fn delete_leave_type(&self, leave_type_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_LEAVE_TYPE).id(leave_type_id)).await
	}

	/// Creates a leave type.
	pub async fn post_leave_type(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_LEAVE_TYPE).form(data)).await
	}

	/// Updates a leave type.
	pub async fn put_leave_type(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_LEAVE_TYPE).id(id).form(data)).await
	}

	/// Lists the leave types available to an employee.
	pub async fn get_employee_leave_types(&self, employee_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE_LEAVE_TYPES).id(employee_id)).await
	}

	/// Enables or disables leave types for an employee.
	pub async fn put_employee_leave_types(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_EMPLOYEE_LEAVE_TYPES).id(employee_id).form(data)).await
	}
}
