//! Weekly and future availability, approvals, and availability slots/series.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET employees/{}/availabilities/weekly`.
pub const GET_WEEKLY_AVAILABILITY: Endpoint = Endpoint::new(
	"get_weekly_availability",
	Method::Get,
	"employees/{}/availabilities/weekly",
	PermissionLevel::Employee,
);
/// `PUT employees/{}/availabilities/weekly`.
pub const PUT_WEEKLY_AVAILABILITY: Endpoint = Endpoint::new(
	"put_weekly_availability",
	Method::Put,
	"employees/{}/availabilities/weekly",
	PermissionLevel::Employee,
);
/// `DELETE employees/{}/availabilities/weekly`.
pub const DELETE_WEEKLY_AVAILABILITY: Endpoint = Endpoint::new(
	"delete_weekly_availability",
	Method::Delete,
	"employees/{}/availabilities/weekly",
	PermissionLevel::Employee,
);
/// `GET employees/{}/availabilities/future`.
pub const GET_FUTURE_AVAILABILITY: Endpoint = Endpoint::new(
	"get_future_availability",
	Method::Get,
	"employees/{}/availabilities/future",
	PermissionLevel::Employee,
);
/// `POST employees/{}/availabilities/future`.
pub const POST_FUTURE_AVAILABILITY: Endpoint = Endpoint::new(
	"post_future_availability",
	Method::Post,
	"employees/{}/availabilities/future",
	PermissionLevel::Employee,
);
/// `PUT availabilities/future/{}`.
pub const PUT_FUTURE_AVAILABILITY: Endpoint = Endpoint::new(
	"put_future_availability",
	Method::Put,
	"availabilities/future/{}",
	PermissionLevel::Employee,
);
/// `DELETE availabilities/future/{}`.
pub const DELETE_FUTURE_AVAILABILITY: Endpoint = Endpoint::new(
	"delete_future_availability",
	Method::Delete,
	"availabilities/future/{}",
	PermissionLevel::Employee,
);
/// `GET employees/{}/availabilities/approve`.
pub const GET_AVAILABILITY_APPROVE: Endpoint = Endpoint::new(
	"get_availability_approve",
	Method::Get,
	"employees/{}/availabilities/approve",
	PermissionLevel::Scheduler,
);
/// `POST employees/{}/availabilities/approve`.
pub const POST_AVAILABILITY_APPROVE: Endpoint = Endpoint::new(
	"post_availability_approve",
	Method::Post,
	"employees/{}/availabilities/approve",
	PermissionLevel::Scheduler,
);
/// `PUT employees/{}/availabilities/approve`.
pub const PUT_AVAILABILITY_APPROVE: Endpoint = Endpoint::new(
	"put_availability_approve",
	Method::Put,
	"employees/{}/availabilities/approve",
	PermissionLevel::Scheduler,
);
/// `POST employees/availability`.
pub const GET_AVAILABILITY_IN_DATE_PERIOD: Endpoint = Endpoint::new(
	"get_availability_in_date_period",
	Method::Post,
	"employees/availability",
	PermissionLevel::Unspecified,
);
/// `GET employees/availability/`.
pub const GET_SINGLE_AVAILABILITY_SLOT: Endpoint = Endpoint::new(
	"get_single_availability_slot",
	Method::Get,
	"employees/availability/",
	PermissionLevel::Unspecified,
);
/// `POST employees/availability/multiple`.
pub const GET_MULTIPLE_AVAILABILITY: Endpoint = Endpoint::new(
	"get_multiple_availability",
	Method::Post,
	"employees/availability/multiple",
	PermissionLevel::Unspecified,
);
/// `GET employees/availability/series/{}/slots`.
pub const GET_AVAILABILITY_BY_SERIES: Endpoint = Endpoint::new(
	"get_availability_by_series",
	Method::Get,
	"employees/availability/series/{}/slots",
	PermissionLevel::Unspecified,
);
/// `POST employees/availability/create`.
pub const CREATE_SINGLE_AVAILABILITY: Endpoint = Endpoint::new(
	"create_single_availability",
	Method::Post,
	"employees/availability/create",
	PermissionLevel::Unspecified,
);
/// `POST employees/availability/series`.
pub const CREATE_AVAILABILITY_SERIES: Endpoint = Endpoint::new(
	"create_availability_series",
	Method::Post,
	"employees/availability/series",
	PermissionLevel::Unspecified,
);
/// `POST employees/availability/approve`.
pub const APPROVE_AVAILABILITY: Endpoint = Endpoint::new(
	"approve_availability",
	Method::Post,
	"employees/availability/approve",
	PermissionLevel::Unspecified,
);
/// `POST employees/availability/reject`.
pub const REJECT_AVAILABILITY: Endpoint = Endpoint::new(
	"reject_availability",
	Method::Post,
	"employees/availability/reject",
	PermissionLevel::Unspecified,
);
/// `POST employees/availability/reject/{}`.
pub const REJECT_SERIES: Endpoint = Endpoint::new(
	"reject_series",
	Method::Post,
	"employees/availability/reject/{}",
	PermissionLevel::Unspecified,
);
/// `DELETE employees/availability/series/{}`.
pub const DELETE_SERIES: Endpoint = Endpoint::new(
	"delete_series",
	Method::Delete,
	"employees/availability/series/{}",
	PermissionLevel::Unspecified,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_WEEKLY_AVAILABILITY,
	PUT_WEEKLY_AVAILABILITY,
	DELETE_WEEKLY_AVAILABILITY,
	GET_FUTURE_AVAILABILITY,
	POST_FUTURE_AVAILABILITY,
	PUT_FUTURE_AVAILABILITY,
	DELETE_FUTURE_AVAILABILITY,
	GET_AVAILABILITY_APPROVE,
	POST_AVAILABILITY_APPROVE,
	PUT_AVAILABILITY_APPROVE,
	GET_AVAILABILITY_IN_DATE_PERIOD,
	GET_SINGLE_AVAILABILITY_SLOT,
	GET_MULTIPLE_AVAILABILITY,
	GET_AVAILABILITY_BY_SERIES,
	CREATE_SINGLE_AVAILABILITY,
	CREATE_AVAILABILITY_SERIES,
	APPROVE_AVAILABILITY,
	REJECT_AVAILABILITY,
	REJECT_SERIES,
	DELETE_SERIES,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns an employee's weekly availability.
	pub async fn get_weekly_availability(
		&self,
		employee_id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_WEEKLY_AVAILABILITY).id(employee_id).query(query)).await
	}

	/// Updates an employee's weekly availability.
	pub async fn put_weekly_availability(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_WEEKLY_AVAILABILITY).id(employee_id).form(data)).await
	}

	/// Deletes weekly availability entries.
	pub async fn delete_weekly_availability(
		&self,
		user_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_WEEKLY_AVAILABILITY).id(user_id).form(data)).await
	}

	/// Returns an employee's future availability.
	pub async fn get_future_availability(
		&self,
		employee_id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FUTURE_AVAILABILITY).id(employee_id).query(query)).await
	}

	/// Adds future availability for an employee.
	pub async fn post_future_availability(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_FUTURE_AVAILABILITY).id(employee_id).form(data)).await
	}

	/// Updates future availability.
	pub async fn put_future_availability(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_FUTURE_AVAILABILITY).id(employee_id).form(data)).await
	}

	/// Deletes a future availability entry.
	pub async fn delete_future_availability(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_FUTURE_AVAILABILITY).id(id)).await
	}

	/// Lists availability awaiting approval.
	pub async fn get_availability_approve(
		&self,
		employee_id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_AVAILABILITY_APPROVE).id(employee_id).query(query)).await
	}

	/// Approves availability.
	pub async fn post_availability_approve(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_AVAILABILITY_APPROVE).id(employee_id).form(data)).await
	}

	/// Updates an availability approval.
	pub async fn put_availability_approve(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_AVAILABILITY_APPROVE).id(employee_id).form(data)).await
	}

	/// Lists availability in a date period. The provider expects a POST with the period as form
	/// data.
	pub async fn get_availability_in_date_period(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_AVAILABILITY_IN_DATE_PERIOD).form(data)).await
	}

	/// Returns a single availability slot selected by the query.
	pub async fn get_single_availability_slot(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SINGLE_AVAILABILITY_SLOT).query(query)).await
	}

	/// Lists availability for several employees. The provider expects a POST.
	pub async fn get_multiple_availability(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_MULTIPLE_AVAILABILITY).form(data)).await
	}

	/// Lists the slots of an availability series.
	pub async fn get_availability_by_series(
		&self,
		series_id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_AVAILABILITY_BY_SERIES).id(series_id).query(query)).await
	}

	/// Creates a single availability slot.
	pub async fn create_single_availability(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(CREATE_SINGLE_AVAILABILITY).form(data)).await
	}

	/// Creates an availability series.
	pub async fn create_availability_series(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(CREATE_AVAILABILITY_SERIES).form(data)).await
	}

	/// Approves availability slots.
	pub async fn approve_availability(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(APPROVE_AVAILABILITY).form(data)).await
	}

	/// Rejects availability slots.
	pub async fn reject_availability(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(REJECT_AVAILABILITY).form(data)).await
	}

	/// Rejects an availability series.
	pub async fn reject_series(
		&self,
		series_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(REJECT_SERIES).id(series_id).form(data)).await
	}

	/// Deletes an availability series.
	pub async fn delete_series(
		&self,
		series_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_SERIES).id(series_id).form(data)).await
	}
}
