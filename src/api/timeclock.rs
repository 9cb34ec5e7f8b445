//! Timeclocks, clock events, terminals, and employee clock-in/out.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET timeclocks`.
pub const GET_TIMECLOCKS: Endpoint =
	Endpoint::new("get_timeclocks", Method::Get, "timeclocks", PermissionLevel::Employee);
/// `GET timeclocks/{}`.
pub const GET_TIMECLOCK: Endpoint =
	Endpoint::new("get_timeclock", Method::Get, "timeclocks/{}", PermissionLevel::Employee);
/// `GET timeclocks/status/{}/{}`.
pub const GET_TIMECLOCK_STATUS: Endpoint = Endpoint::new(
	"get_timeclock_status",
	Method::Get,
	"timeclocks/status/{}/{}",
	PermissionLevel::Employee,
);
/// `POST timeclocks`.
pub const POST_TIMECLOCK: Endpoint =
	Endpoint::new("post_timeclock", Method::Post, "timeclocks", PermissionLevel::Employee);
/// `PUT timeclocks/{}`.
pub const PUT_TIMECLOCK: Endpoint =
	Endpoint::new("put_timeclock", Method::Put, "timeclocks/{}", PermissionLevel::Employee);
/// `DELETE timeclocks/{}`.
pub const DELETE_TIMECLOCK: Endpoint =
	Endpoint::new("delete_timeclock", Method::Delete, "timeclocks/{}", PermissionLevel::Employee);
/// `POST timeclock/addclocktime`.
pub const POST_ADD_CLOCK_TIME: Endpoint = Endpoint::new(
	"post_add_clock_time",
	Method::Post,
	"timeclock/addclocktime",
	PermissionLevel::Employee,
);
/// `POST timeclock/savenote`.
pub const POST_SAVE_NOTE: Endpoint =
	Endpoint::new("post_save_note", Method::Post, "timeclock/savenote", PermissionLevel::Employee);
/// `PUT timeclock/manage`.
pub const PUT_MANAGE_TIME_CLOCK: Endpoint = Endpoint::new(
	"put_manage_time_clock",
	Method::Put,
	"timeclock/manage",
	PermissionLevel::Employee,
);
/// `PUT timeclock/forceclockout`.
pub const PUT_FORCE_CLOCK_OUT: Endpoint = Endpoint::new(
	"put_force_clock_out",
	Method::Put,
	"timeclock/forceclockout",
	PermissionLevel::Employee,
);
/// `GET timeclocks/event/{}`.
pub const GET_TIMECLOCK_EVENT: Endpoint = Endpoint::new(
	"get_timeclock_event",
	Method::Get,
	"timeclocks/event/{}",
	PermissionLevel::Employee,
);
/// `POST timeclocks/event/{}`.
pub const POST_TIMECLOCK_EVENT: Endpoint = Endpoint::new(
	"post_timeclock_event",
	Method::Post,
	"timeclocks/event/{}",
	PermissionLevel::Employee,
);
/// `PUT timeclocks/event/{}`.
pub const PUT_TIMECLOCK_EVENT: Endpoint = Endpoint::new(
	"put_timeclock_event",
	Method::Put,
	"timeclocks/event/{}",
	PermissionLevel::Employee,
);
/// `DELETE timeclocks/event/{}`.
pub const DELETE_TIMECLOCK_EVENT: Endpoint = Endpoint::new(
	"delete_timeclock_event",
	Method::Delete,
	"timeclocks/event/{}",
	PermissionLevel::Employee,
);
/// `GET timeclocks/locations`.
pub const GET_TIMECLOCK_LOCATIONS: Endpoint = Endpoint::new(
	"get_timeclock_locations",
	Method::Get,
	"timeclocks/locations",
	PermissionLevel::ScheduleViewer,
);
/// `POST timeclocks/locations`.
pub const POST_TIMECLOCK_LOCATION: Endpoint = Endpoint::new(
	"post_timeclock_location",
	Method::Post,
	"timeclocks/locations",
	PermissionLevel::Supervisor,
);
/// `DELETE timeclocks/locations/{}`.
pub const DELETE_TIMECLOCK_LOCATION: Endpoint = Endpoint::new(
	"delete_timeclock_location",
	Method::Delete,
	"timeclocks/locations/{}",
	PermissionLevel::Supervisor,
);
/// `GET timeclocks/terminal`.
pub const GET_TIMECLOCK_TERMINALS: Endpoint = Endpoint::new(
	"get_timeclock_terminals",
	Method::Get,
	"timeclocks/terminal",
	PermissionLevel::ScheduleViewer,
);
/// `GET timeclocks/terminal/{}`.
pub const GET_TIMECLOCK_TERMINAL: Endpoint = Endpoint::new(
	"get_timeclock_terminal",
	Method::Get,
	"timeclocks/terminal/{}",
	PermissionLevel::ScheduleViewer,
);
/// `POST timeclocks/terminal`.
pub const POST_TIMECLOCK_TERMINAL: Endpoint = Endpoint::new(
	"post_timeclock_terminal",
	Method::Post,
	"timeclocks/terminal",
	PermissionLevel::Supervisor,
);
/// `PUT timeclocks/terminal/{}`.
pub const PUT_TIMECLOCK_TERMINAL: Endpoint = Endpoint::new(
	"put_timeclock_terminal",
	Method::Put,
	"timeclocks/terminal/{}",
	PermissionLevel::Supervisor,
);
/// `DELETE timeclocks/terminal/{}`.
pub const DELETE_TIMECLOCK_TERMINAL: Endpoint = Endpoint::new(
	"delete_timeclock_terminal",
	Method::Delete,
	"timeclocks/terminal/{}",
	PermissionLevel::Supervisor,
);
/// `POST terminal/clockin/{}`.
pub const POST_TERMINAL_CLOCKIN: Endpoint = Endpoint::new(
	"post_terminal_clockin",
	Method::Post,
	"terminal/clockin/{}",
	PermissionLevel::Employee,
);
/// `POST terminal/login/{}`.
pub const POST_TERMINAL_LOGIN: Endpoint = Endpoint::new(
	"post_terminal_login",
	Method::Post,
	"terminal/login/{}",
	PermissionLevel::Employee,
);
/// `POST terminal/clockout/{}`.
pub const POST_TERMINAL_CLOCKOUT: Endpoint = Endpoint::new(
	"post_terminal_clockout",
	Method::Post,
	"terminal/clockout/{}",
	PermissionLevel::Employee,
);
/// `GET preclockins`.
pub const GET_PRECLOCKINS: Endpoint =
	Endpoint::new("get_preclockins", Method::Get, "preclockins", PermissionLevel::Supervisor);
/// `GET employees/{}/preclockin`.
pub const GET_EMPLOYEES_PRECLOCKIN: Endpoint = Endpoint::new(
	"get_employees_preclockin",
	Method::Get,
	"employees/{}/preclockin",
	PermissionLevel::Employee,
);
/// `POST employees/{}/preclockin`.
pub const POST_EMPLOYEES_PRECLOCKIN: Endpoint = Endpoint::new(
	"post_employees_preclockin",
	Method::Post,
	"employees/{}/preclockin",
	PermissionLevel::Employee,
);
/// `POST employees/{}/clockin`.
pub const POST_EMPLOYEE_CLOCKIN: Endpoint = Endpoint::new(
	"post_employee_clockin",
	Method::Post,
	"employees/{}/clockin",
	PermissionLevel::Employee,
);
/// `PUT employees/{}/clockout`.
pub const PUT_EMPLOYEE_CLOCKOUT: Endpoint = Endpoint::new(
	"put_employee_clockout",
	Method::Put,
	"employees/{}/clockout",
	PermissionLevel::Employee,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_TIMECLOCKS,
	GET_TIMECLOCK,
	GET_TIMECLOCK_STATUS,
	POST_TIMECLOCK,
	PUT_TIMECLOCK,
	DELETE_TIMECLOCK,
	POST_ADD_CLOCK_TIME,
	POST_SAVE_NOTE,
	PUT_MANAGE_TIME_CLOCK,
	PUT_FORCE_CLOCK_OUT,
	GET_TIMECLOCK_EVENT,
	POST_TIMECLOCK_EVENT,
	PUT_TIMECLOCK_EVENT,
	DELETE_TIMECLOCK_EVENT,
	GET_TIMECLOCK_LOCATIONS,
	POST_TIMECLOCK_LOCATION,
	DELETE_TIMECLOCK_LOCATION,
	GET_TIMECLOCK_TERMINALS,
	GET_TIMECLOCK_TERMINAL,
	POST_TIMECLOCK_TERMINAL,
	PUT_TIMECLOCK_TERMINAL,
	DELETE_TIMECLOCK_TERMINAL,
	POST_TERMINAL_CLOCKIN,
	POST_TERMINAL_LOGIN,
	POST_TERMINAL_CLOCKOUT,
	GET_PRECLOCKINS,
	GET_EMPLOYEES_PRECLOCKIN,
	POST_EMPLOYEES_PRECLOCKIN,
	POST_EMPLOYEE_CLOCKIN,
	PUT_EMPLOYEE_CLOCKOUT,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists timeclock entries.
	pub async fn get_timeclocks(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCKS).query(query)).await
	}

	/// Returns one timeclock entry.
	pub async fn get_timeclock(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCK).id(id)).await
	}

	/// Returns the clock status of an employee; `details` requests the extended payload.
	pub async fn get_timeclock_status(
		&self,
		employee_id: impl Display,
		details: bool,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCK_STATUS).id(employee_id).id(u8::from(details))).await
	}

	/// Creates a timeclock entry.
	pub async fn post_timeclock(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TIMECLOCK).form(data)).await
	}

	/// Updates a timeclock entry.
	pub async fn put_timeclock(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TIMECLOCK).id(id).form(data)).await
	}

	/// Deletes a timeclock entry.
	pub async fn delete_timeclock(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_TIMECLOCK).id(id)).await
	}

	/// Adds clock time manually.
	pub async fn post_add_clock_time(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_ADD_CLOCK_TIME).form(data)).await
	}

	/// Saves a note on a timeclock entry.
	pub async fn post_save_note(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_SAVE_NOTE).form(data)).await
	}

	/// Applies a manager action to timeclock entries.
	pub async fn put_manage_time_clock(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_MANAGE_TIME_CLOCK).form(data)).await
	}

	/// Forces a clock-out.
	pub async fn put_force_clock_out(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_FORCE_CLOCK_OUT).form(data)).await
	}

	/// Returns the events of a timeclock entry.
	pub async fn get_timeclock_event(&self, timeclock_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCK_EVENT).id(timeclock_id)).await
	}

	/// Adds an event to a timeclock entry.
	pub async fn post_timeclock_event(
		&self,
		timeclock_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TIMECLOCK_EVENT).id(timeclock_id).form(data)).await
	}

	/// Updates an event of a timeclock entry.
	pub async fn put_timeclock_event(
		&self,
		timeclock_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TIMECLOCK_EVENT).id(timeclock_id).form(data)).await
	}

	/// Deletes an event of a timeclock entry.
	pub async fn delete_timeclock_event(
		&self,
		timeclock_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_TIMECLOCK_EVENT).id(timeclock_id).form(data)).await
	}

	/// Lists timeclock locations.
	pub async fn get_timeclock_locations(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCK_LOCATIONS)).await
	}

	/// Creates a timeclock location.
	pub async fn post_timeclock_location(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TIMECLOCK_LOCATION).form(data)).await
	}

	/// Deletes a timeclock location.
	pub async fn delete_timeclock_location(
		&self,
		timeclock_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_TIMECLOCK_LOCATION).id(timeclock_id).form(data)).await
	}

	/// Lists timeclock terminals.
	pub async fn get_timeclock_terminals(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCK_TERMINALS)).await
	}

	/// Returns one timeclock terminal.
	pub async fn get_timeclock_terminal(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMECLOCK_TERMINAL).id(id)).await
	}

	/// Registers a timeclock terminal.
	pub async fn post_timeclock_terminal(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TIMECLOCK_TERMINAL).form(data)).await
	}

	/// Updates a timeclock terminal.
	pub async fn put_timeclock_terminal(
		&self,
		terminal_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TIMECLOCK_TERMINAL).id(terminal_id).form(data)).await
	}

	/// Deletes a timeclock terminal.
	pub async fn delete_timeclock_terminal(
		&self,
		terminal_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_TIMECLOCK_TERMINAL).id(terminal_id)).await
	}

	/// Clocks in through a terminal.
	pub async fn post_terminal_clockin(
		&self,
		terminal_key: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TERMINAL_CLOCKIN).id(terminal_key).form(data)).await
	}

	/// Logs in to a terminal.
	pub async fn post_terminal_login(
		&self,
		terminal_key: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TERMINAL_LOGIN).id(terminal_key).form(data)).await
	}

	/// Clocks out through a terminal.
	pub async fn post_terminal_clockout(
		&self,
		terminal_key: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TERMINAL_CLOCKOUT).id(terminal_key).form(data)).await
	}

	/// Lists pre-clock-ins awaiting review.
	pub async fn get_preclockins(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_PRECLOCKINS)).await
	}

	/// Returns the pre-clock-in of an employee.
	pub async fn get_employees_preclockin(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEES_PRECLOCKIN).id(id)).await
	}

	/// Records a pre-clock-in for an employee.
	pub async fn post_employees_preclockin(
		&self,
		employee_id: impl Display,
	) -> Result<ApiResponse> {
		let call = Call::new(POST_EMPLOYEES_PRECLOCKIN).id(employee_id).form(Params::new());

		self.dispatch(call).await
	}

	/// Clocks an employee in.
	pub async fn post_employee_clockin(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_EMPLOYEE_CLOCKIN).id(employee_id).form(data)).await
	}

	/// Clocks an employee out.
	pub async fn put_employee_clockout(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_EMPLOYEE_CLOCKOUT).id(employee_id).form(data)).await
	}
}
