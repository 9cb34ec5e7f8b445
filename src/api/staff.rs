//! Employees, their positions, skills, and custom fields.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET employees`.
pub const GET_EMPLOYEES: Endpoint =
	Endpoint::new("get_employees", Method::Get, "employees", PermissionLevel::ScheduleViewer);
/// `GET employees/{}`.
pub const GET_EMPLOYEE: Endpoint =
	Endpoint::new("get_employee", Method::Get, "employees/{}", PermissionLevel::Employee);
/// `GET employees/eid/{}`.
pub const GET_EMPLOYEE_BY_EMPLOYEE_ID: Endpoint = Endpoint::new(
	"get_employee_by_employee_id",
	Method::Get,
	"employees/eid/{}",
	PermissionLevel::Employee,
);
/// `POST employees`.
pub const POST_EMPLOYEE: Endpoint =
	Endpoint::new("post_employee", Method::Post, "employees", PermissionLevel::Scheduler);
/// `PUT employees/{}`.
pub const PUT_EMPLOYEE: Endpoint =
	Endpoint::new("put_employee", Method::Put, "employees/{}", PermissionLevel::Employee);
/// `DELETE employees/{}`.
pub const DELETE_EMPLOYEE: Endpoint =
	Endpoint::new("delete_employee", Method::Delete, "employees/{}", PermissionLevel::Employee);
/// `GET employees/{}/positions`.
pub const GET_EMPLOYEE_POSITIONS: Endpoint = Endpoint::new(
	"get_employee_positions",
	Method::Get,
	"employees/{}/positions",
	PermissionLevel::ScheduleViewer,
);
/// `GET employees/{}/positions/{}`.
pub const GET_EMPLOYEE_POSITION: Endpoint = Endpoint::new(
	"get_employee_position",
	Method::Get,
	"employees/{}/positions/{}",
	PermissionLevel::ScheduleViewer,
);
/// `POST employees/{}/positions/{}`.
pub const POST_EMPLOYEE_POSITION: Endpoint = Endpoint::new(
	"post_employee_position",
	Method::Post,
	"employees/{}/positions/{}",
	PermissionLevel::Supervisor,
);
/// `DELETE employees/{}/positions/{}`.
pub const DELETE_EMPLOYEE_POSITION: Endpoint = Endpoint::new(
	"delete_employee_position",
	Method::Delete,
	"employees/{}/positions/{}",
	PermissionLevel::Supervisor,
);
/// `PUT employees/{}/positions/{}`.
pub const PUT_EMPLOYEE_POSITION: Endpoint = Endpoint::new(
	"put_employee_position",
	Method::Put,
	"employees/{}/positions/{}",
	PermissionLevel::Supervisor,
);
/// `GET employees/{}/manage-positions`.
pub const GET_EMPLOYEE_MANAGE_POSITIONS: Endpoint = Endpoint::new(
	"get_employee_manage_positions",
	Method::Get,
	"employees/{}/manage-positions",
	PermissionLevel::Employee,
);
/// `POST employees/{}/manage-positions`.
pub const POST_EMPLOYEE_MANAGE_POSITIONS: Endpoint = Endpoint::new(
	"post_employee_manage_positions",
	Method::Post,
	"employees/{}/manage-positions",
	PermissionLevel::Employee,
);
/// `GET skills`.
pub const GET_SKILLS: Endpoint =
	Endpoint::new("get_skills", Method::Get, "skills", PermissionLevel::ScheduleViewer);
/// `GET skills/{}`.
pub const GET_SKILL: Endpoint =
	Endpoint::new("get_skill", Method::Get, "skills/{}", PermissionLevel::Employee);
/// `POST skills`.
pub const POST_SKILLS: Endpoint =
	Endpoint::new("post_skills", Method::Post, "skills", PermissionLevel::Employee);
/// `PUT skills/{}`.
pub const PUT_SKILL: Endpoint =
	Endpoint::new("put_skill", Method::Put, "skills/{}", PermissionLevel::Employee);
/// `DELETE skills/{}`.
pub const DELETE_SKILL: Endpoint =
	Endpoint::new("delete_skill", Method::Delete, "skills/{}", PermissionLevel::Employee);
/// `GET customfields`.
pub const GET_CUSTOM_FIELDS: Endpoint = Endpoint::new(
	"get_custom_fields",
	Method::Get,
	"customfields",
	PermissionLevel::ScheduleViewer,
);
/// `GET customfields/{}`.
pub const GET_CUSTOM_FIELD: Endpoint =
	Endpoint::new("get_custom_field", Method::Get, "customfields/{}", PermissionLevel::Employee);
/// `POST customfields`.
pub const POST_CUSTOM_FIELDS: Endpoint =
	Endpoint::new("post_custom_fields", Method::Post, "customfields", PermissionLevel::Supervisor);
/// `PUT customfields/{}`.
pub const PUT_CUSTOM_FIELDS: Endpoint =
	Endpoint::new("put_custom_fields", Method::Put, "customfields/{}", PermissionLevel::Supervisor);
/// `DELETE customfields/{}`.
pub const DELETE_CUSTOM_FIELD: Endpoint = Endpoint::new(
	"delete_custom_field",
	Method::Delete,
	"customfields/{}",
	PermissionLevel::Supervisor,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_EMPLOYEES,
	GET_EMPLOYEE,
	GET_EMPLOYEE_BY_EMPLOYEE_ID,
	POST_EMPLOYEE,
	PUT_EMPLOYEE,
	DELETE_EMPLOYEE,
	GET_EMPLOYEE_POSITIONS,
	GET_EMPLOYEE_POSITION,
	POST_EMPLOYEE_POSITION,
	DELETE_EMPLOYEE_POSITION,
	PUT_EMPLOYEE_POSITION,
	GET_EMPLOYEE_MANAGE_POSITIONS,
	POST_EMPLOYEE_MANAGE_POSITIONS,
	GET_SKILLS,
	GET_SKILL,
	POST_SKILLS,
	PUT_SKILL,
	DELETE_SKILL,
	GET_CUSTOM_FIELDS,
	GET_CUSTOM_FIELD,
	POST_CUSTOM_FIELDS,
	PUT_CUSTOM_FIELDS,
	DELETE_CUSTOM_FIELD,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists employees.
	pub async fn get_employees(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEES).query(query)).await
	}

	/// Returns one employee by internal id.
	pub async fn get_employee(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE).id(id)).await
	}

	/// Returns one employee by the company-assigned employee id.
	pub async fn get_employee_by_employee_id(
		&self,
		employee_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE_BY_EMPLOYEE_ID).id(employee_id)).await
	}

	/// Creates an employee.
	pub async fn post_employee(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_EMPLOYEE).form(data)).await
	}

	/// Updates an employee.
	pub async fn put_employee(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_EMPLOYEE).id(id).form(data)).await
	}

	/// Deletes an employee.
	pub async fn delete_employee(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_EMPLOYEE).id(id)).await
	}

	/// Lists the positions assigned to an employee.
	pub async fn get_employee_positions(&self, employee_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE_POSITIONS).id(employee_id)).await
	}

	/// Returns one position assignment.
	pub async fn get_employee_position(
		&self,
		employee_id: impl Display,
		position_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE_POSITION).id(employee_id).id(position_id)).await
	}

	/// Assigns a position to an employee.
	pub async fn post_employee_position(
		&self,
		employee_id: impl Display,
		position_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		let call = Call::new(POST_EMPLOYEE_POSITION).id(employee_id).id(position_id).form(data);

		self.dispatch(call).await
	}

	/// Removes a position from an employee.
	pub async fn delete_employee_position(
		&self,
		employee_id: impl Display,
		position_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_EMPLOYEE_POSITION).id(employee_id).id(position_id)).await
	}

	/// Updates a position assignment.
	pub async fn put_employee_position(
		&self,
		employee_id: impl Display,
		position_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		let call = Call::new(PUT_EMPLOYEE_POSITION).id(employee_id).id(position_id).form(data);

		self.dispatch(call).await
	}

	/// Lists the positions an employee manages.
	pub async fn get_employee_manage_positions(
		&self,
		employee_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE_MANAGE_POSITIONS).id(employee_id)).await
	}

	/// Sets the positions an employee manages.
	pub async fn post_employee_manage_positions(
		&self,
		employee_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_EMPLOYEE_MANAGE_POSITIONS).id(employee_id).form(data)).await
	}

	/// Lists skills.
	pub async fn get_skills(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SKILLS)).await
	}

	/// Returns one skill.
	pub async fn get_skill(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SKILL).id(id)).await
	}

	/// Creates a skill.
	pub async fn post_skills(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_SKILLS).form(data)).await
	}

	/// Updates a skill.
	pub async fn put_skill(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_SKILL).id(id).form(data)).await
	}

	/// Deletes a skill.
	pub async fn delete_skill(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_SKILL).id(id)).await
	}

	/// Lists custom fields, forwarding the query parameters.
	pub async fn get_custom_fields(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_CUSTOM_FIELDS).query(query)).await
	}

	/// Returns one custom field.
	pub async fn get_custom_field(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_CUSTOM_FIELD).id(id)).await
	}

	/// Creates a custom field.
	pub async fn post_custom_fields(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_CUSTOM_FIELDS).form(data)).await
	}

	/// Updates a custom field.
	pub async fn put_custom_fields(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_CUSTOM_FIELDS).id(id).form(data)).await
	}

	/// Deletes a custom field.
	pub async fn delete_custom_field(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_CUSTOM_FIELD).id(id)).await
	}
}
