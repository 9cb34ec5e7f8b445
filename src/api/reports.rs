//! Reports, the on-now dashboard, and group account reports.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET reports/schedule`.
pub const GET_SCHEDULE_REPORT: Endpoint = Endpoint::new(
	"get_schedule_report",
	Method::Get,
	"reports/schedule",
	PermissionLevel::Employee,
);
/// `GET reports/timesheets`.
pub const GET_TIMESHEET_REPORT: Endpoint = Endpoint::new(
	"get_timesheet_report",
	Method::Get,
	"reports/timesheets",
	PermissionLevel::Employee,
);
/// `GET reports/employee`.
pub const GET_EMPLOYEE_REPORT: Endpoint = Endpoint::new(
	"get_employee_report",
	Method::Get,
	"reports/employee",
	PermissionLevel::Employee,
);
/// `GET reports/custom`.
pub const GET_CUSTOM_REPORT: Endpoint =
	Endpoint::new("get_custom_report", Method::Get, "reports/custom", PermissionLevel::Supervisor);
/// `GET reports/daily_peak_hours`.
pub const GET_DAILY_PEAK_HOURS_REPORT: Endpoint = Endpoint::new(
	"get_daily_peak_hours_report",
	Method::Get,
	"reports/daily_peak_hours",
	PermissionLevel::Supervisor,
);
/// `GET reports/wu_daily_report`.
pub const GET_WORKUNITS_DAILY_REPORT: Endpoint = Endpoint::new(
	"get_workunits_daily_report",
	Method::Get,
	"reports/wu_daily_report",
	PermissionLevel::Employee,
);
/// `GET payroll/report`.
pub const GET_PAYROLL_REPORT: Endpoint =
	Endpoint::new("get_payroll_report", Method::Get, "payroll/report", PermissionLevel::Employee);
/// `GET dashboard/onnow`.
pub const GET_ONNOW: Endpoint =
	Endpoint::new("get_onnow", Method::Get, "dashboard/onnow", PermissionLevel::Employee);
/// `GET groupaccounts/reports/`.
pub const GET_GROUP_REPORTS: Endpoint = Endpoint::new(
	"get_group_reports",
	Method::Get,
	"groupaccounts/reports/",
	PermissionLevel::Supervisor,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_SCHEDULE_REPORT,
	GET_TIMESHEET_REPORT,
	GET_EMPLOYEE_REPORT,
	GET_CUSTOM_REPORT,
	GET_DAILY_PEAK_HOURS_REPORT,
	GET_WORKUNITS_DAILY_REPORT,
	GET_PAYROLL_REPORT,
	GET_ONNOW,
	GET_GROUP_REPORTS,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Runs the schedule report.
	pub async fn get_schedule_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SCHEDULE_REPORT).query(query)).await
	}

	/// Runs the timesheet report.
	pub async fn get_timesheet_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TIMESHEET_REPORT).query(query)).await
	}

	/// Runs the employee report.
	pub async fn get_employee_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_EMPLOYEE_REPORT).query(query)).await
	}

	/// Runs a custom report.
	pub async fn get_custom_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_CUSTOM_REPORT).query(query)).await
	}

	/// Runs the daily peak hours report.
	pub async fn get_daily_peak_hours_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_DAILY_PEAK_HOURS_REPORT).query(query)).await
	}

	/// Runs the daily work units report.
	pub async fn get_workunits_daily_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_WORKUNITS_DAILY_REPORT).query(query)).await
	}

	/// Runs the payroll report.
	pub async fn get_payroll_report(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_PAYROLL_REPORT).query(query)).await
	}

	/// Lists who is on now.
	pub async fn get_onnow(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_ONNOW).query(query)).await
	}

	/// Runs group account reports. The path keeps its trailing slash.
	pub async fn get_group_reports(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_GROUP_REPORTS).query(query)).await
	}
}
