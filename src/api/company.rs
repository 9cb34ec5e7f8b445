//! The authenticated identity and company-wide settings.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET me`.
pub const GET_ME: Endpoint =
	Endpoint::new("get_me", Method::Get, "me", PermissionLevel::ScheduleViewer);
/// `GET companies`.
pub const GET_COMPANIES: Endpoint =
	Endpoint::new("get_companies", Method::Get, "companies", PermissionLevel::Supervisor);
/// `GET companies/{}`.
pub const GET_COMPANY: Endpoint =
	Endpoint::new("get_company", Method::Get, "companies/{}", PermissionLevel::Supervisor);
/// `GET company/settings`.
pub const GET_COMPANY_SETTINGS: Endpoint = Endpoint::new(
	"get_company_settings",
	Method::Get,
	"company/settings",
	PermissionLevel::ScheduleViewer,
);
/// `PUT company/settings`.
pub const PUT_COMPANY_SETTINGS: Endpoint = Endpoint::new(
	"put_company_settings",
	Method::Put,
	"company/settings",
	PermissionLevel::Manager,
);
/// `GET company/number_of_requests`.
pub const GET_NUMBER_OF_REQUESTS: Endpoint = Endpoint::new(
	"get_number_of_requests",
	Method::Get,
	"company/number_of_requests",
	PermissionLevel::Employee,
);
/// `GET company/business`.
pub const GET_BUSINESS: Endpoint =
	Endpoint::new("get_business", Method::Get, "company/business", PermissionLevel::Employee);
/// `GET company/group_perms`.
pub const GET_GROUP_PERMISSIONS: Endpoint = Endpoint::new(
	"get_group_permissions",
	Method::Get,
	"company/group_perms",
	PermissionLevel::Employee,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_ME,
	GET_COMPANIES,
	GET_COMPANY,
	GET_COMPANY_SETTINGS,
	PUT_COMPANY_SETTINGS,
	GET_NUMBER_OF_REQUESTS,
	GET_BUSINESS,
	GET_GROUP_PERMISSIONS,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns the authenticated employee.
	pub async fn get_me(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_ME)).await
	}

	/// Lists companies visible to the identity.
	pub async fn get_companies(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_COMPANIES).query(query)).await
	}

	/// Returns one company.
	pub async fn get_company(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_COMPANY).id(id)).await
	}

	/// Returns the company settings.
	pub async fn get_company_settings(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_COMPANY_SETTINGS)).await
	}

	/// Updates the company settings.
	pub async fn put_company_settings(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_COMPANY_SETTINGS).form(data)).await
	}

	/// Returns the API request count for the company.
	pub async fn get_number_of_requests(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_NUMBER_OF_REQUESTS)).await
	}

	/// Returns the business profile.
	pub async fn get_business(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_BUSINESS)).await
	}

	/// Returns the permission groups defined for the company.
	pub async fn get_group_permissions(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_GROUP_PERMISSIONS)).await
	}
}
