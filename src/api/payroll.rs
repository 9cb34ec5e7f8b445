//! Payroll ratecards and sales budgets.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET ratecards`.
pub const GET_RATECARDS: Endpoint =
	Endpoint::new("get_ratecards", Method::Get, "ratecards", PermissionLevel::Employee);
/// `GET ratecards/{}`.
pub const GET_RATECARD: Endpoint =
	Endpoint::new("get_ratecard", Method::Get, "ratecards/{}", PermissionLevel::Employee);
/// `POST payroll/ratecards`.
pub const POST_RATECARD: Endpoint =
	Endpoint::new("post_ratecard", Method::Post, "payroll/ratecards", PermissionLevel::Supervisor);
/// `PUT payroll/ratecards/{}`.
pub const PUT_RATECARD: Endpoint =
	Endpoint::new("put_ratecard", Method::Put, "payroll/ratecards/{}", PermissionLevel::Supervisor);
/// `DELETE payroll/ratecards/{}`.
pub const DELETE_RATECARD: Endpoint = Endpoint::new(
	"delete_ratecard",
	Method::Delete,
	"payroll/ratecards/{}",
	PermissionLevel::Manager,
);
/// `GET sales/budget`.
pub const GET_BUDGET: Endpoint =
	Endpoint::new("get_budget", Method::Get, "sales/budget", PermissionLevel::Scheduler);
/// `POST sales/budget`.
pub const POST_BUDGET: Endpoint =
	Endpoint::new("post_budget", Method::Post, "sales/budget", PermissionLevel::Scheduler);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_RATECARDS,
	GET_RATECARD,
	POST_RATECARD,
	PUT_RATECARD,
	DELETE_RATECARD,
	GET_BUDGET,
	POST_BUDGET,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists ratecards.
	pub async fn get_ratecards(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_RATECARDS)).await
	}

	/// Returns one ratecard.
	pub async fn get_ratecard(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_RATECARD).id(id)).await
	}

	/// Creates a ratecard.
	pub async fn post_ratecard(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_RATECARD).form(data)).await
	}

	/// Updates a ratecard.
	pub async fn put_ratecard(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_RATECARD).id(id).form(data)).await
	}

	/// Deletes a ratecard.
	pub async fn delete_ratecard(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_RATECARD).id(id)).await
	}

	/// Returns the sales budget between two dates.
	pub async fn get_budget(
		&self,
		start_date: impl Display,
		end_date: impl Display,
	) -> Result<ApiResponse> {
		let call = Call::new(GET_BUDGET)
			.query(Params::new().with("start_date", start_date).with("end_date", end_date));

		self.dispatch(call).await
	}

	/// Saves a sales budget.
	pub async fn post_budget(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_BUDGET).form(data)).await
	}
}
