//! Shifts, swaps, trades, shift approvals, and shift breaks.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET shifts`.
pub const GET_SHIFTS: Endpoint =
	Endpoint::new("get_shifts", Method::Get, "shifts", PermissionLevel::ScheduleViewer);
/// `GET shifts/{}`.
pub const GET_SHIFT: Endpoint =
	Endpoint::new("get_shift", Method::Get, "shifts/{}", PermissionLevel::ScheduleViewer);
/// `POST shifts`.
pub const POST_SHIFT: Endpoint =
	Endpoint::new("post_shift", Method::Post, "shifts", PermissionLevel::Supervisor);
/// `PUT shifts/{}`.
pub const PUT_SHIFT: Endpoint =
	Endpoint::new("put_shift", Method::Put, "shifts/{}", PermissionLevel::Employee);
/// `DELETE shifts/{}`.
pub const DELETE_SHIFT: Endpoint =
	Endpoint::new("delete_shift", Method::Delete, "shifts/{}", PermissionLevel::Supervisor);
/// `GET shifts/clear`.
pub const GET_CLEAR: Endpoint =
	Endpoint::new("get_clear", Method::Get, "shifts/clear", PermissionLevel::Employee);
/// `GET shifts/publish`.
pub const GET_PUBLISH: Endpoint =
	Endpoint::new("get_publish", Method::Get, "shifts/publish", PermissionLevel::Employee);
/// `POST shifts/{}/swap`.
pub const POST_SWAP: Endpoint =
	Endpoint::new("post_swap", Method::Post, "shifts/{}/swap", PermissionLevel::Employee);
/// `PUT swap/{}`.
pub const PUT_SWAP: Endpoint =
	Endpoint::new("put_swap", Method::Put, "swap/{}", PermissionLevel::Employee);
/// `GET trade/{}`.
pub const GET_TRADES: Endpoint =
	Endpoint::new("get_trades", Method::Get, "trade/{}", PermissionLevel::Employee);
/// `GET trade/{}`.
pub const GET_TRADE: Endpoint =
	Endpoint::new("get_trade", Method::Get, "trade/{}", PermissionLevel::Employee);
/// `POST trades`.
pub const POST_TRADE: Endpoint =
	Endpoint::new("post_trade", Method::Post, "trades", PermissionLevel::Employee);
/// `PUT trades/{}`.
pub const PUT_TRADE: Endpoint =
	Endpoint::new("put_trade", Method::Put, "trades/{}", PermissionLevel::Employee);
/// `GET shifts/{}/approve`.
pub const GET_SHIFT_APPROVE: Endpoint = Endpoint::new(
	"get_shift_approve",
	Method::Get,
	"shifts/{}/approve",
	PermissionLevel::Supervisor,
);
/// `POST shifts/{}/approve`.
pub const POST_SHIFT_APPROVE: Endpoint = Endpoint::new(
	"post_shift_approve",
	Method::Post,
	"shifts/{}/approve",
	PermissionLevel::Supervisor,
);
/// `PUT shifts/{}/approve`.
pub const PUT_SHIFT_APPROVE: Endpoint = Endpoint::new(
	"put_shift_approve",
	Method::Put,
	"shifts/{}/approve",
	PermissionLevel::Supervisor,
);
/// `DELETE shifts/{}/approve`.
pub const DELETE_SHIFT_APPROVE: Endpoint = Endpoint::new(
	"delete_shift_approve",
	Method::Delete,
	"shifts/{}/approve",
	PermissionLevel::Supervisor,
);
/// `GET shifts/{}/shiftbreaks`.
pub const GET_SHIFT_BREAKS: Endpoint = Endpoint::new(
	"get_shift_breaks",
	Method::Get,
	"shifts/{}/shiftbreaks",
	PermissionLevel::Employee,
);
/// `POST shifts/{}/shiftbreaks`.
pub const POST_SHIFT_BREAKS: Endpoint = Endpoint::new(
	"post_shift_breaks",
	Method::Post,
	"shifts/{}/shiftbreaks",
	PermissionLevel::Scheduler,
);
/// `PUT shifts/{}/shiftbreaks`.
pub const PUT_SHIFT_BREAKS: Endpoint = Endpoint::new(
	"put_shift_breaks",
	Method::Put,
	"shifts/{}/shiftbreaks",
	PermissionLevel::Scheduler,
);
/// `DELETE shifts/{}/shiftbreaks`.
pub const DELETE_SHIFT_BREAKS: Endpoint = Endpoint::new(
	"delete_shift_breaks",
	Method::Delete,
	"shifts/{}/shiftbreaks",
	PermissionLevel::Scheduler,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_SHIFTS,
	GET_SHIFT,
	POST_SHIFT,
	PUT_SHIFT,
	DELETE_SHIFT,
	GET_CLEAR,
	GET_PUBLISH,
	POST_SWAP,
	PUT_SWAP,
	GET_TRADES,
	GET_TRADE,
	POST_TRADE,
	PUT_TRADE,
	GET_SHIFT_APPROVE,
	POST_SHIFT_APPROVE,
	PUT_SHIFT_APPROVE,
	DELETE_SHIFT_APPROVE,
	GET_SHIFT_BREAKS,
	POST_SHIFT_BREAKS,
	PUT_SHIFT_BREAKS,
	DELETE_SHIFT_BREAKS,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists shifts.
	pub async fn get_shifts(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SHIFTS).query(query)).await
	}

	/// Returns one shift.
	pub async fn get_shift(&self, id: impl Display, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SHIFT).id(id).query(query)).await
	}

	/// Creates a shift.
	pub async fn post_shift(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_SHIFT).form(data)).await
	}

	/// Updates a shift.
	pub async fn put_shift(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_SHIFT).id(id).form(data)).await
	}

	/// Deletes a shift; `data` carries options such as the notification message.
	pub async fn delete_shift(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_SHIFT).id(id).form(data)).await
	}

	/// Clears shifts in the range given by the query.
	pub async fn get_clear(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_CLEAR).query(query)).await
	}

	/// Publishes shifts in the range given by the query.
	pub async fn get_publish(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_PUBLISH).query(query)).await
	}

	/// Requests a swap for a shift.
	pub async fn post_swap(&self, shift_id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_SWAP).id(shift_id).form(data)).await
	}

	/// Updates a swap request.
	pub async fn put_swap(&self, trade_id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_SWAP).id(trade_id).form(data)).await
	}

	/// Lists trades in the given mode.
	pub async fn get_trades(&self, trade_mode: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRADES).id(trade_mode)).await
	}

	/// Returns one trade.
	pub async fn get_trade(&self, id: impl Display, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRADE).id(id).query(query)).await
	}

	/// Creates a trade request.
	pub async fn post_trade(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TRADE).form(data)).await
	}

	/// Updates a trade request.
	pub async fn put_trade(&self, trade_id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TRADE).id(trade_id).form(data)).await
	}

	/// Returns the approval record of a shift.
	pub async fn get_shift_approve(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SHIFT_APPROVE).id(id)).await
	}

	/// Approves a shift.
	pub async fn post_shift_approve(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_SHIFT_APPROVE).id(id).form(data)).await
	}

	/// Updates a shift approval.
	pub async fn put_shift_approve(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_SHIFT_APPROVE).id(id).form(data)).await
	}

	/// Withdraws a shift approval.
	pub async fn delete_shift_approve(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_SHIFT_APPROVE).id(id)).await
	}

	/// Lists the breaks of a shift.
	pub async fn get_shift_breaks(
		&self,
		shift_id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_SHIFT_BREAKS).id(shift_id).query(query)).await
	}

	/// Adds breaks to a shift.
	pub async fn post_shift_breaks(
		&self,
		shift_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_SHIFT_BREAKS).id(shift_id).form(data)).await
	}

	/// Updates the breaks of a shift.
	pub async fn put_shift_breaks(
		&self,
		shift_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_SHIFT_BREAKS).id(shift_id).form(data)).await
	}

	/// Removes breaks from a shift.
	pub async fn delete_shift_breaks(
		&self,
		shift_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_SHIFT_BREAKS).id(shift_id).form(data)).await
	}
}
