//! Messages, the company wall, notices, and notes.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET messages`.
pub const GET_MESSAGES: Endpoint =
	Endpoint::new("get_messages", Method::Get, "messages", PermissionLevel::Employee);
/// `GET messages/{}`.
pub const GET_MESSAGE: Endpoint =
	Endpoint::new("get_message", Method::Get, "messages/{}", PermissionLevel::Unspecified);
/// `POST messages`.
pub const POST_MESSAGE: Endpoint =
	Endpoint::new("post_message", Method::Post, "messages", PermissionLevel::Employee);
/// `DELETE messages/{}`.
pub const DELETE_MESSAGE: Endpoint =
	Endpoint::new("delete_message", Method::Delete, "messages/{}", PermissionLevel::Employee);
/// `GET messages/wall`.
pub const GET_WALL_MESSAGES: Endpoint =
	Endpoint::new("get_wall_messages", Method::Get, "messages/wall", PermissionLevel::Employee);
/// `POST messages/wall`.
pub const POST_WALL_MESSAGE: Endpoint =
	Endpoint::new("post_wall_message", Method::Post, "messages/wall", PermissionLevel::Employee);
/// `DELETE messages/wall/{}`.
pub const DELETE_WALL_MESSAGE: Endpoint = Endpoint::new(
	"delete_wall_message",
	Method::Delete,
	"messages/wall/{}",
	PermissionLevel::Employee,
);
/// `PUT messages/wall/{}`.
pub const PUT_WALL_MESSAGE: Endpoint =
	Endpoint::new("put_wall_message", Method::Put, "messages/wall/{}", PermissionLevel::Employee);
/// `GET messages/notices`.
pub const GET_NOTICES: Endpoint =
	Endpoint::new("get_notices", Method::Get, "messages/notices", PermissionLevel::Employee);
/// `GET messages/notices/{}`.
pub const GET_NOTICE: Endpoint =
	Endpoint::new("get_notice", Method::Get, "messages/notices/{}", PermissionLevel::Employee);
/// `POST messages/notices`.
pub const POST_NOTICE: Endpoint =
	Endpoint::new("post_notice", Method::Post, "messages/notices", PermissionLevel::Manager);
/// `PUT messages/notices/{}`.
pub const PUT_NOTICE: Endpoint =
	Endpoint::new("put_notice", Method::Put, "messages/notices/{}", PermissionLevel::Manager);
/// `DELETE messages/notices/{}`.
pub const DELETE_NOTICE: Endpoint = Endpoint::new(
	"delete_notice",
	Method::Delete,
	"messages/notices/{}",
	PermissionLevel::Supervisor,
);
/// `POST notes`.
pub const GET_NOTES: Endpoint =
	Endpoint::new("get_notes", Method::Post, "notes", PermissionLevel::ScheduleViewer);
/// `GET notes/{}`.
pub const GET_NOTE: Endpoint =
	Endpoint::new("get_note", Method::Get, "notes/{}", PermissionLevel::ScheduleViewer);
/// `POST notes`.
pub const POST_NOTE: Endpoint =
	Endpoint::new("post_note", Method::Post, "notes", PermissionLevel::ScheduleViewer);
/// `PUT notes/{}`.
pub const PUT_NOTE: Endpoint =
	Endpoint::new("put_note", Method::Put, "notes/{}", PermissionLevel::ScheduleViewer);
/// `DELETE notes/{}`.
pub const DELETE_NOTE: Endpoint =
	Endpoint::new("delete_note", Method::Delete, "notes/{}", PermissionLevel::ScheduleViewer);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_MESSAGES,
	GET_MESSAGE,
	POST_MESSAGE,
	DELETE_MESSAGE,
	GET_WALL_MESSAGES,
	POST_WALL_MESSAGE,
	DELETE_WALL_MESSAGE,
	PUT_WALL_MESSAGE,
	GET_NOTICES,
	GET_NOTICE,
	POST_NOTICE,
	PUT_NOTICE,
	DELETE_NOTICE,
	GET_NOTES,
	GET_NOTE,
	POST_NOTE,
	PUT_NOTE,
	DELETE_NOTE,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists conversations.
	pub async fn get_messages(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_MESSAGES).query(query)).await
	}

	/// Returns one conversation.
	pub async fn get_message(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_MESSAGE).id(id)).await
	}

	/// Sends a message.
	pub async fn post_message(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_MESSAGE).form(data)).await
	}

	/// Deletes a conversation.
	pub async fn delete_message(
		&self,
		conversation_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_MESSAGE).id(conversation_id).form(data)).await
	}

	/// Lists wall posts.
	pub async fn get_wall_messages(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_WALL_MESSAGES)).await
	}

	/// Posts to the wall.
	pub async fn post_wall_message(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_WALL_MESSAGE).form(data)).await
	}

	/// Deletes a wall post.
	pub async fn delete_wall_message(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_WALL_MESSAGE).id(id).form(data)).await
	}

	/// Updates a wall post.
	pub async fn put_wall_message(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_WALL_MESSAGE).id(id).form(data)).await
	}

	/// Lists notices.
	pub async fn get_notices(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_NOTICES).query(query)).await
	}

	/// Returns one notice.
	pub async fn get_notice(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_NOTICE).id(id)).await
	}

	/// Creates a notice.
	pub async fn post_notice(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_NOTICE).form(data)).await
	}

	/// Updates a notice.
	pub async fn put_notice(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_NOTICE).id(id).form(data)).await
	}

	/// Deletes a notice.
	pub async fn delete_notice(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_NOTICE).id(id)).await
	}

	/// Lists notes. The provider expects a POST with the filters as form data.
	pub async fn get_notes(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_NOTES).form(data)).await
	}

	/// Returns one note.
	pub async fn get_note(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_NOTE).id(id)).await
	}

	/// Creates a note.
	pub async fn post_note(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_NOTE).form(data)).await
	}

	/// Updates a note.
	pub async fn put_note(&self, id: impl Display, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_NOTE).id(id).form(data)).await
	}

	/// Deletes a note.
	pub async fn delete_note(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_NOTE).id(id)).await
	}
}
