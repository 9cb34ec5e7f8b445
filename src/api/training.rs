//! Training progress, sections, and modules.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET trainings/progress`.
pub const GET_TRAINING_PROGRESS: Endpoint = Endpoint::new(
	"get_training_progress",
	Method::Get,
	"trainings/progress",
	PermissionLevel::Employee,
);
/// `GET trainings/sections`.
pub const GET_TRAINING_SECTIONS: Endpoint = Endpoint::new(
	"get_training_sections",
	Method::Get,
	"trainings/sections",
	PermissionLevel::Employee,
);
/// `GET trainings/sections/{}`.
pub const GET_TRAINING_SECTION: Endpoint = Endpoint::new(
	"get_training_section",
	Method::Get,
	"trainings/sections/{}",
	PermissionLevel::Employee,
);
/// `POST trainings/sections`.
pub const POST_TRAINING_SECTION: Endpoint = Endpoint::new(
	"post_training_section",
	Method::Post,
	"trainings/sections",
	PermissionLevel::Supervisor,
);
/// `PUT trainings/sections/{}`.
pub const PUT_TRAINING_SECTION: Endpoint = Endpoint::new(
	"put_training_section",
	Method::Put,
	"trainings/sections/{}",
	PermissionLevel::Supervisor,
);
/// `DELETE trainings/sections/{}`.
pub const DELETE_TRAINING_SECTION: Endpoint = Endpoint::new(
	"delete_training_section",
	Method::Delete,
	"trainings/sections/{}",
	PermissionLevel::Supervisor,
);
/// `PUT trainings/sections/{}/sync`.
pub const PUT_TRAINING_SECTION_SYNC: Endpoint = Endpoint::new(
	"put_training_section_sync",
	Method::Put,
	"trainings/sections/{}/sync",
	PermissionLevel::Supervisor,
);
/// `GET trainings/modules`.
pub const GET_TRAINING_MODULES: Endpoint = Endpoint::new(
	"get_training_modules",
	Method::Get,
	"trainings/modules",
	PermissionLevel::Employee,
);
/// `GET trainings/modules/{}`.
pub const GET_TRAINING_MODULE: Endpoint = Endpoint::new(
	"get_training_module",
	Method::Get,
	"trainings/modules/{}",
	PermissionLevel::Employee,
);
/// `POST trainings/modules`.
pub const POST_TRAINING_MODULES: Endpoint = Endpoint::new(
	"post_training_modules",
	Method::Post,
	"trainings/modules",
	PermissionLevel::Supervisor,
);
/// `PUT trainings/modules`.
pub const PUT_TRAINING_MODULE: Endpoint = Endpoint::new(
	"put_training_module",
	Method::Put,
	"trainings/modules",
	PermissionLevel::Supervisor,
);
/// `DELETE trainings/modules/{}`.
pub const DELETE_TRAINING_MODULE: Endpoint = Endpoint::new(
	"delete_training_module",
	Method::Delete,
	"trainings/modules/{}",
	PermissionLevel::Supervisor,
);
/// `PUT trainings/modules/{}/complete`.
pub const PUT_TRAINING_MODULE_COMPLETE: Endpoint = Endpoint::new(
	"put_training_module_complete",
	Method::Put,
	"trainings/modules/{}/complete",
	PermissionLevel::Employee,
);
/// `GET trainings/modules/{}/digital_signature`.
pub const GET_TRAINING_MODULE_SIGNATURE: Endpoint = Endpoint::new(
	"get_training_module_signature",
	Method::Get,
	"trainings/modules/{}/digital_signature",
	PermissionLevel::Employee,
);
/// `GET trainings/modules/{}/comments`.
pub const GET_TRAINING_MODULE_COMMENTS: Endpoint = Endpoint::new(
	"get_training_module_comments",
	Method::Get,
	"trainings/modules/{}/comments",
	PermissionLevel::Employee,
);
/// `PUT trainings/modules/{}/comments`.
pub const PUT_TRAINING_MODULE_COMMENTS: Endpoint = Endpoint::new(
	"put_training_module_comments",
	Method::Put,
	"trainings/modules/{}/comments",
	PermissionLevel::Employee,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_TRAINING_PROGRESS,
	GET_TRAINING_SECTIONS,
	GET_TRAINING_SECTION,
	POST_TRAINING_SECTION,
	PUT_TRAINING_SECTION,
	DELETE_TRAINING_SECTION,
	PUT_TRAINING_SECTION_SYNC,
	GET_TRAINING_MODULES,
	GET_TRAINING_MODULE,
	POST_TRAINING_MODULES,
	PUT_TRAINING_MODULE,
	DELETE_TRAINING_MODULE,
	PUT_TRAINING_MODULE_COMPLETE,
	GET_TRAINING_MODULE_SIGNATURE,
	GET_TRAINING_MODULE_COMMENTS,
	PUT_TRAINING_MODULE_COMMENTS,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns training progress.
	pub async fn get_training_progress(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_PROGRESS)).await
	}

	/// Lists training sections.
	pub async fn get_training_sections(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_SECTIONS)).await
	}

	/// Returns one training section.
	pub async fn get_training_section(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_SECTION).id(id)).await
	}

	/// Creates a training section.
	pub async fn post_training_section(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TRAINING_SECTION).form(data)).await
	}

	/// Updates a training section.
	pub async fn put_training_section(
		&self,
		id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TRAINING_SECTION).id(id).form(data)).await
	}

	/// Deletes a training section.
	pub async fn delete_training_section(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_TRAINING_SECTION).id(id)).await
	}

	/// Synchronizes a training section.
	pub async fn put_training_section_sync(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TRAINING_SECTION_SYNC).id(id).form(Params::new())).await
	}

	/// Lists training modules.
	pub async fn get_training_modules(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_MODULES)).await
	}

	/// Returns one training module.
	pub async fn get_training_module(
		&self,
		id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_MODULE).id(id).query(query)).await
	}

	/// Creates a training module.
	pub async fn post_training_modules(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_TRAINING_MODULES).form(data)).await
	}

	/// Updates a training module; the module is identified inside `data`.
	pub async fn put_training_module(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TRAINING_MODULE).form(data)).await
	}

	/// Deletes a training module.
	pub async fn delete_training_module(&self, id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_TRAINING_MODULE).id(id)).await
	}

	/// Marks a training module complete.
	pub async fn put_training_module_complete(
		&self,
		module_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TRAINING_MODULE_COMPLETE).id(module_id).form(data)).await
	}

	/// Returns the digital signature recorded for a module.
	pub async fn get_training_module_signature(
		&self,
		module_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_MODULE_SIGNATURE).id(module_id)).await
	}

	/// Lists comments on a training module.
	pub async fn get_training_module_comments(
		&self,
		module_id: impl Display,
		query: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_TRAINING_MODULE_COMMENTS).id(module_id).query(query)).await
	}

	/// Adds or updates comments on a training module.
	pub async fn put_training_module_comments(
		&self,
		module_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_TRAINING_MODULE_COMMENTS).id(module_id).form(data)).await
	}
}
