//! Forecast datatypes and datapoints, plus demand-driven forecasting.

// self
use crate::{
	_prelude::*,
	auth::PermissionLevel,
	dispatch::{ApiResponse, Call, Endpoint, Method, Params},
	error::ConfigError,
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	session::Session,
};

/// `GET forecast/datatypes`.
pub const GET_FORECAST_DATATYPES: Endpoint = Endpoint::new(
	"get_forecast_datatypes",
	Method::Get,
	"forecast/datatypes",
	PermissionLevel::Employee,
);
/// `GET forecast/datatypes/{}`.
pub const GET_FORECAST_DATATYPE_BY_ID: Endpoint = Endpoint::new(
	"get_forecast_datatype_by_id",
	Method::Get,
	"forecast/datatypes/{}",
	PermissionLevel::Employee,
);
/// `GET forecast/datatypes/unique_id/{}`.
pub const GET_FORECAST_DATATYPE_BY_UNIQUE_ID: Endpoint = Endpoint::new(
	"get_forecast_datatype_by_unique_id",
	Method::Get,
	"forecast/datatypes/unique_id/{}",
	PermissionLevel::Employee,
);
/// `POST forecast/datatypes`.
pub const POST_FORECAST_DATATYPE: Endpoint = Endpoint::new(
	"post_forecast_datatype",
	Method::Post,
	"forecast/datatypes",
	PermissionLevel::Employee,
);
/// `PUT forecast/datatypes/{}`.
pub const PUT_FORECAST_DATATYPE_BY_ID: Endpoint = Endpoint::new(
	"put_forecast_datatype_by_id",
	Method::Put,
	"forecast/datatypes/{}",
	PermissionLevel::Employee,
);
/// `PUT forecast/datatype/unique_id/{}`.
pub const PUT_FORECAST_DATATYPE_BY_UNIQUE_ID: Endpoint = Endpoint::new(
	"put_forecast_datatype_by_unique_id",
	Method::Put,
	"forecast/datatype/unique_id/{}",
	PermissionLevel::Employee,
);
/// `DELETE forecast/datatypes/{}`.
pub const DELETE_FORECAST_DATATYPE: Endpoint = Endpoint::new(
	"delete_forecast_datatype",
	Method::Delete,
	"forecast/datatypes/{}",
	PermissionLevel::Employee,
);
/// `DELETE forecast/datatypes/unique_id/{}`.
pub const DELETE_FORECAST_DATATYPE_BY_UNIQUE_ID: Endpoint = Endpoint::new(
	"delete_forecast_datatype_by_unique_id",
	Method::Delete,
	"forecast/datatypes/unique_id/{}",
	PermissionLevel::Employee,
);
/// `GET forecast/datapoint/{}`.
pub const GET_DATAPOINT: Endpoint =
	Endpoint::new("get_datapoint", Method::Get, "forecast/datapoint/{}", PermissionLevel::Employee);
/// `POST forecast/datapoint`.
pub const POST_DATAPOINT: Endpoint =
	Endpoint::new("post_datapoint", Method::Post, "forecast/datapoint", PermissionLevel::Employee);
/// `PUT forecast/datapoint/{}`.
pub const PUT_DATAPOINT: Endpoint =
	Endpoint::new("put_datapoint", Method::Put, "forecast/datapoint/{}", PermissionLevel::Employee);
/// `DELETE forecast/datapoint/{}`.
pub const DELETE_DATAPOINT: Endpoint = Endpoint::new(
	"delete_datapoint",
	Method::Delete,
	"forecast/datapoint/{}",
	PermissionLevel::Employee,
);
/// `GET forecast/datapoints/{}`.
pub const GET_DATAPOINTS: Endpoint = Endpoint::new(
	"get_datapoints",
	Method::Get,
	"forecast/datapoints/{}",
	PermissionLevel::Employee,
);
/// `POST forecast/copy/{}`.
pub const POST_COPY_DATAPOINTS: Endpoint = Endpoint::new(
	"post_copy_datapoints",
	Method::Post,
	"forecast/copy/{}",
	PermissionLevel::Employee,
);
/// `GET forecast/datapoints/unique_id/{}`.
pub const GET_DATAPOINT_BY_DATATYPE_UNIQUE_ID: Endpoint = Endpoint::new(
	"get_datapoint_by_datatype_unique_id",
	Method::Get,
	"forecast/datapoints/unique_id/{}",
	PermissionLevel::Employee,
);
/// `PUT forecast/datapoint/unique_id/{}`.
pub const PUT_DATAPOINT_BY_DATATYPE_UNIQUE_ID: Endpoint = Endpoint::new(
	"put_datapoint_by_datatype_unique_id",
	Method::Put,
	"forecast/datapoint/unique_id/{}",
	PermissionLevel::Employee,
);
/// `POST forecast/copy/unique_id/{}`.
pub const POST_COPY_DATAPOINTS_BY_DATATYPE_UNIQUE_ID: Endpoint = Endpoint::new(
	"post_copy_datapoints_by_datatype_unique_id",
	Method::Post,
	"forecast/copy/unique_id/{}",
	PermissionLevel::Employee,
);
/// `POST forecast/datapoint`.
pub const CREATE_DATAPOINTS: Endpoint = Endpoint::new(
	"create_datapoints",
	Method::Post,
	"forecast/datapoint",
	PermissionLevel::Employee,
);
/// `GET forecasts/datapoints`.
pub const GET_FORECAST_DATA_POINTS: Endpoint = Endpoint::new(
	"get_forecast_data_points",
	Method::Get,
	"forecasts/datapoints",
	PermissionLevel::Unspecified,
);
/// `POST forecasts/datapoints`.
pub const CREATE_FORECAST_DATA_POINTS: Endpoint = Endpoint::new(
	"create_forecast_data_points",
	Method::Post,
	"forecasts/datapoints",
	PermissionLevel::Unspecified,
);
/// `PUT forecasts/datapoints`.
pub const UPDATE_FORECAST_DATA_POINTS: Endpoint = Endpoint::new(
	"update_forecast_data_points",
	Method::Put,
	"forecasts/datapoints",
	PermissionLevel::Unspecified,
);
/// `POST forecasts/driver`.
pub const CREATE_FORECAST_DRIVER: Endpoint = Endpoint::new(
	"create_forecast_driver",
	Method::Post,
	"forecasts/driver",
	PermissionLevel::Unspecified,
);
/// `GET forecasts/driver`.
pub const GET_FORECAST_DRIVER: Endpoint = Endpoint::new(
	"get_forecast_driver",
	Method::Get,
	"forecasts/driver",
	PermissionLevel::Unspecified,
);
/// `GET forecasts/drivers`.
pub const GET_FORECAST_DRIVERS_FROM_COMPANY: Endpoint = Endpoint::new(
	"get_forecast_drivers_from_company",
	Method::Get,
	"forecasts/drivers",
	PermissionLevel::Unspecified,
);
/// `DELETE forecasts/driver/{}`.
pub const DELETE_FORECAST_DRIVER: Endpoint = Endpoint::new(
	"delete_forecast_driver",
	Method::Delete,
	"forecasts/driver/{}",
	PermissionLevel::Unspecified,
);

/// Every endpoint declared in this module.
pub const ENDPOINTS: &[Endpoint] = &[
	GET_FORECAST_DATATYPES,
	GET_FORECAST_DATATYPE_BY_ID,
	GET_FORECAST_DATATYPE_BY_UNIQUE_ID,
	POST_FORECAST_DATATYPE,
	PUT_FORECAST_DATATYPE_BY_ID,
	PUT_FORECAST_DATATYPE_BY_UNIQUE_ID,
	DELETE_FORECAST_DATATYPE,
	DELETE_FORECAST_DATATYPE_BY_UNIQUE_ID,
	GET_DATAPOINT,
	POST_DATAPOINT,
	PUT_DATAPOINT,
	DELETE_DATAPOINT,
	GET_DATAPOINTS,
	POST_COPY_DATAPOINTS,
	GET_DATAPOINT_BY_DATATYPE_UNIQUE_ID,
	PUT_DATAPOINT_BY_DATATYPE_UNIQUE_ID,
	POST_COPY_DATAPOINTS_BY_DATATYPE_UNIQUE_ID,
	CREATE_DATAPOINTS,
	GET_FORECAST_DATA_POINTS,
	CREATE_FORECAST_DATA_POINTS,
	UPDATE_FORECAST_DATA_POINTS,
	CREATE_FORECAST_DRIVER,
	GET_FORECAST_DRIVER,
	GET_FORECAST_DRIVERS_FROM_COMPANY,
	DELETE_FORECAST_DRIVER,
];

impl<C, M> Session<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists forecast datatypes.
	pub async fn get_forecast_datatypes(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FORECAST_DATATYPES)).await
	}

	/// Returns one forecast datatype.
	pub async fn get_forecast_datatype_by_id(
		&self,
		datatype_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FORECAST_DATATYPE_BY_ID).id(datatype_id)).await
	}

	/// Returns one forecast datatype by its unique id.
	pub async fn get_forecast_datatype_by_unique_id(
		&self,
		unique_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FORECAST_DATATYPE_BY_UNIQUE_ID).id(unique_id)).await
	}

	/// Creates a forecast datatype.
	pub async fn post_forecast_datatype(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_FORECAST_DATATYPE).form(data)).await
	}

	/// Updates a forecast datatype.
	pub async fn put_forecast_datatype_by_id(
		&self,
		datatype_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_FORECAST_DATATYPE_BY_ID).id(datatype_id).form(data)).await
	}

	/// Updates a forecast datatype by its unique id. The provider spells this path with a singular
	/// `datatype`.
	pub async fn put_forecast_datatype_by_unique_id(
		&self,
		unique_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_FORECAST_DATATYPE_BY_UNIQUE_ID).id(unique_id).form(data)).await
	}

	/// Deletes a forecast datatype.
	pub async fn delete_forecast_datatype(&self, datatype_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_FORECAST_DATATYPE).id(datatype_id)).await
	}

	/// Deletes a forecast datatype by its unique id.
	pub async fn delete_forecast_datatype_by_unique_id(
		&self,
		unique_id: impl Display,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_FORECAST_DATATYPE_BY_UNIQUE_ID).id(unique_id)).await
	}

	/// Returns one datapoint.
	pub async fn get_datapoint(&self, datapoint_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_DATAPOINT).id(datapoint_id)).await
	}

	/// Creates a datapoint.
	pub async fn post_datapoint(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_DATAPOINT).form(data)).await
	}

	/// Updates a datapoint.
	pub async fn put_datapoint(
		&self,
		datapoint_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_DATAPOINT).id(datapoint_id).form(data)).await
	}

	/// Deletes a datapoint.
	pub async fn delete_datapoint(&self, datapoint_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_DATAPOINT).id(datapoint_id)).await
	}

	/// Lists the datapoints of a datatype between two days.
	pub async fn get_datapoints(
		&self,
		datatype_id: impl Display,
		first_day: impl Display,
		last_day: impl Display,
	) -> Result<ApiResponse> {
		let call = Call::new(GET_DATAPOINTS)
			.id(datatype_id)
			.query(Params::new().with("first_day", first_day).with("last_day", last_day));

		self.dispatch(call).await
	}

	/// Copies datapoints of a datatype.
	pub async fn post_copy_datapoints(
		&self,
		datatype_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(POST_COPY_DATAPOINTS).id(datatype_id).form(data)).await
	}

	/// Lists the datapoints of a datatype, addressed by unique id, between two days.
	pub async fn get_datapoint_by_datatype_unique_id(
		&self,
		unique_id: impl Display,
		first_day: impl Display,
		last_day: impl Display,
	) -> Result<ApiResponse> {
		let call = Call::new(GET_DATAPOINT_BY_DATATYPE_UNIQUE_ID)
			.id(unique_id)
			.query(Params::new().with("first_day", first_day).with("last_day", last_day));

		self.dispatch(call).await
	}

	/// Updates datapoints of a datatype addressed by unique id.
	pub async fn put_datapoint_by_datatype_unique_id(
		&self,
		unique_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		self.dispatch(Call::new(PUT_DATAPOINT_BY_DATATYPE_UNIQUE_ID).id(unique_id).form(data)).await
	}

	/// Copies datapoints of a datatype addressed by unique id.
	pub async fn post_copy_datapoints_by_datatype_unique_id(
		&self,
		unique_id: impl Display,
		data: Params,
	) -> Result<ApiResponse> {
		let call = Call::new(POST_COPY_DATAPOINTS_BY_DATATYPE_UNIQUE_ID).id(unique_id).form(data);

		self.dispatch(call).await
	}

	/// Creates datapoints in bulk. Unlike every other call the body is sent as JSON.
	pub async fn create_datapoints(&self, data: &impl Serialize) -> Result<ApiResponse> {
		let body = serde_json::to_value(data).map_err(ConfigError::JsonBody)?;

		self.dispatch(Call::new(CREATE_DATAPOINTS).json(body)).await
	}

	/// Lists demand-driven forecast datapoints.
	pub async fn get_forecast_data_points(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FORECAST_DATA_POINTS).query(query)).await
	}

	/// Creates demand-driven forecast datapoints.
	pub async fn create_forecast_data_points(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(CREATE_FORECAST_DATA_POINTS).form(data)).await
	}

	/// Updates demand-driven forecast datapoints.
	pub async fn update_forecast_data_points(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(UPDATE_FORECAST_DATA_POINTS).form(data)).await
	}

	/// Creates a forecast driver.
	pub async fn create_forecast_driver(&self, data: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(CREATE_FORECAST_DRIVER).form(data)).await
	}

	/// Returns a forecast driver selected by the query.
	pub async fn get_forecast_driver(&self, query: Params) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FORECAST_DRIVER).query(query)).await
	}

	/// Lists the company's forecast drivers.
	pub async fn get_forecast_drivers_from_company(&self) -> Result<ApiResponse> {
		self.dispatch(Call::new(GET_FORECAST_DRIVERS_FROM_COMPANY)).await
	}

	/// Deletes a forecast driver.
	pub async fn delete_forecast_driver(&self, driver_id: impl Display) -> Result<ApiResponse> {
		self.dispatch(Call::new(DELETE_FORECAST_DRIVER).id(driver_id)).await
	}
}
