#![cfg(all(feature = "test", feature = "reqwest"))]

// crates.io
use httpmock::prelude::*;
// self
use humanity_api::{
	_preludet::*,
	auth::PermissionLevel,
	dispatch::Params,
	error::{ConfigError, Error},
};

async fn authenticated(server: &MockServer) -> ReqwestTestSession {
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mut grant = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token.php");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"tok\",\"refresh_token\":\"ref\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;

	session.authenticate().await.expect("Password grant fixture should succeed.");
	grant.delete_async().await;

	session
}

#[tokio::test]
async fn identifiers_and_token_reach_the_wire() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v2/employees/42/positions/7")
				.query_param("access_token", "tok");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"status\":1,\"data\":{\"position\":7}}");
		})
		.await;
	let response =
		session.get_employee_position(42, 7).await.expect("Resource call should succeed.");

	mock.assert_async().await;

	assert!(response.is_success());
	assert_eq!(response.data().and_then(|data| data.get("position")), Some(&Value::from(7)));
}

#[tokio::test]
async fn caller_query_is_forwarded_alongside_the_token() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v2/shifts")
				.query_param("start_date", "2025-01-06")
				.query_param("end_date", "2025-01-12")
				.query_param("access_token", "tok");
			then.status(200).header("content-type", "application/json").body("{\"data\":[]}");
		})
		.await;

	session
		.get_shifts(Params::from([("start_date", "2025-01-06"), ("end_date", "2025-01-12")]))
		.await
		.expect("Shift listing should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn date_range_calls_name_their_parameters() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v2/sales/budget")
				.query_param("start_date", "2025-02-01")
				.query_param("end_date", "2025-02-28");
			then.status(200).header("content-type", "application/json").body("{\"data\":{}}");
		})
		.await;

	session.get_budget("2025-02-01", "2025-02-28").await.expect("Budget call should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn mutations_send_form_bodies() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path("/api/v2/shifts/9")
				.query_param("access_token", "tok")
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("message", "Cancelled");
			then.status(200).header("content-type", "application/json").body("{\"status\":1}");
		})
		.await;

	session
		.delete_shift(9, Params::new().with("message", "Cancelled"))
		.await
		.expect("Shift deletion should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn leave_calls_pin_their_fixed_fields() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let request = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/leaves")
				.form_urlencoded_tuple("reason", "Trip")
				.form_urlencoded_tuple("is_hourly", "1");
			then.status(200).header("content-type", "application/json").body("{\"status\":1}");
		})
		.await;
	let approve = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/v2/leaves/5").form_urlencoded_tuple("status", "1");
			then.status(200).header("content-type", "application/json").body("{\"status\":1}");
		})
		.await;
	let reject = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/v2/leaves/6").form_urlencoded_tuple("status", "-1");
			then.status(200).header("content-type", "application/json").body("{\"status\":1}");
		})
		.await;

	session
		.post_leave_request_hourly(Params::from([("reason", "Trip"), ("is_hourly", "0")]))
		.await
		.expect("Hourly leave request should succeed.");
	session.put_approving_leave_request(5).await.expect("Approval should succeed.");
	session.put_rejecting_leave_request(6).await.expect("Rejection should succeed.");

	request.assert_async().await;
	approve.assert_async().await;
	reject.assert_async().await;
}

#[tokio::test]
async fn bulk_datapoints_are_sent_as_json() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let payload = serde_json::json!({ "datapoints": [{ "day": "2025-03-01", "value": 120 }] });
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/forecast/datapoint")
				.query_param("access_token", "tok")
				.header("content-type", "application/json")
				.json_body(serde_json::json!({
					"datapoints": [{ "day": "2025-03-01", "value": 120 }]
				}));
			then.status(200).header("content-type", "application/json").body("{\"status\":1}");
		})
		.await;

	session.create_datapoints(&payload).await.expect("Bulk datapoints should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn trailing_slash_paths_keep_their_slash() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/groupaccounts/reports/");
			then.status(200).header("content-type", "application/json").body("{\"data\":[]}");
		})
		.await;

	session.get_group_reports(Params::new()).await.expect("Group reports should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/employees/404");
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"status\":3,\"error\":\"Not Found\"}");
		})
		.await;
	let response = session.get_employee(404).await.expect("Error statuses should decode.");

	mock.assert_async().await;

	assert!(!response.is_success());
	assert_eq!(response.status, 404);
	assert_eq!(response.body.get("error"), Some(&Value::from("Not Found")));
}

#[tokio::test]
async fn empty_bodies_decode_to_null() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await;
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v2/notes/3");
			then.status(200);
		})
		.await;
	let response = session.delete_note(3).await.expect("Empty replies should decode.");

	mock.assert_async().await;

	assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn insufficient_permission_blocks_before_sending() {
	let server = MockServer::start_async().await;
	let session = authenticated(&server).await.with_permission(PermissionLevel::Employee);
	let blocked = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/employees");
			then.status(200).header("content-type", "application/json").body("{\"status\":1}");
		})
		.await;
	let allowed = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/messages/11");
			then.status(200).header("content-type", "application/json").body("{\"data\":{}}");
		})
		.await;
	let err = session
		.post_employee(Params::new().with("name", "New Hire"))
		.await
		.expect_err("Employees cannot create employees.");

	assert!(matches!(
		err,
		Error::InsufficientPermission {
			endpoint: "post_employee",
			required: PermissionLevel::Scheduler,
			held: PermissionLevel::Employee,
		}
	));

	session.get_message(11).await.expect("Endpoints without a documented level stay callable.");

	blocked.assert_calls_async(0).await;
	allowed.assert_async().await;
}

#[tokio::test]
async fn unauthenticated_sessions_cannot_dispatch() {
	let server = MockServer::start_async().await;
	let session =
		build_reqwest_test_session(test_descriptor(&server.base_url()), test_credentials());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/me");
			then.status(200);
		})
		.await;
	let err = session.get_me().await.expect_err("Calls without a token must fail.");

	assert!(matches!(err, Error::Config(ConfigError::MissingAccessToken)));

	mock.assert_calls_async(0).await;
}
