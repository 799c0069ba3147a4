// self
use hostaway::{
	_preludet::*,
	client::{CancellationToken, Client, RequestOptions},
	http::Method,
	serde_json::json,
	types::{listings::ListingsListParams, ApiResponse},
};

fn static_client(transport: Arc<MockTransport>) -> Client {
	Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport)
		.with_access_token("static-token")
		.build()
		.expect("Client with static token should build.")
}

fn credentials_client(transport: Arc<MockTransport>) -> Client {
	Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport)
		.with_client_credentials("account-1", "secret-1")
		.build()
		.expect("Client with client credentials should build.")
}

#[tokio::test]
async fn unauthorized_response_triggers_one_refresh_and_retry() {
	let transport = MockTransport::new([
		ScriptedResponse::Respond(token_response("stale", 3_600.)),
		ScriptedResponse::Respond(json_response(401, json!({ "message": "Token expired" }))),
		ScriptedResponse::Respond(token_response("fresh", 3_600.)),
		ScriptedResponse::Respond(json_response(
			200,
			json!({ "status": "success", "result": [] }),
		)),
	]);
	let client = credentials_client(transport.clone());
	let response: Value = client
		.request(Method::Get, "/listings", RequestOptions::new())
		.await
		.expect("Retried request should succeed.");

	assert_eq!(response["status"], "success");

	let requests = transport.requests();

	assert_eq!(requests.len(), 4);
	assert_eq!(requests[1].headers.get("authorization"), Some("Bearer stale"));
	assert_eq!(requests[3].headers.get("authorization"), Some("Bearer fresh"));
}

#[tokio::test]
async fn second_unauthorized_response_is_terminal() {
	let transport = MockTransport::new([
		ScriptedResponse::Respond(token_response("stale", 3_600.)),
		ScriptedResponse::Respond(json_response(401, json!({ "message": "Token expired" }))),
		ScriptedResponse::Respond(token_response("still-stale", 3_600.)),
		ScriptedResponse::Respond(json_response(401, json!({ "message": "Token expired" }))),
	]);
	let client = credentials_client(transport.clone());
	let err = client
		.request::<Value>(Method::Get, "/listings", RequestOptions::new())
		.await
		.expect_err("A second 401 should surface.");

	assert_eq!(err.status(), Some(401));
	assert_eq!(transport.calls(), 4);
}

#[tokio::test]
async fn caller_authorization_header_disables_managed_auth() {
	let transport = MockTransport::new([ScriptedResponse::Respond(json_response(
		401,
		json!({ "message": "Bad caller token" }),
	))]);
	let client = credentials_client(transport.clone());
	let err = client
		.request::<Value>(
			Method::Get,
			"/listings",
			RequestOptions::new().with_header("Authorization", "Bearer caller-owned"),
		)
		.await
		.expect_err("A 401 with caller auth should surface unretried.");

	assert_eq!(err.status(), Some(401));
	// No token fetch and no retry happened.
	assert_eq!(transport.calls(), 1);
	assert_eq!(
		transport.requests()[0].headers.get("authorization"),
		Some("Bearer caller-owned"),
	);
}

#[tokio::test(start_paused = true)]
async fn get_retries_on_server_error_with_backoff() {
	let transport = MockTransport::new([
		ScriptedResponse::Respond(json_response(500, json!({ "message": "boom" }))),
		ScriptedResponse::Respond(json_response(200, json!({ "status": "success", "result": [] }))),
	]);
	let client = static_client(transport.clone());
	let started = tokio::time::Instant::now();
	let response: Value = client
		.request(Method::Get, "/listings", RequestOptions::new())
		.await
		.expect("Request should succeed after one retry.");

	assert_eq!(response["status"], "success");
	assert_eq!(transport.calls(), 2);
	assert!(started.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn retry_after_header_overrides_backoff_window() {
	let mut throttled = json_response(429, json!({ "message": "Too many requests" }));

	throttled.headers.set("Retry-After", "1");

	let transport = MockTransport::new([
		ScriptedResponse::Respond(throttled),
		ScriptedResponse::Respond(json_response(200, json!({ "status": "success", "result": [] }))),
	]);
	let client = static_client(transport.clone());
	let started = tokio::time::Instant::now();
	let _: Value = client
		.request(Method::Get, "/listings", RequestOptions::new())
		.await
		.expect("Request should succeed after the throttle window.");

	assert!(started.elapsed() >= Duration::from_secs(1));
	assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn post_is_never_backoff_retried() {
	let transport = MockTransport::new([ScriptedResponse::Respond(json_response(
		500,
		json!({ "message": "boom" }),
	))]);
	let client = static_client(transport.clone());
	let err = client
		.request::<Value>(Method::Post, "/reservations", RequestOptions::new())
		.await
		.expect_err("Non-idempotent failures should surface immediately.");

	assert_eq!(err.status(), Some(500));
	assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn hung_transport_maps_to_timed_out() {
	let transport = MockTransport::new([ScriptedResponse::Hang]);
	let client = Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport)
		.with_access_token("static-token")
		.with_timeout(Duration::from_millis(10))
		.build()
		.expect("Client with short timeout should build.");
	let err = client
		.request::<Value>(Method::Get, "/listings", RequestOptions::new())
		.await
		.expect_err("The timer should fire first.");

	assert!(matches!(err, Error::TimedOut { .. }));
}

#[tokio::test]
async fn cancelled_token_maps_to_aborted() {
	let transport = MockTransport::new([ScriptedResponse::Hang]);
	let client = static_client(transport);
	let cancel = CancellationToken::new();

	cancel.cancel();

	let err = client
		.request::<Value>(
			Method::Get,
			"/listings",
			RequestOptions::new().with_cancel(cancel),
		)
		.await
		.expect_err("The cancellation token should fire first.");

	assert!(matches!(err, Error::Aborted { .. }));
}

#[tokio::test]
async fn api_errors_are_normalized_from_the_body() {
	let mut failure = json_response(
		422,
		json!({
			"status": "fail",
			"message": "Validation failed",
			"errorCode": "VALIDATION",
			"errors": { "arrivalDate": ["is required"] },
		}),
	);

	failure.headers.set("x-request-id", "req-123");

	let transport = MockTransport::new([ScriptedResponse::Respond(failure)]);
	let client = static_client(transport);
	let err = client
		.request::<Value>(Method::Get, "/reservations", RequestOptions::new())
		.await
		.expect_err("Validation failures should surface.");
	let api = err.api().expect("Failure should carry a normalized API error.");

	assert_eq!(api.status, 422);
	assert_eq!(api.message, "Validation failed");
	assert_eq!(api.code.as_deref(), Some("VALIDATION"));
	assert_eq!(api.request_id.as_deref(), Some("req-123"));
	assert_eq!(api.details.as_ref().map(|d| d["arrivalDate"][0].clone()), Some("is required".into()));
}

#[tokio::test]
async fn resource_wrappers_compose_paths_and_queries() {
	let transport = MockTransport::new([ScriptedResponse::Respond(json_response(
		200,
		json!({
			"status": "success",
			"result": [{ "id": 42, "name": "Canal View Loft", "city": "Amsterdam" }],
			"pagination": { "limit": 10, "offset": 0, "total": 1 },
		}),
	))]);
	let client = static_client(transport.clone());
	let response = client
		.listings()
		.list(ListingsListParams {
			limit: Some(10),
			city: Some("Amsterdam".into()),
			..Default::default()
		})
		.await
		.expect("Listings request should succeed.");
	let listings = response.into_result().expect("Envelope should carry a result.");

	assert_eq!(listings.len(), 1);
	assert_eq!(listings[0].id, Some(42));
	assert_eq!(listings[0].city.as_deref(), Some("Amsterdam"));

	let request = &transport.requests()[0];

	assert_eq!(request.url.path(), "/v1/listings");
	assert_eq!(request.url.query(), Some("limit=10&city=Amsterdam"));
	assert_eq!(request.headers.get("accept"), Some("application/json"));
}

#[tokio::test]
async fn empty_success_bodies_decode_to_unit_shapes() {
	let transport = MockTransport::new([ScriptedResponse::Respond(json_response(
		200,
		json!({ "status": "success" }),
	))]);
	let client = static_client(transport);
	let response: ApiResponse<Value> = client
		.request(Method::Delete, "/listings/42", RequestOptions::new())
		.await
		.expect("Delete should succeed.");

	assert!(response.into_result().is_none());
}
