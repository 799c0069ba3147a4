// crates.io
use httpmock::prelude::*;
// self
use hostaway::{client::Client, serde_json::json};

#[tokio::test]
async fn end_to_end_token_fetch_and_listing_read() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/accessTokens")
				.header("content-type", "application/x-www-form-urlencoded")
				.body_includes("grant_type=client_credentials")
				.body_includes("client_id=account-e2e")
				.body_includes("scope=general");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"token_type": "Bearer",
				"access_token": "e2e-token",
				"expires_in": 3600,
			}));
		})
		.await;
	let listings_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/listings")
				.header("authorization", "Bearer e2e-token");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"status": "success",
				"result": [{ "id": 7, "name": "Harbor House" }],
			}));
		})
		.await;
	let client = Client::builder()
		.with_base_url(server.url("/v1"))
		.with_client_credentials("account-e2e", "secret-e2e")
		.build()
		.expect("Client against the mock server should build.");
	let first = client
		.listings()
		.list(Default::default())
		.await
		.expect("First listings request should succeed.");
	let second = client
		.listings()
		.list(Default::default())
		.await
		.expect("Second listings request should reuse the cached token.");

	assert_eq!(
		first.into_result().expect("Envelope should carry a result.")[0].id,
		Some(7),
	);
	assert_eq!(
		second.into_result().expect("Envelope should carry a result.")[0].name.as_deref(),
		Some("Harbor House"),
	);

	token_mock.assert_calls_async(1).await;
	listings_mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn revocation_sends_an_authenticated_delete() {
	let server = MockServer::start_async().await;
	let revoke_mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path("/v1/accessTokens")
				.query_param("token", "doomed-token")
				.header("authorization", "Bearer doomed-token");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "status": "success" }));
		})
		.await;
	let client = Client::builder()
		.with_base_url(server.url("/v1"))
		.with_access_token("doomed-token")
		.build()
		.expect("Client against the mock server should build.");

	client.revoke_token(None).await.expect("Revocation should succeed.");

	revoke_mock.assert_async().await;
}
