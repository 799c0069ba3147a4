//! Demonstrates the client-credentials token flow and a typed listings read
//! against a local mock of the API.

// crates.io
use httpmock::prelude::*;
// self
use hostaway::{client::Client, serde_json::json, types::listings::ListingsListParams, Result};

#[tokio::main]
async fn main() -> Result<()> {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/accessTokens");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"token_type": "Bearer",
				"access_token": "demo-token",
				"expires_in": 3600,
			}));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/listings").query_param("city", "Amsterdam");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"status": "success",
				"result": [
					{ "id": 1, "name": "Canal View Loft", "city": "Amsterdam" },
					{ "id": 2, "name": "Jordaan Studio", "city": "Amsterdam" },
				],
			}));
		})
		.await;

	let client = Client::builder()
		.with_base_url(server.url("/v1"))
		.with_client_credentials("demo-account", "demo-secret")
		.build()?;
	let response = client
		.listings()
		.list(ListingsListParams { city: Some("Amsterdam".into()), ..Default::default() })
		.await?;

	for listing in response.into_result().unwrap_or_default() {
		println!(
			"#{} {}",
			listing.id.unwrap_or_default(),
			listing.name.as_deref().unwrap_or("<unnamed>"),
		);
	}

	Ok(())
}
