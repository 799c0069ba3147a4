//! Demonstrates plugging a custom transport into the client; here a wrapper
//! around the stock reqwest transport that stamps a tracing header onto every
//! outbound request.

// std
use std::sync::atomic::{AtomicU64, Ordering};
// crates.io
use httpmock::prelude::*;
// self
use hostaway::{
	client::Client,
	http::{HttpTransport, ReqwestTransport, TransportFuture, TransportRequest},
	serde_json::json,
	Result,
};

/// Stamps a monotonically increasing `X-Client-Trace` header before delegating.
#[derive(Default)]
struct TracedTransport {
	inner: ReqwestTransport,
	sequence: AtomicU64,
}
impl HttpTransport for TracedTransport {
	fn call(&self, mut request: TransportRequest) -> TransportFuture<'_> {
		let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);

		request.headers.set("X-Client-Trace", format!("demo-{sequence}"));

		println!("-> {} {}", request.method, request.url);

		self.inner.call(request)
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/amenities").header_exists("x-client-trace");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"status": "success",
				"result": [{ "id": 10, "name": "Wi-Fi" }, { "id": 11, "name": "Sauna" }],
			}));
		})
		.await;

	let client = Client::builder()
		.with_base_url(server.url("/v1"))
		.with_access_token("demo-token")
		.with_transport(TracedTransport::default())
		.build()?;
	let response = client.common().list_amenities().await?;

	for amenity in response.into_result().unwrap_or_default() {
		println!("amenity: {}", amenity.name.as_deref().unwrap_or("<unnamed>"));
	}

	Ok(())
}
