// std
use std::collections::VecDeque;
// self
use hostaway::{
	_preludet::*,
	auth::{ProvidedToken, ProviderFuture, TokenProvider},
	client::Client,
	error::CredentialError,
	http::Method,
	serde_json::json,
	time,
};

fn credentials_client(transport: Arc<MockTransport>) -> Client {
	Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport)
		.with_client_credentials("account-1", "secret-1")
		.build()
		.expect("Client with client credentials should build.")
}

struct SeqProvider {
	tokens: Mutex<VecDeque<ProvidedToken>>,
}
impl SeqProvider {
	fn new(tokens: impl IntoIterator<Item = ProvidedToken>) -> Self {
		Self { tokens: Mutex::new(tokens.into_iter().collect()) }
	}
}
impl TokenProvider for SeqProvider {
	fn token(&self) -> ProviderFuture<'_, ProvidedToken> {
		let next = self
			.tokens
			.lock()
			.pop_front()
			.expect("Provider script should not be exhausted.");

		Box::pin(async move { Ok(next) })
	}
}

#[tokio::test(start_paused = true)]
async fn concurrent_token_requests_fetch_once() {
	let transport = MockTransport::new([ScriptedResponse::Delay(
		Duration::from_millis(100),
		token_response("guard-token", 3_600.),
	)]);
	let client = credentials_client(transport.clone());
	let (first, second) =
		tokio::join!(client.auth().access_token(false), client.auth().access_token(false));

	assert_eq!(first.expect("First concurrent call should succeed."), "guard-token");
	assert_eq!(second.expect("Second concurrent call should succeed."), "guard-token");
	assert_eq!(transport.calls(), 1);

	let request = &transport.requests()[0];

	assert_eq!(request.method, Method::Post);
	assert_eq!(request.url.path(), "/v1/accessTokens");

	let form = String::from_utf8(request.body.clone().expect("Token request should carry a form."))
		.expect("Token form should be UTF-8.");

	assert!(form.contains("grant_type=client_credentials"));
	assert!(form.contains("client_id=account-1"));
	assert!(form.contains("scope=general"));
}

#[tokio::test]
async fn cached_token_is_reused_until_forced() {
	let transport = MockTransport::new([
		ScriptedResponse::Respond(token_response("first", 3_600.)),
		ScriptedResponse::Respond(token_response("second", 3_600.)),
	]);
	let client = credentials_client(transport.clone());

	assert_eq!(
		client.auth().access_token(false).await.expect("Initial fetch should succeed."),
		"first",
	);
	assert_eq!(
		client.auth().access_token(false).await.expect("Cached read should succeed."),
		"first",
	);
	assert_eq!(transport.calls(), 1);

	assert_eq!(
		client.auth().access_token(true).await.expect("Forced refresh should succeed."),
		"second",
	);
	assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn provider_token_is_refetched_once_expired() {
	let transport = MockTransport::new([]);
	let client = Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport.clone())
		.with_token_provider(SeqProvider::new([
			// Expires inside the skew guard, so the next call refreshes.
			ProvidedToken::new("short-lived")
				.with_expires_at(OffsetDateTime::now_utc() + time::Duration::seconds(10)),
			ProvidedToken::new("long-lived"),
		]))
		.build()
		.expect("Client with token provider should build.");

	assert_eq!(
		client.auth().access_token(false).await.expect("First provider call should succeed."),
		"short-lived",
	);
	assert_eq!(
		client.auth().access_token(false).await.expect("Second provider call should succeed."),
		"long-lived",
	);
	assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn static_token_cannot_refresh() {
	let transport = MockTransport::new([]);
	let client = Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport.clone())
		.with_access_token("static-token")
		.build()
		.expect("Client with static token should build.");

	assert!(!client.auth().can_refresh());
	assert_eq!(
		client.auth().access_token(false).await.expect("Static token should resolve."),
		"static-token",
	);

	client.auth().invalidate_token();

	let err = client
		.auth()
		.access_token(false)
		.await
		.expect_err("Refreshing a bare static token should fail.");

	assert!(matches!(err, Error::Credential(CredentialError::MissingCredentials)));
}

#[tokio::test]
async fn revoke_deletes_once_and_is_then_a_noop() {
	let transport =
		MockTransport::new([ScriptedResponse::Respond(json_response(200, json!({ "status": "success" })))]);
	let client = Client::builder()
		.with_base_url("https://api.test.local/v1")
		.with_shared_transport(transport.clone())
		.with_access_token("revocable")
		.build()
		.expect("Client with static token should build.");

	client.revoke_token(None).await.expect("Revocation should succeed.");

	let request = &transport.requests()[0];

	assert_eq!(request.method, Method::Delete);
	assert_eq!(request.url.path(), "/v1/accessTokens");
	assert_eq!(request.url.query(), Some("token=revocable"));
	assert_eq!(request.headers.get("authorization"), Some("Bearer revocable"));

	// The cache was cleared, so a second revocation has nothing to do.
	client.revoke_token(None).await.expect("Idempotent revocation should succeed.");

	assert_eq!(transport.calls(), 1);
}
