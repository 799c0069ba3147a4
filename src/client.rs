//! Request dispatcher: URL/query construction, header and body preparation,
//! timeout/cancellation composition, the retry loop, and response normalization.
//!
//! Every resource wrapper funnels through [`Client::request`]. A call walks
//! `PREPARING -> AWAITING_TOKEN -> DISPATCHED` and from there either succeeds,
//! retries once after a 401 (with a fresh token), backoff-retries a bounded number
//! of times on 429/5xx, or surfaces a normalized error.

pub mod body;
pub mod query;

pub use body::Body;
pub use query::{IncludeResources, Query, QueryValue};

/// Caller-supplied cancellation token, re-exported from `tokio-util`.
pub use tokio_util::sync::CancellationToken;

// std
use std::future;
// crates.io
use rand::Rng;
use serde::de::DeserializeOwned;
// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
use crate::{
	_prelude::*,
	auth::{CredentialManager, TokenProvider},
	error::ConfigError,
	http::{self, Headers, HttpTransport, Method, TransportRequest, TransportResponse},
	obs,
};

const DEFAULT_BASE_URL: &str = "https://api.hostaway.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: u32 = 2;
const BACKOFF_BASE: Duration = Duration::from_millis(300);
const BACKOFF_MAX: Duration = Duration::from_millis(5_000);
const JITTER_MAX_MS: u64 = 200;

/// Hostaway API client.
///
/// Holds the composed base URL, the shared transport, the credential manager, and
/// the retry/timeout configuration. Resource accessors borrow the client, so one
/// instance serves any number of concurrent calls.
pub struct Client {
	base_url: Url,
	transport: Arc<dyn HttpTransport>,
	auth: CredentialManager,
	timeout: Duration,
	user_agent: Option<String>,
	include_resources: Option<IncludeResources>,
	max_retries: u32,
}
impl Client {
	/// Returns a builder preconfigured with the production base URL and defaults.
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	/// Returns the credential manager owning this client's token state.
	pub fn auth(&self) -> &CredentialManager {
		&self.auth
	}

	/// Revokes `token`, defaulting to the currently cached one.
	pub async fn revoke_token(&self, token: Option<&str>) -> Result<()> {
		self.auth.revoke_token(token).await
	}

	/// Executes one API call and decodes the terminal 2xx body into `T`.
	///
	/// Recovers locally from at most one 401 (after invalidating the cached
	/// token) and from a bounded number of 429/5xx responses on idempotent
	/// methods; every other non-success outcome surfaces as an [`Error`] carrying
	/// full diagnostic context.
	pub async fn request<T>(
		&self,
		method: Method,
		path: &str,
		options: RequestOptions,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = self.build_url(path, &options.query);
		let mut auth_retried = false;
		let mut attempt = 0_u32;

		loop {
			let mut headers = self.prepare_headers(&options.headers);
			let had_auth_header = headers.contains("Authorization");
			let body = match &options.body {
				Some(body) => Some(body.prepare(&mut headers)?),
				None => None,
			};

			if !had_auth_header {
				let token = self.auth.access_token(false).await?;

				headers.set("Authorization", format!("Bearer {token}"));
			}

			let request = TransportRequest { method, url: url.clone(), headers, body };
			let response = self.dispatch(request, options.cancel.as_ref()).await?;

			// One-shot by design: a second 401 after a fresh token is terminal.
			if response.status == 401
				&& !auth_retried && !had_auth_header
				&& self.auth.can_refresh()
			{
				obs::auth_retrying(method, &url);
				self.auth.invalidate_token();

				auth_retried = true;

				continue;
			}
			if should_retry(response.status, method, attempt, self.max_retries) {
				let delay = retry_delay(&response, attempt);

				attempt += 1;

				obs::retrying(method, &url, response.status, delay);
				tokio::time::sleep(delay).await;

				continue;
			}

			let body = response.parse_body();

			if !response.is_success() {
				return Err(http::error_from_response(
					"Request failed.",
					&response,
					body,
					method,
					&url,
				)
				.into());
			}

			return decode(body, method, &url);
		}
	}

	/// Issues exactly one transport call, racing it against the per-call timeout
	/// and the caller's cancellation token. The losing branches classify the
	/// outcome exactly: the timer maps to [`Error::TimedOut`], the caller's token
	/// to [`Error::Aborted`]. Dropping the transport future abandons the call.
	async fn dispatch(
		&self,
		request: TransportRequest,
		cancel: Option<&CancellationToken>,
	) -> Result<TransportResponse> {
		let method = request.method;
		let url = request.url.clone();
		let call = self.transport.call(request);
		let aborted = async {
			match cancel {
				Some(token) => token.cancelled().await,
				None => future::pending().await,
			}
		};
		let deadline = async {
			if self.timeout.is_zero() {
				future::pending::<()>().await
			} else {
				tokio::time::sleep(self.timeout).await
			}
		};

		tokio::select! {
			biased;

			result = call => result.map_err(|source| Error::Fetch { method, url, source }),
			_ = deadline => Err(Error::TimedOut { method, url }),
			_ = aborted => Err(Error::Aborted { method, url }),
		}
	}

	fn build_url(&self, path: &str, query: &Query) -> Url {
		let mut url = http::join_path(&self.base_url, path);
		let mut effective = query.clone();

		if let Some(include) = &self.include_resources {
			if !effective.contains("includeResources") {
				effective.insert("includeResources", include.clone());
			}
		}
		if !effective.is_empty() {
			let mut pairs = url.query_pairs_mut();

			effective.encode(&mut pairs);
		}

		url
	}

	fn prepare_headers(&self, extra: &Headers) -> Headers {
		let mut headers = extra.clone();

		headers.set_default("Accept", "application/json");

		if let Some(user_agent) = &self.user_agent {
			headers.set_default("User-Agent", user_agent.clone());
		}

		headers
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("timeout", &self.timeout)
			.field("max_retries", &self.max_retries)
			.field("auth", &self.auth)
			.finish()
	}
}

/// Per-call options handed to [`Client::request`].
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
	/// Query parameters.
	pub query: Query,
	/// Request body.
	pub body: Option<Body>,
	/// Extra request headers; a caller-supplied `Authorization` header disables
	/// managed auth (and the 401 retry) for this call.
	pub headers: Headers,
	/// Caller-side cancellation token.
	pub cancel: Option<CancellationToken>,
}
impl RequestOptions {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the query parameters.
	pub fn with_query(mut self, query: impl Into<Query>) -> Self {
		self.query = query.into();

		self
	}

	/// Sets the request body.
	pub fn with_body(mut self, body: Body) -> Self {
		self.body = Some(body);

		self
	}

	/// Appends one request header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.append(name, value);

		self
	}

	/// Attaches a caller-side cancellation token.
	pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
		self.cancel = Some(cancel);

		self
	}
}

/// Builder for [`Client`].
///
/// Credential precedence at build time: a token provider wins over a client
/// id/secret pair, which wins over a static access token. `account_id` is an
/// alias for `client_id` when the latter is absent.
pub struct ClientBuilder {
	base_url: String,
	client_id: Option<String>,
	client_secret: Option<String>,
	account_id: Option<String>,
	access_token: Option<String>,
	provider: Option<Arc<dyn TokenProvider>>,
	transport: Option<Arc<dyn HttpTransport>>,
	timeout: Duration,
	user_agent: Option<String>,
	include_resources: Option<IncludeResources>,
	max_retries: u32,
}
impl ClientBuilder {
	/// Overrides the base URL.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();

		self
	}

	/// Sets the client-credentials pair used by the token endpoint flow.
	pub fn with_client_credentials(
		mut self,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		self.client_id = Some(client_id.into());
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Sets the account id, used as the client id when none is set.
	pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
		self.account_id = Some(account_id.into());

		self
	}

	/// Seeds a static access token. Without a provider or credentials pair the
	/// token cannot be refreshed.
	pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
		self.access_token = Some(access_token.into());

		self
	}

	/// Plugs in an external token provider.
	pub fn with_token_provider(mut self, provider: impl 'static + TokenProvider) -> Self {
		self.provider = Some(Arc::new(provider));

		self
	}

	/// Plugs in an already shared token provider.
	pub fn with_shared_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
		self.provider = Some(provider);

		self
	}

	/// Replaces the HTTP transport.
	pub fn with_transport(mut self, transport: impl HttpTransport) -> Self {
		self.transport = Some(Arc::new(transport));

		self
	}

	/// Replaces the HTTP transport with an already shared one.
	pub fn with_shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);

		self
	}

	/// Overrides the per-request timeout (default 30s); [`Duration::ZERO`]
	/// disables it.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Sets the `User-Agent` header attached to every request.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}

	/// Sets the default `includeResources` query parameter.
	pub fn with_include_resources(mut self, include: impl Into<IncludeResources>) -> Self {
		self.include_resources = Some(include.into());

		self
	}

	/// Overrides the backoff-retry bound (default 2).
	pub fn with_max_retries(mut self, max_retries: u32) -> Self {
		self.max_retries = max_retries;

		self
	}

	/// Validates the configuration and constructs the client.
	pub fn build(self) -> Result<Client> {
		let base_url = Url::parse(&self.base_url)
			.map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		if base_url.cannot_be_a_base() {
			return Err(ConfigError::UnsupportedBaseUrl.into());
		}

		let transport = match self.transport {
			Some(transport) => transport,
			None => default_transport()?,
		};
		let client_id = self.client_id.or(self.account_id);
		let auth = CredentialManager::new(
			base_url.clone(),
			transport.clone(),
			self.provider,
			client_id,
			self.client_secret,
			self.access_token,
		);

		Ok(Client {
			base_url,
			transport,
			auth,
			timeout: self.timeout,
			user_agent: self.user_agent,
			include_resources: self.include_resources,
			max_retries: self.max_retries,
		})
	}
}
impl Default for ClientBuilder {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			client_id: None,
			client_secret: None,
			account_id: None,
			access_token: None,
			provider: None,
			transport: None,
			timeout: DEFAULT_TIMEOUT,
			user_agent: None,
			include_resources: None,
			max_retries: DEFAULT_MAX_RETRIES,
		}
	}
}

fn default_transport() -> Result<Arc<dyn HttpTransport>> {
	#[cfg(feature = "reqwest")]
	{
		Ok(Arc::new(ReqwestTransport::default()))
	}
	#[cfg(not(feature = "reqwest"))]
	{
		Err(ConfigError::MissingTransport.into())
	}
}

/// Backoff retries apply to idempotent methods only, trigger on 429 and 5xx, and
/// are bounded by the configured retry count.
fn should_retry(status: u16, method: Method, attempt: u32, max_retries: u32) -> bool {
	if attempt >= max_retries {
		return false;
	}
	if !method.is_idempotent() {
		return false;
	}

	status == 429 || (500..600).contains(&status)
}

/// `Retry-After` wins when present; otherwise exponential backoff with jitter.
fn retry_delay(response: &TransportResponse, attempt: u32) -> Duration {
	if let Some(delay) = http::parse_retry_after(&response.headers) {
		return delay;
	}

	let multiplier = 1_u32.checked_shl(attempt).unwrap_or(u32::MAX);
	let capped = BACKOFF_BASE.checked_mul(multiplier).unwrap_or(BACKOFF_MAX).min(BACKOFF_MAX);
	let jitter = Duration::from_millis(rand::rng().random_range(0..JITTER_MAX_MS));

	capped + jitter
}

fn decode<T>(body: Option<Value>, method: Method, url: &Url) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(body.unwrap_or(Value::Null)).map_err(|source| {
		Error::Decode { method, url: url.clone(), source }
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::TransportFuture;

	struct NoopTransport;
	impl HttpTransport for NoopTransport {
		fn call(&self, _: TransportRequest) -> TransportFuture<'_> {
			Box::pin(future::pending())
		}
	}

	fn test_client() -> Client {
		Client::builder()
			.with_base_url("https://api.example.com/v1")
			.with_transport(NoopTransport)
			.with_access_token("static")
			.build()
			.expect("Test client should build.")
	}

	#[test]
	fn retry_policy_is_idempotent_only_and_bounded() {
		assert!(should_retry(429, Method::Get, 0, 2));
		assert!(should_retry(500, Method::Head, 1, 2));
		assert!(should_retry(599, Method::Get, 0, 2));
		assert!(!should_retry(500, Method::Post, 0, 2));
		assert!(!should_retry(500, Method::Get, 2, 2));
		assert!(!should_retry(404, Method::Get, 0, 2));
	}

	#[test]
	fn backoff_grows_exponentially_with_bounded_jitter() {
		let response =
			TransportResponse { status: 500, headers: Headers::new(), body: Vec::new() };

		for (attempt, floor_ms) in [(0_u32, 300_u64), (1, 600), (2, 1_200), (3, 2_400)] {
			let delay = retry_delay(&response, attempt);

			assert!(delay >= Duration::from_millis(floor_ms));
			assert!(delay < Duration::from_millis(floor_ms + JITTER_MAX_MS));
		}

		// Large attempts cap at the max delay plus jitter.
		let delay = retry_delay(&response, 30);

		assert!(delay >= BACKOFF_MAX);
		assert!(delay < BACKOFF_MAX + Duration::from_millis(JITTER_MAX_MS));
	}

	#[test]
	fn retry_after_header_overrides_backoff() {
		let response = TransportResponse {
			status: 429,
			headers: [("retry-after", "7")].into_iter().collect(),
			body: Vec::new(),
		};

		assert_eq!(retry_delay(&response, 0), Duration::from_secs(7));
	}

	#[test]
	fn build_url_injects_default_include_resources() {
		let client = Client::builder()
			.with_base_url("https://api.example.com/v1")
			.with_transport(NoopTransport)
			.with_access_token("static")
			.with_include_resources(true)
			.build()
			.expect("Test client should build.");
		let url = client.build_url("/listings", &Query::new());

		assert_eq!(url.as_str(), "https://api.example.com/v1/listings?includeResources=true");

		let url =
			client.build_url("/listings", &Query::new().with("includeResources", "listingUnits"));

		assert_eq!(
			url.as_str(),
			"https://api.example.com/v1/listings?includeResources=listingUnits",
		);
	}

	#[test]
	fn build_url_without_query_has_no_stray_separator() {
		let client = test_client();
		let url = client.build_url("/listings//42/", &Query::new());

		assert_eq!(url.as_str(), "https://api.example.com/v1/listings/42");
	}

	#[test]
	fn prepared_headers_respect_caller_values() {
		let client = Client::builder()
			.with_base_url("https://api.example.com/v1")
			.with_transport(NoopTransport)
			.with_access_token("static")
			.with_user_agent("hostaway-rs-tests")
			.build()
			.expect("Test client should build.");
		let headers = client.prepare_headers(&Headers::new());

		assert_eq!(headers.get("accept"), Some("application/json"));
		assert_eq!(headers.get("user-agent"), Some("hostaway-rs-tests"));

		let caller: Headers = [("Accept", "text/csv")].into_iter().collect();
		let headers = client.prepare_headers(&caller);

		assert_eq!(headers.get("accept"), Some("text/csv"));
	}
}
