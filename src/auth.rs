//! Credential manager: token acquisition, caching, expiry tracking, singleflight
//! refresh, and revocation.
//!
//! Exactly one credential source is active per manager, decided at construction:
//! an external [`TokenProvider`] takes precedence over a client id/secret pair,
//! which takes precedence over a caller-supplied static token (which cannot
//! refresh itself). Concurrent refreshes are de-duplicated through a singleflight
//! guard so N concurrent callers trigger at most one underlying token fetch.

pub mod provider;
pub mod secret;

pub use provider::{ProvidedToken, ProviderFuture, TokenProvider};
pub use secret::TokenSecret;

// crates.io
use time::format_description::well_known::{Rfc2822, Rfc3339};
// self
use crate::{
	_prelude::*,
	error::CredentialError,
	http::{self, Headers, HttpTransport, Method, TransportRequest},
	obs,
};

/// Safety margin subtracted from a token's reported expiry so a token is never
/// presented while racing its actual expiration.
const EXPIRY_SKEW: time::Duration = time::Duration::seconds(30);

/// Owns access-token state for one client instance.
///
/// The manager knows nothing about retry policy or request shaping; the dispatcher
/// asks it for bearer tokens and invalidates the cache on auth failures.
pub struct CredentialManager {
	base_url: Url,
	transport: Arc<dyn HttpTransport>,
	source: CredentialSource,
	cache: Mutex<TokenCache>,
	refresh_guard: AsyncMutex<()>,
}
impl CredentialManager {
	pub(crate) fn new(
		base_url: Url,
		transport: Arc<dyn HttpTransport>,
		provider: Option<Arc<dyn TokenProvider>>,
		client_id: Option<String>,
		client_secret: Option<String>,
		access_token: Option<String>,
	) -> Self {
		let source = if let Some(provider) = provider {
			CredentialSource::Provider(provider)
		} else if let (Some(client_id), Some(client_secret)) = (client_id, client_secret) {
			CredentialSource::ClientCredentials { client_id, client_secret }
		} else {
			CredentialSource::StaticOnly
		};
		let cache =
			TokenCache { token: access_token.map(TokenSecret::new), expires_at: None };

		Self {
			base_url,
			transport,
			source,
			cache: Mutex::new(cache),
			refresh_guard: AsyncMutex::new(()),
		}
	}

	/// Resolves a bearer token, refreshing when forced or when the cache is
	/// missing or expired.
	///
	/// The cached fast path performs no I/O. While a refresh is in flight,
	/// concurrent callers await the same singleflight guard and observe its result
	/// instead of starting a second fetch; the guard is released on success and
	/// failure alike so later calls can retry.
	pub async fn access_token(&self, force_refresh: bool) -> Result<String> {
		if !force_refresh {
			if let Some(token) = self.cached_token() {
				return Ok(token);
			}
		}

		let _refresh = self.refresh_guard.lock().await;

		// Piggy-backed callers land here after the leading refresh completes.
		if !force_refresh {
			if let Some(token) = self.cached_token() {
				return Ok(token);
			}
		}

		self.refresh().await
	}

	/// Returns `true` iff a provider or client-credentials pair is configured.
	///
	/// A bare static token cannot self-refresh.
	pub fn can_refresh(&self) -> bool {
		!matches!(self.source, CredentialSource::StaticOnly)
	}

	/// Clears the cached token and expiry unconditionally. No I/O; idempotent.
	pub fn invalidate_token(&self) {
		let mut cache = self.cache.lock();

		cache.token = None;
		cache.expires_at = None;
	}

	/// Revokes `token`, defaulting to the currently cached one.
	///
	/// A provider revocation hook takes precedence; otherwise the API's token
	/// revocation endpoint is called. The cache is cleared when the revoked token
	/// is the cached one. With nothing to revoke this is a no-op.
	pub async fn revoke_token(&self, token: Option<&str>) -> Result<()> {
		let target = match token {
			Some(token) => token.to_owned(),
			None => {
				let Some(token) =
					self.cache.lock().token.as_ref().map(|t| t.expose().to_owned())
				else {
					return Ok(());
				};

				token
			},
		};

		if let CredentialSource::Provider(provider) = &self.source {
			if let Some(hook) = provider.revoke(&target) {
				hook.await?;
				self.invalidate_if_current(&target);
				obs::token_revoked();

				return Ok(());
			}
		}

		let mut url = http::join_path(&self.base_url, "accessTokens");

		url.query_pairs_mut().append_pair("token", &target);

		let mut headers = Headers::new();

		headers.set("Authorization", format!("Bearer {target}"));
		headers.set("Accept", "application/json");

		let request =
			TransportRequest { method: Method::Delete, url: url.clone(), headers, body: None };
		let response = self.transport.call(request).await.map_err(|source| Error::Fetch {
			method: Method::Delete,
			url: url.clone(),
			source,
		})?;
		let body = response.parse_body();

		if !response.is_success() {
			return Err(http::error_from_response(
				"Token revocation failed.",
				&response,
				body,
				Method::Delete,
				&url,
			)
			.into());
		}

		self.invalidate_if_current(&target);
		obs::token_revoked();

		Ok(())
	}

	fn cached_token(&self) -> Option<String> {
		let cache = self.cache.lock();
		let token = cache.token.as_ref()?;

		if is_expired(cache.expires_at, OffsetDateTime::now_utc()) {
			return None;
		}

		Some(token.expose().to_owned())
	}

	fn invalidate_if_current(&self, token: &str) {
		let mut cache = self.cache.lock();

		if cache.token.as_ref().is_some_and(|current| current.expose() == token) {
			cache.token = None;
			cache.expires_at = None;
		}
	}

	fn store(&self, token: &str, expires_at: Option<OffsetDateTime>) {
		let mut cache = self.cache.lock();

		cache.token = Some(TokenSecret::new(token));
		cache.expires_at = expires_at;

		obs::token_refreshed(expires_at);
	}

	async fn refresh(&self) -> Result<String> {
		match &self.source {
			CredentialSource::Provider(provider) => {
				let provided = provider.token().await?;

				self.store(&provided.access_token, provided.expires_at);

				Ok(provided.access_token)
			},
			CredentialSource::ClientCredentials { client_id, client_secret } =>
				self.fetch_access_token(client_id, client_secret).await,
			CredentialSource::StaticOnly => Err(CredentialError::MissingCredentials.into()),
		}
	}

	async fn fetch_access_token(&self, client_id: &str, client_secret: &str) -> Result<String> {
		let url = http::join_path(&self.base_url, "accessTokens");
		let form = url::form_urlencoded::Serializer::new(String::new())
			.append_pair("grant_type", "client_credentials")
			.append_pair("client_id", client_id)
			.append_pair("client_secret", client_secret)
			.append_pair("scope", "general")
			.finish();
		let mut headers = Headers::new();

		headers.set("Content-Type", "application/x-www-form-urlencoded");
		headers.set("Accept", "application/json");

		let request = TransportRequest {
			method: Method::Post,
			url: url.clone(),
			headers,
			body: Some(form.into_bytes()),
		};
		let response = self.transport.call(request).await.map_err(|source| Error::Fetch {
			method: Method::Post,
			url: url.clone(),
			source,
		})?;

		if !response.is_success() {
			let body = response.parse_body();

			return Err(http::error_from_response(
				"Token request failed.",
				&response,
				body,
				Method::Post,
				&url,
			)
			.into());
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
		let parsed: TokenEndpointResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| CredentialError::TokenResponseParse { source })?;
		let token = parsed
			.access_token
			.as_deref()
			.filter(|t| !t.is_empty())
			.ok_or(CredentialError::MissingAccessToken)?
			.to_owned();
		let expires_at = resolve_expires_at(&parsed, OffsetDateTime::now_utc());

		self.store(&token, expires_at);

		Ok(token)
	}
}
impl Debug for CredentialManager {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialManager")
			.field("base_url", &self.base_url.as_str())
			.field("source", &self.source.label())
			.field("can_refresh", &self.can_refresh())
			.finish()
	}
}

enum CredentialSource {
	Provider(Arc<dyn TokenProvider>),
	ClientCredentials { client_id: String, client_secret: String },
	StaticOnly,
}
impl CredentialSource {
	fn label(&self) -> &'static str {
		match self {
			Self::Provider(_) => "provider",
			Self::ClientCredentials { .. } => "client_credentials",
			Self::StaticOnly => "static",
		}
	}
}

#[derive(Default)]
struct TokenCache {
	token: Option<TokenSecret>,
	expires_at: Option<OffsetDateTime>,
}

#[derive(Deserialize)]
struct TokenEndpointResponse {
	#[serde(default, alias = "accessToken")]
	access_token: Option<String>,
	#[serde(default)]
	expires_at: Option<Value>,
	#[serde(default)]
	expires_in: Option<f64>,
}

/// A token is expired once `now` reaches the expiry minus the skew guard.
/// An absent expiry means the token never expires until invalidated.
fn is_expired(expires_at: Option<OffsetDateTime>, now: OffsetDateTime) -> bool {
	match expires_at {
		Some(expires_at) => now >= expires_at - EXPIRY_SKEW,
		None => false,
	}
}

/// Resolves the expiry instant from a token endpoint response.
///
/// Field precedence: absolute `expires_at` as a number (epoch milliseconds when
/// larger than 1e12, else epoch seconds), then `expires_at` as a parseable date
/// string, then relative `expires_in` seconds. Absence of all three means the
/// token never expires until explicitly invalidated.
fn resolve_expires_at(
	response: &TokenEndpointResponse,
	now: OffsetDateTime,
) -> Option<OffsetDateTime> {
	match &response.expires_at {
		Some(Value::Number(number)) =>
			if let Some(raw) = number.as_f64() {
				let millis = if raw > 1_000_000_000_000. { raw } else { raw * 1_000. };

				return OffsetDateTime::from_unix_timestamp_nanos((millis * 1_000_000.) as i128)
					.ok();
			},
		Some(Value::String(raw)) => {
			if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
				return Some(parsed);
			}
			if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc2822) {
				return Some(parsed);
			}
		},
		_ => (),
	}

	response.expires_in.map(|seconds| now + time::Duration::seconds_f64(seconds))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn token_response(json: Value) -> TokenEndpointResponse {
		serde_json::from_value(json).expect("Token response fixture should deserialize.")
	}

	#[test]
	fn expiry_applies_skew_guard() {
		let now = OffsetDateTime::now_utc();

		assert!(!is_expired(None, now));
		assert!(!is_expired(Some(now + time::Duration::seconds(120)), now));
		assert!(is_expired(Some(now + time::Duration::seconds(29)), now));
		assert!(is_expired(Some(now - time::Duration::seconds(1)), now));
	}

	#[test]
	fn expires_at_number_distinguishes_seconds_from_milliseconds() {
		let now = OffsetDateTime::now_utc();
		let epoch_seconds = 1_700_000_000_i64;
		let response =
			token_response(serde_json::json!({ "access_token": "t", "expires_at": epoch_seconds }));
		let resolved =
			resolve_expires_at(&response, now).expect("Epoch seconds should resolve.");

		assert_eq!(resolved.unix_timestamp(), epoch_seconds);

		let epoch_millis = 1_700_000_000_000_i64;
		let response =
			token_response(serde_json::json!({ "access_token": "t", "expires_at": epoch_millis }));
		let resolved =
			resolve_expires_at(&response, now).expect("Epoch milliseconds should resolve.");

		assert_eq!(resolved.unix_timestamp(), epoch_seconds);
	}

	#[test]
	fn expires_at_string_parses_as_date() {
		let now = OffsetDateTime::now_utc();
		let response = token_response(
			serde_json::json!({ "access_token": "t", "expires_at": "2030-05-01T12:00:00Z" }),
		);
		let resolved = resolve_expires_at(&response, now).expect("Date string should resolve.");

		assert_eq!(resolved.year(), 2030);
	}

	#[test]
	fn expires_in_is_relative_and_loses_to_expires_at() {
		let now = OffsetDateTime::now_utc();
		let response =
			token_response(serde_json::json!({ "access_token": "t", "expires_in": 3600 }));
		let resolved = resolve_expires_at(&response, now).expect("expires_in should resolve.");

		assert_eq!(resolved, now + time::Duration::seconds(3600));

		let response = token_response(serde_json::json!({
			"access_token": "t",
			"expires_at": 1_700_000_000_i64,
			"expires_in": 3600,
		}));
		let resolved = resolve_expires_at(&response, now).expect("expires_at should win.");

		assert_eq!(resolved.unix_timestamp(), 1_700_000_000);
	}

	#[test]
	fn missing_expiry_fields_mean_no_expiry() {
		let response = token_response(serde_json::json!({ "access_token": "t" }));

		assert_eq!(resolve_expires_at(&response, OffsetDateTime::now_utc()), None);
	}

	#[test]
	fn token_field_accepts_both_casings() {
		let response = token_response(serde_json::json!({ "accessToken": "camel" }));

		assert_eq!(response.access_token.as_deref(), Some("camel"));
	}
}
