//! External token provider contract.
//!
//! Callers that already manage Hostaway tokens elsewhere (a secrets service, a
//! shared cache, another process) plug in here instead of handing the client a
//! client id/secret pair. The provider is consulted on every refresh; the manager
//! still owns caching, expiry tracking, and singleflight de-duplication.

// self
use crate::_prelude::*;

/// Boxed future returned by [`TokenProvider`] hooks.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Token handed back by a [`TokenProvider`].
#[derive(Clone, Debug)]
pub struct ProvidedToken {
	/// The bearer token value.
	pub access_token: String,
	/// Absolute expiry instant; `None` means the token never expires until
	/// explicitly invalidated.
	pub expires_at: Option<OffsetDateTime>,
}
impl ProvidedToken {
	/// Creates a token without an expiry.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self { access_token: access_token.into(), expires_at: None }
	}

	/// Attaches an absolute expiry instant.
	pub fn with_expires_at(mut self, expires_at: OffsetDateTime) -> Self {
		self.expires_at = Some(expires_at);

		self
	}
}

/// Strategy that resolves access tokens outside the built-in client-credentials flow.
///
/// Implementations are shared behind `Arc<dyn TokenProvider>` so the hooks return
/// boxed futures rather than using async trait methods.
pub trait TokenProvider
where
	Self: Send + Sync,
{
	/// Resolves a fresh access token.
	fn token(&self) -> ProviderFuture<'_, ProvidedToken>;

	/// Optional revocation hook.
	///
	/// Returning `None` (the default) makes the manager fall back to the API's
	/// token revocation endpoint.
	fn revoke<'a>(&'a self, token: &'a str) -> Option<ProviderFuture<'a, ()>> {
		let _ = token;

		None
	}
}
