//! Logging hooks, compiled down to no-ops when the `tracing` feature is disabled.
//!
//! The dispatcher and credential manager report through these helpers instead of
//! calling `tracing` macros directly, so the crate builds identically with the
//! feature off.

// self
use crate::{_prelude::*, http::Method};

/// Logs a scheduled backoff retry at warn level with status and delay.
pub(crate) fn retrying(method: Method, url: &Url, status: u16, delay: Duration) {
	#[cfg(feature = "tracing")]
	tracing::warn!(
		method = method.as_str(),
		url = %url,
		status,
		delay_ms = delay.as_millis() as u64,
		"Retrying after backoff.",
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (method, url, status, delay);
}

/// Logs the one-shot 401 auth retry.
pub(crate) fn auth_retrying(method: Method, url: &Url) {
	#[cfg(feature = "tracing")]
	tracing::debug!(method = method.as_str(), url = %url, "Refreshing token after 401.");
	#[cfg(not(feature = "tracing"))]
	let _ = (method, url);
}

/// Logs a completed token refresh. The token itself is never logged.
pub(crate) fn token_refreshed(expires_at: Option<OffsetDateTime>) {
	#[cfg(feature = "tracing")]
	tracing::debug!(expires_at = expires_at.map(|at| at.to_string()), "Access token refreshed.");
	#[cfg(not(feature = "tracing"))]
	let _ = expires_at;
}

/// Logs a completed token revocation.
pub(crate) fn token_revoked() {
	#[cfg(feature = "tracing")]
	tracing::debug!("Access token revoked.");
}
