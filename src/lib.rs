//! Async Hostaway API client—managed OAuth tokens with singleflight refresh,
//! a retrying dispatcher with timeout and cancellation composition, and typed
//! accessors for every endpoint family.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
mod obs;
pub mod resource;
pub mod types;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via
	//! `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::{collections::VecDeque, future};
	// self
	use crate::http::{Headers, HttpTransport, TransportFuture, TransportRequest, TransportResponse};

	/// One scripted transport outcome, consumed in order.
	pub enum ScriptedResponse {
		/// Resolve immediately with the response.
		Respond(TransportResponse),
		/// Resolve with the response after the delay elapses.
		Delay(Duration, TransportResponse),
		/// Never resolve; the dispatcher's timeout or cancellation must fire.
		Hang,
	}

	/// Transport double replaying a fixed script and recording every request.
	///
	/// An exhausted script hangs, so over-calling surfaces as a test timeout
	/// instead of a silent success.
	#[derive(Default)]
	pub struct MockTransport {
		script: Mutex<VecDeque<ScriptedResponse>>,
		requests: Mutex<Vec<TransportRequest>>,
	}
	impl MockTransport {
		/// Creates a shared transport from scripted outcomes.
		pub fn new(script: impl IntoIterator<Item = ScriptedResponse>) -> Arc<Self> {
			Arc::new(Self {
				script: Mutex::new(script.into_iter().collect()),
				requests: Mutex::new(Vec::new()),
			})
		}

		/// Returns every request received so far, in call order.
		pub fn requests(&self) -> Vec<TransportRequest> {
			self.requests.lock().clone()
		}

		/// Returns the number of calls received so far.
		pub fn calls(&self) -> usize {
			self.requests.lock().len()
		}
	}
	impl HttpTransport for MockTransport {
		fn call(&self, request: TransportRequest) -> TransportFuture<'_> {
			self.requests.lock().push(request);

			let step = self.script.lock().pop_front();

			Box::pin(async move {
				match step {
					Some(ScriptedResponse::Respond(response)) => Ok(response),
					Some(ScriptedResponse::Delay(delay, response)) => {
						tokio::time::sleep(delay).await;

						Ok(response)
					},
					Some(ScriptedResponse::Hang) | None => future::pending().await,
				}
			})
		}
	}

	/// Builds a JSON response with the standard content type header.
	pub fn json_response(status: u16, body: Value) -> TransportResponse {
		let headers: Headers =
			[("content-type", "application/json; charset=utf-8")].into_iter().collect();

		TransportResponse { status, headers, body: body.to_string().into_bytes() }
	}

	/// Builds a token endpoint success response.
	pub fn token_response(token: &str, expires_in: f64) -> TransportResponse {
		json_response(
			200,
			serde_json::json!({
				"token_type": "Bearer",
				"access_token": token,
				"expires_in": expires_in,
			}),
		)
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{ApiError, Error, Result};
}

pub use client::{Client, ClientBuilder, RequestOptions};
pub use error::{ApiError, Error, Result};

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use time;
pub use url;
#[cfg(test)] use {hostaway as _, httpmock as _};
