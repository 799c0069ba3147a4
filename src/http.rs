//! Transport primitives for API calls.
//!
//! The module exposes [`HttpTransport`] as the crate's only dependency on an HTTP
//! stack, alongside the [`TransportRequest`]/[`TransportResponse`] pair every
//! implementation exchanges. Cancellation is cooperative: the dispatcher races the
//! returned future against its timeout and the caller's cancellation token, and
//! dropping the future must abandon the in-flight call.

// std
use std::{borrow::Cow, str::FromStr};
// crates.io
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError};

/// HTTP methods accepted by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`.
	Get,
	/// `HEAD`.
	Head,
	/// `POST`.
	Post,
	/// `PUT`.
	Put,
	/// `PATCH`.
	Patch,
	/// `DELETE`.
	Delete,
}
impl Method {
	/// Returns the canonical uppercase method name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Head => "HEAD",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Patch => "PATCH",
			Self::Delete => "DELETE",
		}
	}

	/// Returns `true` for methods the backoff-retry policy may replay.
	pub fn is_idempotent(self) -> bool {
		matches!(self, Self::Get | Self::Head)
	}

	#[cfg(feature = "reqwest")]
	pub(crate) fn as_reqwest(self) -> reqwest::Method {
		match self {
			Self::Get => reqwest::Method::GET,
			Self::Head => reqwest::Method::HEAD,
			Self::Post => reqwest::Method::POST,
			Self::Put => reqwest::Method::PUT,
			Self::Patch => reqwest::Method::PATCH,
			Self::Delete => reqwest::Method::DELETE,
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Method {
	type Err = MethodParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(Self::Get),
			"HEAD" => Ok(Self::Head),
			"POST" => Ok(Self::Post),
			"PUT" => Ok(Self::Put),
			"PATCH" => Ok(Self::Patch),
			"DELETE" => Ok(Self::Delete),
			_ => Err(MethodParseError(s.to_owned())),
		}
	}
}

/// Raised when a method string does not name a supported HTTP method.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unsupported HTTP method `{0}`.")]
pub struct MethodParseError(String);

/// Ordered header pairs with case-insensitive name lookup.
#[derive(Clone, Debug, Default)]
pub struct Headers(Vec<(String, String)>);
impl Headers {
	/// Creates an empty header map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the first value stored under `name`, ignoring name case.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}

	/// Returns `true` when a value is stored under `name`, ignoring name case.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Replaces every value stored under `name` with a single pair.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();

		self.0.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
		self.0.push((name, value.into()));
	}

	/// Stores the pair only when `name` is not already present.
	pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();

		if !self.contains(&name) {
			self.0.push((name, value.into()));
		}
	}

	/// Appends a pair without touching existing values of the same name.
	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.push((name.into(), value.into()));
	}

	/// Iterates over the stored pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Returns the number of stored pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no pairs are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<N, V> FromIterator<(N, V)> for Headers
where
	N: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
	}
}

/// One outbound request handed to the transport; built fresh per attempt.
#[derive(Clone, Debug)]
pub struct TransportRequest {
	/// HTTP method.
	pub method: Method,
	/// Fully composed URL including query parameters.
	pub url: Url,
	/// Prepared request headers.
	pub headers: Headers,
	/// Serialized request body, if any.
	pub body: Option<Vec<u8>>,
}

/// Raw response surfaced by a transport.
#[derive(Clone, Debug)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers.
	pub headers: Headers,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns the body decoded as UTF-8, replacing invalid sequences.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}

	/// Parses the body once: empty bodies yield `None`; bodies declared as JSON
	/// parse as JSON with a raw-text fallback; everything else is raw text.
	pub fn parse_body(&self) -> Option<Value> {
		if self.body.is_empty() {
			return None;
		}

		let text = self.text();

		if self.headers.get("content-type").is_some_and(|ct| ct.contains("json")) {
			if let Ok(value) = serde_json::from_str(&text) {
				return Some(value);
			}
		}

		Some(Value::String(text.into_owned()))
	}

	/// Returns the request id echoed by the API, checking headers in priority order.
	pub fn request_id(&self) -> Option<&str> {
		["x-request-id", "request-id", "x-hostaway-request-id"]
			.iter()
			.find_map(|name| self.headers.get(name))
	}
}

/// Boxed future returned by [`HttpTransport::call`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports able to execute one request at a time.
///
/// Implementations must issue exactly one HTTP call per [`call`](Self::call)
/// invocation and abandon it when the returned future is dropped. They are shared
/// behind `Arc<dyn HttpTransport>` between the dispatcher and the credential
/// manager, so `Send + Sync + 'static` is required.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes the request and resolves with the raw response.
	fn call(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] implementing [`HttpTransport`].
///
/// Dropping the in-flight future cancels the underlying reqwest call, which is what
/// the dispatcher relies on for timeout and caller-abort composition.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn call(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(request.method.as_reqwest(), request.url);

			for (name, value) in request.headers.iter() {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|v| (name.as_str().to_owned(), v.to_owned()))
				})
				.collect();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(TransportResponse { status, headers, body })
		})
	}
}

/// Joins a relative endpoint path onto the base URL.
///
/// Segments are percent-encoded individually and empty segments are dropped, so
/// duplicate and leading/trailing slashes collapse.
pub(crate) fn join_path(base: &Url, path: &str) -> Url {
	let mut url = base.clone();

	if let Ok(mut segments) = url.path_segments_mut() {
		segments.pop_if_empty();
		segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
	}

	url
}

/// Converts a `Retry-After` header into a wait duration.
///
/// Accepts numeric seconds or an RFC 2822 HTTP date; both clamp to non-negative.
pub(crate) fn parse_retry_after(headers: &Headers) -> Option<Duration> {
	let raw = headers.get("retry-after")?.trim();

	if let Ok(secs) = raw.parse::<f64>() {
		if secs.is_finite() {
			return Some(Duration::from_secs_f64(secs.max(0.0)));
		}
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		return Some(Duration::try_from(delta).unwrap_or(Duration::ZERO));
	}

	None
}

/// Builds a normalized [`ApiError`] from a terminal non-2xx response.
pub(crate) fn error_from_response(
	fallback: &str,
	response: &TransportResponse,
	body: Option<Value>,
	method: Method,
	url: &Url,
) -> ApiError {
	let object = body.as_ref().and_then(Value::as_object);
	let string_field = |keys: &[&str]| {
		object.and_then(|o| {
			keys.iter()
				.find_map(|key| o.get(*key))
				.and_then(Value::as_str)
				.filter(|s| !s.is_empty())
				.map(str::to_owned)
		})
	};
	let message = string_field(&["message", "error"])
		.or_else(|| reason_phrase(response.status).map(str::to_owned))
		.unwrap_or_else(|| fallback.to_owned());
	let code = string_field(&["code", "errorCode"]);
	let details = object.and_then(|o| o.get("errors").or_else(|| o.get("details"))).cloned();
	let request_id = response.request_id().map(str::to_owned);

	ApiError {
		status: response.status,
		message,
		code,
		details,
		request_id,
		response_body: body,
		method,
		url: url.clone(),
	}
}

fn reason_phrase(status: u16) -> Option<&'static str> {
	Some(match status {
		400 => "Bad Request",
		401 => "Unauthorized",
		403 => "Forbidden",
		404 => "Not Found",
		405 => "Method Not Allowed",
		409 => "Conflict",
		422 => "Unprocessable Entity",
		429 => "Too Many Requests",
		500 => "Internal Server Error",
		502 => "Bad Gateway",
		503 => "Service Unavailable",
		504 => "Gateway Timeout",
		_ => return None,
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16, headers: Headers, body: &str) -> TransportResponse {
		TransportResponse { status, headers, body: body.as_bytes().to_vec() }
	}

	#[test]
	fn method_parses_case_insensitively() {
		assert_eq!("get".parse::<Method>(), Ok(Method::Get));
		assert_eq!("Delete".parse::<Method>(), Ok(Method::Delete));
		assert!("TRACE".parse::<Method>().is_err());
	}

	#[test]
	fn headers_lookup_ignores_name_case() {
		let mut headers = Headers::new();

		headers.set("Content-Type", "application/json");

		assert_eq!(headers.get("content-type"), Some("application/json"));

		headers.set_default("CONTENT-TYPE", "text/plain");

		assert_eq!(headers.len(), 1);

		headers.set("content-type", "text/plain");

		assert_eq!(headers.get("Content-Type"), Some("text/plain"));
		assert_eq!(headers.len(), 1);
	}

	#[test]
	fn retry_after_accepts_seconds_and_clamps_negatives() {
		let headers = [("retry-after", "2")].into_iter().collect();

		assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(2)));

		let headers = [("Retry-After", "-3")].into_iter().collect();

		assert_eq!(parse_retry_after(&headers), Some(Duration::ZERO));

		let headers = [("retry-after", "soon")].into_iter().collect();

		assert_eq!(parse_retry_after(&headers), None);
	}

	#[test]
	fn retry_after_accepts_http_dates() {
		let future = OffsetDateTime::now_utc() + time::Duration::seconds(90);
		let raw = future.format(&Rfc2822).expect("RFC 2822 formatting should succeed.");
		let headers = [("retry-after", raw.as_str())].into_iter().collect();
		let delay = parse_retry_after(&headers).expect("HTTP date should parse.");

		assert!(delay > Duration::from_secs(80) && delay <= Duration::from_secs(90));

		let past = OffsetDateTime::now_utc() - time::Duration::seconds(90);
		let raw = past.format(&Rfc2822).expect("RFC 2822 formatting should succeed.");
		let headers = [("retry-after", raw.as_str())].into_iter().collect();

		assert_eq!(parse_retry_after(&headers), Some(Duration::ZERO));
	}

	#[test]
	fn join_path_collapses_slashes_and_encodes_segments() {
		let base = Url::parse("https://api.example.com/v1").expect("Base URL should parse.");

		assert_eq!(
			join_path(&base, "//listings//42/").as_str(),
			"https://api.example.com/v1/listings/42",
		);
		assert_eq!(
			join_path(&base, "listings/a b").as_str(),
			"https://api.example.com/v1/listings/a%20b",
		);
	}

	#[test]
	fn body_parsing_follows_content_type() {
		let empty = response(204, Headers::new(), "");

		assert_eq!(empty.parse_body(), None);

		let json_headers: Headers = [("content-type", "application/json")].into_iter().collect();
		let json = response(200, json_headers.clone(), "{\"status\":\"success\"}");

		assert_eq!(json.parse_body(), Some(serde_json::json!({ "status": "success" })));

		let broken = response(200, json_headers, "{not json");

		assert_eq!(broken.parse_body(), Some(Value::String("{not json".into())));

		let plain = response(200, Headers::new(), "{\"looks\":\"like json\"}");

		assert_eq!(plain.parse_body(), Some(Value::String("{\"looks\":\"like json\"}".into())));
	}

	#[test]
	fn error_normalization_extracts_diagnostics() {
		let headers: Headers =
			[("content-type", "application/json"), ("x-request-id", "req-123")]
				.into_iter()
				.collect();
		let response = response(
			400,
			headers,
			"{\"message\":\"Invalid payload\",\"code\":\"BAD_REQUEST\",\"errors\":{\"field\":\"missing\"}}",
		);
		let body = response.parse_body();
		let url = Url::parse("https://api.example.com/v1/listings").expect("URL should parse.");
		let error = error_from_response("Request failed.", &response, body, Method::Post, &url);

		assert_eq!(error.status, 400);
		assert_eq!(error.message, "Invalid payload");
		assert_eq!(error.code.as_deref(), Some("BAD_REQUEST"));
		assert_eq!(error.request_id.as_deref(), Some("req-123"));
		assert_eq!(error.details, Some(serde_json::json!({ "field": "missing" })));
	}

	#[test]
	fn error_normalization_falls_back_to_reason_phrase() {
		let response = response(503, Headers::new(), "");
		let url = Url::parse("https://api.example.com/v1/listings").expect("URL should parse.");
		let error = error_from_response("Request failed.", &response, None, Method::Get, &url);

		assert_eq!(error.message, "Service Unavailable");
		assert_eq!(error.code, None);
		assert_eq!(error.response_body, None);
	}
}
