//! Request body model.
//!
//! Raw transport body kinds (text, bytes, form pairs) pass through unchanged;
//! JSON values are encoded and receive a `Content-Type: application/json` header
//! unless the caller already set one.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::ConfigError, http::Headers};

/// One request body, serialized once per attempt.
#[derive(Clone, Debug)]
pub enum Body {
	/// JSON payload.
	Json(Value),
	/// Raw text passed through unchanged.
	Text(String),
	/// Raw bytes passed through unchanged.
	Bytes(Vec<u8>),
	/// Form pairs, urlencoded on serialization.
	Form(Vec<(String, String)>),
}
impl Body {
	/// Encodes any serializable payload as a JSON body.
	pub fn json<T>(payload: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		serde_json::to_value(payload)
			.map(Self::Json)
			.map_err(|source| ConfigError::SerializeBody { source }.into())
	}

	/// Builds a form body from key/value pairs.
	pub fn form<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<String>,
		V: Into<String>,
	{
		Self::Form(pairs.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
	}

	/// Serializes the body to bytes, defaulting content-type headers where the
	/// body kind implies one.
	pub(crate) fn prepare(&self, headers: &mut Headers) -> Result<Vec<u8>> {
		match self {
			Self::Json(value) => {
				headers.set_default("Content-Type", "application/json");

				serde_json::to_vec(value)
					.map_err(|source| ConfigError::SerializeBody { source }.into())
			},
			Self::Text(text) => Ok(text.clone().into_bytes()),
			Self::Bytes(bytes) => Ok(bytes.clone()),
			Self::Form(pairs) => {
				headers.set_default("Content-Type", "application/x-www-form-urlencoded");

				let mut serializer = form_urlencoded::Serializer::new(String::new());

				for (name, value) in pairs {
					serializer.append_pair(name, value);
				}

				Ok(serializer.finish().into_bytes())
			},
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn json_body_defaults_content_type() {
		let body = Body::json(&serde_json::json!({ "name": "Loft" }))
			.expect("JSON body should serialize.");
		let mut headers = Headers::new();
		let bytes = body.prepare(&mut headers).expect("Prepared body should serialize.");

		assert_eq!(headers.get("content-type"), Some("application/json"));
		assert_eq!(bytes, b"{\"name\":\"Loft\"}");
	}

	#[test]
	fn json_body_respects_caller_content_type() {
		let body = Body::json(&serde_json::json!({})).expect("JSON body should serialize.");
		let mut headers: Headers =
			[("Content-Type", "application/vnd.api+json")].into_iter().collect();

		body.prepare(&mut headers).expect("Prepared body should serialize.");

		assert_eq!(headers.get("content-type"), Some("application/vnd.api+json"));
		assert_eq!(headers.len(), 1);
	}

	#[test]
	fn raw_bodies_pass_through_unchanged() {
		let mut headers = Headers::new();
		let bytes = Body::Text("plain".into())
			.prepare(&mut headers)
			.expect("Text body should serialize.");

		assert_eq!(bytes, b"plain");
		assert!(headers.is_empty());

		let bytes = Body::form([("grant_type", "client_credentials")])
			.prepare(&mut headers)
			.expect("Form body should serialize.");

		assert_eq!(bytes, b"grant_type=client_credentials");
		assert_eq!(headers.get("content-type"), Some("application/x-www-form-urlencoded"));
	}
}
