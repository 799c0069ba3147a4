//! Webhook subscription payloads.

// self
use crate::{_prelude::*, types::common::Flag};

/// Event types known to be delivered; the API may add more over time.
pub const WEBHOOK_EVENT_TYPES: &[&str] =
	&["reservation created", "reservation updated", "new message received"];

/// One webhook subscription, any flavor.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
	/// Webhook id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Delivery URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Basic-auth login sent with each delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Basic-auth password sent with each delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// Address alerted when deliveries keep failing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alerting_email_address: Option<String>,
	/// Set while the subscription is active.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_enabled: Option<Flag>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for creating a webhook subscription.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
	/// Delivery URL (required).
	pub url: String,
	/// Basic-auth login sent with each delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Basic-auth password sent with each delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// Address alerted when deliveries keep failing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alerting_email_address: Option<String>,
	/// Set while the subscription is active.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_enabled: Option<Flag>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for updating a webhook subscription; absent fields stay unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookRequest {
	/// Delivery URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Basic-auth login sent with each delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Basic-auth password sent with each delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// Address alerted when deliveries keep failing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alerting_email_address: Option<String>,
	/// Set while the subscription is active.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_enabled: Option<Flag>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
