//! Webhook delivery log payloads.

// self
use crate::{_prelude::*, client::Query, types::common::Flag};

/// Filters accepted by the reservation webhook log endpoint.
#[derive(Clone, Debug, Default)]
pub struct ReservationWebhookLogsParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Filter by reservation id.
	pub reservation_id: Option<i64>,
	/// Filter by listing id.
	pub listing_map_id: Option<i64>,
}
impl From<ReservationWebhookLogsParams> for Query {
	fn from(params: ReservationWebhookLogsParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		query.insert_opt("reservationId", params.reservation_id);
		query.insert_opt("listingMapId", params.listing_map_id);

		query
	}
}

/// Filters accepted by the unified webhook log endpoint.
#[derive(Clone, Debug, Default)]
pub struct UnifiedWebhookLogsParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Filter by unified webhook id.
	pub unified_webhook_id: Option<i64>,
	/// Filter by listing id.
	pub listing_map_id: Option<i64>,
}
impl From<UnifiedWebhookLogsParams> for Query {
	fn from(params: UnifiedWebhookLogsParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		query.insert_opt("unifiedWebhookId", params.unified_webhook_id);
		query.insert_opt("listingMapId", params.listing_map_id);

		query
	}
}

/// Filters accepted by the conversation message webhook log endpoint.
#[derive(Clone, Debug, Default)]
pub struct ConversationMessageWebhookLogsParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Filter by reservation id.
	pub reservation_id: Option<i64>,
	/// Filter by listing id.
	pub listing_map_id: Option<i64>,
}
impl From<ConversationMessageWebhookLogsParams> for Query {
	fn from(params: ConversationMessageWebhookLogsParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		query.insert_opt("reservationId", params.reservation_id);
		query.insert_opt("listingMapId", params.listing_map_id);

		query
	}
}

/// One reservation webhook delivery attempt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWebhookLog {
	/// Log entry id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning account id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<i64>,
	/// Listing the reservation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Reservation that triggered the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Webhook subscription that was notified.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_webhook_id: Option<i64>,
	/// Reservation status at delivery time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_reservation_status: Option<String>,
	/// Reservation status before the change.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub previous_reservation_status: Option<String>,
	/// Delivery URL at the time of the attempt.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Basic-auth login used for the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Basic-auth password used for the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// HTTP status returned by the receiver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_status: Option<u16>,
	/// Body returned by the receiver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_body: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One unified webhook delivery attempt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedWebhookLog {
	/// Log entry id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning account id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<i64>,
	/// Listing the event belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Notification setting that was triggered.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub webhook_notification_setting_id: Option<i64>,
	/// Set while the subscription is active.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_enabled: Option<Flag>,
	/// Delivery URL at the time of the attempt.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Basic-auth login used for the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Basic-auth password used for the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// HTTP status returned by the receiver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_status: Option<u16>,
	/// Body returned by the receiver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_body: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One conversation message webhook delivery attempt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessageWebhookLog {
	/// Log entry id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning account id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<i64>,
	/// Listing the conversation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Reservation the conversation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Message that triggered the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conversation_message_id: Option<i64>,
	/// Webhook subscription that was notified.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conversation_message_webhook_id: Option<i64>,
	/// Delivery URL at the time of the attempt.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Basic-auth login used for the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Basic-auth password used for the delivery.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// HTTP status returned by the receiver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_status: Option<u16>,
	/// Body returned by the receiver.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_body: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
