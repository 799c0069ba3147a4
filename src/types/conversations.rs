//! Conversation and message payloads.

// self
use crate::{
	_prelude::*,
	client::{IncludeResources, Query},
};

/// Filters accepted by the conversations collection endpoint.
#[derive(Clone, Debug, Default)]
pub struct ConversationsListParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Filter by reservation id.
	pub reservation_id: Option<i64>,
	/// Also return related resources, e.g. the messages of each conversation.
	pub include_resources: Option<IncludeResources>,
}
impl From<ConversationsListParams> for Query {
	fn from(params: ConversationsListParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		query.insert_opt("reservationId", params.reservation_id);
		query.insert_opt("includeResources", params.include_resources);

		query
	}
}

/// One guest conversation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
	/// Conversation id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Alias id returned by some endpoints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conversation_id: Option<i64>,
	/// Reservation this conversation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Originating channel id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_id: Option<i64>,
	/// Conversation status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Conversation subject.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	/// Creation timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
	/// Last-update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One message inside a conversation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
	/// Message id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Alias id returned by some endpoints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conversation_message_id: Option<i64>,
	/// Owning conversation id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conversation_id: Option<i64>,
	/// Message body.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Sender label.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,
	/// Message type.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	/// `true` when the guest sent the message.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_incoming: Option<bool>,
	/// Creation timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
	/// Last-update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for sending a message into a conversation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationMessageRequest {
	/// Message body (required).
	pub message: String,
	/// Message template to expand.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub template_id: Option<i64>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
