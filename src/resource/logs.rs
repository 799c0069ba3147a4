//! Webhook delivery log endpoints.

// self
use crate::{
	_prelude::*,
	client::{Client, RequestOptions},
	http::Method,
	types::{
		logs::{
			ConversationMessageWebhookLog, ConversationMessageWebhookLogsParams,
			ReservationWebhookLog, ReservationWebhookLogsParams, UnifiedWebhookLog,
			UnifiedWebhookLogsParams,
		},
		ApiResponse,
	},
};

/// Accessor for the webhook delivery log endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Logs<'c> {
	client: &'c Client,
}
impl<'c> Logs<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists reservation webhook delivery attempts.
	pub async fn list_reservation_webhook_logs(
		&self,
		params: ReservationWebhookLogsParams,
	) -> Result<ApiResponse<Vec<ReservationWebhookLog>>> {
		self.client
			.request(
				Method::Get,
				"/reservationWebhooklogs",
				RequestOptions::new().with_query(params),
			)
			.await
	}

	/// Lists unified webhook delivery attempts.
	pub async fn list_unified_webhook_logs(
		&self,
		params: UnifiedWebhookLogsParams,
	) -> Result<ApiResponse<Vec<UnifiedWebhookLog>>> {
		self.client
			.request(Method::Get, "/unifiedWebhookLogs", RequestOptions::new().with_query(params))
			.await
	}

	/// Lists conversation message webhook delivery attempts.
	pub async fn list_conversation_message_webhook_logs(
		&self,
		params: ConversationMessageWebhookLogsParams,
	) -> Result<ApiResponse<Vec<ConversationMessageWebhookLog>>> {
		self.client
			.request(
				Method::Get,
				"/conversationMessageWebhooklogs",
				RequestOptions::new().with_query(params),
			)
			.await
	}
}
