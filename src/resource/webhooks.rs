//! Webhook subscription endpoints.
//!
//! Three subscription flavors share one wire shape: reservation webhooks,
//! conversation message webhooks, and unified webhooks.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		webhooks::{CreateWebhookRequest, UpdateWebhookRequest, Webhook, WEBHOOK_EVENT_TYPES},
		ApiResponse,
	},
};

/// Accessor for `/webhooks`.
#[derive(Clone, Copy, Debug)]
pub struct Webhooks<'c> {
	client: &'c Client,
}
impl<'c> Webhooks<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Returns the event types known to be delivered.
	pub fn event_types(&self) -> &'static [&'static str] {
		WEBHOOK_EVENT_TYPES
	}

	/// Lists reservation webhooks.
	pub async fn list_reservation_webhooks(&self) -> Result<ApiResponse<Vec<Webhook>>> {
		self.list("/webhooks/reservations").await
	}

	/// Fetches one reservation webhook.
	pub async fn get_reservation_webhook(&self, webhook_id: i64) -> Result<ApiResponse<Webhook>> {
		self.get(&format!("/webhooks/reservations/{webhook_id}")).await
	}

	/// Creates a reservation webhook.
	pub async fn create_reservation_webhook(
		&self,
		payload: &CreateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.create("/webhooks/reservations", payload).await
	}

	/// Updates one reservation webhook.
	pub async fn update_reservation_webhook(
		&self,
		webhook_id: i64,
		payload: &UpdateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.update(&format!("/webhooks/reservations/{webhook_id}"), payload).await
	}

	/// Deletes one reservation webhook.
	pub async fn delete_reservation_webhook(&self, webhook_id: i64) -> Result<ApiResponse<Value>> {
		self.delete(&format!("/webhooks/reservations/{webhook_id}")).await
	}

	/// Lists conversation message webhooks.
	pub async fn list_conversation_message_webhooks(&self) -> Result<ApiResponse<Vec<Webhook>>> {
		self.list("/webhooks/conversationMessages").await
	}

	/// Fetches one conversation message webhook.
	pub async fn get_conversation_message_webhook(
		&self,
		webhook_id: i64,
	) -> Result<ApiResponse<Webhook>> {
		self.get(&format!("/webhooks/conversationMessages/{webhook_id}")).await
	}

	/// Creates a conversation message webhook.
	pub async fn create_conversation_message_webhook(
		&self,
		payload: &CreateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.create("/webhooks/conversationMessages", payload).await
	}

	/// Updates one conversation message webhook.
	pub async fn update_conversation_message_webhook(
		&self,
		webhook_id: i64,
		payload: &UpdateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.update(&format!("/webhooks/conversationMessages/{webhook_id}"), payload).await
	}

	/// Deletes one conversation message webhook.
	pub async fn delete_conversation_message_webhook(
		&self,
		webhook_id: i64,
	) -> Result<ApiResponse<Value>> {
		self.delete(&format!("/webhooks/conversationMessages/{webhook_id}")).await
	}

	/// Lists unified webhooks.
	pub async fn list_unified_webhooks(&self) -> Result<ApiResponse<Vec<Webhook>>> {
		self.list("/webhooks/unifiedWebhooks").await
	}

	/// Fetches one unified webhook.
	pub async fn get_unified_webhook(&self, webhook_id: i64) -> Result<ApiResponse<Webhook>> {
		self.get(&format!("/webhooks/unifiedWebhooks/{webhook_id}")).await
	}

	/// Creates a unified webhook.
	pub async fn create_unified_webhook(
		&self,
		payload: &CreateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.create("/webhooks/unifiedWebhooks", payload).await
	}

	/// Updates one unified webhook.
	pub async fn update_unified_webhook(
		&self,
		webhook_id: i64,
		payload: &UpdateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.update(&format!("/webhooks/unifiedWebhooks/{webhook_id}"), payload).await
	}

	/// Deletes one unified webhook.
	pub async fn delete_unified_webhook(&self, webhook_id: i64) -> Result<ApiResponse<Value>> {
		self.delete(&format!("/webhooks/unifiedWebhooks/{webhook_id}")).await
	}

	async fn list(&self, path: &str) -> Result<ApiResponse<Vec<Webhook>>> {
		self.client.request(Method::Get, path, RequestOptions::new()).await
	}

	async fn get(&self, path: &str) -> Result<ApiResponse<Webhook>> {
		self.client.request(Method::Get, path, RequestOptions::new()).await
	}

	async fn create(
		&self,
		path: &str,
		payload: &CreateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.client
			.request(Method::Post, path, RequestOptions::new().with_body(Body::json(payload)?))
			.await
	}

	async fn update(
		&self,
		path: &str,
		payload: &UpdateWebhookRequest,
	) -> Result<ApiResponse<Webhook>> {
		self.client
			.request(Method::Put, path, RequestOptions::new().with_body(Body::json(payload)?))
			.await
	}

	async fn delete(&self, path: &str) -> Result<ApiResponse<Value>> {
		self.client.request(Method::Delete, path, RequestOptions::new()).await
	}
}
