//! Conversation and message endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		conversations::{
			Conversation, ConversationMessage, ConversationsListParams,
			CreateConversationMessageRequest,
		},
		ApiResponse,
	},
};

/// Accessor for `/conversations`.
#[derive(Clone, Copy, Debug)]
pub struct Conversations<'c> {
	client: &'c Client,
}
impl<'c> Conversations<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists conversations matching `params`.
	pub async fn list(
		&self,
		params: ConversationsListParams,
	) -> Result<ApiResponse<Vec<Conversation>>> {
		self.client
			.request(Method::Get, "/conversations", RequestOptions::new().with_query(params))
			.await
	}

	/// Fetches one conversation.
	pub async fn get(&self, conversation_id: i64) -> Result<ApiResponse<Conversation>> {
		self.client
			.request(
				Method::Get,
				&format!("/conversations/{conversation_id}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Lists the messages of one conversation.
	pub async fn list_messages(
		&self,
		conversation_id: i64,
	) -> Result<ApiResponse<Vec<ConversationMessage>>> {
		self.client
			.request(
				Method::Get,
				&format!("/conversations/{conversation_id}/messages"),
				RequestOptions::new(),
			)
			.await
	}

	/// Fetches one message of one conversation.
	pub async fn get_message(
		&self,
		conversation_id: i64,
		conversation_message_id: i64,
	) -> Result<ApiResponse<ConversationMessage>> {
		self.client
			.request(
				Method::Get,
				&format!("/conversations/{conversation_id}/messages/{conversation_message_id}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Sends a message into one conversation.
	pub async fn create_message(
		&self,
		conversation_id: i64,
		payload: &CreateConversationMessageRequest,
	) -> Result<ApiResponse<ConversationMessage>> {
		self.client
			.request(
				Method::Post,
				&format!("/conversations/{conversation_id}/messages"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}
}
