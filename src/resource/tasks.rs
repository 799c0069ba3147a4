//! Task endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		tasks::{CreateTaskRequest, Task, TasksListParams, UpdateTaskRequest},
		ApiResponse,
	},
};

/// Accessor for `/tasks`.
#[derive(Clone, Copy, Debug)]
pub struct Tasks<'c> {
	client: &'c Client,
}
impl<'c> Tasks<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists tasks matching `params`.
	pub async fn list(&self, params: TasksListParams) -> Result<ApiResponse<Vec<Task>>> {
		self.client
			.request(Method::Get, "/tasks", RequestOptions::new().with_query(params))
			.await
	}

	/// Fetches one task.
	pub async fn get(&self, task_id: i64) -> Result<ApiResponse<Task>> {
		self.client.request(Method::Get, &format!("/tasks/{task_id}"), RequestOptions::new()).await
	}

	/// Creates a task.
	pub async fn create(&self, payload: &CreateTaskRequest) -> Result<ApiResponse<Task>> {
		self.client
			.request(Method::Post, "/tasks", RequestOptions::new().with_body(Body::json(payload)?))
			.await
	}

	/// Updates one task.
	pub async fn update(
		&self,
		task_id: i64,
		payload: &UpdateTaskRequest,
	) -> Result<ApiResponse<Task>> {
		self.client
			.request(
				Method::Put,
				&format!("/tasks/{task_id}"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Deletes one task.
	pub async fn delete(&self, task_id: i64) -> Result<ApiResponse<Value>> {
		self.client
			.request(Method::Delete, &format!("/tasks/{task_id}"), RequestOptions::new())
			.await
	}
}
