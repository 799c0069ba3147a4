//! Operational task payloads.

// self
use crate::{_prelude::*, client::Query, types::common::Flag};

/// Filters accepted by the tasks collection endpoint.
#[derive(Clone, Debug, Default)]
pub struct TasksListParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Filter by channel id.
	pub channel_id: Option<i64>,
	/// Filter by reservation id.
	pub reservation_id: Option<i64>,
	/// Free-text match on the title, sent as `match`.
	pub match_term: Option<String>,
	/// Filter by task status.
	pub status: Option<String>,
	/// Filter by start-anchor event name.
	pub can_start_from_event: Option<String>,
	/// Filter by end-anchor event name.
	pub should_end_by_event: Option<String>,
	/// Only tasks startable at or after this timestamp.
	pub can_start_from_start: Option<String>,
	/// Only tasks startable at or before this timestamp.
	pub can_start_from_end: Option<String>,
	/// Only tasks due at or after this timestamp.
	pub should_end_by_start: Option<String>,
	/// Only tasks due at or before this timestamp.
	pub should_end_by_end: Option<String>,
}
impl From<TasksListParams> for Query {
	fn from(params: TasksListParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		query.insert_opt("channelId", params.channel_id);
		query.insert_opt("reservationId", params.reservation_id);
		query.insert_opt("match", params.match_term);
		query.insert_opt("status", params.status);
		query.insert_opt("canStartFromEvent", params.can_start_from_event);
		query.insert_opt("shouldEndByEvent", params.should_end_by_event);
		query.insert_opt("canStartFromStart", params.can_start_from_start);
		query.insert_opt("canStartFromEnd", params.can_start_from_end);
		query.insert_opt("shouldEndByStart", params.should_end_by_start);
		query.insert_opt("shouldEndByEnd", params.should_end_by_end);

		query
	}
}

/// One operational task, e.g. a cleaning or maintenance job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
	/// Task id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Listing the task belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Channel the task relates to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_id: Option<i64>,
	/// Reservation the task belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Auto-task rule that spawned the task.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_task_id: Option<i64>,
	/// Assignee user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub assignee_user_id: Option<i64>,
	/// Supervisor user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub supervisor_user_id: Option<i64>,
	/// Creating user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created_by_user_id: Option<i64>,
	/// Set when the task was edited by hand after creation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_updated_manually: Option<Flag>,
	/// Task title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Task description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Earliest start timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_start_from: Option<String>,
	/// Event anchoring the earliest start.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_start_from_event: Option<String>,
	/// Deadline timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub should_end_by: Option<String>,
	/// Event anchoring the deadline.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub should_end_by_event: Option<String>,
	/// Task status, e.g. `pending`, `inProgress`, `completed`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Note recorded on resolution.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resolution_note: Option<String>,
	/// Task priority.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub priority: Option<i64>,
	/// Task cost.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost: Option<f64>,
	/// Cost currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost_currency: Option<String>,
	/// Start timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub started_at: Option<String>,
	/// Completion timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub completed_at: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for creating a task.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
	/// Task title (required).
	pub title: String,
	/// Listing the task belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Channel the task relates to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_id: Option<i64>,
	/// Reservation the task belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Assignee user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub assignee_user_id: Option<i64>,
	/// Supervisor user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub supervisor_user_id: Option<i64>,
	/// Task description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Earliest start timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_start_from: Option<String>,
	/// Event anchoring the earliest start.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_start_from_event: Option<String>,
	/// Deadline timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub should_end_by: Option<String>,
	/// Event anchoring the deadline.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub should_end_by_event: Option<String>,
	/// Task status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Task priority.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub priority: Option<i64>,
	/// Task cost.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost: Option<f64>,
	/// Cost currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost_currency: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for updating a task; absent fields stay unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
	/// Task title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Task description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Assignee user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub assignee_user_id: Option<i64>,
	/// Supervisor user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub supervisor_user_id: Option<i64>,
	/// Task status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Note recorded on resolution.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resolution_note: Option<String>,
	/// Task priority.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub priority: Option<i64>,
	/// Task cost.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost: Option<f64>,
	/// Cost currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cost_currency: Option<String>,
	/// Earliest start timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub can_start_from: Option<String>,
	/// Deadline timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub should_end_by: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
