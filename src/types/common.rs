//! Response envelope and shared list parameters.

// self
use crate::{_prelude::*, client::Query};

/// Standard envelope wrapping every API payload.
///
/// The API reports its payload under `result`; some legacy endpoints use `data`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	/// Upstream status string, usually `success` or `fail`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Primary payload slot.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<T>,
	/// Legacy payload slot used by some endpoints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	/// Pagination metadata, when the endpoint pages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pagination: Option<Pagination>,
	/// Envelope fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl<T> ApiResponse<T> {
	/// Returns the payload, preferring `result` over the legacy `data` slot.
	pub fn into_result(self) -> Option<T> {
		self.result.or(self.data)
	}
}

/// Pagination metadata attached to list responses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Pagination {
	/// Page size.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u64>,
	/// Page offset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u64>,
	/// Total matching records.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total: Option<u64>,
	/// Records in this page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<u64>,
	/// Pagination fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Boolean-like flag; the API emits both `0`/`1` and `true`/`false`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Flag {
	/// Numeric form, non-zero means set.
	Bit(u8),
	/// Boolean form.
	Bool(bool),
}
impl Flag {
	/// Collapses both forms into a plain boolean.
	pub fn as_bool(self) -> bool {
		match self {
			Self::Bit(value) => value != 0,
			Self::Bool(value) => value,
		}
	}
}
impl From<bool> for Flag {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// Shared list parameters accepted by most collection endpoints.
#[derive(Clone, Debug, Default)]
pub struct ListParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Sort direction, `asc` or `desc`.
	pub sort_order: Option<String>,
}
impl ListParams {
	pub(crate) fn fill(&self, query: &mut Query) {
		query.insert_opt("limit", self.limit);
		query.insert_opt("offset", self.offset);
		query.insert_opt("sortOrder", self.sort_order.clone());
	}
}
impl From<ListParams> for Query {
	fn from(params: ListParams) -> Self {
		let mut query = Self::new();

		params.fill(&mut query);

		query
	}
}

/// One amenity known to the platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
	/// Amenity id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Amenity name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One bed type known to the platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedType {
	/// Bed type id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Bed type name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One property type known to the platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
	/// Property type id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Property type name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One refund rule inside a cancellation policy.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationPolicyItem {
	/// Rule id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning policy id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cancellation_policy_id: Option<i64>,
	/// Refund amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refund_amount: Option<f64>,
	/// Refund type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refund_type: Option<String>,
	/// Price field the refund applies to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refund_field: Option<String>,
	/// Offset from the anchoring event, in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub time_delta: Option<i64>,
	/// Event anchoring the rule.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub event: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One cancellation policy.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationPolicy {
	/// Policy id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning account id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<i64>,
	/// Policy name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Refund rules.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cancellation_policy_item: Option<Vec<CancellationPolicyItem>>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
