//! Financial reporting payloads.

// self
use crate::_prelude::*;

/// Standard finance fields attached to one reservation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceStandardField {
	/// Record id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning account id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<i64>,
	/// Listing the reservation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Originating channel id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_id: Option<i64>,
	/// Reservation the record belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Insertion timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inserted_on: Option<String>,
	/// Last-update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_on: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload accepted by every finance report endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReportRequest {
	/// Restrict the report to these listings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_ids: Option<Vec<i64>>,
	/// Report window start, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_date: Option<String>,
	/// Report window end, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_date: Option<String>,
	/// Date column used for bucketing, e.g. `arrivalDate`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub date_type: Option<String>,
	/// Restrict the report to these channels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_ids: Option<Vec<i64>>,
	/// Restrict the report to these reservation statuses.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub statuses: Option<Vec<String>>,
	/// Output format, `json` or `csv`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub format: Option<String>,
	/// Sort column.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort_by: Option<String>,
	/// Sort direction, `asc` or `desc`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort_order: Option<String>,
	/// CSV delimiter, `comma` or `tab`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub delimiter: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
