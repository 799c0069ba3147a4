//! Calendar payloads.

// self
use crate::{
	_prelude::*,
	client::{IncludeResources, Query},
};

/// Date-range filter for the calendar endpoint.
#[derive(Clone, Debug, Default)]
pub struct CalendarParams {
	/// Range start, `YYYY-MM-DD`.
	pub start_date: Option<String>,
	/// Range end, `YYYY-MM-DD`.
	pub end_date: Option<String>,
	/// Also return related resources, e.g. overlapping reservations.
	pub include_resources: Option<IncludeResources>,
}
impl From<CalendarParams> for Query {
	fn from(params: CalendarParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("startDate", params.start_date);
		query.insert_opt("endDate", params.end_date);
		query.insert_opt("includeResources", params.include_resources);

		query
	}
}

/// One calendar day of a listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
	/// Day, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	/// Listing unit the day belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_unit_id: Option<i64>,
	/// Availability status, e.g. `available`, `blocked`, `reserved`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// `true` while the day is bookable.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub available: Option<bool>,
	/// Nightly price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	/// Minimum stay in nights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_stay: Option<u32>,
	/// Maximum stay in nights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_stay: Option<u32>,
	/// `true` when the day is closed to arrivals.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub closed: Option<bool>,
	/// Last-update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One day in a calendar update.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarUpdatePayload {
	/// Day to update, `YYYY-MM-DD` (required).
	pub date: String,
	/// Listing unit the update targets.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_unit_id: Option<i64>,
	/// Availability status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// `true` while the day is bookable.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub available: Option<bool>,
	/// Nightly price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	/// Minimum stay in nights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_stay: Option<u32>,
	/// Maximum stay in nights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_stay: Option<u32>,
	/// `true` when the day is closed to arrivals.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub closed: Option<bool>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One contiguous interval in a calendar interval update.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarIntervalUpdatePayload {
	/// Interval start, `YYYY-MM-DD` (required).
	pub start_date: String,
	/// Interval end, `YYYY-MM-DD` (required).
	pub end_date: String,
	/// Listing unit the update targets.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_unit_id: Option<i64>,
	/// Availability status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// `true` while the interval is bookable.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub available: Option<bool>,
	/// Nightly price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	/// Minimum stay in nights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_stay: Option<u32>,
	/// Maximum stay in nights.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_stay: Option<u32>,
	/// `true` when the interval is closed to arrivals.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub closed: Option<bool>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for the stay price quote endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPriceDetailsRequest {
	/// Stay start, `YYYY-MM-DD` (required).
	pub start_date: String,
	/// Stay end, `YYYY-MM-DD` (required).
	pub end_date: String,
	/// Listing unit the quote targets.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_unit_id: Option<i64>,
	/// Quote currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Price quote for one stay.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPriceDetails {
	/// Quote currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Total stay price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total: Option<f64>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
