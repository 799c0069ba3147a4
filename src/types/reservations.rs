//! Reservation payloads.

// self
use crate::{_prelude::*, client::Query};

/// Filters accepted by the reservations collection endpoint.
#[derive(Clone, Debug, Default)]
pub struct ReservationsListParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Sort direction, `asc` or `desc`.
	pub sort_order: Option<String>,
	/// Filter by originating channel id.
	pub channel_id: Option<i64>,
	/// Filter by listing id.
	pub listing_id: Option<i64>,
	/// Filter by arrival date lower bound, `YYYY-MM-DD`.
	pub arrival_start_date: Option<String>,
	/// Filter by arrival date upper bound, `YYYY-MM-DD`.
	pub arrival_end_date: Option<String>,
	/// Filter by departure date lower bound, `YYYY-MM-DD`.
	pub departure_start_date: Option<String>,
	/// Filter by departure date upper bound, `YYYY-MM-DD`.
	pub departure_end_date: Option<String>,
	/// Only reservations with unread guest messages.
	pub has_unread_conversation_messages: Option<bool>,
}
impl From<ReservationsListParams> for Query {
	fn from(params: ReservationsListParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		// Docs list sortOrder, older deployments read order, so send both.
		query.insert_opt("sortOrder", params.sort_order.clone());
		query.insert_opt("order", params.sort_order);
		query.insert_opt("channelId", params.channel_id);
		query.insert_opt("listingId", params.listing_id);
		query.insert_opt("arrivalStartDate", params.arrival_start_date);
		query.insert_opt("arrivalEndDate", params.arrival_end_date);
		query.insert_opt("departureStartDate", params.departure_start_date);
		query.insert_opt("departureEndDate", params.departure_end_date);
		query.insert_opt(
			"hasUnreadConversationMessages",
			params.has_unread_conversation_messages,
		);

		query
	}
}

/// Write-time switches for reservation create calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReservationCreateOptions {
	/// Book even when the dates collide with an existing reservation.
	pub force_overbooking: bool,
	/// Ask the API to validate the guest payment method.
	pub validate_payment_method: bool,
}
impl ReservationCreateOptions {
	pub(crate) fn fill(&self, query: &mut Query) {
		// The API expects these switches as `1`, absence means off.
		if self.force_overbooking {
			query.insert("forceOverbooking", 1);
		}
		if self.validate_payment_method {
			query.insert("validatePaymentMethod", 1);
		}
	}
}

/// Write-time switches for reservation update calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReservationUpdateOptions {
	/// Apply even when the new dates collide with an existing reservation.
	pub force_overbooking: bool,
}
impl ReservationUpdateOptions {
	pub(crate) fn fill(&self, query: &mut Query) {
		if self.force_overbooking {
			query.insert("forceOverbooking", 1);
		}
	}
}

/// One fee line attached to a reservation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFee {
	/// Fee name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Fee type.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	/// Fee amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<f64>,
	/// Fee currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One booked unit of a multi-unit reservation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUnit {
	/// Booked listing unit id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_unit_id: Option<i64>,
	/// Listing the unit belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Guests placed in the unit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guests: Option<u32>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One reservation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
	/// Reservation id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Alias id returned by some endpoints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Listing the reservation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Parent listing id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_id: Option<i64>,
	/// Originating channel id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_id: Option<i64>,
	/// Reservation status, e.g. `new`, `modified`, `cancelled`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Arrival date, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub arrival_date: Option<String>,
	/// Departure date, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub departure_date: Option<String>,
	/// Guest full name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guest_name: Option<String>,
	/// Number of guests.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guests_count: Option<u32>,
	/// Total booking price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_price: Option<f64>,
	/// Booking currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Fee lines.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<Vec<ReservationFee>>,
	/// Booked units.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<Vec<ReservationUnit>>,
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

/// Payload for creating a reservation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
	/// Listing to book (required).
	pub listing_map_id: i64,
	/// Arrival date, `YYYY-MM-DD` (required).
	pub arrival_date: String,
	/// Departure date, `YYYY-MM-DD` (required).
	pub departure_date: String,
	/// Originating channel id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel_id: Option<i64>,
	/// Guest full name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guest_name: Option<String>,
	/// Number of guests.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guests_count: Option<u32>,
	/// Total booking price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_price: Option<f64>,
	/// Booking currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Reservation status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Fee lines.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<Vec<ReservationFee>>,
	/// Booked units.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<Vec<ReservationUnit>>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for updating a reservation; absent fields stay unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
	/// Listing to move the reservation to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Arrival date, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub arrival_date: Option<String>,
	/// Departure date, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub departure_date: Option<String>,
	/// Guest full name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guest_name: Option<String>,
	/// Number of guests.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guests_count: Option<u32>,
	/// Total booking price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_price: Option<f64>,
	/// Booking currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Reservation status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Fee lines.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<Vec<ReservationFee>>,
	/// Booked units.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<Vec<ReservationUnit>>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn encode(query: &Query) -> String {
		let mut serializer = url::form_urlencoded::Serializer::new(String::new());

		query.encode(&mut serializer);

		serializer.finish()
	}

	#[test]
	fn list_params_should_duplicate_sort_order_into_order() {
		let query = Query::from(ReservationsListParams {
			sort_order: Some("desc".into()),
			listing_id: Some(7),
			..Default::default()
		});

		assert_eq!(encode(&query), "sortOrder=desc&order=desc&listingId=7");
	}

	#[test]
	fn create_options_should_encode_enabled_switches_as_one() {
		let mut query = Query::new();

		ReservationCreateOptions { force_overbooking: true, validate_payment_method: false }
			.fill(&mut query);

		assert_eq!(encode(&query), "forceOverbooking=1");

		let mut query = Query::new();

		ReservationCreateOptions::default().fill(&mut query);

		assert!(query.is_empty());
	}
}
