//! Coupon payloads.

// self
use crate::{_prelude::*, types::common::Flag};

/// One discount coupon.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
	/// Coupon id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning account id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<i64>,
	/// Creating user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<i64>,
	/// Set while the coupon is active.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_active: Option<Flag>,
	/// Set once the coupon has expired.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_expired: Option<Flag>,
	/// Coupon name, also its redemption code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Discount type, `percentage` or `flatFee`.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	/// Discount amount; percent or flat depending on the type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<f64>,
	/// Minimum nights required to redeem.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub minimum_nights: Option<u32>,
	/// Earliest eligible check-in date.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub check_in_date_start: Option<String>,
	/// Latest eligible check-in date.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub check_in_date_end: Option<String>,
	/// Redemption budget.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub number_of_uses_initial: Option<u32>,
	/// Redemptions so far.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub number_of_uses_used: Option<u32>,
	/// Validity window start.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub validity_date_start: Option<String>,
	/// Validity window end.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub validity_date_end: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One coupon applied to a reservation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCoupon {
	/// Reservation coupon id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Applying user id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<i64>,
	/// Listing the reservation belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Reservation the coupon is applied to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_id: Option<i64>,
	/// Applied coupon id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coupon_id: Option<i64>,
	/// Applied coupon name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coupon_name: Option<String>,
	/// Reservation price before the discount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_base_price: Option<f64>,
	/// Discount value taken off the base price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coupon_price: Option<f64>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for applying a coupon to a stay.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationCouponRequest {
	/// Coupon name to apply (required).
	pub coupon_name: String,
	/// Listing the stay belongs to (required).
	pub listing_map_id: i64,
	/// Stay start, `YYYY-MM-DD` (required).
	pub starting_date: String,
	/// Stay end, `YYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ending_date: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Id handle returned when a reservation coupon is created.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCouponId {
	/// Created reservation coupon id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reservation_coupon_id: Option<i64>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
