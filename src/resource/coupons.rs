//! Coupon endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		coupons::{Coupon, CreateReservationCouponRequest, ReservationCoupon, ReservationCouponId},
		ApiResponse,
	},
};

/// Accessor for `/coupons` and `/reservationCoupons`.
#[derive(Clone, Copy, Debug)]
pub struct Coupons<'c> {
	client: &'c Client,
}
impl<'c> Coupons<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists the account's coupons.
	pub async fn list(&self) -> Result<ApiResponse<Vec<Coupon>>> {
		self.client.request(Method::Get, "/coupons", RequestOptions::new()).await
	}

	/// Applies a coupon to a stay.
	pub async fn create_reservation_coupon(
		&self,
		payload: &CreateReservationCouponRequest,
	) -> Result<ApiResponse<Vec<ReservationCouponId>>> {
		self.client
			.request(
				Method::Post,
				"/reservationCoupons",
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Lists applied reservation coupons.
	pub async fn list_reservation_coupons(&self) -> Result<ApiResponse<Vec<ReservationCoupon>>> {
		self.client.request(Method::Get, "/reservationCoupons", RequestOptions::new()).await
	}
}
