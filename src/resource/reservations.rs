//! Reservation endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, Query, RequestOptions},
	http::Method,
	types::{
		reservations::{
			CreateReservationRequest, Reservation, ReservationCreateOptions,
			ReservationUpdateOptions, ReservationsListParams, UpdateReservationRequest,
		},
		ApiResponse,
	},
};

/// Accessor for `/reservations`.
#[derive(Clone, Copy, Debug)]
pub struct Reservations<'c> {
	client: &'c Client,
}
impl<'c> Reservations<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists reservations matching `params`.
	pub async fn list(
		&self,
		params: ReservationsListParams,
	) -> Result<ApiResponse<Vec<Reservation>>> {
		self.client
			.request(Method::Get, "/reservations", RequestOptions::new().with_query(params))
			.await
	}

	/// Fetches one reservation.
	pub async fn get(&self, reservation_id: i64) -> Result<ApiResponse<Reservation>> {
		self.client
			.request(Method::Get, &format!("/reservations/{reservation_id}"), RequestOptions::new())
			.await
	}

	/// Creates a reservation.
	pub async fn create(
		&self,
		payload: &CreateReservationRequest,
		options: ReservationCreateOptions,
	) -> Result<ApiResponse<Reservation>> {
		let mut query = Query::new();

		options.fill(&mut query);

		self.client
			.request(
				Method::Post,
				"/reservations",
				RequestOptions::new().with_query(query).with_body(Body::json(payload)?),
			)
			.await
	}

	/// Updates one reservation.
	pub async fn update(
		&self,
		reservation_id: i64,
		payload: &UpdateReservationRequest,
		options: ReservationUpdateOptions,
	) -> Result<ApiResponse<Reservation>> {
		let mut query = Query::new();

		options.fill(&mut query);

		self.client
			.request(
				Method::Put,
				&format!("/reservations/{reservation_id}"),
				RequestOptions::new().with_query(query).with_body(Body::json(payload)?),
			)
			.await
	}

	/// Transitions one reservation to `status`.
	pub async fn update_status(
		&self,
		reservation_id: i64,
		status: &str,
	) -> Result<ApiResponse<Reservation>> {
		self.client
			.request(
				Method::Put,
				&format!("/reservations/{reservation_id}/statuses/{status}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Deletes one reservation.
	pub async fn delete(&self, reservation_id: i64) -> Result<ApiResponse<Value>> {
		self.client
			.request(
				Method::Delete,
				&format!("/reservations/{reservation_id}"),
				RequestOptions::new(),
			)
			.await
	}
}
