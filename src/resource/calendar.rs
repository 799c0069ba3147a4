//! Calendar endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		calendar::{
			CalendarDay, CalendarIntervalUpdatePayload, CalendarParams, CalendarPriceDetails,
			CalendarPriceDetailsRequest, CalendarUpdatePayload,
		},
		ApiResponse,
	},
};

/// Accessor for the per-listing calendar endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Calendar<'c> {
	client: &'c Client,
}
impl<'c> Calendar<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Fetches the calendar of one listing over `params`' date range.
	pub async fn get(
		&self,
		listing_id: i64,
		params: CalendarParams,
	) -> Result<ApiResponse<Vec<CalendarDay>>> {
		self.client
			.request(
				Method::Get,
				&format!("/listings/{listing_id}/calendar"),
				RequestOptions::new().with_query(params),
			)
			.await
	}

	/// Applies per-day updates to one listing's calendar.
	pub async fn update(
		&self,
		listing_id: i64,
		payload: &[CalendarUpdatePayload],
	) -> Result<ApiResponse<Vec<CalendarDay>>> {
		self.client
			.request(
				Method::Put,
				&format!("/listings/{listing_id}/calendar"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Applies interval updates to one listing's calendar.
	pub async fn update_intervals(
		&self,
		listing_id: i64,
		payload: &[CalendarIntervalUpdatePayload],
	) -> Result<ApiResponse<Vec<CalendarDay>>> {
		self.client
			.request(
				Method::Put,
				&format!("/listings/{listing_id}/calendarIntervals"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Quotes the price of one stay.
	pub async fn price_details(
		&self,
		listing_id: i64,
		payload: &CalendarPriceDetailsRequest,
	) -> Result<ApiResponse<CalendarPriceDetails>> {
		self.client
			.request(
				Method::Post,
				&format!("/listings/{listing_id}/calendar/priceDetails"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}
}
