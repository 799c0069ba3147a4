//! Listing endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		listings::{
			CreateListingRequest, Listing, ListingFeeSettings, ListingFeeSettingsRequest,
			ListingUnit, ListingsListParams, UpdateListingRequest,
		},
		ApiResponse,
	},
};

/// Accessor for `/listings` and the related fee/unit endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Listings<'c> {
	client: &'c Client,
}
impl<'c> Listings<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists listings matching `params`.
	pub async fn list(&self, params: ListingsListParams) -> Result<ApiResponse<Vec<Listing>>> {
		self.client
			.request(Method::Get, "/listings", RequestOptions::new().with_query(params))
			.await
	}

	/// Fetches one listing.
	pub async fn get(&self, listing_id: i64) -> Result<ApiResponse<Listing>> {
		self.client
			.request(Method::Get, &format!("/listings/{listing_id}"), RequestOptions::new())
			.await
	}

	/// Creates a listing.
	pub async fn create(&self, payload: &CreateListingRequest) -> Result<ApiResponse<Listing>> {
		self.client
			.request(
				Method::Post,
				"/listings",
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Updates one listing.
	pub async fn update(
		&self,
		listing_id: i64,
		payload: &UpdateListingRequest,
	) -> Result<ApiResponse<Listing>> {
		self.client
			.request(
				Method::Put,
				&format!("/listings/{listing_id}"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Deletes one listing.
	pub async fn delete(&self, listing_id: i64) -> Result<ApiResponse<Value>> {
		self.client
			.request(Method::Delete, &format!("/listings/{listing_id}"), RequestOptions::new())
			.await
	}

	/// Pushes one listing to Airbnb.
	pub async fn export_to_airbnb(&self, listing_id: i64) -> Result<ApiResponse<Value>> {
		self.client
			.request(
				Method::Post,
				&format!("/listings/{listing_id}/export/airbnb"),
				RequestOptions::new(),
			)
			.await
	}

	/// Fetches the fee settings of one listing.
	pub async fn fee_settings(&self, listing_id: i64) -> Result<ApiResponse<ListingFeeSettings>> {
		self.client
			.request(
				Method::Get,
				&format!("/listingFeeSettings/{listing_id}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Updates the fee settings of one listing.
	pub async fn update_fee_settings(
		&self,
		listing_id: i64,
		payload: &ListingFeeSettingsRequest,
	) -> Result<ApiResponse<ListingFeeSettings>> {
		self.client
			.request(
				Method::Post,
				&format!("/listingFeeSettings/{listing_id}"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}

	/// Fetches one listing unit.
	pub async fn listing_unit(&self, listing_map_id: i64) -> Result<ApiResponse<ListingUnit>> {
		self.client
			.request(Method::Get, &format!("/listingUnits/{listing_map_id}"), RequestOptions::new())
			.await
	}
}
