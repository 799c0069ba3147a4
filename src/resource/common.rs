//! Shared catalog endpoints.

// self
use crate::{
	_prelude::*,
	client::{Client, RequestOptions},
	http::Method,
	types::{
		common::{Amenity, BedType, CancellationPolicy, PropertyType},
		ApiResponse,
	},
};

/// Accessor for the shared catalog endpoints: amenities, bed types, property
/// types, and cancellation policies.
#[derive(Clone, Copy, Debug)]
pub struct Common<'c> {
	client: &'c Client,
}
impl<'c> Common<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Lists the platform's amenities.
	pub async fn list_amenities(&self) -> Result<ApiResponse<Vec<Amenity>>> {
		self.client.request(Method::Get, "/amenities", RequestOptions::new()).await
	}

	/// Lists the platform's bed types.
	pub async fn list_bed_types(&self) -> Result<ApiResponse<Vec<BedType>>> {
		self.client.request(Method::Get, "/bedTypes", RequestOptions::new()).await
	}

	/// Lists the platform's property types.
	pub async fn list_property_types(&self) -> Result<ApiResponse<Vec<PropertyType>>> {
		self.client.request(Method::Get, "/propertyTypes", RequestOptions::new()).await
	}

	/// Lists the account's cancellation policies.
	pub async fn list_cancellation_policies(&self) -> Result<ApiResponse<Vec<CancellationPolicy>>> {
		self.client.request(Method::Get, "/cancellationPolicies", RequestOptions::new()).await
	}

	/// Fetches one cancellation policy.
	pub async fn get_cancellation_policy(
		&self,
		cancellation_policy_id: i64,
	) -> Result<ApiResponse<CancellationPolicy>> {
		self.client
			.request(
				Method::Get,
				&format!("/cancellationPolicies/{cancellation_policy_id}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Lists the cancellation policies a channel supports, e.g. `airbnb`.
	pub async fn list_cancellation_policies_by_channel(
		&self,
		channel: &str,
	) -> Result<ApiResponse<Vec<CancellationPolicy>>> {
		self.client
			.request(
				Method::Get,
				&format!("/cancellationPolicies/{channel}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Lists Airbnb cancellation policies.
	pub async fn list_airbnb_cancellation_policies(
		&self,
	) -> Result<ApiResponse<Vec<CancellationPolicy>>> {
		self.list_cancellation_policies_by_channel("airbnb").await
	}

	/// Lists Booking.com cancellation policies.
	pub async fn list_booking_cancellation_policies(
		&self,
	) -> Result<ApiResponse<Vec<CancellationPolicy>>> {
		self.list_cancellation_policies_by_channel("booking").await
	}

	/// Lists Marriott cancellation policies.
	pub async fn list_marriott_cancellation_policies(
		&self,
	) -> Result<ApiResponse<Vec<CancellationPolicy>>> {
		self.list_cancellation_policies_by_channel("marriott").await
	}

	/// Lists Vrbo cancellation policies.
	pub async fn list_vrbo_cancellation_policies(
		&self,
	) -> Result<ApiResponse<Vec<CancellationPolicy>>> {
		self.list_cancellation_policies_by_channel("vrbo").await
	}
}
