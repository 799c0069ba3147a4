//! Listing payloads.

// self
use crate::{_prelude::*, client::Query};

/// Filters accepted by the listings collection endpoint.
#[derive(Clone, Debug, Default)]
pub struct ListingsListParams {
	/// Page size.
	pub limit: Option<u32>,
	/// Page offset.
	pub offset: Option<u32>,
	/// Sort direction, `asc` or `desc`.
	pub sort_order: Option<String>,
	/// Filter by city.
	pub city: Option<String>,
	/// Free-text match, sent as `match`.
	pub match_term: Option<String>,
	/// Filter by country.
	pub country: Option<String>,
	/// Filter by contact name.
	pub contact_name: Option<String>,
	/// Filter by property type id.
	pub property_type_id: Option<i64>,
}
impl From<ListingsListParams> for Query {
	fn from(params: ListingsListParams) -> Self {
		let mut query = Self::new();

		query.insert_opt("limit", params.limit);
		query.insert_opt("offset", params.offset);
		query.insert_opt("sortOrder", params.sort_order);
		query.insert_opt("city", params.city);
		query.insert_opt("match", params.match_term);
		query.insert_opt("country", params.country);
		query.insert_opt("contactName", params.contact_name);
		query.insert_opt("propertyTypeId", params.property_type_id);

		query
	}
}

/// One property listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
	/// Listing id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Alias id returned by some endpoints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_id: Option<i64>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// City.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	/// Country.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	/// Contact name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub contact_name: Option<String>,
	/// Property type id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub property_type_id: Option<i64>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
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

/// One bookable unit of a listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUnit {
	/// Unit id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Owning listing id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_id: Option<i64>,
	/// Listing map id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_map_id: Option<i64>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Maximum guest count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_guests: Option<u32>,
	/// Bedroom count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bedroom_count: Option<u32>,
	/// Bathroom count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bathroom_count: Option<u32>,
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

/// Fee configuration attached to a listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFeeSettings {
	/// Owning listing id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub listing_id: Option<i64>,
	/// Fee currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Cleaning fee.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cleaning_fee: Option<f64>,
	/// Pet fee.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pet_fee: Option<f64>,
	/// Extra-guest fee.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extra_guest_fee: Option<f64>,
	/// Security deposit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub security_deposit: Option<f64>,
	/// Weekend price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weekend_price: Option<f64>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for creating a listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
	/// Display name (required).
	pub name: String,
	/// Property type id (required).
	pub property_type_id: i64,
	/// City.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	/// Country.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	/// Contact name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub contact_name: Option<String>,
	/// Street address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	/// Unit count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<u32>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for updating a listing; absent fields stay unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Property type id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub property_type_id: Option<i64>,
	/// City.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	/// Country.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	/// Contact name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub contact_name: Option<String>,
	/// Street address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	/// Unit count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<u32>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Payload for updating listing fee settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFeeSettingsRequest {
	/// Cleaning fee.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cleaning_fee: Option<f64>,
	/// Pet fee.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pet_fee: Option<f64>,
	/// Extra-guest fee.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extra_guest_fee: Option<f64>,
	/// Security deposit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub security_deposit: Option<f64>,
	/// Weekend price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weekend_price: Option<f64>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
