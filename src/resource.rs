//! Typed resource accessors, one module per endpoint family.
//!
//! Accessors borrow the [`Client`], so they are free to construct per call and
//! any number can run concurrently against one client.

pub mod calendar;
pub mod common;
pub mod conversations;
pub mod coupons;
pub mod financial;
pub mod listings;
pub mod logs;
pub mod reservations;
pub mod tasks;
pub mod webhooks;

pub use calendar::Calendar;
pub use common::Common;
pub use conversations::Conversations;
pub use coupons::Coupons;
pub use financial::Financial;
pub use listings::Listings;
pub use logs::Logs;
pub use reservations::Reservations;
pub use tasks::Tasks;
pub use webhooks::Webhooks;

// self
use crate::client::Client;

impl Client {
	/// Listing endpoints.
	pub fn listings(&self) -> Listings<'_> {
		Listings::new(self)
	}

	/// Reservation endpoints.
	pub fn reservations(&self) -> Reservations<'_> {
		Reservations::new(self)
	}

	/// Calendar endpoints.
	pub fn calendar(&self) -> Calendar<'_> {
		Calendar::new(self)
	}

	/// Conversation and message endpoints.
	pub fn conversations(&self) -> Conversations<'_> {
		Conversations::new(self)
	}

	/// Coupon endpoints.
	pub fn coupons(&self) -> Coupons<'_> {
		Coupons::new(self)
	}

	/// Financial reporting endpoints.
	pub fn financial(&self) -> Financial<'_> {
		Financial::new(self)
	}

	/// Task endpoints.
	pub fn tasks(&self) -> Tasks<'_> {
		Tasks::new(self)
	}

	/// Webhook subscription endpoints.
	pub fn webhooks(&self) -> Webhooks<'_> {
		Webhooks::new(self)
	}

	/// Webhook delivery log endpoints.
	pub fn logs(&self) -> Logs<'_> {
		Logs::new(self)
	}

	/// Shared catalog endpoints: amenities, bed types, property types, and
	/// cancellation policies.
	pub fn common(&self) -> Common<'_> {
		Common::new(self)
	}
}
