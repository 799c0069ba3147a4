//! Financial reporting endpoints.

// self
use crate::{
	_prelude::*,
	client::{Body, Client, RequestOptions},
	http::Method,
	types::{
		financial::{FinanceStandardField, FinancialReportRequest},
		ApiResponse,
	},
};

/// Accessor for `/financeStandardField` and `/finance/report`.
#[derive(Clone, Copy, Debug)]
pub struct Financial<'c> {
	client: &'c Client,
}
impl<'c> Financial<'c> {
	pub(crate) fn new(client: &'c Client) -> Self {
		Self { client }
	}

	/// Fetches the standard finance fields of one reservation.
	pub async fn standard_field(
		&self,
		reservation_id: i64,
	) -> Result<ApiResponse<FinanceStandardField>> {
		self.client
			.request(
				Method::Get,
				&format!("/financeStandardField/reservation/{reservation_id}"),
				RequestOptions::new(),
			)
			.await
	}

	/// Runs the standard finance report.
	///
	/// Report shape depends on the requested `format`: JSON payloads decode to
	/// objects or arrays, CSV to a string.
	pub async fn standard_report(&self, payload: &FinancialReportRequest) -> Result<Value> {
		self.report("standard", payload).await
	}

	/// Runs the consolidated finance report.
	pub async fn consolidated_report(&self, payload: &FinancialReportRequest) -> Result<Value> {
		self.report("consolidated", payload).await
	}

	/// Runs the calculated finance report.
	pub async fn calculated_report(&self, payload: &FinancialReportRequest) -> Result<Value> {
		self.report("calculated", payload).await
	}

	/// Runs the per-listing financials report.
	pub async fn listing_financials_report(
		&self,
		payload: &FinancialReportRequest,
	) -> Result<Value> {
		self.report("listingFinancials", payload).await
	}

	async fn report(&self, kind: &str, payload: &FinancialReportRequest) -> Result<Value> {
		self.client
			.request(
				Method::Post,
				&format!("/finance/report/{kind}"),
				RequestOptions::new().with_body(Body::json(payload)?),
			)
			.await
	}
}
