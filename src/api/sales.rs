//! Sale submission and reporting reads against `/ventas`.

use crate::basket::SaleBasket;
use crate::config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Sale, SaleDetail};
use crate::report::{ReportRange, SalesReport};

pub struct SalesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SalesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Every recorded sale.
    pub fn list(&self) -> Result<Vec<Sale>> {
        self.http.get(config::SALES_PATH)
    }

    /// Line details of one sale.
    pub fn detail(&self, sale_id: i64) -> Result<Vec<SaleDetail>> {
        self.http.get(&config::sale_detail_path(sale_id))
    }

    /// Submit the assembled basket as one sale.
    ///
    /// An empty basket is rejected before any request is made. The basket is
    /// not mutated: on success the caller clears it and re-fetches the
    /// candidate lists; on failure the lines stay in place, since nothing
    /// was persisted. The server re-validates stock regardless of the
    /// basket's displayed figures.
    pub fn submit(&self, basket: &SaleBasket) -> Result<serde_json::Value> {
        let request = basket.to_request()?;
        self.http.post(config::SALES_PATH, &request)
    }

    /// Fetch everything a report needs and aggregate it over `range`.
    ///
    /// Each sale's detail is fetched with an independent request; the first
    /// failure aborts the report and is surfaced as-is.
    pub fn report(&self, range: ReportRange) -> Result<SalesReport> {
        let sales = self.list()?;
        let mut details = Vec::new();
        for sale in &sales {
            details.extend(self.detail(sale.id)?);
        }
        Ok(SalesReport::build(&sales, &details, range))
    }
}
