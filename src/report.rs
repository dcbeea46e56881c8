//! Sales report aggregation.
//!
//! Pure computation over the reporting reads (`GET /ventas` plus each sale's
//! `GET /ventas/:id/detalle`): date-range filtering, revenue totals, the
//! catalog-vs-custom breakdown, and a best-sellers ranking. Chart and PDF
//! rendering sit on top of these numbers and are out of scope here.

use chrono::NaiveDate;

use crate::error::{CraftshopError, Result};
use crate::models::{Sale, SaleDetail};

// ---------------------------------------------------------------------------
// ReportRange
// ---------------------------------------------------------------------------

/// Inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(CraftshopError::InvalidArgument(
                "report range start is after its end".into(),
            ));
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

// ---------------------------------------------------------------------------
// Report pieces
// ---------------------------------------------------------------------------

/// Aggregated quantity for one product name across the filtered sales.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSeller {
    pub name: String,
    pub quantity: i64,
    pub is_custom: bool,
}

/// One sale with its line details and recomputed total.
#[derive(Debug, Clone)]
pub struct SaleGroup {
    pub sale: Sale,
    pub details: Vec<SaleDetail>,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// SalesReport
// ---------------------------------------------------------------------------

/// Summary of sales within a date range.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub range: ReportRange,
    /// Sum of line subtotals over every filtered sale.
    pub total_revenue: f64,
    pub sale_count: usize,
    pub line_count: usize,
    pub catalog_lines: usize,
    pub custom_lines: usize,
    /// Per-name quantities, highest first. Ties keep first-seen order.
    pub top_sellers: Vec<TopSeller>,
    pub sales: Vec<SaleGroup>,
}

impl SalesReport {
    /// Aggregate the given sales and details over `range`.
    ///
    /// Details are matched to sales by `venta_id`; a detail whose sale falls
    /// outside the range (or is missing) is ignored.
    pub fn build(sales: &[Sale], details: &[SaleDetail], range: ReportRange) -> Self {
        let filtered: Vec<&Sale> = sales
            .iter()
            .filter(|s| range.contains(s.date.date()))
            .collect();

        let groups: Vec<SaleGroup> = filtered
            .iter()
            .map(|sale| {
                let lines: Vec<SaleDetail> = details
                    .iter()
                    .filter(|d| d.sale_id == Some(sale.id))
                    .cloned()
                    .collect();
                let total = lines.iter().map(SaleDetail::subtotal).sum();
                SaleGroup {
                    sale: (*sale).clone(),
                    details: lines,
                    total,
                }
            })
            .collect();

        let mut total_revenue = 0.0;
        let mut line_count = 0;
        let mut custom_lines = 0;
        let mut top_sellers: Vec<TopSeller> = Vec::new();

        for group in &groups {
            total_revenue += group.total;
            line_count += group.details.len();
            for detail in &group.details {
                if detail.is_custom() {
                    custom_lines += 1;
                }
                let name = detail.display_name();
                match top_sellers.iter_mut().find(|t| t.name == name) {
                    Some(entry) => entry.quantity += detail.quantity,
                    None => top_sellers.push(TopSeller {
                        name: name.to_string(),
                        quantity: detail.quantity,
                        is_custom: detail.is_custom(),
                    }),
                }
            }
        }

        // Stable sort keeps first-seen order among equal quantities.
        top_sellers.sort_by(|a, b| b.quantity.cmp(&a.quantity));

        SalesReport {
            range,
            total_revenue,
            sale_count: groups.len(),
            line_count,
            catalog_lines: line_count - custom_lines,
            custom_lines,
            top_sellers,
            sales: groups,
        }
    }

    /// The `n` best-selling names.
    pub fn top(&self, n: usize) -> &[TopSeller] {
        &self.top_sellers[..self.top_sellers.len().min(n)]
    }
}
