//! # Sales Analysis
//!
//! Totals and averages over a list of sale records.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SaleRecord { product, price, quantity }                                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  line_total = price × quantity ──► individual_totals[i]                 │
//! │      │                                                                  │
//! │      ├──► Σ line_total ───────────► total_revenue                       │
//! │      ├──► Σ quantity ─────────────► total_products                      │
//! │      └──► total_revenue / count ──► average_sale  (zero when empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// A single sale transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleRecord {
    pub product: String,
    /// Unit price.
    pub price: Money,
    pub quantity: i64,
}

impl SaleRecord {
    pub fn new(product: impl Into<String>, price: Money, quantity: i64) -> Self {
        SaleRecord {
            product: product.into(),
            price,
            quantity,
        }
    }

    /// Price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// Aggregates over a list of sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesAnalysis {
    /// Line totals in input order.
    pub individual_totals: Vec<Money>,
    pub total_revenue: Money,
    /// Sum of quantities, saturating.
    pub total_products: i64,
    /// Revenue per sale in euros, unrounded; `0.0` for no sales.
    pub average_sale: f64,
}

/// Analyzes a list of sales.
///
/// ## Example
/// ```rust
/// use recap_core::data_structures::sales::{analyze_sales, sample_sales};
/// use recap_core::money::Money;
///
/// let analysis = analyze_sales(&sample_sales());
/// assert_eq!(analysis.total_revenue, Money::from_major_minor(2750, 0));
/// assert_eq!(analysis.total_products, 10);
///
/// assert!((analysis.average_sale - 2750.0 / 3.0).abs() < 1e-9);
///
/// let empty = analyze_sales(&[]);
/// assert_eq!(empty.average_sale, 0.0);
/// ```
pub fn analyze_sales(sales: &[SaleRecord]) -> SalesAnalysis {
    let individual_totals: Vec<Money> = sales.iter().map(SaleRecord::line_total).collect();
    let total_revenue: Money = individual_totals.iter().sum();

    SalesAnalysis {
        total_revenue,
        total_products: sales
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.quantity)),
        average_sale: average(total_revenue, individual_totals.len()),
        individual_totals,
    }
}

fn average(total: Money, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total.as_f64() / count as f64
}

/// The sales list of the analysis exercise.
pub fn sample_sales() -> Vec<SaleRecord> {
    vec![
        SaleRecord::new("Laptop", Money::from_major_minor(1200, 0), 2),
        SaleRecord::new("Mouse", Money::from_major_minor(25, 0), 5),
        SaleRecord::new("Keyboard", Money::from_major_minor(75, 0), 3),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_sample_sales() {
        let analysis = analyze_sales(&sample_sales());
        assert_eq!(
            analysis.individual_totals,
            vec![
                Money::from_major_minor(2400, 0),
                Money::from_major_minor(125, 0),
                Money::from_major_minor(225, 0),
            ]
        );
        assert_eq!(analysis.total_revenue.cents(), 275_000);
        assert_eq!(analysis.total_products, 10);
        assert!((analysis.average_sale - 916.666_666_666).abs() < 1e-6);
    }

    #[test]
    fn test_analyze_empty_sales_is_all_zero() {
        let analysis = analyze_sales(&[]);
        assert!(analysis.individual_totals.is_empty());
        assert_eq!(analysis.total_revenue, Money::zero());
        assert_eq!(analysis.total_products, 0);
        assert_eq!(analysis.average_sale, 0.0);
    }

    #[test]
    fn test_average_of_single_sale() {
        let sales = [SaleRecord::new("Pen", Money::from_cents(150), 4)];
        let analysis = analyze_sales(&sales);
        assert_eq!(analysis.average_sale, 6.0);
    }

    #[test]
    fn test_average_times_count_is_revenue() {
        let sales = [
            SaleRecord::new("a", Money::from_cents(5), 1),
            SaleRecord::new("b", Money::from_cents(5), 1),
            SaleRecord::new("c", Money::from_cents(0), 1),
        ];
        let analysis = analyze_sales(&sales);

        assert_eq!(analysis.total_revenue.cents(), 10);
        assert!((analysis.average_sale * 3.0 - analysis.total_revenue.as_f64()).abs() < 1e-12);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let sales = [
            SaleRecord::new("a", Money::from_cents(100), i64::MAX),
            SaleRecord::new("b", Money::from_cents(100), i64::MAX),
        ];
        let analysis = analyze_sales(&sales);

        assert_eq!(analysis.total_products, i64::MAX);
        assert_eq!(analysis.total_revenue.cents(), i64::MAX);
    }
}
