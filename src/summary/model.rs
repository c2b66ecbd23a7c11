// src/summary/model.rs

use serde::Serialize;

/// Averages and ratio; only computed when a symbol has both purchases and sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Mean shares per acquisition, rounded down.
    pub avg_purchase: u64,
    /// Mean shares per disposition, rounded down.
    pub avg_sale: u64,
    /// Acquisitions per disposition, rounded to two decimals.
    pub buy_sell_ratio: f64,
}

/// The per-symbol rollup of an insider transaction report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// The ticker, upper-cased.
    pub symbol: String,
    /// Rows flagged `A`.
    pub num_purchases: usize,
    /// Rows flagged `D`.
    pub num_sales: usize,
    /// Shares across rows flagged `A`.
    pub total_bought: u64,
    /// Shares across rows flagged `D`.
    pub total_sold: u64,
    /// Rows whose transaction type reads `S-Sale`, independent of the flag.
    pub sale_type_count: usize,
    /// Rows whose transaction type reads `P-Purchase`, independent of the flag.
    pub purchase_type_count: usize,
    /// Present iff `num_purchases > 0` and `num_sales > 0`.
    pub metrics: Option<Metrics>,
}

impl SummaryRecord {
    /// True when there was not enough data for averages and the ratio.
    pub fn is_degraded(&self) -> bool {
        self.metrics.is_none()
    }
}
