//! Rollup of a transaction report into buy/sell statistics.

mod model;

pub use model::{Metrics, SummaryRecord};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::report::{Disposition, Report};

/// Transaction type label counted as an open-market sale.
pub const SALE_TYPE_LABEL: &str = "S-Sale";
/// Transaction type label counted as an open-market purchase.
pub const PURCHASE_TYPE_LABEL: &str = "P-Purchase";

/// Summarises `report` for `symbol`.
///
/// Never fails: a report without purchases or without sales yields a record whose
/// `metrics` is `None`, and an empty report yields all zeros.
pub fn aggregate(symbol: &str, report: &Report) -> SummaryRecord {
    let mut num_purchases = 0usize;
    let mut num_sales = 0usize;
    let mut total_bought = 0u64;
    let mut total_sold = 0u64;
    let mut sale_type_count = 0usize;
    let mut purchase_type_count = 0usize;

    for record in &report.records {
        let shares = record.shares.unwrap_or(0);
        match record.disposition {
            Disposition::Acquired => {
                num_purchases += 1;
                total_bought += shares;
            }
            Disposition::Disposed => {
                num_sales += 1;
                total_sold += shares;
            }
            Disposition::Other => {}
        }

        sale_type_count += record.transaction_type.matches(SALE_TYPE_LABEL).count();
        purchase_type_count += record.transaction_type.matches(PURCHASE_TYPE_LABEL).count();
    }

    let metrics = (num_purchases > 0 && num_sales > 0).then(|| Metrics {
        avg_purchase: total_bought / num_purchases as u64,
        avg_sale: total_sold / num_sales as u64,
        buy_sell_ratio: round2(num_purchases as f64 / num_sales as f64),
    });

    SummaryRecord {
        symbol: symbol.to_uppercase(),
        num_purchases,
        num_sales,
        total_bought,
        total_sold,
        sale_type_count,
        purchase_type_count,
        metrics,
    }
}

// Half-to-even on the exact binary value, so 1/8 gives 0.12 and 107/40 gives 2.67.
fn round2(v: f64) -> f64 {
    Decimal::from_f64_retain(v)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(v)
}
