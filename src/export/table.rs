use crate::summary::SummaryRecord;

/// Column headers of the exported sheet, in order. The first column labels each row.
pub const COLUMNS: [&str; 10] = [
    "Symbol",
    "# of Purchases",
    "# of Sales",
    "Buy/Sell Ratio",
    "Total Bought",
    "Total Sold",
    "Avg Shares Bought",
    "Avg Shares Sold",
    "S-Sale count",
    "P-Purchase count",
];

/// One exported cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Blank,
}

/// Lays summaries out as rows matching [`COLUMNS`]; metric cells of degraded
/// records are left blank.
pub fn summary_table(summaries: &[SummaryRecord]) -> Vec<Vec<Cell>> {
    summaries.iter().map(summary_row).collect()
}

fn summary_row(s: &SummaryRecord) -> Vec<Cell> {
    let (ratio, avg_bought, avg_sold) = match &s.metrics {
        Some(m) => (
            Cell::Number(m.buy_sell_ratio),
            Cell::Number(m.avg_purchase as f64),
            Cell::Number(m.avg_sale as f64),
        ),
        None => (Cell::Blank, Cell::Blank, Cell::Blank),
    };

    vec![
        Cell::Text(s.symbol.clone()),
        Cell::Number(s.num_purchases as f64),
        Cell::Number(s.num_sales as f64),
        ratio,
        Cell::Text(group_thousands(s.total_bought)),
        Cell::Text(group_thousands(s.total_sold)),
        avg_bought,
        avg_sold,
        Cell::Number(s.sale_type_count as f64),
        Cell::Number(s.purchase_type_count as f64),
    ]
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
