use chrono::NaiveDate;

use crate::core::EdgarError;
use crate::lookup::LookupTable;

/// Which symbols a run should cover, as typed at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSelection {
    /// Every symbol in the lookup table except its first entry.
    All,
    /// An explicit list, lower-cased, in the order given.
    List(Vec<String>),
}

impl SymbolSelection {
    /// Parses `"AAPL, MSFT"` or `"all"`. Spaces are dropped and case is ignored.
    pub fn parse(input: &str) -> Self {
        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if cleaned == "all" {
            Self::All
        } else {
            Self::List(cleaned.split(',').map(str::to_string).collect())
        }
    }

    /// Expands the selection against `table`.
    pub fn resolve(&self, table: &LookupTable) -> Vec<String> {
        match self {
            Self::All => table.all_symbols(),
            Self::List(symbols) => symbols.clone(),
        }
    }
}

/// Parses a `YYYY-MM-DD` start date.
pub fn parse_start_date(input: &str) -> Result<NaiveDate, EdgarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| EdgarError::InvalidDate(input.trim().to_string()))
}

/// Everything a batch run needs besides the lookup table and the report source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Symbols to process, in order; duplicates are processed again.
    pub symbols: Vec<String>,
    /// Inclusive lower bound on transaction dates.
    pub start: NaiveDate,
    /// End of the reporting window, shown in progress lines (normally today).
    pub end: NaiveDate,
}

impl BatchConfig {
    pub fn new(symbols: Vec<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbols: symbols.into_iter().map(|s| s.to_lowercase()).collect(),
            start,
            end,
        }
    }
}
