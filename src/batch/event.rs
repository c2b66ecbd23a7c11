use chrono::NaiveDate;
use std::fmt;

/// Where a symbol ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolState {
    Pending,
    Resolved,
    Fetched,
    Aggregated,
    Collected,
    Skipped,
}

/// A handled, user-visible problem. None of these abort a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The symbol is not in the lookup table.
    InvalidSymbol { symbol: String },
    /// One page of a symbol's report was abandoned.
    FetchFailure {
        symbol: String,
        offset: usize,
        message: String,
    },
    /// A page failed after earlier pages succeeded; the rows so far are used.
    PartialReport { symbol: String, rows: usize },
    /// No report could be assembled for the symbol.
    NoDataForSymbol { symbol: String },
    /// The symbol lacks purchases or sales, so averages and ratio were left out.
    InsufficientMetricsData { symbol: String },
    /// The spreadsheet could not be written.
    ExportFailure { message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol } => write!(
                f,
                "The symbol '{symbol}' is not valid, rest of the data will be saved to excel file (if available)"
            ),
            Self::FetchFailure {
                symbol,
                offset,
                message,
            } => write!(
                f,
                "Page at offset {offset} for \"{symbol}\" could not be retrieved: {message}"
            ),
            Self::PartialReport { symbol, rows } => write!(
                f,
                "Insider trades for \"{symbol}\" are incomplete; continuing with the {rows} rows retrieved"
            ),
            Self::NoDataForSymbol { symbol } => write!(
                f,
                "Retrieving insider trades for the symbol \"{symbol}\" failed. Skipping..."
            ),
            Self::InsufficientMetricsData { symbol } => write!(
                f,
                "There isn't enough data for '{symbol}' to calculate avg sale/purchase & ratio; \
                 the data will be exported without these metrics"
            ),
            Self::ExportFailure { message } => write!(f, "Export failed: {message}"),
        }
    }
}

/// Emitted once a symbol's summary has been collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Upper-cased symbol.
    pub symbol: String,
    /// Rows in the symbol's report.
    pub rows: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Symbols resolved and fetched so far.
    pub done: usize,
    /// Symbols requested.
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Finished extracting {} insider data from {} till {}. A total of {} insider trades logged.\n\
             Finished: {}/{} symbols.",
            self.symbol, self.start, self.end, self.rows, self.done, self.total
        )
    }
}

/// Everything the batch driver reports while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    Diagnostic(Diagnostic),
    Progress(Progress),
}
