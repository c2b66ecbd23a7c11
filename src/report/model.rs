// src/report/model.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::EdgarError;

/// Whether a transaction added securities to the insider's holding or removed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Disposition {
    /// `A`: securities were acquired.
    Acquired,
    /// `D`: securities were disposed of.
    Disposed,
    /// Any other code; the row counts as neither a purchase nor a sale.
    Other,
}

impl Disposition {
    /// Parses the single-letter code used in the ownership table.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "A" => Self::Acquired,
            "D" => Self::Disposed,
            _ => Self::Other,
        }
    }
}

/// One row of an issuer's insider transaction report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// The date the transaction took place.
    pub transaction_date: NaiveDate,
    /// The transaction code and label as published (e.g. "S-Sale", "P-Purchase", "M-Exempt").
    pub transaction_type: String,
    /// The acquisition or disposition flag.
    pub disposition: Disposition,
    /// Number of securities transacted, in whole shares. `None` when the cell was blank.
    pub shares: Option<u64>,
    /// The reporting owner's name, if the table carried it.
    pub reporting_owner: Option<String>,
    /// The form the transaction was reported on (e.g. "4"), if the table carried it.
    pub form: Option<String>,
}

/// Why pagination stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// A row older than the start date was reached.
    DateBoundary,
    /// A page came back with fewer rows than a full page.
    Exhausted,
    /// A page failed after earlier pages had succeeded; the report is partial.
    PageFailed,
}

/// Every transaction collected for one issuer, in source order (newest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The collected rows.
    pub records: Vec<TransactionRecord>,
    /// The condition that ended pagination.
    pub stop: StopReason,
}

impl Report {
    pub fn new(records: Vec<TransactionRecord>, stop: StopReason) -> Self {
        Self { records, stop }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when a page failure cut pagination short.
    pub fn is_partial(&self) -> bool {
        self.stop == StopReason::PageFailed
    }
}

/// A page request that was abandoned.
#[derive(Debug)]
pub struct PageFailure {
    /// Row offset of the failed page.
    pub offset: usize,
    /// What went wrong.
    pub error: EdgarError,
}

/// Result of fetching one issuer's report.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The report, or `None` when no page succeeded or the issuer has no rows at all.
    pub report: Option<Report>,
    /// Pages that failed along the way.
    pub failures: Vec<PageFailure>,
}
