use chrono::NaiveDate;

use crate::report::FetchOutcome;

/// A source of insider transaction reports.
///
/// This decouples the batch driver from HTTP so that the driver can be exercised
/// against canned reports. It is implemented by [`EdgarClient`](crate::EdgarClient).
pub trait ReportSource {
    /// Fetches every transaction for `cik` dated on or after `start`, newest first.
    ///
    /// Page failures are reported inside the returned [`FetchOutcome`] rather than as an
    /// error, because rows collected before the failure are still usable.
    fn fetch_report<'a>(
        &'a self,
        cik: &'a str,
        start: NaiveDate,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = FetchOutcome> + 'a>>;
}
