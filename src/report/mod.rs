mod api;
mod model;
mod wire;

pub use model::{
    Disposition, FetchOutcome, PageFailure, Report, StopReason, TransactionRecord,
};

use api::PageOutcome;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::future::Future;
use tracing::{debug, trace, warn};

use crate::core::{EdgarClient, PAGE_SIZE, ReportSource};

/// A builder for fetching the insider transaction report of one issuer.
pub struct ReportBuilder<'a> {
    client: &'a EdgarClient,
    cik: String,
    start: NaiveDate,
}

impl<'a> ReportBuilder<'a> {
    /// Creates a new `ReportBuilder` for the issuer with the given CIK.
    ///
    /// The start date defaults to the earliest representable date, i.e. the whole history.
    pub fn new(client: &'a EdgarClient, cik: impl Into<String>) -> Self {
        Self {
            client,
            cik: cik.into(),
            start: NaiveDate::MIN,
        }
    }

    /// Sets the inclusive lower bound on transaction dates.
    #[must_use]
    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    /// Pages through the report until the start date is passed or the pages run out.
    #[tracing::instrument(skip(self), fields(cik = %self.cik, start = %self.start))]
    pub async fn fetch(self) -> FetchOutcome {
        let client = self.client;
        let cik = self.cik.as_str();
        paginate(self.start, |offset| api::fetch_page(client, cik, offset)).await
    }
}

impl ReportSource for EdgarClient {
    fn fetch_report<'a>(
        &'a self,
        cik: &'a str,
        start: NaiveDate,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = FetchOutcome> + 'a>> {
        Box::pin(ReportBuilder::new(self, cik).start(start).fetch())
    }
}

/// Drains a FIFO of page offsets, seeded with `0`, accumulating rows until a row
/// predates `start`, a short page arrives, or a page fails.
async fn paginate<F, Fut>(start: NaiveDate, mut fetch_page: F) -> FetchOutcome
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = PageOutcome>,
{
    let mut pending = VecDeque::from([0usize]);
    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut pages_ok = 0usize;
    let mut saw_rows = false;
    let mut stop = StopReason::Exhausted;

    while let Some(offset) = pending.pop_front() {
        let (page, full) = match fetch_page(offset).await {
            PageOutcome::Full(page) => (page, true),
            PageOutcome::Exhausted(page) => (page, false),
            PageOutcome::Failed(error) => {
                warn!(offset, %error, "ownership page abandoned");
                failures.push(PageFailure { offset, error });
                stop = StopReason::PageFailed;
                continue;
            }
        };
        pages_ok += 1;
        saw_rows |= !page.is_empty();
        debug!(offset, rows = page.len(), full, "ownership page decoded");

        if let Some(cut) = page.iter().position(|r| r.transaction_date < start) {
            trace!(offset, cut, "row predates start date");
            records.extend(page.into_iter().take(cut));
            stop = StopReason::DateBoundary;
            break;
        }

        records.extend(page);
        if full {
            pending.push_back(offset + PAGE_SIZE);
        } else {
            stop = StopReason::Exhausted;
        }
    }

    let report = (pages_ok > 0 && saw_rows).then(|| Report::new(records, stop));
    FetchOutcome { report, failures }
}
