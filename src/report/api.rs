use tracing::debug;

use super::model::TransactionRecord;
use super::wire;
use crate::core::{EdgarClient, EdgarError, PAGE_SIZE};

/// What a single page request produced.
#[derive(Debug)]
pub(crate) enum PageOutcome {
    /// A full page; more rows may follow at the next offset.
    Full(Vec<TransactionRecord>),
    /// A short page; this is the last one.
    Exhausted(Vec<TransactionRecord>),
    /// The page could not be fetched or decoded.
    Failed(EdgarError),
}

impl From<Result<Vec<TransactionRecord>, EdgarError>> for PageOutcome {
    fn from(res: Result<Vec<TransactionRecord>, EdgarError>) -> Self {
        match res {
            Ok(rows) if rows.len() >= PAGE_SIZE => Self::Full(rows),
            Ok(rows) => Self::Exhausted(rows),
            Err(e) => Self::Failed(e),
        }
    }
}

pub(super) async fn fetch_page(client: &EdgarClient, cik: &str, offset: usize) -> PageOutcome {
    load_page(client, cik, offset).await.into()
}

async fn load_page(
    client: &EdgarClient,
    cik: &str,
    offset: usize,
) -> Result<Vec<TransactionRecord>, EdgarError> {
    let url = client.ownership_page_url(cik, offset);
    debug!(%url, "requesting ownership page");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(EdgarError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    #[cfg(feature = "test-mode")]
    record(cik, offset, &body);

    wire::parse_page(&body)
}

// With EDGAR_RECORD=1 every fetched page is saved as `ownership_{cik}_{offset}.html`.
#[cfg(feature = "test-mode")]
fn record(cik: &str, offset: usize, body: &str) {
    if std::env::var("EDGAR_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    let key = format!("{cik}_{offset}");
    if let Err(e) = crate::core::fixtures::record_fixture("ownership", &key, "html", body) {
        tracing::warn!(%key, %e, "EDGAR_RECORD: failed to write fixture");
    }
}
