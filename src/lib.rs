//! edgar-insiders: insider buying and selling summaries from SEC EDGAR.
//!
//! The library pages through an issuer's "ownership by issuer" report, keeps the rows
//! inside a date window, and rolls them up into one [`SummaryRecord`] per ticker.
//!
//! ```no_run
//! # use edgar_insiders::{EdgarClient, LookupTable, batch};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EdgarClient::default();
//! let table = LookupTable::from_path("ticker and cik.csv")?;
//! let start = batch::parse_start_date("2020-06-01")?;
//! let config = batch::BatchConfig::new(vec!["aapl".into()], start, chrono::Local::now().date_naive());
//!
//! let outcome = batch::run(&client, &table, &config, |event| println!("{event:?}")).await;
//! for summary in &outcome.summaries {
//!     println!("{}: {} bought / {} sold", summary.symbol, summary.total_bought, summary.total_sold);
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod core;
pub mod export;
pub mod lookup;
pub mod report;
pub mod summary;

pub use crate::core::{EdgarClient, EdgarClientBuilder, EdgarError, PAGE_SIZE, ReportSource};
pub use batch::{BatchConfig, BatchEvent, BatchOutcome, Diagnostic, SymbolSelection};
pub use export::{SummarySink, XlsxSink};
pub use lookup::LookupTable;
pub use report::{Disposition, FetchOutcome, Report, ReportBuilder, StopReason, TransactionRecord};
pub use summary::{Metrics, SummaryRecord, aggregate};
