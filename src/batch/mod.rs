//! Drives a run over many symbols: resolve, fetch, aggregate, collect.

mod config;
mod event;

pub use config::{BatchConfig, SymbolSelection, parse_start_date};
pub use event::{BatchEvent, Diagnostic, Progress, SymbolState};

use tracing::{info, trace};

use crate::core::ReportSource;
use crate::lookup::LookupTable;
use crate::summary::{SummaryRecord, aggregate};

/// The final state a symbol reached during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolVisit {
    pub symbol: String,
    pub state: SymbolState,
}

/// What a batch run collected.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Summaries in input order, skipped symbols omitted.
    pub summaries: Vec<SummaryRecord>,
    /// Every diagnostic emitted, in order.
    pub diagnostics: Vec<Diagnostic>,
    /// One entry per requested symbol, in order.
    pub visits: Vec<SymbolVisit>,
}

/// Processes every symbol in `config`, one at a time.
///
/// `on_event` sees each diagnostic and progress line as it happens; the same
/// diagnostics are also returned in the outcome. Per-symbol failures never abort the run.
pub async fn run<S, F>(
    source: &S,
    table: &LookupTable,
    config: &BatchConfig,
    mut on_event: F,
) -> BatchOutcome
where
    S: ReportSource + ?Sized,
    F: FnMut(&BatchEvent),
{
    let total = config.symbols.len();
    let mut outcome = BatchOutcome::default();
    let mut done = 0usize;

    for symbol in &config.symbols {
        let mut state = SymbolState::Pending;
        trace!(%symbol, ?state);

        let Some(cik) = table.resolve(symbol) else {
            emit(
                &mut on_event,
                &mut outcome,
                Diagnostic::InvalidSymbol {
                    symbol: symbol.clone(),
                },
            );
            outcome.visits.push(SymbolVisit {
                symbol: symbol.clone(),
                state: SymbolState::Skipped,
            });
            continue;
        };
        state = SymbolState::Resolved;
        trace!(%symbol, cik, ?state);

        let fetched = source.fetch_report(cik, config.start).await;
        done += 1;
        for failure in &fetched.failures {
            emit(
                &mut on_event,
                &mut outcome,
                Diagnostic::FetchFailure {
                    symbol: symbol.clone(),
                    offset: failure.offset,
                    message: failure.error.to_string(),
                },
            );
        }

        let Some(report) = fetched.report else {
            emit(
                &mut on_event,
                &mut outcome,
                Diagnostic::NoDataForSymbol {
                    symbol: symbol.clone(),
                },
            );
            outcome.visits.push(SymbolVisit {
                symbol: symbol.clone(),
                state: SymbolState::Skipped,
            });
            continue;
        };
        state = SymbolState::Fetched;
        trace!(%symbol, rows = report.len(), ?state);

        if report.is_partial() {
            emit(
                &mut on_event,
                &mut outcome,
                Diagnostic::PartialReport {
                    symbol: symbol.clone(),
                    rows: report.len(),
                },
            );
        }

        let summary = aggregate(symbol, &report);
        state = SymbolState::Aggregated;
        trace!(%symbol, degraded = summary.is_degraded(), ?state);

        let progress = Progress {
            symbol: summary.symbol.clone(),
            rows: report.len(),
            start: config.start,
            end: config.end,
            done,
            total,
        };
        info!(symbol = %progress.symbol, rows = progress.rows, done, total, "symbol collected");
        on_event(&BatchEvent::Progress(progress));

        if summary.is_degraded() {
            emit(
                &mut on_event,
                &mut outcome,
                Diagnostic::InsufficientMetricsData {
                    symbol: symbol.clone(),
                },
            );
        }

        outcome.summaries.push(summary);
        state = SymbolState::Collected;
        trace!(%symbol, ?state);
        outcome.visits.push(SymbolVisit {
            symbol: symbol.clone(),
            state,
        });
    }

    outcome
}

fn emit<F: FnMut(&BatchEvent)>(
    on_event: &mut F,
    outcome: &mut BatchOutcome,
    diagnostic: Diagnostic,
) {
    on_event(&BatchEvent::Diagnostic(diagnostic.clone()));
    outcome.diagnostics.push(diagnostic);
}
