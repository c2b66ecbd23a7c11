//! Spreadsheet export of collected summaries.

mod table;

pub use table::{COLUMNS, Cell, group_thousands, summary_table};

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::EdgarError;
use crate::summary::SummaryRecord;

/// Somewhere summaries can be written to.
pub trait SummarySink {
    fn write(&mut self, summaries: &[SummaryRecord]) -> Result<(), EdgarError>;
}

/// Writes a single-sheet `.xlsx` workbook.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    /// A sink writing to `<basename>.xlsx`.
    pub fn new(basename: impl AsRef<Path>) -> Self {
        let mut path = basename.as_ref().as_os_str().to_owned();
        path.push(".xlsx");
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SummarySink for XlsxSink {
    fn write(&mut self, summaries: &[SummaryRecord]) -> Result<(), EdgarError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, name) in COLUMNS.iter().enumerate() {
            sheet.write_string(0, col as u16, *name)?;
        }
        for (row, cells) in summary_table(summaries).into_iter().enumerate() {
            let row = row as u32 + 1;
            for (col, cell) in cells.into_iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(text) => {
                        sheet.write_string(row, col, text)?;
                    }
                    Cell::Number(n) => {
                        sheet.write_number(row, col, n)?;
                    }
                    Cell::Blank => {}
                }
            }
        }

        workbook.save(&self.path)?;
        debug!(rows = summaries.len(), path = %self.path.display(), "workbook saved");
        Ok(())
    }
}

/// Writes `summaries` to `sink`; an empty collection is refused.
pub fn export<S: SummarySink + ?Sized>(
    sink: &mut S,
    summaries: &[SummaryRecord],
) -> Result<(), EdgarError> {
    if summaries.is_empty() {
        return Err(EdgarError::EmptyExport);
    }
    sink.write(summaries)
}
