//! Ticker → CIK lookup, loaded once from a two-column CSV file.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::EdgarError;

/// Default lookup file name, read from the working directory.
pub const DEFAULT_LOOKUP_FILE: &str = "ticker and cik.csv";

/// Case-insensitive map from ticker symbol to EDGAR CIK.
///
/// File order is kept so that "all symbols" can be listed as they appear.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    order: Vec<String>,
    ciks: HashMap<String, String>,
}

impl LookupTable {
    /// Reads the table from a CSV file of `symbol,cik` rows.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EdgarError> {
        let path = path.as_ref();
        debug!("reading lookup table at {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads the table from any CSV source. Columns beyond the second are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EdgarError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut pairs = Vec::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(symbol), Some(cik)) => pairs.push((symbol.to_string(), cik.to_string())),
                _ => {
                    return Err(EdgarError::Data(format!(
                        "lookup line {}: expected symbol and CIK",
                        line + 1
                    )));
                }
            }
        }

        let table: Self = pairs.into_iter().collect();
        debug!(entries = table.len(), "lookup table loaded");
        Ok(table)
    }

    /// Returns the CIK for `symbol`, ignoring case.
    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        self.ciks.get(&symbol.to_lowercase()).map(String::as_str)
    }

    /// Every symbol in file order except the first entry, which is the header line.
    pub fn all_symbols(&self) -> Vec<String> {
        self.order.iter().skip(1).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: AsRef<str>, C: Into<String>> FromIterator<(S, C)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (symbol, cik) in iter {
            let key = symbol.as_ref().to_lowercase();
            table.order.push(key.clone());
            table.ciks.insert(key, cik.into());
        }
        table
    }
}
