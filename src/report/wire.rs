//! Decoding of the EDGAR ownership HTML page into transaction rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;
use tracing::warn;

use super::model::{Disposition, TransactionRecord};
use crate::core::EdgarError;

/// Column count of a well-formed `transaction-report` table.
pub(crate) const EXPECTED_COLUMNS: usize = 12;

// Header keys are compared with whitespace removed and lower-cased.
const COL_DATE: &str = "transactiondate";
const COL_TYPE: &str = "transactiontype";
// EDGAR spells the header "Acquistion".
const COL_FLAG: &[&str] = &["acquistionordisposition", "acquisitionordisposition"];
const COL_SHARES: &str = "numberofsecuritiestransacted";
const COL_OWNER: &str = "reportingowner";
const COL_FORM: &str = "form";

struct Columns {
    date: usize,
    kind: usize,
    flag: usize,
    shares: usize,
    owner: Option<usize>,
    form: Option<usize>,
}

fn selector(css: &str) -> Result<Selector, EdgarError> {
    Selector::parse(css).map_err(|e| EdgarError::Data(format!("selector `{css}`: {e:?}")))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn header_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn position(keys: &[String], names: &[&str]) -> Option<usize> {
    keys.iter().position(|k| names.contains(&k.as_str()))
}

fn required(keys: &[String], names: &[&str]) -> Result<usize, EdgarError> {
    position(keys, names).ok_or_else(|| EdgarError::Data(format!("column `{}` missing", names[0])))
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, EdgarError> {
        let keys: Vec<String> = headers.iter().map(|h| header_key(h)).collect();

        Ok(Self {
            date: required(&keys, &[COL_DATE])?,
            kind: required(&keys, &[COL_TYPE])?,
            flag: required(&keys, COL_FLAG)?,
            shares: required(&keys, &[COL_SHARES])?,
            owner: position(&keys, &[COL_OWNER]),
            form: position(&keys, &[COL_FORM]),
        })
    }
}

/// Parses one ownership page.
///
/// Fails when the `transaction-report` table is missing, does not have exactly
/// twelve columns, or holds a row of the wrong width or with an unreadable share count.
/// Rows without a readable transaction date are skipped.
pub(crate) fn parse_page(html: &str) -> Result<Vec<TransactionRecord>, EdgarError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table#transaction-report")?;
    let row_sel = selector("tr")?;
    let head_sel = selector("th, td")?;
    let data_sel = selector("td")?;

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| EdgarError::Data("transaction-report table not found".into()))?;

    let mut rows = table.select(&row_sel);
    let headers: Vec<String> = rows
        .next()
        .map(|tr| tr.select(&head_sel).map(cell_text).collect())
        .unwrap_or_default();

    if headers.len() != EXPECTED_COLUMNS {
        return Err(EdgarError::Data(format!(
            "expected {EXPECTED_COLUMNS} columns, found {}",
            headers.len()
        )));
    }
    let columns = Columns::locate(&headers)?;

    let mut records = Vec::new();
    for (line, tr) in rows.enumerate() {
        let cells: Vec<String> = tr.select(&data_sel).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != EXPECTED_COLUMNS {
            return Err(EdgarError::Data(format!(
                "row {line}: expected {EXPECTED_COLUMNS} cells, found {}",
                cells.len()
            )));
        }
        if let Some(record) = decode_row(&cells, &columns, line)? {
            records.push(record);
        }
    }

    Ok(records)
}

fn decode_row(
    cells: &[String],
    columns: &Columns,
    line: usize,
) -> Result<Option<TransactionRecord>, EdgarError> {
    let date_text = &cells[columns.date];
    let transaction_date = match NaiveDate::parse_from_str(date_text, "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            warn!(line, date = %date_text, %e, "skipping row without a transaction date");
            return Ok(None);
        }
    };

    let flag_text = &cells[columns.flag];
    let disposition = Disposition::from_code(flag_text);
    if disposition == Disposition::Other {
        warn!(line, flag = %flag_text, "unknown disposition flag");
    }

    let optional = |idx: Option<usize>| {
        idx.map(|i| cells[i].clone())
            .filter(|s| !s.is_empty() && s.as_str() != "-")
    };

    Ok(Some(TransactionRecord {
        transaction_date,
        transaction_type: cells[columns.kind].clone(),
        disposition,
        shares: parse_shares(&cells[columns.shares])
            .map_err(|msg| EdgarError::Data(format!("row {line}: {msg}")))?,
        reporting_owner: optional(columns.owner),
        form: optional(columns.form),
    }))
}

/// Whole shares from a cell such as `1,250` or `1250.75`; blank cells are `None`.
pub(crate) fn parse_shares(text: &str) -> Result<Option<u64>, String> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "-" {
        return Ok(None);
    }

    let value = Decimal::from_str(cleaned)
        .map_err(|e| format!("securities transacted `{text}`: {e}"))?;
    value
        .trunc()
        .to_u64()
        .map(Some)
        .ok_or_else(|| format!("securities transacted `{text}` is negative or too large"))
}
