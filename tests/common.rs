#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use edgar_insiders::EdgarClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const OWNERSHIP_PATH: &str = "/cgi-bin/own-disp";

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A table row as the four cells the summary cares about.
#[derive(Clone, Debug)]
pub struct Row {
    pub date: String,
    pub kind: String,
    pub flag: String,
    pub shares: String,
}

pub fn row(date: &str, kind: &str, flag: &str, shares: &str) -> Row {
    Row {
        date: date.into(),
        kind: kind.into(),
        flag: flag.into(),
        shares: shares.into(),
    }
}

/// `count` sale rows, one per day walking backwards from `newest`.
pub fn daily_rows(newest: NaiveDate, count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let d = newest - Duration::days(i as i64);
            row(&d.format("%Y-%m-%d").to_string(), "S-Sale", "D", "100")
        })
        .collect()
}

/// Renders rows into a 12-column `transaction-report` page.
pub fn ownership_html(rows: &[Row]) -> String {
    let mut body = String::from(
        "<html><body><table id=\"transaction-report\">\
         <tr><th>Acquistion or Disposition</th><th>Transaction Date</th>\
         <th>Deemed Execution Date</th><th>Reporting Owner</th><th>Form</th>\
         <th>Transaction Type</th><th>Direct or Indirect Ownership</th>\
         <th>Number of Securities Transacted</th><th>Number of Securities Owned</th>\
         <th>Line Number</th><th>Owner CIK</th><th>Security Name</th></tr>",
    );
    for r in rows {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>-</td><td>DOE JANE</td><td>4</td><td>{}</td>\
             <td>D</td><td>{}</td><td>10,000</td><td>1</td><td>0000000001</td>\
             <td>Common Stock</td></tr>",
            r.flag, r.date, r.kind, r.shares
        ));
    }
    body.push_str("</table></body></html>");
    body
}

pub fn mock_page<'a>(server: &'a MockServer, cik: &str, offset: usize, body: String) -> Mock<'a> {
    let cik = cik.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path(OWNERSHIP_PATH)
            .query_param("action", "getissuer")
            .query_param("CIK", cik)
            .query_param("start", offset.to_string());
        then.status(200)
            .header("content-type", "text/html")
            .body(body);
    })
}

pub fn mock_status<'a>(server: &'a MockServer, cik: &str, offset: usize, status: u16) -> Mock<'a> {
    let cik = cik.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path(OWNERSHIP_PATH)
            .query_param("CIK", cik)
            .query_param("start", offset.to_string());
        then.status(status).body("oops");
    })
}

pub fn client_for(server: &MockServer) -> EdgarClient {
    EdgarClient::builder()
        .base_ownership(Url::parse(&format!("{}{}", server.base_url(), OWNERSHIP_PATH)).unwrap())
        .build()
        .unwrap()
}
