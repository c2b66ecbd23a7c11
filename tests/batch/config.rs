use edgar_insiders::batch::{BatchConfig, SymbolSelection, parse_start_date};
use edgar_insiders::{EdgarError, LookupTable};

use crate::common::date;

#[test]
fn symbol_list_is_split_trimmed_and_lowercased() {
    assert_eq!(
        SymbolSelection::parse(" AAPL, msft ,Goog"),
        SymbolSelection::List(vec!["aapl".into(), "msft".into(), "goog".into()])
    );
}

#[test]
fn all_selects_every_symbol_but_the_header() {
    let table: LookupTable = vec![("Ticker", "CIK"), ("aapl", "320193"), ("msft", "789019")]
        .into_iter()
        .collect();

    let selection = SymbolSelection::parse("ALL");
    assert_eq!(selection, SymbolSelection::All);
    assert_eq!(selection.resolve(&table), vec!["aapl", "msft"]);
}

#[test]
fn start_date_must_be_iso() {
    assert_eq!(parse_start_date("2020-06-01").unwrap(), date("2020-06-01"));
    assert_eq!(parse_start_date(" 2020-06-01\n").unwrap(), date("2020-06-01"));

    match parse_start_date("06/01/2020") {
        Err(EdgarError::InvalidDate(input)) => assert_eq!(input, "06/01/2020"),
        other => panic!("expected InvalidDate, got {other:?}"),
    }
    assert!(parse_start_date("2020-13-01").is_err());
}

#[test]
fn config_normalizes_symbol_case() {
    let cfg = BatchConfig::new(
        vec!["AAPL".into(), "msft".into()],
        date("2020-01-01"),
        date("2020-02-01"),
    );
    assert_eq!(cfg.symbols, vec!["aapl", "msft"]);
}
