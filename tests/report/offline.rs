use edgar_insiders::{Disposition, ReportBuilder, StopReason};
use httpmock::MockServer;

use crate::common::{client_for, date, fixture, mock_page};

#[tokio::test]
async fn offline_ownership_page_from_fixture() {
    let server = MockServer::start();
    let mock = mock_page(&server, "320193", 0, fixture("ownership", "320193_0", "html"));
    let client = client_for(&server);

    let outcome = ReportBuilder::new(&client, "320193")
        .start(date("2020-01-01"))
        .fetch()
        .await;
    mock.assert();

    assert!(outcome.failures.is_empty());
    let report = outcome.report.expect("report from fixture");
    assert_eq!(report.len(), 4);
    assert_eq!(report.stop, StopReason::Exhausted);

    let first = &report.records[0];
    assert_eq!(first.transaction_date, date("2020-10-16"));
    assert_eq!(first.transaction_type, "S-Sale");
    assert_eq!(first.disposition, Disposition::Disposed);
    assert_eq!(first.shares, Some(1250));
    assert_eq!(first.reporting_owner.as_deref(), Some("LEVINSON ARTHUR D"));
    assert_eq!(first.form.as_deref(), Some("4"));

    // fractional shares are truncated, blank cells are missing
    assert_eq!(report.records[1].shares, Some(1548));
    assert_eq!(report.records[1].disposition, Disposition::Acquired);
    assert_eq!(report.records[3].shares, None);
}

#[tokio::test]
async fn offline_rows_before_start_date_are_cut() {
    let server = MockServer::start();
    let rows = vec![
        crate::common::row("2020-06-05", "S-Sale", "D", "10"),
        crate::common::row("2020-06-02", "P-Purchase", "A", "20"),
        crate::common::row("2020-05-30", "S-Sale", "D", "30"),
        crate::common::row("2020-05-01", "S-Sale", "D", "40"),
    ];
    let mock = mock_page(&server, "789019", 0, crate::common::ownership_html(&rows));
    let client = client_for(&server);

    let outcome = ReportBuilder::new(&client, "789019")
        .start(date("2020-06-01"))
        .fetch()
        .await;
    mock.assert();

    let report = outcome.report.unwrap();
    assert_eq!(report.stop, StopReason::DateBoundary);
    let dates: Vec<_> = report.records.iter().map(|r| r.transaction_date).collect();
    assert_eq!(dates, vec![date("2020-06-05"), date("2020-06-02")]);
}

#[tokio::test]
async fn offline_start_date_is_inclusive() {
    let server = MockServer::start();
    let rows = vec![
        crate::common::row("2020-06-01", "S-Sale", "D", "10"),
        crate::common::row("2020-05-31", "S-Sale", "D", "10"),
    ];
    let _mock = mock_page(&server, "1", 0, crate::common::ownership_html(&rows));
    let client = client_for(&server);

    let report = ReportBuilder::new(&client, "1")
        .start(date("2020-06-01"))
        .fetch()
        .await
        .report
        .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.records[0].transaction_date, date("2020-06-01"));
}

#[tokio::test]
async fn offline_first_row_already_too_old_gives_empty_report() {
    let server = MockServer::start();
    let rows = vec![crate::common::row("2019-01-02", "S-Sale", "D", "10")];
    let _mock = mock_page(&server, "1", 0, crate::common::ownership_html(&rows));
    let client = client_for(&server);

    let outcome = ReportBuilder::new(&client, "1")
        .start(date("2020-01-01"))
        .fetch()
        .await;

    let report = outcome.report.expect("rows existed, so the report is present");
    assert!(report.is_empty());
    assert_eq!(report.stop, StopReason::DateBoundary);
}

#[tokio::test]
async fn offline_issuer_without_rows_is_absent() {
    let server = MockServer::start();
    let _mock = mock_page(&server, "1", 0, crate::common::ownership_html(&[]));
    let client = client_for(&server);

    let outcome = ReportBuilder::new(&client, "1")
        .start(date("2020-01-01"))
        .fetch()
        .await;

    assert!(outcome.report.is_none());
    assert!(outcome.failures.is_empty());
}
