use edgar_insiders::{PAGE_SIZE, ReportBuilder, StopReason};
use httpmock::MockServer;

use crate::common::{client_for, daily_rows, date, mock_page, ownership_html};

#[tokio::test]
async fn short_page_stops_pagination() {
    let server = MockServer::start();
    let first = daily_rows(date("2021-12-31"), PAGE_SIZE);
    let second = daily_rows(date("2021-09-01"), 5);
    let page0 = mock_page(&server, "320193", 0, ownership_html(&first));
    let page1 = mock_page(&server, "320193", 80, ownership_html(&second));
    let page2 = mock_page(&server, "320193", 160, ownership_html(&first));
    let client = client_for(&server);

    let outcome = ReportBuilder::new(&client, "320193")
        .start(date("2000-01-01"))
        .fetch()
        .await;

    page0.assert();
    page1.assert();
    page2.assert_hits(0);

    let report = outcome.report.unwrap();
    assert_eq!(report.len(), PAGE_SIZE + 5);
    assert_eq!(report.stop, StopReason::Exhausted);
}

#[tokio::test]
async fn pages_are_concatenated_in_source_order() {
    let server = MockServer::start();
    let first = daily_rows(date("2021-12-31"), PAGE_SIZE);
    let second = daily_rows(date("2021-09-01"), 3);
    let _p0 = mock_page(&server, "7", 0, ownership_html(&first));
    let _p1 = mock_page(&server, "7", 80, ownership_html(&second));
    let client = client_for(&server);

    let report = ReportBuilder::new(&client, "7")
        .start(date("2000-01-01"))
        .fetch()
        .await
        .report
        .unwrap();

    assert_eq!(report.records[0].transaction_date, date("2021-12-31"));
    assert_eq!(report.records[PAGE_SIZE - 1].transaction_date, date("2021-10-13"));
    assert_eq!(report.records[PAGE_SIZE].transaction_date, date("2021-09-01"));
    assert!(
        report
            .records
            .windows(2)
            .all(|w| w[0].transaction_date >= w[1].transaction_date)
    );
}

#[tokio::test]
async fn date_boundary_on_a_later_page_stops_fetching() {
    let server = MockServer::start();
    let first = daily_rows(date("2021-12-31"), PAGE_SIZE);
    // 2021-10-12 back to 2021-07-25; start date falls inside this page
    let second = daily_rows(date("2021-10-12"), PAGE_SIZE);
    let p0 = mock_page(&server, "7", 0, ownership_html(&first));
    let p1 = mock_page(&server, "7", 80, ownership_html(&second));
    let p2 = mock_page(&server, "7", 160, ownership_html(&first));
    let client = client_for(&server);

    let report = ReportBuilder::new(&client, "7")
        .start(date("2021-10-03"))
        .fetch()
        .await
        .report
        .unwrap();

    p0.assert();
    p1.assert();
    p2.assert_hits(0);
    assert_eq!(report.stop, StopReason::DateBoundary);
    // 80 rows from page one + 2021-10-12 ..= 2021-10-03 from page two
    assert_eq!(report.len(), PAGE_SIZE + 10);
    assert!(
        report
            .records
            .iter()
            .all(|r| r.transaction_date >= date("2021-10-03"))
    );
}
