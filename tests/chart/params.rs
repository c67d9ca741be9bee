use crate::common::{client_for, fixture, setup_server};
use finboard::{BarSize, ChartBuilder, FbError, Range};
use httpmock::Method::GET;

#[tokio::test]
async fn chart_has_expected_range_query_params() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "3mo")
            .query_param("interval", "1d")
            .query_param("events", "div|split")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });

    let client = client_for(&server);
    let _ = ChartBuilder::new(&client, "AAPL")
        .range(Range::M3)
        .interval(BarSize::D1)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn chart_period_overrides_range() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", "1620432000")
            .query_param("period2", "1700000000")
            .query_param("interval", "1wk");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });

    let client = client_for(&server);
    let chart = ChartBuilder::new(&client, "AAPL")
        .range(Range::Y1)
        .period(1_620_432_000, 1_700_000_000)
        .interval(BarSize::W1)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(chart.quotes.len(), 3);
}

#[tokio::test]
async fn chart_between_invalid_dates() {
    use chrono::{Duration, TimeZone, Utc};

    let server = setup_server();
    let client = client_for(&server);

    let start = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    let end = start - Duration::days(1);

    let err = ChartBuilder::new(&client, "AAPL")
        .between(start, end)
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FbError::InvalidDates));
}
