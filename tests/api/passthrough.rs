use crate::common::{
    Canned, FakeCharts, app_for, app_with, config_for, fixture, get_json, setup_server,
};
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use finboard::{Chart, ChartMeta, ChartQuote};
use httpmock::Method::GET;

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn sample_chart() -> Chart {
    let meta: ChartMeta = serde_json::from_value(serde_json::json!({
        "symbol": "AAPL",
        "currency": null,
        "longName": "Apple Inc.",
        "regularMarketPrice": 181.91,
        "instrumentType": "EQUITY",
        "validRanges": ["1d", "5d"],
    }))
    .unwrap();
    Chart {
        meta,
        quotes: vec![
            ChartQuote {
                date: Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap(),
                open: Some(187.15),
                high: Some(188.44),
                low: Some(183.89),
                close: Some(185.64),
                volume: Some(82_488_700),
                adjclose: Some(184.73),
            },
            ChartQuote {
                date: Utc.with_ymd_and_hms(2024, 1, 3, 14, 30, 0).unwrap(),
                open: None,
                high: None,
                low: None,
                close: None,
                volume: None,
                adjclose: None,
            },
        ],
        events: None,
    }
}

#[tokio::test]
async fn successful_payload_is_returned_unmodified() {
    let chart = sample_chart();
    let fake = FakeCharts::new(Canned::Chart(chart.clone()));

    let (status, body) = get_json(app_with(fake), "/api/stock?ticker=AAPL&interval=1y").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(&chart).unwrap());
    let back: Chart = serde_json::from_value(body).unwrap();
    assert_eq!(back, chart);
}

#[tokio::test]
async fn ticker_is_forwarded_verbatim() {
    let fake = FakeCharts::new(Canned::Chart(Chart::default()));
    let (status, _) = get_json(app_with(fake.clone()), "/api/stock?ticker=BRK-B").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fake.calls.lock().unwrap()[0].0, "BRK-B");
}

#[tokio::test]
async fn null_meta_values_survive_the_route() {
    let fake = FakeCharts::new(Canned::Chart(sample_chart()));
    let (status, body) = get_json(app_with(fake), "/api/stock?ticker=AAPL").await;

    assert_eq!(status, StatusCode::OK);
    let meta = body["meta"].as_object().unwrap();
    assert!(meta["currency"].is_null());
    assert!(!meta.contains_key("timezone"));
}

#[tokio::test]
async fn host_like_ticker_stays_on_the_provider() {
    let provider = setup_server();
    let other = setup_server();
    let provider_mock = provider.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });
    let other_mock = other.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":[{"meta":{"symbol":"ELSEWHERE"}}],"error":null}}"#);
    });

    let tickers = [
        format!("//127.0.0.1:{}/x", other.port()),
        format!("{}/x", other.base_url()),
    ];
    for ticker in &tickers {
        let app = app_for(&provider, config_for(&provider));
        let uri = format!("/api/stock?ticker={}", encode(ticker));
        let (status, body) = get_json(app, &uri).await;
        assert_eq!(status, StatusCode::OK, "ticker {ticker}");
        assert_eq!(body["meta"]["symbol"], "AAPL", "ticker {ticker}");
    }

    provider_mock.assert_hits(tickers.len());
    other_mock.assert_hits(0);
}

#[tokio::test]
async fn reserved_characters_reach_the_provider_path() {
    for ticker in ["BINANCE:BTCUSDT", "EURUSD=X"] {
        let server = setup_server();
        let mock = server.mock(|when, then| {
            when.method(GET).path(format!("/v8/finance/chart/{ticker}"));
            then.status(200)
                .header("content-type", "application/json")
                .body(fixture("history_chart", "AAPL", "json"));
        });

        let app = app_for(&server, config_for(&server));
        let uri = format!("/api/stock?ticker={}", encode(ticker));
        let (status, _) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK, "ticker {ticker}");
        mock.assert();
    }
}
