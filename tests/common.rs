#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use finboard::api::{AppState, router};
use finboard::{Chart, ChartClient, ChartRequest, ChartService, Config, FbError};
use httpmock::{Method::GET, Mock, MockServer};
use std::sync::{Arc, Mutex};
use std::{fs, path::Path};
use tower::ServiceExt;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_history_chart<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{}", symbol));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", symbol, "json"));
    })
}

pub fn base_chart(server: &MockServer) -> String {
    format!("{}/v8/finance/chart/", server.base_url())
}

pub fn client_for(server: &MockServer) -> ChartClient {
    ChartClient::builder()
        .base_chart(Url::parse(&base_chart(server)).unwrap())
        .build()
        .unwrap()
}

/// Default config pointed at the mock provider.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.provider.base_chart = base_chart(server);
    config
}

/// Router backed by a real client talking to `server`.
pub fn app_for(server: &MockServer, config: Config) -> Router {
    let client = client_for(server);
    router(AppState::new(config, Arc::new(client)))
}

/// What a [`FakeCharts`] answers with.
pub enum Canned {
    Chart(Chart),
    Fail(String),
}

/// In-process chart service that records every call.
pub struct FakeCharts {
    reply: Canned,
    pub calls: Mutex<Vec<(String, ChartRequest)>>,
}

impl FakeCharts {
    pub fn new(reply: Canned) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ChartService for FakeCharts {
    fn fetch_chart<'a>(
        &'a self,
        symbol: &'a str,
        req: ChartRequest,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<Chart, FbError>> + Send + 'a>>
    {
        self.calls.lock().unwrap().push((symbol.to_string(), req));
        let out = match &self.reply {
            Canned::Chart(chart) => Ok(chart.clone()),
            Canned::Fail(msg) => Err(FbError::Upstream {
                code: "Not Found".to_string(),
                description: msg.clone(),
            }),
        };
        Box::pin(async move { out })
    }
}

pub fn app_with(fake: Arc<FakeCharts>) -> Router {
    app_with_config(fake, Config::default())
}

pub fn app_with_config(fake: Arc<FakeCharts>, config: Config) -> Router {
    router(AppState::new(config, fake))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let value = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("body is not JSON ({e}): {body}"));
    (status, value)
}
