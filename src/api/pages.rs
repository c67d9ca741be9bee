use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::api::{ApiError, AppState};
use crate::markup::escape_html;
use crate::news::{market_news, render_news_list};
use crate::widget::ChartWidget;

pub const INVALID_ASSET: &str = "Invalid asset. Use 'stock' or 'crypto'.";

const TRADINGVIEW_SCRIPT: &str = "https://s3.tradingview.com/tv.js";
const WIDGET_LOADER: &str = include_str!("../../assets/widget-loader.js");

/// Query parameters of `GET /chart`. The first occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartPageQuery {
    pub symbol: Option<String>,
    pub asset: Option<String>,
}

impl ChartPageQuery {
    pub fn from_query_str(raw: &str) -> Self {
        let mut query = ChartPageQuery::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "symbol" if query.symbol.is_none() => query.symbol = Some(value.into_owned()),
                "asset" if query.asset.is_none() => query.asset = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<title>{title}</title>",
            "<script src=\"{tv}\"></script>",
            "<script src=\"/assets/widget-loader.js\" defer></script>",
            "</head><body class=\"dark\">{body}</body></html>"
        ),
        title = escape_html(title),
        tv = TRADINGVIEW_SCRIPT,
        body = body,
    )
}

fn render_failed(symbol: &str, err: crate::core::FbError) -> Response {
    tracing::error!(symbol, error = %err, "widget render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}

/// `GET /`: default chart plus the market news list.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let widget = ChartWidget::new(state.config.chart.default_symbol.clone())
        .theme(state.config.widget.theme.clone());
    let chart = match widget.render_html() {
        Ok(html) => html,
        Err(err) => return render_failed(&widget.symbol, err),
    };
    let body = format!(
        concat!(
            "<main class=\"grid gap-4\">",
            "<section class=\"h-[600px]\">{chart}</section>",
            "<section><h2>Market News</h2>{news}</section>",
            "</main>"
        ),
        chart = chart,
        news = render_news_list(market_news()),
    );
    Html(layout("Dashboard", &body)).into_response()
}

/// `GET /chart?symbol=..&asset=stock|crypto`
pub async fn chart_page(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = ChartPageQuery::from_query_str(raw.as_deref().unwrap_or_default());
    let is_stock = match query.asset.as_deref() {
        None | Some("") | Some("stock") => true,
        Some("crypto") => false,
        Some(_) => return ApiError::Validation(INVALID_ASSET).into_response(),
    };
    let symbol = query
        .symbol
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.config.chart.default_symbol.clone());

    let widget = ChartWidget::new(symbol)
        .stock(is_stock)
        .theme(state.config.widget.theme.clone());
    match widget.render_html() {
        Ok(chart) => Html(layout(
            &widget.resolved_symbol(),
            &format!("<main class=\"h-screen\">{chart}</main>"),
        ))
        .into_response(),
        Err(err) => render_failed(&widget.symbol, err),
    }
}

/// `GET /assets/widget-loader.js`
pub async fn widget_loader() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        WIDGET_LOADER,
    )
}
