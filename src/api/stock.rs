use axum::Json;
use axum::extract::{RawQuery, State};
use std::sync::Arc;

use crate::api::{ApiError, AppState};
use crate::chart::{BarSize, Chart, Range};
use crate::config::RangePolicy;
use crate::core::{ChartRequest, ChartWindow};

pub const TICKER_REQUIRED: &str = "Ticker symbol is required";
pub const INVALID_INTERVAL: &str = "Invalid interval. Use '1d', '1w', '1mo', '3m', or '1y'.";

/// The time ranges a client may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Day,
    Week,
    #[default]
    Month,
    ThreeMonths,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::ThreeMonths,
        TimeRange::Year,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1d" => Some(TimeRange::Day),
            "1w" => Some(TimeRange::Week),
            "1mo" => Some(TimeRange::Month),
            "3m" => Some(TimeRange::ThreeMonths),
            "1y" => Some(TimeRange::Year),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Day => "1d",
            TimeRange::Week => "1w",
            TimeRange::Month => "1mo",
            TimeRange::ThreeMonths => "3m",
            TimeRange::Year => "1y",
        }
    }

    /// Provider bar size and range for this time range.
    pub fn provider_window(self) -> (BarSize, Range) {
        match self {
            TimeRange::Day => (BarSize::I5m, Range::D1),
            TimeRange::Week => (BarSize::I60m, Range::D5),
            TimeRange::Month => (BarSize::D1, Range::M1),
            TimeRange::ThreeMonths => (BarSize::D1, Range::M3),
            TimeRange::Year => (BarSize::W1, Range::Y1),
        }
    }
}

/// Query parameters of `GET /api/stock`. The first occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockQuery {
    pub ticker: Option<String>,
    pub interval: Option<String>,
}

impl StockQuery {
    pub fn from_query_str(raw: &str) -> Self {
        let mut query = StockQuery::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "ticker" if query.ticker.is_none() => query.ticker = Some(value.into_owned()),
                "interval" if query.interval.is_none() => {
                    query.interval = Some(value.into_owned())
                }
                _ => {}
            }
        }
        query
    }

    /// Checks the ticker first, then the interval. Empty values count as absent.
    pub fn validate(&self) -> Result<(&str, TimeRange), ApiError> {
        let ticker = self
            .ticker
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::Validation(TICKER_REQUIRED))?;
        let range = match self.interval.as_deref().filter(|i| !i.is_empty()) {
            None => TimeRange::default(),
            Some(value) => {
                TimeRange::parse(value).ok_or(ApiError::Validation(INVALID_INTERVAL))?
            }
        };
        Ok((ticker, range))
    }
}

/// Builds the provider request for `range` under `policy`.
///
/// With [`RangePolicy::Fixed`] the requested range is ignored: every call asks for daily bars
/// from `fixed_start` until `now`.
pub fn plan_request(
    policy: RangePolicy,
    range: TimeRange,
    fixed_start: i64,
    now: i64,
) -> ChartRequest {
    match policy {
        RangePolicy::Fixed => ChartRequest {
            window: ChartWindow::Period(fixed_start, now),
            interval: BarSize::D1,
            include_events: true,
        },
        RangePolicy::Interval => {
            let (interval, range) = range.provider_window();
            ChartRequest {
                window: ChartWindow::Range(range),
                interval,
                include_events: true,
            }
        }
    }
}

/// `GET /api/stock?ticker=..&interval=..`
pub async fn stock(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Chart>, ApiError> {
    let query = StockQuery::from_query_str(raw.as_deref().unwrap_or_default());
    let (ticker, range) = query.validate().inspect_err(|err| {
        tracing::debug!(?query, error = err.message(), "rejected stock query");
    })?;

    let fixed_start = state.config.fixed_start_ts()?;
    let now = chrono::Utc::now().timestamp();
    let req = plan_request(state.config.chart.range_policy, range, fixed_start, now);

    match state.charts.fetch_chart(ticker, req).await {
        Ok(chart) => Ok(Json(chart)),
        Err(err) => {
            tracing::warn!(ticker, interval = range.as_str(), error = %err, "chart fetch failed");
            Err(err.into())
        }
    }
}
