//! Chart payloads from the provider's v8 chart endpoint.

mod assemble;
mod fetch;
mod model;
mod params;
mod wire;

pub use model::{Chart, ChartEvents, ChartMeta, ChartQuote, Dividend, Split};
pub use params::{BarSize, Range};

use crate::core::{ChartClient, FbError};
use fetch::fetch_chart;

/// A builder for fetching a chart for a single symbol.
#[derive(Clone)]
pub struct ChartBuilder {
    client: ChartClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: BarSize,
    include_events: bool,
}

impl ChartBuilder {
    /// Creates a new `ChartBuilder` for a given symbol. Defaults to one month of daily bars.
    pub fn new(client: &ChartClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Some(Range::M1),
            period: None,
            interval: BarSize::D1,
            include_events: true,
        }
    }

    /// Sets a relative time range for the request (e.g., `1y`, `5d`).
    ///
    /// This will override any previously set period.
    pub fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an absolute period as `(start, end)` Unix seconds.
    ///
    /// This will override any previously set range.
    pub fn period(mut self, start: i64, end: i64) -> Self {
        self.range = None;
        self.period = Some((start, end));
        self
    }

    /// Same as [`ChartBuilder::period`] with `chrono` timestamps.
    pub fn between(
        self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.period(start.timestamp(), end.timestamp())
    }

    /// Sets the bar size of each quote.
    pub fn interval(mut self, interval: BarSize) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether dividend and split events are requested. (Default: `true`)
    pub fn events(mut self, yes: bool) -> Self {
        self.include_events = yes;
        self
    }

    /// Executes the request.
    pub async fn fetch(self) -> Result<Chart, FbError> {
        fetch_chart(
            &self.client,
            &self.symbol,
            self.range,
            self.period,
            self.interval,
            self.include_events,
        )
        .await
    }
}
