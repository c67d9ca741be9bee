use crate::chart::{BarSize, Chart, ChartBuilder, Range};
use crate::core::{ChartClient, FbError};

/// Which time window a chart request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartWindow {
    /// A relative range ending now (e.g. `5d`, `1y`).
    Range(Range),
    /// An absolute `(start, end)` window in Unix seconds.
    Period(i64, i64),
}

/// Encapsulates all parameters for a single chart request.
///
/// The HTTP layer builds one of these and hands it to a [`ChartService`]; it never touches the
/// provider URL format directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRequest {
    /// The time window to fetch.
    pub window: ChartWindow,
    /// The bar size of each quote.
    pub interval: BarSize,
    /// Whether to ask for dividend and split events.
    pub include_events: bool,
}

/// A trait for services that can fetch a chart payload for one symbol.
///
/// It is implemented by [`ChartClient`]; tests substitute their own implementations to simulate
/// provider behavior.
pub trait ChartService: Send + Sync {
    /// Fetches the chart for `symbol`.
    fn fetch_chart<'a>(
        &'a self,
        symbol: &'a str,
        req: ChartRequest,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<Chart, FbError>> + Send + 'a>>;
}

impl ChartService for ChartClient {
    fn fetch_chart<'a>(
        &'a self,
        symbol: &'a str,
        req: ChartRequest,
    ) -> core::pin::Pin<Box<dyn core::future::Future<Output = Result<Chart, FbError>> + Send + 'a>>
    {
        Box::pin(async move {
            let mut builder = ChartBuilder::new(self, symbol)
                .interval(req.interval)
                .events(req.include_events);
            builder = match req.window {
                ChartWindow::Range(range) => builder.range(range),
                ChartWindow::Period(start, end) => builder.period(start, end),
            };
            builder.fetch().await
        })
    }
}
