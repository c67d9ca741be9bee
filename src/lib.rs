//! finboard: a small financial dashboard service.
//!
//! - [`api`]: `GET /api/stock` passes the provider's chart payload through, plus the HTML pages.
//! - [`chart`]: the Yahoo Finance v8 chart client.
//! - [`widget`]: TradingView widget configuration tied to its container's lifetime.
//! - [`news`]: the compiled-in market news list.

pub mod api;
pub mod app;
pub mod chart;
pub mod config;
pub mod core;
pub mod markup;
pub mod news;
pub mod widget;

pub use chart::{BarSize, Chart, ChartBuilder, ChartMeta, ChartQuote, Range};
pub use config::{Config, RangePolicy};
pub use crate::core::{ChartClient, ChartRequest, ChartService, ChartWindow, FbError};
pub use news::{MARKET_NEWS, NewsItem};
pub use widget::{ChartWidget, Container, HtmlContainer, MountedChart, WidgetConfig};
