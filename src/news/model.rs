use serde::Serialize;

/// A single headline in the market news list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// The headline.
    pub title: &'static str,
    /// Relative publication time as displayed, e.g. "2 hours ago".
    pub time: &'static str,
    /// The publisher.
    pub source: &'static str,
}
