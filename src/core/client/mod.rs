//! Chart provider client + builder.

mod constants;

pub use constants::DEFAULT_BASE_CHART;

use crate::core::FbError;
use constants::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A thin handle over a pooled HTTP client and the chart endpoint base.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChartClient {
    http: Client,
    base_chart: Url,
}

impl ChartClient {
    /// Create a new builder.
    pub fn builder() -> ChartClientBuilder {
        ChartClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The chart API base the symbol is joined onto.
    pub fn base_chart(&self) -> &Url {
        &self.base_chart
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ChartClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ChartClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<ChartClient, FbError> {
        let base_chart = match self.base_chart {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ChartClient { http, base_chart })
    }
}
