use crate::core::{ChartClient, FbError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::time::Duration;
use url::Url;

type Result<T> = std::result::Result<T, FbError>;

/// How the data route turns a requested time range into a provider call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangePolicy {
    /// Every request asks for daily bars from `chart.fixed_start` until now.
    Fixed,
    /// The requested range selects the provider range and bar size.
    Interval,
}

impl RangePolicy {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "fixed" => Ok(RangePolicy::Fixed),
            "interval" => Ok(RangePolicy::Interval),
            other => Err(FbError::Config(format!(
                "range_policy must be 'fixed' or 'interval', got '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RangePolicy::Fixed => "fixed",
            RangePolicy::Interval => "interval",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub base_chart: String,
    pub user_agent: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub range_policy: RangePolicy,
    pub fixed_start: String,
    pub default_symbol: String,
}

#[derive(Clone, Debug)]
pub struct WidgetSettings {
    pub theme: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub chart: ChartConfig,
    pub widget: WidgetSettings,
}

#[derive(Clone, Debug, Deserialize)]
struct ServerConfigFile {
    addr: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct ProviderConfigFile {
    base_chart: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
struct ChartConfigFile {
    range_policy: Option<String>,
    fixed_start: Option<String>,
    default_symbol: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct WidgetConfigFile {
    theme: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct ConfigFile {
    server: Option<ServerConfigFile>,
    provider: Option<ProviderConfigFile>,
    chart: Option<ChartConfigFile>,
    widget: Option<WidgetConfigFile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                addr: "127.0.0.1:3000".to_string(),
            },
            provider: ProviderConfig {
                base_chart: crate::core::client::DEFAULT_BASE_CHART.to_string(),
                user_agent: None,
                timeout_secs: 15,
                connect_timeout_secs: 5,
            },
            chart: ChartConfig {
                range_policy: RangePolicy::Fixed,
                fixed_start: "2021-05-08".to_string(),
                default_symbol: "AAPL".to_string(),
            },
            widget: WidgetSettings {
                theme: "dark".to_string(),
            },
        }
    }
}

impl Config {
    /// Loads `path`, applies `FINBOARD_*` overrides and validates. A missing file yields defaults.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => Config::from_toml_str(&content)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path, "config file not found, using defaults");
                Config::default()
            }
            Err(err) => {
                return Err(FbError::Config(format!("failed to read config: {err}")));
            }
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|err| FbError::Config(format!("failed to parse config: {err}")))?;
        Config::from_file(file)
    }

    fn from_file(file: ConfigFile) -> Result<Self> {
        let mut config = Config::default();

        if let Some(server) = file.server {
            if let Some(value) = server.addr {
                config.server.addr = value;
            }
        }

        if let Some(provider) = file.provider {
            if let Some(value) = provider.base_chart {
                config.provider.base_chart = value;
            }
            if let Some(value) = provider.user_agent {
                config.provider.user_agent = Some(value);
            }
            if let Some(value) = provider.timeout_secs {
                config.provider.timeout_secs = value;
            }
            if let Some(value) = provider.connect_timeout_secs {
                config.provider.connect_timeout_secs = value;
            }
        }

        if let Some(chart) = file.chart {
            if let Some(value) = chart.range_policy {
                config.chart.range_policy = RangePolicy::parse(&value)?;
            }
            if let Some(value) = chart.fixed_start {
                config.chart.fixed_start = value;
            }
            if let Some(value) = chart.default_symbol {
                config.chart.default_symbol = value;
            }
        }

        if let Some(widget) = file.widget {
            if let Some(value) = widget.theme {
                config.widget.theme = value;
            }
        }

        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup; `apply_env_overrides` passes the process
    /// environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("FINBOARD_ADDR") {
            self.server.addr = value;
        }
        if let Some(value) = lookup("FINBOARD_BASE_CHART") {
            self.provider.base_chart = value;
        }
        if let Some(value) = lookup("FINBOARD_USER_AGENT") {
            self.provider.user_agent = Some(value);
        }
        if let Some(value) = lookup("FINBOARD_TIMEOUT_SECS") {
            self.provider.timeout_secs = parse_u64("FINBOARD_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = lookup("FINBOARD_CONNECT_TIMEOUT_SECS") {
            self.provider.connect_timeout_secs =
                parse_u64("FINBOARD_CONNECT_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = lookup("FINBOARD_RANGE_POLICY") {
            self.chart.range_policy = RangePolicy::parse(&value)?;
        }
        if let Some(value) = lookup("FINBOARD_FIXED_START") {
            self.chart.fixed_start = value;
        }
        if let Some(value) = lookup("FINBOARD_DEFAULT_SYMBOL") {
            self.chart.default_symbol = value;
        }
        if let Some(value) = lookup("FINBOARD_WIDGET_THEME") {
            self.widget.theme = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.addr.trim().is_empty() {
            return Err(FbError::Config("server.addr must be set".into()));
        }
        let base = Url::parse(&self.provider.base_chart)
            .map_err(|err| FbError::Config(format!("provider.base_chart is not a URL: {err}")))?;
        if !base.path().ends_with('/') {
            return Err(FbError::Config(
                "provider.base_chart must end with '/' so the symbol can be appended".into(),
            ));
        }
        if self.provider.timeout_secs == 0 {
            return Err(FbError::Config("provider.timeout_secs must be positive".into()));
        }
        self.fixed_start_ts()?;
        if self.chart.default_symbol.trim().is_empty() {
            return Err(FbError::Config("chart.default_symbol must be set".into()));
        }
        if !matches!(self.widget.theme.as_str(), "dark" | "light") {
            return Err(FbError::Config("widget.theme must be dark or light".into()));
        }
        Ok(())
    }

    /// `chart.fixed_start` as Unix seconds at midnight UTC.
    pub fn fixed_start_ts(&self) -> Result<i64> {
        let date = NaiveDate::parse_from_str(self.chart.fixed_start.trim(), "%Y-%m-%d").map_err(
            |err| FbError::Config(format!("chart.fixed_start must be YYYY-MM-DD: {err}")),
        )?;
        date.and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .ok_or_else(|| FbError::Config("chart.fixed_start is out of range".into()))
    }

    /// Builds the provider client described by `[provider]`.
    pub fn build_client(&self) -> Result<ChartClient> {
        let mut builder = ChartClient::builder()
            .base_chart(Url::parse(&self.provider.base_chart)?)
            .timeout(Duration::from_secs(self.provider.timeout_secs))
            .connect_timeout(Duration::from_secs(self.provider.connect_timeout_secs));
        if let Some(ua) = &self.provider.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        builder.build()
    }
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|err| FbError::Config(format!("{key} must be u64: {err}")))
}
