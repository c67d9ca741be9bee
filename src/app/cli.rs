use clap::Parser;

use crate::config::{Config, RangePolicy};
use crate::core::FbError;

/// Financial dashboard server.
#[derive(Debug, Parser)]
#[command(name = "finboard", version, about)]
pub struct Args {
    /// Path to the TOML config file.
    #[arg(short, long, default_value = "finboard.toml")]
    pub config: String,

    /// Bind address, overrides `server.addr`.
    #[arg(long)]
    pub addr: Option<String>,

    /// `fixed` or `interval`, overrides `chart.range_policy`.
    #[arg(long)]
    pub range_policy: Option<String>,
}

impl Args {
    /// Loads the config file and layers the flags on top.
    pub fn resolve_config(&self) -> Result<Config, FbError> {
        let mut config = Config::load(&self.config)?;
        if let Some(addr) = &self.addr {
            config.server.addr = addr.clone();
        }
        if let Some(policy) = &self.range_policy {
            config.chart.range_policy = RangePolicy::parse(policy)?;
        }
        config.validate()?;
        Ok(config)
    }
}
