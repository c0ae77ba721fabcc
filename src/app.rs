use std::path::PathBuf;

use tracing::debug;

use crate::config::{Config, default_config_path};
use crate::error::Result;

pub struct AppContext {
    pub config_path: Option<PathBuf>,
    pub config: Config,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let ctx = Self {
            config_path: cli.config.clone().or_else(default_config_path),
            config,
        };
        debug!(config_path = ?ctx.config_path, endpoint = %ctx.config.api.endpoint, "loaded config");

        Ok(ctx)
    }
}
