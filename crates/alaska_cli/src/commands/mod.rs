//! CLI commands.

pub mod bears;
pub mod info;
pub mod wait;

use alaska_core::{AlaskaClient, AlaskaError, Config};
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use tracing::debug;

/// Options shared by every subcommand.
pub struct GlobalOpts {
    pub config: PathBuf,
    pub base_url: Option<String>,
}

impl GlobalOpts {
    /// Config file, then ALASKA_BASE_URL, then --base-url.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?
            .apply_env();
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        debug!(base_url = %config.service.base_url, "using service");
        Ok(config)
    }

    pub fn client(&self) -> Result<AlaskaClient> {
        let config = self.load_config()?;
        Ok(AlaskaClient::new(config)?)
    }
}

/// Print a recovery hint for library errors that carry one.
pub fn print_suggestion(err: &anyhow::Error) {
    let hint = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<AlaskaError>())
        .and_then(AlaskaError::recovery_suggestion);
    if let Some(hint) = hint {
        eprintln!("{} {}", style("hint:").yellow().bold(), hint);
    }
}
