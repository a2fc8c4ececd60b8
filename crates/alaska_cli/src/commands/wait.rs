//! Readiness wait command.

use super::GlobalOpts;
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Block until the service is responsive.
pub fn run(opts: &GlobalOpts, timeout_secs: Option<f64>, pause_ms: Option<u64>) -> Result<()> {
    let mut config = opts.load_config()?;
    if let Some(secs) = timeout_secs {
        config.readiness.timeout_secs = secs;
    }
    if let Some(ms) = pause_ms {
        config.readiness.pause_ms = ms;
    }
    let url = config.info_url();
    let client = alaska_core::AlaskaClient::new(config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Waiting for {}...", url));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = client.wait_until_responsive();
    pb.finish_and_clear();
    result?;

    println!("{} {} is ready", style("✓").green(), style(url).cyan());
    Ok(())
}
