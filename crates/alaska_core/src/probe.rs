//! Readiness probe.

use crate::client::AlaskaClient;
use crate::error::{AlaskaError, Result};
use reqwest::StatusCode;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outcome of a single readiness probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    /// Unreachable or answering with something other than 200.
    NotReady(String),
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// GET `url` once. Transport failures become [`Readiness::NotReady`].
pub fn is_responsive(url: &str) -> Readiness {
    classify(reqwest::blocking::get(url))
}

fn classify(result: reqwest::Result<reqwest::blocking::Response>) -> Readiness {
    match result {
        Ok(response) if response.status() == StatusCode::OK => Readiness::Ready,
        Ok(response) => Readiness::NotReady(format!("status {}", response.status())),
        Err(e) => Readiness::NotReady(e.to_string()),
    }
}

impl AlaskaClient {
    /// Probe the info endpoint once.
    pub fn probe(&self) -> Readiness {
        let url = self.config().info_url();
        classify(self.http().get(&url).send())
    }

    /// Poll the info endpoint with the configured timeout and pause.
    pub fn wait_until_responsive(&self) -> Result<()> {
        let readiness = &self.config().readiness;
        self.wait_until_responsive_with(readiness.timeout(), readiness.pause())
    }

    /// Poll the info endpoint until it answers 200 or `timeout` elapses.
    pub fn wait_until_responsive_with(&self, timeout: Duration, pause: Duration) -> Result<()> {
        self.reporter().step("Wait for service");
        let started = Instant::now();

        loop {
            let reason = match self.probe() {
                Readiness::Ready => {
                    debug!(elapsed_ms = started.elapsed().as_millis(), "service ready");
                    return Ok(());
                }
                Readiness::NotReady(reason) => reason,
            };

            if started.elapsed() >= timeout {
                let url = self.config().info_url();
                warn!("Service at {} not ready: {}", url, reason);
                return Err(AlaskaError::NotReady {
                    url,
                    waited_ms: started.elapsed().as_millis(),
                    reason,
                });
            }

            debug!(%reason, "service not ready yet");
            thread::sleep(pause);
        }
    }
}
