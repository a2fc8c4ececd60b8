//! HTTP operation layer.
//!
//! One method per REST endpoint. These only build and send the request; the
//! returned [`ApiResponse`] is not validated. See the `user_*` operations for
//! the validated variants.

use crate::config::Config;
use crate::error::{AlaskaError, Result};
use crate::report::{Reporter, TracingReporter};
use crate::response::ApiResponse;
use crate::types::{BearPayload, BearType};
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Blocking client for one bear service instance.
pub struct AlaskaClient {
    config: Config,
    http: reqwest::blocking::Client,
    reporter: Arc<dyn Reporter>,
}

impl AlaskaClient {
    /// Build a client for the configured service.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = config.transport.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.transport.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AlaskaError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http,
            reporter: Arc::new(TracingReporter),
        })
    }

    /// Replace the narration sink (defaults to [`TracingReporter`]).
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::blocking::Client {
        &self.http
    }

    pub(crate) fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// `GET /info`
    pub fn get_info(&self) -> Result<ApiResponse> {
        self.send("Get info", Method::GET, self.config.info_url(), None)
    }

    /// `DELETE /bear`
    pub fn clean_bears(&self) -> Result<ApiResponse> {
        self.send("Clean bears", Method::DELETE, self.config.bear_url(), None)
    }

    /// `GET /bear`
    pub fn get_all_bears(&self) -> Result<ApiResponse> {
        self.send("Get all bears", Method::GET, self.config.bear_url(), None)
    }

    /// `GET /bear/{id}`
    pub fn get_one_bear(&self, bear_id: u64) -> Result<ApiResponse> {
        self.send(
            "Get one bear",
            Method::GET,
            self.config.bear_item_url(bear_id),
            None,
        )
    }

    /// `DELETE /bear/{id}`
    pub fn delete_one_bear(&self, bear_id: u64) -> Result<ApiResponse> {
        self.send(
            "Delete one bear",
            Method::DELETE,
            self.config.bear_item_url(bear_id),
            None,
        )
    }

    /// `POST /bear`
    pub fn create_new_bear(
        &self,
        bear_type: BearType,
        name: &str,
        age: f64,
    ) -> Result<ApiResponse> {
        let payload = BearPayload::new(bear_type, name, age);
        self.send(
            "Create new bear",
            Method::POST,
            self.config.bear_url(),
            Some(&payload),
        )
    }

    /// `PUT /bear/{id}`
    pub fn update_bear(
        &self,
        bear_id: u64,
        bear_type: BearType,
        name: &str,
        age: f64,
    ) -> Result<ApiResponse> {
        let payload = BearPayload::new(bear_type, name, age);
        self.send(
            "Update bear",
            Method::PUT,
            self.config.bear_item_url(bear_id),
            Some(&payload),
        )
    }

    fn send(
        &self,
        step: &str,
        method: Method,
        url: String,
        payload: Option<&BearPayload>,
    ) -> Result<ApiResponse> {
        self.reporter.step(step);
        debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(payload) = payload {
            // Sets Content-Type: application/json
            request = request.json(payload);
        }

        let result = request
            .send()
            .map_err(|source| AlaskaError::Transport {
                method: method.to_string(),
                url: url.clone(),
                source,
            })
            .and_then(|response| ApiResponse::read(method, &url, response));

        match &result {
            Ok(response) => {
                debug!(status = %response.status(), url = %url, "received response");
                self.reporter
                    .attach("status", &response.status().as_u16().to_string());
                self.reporter.attach("body", response.body());
            }
            Err(e) => self.reporter.attach("error", &e.to_string()),
        }
        result
    }
}
