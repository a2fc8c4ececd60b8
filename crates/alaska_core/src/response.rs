//! Raw service responses.

use crate::error::{AlaskaError, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// A completed HTTP exchange with the body read eagerly.
///
/// Returned unvalidated by the operation layer; composite operations pass it
/// through [`check_response_ok`](crate::check_response_ok) first.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    method: Method,
    url: String,
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(
        method: Method,
        url: impl Into<String>,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Drain a transport response into an `ApiResponse`.
    pub(crate) fn read(
        method: Method,
        url: &str,
        response: reqwest::blocking::Response,
    ) -> Result<Self> {
        let status = response.status();
        let body = response.text().map_err(|source| AlaskaError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })?;
        Ok(Self::new(method, url, status, body))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// `"GET http://host/bear"`, used in error messages and narration.
    pub fn request_line(&self) -> String {
        format!("{} {}", self.method, self.url)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| AlaskaError::Decode {
            context: format!("response of {}", self.request_line()),
            source,
        })
    }
}
