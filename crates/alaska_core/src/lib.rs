//! Alaska Core Library
//!
//! Client and verification library for the Alaska bear service, providing:
//! - Typed calls for every REST endpoint
//! - The shared 200 OK success contract and record checks
//! - Composite "user action" operations that act and verify in one call
//! - A readiness probe for gating test runs
//! - Step narration for test reports
//!
//! # Quick Start
//!
//! ```no_run
//! use alaska_core::{check_bear, AlaskaClient, BearType, Config};
//!
//! let config = Config::default().with_base_url("http://localhost:8091");
//! let client = AlaskaClient::new(config).unwrap();
//! client.wait_until_responsive().unwrap();
//!
//! client.user_clean_all_bears().unwrap();
//! client.user_create_bear(BearType::Polar, "UMKA", 10.1).unwrap();
//!
//! let bears = client.user_view_all_bears().unwrap();
//! assert_eq!(bears.len(), 1);
//! check_bear(&bears[0], BearType::Polar, "UMKA", 10.1).unwrap();
//! ```
//!
//! # Errors
//!
//! Nothing is retried. Transport failures, contract violations and decode
//! failures all surface as [`AlaskaError`] at the point of detection:
//!
//! ```
//! use alaska_core::{check_response_ok, ApiResponse, Method, StatusCode};
//!
//! let url = "http://localhost/bear/1";
//! let response = ApiResponse::new(Method::GET, url, StatusCode::NOT_FOUND, "");
//! let err = check_response_ok(&response).unwrap_err();
//! assert!(err.is_contract_violation());
//! ```

mod actions;
mod client;
mod config;
mod error;
mod probe;
mod report;
mod response;
mod types;
mod verify;

pub use client::AlaskaClient;
pub use config::{
    Config, ReadinessConfig, ServiceConfig, TransportConfig, BASE_URL_ENV, DEFAULT_BASE_URL,
};
pub use error::{AlaskaError, Result};
pub use probe::{is_responsive, Readiness};
pub use report::{RecordingReporter, ReportEntry, Reporter, TeeReporter, TracingReporter};
pub use response::ApiResponse;
pub use types::{BearPayload, BearRecord, BearType};
pub use verify::{check_bear, check_response_ok, Violation};

pub use reqwest::{Method, StatusCode};
