//! Response and record verification.

use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{BearRecord, BearType};
use reqwest::StatusCode;
use thiserror::Error;

/// Ways a response can break the service contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// Status code other than the expected one.
    #[error("{request}: expected status {expected}, got {actual} (body: {body:?})")]
    Status {
        /// Request line that produced the response
        request: String,
        expected: StatusCode,
        actual: StatusCode,
        /// Raw response body
        body: String,
    },

    /// A record field differs from the expected value.
    #[error("bear {bear_id}: field {field} expected {expected}, got {actual}")]
    Field {
        bear_id: u64,
        /// Name of the mismatched field
        field: &'static str,
        expected: String,
        actual: String,
    },
}

/// Fails unless the response status is exactly 200 OK.
pub fn check_response_ok(response: &ApiResponse) -> Result<()> {
    if response.status() != StatusCode::OK {
        return Err(Violation::Status {
            request: response.request_line(),
            expected: StatusCode::OK,
            actual: response.status(),
            body: response.body().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Fails unless the record carries exactly the expected type, name and age.
///
/// Age is compared with exact floating-point equality.
#[allow(clippy::float_cmp)]
pub fn check_bear(
    record: &BearRecord,
    expected_type: BearType,
    expected_name: &str,
    expected_age: f64,
) -> Result<()> {
    let mismatch = |field: &'static str, expected: String, actual: String| Violation::Field {
        bear_id: record.bear_id,
        field,
        expected,
        actual,
    };

    if record.bear_type != expected_type {
        return Err(mismatch(
            "bear_type",
            expected_type.to_string(),
            record.bear_type.to_string(),
        )
        .into());
    }
    if record.bear_name != expected_name {
        return Err(mismatch(
            "bear_name",
            format!("{:?}", expected_name),
            format!("{:?}", record.bear_name),
        )
        .into());
    }
    if record.bear_age != expected_age {
        return Err(mismatch(
            "bear_age",
            expected_age.to_string(),
            record.bear_age.to_string(),
        )
        .into());
    }
    Ok(())
}
