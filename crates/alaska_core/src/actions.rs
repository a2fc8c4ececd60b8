//! Composite "user action" operations.
//!
//! Each one performs an HTTP call, requires a 200 OK, and only then returns.
//! Nothing is retried.

use crate::client::AlaskaClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{BearRecord, BearType};
use crate::verify::check_response_ok;

impl AlaskaClient {
    /// Info endpoint smoke check.
    pub fn user_get_info(&self) -> Result<ApiResponse> {
        self.reporter().step("User gets info");
        let response = self.get_info()?;
        check_response_ok(&response)?;
        Ok(response)
    }

    /// Create a bear. The new id is only visible through a later read.
    pub fn user_create_bear(
        &self,
        bear_type: BearType,
        name: &str,
        age: f64,
    ) -> Result<ApiResponse> {
        self.reporter().step("User creates bear");
        let response = self.create_new_bear(bear_type, name, age)?;
        check_response_ok(&response)?;
        Ok(response)
    }

    /// Replace all mutable fields of a bear.
    pub fn user_update_bear(
        &self,
        bear_id: u64,
        bear_type: BearType,
        name: &str,
        age: f64,
    ) -> Result<ApiResponse> {
        self.reporter().step("User updates bear");
        let response = self.update_bear(bear_id, bear_type, name, age)?;
        check_response_ok(&response)?;
        Ok(response)
    }

    pub fn user_get_one_bear(&self, bear_id: u64) -> Result<ApiResponse> {
        self.reporter().step("User gets one bear");
        let response = self.get_one_bear(bear_id)?;
        check_response_ok(&response)?;
        Ok(response)
    }

    pub fn user_delete_one_bear(&self, bear_id: u64) -> Result<ApiResponse> {
        self.reporter().step("User deletes one bear");
        let response = self.delete_one_bear(bear_id)?;
        check_response_ok(&response)?;
        Ok(response)
    }

    /// Remove every bear. Succeeds on an empty collection too.
    pub fn user_clean_all_bears(&self) -> Result<ApiResponse> {
        self.reporter().step("User cleans all bears");
        let response = self.clean_bears()?;
        check_response_ok(&response)?;
        Ok(response)
    }

    /// All bears, in the order the service returned them.
    pub fn user_view_all_bears(&self) -> Result<Vec<BearRecord>> {
        self.reporter().step("User views all bears");
        let response = self.get_all_bears()?;
        check_response_ok(&response)?;
        response.json()
    }
}
