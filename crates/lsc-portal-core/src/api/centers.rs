//! LSC centre management, keyed by centre code rather than numeric id.

use tracing::debug;

use crate::models::{LscCenter, LscCenterPage, LscCenterUpdate, NewLscCenter};
use crate::validation;

use super::{ApiClient, ApiError};

const CENTERS_PATH: &str = "/auth/lsc-centers/";

impl ApiClient {
    pub async fn list_lsc_centers(&self) -> Result<Vec<LscCenter>, ApiError> {
        let page: LscCenterPage = self.get(CENTERS_PATH).await?;
        debug!(count = page.results.len(), "Fetched LSC centers");
        Ok(page.results)
    }

    pub async fn get_lsc_center(&self, lsc_number: &str) -> Result<LscCenter, ApiError> {
        self.get(&self.keyed_path(CENTERS_PATH, lsc_number)).await
    }

    pub async fn create_lsc_center(&self, center: &NewLscCenter) -> Result<LscCenter, ApiError> {
        self.post(CENTERS_PATH, center).await
    }

    /// Create a centre after checking it against the loaded list.
    /// A duplicate code or email fails without contacting the backend.
    pub async fn create_lsc_center_checked(
        &self,
        existing: &[LscCenter],
        center: &NewLscCenter,
    ) -> Result<LscCenter, ApiError> {
        validation::check_new_center(existing, center)?;
        self.create_lsc_center(center).await
    }

    /// Update the centre currently stored under `lsc_number`
    pub async fn update_lsc_center(
        &self,
        lsc_number: &str,
        update: &LscCenterUpdate,
    ) -> Result<LscCenter, ApiError> {
        self.put(&self.keyed_path(CENTERS_PATH, lsc_number), update).await
    }

    /// Update `current` after checking the new code and email against the loaded list
    pub async fn update_lsc_center_checked(
        &self,
        existing: &[LscCenter],
        current: &LscCenter,
        update: &LscCenterUpdate,
    ) -> Result<LscCenter, ApiError> {
        validation::check_center_update(existing, current.id, update)?;
        self.update_lsc_center(&current.lsc_number, update).await
    }

    pub async fn delete_lsc_center(&self, lsc_number: &str) -> Result<(), ApiError> {
        self.delete(&self.keyed_path(CENTERS_PATH, lsc_number)).await
    }
}
