//! Programmes and read-only reports.

use tracing::debug;

use crate::models::{Dashboard, Program, ReportSummary, Student};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.get("/programs/").await
    }

    pub async fn report_summary(&self) -> Result<ReportSummary, ApiError> {
        self.get("/reports/summary/").await
    }

    /// Every application on record
    pub async fn application_report(&self) -> Result<Vec<Student>, ApiError> {
        self.get("/reports/application_report/").await
    }

    /// Students whose payment is still pending
    pub async fn unpaid_report(&self) -> Result<Vec<Student>, ApiError> {
        self.get("/reports/unpaid_report/").await
    }

    /// Students whose admission is confirmed
    pub async fn confirmed_report(&self) -> Result<Vec<Student>, ApiError> {
        self.get("/reports/confirmed_report/").await
    }

    /// Fetch the summary and the three student reports concurrently.
    /// Fails with the first error encountered.
    pub async fn fetch_dashboard(&self) -> Result<Dashboard, ApiError> {
        let (summary, applications, unpaid, confirmed) = tokio::try_join!(
            self.report_summary(),
            self.application_report(),
            self.unpaid_report(),
            self.confirmed_report(),
        )?;
        debug!(
            applications = applications.len(),
            unpaid = unpaid.len(),
            confirmed = confirmed.len(),
            "Fetched dashboard"
        );
        Ok(Dashboard {
            summary,
            applications,
            unpaid,
            confirmed,
        })
    }
}
