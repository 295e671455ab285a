//! Programme lookup data and report aggregates.

use serde::{Deserialize, Serialize};

use super::Student;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Aggregate counts from `/reports/summary/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_applications: u64,
    pub confirmed_admissions: u64,
    pub pending_payments: u64,
    pub revenue_generated: u64,
}

impl ReportSummary {
    /// Share of applications that were confirmed, as a percentage
    pub fn confirmation_rate(&self) -> f64 {
        if self.total_applications == 0 {
            0.0
        } else {
            self.confirmed_admissions as f64 * 100.0 / self.total_applications as f64
        }
    }
}

/// Everything the dashboard shell shows, fetched in one go
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: ReportSummary,
    pub applications: Vec<Student>,
    pub unpaid: Vec<Student>,
    pub confirmed: Vec<Student>,
}
