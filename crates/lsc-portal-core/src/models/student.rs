use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Community {
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdmissionStatus {
    #[default]
    Applied,
    Confirmed,
    Rejected,
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl std::fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdmissionStatus::Applied => write!(f, "Applied"),
            AdmissionStatus::Confirmed => write!(f, "Confirmed"),
            AdmissionStatus::Rejected => write!(f, "Rejected"),
            AdmissionStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Student admission record.
/// `program` and `counsellor` are foreign keys; the `*_name` fields are
/// read-only joins added by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub application_no: String,
    pub name: String,
    pub program: i64,
    #[serde(default)]
    pub program_name: Option<String>,
    pub community: Community,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub admission_status: AdmissionStatus,
    #[serde(default)]
    pub counsellor: Option<i64>,
    #[serde(default)]
    pub counsellor_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Match against application number or name
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || contains_ignore_case(&self.application_no, term)
            || contains_ignore_case(&self.name, term)
    }

    pub fn is_unpaid(&self) -> bool {
        self.payment_status == PaymentStatus::Pending
    }
}

/// Body for creating or updating a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub application_no: String,
    pub name: String,
    pub program: i64,
    pub community: Community,
    pub payment_status: PaymentStatus,
    pub admission_status: AdmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counsellor: Option<i64>,
}
