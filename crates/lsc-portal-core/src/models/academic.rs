//! Attendance and internal assessment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Submitted,
    #[default]
    Pending,
    Graded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub student: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub application_no: Option<String>,
    #[serde(deserialize_with = "super::decimal::deserialize")]
    pub attendance_percentage: f64,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Body for creating or updating an attendance record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendance {
    pub student: i64,
    pub attendance_percentage: f64,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentMark {
    pub id: i64,
    pub reg_no: String,
    pub student: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub program: i64,
    #[serde(default)]
    pub program_name: Option<String>,
    /// Paper code
    pub p_code: String,
    #[serde(deserialize_with = "super::decimal::deserialize")]
    pub internal_marks: f64,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Body for creating or updating an assignment mark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignmentMark {
    pub reg_no: String,
    pub student: i64,
    pub program: i64,
    pub p_code: String,
    pub internal_marks: f64,
    pub status: AssignmentStatus,
}
