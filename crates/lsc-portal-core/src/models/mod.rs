//! Data models for LSC portal entities.
//!
//! These are display DTOs defined by the backend serializers:
//!
//! - `LscCenter`: Learning Support Centre accounts, keyed by their code
//! - `Student`: admission records with payment and admission status
//! - `Attendance`, `AssignmentMark`: per-student academic records
//! - `Counsellor`: counsellor profiles assigned to a programme
//! - `Program`, `ReportSummary`, `Dashboard`: lookup and report data

pub mod academic;
pub mod center;
pub mod counsellor;
pub mod program;
pub mod student;

mod decimal;

pub use academic::{AssignmentMark, AssignmentStatus, Attendance, AttendanceStatus, NewAssignmentMark, NewAttendance};
pub use center::{filter_centers, LscCenter, LscCenterPage, LscCenterUpdate, NewLscCenter};
pub use counsellor::{Counsellor, Gender, NewCounsellor};
pub use program::{Dashboard, Program, ReportSummary};
pub use student::{AdmissionStatus, Community, NewStudent, PaymentStatus, Student};
