//! Attendance, assignment marks and counsellor records.

use crate::models::{
    AssignmentMark, Attendance, Counsellor, NewAssignmentMark, NewAttendance, NewCounsellor,
};
use crate::validation;

use super::{ApiClient, ApiError};

const ATTENDANCE_PATH: &str = "/attendance/";
const MARKS_PATH: &str = "/assignment-marks/";
const COUNSELLORS_PATH: &str = "/counsellors/";

impl ApiClient {
    // ===== Attendance =====

    pub async fn list_attendance(&self) -> Result<Vec<Attendance>, ApiError> {
        self.get(ATTENDANCE_PATH).await
    }

    pub async fn create_attendance(&self, record: &NewAttendance) -> Result<Attendance, ApiError> {
        self.post(ATTENDANCE_PATH, record).await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        record: &NewAttendance,
    ) -> Result<Attendance, ApiError> {
        self.put(&format!("{}{}/", ATTENDANCE_PATH, id), record).await
    }

    // ===== Assignment marks =====

    pub async fn list_marks(&self) -> Result<Vec<AssignmentMark>, ApiError> {
        self.get(MARKS_PATH).await
    }

    pub async fn marks_by_program(&self, program_id: i64) -> Result<Vec<AssignmentMark>, ApiError> {
        self.get(&format!("{}by_program/?program_id={}", MARKS_PATH, program_id))
            .await
    }

    pub async fn create_mark(&self, mark: &NewAssignmentMark) -> Result<AssignmentMark, ApiError> {
        self.post(MARKS_PATH, mark).await
    }

    pub async fn update_mark(
        &self,
        id: i64,
        mark: &NewAssignmentMark,
    ) -> Result<AssignmentMark, ApiError> {
        self.put(&format!("{}{}/", MARKS_PATH, id), mark).await
    }

    // ===== Counsellors =====

    pub async fn list_counsellors(&self) -> Result<Vec<Counsellor>, ApiError> {
        self.get(COUNSELLORS_PATH).await
    }

    pub async fn create_counsellor(&self, counsellor: &NewCounsellor) -> Result<Counsellor, ApiError> {
        self.post(COUNSELLORS_PATH, counsellor).await
    }

    /// Create a counsellor unless the email or Aadhaar number is already loaded
    pub async fn create_counsellor_checked(
        &self,
        existing: &[Counsellor],
        counsellor: &NewCounsellor,
    ) -> Result<Counsellor, ApiError> {
        validation::check_new_counsellor(existing, counsellor)?;
        self.create_counsellor(counsellor).await
    }

    pub async fn update_counsellor(
        &self,
        id: i64,
        counsellor: &NewCounsellor,
    ) -> Result<Counsellor, ApiError> {
        self.put(&format!("{}{}/", COUNSELLORS_PATH, id), counsellor)
            .await
    }
}
