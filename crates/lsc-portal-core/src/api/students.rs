//! Student admissions.

use crate::models::{NewStudent, Student};

use super::{ApiClient, ApiError};

const STUDENTS_PATH: &str = "/students/";

impl ApiClient {
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get(STUDENTS_PATH).await
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, ApiError> {
        self.get(&format!("{}{}/", STUDENTS_PATH, id)).await
    }

    /// Students enrolled in one programme
    pub async fn students_by_program(&self, program_id: i64) -> Result<Vec<Student>, ApiError> {
        self.get(&format!("{}by_program/?program_id={}", STUDENTS_PATH, program_id))
            .await
    }

    pub async fn create_student(&self, student: &NewStudent) -> Result<Student, ApiError> {
        self.post(STUDENTS_PATH, student).await
    }

    pub async fn update_student(&self, id: i64, student: &NewStudent) -> Result<Student, ApiError> {
        self.put(&format!("{}{}/", STUDENTS_PATH, id), student).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("{}{}/", STUDENTS_PATH, id)).await
    }
}
