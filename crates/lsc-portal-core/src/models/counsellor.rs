use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Counsellor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counsellor {
    pub id: i64,
    pub counsellor_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub aadhaar_card: String,
    pub qualification: String,
    pub highest_qualification: String,
    pub programme_assigned: i64,
    #[serde(default)]
    pub programme_assigned_name: Option<String>,
    pub mobile_number: String,
    #[serde(default)]
    pub alternate_number: String,
    pub email_id: String,
    pub current_designation: String,
    pub working_experience: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub address_line3: String,
    pub pincode: String,
    pub district: String,
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Counsellor {
    pub fn address_display(&self) -> String {
        [
            self.address_line1.as_str(),
            self.address_line2.as_str(),
            self.address_line3.as_str(),
            self.district.as_str(),
            self.state.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
            + &format!(" - {}", self.pincode)
    }
}

/// Body for creating or updating a counsellor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCounsellor {
    pub counsellor_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub aadhaar_card: String,
    pub qualification: String,
    pub highest_qualification: String,
    pub programme_assigned: i64,
    pub mobile_number: String,
    pub alternate_number: String,
    pub email_id: String,
    pub current_designation: String,
    pub working_experience: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub pincode: String,
    pub district: String,
    pub state: String,
}
