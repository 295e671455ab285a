use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

/// A Learning Support Centre account, identified by its human-readable code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LscCenter {
    pub id: i64,
    pub lsc_number: String,
    pub lsc_name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl LscCenter {
    /// Match against code, name, email (case-insensitive) or mobile number.
    /// A blank term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        contains_ignore_case(&self.lsc_number, term)
            || contains_ignore_case(&self.lsc_name, term)
            || contains_ignore_case(&self.email, term)
            || self.mobile.as_deref().is_some_and(|m| m.contains(term))
    }
}

/// Filter a loaded list of centres by a search term
pub fn filter_centers<'a>(centers: &'a [LscCenter], term: &str) -> Vec<&'a LscCenter> {
    centers.iter().filter(|c| c.matches_search(term)).collect()
}

/// List endpoint response; the centres are wrapped in `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LscCenterPage {
    #[serde(default)]
    pub results: Vec<LscCenter>,
}

/// Body for creating a centre
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLscCenter {
    pub lsc_number: String,
    pub lsc_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub password: String,
}

/// Body for updating a centre. The password is only sent when changing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LscCenterUpdate {
    pub lsc_number: String,
    pub lsc_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&LscCenter> for LscCenterUpdate {
    fn from(center: &LscCenter) -> Self {
        Self {
            lsc_number: center.lsc_number.clone(),
            lsc_name: center.lsc_name.clone(),
            email: center.email.clone(),
            mobile: center.mobile.clone().unwrap_or_default(),
            address: center.address.clone().unwrap_or_default(),
            password: None,
        }
    }
}
