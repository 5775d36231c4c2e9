use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, PersonName};

/// Customer record as returned by `GET /clients`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Free-form identity document data kept by the backend.
    #[serde(default)]
    pub passport_data: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Client {
    /// "First Last" as shown in lists and dropdowns.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload of `POST /clients`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewClient {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email: email
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
