use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<civil::Date>,
    pub address: Option<String>,

    // Clinical history
    pub medical_history: Option<String>,
    pub current_treatments: Option<String>,
    pub allergies: Option<String>,
    pub emergency_contact: Option<String>,

    // Therapy
    pub therapy_type: Option<String>,
    pub first_session_date: Option<civil::Date>,
    pub notes: Option<String>,

    /// Soft archival flag; archived patients keep their dependent records.
    pub active: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Patient {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
