use jiff::civil;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Detailed clinical note for one therapy session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapySession {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub appointment_id: Option<Uuid>,
    pub session_date: civil::DateTime,
    pub session_number: Option<u32>,

    // Session content
    pub therapy_type: Option<String>,
    pub objectives: Option<String>,
    pub interventions: Option<String>,
    pub patient_progress: Option<String>,
    pub homework: Option<String>,
    pub next_session_plan: Option<String>,

    // Ratings on a 1-10 scale
    pub mood_score: Option<u8>,
    pub anxiety_score: Option<u8>,

    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
