use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One patient's completed administration of a questionnaire.
///
/// `responses` maps stringified question ids to the raw submitted values.
/// Created once per administration and not mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireResponse {
    pub id: Uuid,
    pub questionnaire_id: String,
    pub patient_id: Uuid,
    pub session_id: Option<Uuid>,
    pub responses: HashMap<String, serde_json::Value>,
    pub total_score: f64,
    pub interpretation: Option<String>,
    pub notes: Option<String>,
    pub completed_at: jiff::Timestamp,
}
