use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A standardized instrument: fixed questions, options, and scoring weights.
///
/// Definitions are identified by a short string code (e.g. "had", "bdi2") so
/// a data-file catalog can reference them stably across reloads. Responses
/// denormalize answer values rather than snapshotting the definition, so
/// editing an administered definition is an accepted inconsistency.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireDefinition {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub questions: Vec<Question>,
    /// Cotation instructions for the clinician. Documentation only; the
    /// scoring engine sums option weights regardless of this text.
    pub scoring_method: Option<String>,
    pub interpretation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub subscale: Option<String>,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub weight: f64,
}
