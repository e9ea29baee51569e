use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DocumentKind {
    SessionReport,
    QuestionnaireReport,
    PatientFile,
}

/// Metadata record for a generated document. The rendered bytes themselves
/// live with the excluded file-storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Document {
    pub id: Uuid,
    pub patient_id: Option<Uuid>,
    pub kind: DocumentKind,
    pub title: String,
    pub created_at: jiff::Timestamp,
}

impl Document {
    pub fn new(kind: DocumentKind, title: impl Into<String>, patient_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            kind,
            title: title.into(),
            created_at: jiff::Timestamp::now(),
        }
    }
}
