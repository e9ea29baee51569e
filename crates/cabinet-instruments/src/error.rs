use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("duplicate questionnaire id in catalog: {0}")]
    DuplicateId(String),
}
