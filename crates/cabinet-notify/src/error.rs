use cabinet_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The patient has no phone number on file; nothing was attempted.
    #[error("patient {patient} has no contact number")]
    NoContactNumber { patient: String },

    /// The delivery provider failed its `is_configured` pre-check. Distinct
    /// from a runtime delivery failure so callers can surface it as an
    /// actionable configuration problem.
    #[error("delivery provider is not configured")]
    ProviderNotConfigured,

    #[error("window arithmetic overflow: {0}")]
    WindowOverflow(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
