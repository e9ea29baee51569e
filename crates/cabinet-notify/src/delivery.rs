use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Sms,
    Whatsapp,
}

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-side message reference (e.g. a Twilio SID).
    pub reference_id: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DeliveryError {
    pub message: String,
    pub code: Option<i64>,
}

/// External message-delivery collaborator.
///
/// Implementations wrap a concrete provider; `is_configured` must be
/// answerable without performing a send.
pub trait DeliveryProvider {
    fn is_configured(&self) -> bool;

    fn send(&self, channel: Channel, to: &str, body: &str) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Per-channel result as reported to callers: success or failure, the
/// provider reference when there is one, the error detail when there isn't.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelOutcome {
    pub success: bool,
    pub reference_id: Option<String>,
    pub error: Option<String>,
}

impl From<Result<DeliveryReceipt, DeliveryError>> for ChannelOutcome {
    fn from(result: Result<DeliveryReceipt, DeliveryError>) -> Self {
        match result {
            Ok(receipt) => Self {
                success: true,
                reference_id: Some(receipt.reference_id),
                error: None,
            },
            Err(e) => Self {
                success: false,
                reference_id: None,
                error: Some(e.to_string()),
            },
        }
    }
}
