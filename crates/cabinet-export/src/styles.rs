use serde::{Deserialize, Serialize};

/// Styling for generated documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,
    /// Body text size in points.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        // Matches the practice's historical report styling.
        Self {
            body_font: "Helvetica".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
        }
    }
}
