use serde::{Deserialize, Serialize};

/// Fonts, sizes and colours for DOCX reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,

    /// Hex RGB without `#`, used for the title and section headings.
    pub accent_color: String,
    /// Hex RGB for centred notes (subtitle, timestamps).
    pub muted_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 12,
            accent_color: "667EEA".to_string(),
            muted_color: "969696".to_string(),
        }
    }
}
