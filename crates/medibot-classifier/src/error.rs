use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid classifier URL: {0}")]
    InvalidUrl(String),

    #[error("invalid file format '{extension}'. Allowed formats: {allowed}")]
    UnsupportedFormat { extension: String, allowed: String },

    #[error("no file selected. Please choose an image.")]
    EmptyFile,

    #[error("file too large ({size} bytes). Maximum size is {max_mb}MB.")]
    FileTooLarge { size: u64, max_mb: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with `{"success": false, "error": ...}`.
    #[error("{0}")]
    Service(String),

    #[error("invalid response from classifier: {0}")]
    MalformedResponse(String),
}
