use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    /// Color space name that is neither `hsv` nor `yiq`.
    #[error("unknown color space: {0} (expected hsv or yiq)")]
    UnknownColorSpace(String),
    #[error("unknown output format: {0} (expected text, json or csv)")]
    UnknownFormat(String),
    #[error("invalid rgb hex code: {0}")]
    InvalidHex(String),
    #[error("palette I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("palette serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette csv error: {0}")]
    Csv(#[from] csv::Error),
}
