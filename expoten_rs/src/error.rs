//! Error type shared by the core crate and the browser glue.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpotenError>;

#[derive(Debug, Error)]
pub enum ExpotenError {
    #[error("failed to read file `{name}`: {reason}")]
    FileRead { name: String, reason: String },

    #[error("malformed data URL: {0}")]
    DataUrl(&'static str),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("rasterized card is empty ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    PdfIo(#[from] std::io::Error),

    #[error("invalid brand configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown logo position `{0}`")]
    UnknownAnchor(String),

    #[error("browser call failed: {0}")]
    Browser(String),
}
