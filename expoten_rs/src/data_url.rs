//! `data:` URLs for uploaded files and canvas output.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

use crate::error::{ExpotenError, Result};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or(ExpotenError::DataUrl("missing `data:` scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(ExpotenError::DataUrl("missing `,` separator"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(ExpotenError::DataUrl("only base64 payloads are supported"))?;
        let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
        Ok(Self {
            mime: mime.to_string(),
            bytes: B64.decode(payload)?,
        })
    }
}

/// Encode `bytes` as a base64 `data:` URL.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", B64.encode(bytes))
}

/// MIME type for an uploaded file. Browsers report an empty type for some
/// vector logos, so `.svg` is recognised by name.
pub fn mime_for(reported: &str, file_name: &str) -> String {
    if !reported.is_empty() {
        return reported.to_string();
    }
    if file_name.to_ascii_lowercase().ends_with(".svg") {
        return "image/svg+xml".to_string();
    }
    FALLBACK_MIME.to_string()
}
