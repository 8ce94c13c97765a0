//! `data:<mime>;base64,<body>` encoding for card images.

use std::path::Path;

use base64::Engine;

use crate::error::{Error, Result};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Guess an image MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => FALLBACK_MIME,
    }
}

/// File extension (without the dot) to use when exporting a payload.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/svg+xml" => "svg",
        _ => "bin",
    }
}

pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let body = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, body)
}

/// Read a file into a data URI.
pub fn encode_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(encode(mime_for_path(path), &bytes))
}

/// Split a data URI into its MIME type and decoded bytes.
///
/// Only base64 bodies are accepted; a missing MIME type defaults to
/// `text/plain` as browsers do.
pub fn decode(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:").ok_or(Error::InvalidDataUri)?;
    let (meta, body) = rest.split_once(',').ok_or(Error::InvalidDataUri)?;
    let mime = meta.strip_suffix(";base64").ok_or(Error::InvalidDataUri)?;
    let mime = if mime.is_empty() { "text/plain" } else { mime };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(body.trim())
        .map_err(|_| Error::InvalidDataUri)?;

    Ok((mime.to_string(), bytes))
}
