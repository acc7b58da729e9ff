//! Chart screenshots are kept inside the trade record as `data:` URLs.

use crate::domain::errors::JournalError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest image accepted for embedding (the journal is a single JSON file)
pub const MAX_SCREENSHOT_BYTES: usize = 5 * 1024 * 1024;

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image file and embed it as a data URL
pub fn embed_image_file(path: &Path) -> Result<String, JournalError> {
    let mime = mime_for(path).ok_or_else(|| {
        JournalError::invalid(
            "screenshot",
            format!("{} is not a png, jpeg, gif, webp or bmp image", path.display()),
        )
    })?;

    let bytes = fs::read(path)
        .map_err(|e| JournalError::invalid("screenshot", format!("{}: {}", path.display(), e)))?;
    if bytes.len() > MAX_SCREENSHOT_BYTES {
        return Err(JournalError::invalid(
            "screenshot",
            format!(
                "{} is {} bytes, limit is {}",
                path.display(),
                bytes.len(),
                MAX_SCREENSHOT_BYTES
            ),
        ));
    }

    Ok(encode_data_url(mime, &bytes))
}

/// Split a base64 data URL into its mime type and decoded bytes
pub fn decode_data_url(data_url: &str) -> Option<(String, Vec<u8>)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload.trim()).ok()?;
    Some((mime.to_string(), bytes))
}

pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "bin",
    }
}

/// Decode an embedded screenshot and write it next to `stem`, adding the image extension
pub fn write_embedded_image(data_url: &str, stem: &Path) -> Result<PathBuf, JournalError> {
    let (mime, bytes) = decode_data_url(data_url)
        .ok_or_else(|| JournalError::invalid("screenshot", "not a base64 data URL"))?;
    let path = stem.with_extension(extension_for_mime(&mime));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| JournalError::Export {
            reason: format!("{}: {}", parent.display(), e),
        })?;
    }
    fs::write(&path, bytes).map_err(|e| JournalError::Export {
        reason: format!("{}: {}", path.display(), e),
    })?;
    Ok(path)
}
