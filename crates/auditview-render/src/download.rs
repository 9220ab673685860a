use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Build a `data:` URI carrying `content` base64-encoded, for client-side downloads.
pub fn data_uri(mime_type: &str, content: &str) -> String {
    let mime = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(content.as_bytes()))
}

/// Inverse of [`data_uri`]; `None` for anything that is not a base64 data URI.
pub fn decode_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}
