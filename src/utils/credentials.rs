use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// Strips an optional `Bearer ` scheme from an authorization header value.
pub fn bearer_token(authorization: &str) -> &str {
    let trimmed = authorization.trim();
    trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))
        .unwrap_or(trimmed)
        .trim()
}

/// Decodes `Basic base64(username:password)` into its two parts.
pub fn basic_credentials(authorization: &str) -> Result<(String, String)> {
    let encoded = authorization
        .trim()
        .strip_prefix("Basic ")
        .ok_or_else(|| Error::BadRequest("unsupported authorization scheme".into()))?;
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| Error::BadRequest("malformed basic credentials".into()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| Error::BadRequest("malformed basic credentials".into()))?;
    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| Error::BadRequest("malformed basic credentials".into()))?;
    Ok((username.to_string(), password.to_string()))
}
