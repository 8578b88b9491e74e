use crate::signature::Signature;

use super::CodecError;

/// Serializes to the legacy JSON array form.
pub fn to_legacy_json(signature: &Signature) -> Result<String, CodecError> {
    Ok(serde_json::to_string(signature)?)
}

/// Parses the legacy JSON array form. Entries are kept verbatim, zero-length ones included.
pub fn from_legacy_json(json: &str) -> Result<Signature, CodecError> {
    Ok(serde_json::from_str(json)?)
}
