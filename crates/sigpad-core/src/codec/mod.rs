//! Signature codec.
//!
//! Two string forms are supported:
//!
//! | Form | Shape |
//! |------|-------|
//! | compact | one character per integer, `char = value + CHAR_OFFSET`: pen width, surface width, then `to.x, to.y, from.x, from.y` per segment |
//! | legacy | JSON array of `{ "lx", "ly", "mx", "my" }` objects |
//!
//! [`decompress`] reports legacy input instead of parsing it; [`decode`] resolves
//! both forms transparently.
//!
//! ```rust
//! use sigpad_core::codec;
//! use sigpad_core::coords::{Point, Segment};
//! use sigpad_core::Signature;
//!
//! let sig: Signature = vec![Segment::new(Point::new(0, 0), Point::new(5, 5)).unwrap()].into();
//! let encoded = codec::compress(&sig, 2, 100).unwrap();
//! let decoded = codec::decode(&encoded, 200).unwrap();
//! assert_eq!(decoded.signature.segments()[0].end(), Point::new(10, 10));
//! ```

mod compact;
mod error;
mod legacy;

pub use compact::{
    compress,
    decompress,
    Decompressed,
    Rescaled,
    CHAR_OFFSET,
    LEGACY_SENTINEL,
    MAX_ENCODED_VALUE,
    MIN_PEN_WIDTH,
    PEN_DAMPING,
};
pub use error::CodecError;
pub use legacy::{from_legacy_json, to_legacy_json};

use crate::signature::Signature;

/// Result of [`decode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub signature: Signature,
    /// Rescaled pen width; `None` for empty and legacy payloads, which carry no header.
    pub pen_width: Option<u32>,
}

/// Decodes either form, rescaling compact payloads to `surface_width`.
///
/// Legacy payloads carry no surface metadata and are returned unscaled.
pub fn decode(encoded: &str, surface_width: u32) -> Result<Decoded, CodecError> {
    match decompress(encoded, surface_width)? {
        Decompressed::Empty => Ok(Decoded { signature: Signature::new(), pen_width: None }),
        Decompressed::Compact(Rescaled { signature, pen_width, .. }) => {
            Ok(Decoded { signature, pen_width: Some(pen_width) })
        }
        Decompressed::Legacy(json) => {
            Ok(Decoded { signature: from_legacy_json(json)?, pen_width: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Point, Segment};

    #[test]
    fn decode_compact() {
        let sig: Signature = vec![Segment::new(Point::new(1, 2), Point::new(3, 4)).unwrap()].into();
        let encoded = compress(&sig, 2, 300).unwrap();
        let decoded = decode(&encoded, 300).unwrap();
        assert_eq!(decoded.signature, sig);
        assert_eq!(decoded.pen_width, Some(2));
    }

    #[test]
    fn decode_legacy_is_transparent() {
        let decoded = decode(r#"[{"lx":5,"ly":5,"mx":0,"my":0}]"#, 999).unwrap();
        assert_eq!(decoded.signature.len(), 1);
        assert_eq!(decoded.signature.segments()[0].end(), Point::new(5, 5));
        assert_eq!(decoded.pen_width, None);
    }

    #[test]
    fn decode_empty() {
        let decoded = decode("", 300).unwrap();
        assert!(decoded.signature.is_empty());
        assert_eq!(decoded.pen_width, None);
    }

    #[test]
    fn decode_bad_legacy() {
        let err = decode("[{\"lx\":", 300).unwrap_err();
        assert!(matches!(err, CodecError::LegacyJson { .. }));
    }
}
