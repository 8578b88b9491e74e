use std::fmt;

/// Failure while encoding or decoding a signature.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Original width in the header is zero, or the resulting scale is not usable.
    Scale { original_width: u32, surface_width: u32 },
    /// Rescaled pen width falls below the minimum; the target surface is too small.
    TooSmallSurface { original_pen: u32, computed_pen: f64 },
    /// Header would be unreadable: zero pen width collides with the legacy sentinel,
    /// zero surface width cannot be rescaled.
    InvalidHeader { pen_width: u32, surface_width: u32 },
    /// Value cannot be represented by a single compact character.
    ValueOutOfRange { value: u32 },
    /// Input ends inside the header or inside a segment.
    Truncated { len: usize },
    /// Character whose code lies below the compact offset.
    InvalidCharacter { ch: char, index: usize },
    /// Legacy JSON payload could not be parsed or produced.
    LegacyJson { message: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Scale { original_width, surface_width } => write!(
                f,
                "cannot rescale signature (original width: {original_width}, new width: {surface_width})"
            ),
            CodecError::TooSmallSurface { original_pen, computed_pen } => write!(
                f,
                "surface too small for signature (original pen: {original_pen}, new pen: {computed_pen:.3})"
            ),
            CodecError::InvalidHeader { pen_width, surface_width } => write!(
                f,
                "cannot encode header (pen width: {pen_width}, surface width: {surface_width})"
            ),
            CodecError::ValueOutOfRange { value } => {
                write!(f, "value {value} is out of the compact encoding range")
            }
            CodecError::Truncated { len } => {
                write!(f, "compact signature truncated ({len} characters)")
            }
            CodecError::InvalidCharacter { ch, index } => {
                write!(f, "invalid character {ch:?} at position {index}")
            }
            CodecError::LegacyJson { message } => write!(f, "legacy signature json: {message}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::LegacyJson { message: err.to_string() }
    }
}
