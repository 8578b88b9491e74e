use crate::coords::{Point, Segment};
use crate::signature::Signature;

use super::CodecError;

/// Offset added to every value to obtain its character code.
pub const CHAR_OFFSET: u32 = 91;

/// First character of a legacy JSON payload. Equals `CHAR_OFFSET` as a character,
/// which is why a pen width of 0 cannot be encoded.
pub const LEGACY_SENTINEL: char = '[';

/// Largest encodable value. Keeps every code below the UTF-16 surrogate range so each
/// field stays a single code unit in any host text encoding.
pub const MAX_ENCODED_VALUE: u32 = 0xD7FF - CHAR_OFFSET;

/// Pen width grows by this fraction of the geometry scale change.
pub const PEN_DAMPING: f64 = 0.8;

/// Rescaled pen widths below this are rejected.
pub const MIN_PEN_WIDTH: f64 = 0.5;

const _: () = assert!(LEGACY_SENTINEL as u32 == CHAR_OFFSET);

/// Compact payload decoded onto a target surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Rescaled {
    pub signature: Signature,
    /// Pen width damped relative to the geometry scale, at least 1.
    pub pen_width: u32,
    /// Header values as recorded by the encoder.
    pub original_pen_width: u32,
    pub original_width: u32,
}

/// Outcome of [`decompress`].
#[derive(Debug, Clone, PartialEq)]
pub enum Decompressed<'a> {
    /// Empty input: nothing was ever drawn.
    Empty,
    Compact(Rescaled),
    /// Input is a legacy JSON payload; returned untouched.
    Legacy(&'a str),
}

/// Encodes `signature` with a `pen_width, surface_width` header.
///
/// An empty signature encodes to the empty string with no header. Both header
/// values must be non-zero.
pub fn compress(signature: &Signature, pen_width: u32, surface_width: u32) -> Result<String, CodecError> {
    if signature.is_empty() {
        return Ok(String::new());
    }
    if pen_width == 0 || surface_width == 0 {
        return Err(CodecError::InvalidHeader { pen_width, surface_width });
    }

    let mut out = String::with_capacity(2 + signature.len() * 4);
    out.push(to_char(pen_width)?);
    out.push(to_char(surface_width)?);

    for segment in signature {
        let (to, from) = (segment.end(), segment.start());
        for v in [to.x, to.y, from.x, from.y] {
            out.push(to_char(v)?);
        }
    }

    Ok(out)
}

/// Decodes a compact payload, rescaling it from its recorded width to `surface_width`.
///
/// Legacy JSON input is detected by its first character and handed back as
/// [`Decompressed::Legacy`].
pub fn decompress(encoded: &str, surface_width: u32) -> Result<Decompressed<'_>, CodecError> {
    let mut chars = encoded.chars();

    let Some(first) = chars.next() else {
        return Ok(Decompressed::Empty);
    };
    if first == LEGACY_SENTINEL {
        return Ok(Decompressed::Legacy(encoded));
    }

    let original_pen = from_char(first, 0)?;
    let original_width = match chars.next() {
        Some(ch) => from_char(ch, 1)?,
        None => return Err(CodecError::Truncated { len: 1 }),
    };

    let scale = f64::from(surface_width) / f64::from(original_width);
    if original_width == 0 || !scale.is_finite() || scale <= 0.0 {
        return Err(CodecError::Scale { original_width, surface_width });
    }

    let computed_pen = f64::from(original_pen) * (PEN_DAMPING * (scale - 1.0) + 1.0);
    if computed_pen < MIN_PEN_WIDTH {
        return Err(CodecError::TooSmallSurface { original_pen, computed_pen });
    }
    let pen_width = (computed_pen.round() as u32).max(1);

    let values = chars
        .enumerate()
        .map(|(i, ch)| from_char(ch, i + 2))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() % 4 != 0 {
        return Err(CodecError::Truncated { len: values.len() + 2 });
    }

    let stored: Signature = values
        .chunks_exact(4)
        .map(|v| Segment::decoded(Point::new(v[2], v[3]), Point::new(v[0], v[1])))
        .collect();
    let signature = stored.scaled(scale);

    Ok(Decompressed::Compact(Rescaled {
        signature,
        pen_width,
        original_pen_width: original_pen,
        original_width,
    }))
}

#[inline]
fn to_char(value: u32) -> Result<char, CodecError> {
    if value > MAX_ENCODED_VALUE {
        return Err(CodecError::ValueOutOfRange { value });
    }
    char::from_u32(value + CHAR_OFFSET).ok_or(CodecError::ValueOutOfRange { value })
}

#[inline]
fn from_char(ch: char, index: usize) -> Result<u32, CodecError> {
    (ch as u32)
        .checked_sub(CHAR_OFFSET)
        .ok_or(CodecError::InvalidCharacter { ch, index })
}
