use serde::{Deserialize, Serialize};

use super::Point;

/// One drawn line, `from` -> `to`.
///
/// Captured segments are never zero-length: [`Segment::new`] and [`Segment::mark`]
/// guarantee `from != to`. Decoded segments keep the stored or rounded endpoints as
/// they are, so a downscaled dot may collapse to a single point.
///
/// Serializes to the legacy structured form `{ "lx", "ly", "mx", "my" }`
/// (line-to = `to`, move-to = `from`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "LegacyPath", from = "LegacyPath")]
pub struct Segment {
    from: Point,
    to: Point,
}

impl Segment {
    /// Returns `None` when `from == to`.
    #[inline]
    pub fn new(from: Point, to: Point) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }

    /// Segment read back from a stored payload. Endpoints are taken verbatim.
    #[inline]
    pub fn decoded(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Short synthetic mark starting at `at`.
    #[inline]
    pub fn mark(at: Point) -> Self {
        Self { from: at, to: at.nudged() }
    }

    /// Move-to endpoint.
    #[inline]
    pub fn start(&self) -> Point {
        self.from
    }

    /// Line-to endpoint.
    #[inline]
    pub fn end(&self) -> Point {
        self.to
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.from == self.to
    }

    /// Both endpoints scaled by `factor` and rounded.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::decoded(self.from.scaled(factor), self.to.scaled(factor))
    }
}

/// Wire shape of one entry in the legacy JSON array.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
struct LegacyPath {
    lx: u32,
    ly: u32,
    mx: u32,
    my: u32,
}

impl From<Segment> for LegacyPath {
    fn from(s: Segment) -> Self {
        Self { lx: s.to.x, ly: s.to.y, mx: s.from.x, my: s.from.y }
    }
}

impl From<LegacyPath> for Segment {
    fn from(p: LegacyPath) -> Self {
        Segment::decoded(Point::new(p.mx, p.my), Point::new(p.lx, p.ly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_length() {
        let p = Point::new(3, 3);
        assert!(Segment::new(p, p).is_none());
    }

    #[test]
    fn mark_is_never_a_point() {
        assert!(!Segment::mark(Point::new(3, 3)).is_point());
    }

    #[test]
    fn scaling_rounds_each_endpoint() {
        let s = Segment::mark(Point::new(10, 10));
        let small = s.scaled(0.1);
        assert_eq!((small.start(), small.end()), (Point::new(1, 1), Point::new(1, 1)));
        assert!(small.is_point());
    }

    #[test]
    fn legacy_field_names() {
        let s = Segment::new(Point::new(0, 1), Point::new(5, 6)).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"lx":5,"ly":6,"mx":0,"my":1}"#);
    }

    #[test]
    fn legacy_zero_length_is_kept() {
        let s: Segment = serde_json::from_str(r#"{"lx":2,"ly":2,"mx":2,"my":2}"#).unwrap();
        assert_eq!(s.end(), Point::new(2, 2));
    }
}
