use core::fmt;

/// Integer pixel position on the capture surface.
///
/// Coordinates are never negative; `from_surface` clamps at the origin.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Normalizes a surface-local float position reported by the input source.
    ///
    /// Returns `None` for non-finite input. Each axis is floored; values left of or
    /// above the origin clamp to 0, values past `u32::MAX` saturate.
    pub fn from_surface(x: f32, y: f32) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self::new(x.floor().max(0.0) as u32, y.floor().max(0.0) as u32))
    }

    /// The point one pixel below, or one above when already at the bottom edge.
    ///
    /// Used for synthetic dot and end marks: the result always differs from `self`.
    #[inline]
    pub fn nudged(self) -> Self {
        match self.y.checked_add(1) {
            Some(y) => Self::new(self.x, y),
            None => Self::new(self.x, self.y - 1),
        }
    }

    /// Multiplies both axes by `factor`, rounding each to the nearest pixel.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(scale_axis(self.x, factor), scale_axis(self.y, factor))
    }
}

#[inline]
fn scale_axis(v: u32, factor: f64) -> u32 {
    // `as` saturates; negative or NaN products land on 0.
    (f64::from(v) * factor).round() as u32
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_surface_floors() {
        assert_eq!(Point::from_surface(10.9, 3.2), Some(Point::new(10, 3)));
    }

    #[test]
    fn from_surface_clamps_negative() {
        assert_eq!(Point::from_surface(-4.5, 7.0), Some(Point::new(0, 7)));
    }

    #[test]
    fn from_surface_rejects_nan() {
        assert_eq!(Point::from_surface(f32::NAN, 1.0), None);
        assert_eq!(Point::from_surface(1.0, f32::INFINITY), None);
    }

    #[test]
    fn nudged_moves_down() {
        assert_eq!(Point::new(4, 4).nudged(), Point::new(4, 5));
    }

    #[test]
    fn nudged_at_bottom_edge_moves_up() {
        let p = Point::new(1, u32::MAX);
        assert_eq!(p.nudged(), Point::new(1, u32::MAX - 1));
    }

    #[test]
    fn scaled_rounds_half_up() {
        assert_eq!(Point::new(5, 3).scaled(0.5), Point::new(3, 2));
        assert_eq!(Point::new(5, 5).scaled(2.0), Point::new(10, 10));
    }
}
