use crate::coords::Point;

use super::RenderSink;

/// Renderer-agnostic draw directive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCmd {
    BeginStroke,
    MoveTo(Point),
    LineTo(Point),
    EndStroke,
}

/// Recorded directive stream.
///
/// Hosts that render in batches (once per frame) can record into a `DrawList`
/// and drain it from their paint loop.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns commands in insertion order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Number of complete strokes recorded.
    pub fn stroke_count(&self) -> usize {
        self.cmds.iter().filter(|c| **c == DrawCmd::EndStroke).count()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Removes and yields all recorded commands.
    #[inline]
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCmd> {
        self.cmds.drain(..)
    }
}

impl RenderSink for DrawList {
    fn begin_stroke(&mut self) {
        self.cmds.push(DrawCmd::BeginStroke);
    }
    fn move_to(&mut self, point: Point) {
        self.cmds.push(DrawCmd::MoveTo(point));
    }
    fn line_to(&mut self, point: Point) {
        self.cmds.push(DrawCmd::LineTo(point));
    }
    fn end_stroke(&mut self) {
        self.cmds.push(DrawCmd::EndStroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Segment;
    use crate::replay::{replay, replay_from};
    use crate::signature::Signature;

    fn sig() -> Signature {
        vec![
            Segment::new(Point::new(0, 0), Point::new(5, 5)).unwrap(),
            Segment::new(Point::new(5, 5), Point::new(9, 1)).unwrap(),
        ]
        .into()
    }

    #[test]
    fn one_stroke_per_segment() {
        let mut list = DrawList::new();
        replay(&sig(), &mut list);
        assert_eq!(
            list.cmds(),
            &[
                DrawCmd::BeginStroke,
                DrawCmd::MoveTo(Point::new(0, 0)),
                DrawCmd::LineTo(Point::new(5, 5)),
                DrawCmd::EndStroke,
                DrawCmd::BeginStroke,
                DrawCmd::MoveTo(Point::new(5, 5)),
                DrawCmd::LineTo(Point::new(9, 1)),
                DrawCmd::EndStroke,
            ]
        );
        assert_eq!(list.stroke_count(), 2);
    }

    #[test]
    fn replay_does_not_mutate() {
        let s = sig();
        let before = s.clone();
        replay(&s, &mut DrawList::new());
        assert_eq!(s, before);
    }

    #[test]
    fn replay_from_skips_prefix() {
        let mut list = DrawList::new();
        replay_from(&sig(), 1, &mut list);
        assert_eq!(list.stroke_count(), 1);
        assert_eq!(list.cmds()[1], DrawCmd::MoveTo(Point::new(5, 5)));

        list.clear();
        replay_from(&sig(), 7, &mut list);
        assert!(list.cmds().is_empty());
    }

    #[test]
    fn drain_empties() {
        let mut list = DrawList::new();
        replay(&sig(), &mut list);
        assert_eq!(list.drain().count(), 8);
        assert!(list.cmds().is_empty());
    }
}
