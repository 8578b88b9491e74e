use serde::{Deserialize, Serialize};

use crate::coords::Segment;

/// Ordered segments of every stroke in a session.
///
/// Insertion order is replay order. An empty signature means nothing has been drawn.
/// Serializes as the legacy JSON array of `{ lx, ly, mx, my }` objects.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature {
    segments: Vec<Segment>,
}

impl Signature {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns segments in insertion order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    #[inline]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Clears all segments. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Every segment scaled by `factor` and rounded; count and order are kept.
    pub fn scaled(&self, factor: f64) -> Self {
        self.segments.iter().map(|s| s.scaled(factor)).collect()
    }
}

impl From<Vec<Segment>> for Signature {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Signature {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self { segments: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
