use std::fmt::Write as _;

use sigpad_core::coords::Point;
use sigpad_core::replay::RenderSink;

/// Render sink that collects strokes as SVG path data.
#[derive(Debug, Default)]
pub struct SvgSink {
    paths: Vec<String>,
    current: String,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Wraps the collected paths in a standalone SVG document.
    pub fn finish(&self, width: u32, height: u32, pen_width: u32, color: &str) -> String {
        let mut doc = String::new();
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(
            doc,
            r#"  <g fill="none" stroke="{color}" stroke-width="{pen_width}" stroke-linecap="round">"#
        );
        for d in &self.paths {
            let _ = writeln!(doc, r#"    <path d="{d}"/>"#);
        }
        doc.push_str("  </g>\n</svg>\n");
        doc
    }
}

impl RenderSink for SvgSink {
    fn begin_stroke(&mut self) {
        self.current.clear();
    }

    fn move_to(&mut self, p: Point) {
        let _ = write!(self.current, "M{} {}", p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        let _ = write!(self.current, " L{} {}", p.x, p.y);
    }

    fn end_stroke(&mut self) {
        if !self.current.is_empty() {
            self.paths.push(std::mem::take(&mut self.current));
        }
    }
}
