use crate::layout::{Justification, SubRun};

/// A 2D point in paragraph-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Where and how to draw one line, independent of the graphics backend.
///
/// Borrows the line's sub-runs; the renderer offsets each sub-run (and each
/// gap inside it) by `extra_per_gap()`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryRequest<'a> {
    /// Index of the line within the paragraph.
    pub line_index: usize,
    /// Top-left draw origin of the line, alignment offset included.
    pub origin: Point,
    /// Sub-runs of the line in visual order.
    pub runs: &'a [SubRun],
    pub justification: Justification,
    /// Laid-out width: natural width plus injected gap spacing.
    pub width: f32,
    /// Line height used to advance to the next line.
    pub height: f32,
}

impl<'a> GeometryRequest<'a> {
    pub fn extra_per_gap(&self) -> f32 {
        self.justification.extra_per_gap()
    }

    /// Origin of every sub-run, shifted by the spacing injected into the
    /// gaps of the sub-runs before it.
    pub fn run_origins(&self) -> impl Iterator<Item = (Point, &'a SubRun)> {
        let runs: &'a [SubRun] = self.runs;
        let extra = self.extra_per_gap();
        let mut x = self.origin.x;
        let y = self.origin.y;
        runs.iter().map(move |run| {
            let at = Point::new(x, y);
            x += run.natural_width + extra * run.breakable_count as f32;
            (at, run)
        })
    }

    /// X coordinate of the line's right edge.
    pub fn right_edge(&self) -> f32 {
        self.origin.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.height
    }
}
