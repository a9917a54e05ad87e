use crate::layout::RenderedLine;

/// Line-height query supplied by the line-measurement collaborator.
pub trait LineMeasure {
    /// Natural height of line `index` in pixels, used for vertical advance.
    fn line_height(&self, index: usize, line: &RenderedLine) -> f32;
}

/// Every line has the same fixed height.
impl LineMeasure for f32 {
    fn line_height(&self, _index: usize, _line: &RenderedLine) -> f32 {
        *self
    }
}

/// Per-line heights; lines past the end reuse the last height.
impl LineMeasure for Vec<f32> {
    fn line_height(&self, index: usize, _line: &RenderedLine) -> f32 {
        self.get(index).or(self.last()).copied().unwrap_or(0.0)
    }
}

/// Scaled font metrics in pixels for a single-font paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
}

impl LineMetrics {
    pub fn new(ascent: f32, descent: f32, line_gap: f32) -> Self {
        Self {
            ascent,
            descent,
            line_gap,
        }
    }

    /// Scale metrics given in font units to pixels, where `font_size` is
    /// in pixels per em.
    pub fn from_font_units(
        ascent: f32,
        descent: f32,
        line_gap: f32,
        units_per_em: u16,
        font_size: f32,
    ) -> Self {
        let scale = if units_per_em != 0 {
            font_size / units_per_em as f32
        } else {
            1.0
        };
        Self::new(ascent * scale, descent * scale, line_gap * scale)
    }

    /// ascent + descent + line gap.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

impl LineMeasure for LineMetrics {
    fn line_height(&self, _index: usize, _line: &RenderedLine) -> f32 {
        LineMetrics::line_height(self)
    }
}

/// Adds fixed extra spacing below every line of an inner measure.
#[derive(Debug, Clone, Copy)]
pub struct PaddedMeasure<M> {
    inner: M,
    padding: f32,
}

impl<M: LineMeasure> PaddedMeasure<M> {
    pub fn new(inner: M, padding: f32) -> Self {
        Self { inner, padding }
    }
}

impl<M: LineMeasure> LineMeasure for PaddedMeasure<M> {
    fn line_height(&self, index: usize, line: &RenderedLine) -> f32 {
        self.inner.line_height(index, line) + self.padding
    }
}
