use crate::layout::RenderedLine;

/// Per-line justification outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Justification {
    /// Line is drawn at its natural width (last line, or nothing to stretch).
    NotStretched,
    /// Uniform extra space added at every breakable position.
    Stretched { extra_per_gap: f32 },
}

impl Justification {
    /// Extra pixels per gap; zero when not stretched.
    pub fn extra_per_gap(self) -> f32 {
        match self {
            Justification::NotStretched => 0.0,
            Justification::Stretched { extra_per_gap } => extra_per_gap,
        }
    }

    pub fn is_stretched(self) -> bool {
        matches!(self, Justification::Stretched { .. })
    }

    /// Width of `line` once this justification is applied.
    pub fn laid_out_width(self, line: &RenderedLine) -> f32 {
        line.natural_width() + self.extra_per_gap() * line.breakable_count() as f32
    }
}

/// Computes the gap spacing that makes one line fill a target width.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineJustifier;

impl LineJustifier {
    /// Justify a single line.
    ///
    /// The last line of a paragraph and lines without breakable positions
    /// are never stretched. Lines that already overflow get zero extra space.
    ///
    /// `target_width` and all sub-run widths must be non-negative.
    pub fn justify(line: &RenderedLine, target_width: f32, is_last_line: bool) -> Justification {
        debug_assert!(target_width >= 0.0, "target width must be non-negative");

        let gaps = line.breakable_count();
        if is_last_line || gaps == 0 {
            return Justification::NotStretched;
        }

        let deficit = (target_width - line.natural_width()).max(0.0);
        Justification::Stretched {
            extra_per_gap: deficit / gaps as f32,
        }
    }
}
