use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::bidi::Direction;

/// A measured, positionable fragment of a line (a word, a cluster, or a
/// shaped run).
#[derive(Debug, Clone, PartialEq)]
pub struct SubRun {
    /// Byte range in the visual text this fragment was shaped from.
    pub text_range: Range<usize>,
    /// Unstretched advance width in pixels.
    pub natural_width: f32,
    /// Gaps inside this fragment that may receive justification space.
    pub breakable_count: usize,
    /// Resolved direction of the text in this fragment.
    pub direction: Direction,
}

impl SubRun {
    pub fn new(natural_width: f32, breakable_count: usize) -> Self {
        debug_assert!(natural_width >= 0.0, "sub-run width must be non-negative");
        Self {
            text_range: 0..0,
            natural_width,
            breakable_count,
            direction: Direction::LeftToRight,
        }
    }

    /// Sub-run for `text[text_range]`, counting its interior word gaps.
    pub fn from_text(text: &str, text_range: Range<usize>, natural_width: f32) -> Self {
        let breakable_count = count_word_gaps(&text[text_range.clone()]);
        Self {
            text_range,
            ..Self::new(natural_width, breakable_count)
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// One already-broken line: sub-runs in visual order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedLine {
    pub runs: Vec<SubRun>,
}

impl RenderedLine {
    pub fn new(runs: Vec<SubRun>) -> Self {
        Self { runs }
    }

    /// Sum of the sub-runs' natural widths.
    pub fn natural_width(&self) -> f32 {
        self.runs.iter().map(|run| run.natural_width).sum()
    }

    /// Total breakable positions across all sub-runs.
    pub fn breakable_count(&self) -> usize {
        self.runs.iter().map(|run| run.breakable_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Count whitespace gaps that sit between two words.
///
/// Leading and trailing whitespace is not a gap; consecutive whitespace
/// segments count once.
pub fn count_word_gaps(text: &str) -> usize {
    let mut gaps = 0;
    let mut seen_word = false;
    let mut pending_gap = false;

    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            pending_gap |= seen_word;
        } else {
            if pending_gap {
                gaps += 1;
                pending_gap = false;
            }
            seen_word = true;
        }
    }
    gaps
}
