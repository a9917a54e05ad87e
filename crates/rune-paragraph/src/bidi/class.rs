use unicode_bidi::{BidiClass, bidi_class};

/// Coarse direction of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    /// Weak, neutral or control character; resolved from its neighbors.
    Neutral,
}

impl Direction {
    /// Strong directions are `LeftToRight` and `RightToLeft`.
    pub fn is_strong(self) -> bool {
        !matches!(self, Direction::Neutral)
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::RightToLeft)
    }

    /// Collapse a UAX-9 bidi class into a coarse direction.
    ///
    /// Explicit embedding, override and isolate initiators count as strong
    /// signals for the direction they introduce. Everything that is not
    /// strongly directional (numbers, separators, whitespace, PDF/PDI,
    /// boundary neutrals, non-spacing marks) is `Neutral`.
    pub fn from_bidi_class(class: BidiClass) -> Self {
        match class {
            BidiClass::L | BidiClass::LRE | BidiClass::LRO | BidiClass::LRI => {
                Direction::LeftToRight
            }
            BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO | BidiClass::RLI => {
                Direction::RightToLeft
            }
            _ => Direction::Neutral,
        }
    }
}

/// Maps characters to a [`Direction`] using the Unicode bidi class table
/// bundled with `unicode-bidi`.
///
/// Total over `char`: unassigned and control characters come back as
/// `Neutral`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionClassifier;

impl DirectionClassifier {
    pub fn classify(ch: char) -> Direction {
        Direction::from_bidi_class(bidi_class(ch))
    }

    /// Classify every character of `text` in logical order.
    pub fn classify_str(text: &str) -> Vec<Direction> {
        text.chars().map(Self::classify).collect()
    }
}
