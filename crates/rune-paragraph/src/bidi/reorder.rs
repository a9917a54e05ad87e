use tracing::{trace, warn};
use unicode_bidi::{BidiClass, bidi_class};

use crate::bidi::{Direction, DirectionClassifier, IndexMap, mirrored_bracket};
use crate::error::ReorderError;

/// Maximum nesting depth for explicit embeddings and overrides (UAX-9 BD2).
const MAX_EXPLICIT_DEPTH: usize = 125;

/// Text in left-to-right screen order together with its index maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualText {
    text: String,
    map: IndexMap,
    /// Resolved direction per visual position (never `Neutral`).
    directions: Vec<Direction>,
}

impl VisualText {
    /// Empty text with empty maps.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `logical` drawn as-is, left to right, with identity maps.
    pub fn unreordered(logical: &str) -> Self {
        let len = logical.chars().count();
        Self {
            text: logical.to_owned(),
            map: IndexMap::identity(len),
            directions: vec![Direction::LeftToRight; len],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn index_map(&self) -> &IndexMap {
        &self.map
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolved direction of the run containing visual position `visual`.
    pub fn direction_at(&self, visual: usize) -> Option<Direction> {
        self.directions.get(visual).copied()
    }

    /// Visual string with paired brackets mirrored inside right-to-left runs.
    ///
    /// For glyph selection only; the result is no longer a permutation of
    /// the logical text.
    pub fn mirrored(&self) -> String {
        self.text
            .chars()
            .zip(&self.directions)
            .map(|(ch, dir)| if dir.is_rtl() { mirrored_bracket(ch) } else { ch })
            .collect()
    }

    pub fn into_parts(self) -> (String, IndexMap) {
        (self.text, self.map)
    }
}

/// Reorders logically ordered text into visual order.
///
/// Characters are classified, neutral runs take the direction of their
/// strong neighbors when both agree (left-to-right otherwise), and every
/// maximal right-to-left run has its characters reversed in place. Runs
/// themselves keep their left-to-right order across the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidiReorderer;

impl BidiReorderer {
    /// Reorder a Rust string. `&str` is always well formed, so this never fails.
    pub fn reorder(logical: &str) -> VisualText {
        let chars: Vec<char> = logical.chars().collect();
        Self::reorder_chars(&chars)
    }

    /// Reorder UTF-16 text.
    ///
    /// Returns [`ReorderError::MalformedInput`] at the first unpaired
    /// surrogate. Index maps count decoded chars, not code units.
    pub fn reorder_utf16(units: &[u16]) -> Result<VisualText, ReorderError> {
        let mut chars = Vec::with_capacity(units.len());
        let mut offset = 0usize;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => {
                    offset += ch.len_utf16();
                    chars.push(ch);
                }
                Err(_) => return Err(ReorderError::MalformedInput { offset }),
            }
        }
        Ok(Self::reorder_chars(&chars))
    }

    /// Like [`reorder_utf16`](Self::reorder_utf16), but malformed input
    /// degrades to lossy-decoded text drawn left to right.
    pub fn reorder_utf16_or_fallback(units: &[u16]) -> VisualText {
        match Self::reorder_utf16(units) {
            Ok(visual) => visual,
            Err(err) => {
                warn!(%err, "bidi reorder failed; drawing text unreordered");
                VisualText::unreordered(&String::from_utf16_lossy(units))
            }
        }
    }

    fn reorder_chars(chars: &[char]) -> VisualText {
        if chars.is_empty() {
            return VisualText::empty();
        }

        let mut directions = explicit_directions(chars);
        resolve_neutrals(&mut directions);

        let mut l2v = Vec::with_capacity(chars.len());
        let mut run_count = 0usize;
        let mut start = 0usize;
        while start < directions.len() {
            let dir = directions[start];
            let mut end = start + 1;
            while end < directions.len() && directions[end] == dir {
                end += 1;
            }
            if dir.is_rtl() {
                l2v.extend((start..end).rev());
            } else {
                l2v.extend(start..end);
            }
            run_count += 1;
            start = end;
        }

        let map = IndexMap::from_l2v(l2v);
        let text: String = map.v2l().iter().map(|&l| chars[l]).collect();
        let visual_directions = map.v2l().iter().map(|&l| directions[l]).collect();

        trace!(chars = chars.len(), runs = run_count, "bidi reorder");

        VisualText {
            text,
            map,
            directions: visual_directions,
        }
    }
}

/// Classify each char, applying LRO/RLO override scopes.
///
/// An override forces every enclosed char to its direction until the
/// matching PDF; an LRE/RLE inside an override suspends it. Paragraph
/// separators close all open scopes.
fn explicit_directions(chars: &[char]) -> Vec<Direction> {
    // `Some` for overrides, `None` for plain embeddings.
    let mut stack: Vec<Option<Direction>> = Vec::new();
    let mut overflow = 0usize;
    let mut out = Vec::with_capacity(chars.len());

    for &ch in chars {
        let class = bidi_class(ch);
        match class {
            BidiClass::PDF => {
                if overflow > 0 {
                    overflow -= 1;
                } else {
                    stack.pop();
                }
            }
            BidiClass::B => {
                stack.clear();
                overflow = 0;
            }
            _ => {}
        }

        let forced = stack.last().copied().flatten();
        out.push(forced.unwrap_or_else(|| DirectionClassifier::classify(ch)));

        let scope = match class {
            BidiClass::LRO => Some(Some(Direction::LeftToRight)),
            BidiClass::RLO => Some(Some(Direction::RightToLeft)),
            BidiClass::LRE | BidiClass::RLE => Some(None),
            _ => None,
        };
        if let Some(scope) = scope {
            if stack.len() < MAX_EXPLICIT_DEPTH {
                stack.push(scope);
            } else {
                overflow += 1;
            }
        }
    }
    out
}

/// Give every maximal neutral run the direction of its strong neighbors
/// when both exist and agree; otherwise the paragraph default (LTR).
fn resolve_neutrals(directions: &mut [Direction]) {
    let mut i = 0usize;
    while i < directions.len() {
        if directions[i].is_strong() {
            i += 1;
            continue;
        }
        let start = i;
        while i < directions.len() && !directions[i].is_strong() {
            i += 1;
        }
        let before = start.checked_sub(1).map(|j| directions[j]);
        let after = directions.get(i).copied();
        let resolved = match (before, after) {
            (Some(a), Some(b)) if a == b => a,
            _ => Direction::LeftToRight,
        };
        directions[start..i].fill(resolved);
    }
}
