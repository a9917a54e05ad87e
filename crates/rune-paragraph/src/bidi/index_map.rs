use core::ops::Range;

/// Logical-to-visual and visual-to-logical character index maps.
///
/// Indices count Unicode scalar values (chars), not bytes. Both tables
/// are permutations of `0..len` and are mutual inverses:
/// `v2l[l2v[i]] == i` for every `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMap {
    l2v: Vec<usize>,
    v2l: Vec<usize>,
}

impl IndexMap {
    /// Build both tables from a logical-to-visual permutation.
    pub(crate) fn from_l2v(l2v: Vec<usize>) -> Self {
        let mut v2l = vec![0; l2v.len()];
        for (logical, &visual) in l2v.iter().enumerate() {
            v2l[visual] = logical;
        }
        Self { l2v, v2l }
    }

    /// Map for `len` characters that are not reordered at all.
    pub fn identity(len: usize) -> Self {
        Self {
            l2v: (0..len).collect(),
            v2l: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.l2v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l2v.is_empty()
    }

    /// `l2v[i]`: visual position of the character at logical position `i`.
    pub fn l2v(&self) -> &[usize] {
        &self.l2v
    }

    /// `v2l[j]`: logical position of the character drawn at visual position `j`.
    pub fn v2l(&self) -> &[usize] {
        &self.v2l
    }

    pub fn to_visual(&self, logical: usize) -> Option<usize> {
        self.l2v.get(logical).copied()
    }

    pub fn to_logical(&self, visual: usize) -> Option<usize> {
        self.v2l.get(visual).copied()
    }

    /// True if no character moved.
    pub fn is_identity(&self) -> bool {
        self.l2v.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Rebuild logical text from its visual rendering.
    ///
    /// `visual` must have exactly `len()` chars; extra chars are ignored and
    /// missing ones are skipped.
    pub fn logical_text(&self, visual: &str) -> String {
        let visual_chars: Vec<char> = visual.chars().collect();
        self.l2v
            .iter()
            .filter_map(|&v| visual_chars.get(v).copied())
            .collect()
    }

    /// Visual ranges covered by a logical selection, left to right.
    ///
    /// A contiguous logical selection that crosses a direction boundary is
    /// generally discontiguous on screen; adjacent visual positions are
    /// merged so each returned range is one highlight rectangle.
    pub fn visual_ranges(&self, logical: Range<usize>) -> Vec<Range<usize>> {
        let end = logical.end.min(self.len());
        if logical.start >= end {
            return Vec::new();
        }

        let mut positions: Vec<usize> = self.l2v[logical.start..end].to_vec();
        positions.sort_unstable();

        let mut ranges: Vec<Range<usize>> = Vec::new();
        for pos in positions {
            match ranges.last_mut() {
                Some(last) if last.end == pos => last.end = pos + 1,
                _ => ranges.push(pos..pos + 1),
            }
        }
        ranges
    }
}
