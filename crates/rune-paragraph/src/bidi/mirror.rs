//! Bracket mirroring for characters drawn inside right-to-left runs.
//!
//! Covers the paired punctuation that shows up in UI text; the full
//! Bidi_Mirroring_Glyph table is larger than this.

/// Return the mirrored counterpart of a paired bracket or quote.
///
/// If `ch` does not have a known mirror, it is returned unchanged.
pub fn mirrored_bracket(ch: char) -> char {
    match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        _ => ch,
    }
}
