//! rune-paragraph: bidirectional reordering and justified line formatting.
//!
//! Turns logically ordered text into visual order with reversible index
//! maps, then places already-broken lines of a paragraph, stretching word
//! gaps so every line but the last fills the target width.
//!
//! - `bidi`: direction classification, run reordering, l2v/v2l index maps
//! - `layout`: rendered line model, per-line justification, geometry requests
//! - `config`: paragraph settings loaded from TOML with env overrides

pub mod bidi;
pub mod config;
pub mod error;
pub mod layout;

pub use bidi::{
    BidiReorderer, Direction, DirectionClassifier, IndexMap, IndexMapCache, VisualText,
};
pub use config::{Alignment, ParagraphConfig};
pub use error::{ConfigError, ReorderError};
pub use layout::{
    AlignedLineFormatter, GeometryRequest, Justification, JustifiedLineFormatter, LineAlign,
    LineJustifier, LineMeasure, LineMetrics, ParagraphFormatter, Point, RenderedLine, SubRun,
};
