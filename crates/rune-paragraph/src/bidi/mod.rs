//! Bidirectional (BiDi) reordering built on `unicode-bidi` character data.
//!
//! - Per-character direction classification with explicit marks
//! - Run segmentation, neutral resolution and RTL run reversal
//! - Logical/visual index maps for caret and selection queries
//! - Bracket mirroring and an owner-keyed index map cache

pub mod cache;
pub mod class;
pub mod index_map;
pub mod mirror;
pub mod reorder;

pub use cache::IndexMapCache;
pub use class::{Direction, DirectionClassifier};
pub use index_map::IndexMap;
pub use mirror::mirrored_bracket;
pub use reorder::{BidiReorderer, VisualText};
