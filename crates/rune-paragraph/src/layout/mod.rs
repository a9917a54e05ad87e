pub mod format;
pub mod geometry;
pub mod justify;
pub mod line;
pub mod metrics;

pub use format::{
    AlignedLineFormatter, JustifiedLineFormatter, LineAlign, LinePlacement, ParagraphFormatter,
};
pub use geometry::{GeometryRequest, Point};
pub use justify::{Justification, LineJustifier};
pub use line::{RenderedLine, SubRun, count_word_gaps};
pub use metrics::{LineMeasure, LineMetrics, PaddedMeasure};
