use tracing::{debug, trace};

use crate::layout::{
    GeometryRequest, Justification, LineJustifier, LineMeasure, Point, RenderedLine,
};

/// Horizontal placement of one line: alignment offset plus gap spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    /// Offset from the paragraph's left edge.
    pub offset: f32,
    pub justification: Justification,
}

/// A paragraph formatting strategy.
///
/// Implementors decide how each line sits horizontally; stacking lines
/// vertically, emitting geometry and computing extents are shared. All
/// methods are pure over their inputs, so a formatter can be reused for
/// every resize or reflow.
pub trait ParagraphFormatter {
    /// Placement of one line within `target_width`.
    fn place_line(
        &self,
        line: &RenderedLine,
        target_width: f32,
        is_last_line: bool,
    ) -> LinePlacement;

    /// Height of line `index`, from the line-measurement collaborator.
    fn line_height(&self, index: usize, line: &RenderedLine) -> f32;

    /// Emit one geometry request per line, top to bottom from `origin`.
    fn format<'a>(
        &self,
        lines: &'a [RenderedLine],
        target_width: f32,
        origin: Point,
    ) -> Vec<GeometryRequest<'a>> {
        let mut requests = Vec::with_capacity(lines.len());
        let mut y = origin.y;

        for (index, line) in lines.iter().enumerate() {
            let is_last_line = index + 1 == lines.len();
            let placement = self.place_line(line, target_width, is_last_line);
            let height = self.line_height(index, line);

            trace!(
                line = index,
                offset = placement.offset,
                extra_per_gap = placement.justification.extra_per_gap(),
                "placed line"
            );

            requests.push(GeometryRequest {
                line_index: index,
                origin: Point::new(origin.x + placement.offset, y),
                runs: &line.runs,
                justification: placement.justification,
                width: placement.justification.laid_out_width(line),
                height,
            });
            y += height;
        }

        debug!(
            lines = lines.len(),
            target_width,
            height = y - origin.y,
            "formatted paragraph"
        );
        requests
    }

    /// Widest laid-out line, alignment offset included.
    fn horizontal_extent(&self, lines: &[RenderedLine], target_width: f32) -> f32 {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let placement = self.place_line(line, target_width, index + 1 == lines.len());
                placement.offset + placement.justification.laid_out_width(line)
            })
            .fold(0.0, f32::max)
    }

    /// Sum of all line heights.
    fn vertical_extent(&self, lines: &[RenderedLine]) -> f32 {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| self.line_height(index, line))
            .sum()
    }
}

/// Full justification: every line but the last is stretched to the
/// target width. The last line is start-aligned.
#[derive(Debug, Clone)]
pub struct JustifiedLineFormatter<M> {
    measure: M,
}

impl<M: LineMeasure> JustifiedLineFormatter<M> {
    pub fn new(measure: M) -> Self {
        Self { measure }
    }
}

impl<M: LineMeasure> ParagraphFormatter for JustifiedLineFormatter<M> {
    fn place_line(
        &self,
        line: &RenderedLine,
        target_width: f32,
        is_last_line: bool,
    ) -> LinePlacement {
        LinePlacement {
            offset: 0.0,
            justification: LineJustifier::justify(line, target_width, is_last_line),
        }
    }

    fn line_height(&self, index: usize, line: &RenderedLine) -> f32 {
        self.measure.line_height(index, line)
    }
}

/// Where unjustified lines sit within the target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAlign {
    Start,
    Center,
    End,
}

/// Lines at natural width, shifted by free space per [`LineAlign`].
#[derive(Debug, Clone)]
pub struct AlignedLineFormatter<M> {
    measure: M,
    align: LineAlign,
}

impl<M: LineMeasure> AlignedLineFormatter<M> {
    pub fn new(measure: M, align: LineAlign) -> Self {
        Self { measure, align }
    }
}

impl<M: LineMeasure> ParagraphFormatter for AlignedLineFormatter<M> {
    fn place_line(
        &self,
        line: &RenderedLine,
        target_width: f32,
        _is_last_line: bool,
    ) -> LinePlacement {
        // Overflowing lines hang off the end instead of shifting left.
        let free_space = (target_width - line.natural_width()).max(0.0);
        let offset = match self.align {
            LineAlign::Start => 0.0,
            LineAlign::Center => free_space * 0.5,
            LineAlign::End => free_space,
        };
        LinePlacement {
            offset,
            justification: Justification::NotStretched,
        }
    }

    fn line_height(&self, index: usize, line: &RenderedLine) -> f32 {
        self.measure.line_height(index, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SubRun;

    fn paragraph() -> Vec<RenderedLine> {
        vec![
            RenderedLine::new(vec![SubRun::new(40.0, 1), SubRun::new(30.0, 0)]),
            RenderedLine::new(vec![
                SubRun::new(25.0, 1),
                SubRun::new(25.0, 1),
                SubRun::new(10.0, 0),
            ]),
            RenderedLine::new(vec![SubRun::new(20.0, 1), SubRun::new(15.0, 0)]),
        ]
    }

    #[test]
    fn justified_lines_fill_width_except_last() {
        let lines = paragraph();
        let formatter = JustifiedLineFormatter::new(20.0f32);
        let requests = formatter.format(&lines, 100.0, Point::zero());

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].extra_per_gap(), 30.0);
        assert_eq!(requests[1].extra_per_gap(), 20.0);
        assert_eq!(requests[2].justification, Justification::NotStretched);

        assert_eq!(requests[0].width, 100.0);
        assert_eq!(requests[1].width, 100.0);
        assert_eq!(requests[2].width, 35.0);
    }

    #[test]
    fn lines_advance_by_measured_height() {
        let lines = paragraph();
        let formatter = JustifiedLineFormatter::new(vec![10.0f32, 14.0, 12.0]);
        let requests = formatter.format(&lines, 100.0, Point::new(8.0, 100.0));

        let ys: Vec<f32> = requests.iter().map(|r| r.origin.y).collect();
        assert_eq!(ys, vec![100.0, 110.0, 124.0]);
        assert!(requests.iter().all(|r| r.origin.x == 8.0));
        assert_eq!(formatter.vertical_extent(&lines), 36.0);
        assert_eq!(requests[2].bottom() - 100.0, formatter.vertical_extent(&lines));
    }

    #[test]
    fn extents_match_emitted_geometry() {
        let lines = paragraph();
        let formatter = JustifiedLineFormatter::new(16.0f32);
        let requests = formatter.format(&lines, 100.0, Point::zero());

        let widest = requests.iter().map(GeometryRequest::right_edge).fold(0.0, f32::max);
        assert_eq!(formatter.horizontal_extent(&lines, 100.0), widest);
        assert_eq!(widest, 100.0);
    }

    #[test]
    fn single_line_paragraph_is_last_line() {
        let lines = vec![RenderedLine::new(vec![SubRun::new(10.0, 3)])];
        let formatter = JustifiedLineFormatter::new(16.0f32);
        let requests = formatter.format(&lines, 200.0, Point::zero());
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].justification.is_stretched());
        assert_eq!(formatter.horizontal_extent(&lines, 200.0), 10.0);
    }

    #[test]
    fn empty_paragraph_emits_nothing() {
        let formatter = JustifiedLineFormatter::new(16.0f32);
        assert!(formatter.format(&[], 100.0, Point::zero()).is_empty());
        assert_eq!(formatter.horizontal_extent(&[], 100.0), 0.0);
        assert_eq!(formatter.vertical_extent(&[]), 0.0);
    }

    #[test]
    fn format_does_not_touch_inputs() {
        let lines = paragraph();
        let before = lines.clone();
        let formatter = JustifiedLineFormatter::new(16.0f32);
        let narrow = formatter.format(&lines, 100.0, Point::zero());
        let wide = formatter.format(&lines, 140.0, Point::zero());
        assert_eq!(lines, before);
        assert_eq!(narrow[0].extra_per_gap(), 30.0);
        assert_eq!(wide[0].extra_per_gap(), 70.0);
    }

    #[test]
    fn aligned_offsets() {
        let lines = vec![RenderedLine::new(vec![SubRun::new(60.0, 2)])];
        let start = AlignedLineFormatter::new(10.0f32, LineAlign::Start);
        let center = AlignedLineFormatter::new(10.0f32, LineAlign::Center);
        let end = AlignedLineFormatter::new(10.0f32, LineAlign::End);

        assert_eq!(start.format(&lines, 100.0, Point::zero())[0].origin.x, 0.0);
        assert_eq!(center.format(&lines, 100.0, Point::zero())[0].origin.x, 20.0);
        assert_eq!(end.format(&lines, 100.0, Point::zero())[0].origin.x, 40.0);
        assert_eq!(end.horizontal_extent(&lines, 100.0), 100.0);
    }

    #[test]
    fn aligned_overflow_stays_at_start() {
        let lines = vec![RenderedLine::new(vec![SubRun::new(150.0, 0)])];
        let end = AlignedLineFormatter::new(10.0f32, LineAlign::End);
        let requests = end.format(&lines, 100.0, Point::zero());
        assert_eq!(requests[0].origin.x, 0.0);
        assert_eq!(requests[0].width, 150.0);
    }
}
