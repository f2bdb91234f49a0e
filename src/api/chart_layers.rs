use tracing::debug;

use crate::core::{Axis, Point, Segment, TickMark};
use crate::render::{
    Color, GroupNode, LayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{GraphConfig, SurfaceTransform};

pub(crate) const AXIS_COLOR: Color = Color::BLACK;
pub(crate) const LABEL_COLOR: Color = Color::BLACK;

/// Layer groups shared by every chart kind, assembled into a frame under the
/// surface transform.
pub(crate) struct ChartLayers {
    surface: SurfaceTransform,
    stroke_width: f64,
    font_size: f64,
    bounding_box: GroupNode,
    series: GroupNode,
    axis: GroupNode,
    tick_marks: GroupNode,
    labels: GroupNode,
}

impl ChartLayers {
    pub(crate) fn new(config: &GraphConfig) -> Self {
        Self {
            surface: SurfaceTransform::new(config.viewport, config.scale, config.margin),
            stroke_width: config.stroke_width,
            font_size: config.font_size,
            bounding_box: GroupNode::new(LayerKind::BoundingBox),
            series: GroupNode::new(LayerKind::Series),
            axis: GroupNode::new(LayerKind::Axis),
            tick_marks: GroupNode::new(LayerKind::TickMarks),
            labels: GroupNode::new(LayerKind::Labels),
        }
    }

    pub(crate) fn push_series_segment(&mut self, segment: Segment, color: Color) {
        self.series.push_line(LinePrimitive::from_points(
            segment.start,
            segment.end,
            self.stroke_width,
            color,
        ));
    }

    pub(crate) fn push_series_rect(&mut self, rect: RectPrimitive) {
        self.series.push_rect(rect);
    }

    pub(crate) fn push_axis(&mut self, start: Point, end: Point) {
        self.axis.push_line(LinePrimitive::from_points(
            start,
            end,
            self.stroke_width,
            AXIS_COLOR,
        ));
    }

    pub(crate) fn push_bounding_box(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.bounding_box.push_rect(RectPrimitive::outlined(
            x,
            y,
            width,
            height,
            self.stroke_width,
            AXIS_COLOR,
        ));
    }

    /// Tick mark plus its label.
    pub(crate) fn push_tick(&mut self, tick: &TickMark) {
        self.tick_marks.push_line(LinePrimitive::from_points(
            tick.segment.start,
            tick.segment.end,
            self.stroke_width,
            AXIS_COLOR,
        ));
        self.push_label(tick.axis, tick.label_anchor, &tick.label);
    }

    /// Label without a tick mark. X labels are centred under their anchor,
    /// Y labels end at it.
    pub(crate) fn push_label(&mut self, axis: Axis, anchor: Point, text: &str) {
        if text.is_empty() {
            return;
        }
        let h_align = match axis {
            Axis::X => TextHAlign::Center,
            Axis::Y => TextHAlign::Right,
        };
        self.labels.push_text(
            TextPrimitive::new(
                text,
                anchor.x,
                anchor.y,
                self.font_size,
                LABEL_COLOR,
                self.surface.align(h_align),
            )
            .with_transform(self.surface.text_upright()),
        );
    }

    pub(crate) fn font_size(&self) -> f64 {
        self.font_size
    }

    pub(crate) fn into_frame(self) -> RenderFrame {
        let mut root = GroupNode::new(LayerKind::Surface).with_transform(self.surface.affine());
        let Self {
            surface,
            bounding_box,
            series,
            axis,
            tick_marks,
            labels,
            ..
        } = self;

        // Paint order follows `LayerKind::CANONICAL_ORDER`.
        for group in [bounding_box, series, axis, tick_marks, labels] {
            root.push_group(group);
        }

        let frame = RenderFrame::with_root(surface.canvas(), root);
        let counts = frame.counts();
        debug!(
            lines = counts.lines,
            rects = counts.rects,
            texts = counts.texts,
            width = frame.viewport.width,
            height = frame.viewport.height,
            "assembled chart frame"
        );
        frame
    }
}
