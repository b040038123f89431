use crate::core::{AxisScale, PlotGeometry, format_tick};
use crate::render::{Color, LayerPrimitives, LinePrimitive, TextHAlign, TextPrimitive};

use super::PlotConfig;

pub(super) const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub(super) const AXIS_TICK_PADDING_PX: f64 = 3.0;
pub(super) const AXIS_STROKE_WIDTH_PX: f64 = 1.0;

/// Styling shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct AxisStyle {
    pub tick_count: usize,
    pub tick_font_size_px: f64,
    pub label_font_size_px: f64,
    pub color: Color,
    pub text_color: Color,
}

impl AxisStyle {
    pub(super) fn from_config(config: &PlotConfig) -> Self {
        Self {
            tick_count: config.tick_count,
            tick_font_size_px: config.tick_font_size_px,
            label_font_size_px: config.label_font_size_px,
            color: config.axis_color,
            text_color: config.text_color,
        }
    }
}

/// Horizontal axis along the bottom edge of the plot area.
pub(super) fn push_bottom_axis(
    layer: &mut LayerPrimitives,
    scale: AxisScale,
    geometry: PlotGeometry,
    style: AxisStyle,
) {
    let (range_start, range_end) = scale.range();
    let baseline = geometry.height;
    layer.push_line(LinePrimitive::new(
        range_start,
        baseline,
        range_end,
        baseline,
        AXIS_STROKE_WIDTH_PX,
        style.color,
    ));

    let step = scale.tick_step(style.tick_count);
    // Tick text baseline sits about 0.71em under the top of the glyphs.
    let text_y =
        baseline + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX + style.tick_font_size_px * 0.71;
    for tick in scale.ticks(style.tick_count) {
        let x = scale.map(tick);
        layer.push_line(LinePrimitive::new(
            x,
            baseline,
            x,
            baseline + AXIS_TICK_SIZE_PX,
            AXIS_STROKE_WIDTH_PX,
            style.color,
        ));
        layer.push_text(TextPrimitive::new(
            format_tick(tick, step),
            x,
            text_y,
            style.tick_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
}

/// Vertical axis along the left edge of the plot area.
pub(super) fn push_left_axis(layer: &mut LayerPrimitives, scale: AxisScale, style: AxisStyle) {
    let (range_start, range_end) = scale.range();
    layer.push_line(LinePrimitive::new(
        0.0,
        range_start,
        0.0,
        range_end,
        AXIS_STROKE_WIDTH_PX,
        style.color,
    ));

    let step = scale.tick_step(style.tick_count);
    let text_x = -(AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX);
    for tick in scale.ticks(style.tick_count) {
        let y = scale.map(tick);
        layer.push_line(LinePrimitive::new(
            -AXIS_TICK_SIZE_PX,
            y,
            0.0,
            y,
            AXIS_STROKE_WIDTH_PX,
            style.color,
        ));
        layer.push_text(TextPrimitive::new(
            format_tick(tick, step),
            text_x,
            y + style.tick_font_size_px * 0.32,
            style.tick_font_size_px,
            style.text_color,
            TextHAlign::Right,
        ));
    }
}

/// Metric name centred under the x axis.
pub(super) fn push_bottom_title(
    layer: &mut LayerPrimitives,
    title: &str,
    geometry: PlotGeometry,
    offset_px: f64,
    style: AxisStyle,
) {
    layer.push_text(TextPrimitive::new(
        title,
        geometry.width / 2.0,
        geometry.height + geometry.margins.top + offset_px,
        style.label_font_size_px,
        style.text_color,
        TextHAlign::Center,
    ));
}

/// Metric name rotated a quarter turn and centred beside the y axis.
pub(super) fn push_left_title(
    layer: &mut LayerPrimitives,
    title: &str,
    geometry: PlotGeometry,
    style: AxisStyle,
) {
    layer.push_text(
        TextPrimitive::new(
            title,
            -geometry.margins.left + style.label_font_size_px,
            geometry.height / 2.0,
            style.label_font_size_px,
            style.text_color,
            TextHAlign::Center,
        )
        .with_rotation(-90.0),
    );
}
