use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisScale, PlotGeometry};
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, RenderFrame, TextHAlign, TextPrimitive,
};

use super::PlotPhase;
use super::hover::{HoverIndex, LabelId, PointId};

/// One plotted record in plot-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub id: PointId,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
}

impl PlotPoint {
    #[must_use]
    pub fn circle(self) -> CirclePrimitive {
        CirclePrimitive::new(self.cx, self.cy, self.radius, self.color)
    }
}

/// Coordinate label revealed while its point is hovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverLabel {
    pub id: LabelId,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub visible: bool,
}

impl HoverLabel {
    #[must_use]
    pub fn primitive(&self) -> TextPrimitive {
        TextPrimitive::new(
            self.text.clone(),
            self.x,
            self.y,
            self.font_size_px,
            self.color,
            TextHAlign::Left,
        )
    }
}

/// Everything that is replaced when the x metric changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateableLayer {
    pub x_metric: String,
    pub x_scale: AxisScale,
    pub axis: LayerPrimitives,
    pub points: Vec<PlotPoint>,
    pub labels: Vec<HoverLabel>,
    pub hover: HoverIndex,
}

impl UpdateableLayer {
    #[must_use]
    pub fn new(x_metric: impl Into<String>, x_scale: AxisScale) -> Self {
        Self {
            x_metric: x_metric.into(),
            x_scale,
            axis: LayerPrimitives::new(),
            points: Vec::new(),
            labels: Vec::new(),
            hover: HoverIndex::default(),
        }
    }

    fn label_mut(&mut self, point: PointId) -> Option<&mut HoverLabel> {
        let label_id = self.hover.label_for(point)?;
        self.labels.iter_mut().find(|label| label.id == label_id)
    }
}

/// Drawing surface handle returned by the initializer.
///
/// Holds the fixed frame layer (y-axis) and, once rendered, the updateable
/// subtree. Coordinates are relative to the plot area; the margin offset is
/// applied when building a render frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSurface {
    geometry: PlotGeometry,
    y_scale: AxisScale,
    frame_layer: LayerPrimitives,
    updateable: Option<UpdateableLayer>,
}

impl PlotSurface {
    pub(super) fn new(geometry: PlotGeometry, y_scale: AxisScale) -> Self {
        Self {
            geometry,
            y_scale,
            frame_layer: LayerPrimitives::new(),
            updateable: None,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    #[must_use]
    pub fn y_scale(&self) -> AxisScale {
        self.y_scale
    }

    #[must_use]
    pub fn x_scale(&self) -> Option<AxisScale> {
        self.updateable.as_ref().map(|layer| layer.x_scale)
    }

    #[must_use]
    pub fn frame_layer(&self) -> &LayerPrimitives {
        &self.frame_layer
    }

    pub(super) fn frame_layer_mut(&mut self) -> &mut LayerPrimitives {
        &mut self.frame_layer
    }

    #[must_use]
    pub fn updateable(&self) -> Option<&UpdateableLayer> {
        self.updateable.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> PlotPhase {
        if self.updateable.is_some() {
            PlotPhase::Rendered
        } else {
            PlotPhase::Initialized
        }
    }

    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        self.updateable
            .as_ref()
            .map(|layer| layer.points.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn labels(&self) -> &[HoverLabel] {
        self.updateable
            .as_ref()
            .map(|layer| layer.labels.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn label(&self, id: LabelId) -> Option<&HoverLabel> {
        self.labels().iter().find(|label| label.id == id)
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<&HoverIndex> {
        self.updateable.as_ref().map(|layer| &layer.hover)
    }

    #[must_use]
    pub fn visible_labels(&self) -> Vec<LabelId> {
        self.labels()
            .iter()
            .filter(|label| label.visible)
            .map(|label| label.id)
            .collect()
    }

    /// Removes the updateable subtree, returning it. No-op when absent.
    pub(super) fn take_updateable(&mut self) -> Option<UpdateableLayer> {
        self.updateable.take()
    }

    pub(super) fn install_updateable(&mut self, layer: UpdateableLayer) {
        self.updateable = Some(layer);
    }

    /// Sets visibility of the label paired with `point`.
    ///
    /// Returns `true` when a label changed state.
    pub fn set_label_visible(&mut self, point: PointId, visible: bool) -> bool {
        let Some(label) = self
            .updateable
            .as_mut()
            .and_then(|layer| layer.label_mut(point))
        else {
            trace!(point = point.0, "hover on unknown point ignored");
            return false;
        };
        let changed = label.visible != visible;
        label.visible = visible;
        trace!(label = %label.id, visible, "label visibility");
        changed
    }

    /// Top-most point under a surface-space position, margins included.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PointId> {
        let local_x = x - self.geometry.margins.left;
        let local_y = y - self.geometry.margins.top;
        self.points()
            .iter()
            .rev()
            .find(|point| point.circle().contains(local_x, local_y))
            .map(|point| point.id)
    }

    /// Flattens the surface into a frame: fixed layer, then x-axis, points
    /// and visible labels.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.geometry.viewport());
        let dx = self.geometry.margins.left;
        let dy = self.geometry.margins.top;

        self.frame_layer.extend_frame(&mut frame, dx, dy);
        if let Some(layer) = &self.updateable {
            layer.axis.extend_frame(&mut frame, dx, dy);
            frame
                .circles
                .extend(layer.points.iter().map(|point| point.circle().translated(dx, dy)));
            frame.texts.extend(
                layer
                    .labels
                    .iter()
                    .filter(|label| label.visible)
                    .map(|label| label.primitive().translated(dx, dy)),
            );
        }
        frame
    }
}
