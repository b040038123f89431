use serde::{Deserialize, Serialize};

use super::{LinePrimitive, RenderFrame, TextPrimitive};

/// Axis primitives of one surface layer, in plot-area coordinates.
///
/// Points and hover labels are kept as plot objects on the surface; a layer
/// only holds the strokes and text the axis builders emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }

    /// Appends this layer to `frame`, shifted by the plot-area origin.
    pub fn extend_frame(&self, frame: &mut RenderFrame, dx: f64, dy: f64) {
        frame
            .lines
            .extend(self.lines.iter().map(|line| line.translated(dx, dy)));
        frame
            .texts
            .extend(self.texts.iter().map(|text| text.clone().translated(dx, dy)));
    }
}
