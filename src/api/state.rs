use serde::{Deserialize, Serialize};

use crate::core::PlotGeometry;

/// Lifecycle phase of a plot surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotPhase {
    /// Y-axis drawn, no updateable subtree present.
    Initialized,
    /// X-axis, points and hover labels present.
    Rendered,
}

/// Metric selection and geometry of one plot session.
///
/// The y metric and geometry are fixed at construction; only the x metric
/// changes, through [`PlotState::set_x_metric`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotState {
    x_metric: String,
    y_metric: String,
    geometry: PlotGeometry,
}

impl PlotState {
    #[must_use]
    pub fn new(
        x_metric: impl Into<String>,
        y_metric: impl Into<String>,
        geometry: PlotGeometry,
    ) -> Self {
        Self {
            x_metric: x_metric.into(),
            y_metric: y_metric.into(),
            geometry,
        }
    }

    #[must_use]
    pub fn x_metric(&self) -> &str {
        &self.x_metric
    }

    #[must_use]
    pub fn y_metric(&self) -> &str {
        &self.y_metric
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    /// Replaces the active x metric, returning the previous one.
    pub fn set_x_metric(&mut self, metric: impl Into<String>) -> String {
        std::mem::replace(&mut self.x_metric, metric.into())
    }
}
