use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, PlotGeometry};
use crate::error::{PlotError, PlotResult};

use super::hover::{LabelId, PointId};
use super::{PlotPhase, PlotState, PlotSurface};

/// Serializable description of the current plot scene.
///
/// Two snapshots compare equal when the rendered state is structurally the
/// same, which makes it the reference for metric-switch round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub phase: PlotPhase,
    pub x_metric: String,
    pub y_metric: String,
    pub geometry: PlotGeometry,
    pub y_scale: AxisScale,
    pub x_scale: Option<AxisScale>,
    pub points: Vec<PointSnapshot>,
    pub labels: Vec<LabelSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub id: PointId,
    pub cx: f64,
    pub cy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSnapshot {
    pub id: LabelId,
    pub text: String,
    pub visible: bool,
}

impl PlotSnapshot {
    #[must_use]
    pub fn capture(state: &PlotState, surface: &PlotSurface) -> Self {
        Self {
            phase: surface.phase(),
            x_metric: state.x_metric().to_owned(),
            y_metric: state.y_metric().to_owned(),
            geometry: surface.geometry(),
            y_scale: surface.y_scale(),
            x_scale: surface.x_scale(),
            points: surface
                .points()
                .iter()
                .map(|point| PointSnapshot {
                    id: point.id,
                    cx: point.cx,
                    cy: point.cy,
                })
                .collect(),
            labels: surface
                .labels()
                .iter()
                .map(|label| LabelSnapshot {
                    id: label.id,
                    text: label.text.clone(),
                    visible: label.visible,
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| PlotError::InvalidData(format!("failed to serialize snapshot: {err}")))
    }
}
