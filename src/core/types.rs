use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Share of the measured container width left as outer whitespace.
pub const CONTAINER_WIDTH_SHRINK: f64 = 0.1;
/// Container height as a fraction of the container width.
pub const CONTAINER_ASPECT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Outer chart frame reserved around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> PlotResult<Self> {
        for (value, name) in [
            (self.top, "top"),
            (self.right, "right"),
            (self.bottom, "bottom"),
            (self.left, "left"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidGeometry(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 70.0, 50.0, 70.0)
    }
}

/// Chart geometry fixed once from the container's measured width.
///
/// `width` and `height` describe the inner plotting area; the container size
/// includes the margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub margins: Margins,
    pub container_width: f64,
    pub container_height: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotGeometry {
    /// Derives the session geometry from the measured container width.
    pub fn from_container_width(measured_width: f64, margins: Margins) -> PlotResult<Self> {
        if !measured_width.is_finite() || measured_width <= 0.0 {
            return Err(PlotError::InvalidGeometry(
                "measured container width must be finite and > 0".to_owned(),
            ));
        }
        let margins = margins.validate()?;

        let container_width = measured_width - measured_width * CONTAINER_WIDTH_SHRINK;
        let container_height = container_width * CONTAINER_ASPECT;
        let width = container_width - margins.left - margins.right;
        let height = container_height - margins.top - margins.bottom;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidGeometry(format!(
                "plot area must be positive, got {width}x{height} from container width {measured_width}"
            )));
        }

        Ok(Self {
            margins,
            container_width,
            container_height,
            width,
            height,
        })
    }

    /// Pixel viewport of the whole drawing surface, margins included.
    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(
            self.container_width.round() as u32,
            self.container_height.round() as u32,
        )
    }
}
