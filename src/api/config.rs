use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TICK_COUNT, Margins, PlotGeometry, RecordLayout};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

pub const DEFAULT_MEASURED_WIDTH: f64 = 1000.0;
pub const DEFAULT_X_METRIC: &str = "humidity";
pub const DEFAULT_Y_METRIC: &str = "apparentTemperatureHigh";

/// Session configuration for an interactive metric plot.
///
/// Serializable so hosts can keep plot setup next to the dataset instead of
/// hard-coding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Width of the host container measured at load time.
    pub measured_width: f64,
    #[serde(default)]
    pub margins: Margins,
    /// Metric on the x axis when the plot first renders.
    pub x_metric: String,
    /// Metric on the y axis for the whole session.
    pub y_metric: String,
    /// Options offered by the metric selector. Empty means "every numeric
    /// field of the first record except the y metric".
    #[serde(default)]
    pub x_metric_options: Vec<String>,
    /// Shape of each source record; passed to `DatasetSource::load`.
    #[serde(default)]
    pub layout: RecordLayout,
    #[serde(default = "default_point_radius")]
    pub point_radius_px: f64,
    #[serde(default = "default_label_offset")]
    pub label_offset_px: f64,
    #[serde(default = "default_tick_font_size")]
    pub tick_font_size_px: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size_px: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_x_title_offset")]
    pub x_title_offset_px: f64,
    #[serde(default = "default_color")]
    pub point_color: Color,
    #[serde(default = "default_color")]
    pub axis_color: Color,
    #[serde(default = "default_color")]
    pub text_color: Color,
}

impl PlotConfig {
    #[must_use]
    pub fn new(
        measured_width: f64,
        x_metric: impl Into<String>,
        y_metric: impl Into<String>,
    ) -> Self {
        Self {
            measured_width,
            margins: Margins::default(),
            x_metric: x_metric.into(),
            y_metric: y_metric.into(),
            x_metric_options: Vec::new(),
            layout: RecordLayout::default(),
            point_radius_px: default_point_radius(),
            label_offset_px: default_label_offset(),
            tick_font_size_px: default_tick_font_size(),
            label_font_size_px: default_label_font_size(),
            tick_count: default_tick_count(),
            x_title_offset_px: default_x_title_offset(),
            point_color: default_color(),
            axis_color: default_color(),
            text_color: default_color(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the selector options; the initial x metric must be one of them.
    #[must_use]
    pub fn with_x_metric_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.x_metric_options = options.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius_px: f64) -> Self {
        self.point_radius_px = radius_px;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Geometry fixed for the session by this config.
    pub fn geometry(&self) -> PlotResult<PlotGeometry> {
        PlotGeometry::from_container_width(self.measured_width, self.margins)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.x_metric.is_empty() || self.y_metric.is_empty() {
            return Err(PlotError::InvalidData(
                "x and y metric names must not be empty".to_owned(),
            ));
        }
        for (value, name) in [
            (self.point_radius_px, "point_radius_px"),
            (self.tick_font_size_px, "tick_font_size_px"),
            (self.label_font_size_px, "label_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "config `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.label_offset_px, "label_offset_px"),
            (self.x_title_offset_px, "x_title_offset_px"),
        ] {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "config `{name}` must be finite"
                )));
            }
        }
        if self.tick_count == 0 {
            return Err(PlotError::InvalidData(
                "config `tick_count` must be > 0".to_owned(),
            ));
        }
        if !self.x_metric_options.is_empty() && !self.x_metric_options.contains(&self.x_metric) {
            return Err(PlotError::UnknownMetric(self.x_metric.clone()));
        }
        for color in [self.point_color, self.axis_color, self.text_color] {
            color.validate()?;
        }
        self.geometry().map(|_| ())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEASURED_WIDTH, DEFAULT_X_METRIC, DEFAULT_Y_METRIC)
    }
}

fn default_point_radius() -> f64 {
    5.0
}

fn default_label_offset() -> f64 {
    5.0
}

fn default_tick_font_size() -> f64 {
    10.0
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_x_title_offset() -> f64 {
    20.0
}

fn default_color() -> Color {
    Color::BLACK
}

#[cfg(test)]
mod tests {
    use super::PlotConfig;
    use crate::core::RecordLayout;
    use crate::error::PlotError;

    #[test]
    fn minimal_json_fills_defaults() {
        let config: PlotConfig = serde_json::from_str(
            r#"{"measured_width": 800, "x_metric": "x", "y_metric": "y", "layout": "flat"}"#,
        )
        .expect("config");
        assert_eq!(config.layout, RecordLayout::Flat);
        assert_eq!(config.point_radius_px, 5.0);
        assert_eq!(config.margins.left, 70.0);
        config.validate().expect("valid");
    }

    #[test]
    fn initial_metric_must_be_an_option() {
        let config = PlotConfig::new(1000.0, "x", "y").with_x_metric_options(["a", "b"]);
        assert!(matches!(config.validate(), Err(PlotError::UnknownMetric(_))));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let config = PlotConfig::default().with_point_radius(0.0);
        assert!(config.validate().is_err());
    }
}
