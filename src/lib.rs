//! metric-plot: headless interactive scatter-plot engine.
//!
//! A plot draws a fixed y metric against a runtime-selectable x metric.
//! Switching the x metric replaces only the updateable subtree (x-axis,
//! points, hover labels); the y-axis and chart frame are drawn once.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{MetricPlot, PlotConfig};
pub use error::{PlotError, PlotResult};
