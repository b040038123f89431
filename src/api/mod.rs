//! Interactive metric plot: initializer, incremental updater, hover and
//! selection handling, and the `MetricPlot` facade tying them together.

mod axis;
mod config;
mod hover;
mod initializer;
mod plot;
mod selection;
mod snapshot;
mod state;
mod surface;
mod updater;

pub use config::{DEFAULT_MEASURED_WIDTH, DEFAULT_X_METRIC, DEFAULT_Y_METRIC, PlotConfig};
pub use hover::{HoverIndex, LabelId, PointId};
pub use initializer::init_plot;
pub use plot::MetricPlot;
pub use selection::MetricSelector;
pub use snapshot::{LabelSnapshot, PlotSnapshot, PointSnapshot};
pub use state::{PlotPhase, PlotState};
pub use surface::{HoverLabel, PlotPoint, PlotSurface, UpdateableLayer};
pub use updater::{clear_updateable, draw_updateable, update_plot};
