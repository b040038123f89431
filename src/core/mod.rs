pub mod dataset;
pub mod scale;
pub mod source;
pub mod types;

pub use dataset::{Dataset, MISSING_FIELD_TEXT, Record, RecordLayout};
pub use scale::{AxisScale, DEFAULT_TICK_COUNT, TickValues, format_tick};
pub use source::{DatasetSource, FileSource, StaticSource};
pub use types::{Margins, PlotGeometry, Viewport};
