use tracing::debug;

use crate::core::{AxisScale, Dataset};
use crate::error::PlotResult;

use super::axis::{AxisStyle, push_left_axis, push_left_title};
use super::{PlotConfig, PlotState, PlotSurface};

/// Creates the drawing surface and draws the immutable y-axis.
///
/// The y scale maps `[0, max(y metric)]` onto `[height, 0]` and is never
/// rebuilt afterwards. The returned surface is in the `Initialized` phase.
pub fn init_plot(
    dataset: &Dataset,
    state: &PlotState,
    config: &PlotConfig,
) -> PlotResult<PlotSurface> {
    let geometry = state.geometry();
    let y_max = dataset.max(state.y_metric());
    let y_scale = AxisScale::zero_based(y_max, (geometry.height, 0.0))?;

    let mut surface = PlotSurface::new(geometry, y_scale);
    let style = AxisStyle::from_config(config);
    let frame_layer = surface.frame_layer_mut();
    push_left_axis(frame_layer, y_scale, style);
    push_left_title(frame_layer, state.y_metric(), geometry, style);

    debug!(
        y_metric = state.y_metric(),
        y_max = ?y_max,
        width = geometry.width,
        height = geometry.height,
        "initialized plot surface"
    );
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::init_plot;
    use crate::api::{PlotConfig, PlotPhase, PlotState};
    use crate::core::{Dataset, Record};

    #[test]
    fn init_draws_only_the_y_axis() {
        let config = PlotConfig::new(1000.0, "x", "y");
        let state = PlotState::new("x", "y", config.geometry().expect("geometry"));
        let dataset = Dataset::new(vec![Record::from_pairs([("x", 1.0), ("y", 50.0)])]);

        let surface = init_plot(&dataset, &state, &config).expect("init");

        assert_eq!(surface.phase(), PlotPhase::Initialized);
        assert!(surface.x_scale().is_none());
        assert_eq!(surface.y_scale().domain(), (0.0, 50.0));
        assert_eq!(surface.y_scale().range(), (380.0, 0.0));
        assert!(surface.frame_layer().texts.iter().any(|text| text.text == "y"));
    }
}
