use tracing::{debug, warn};

use crate::core::{AxisScale, Dataset};
use crate::error::PlotResult;

use super::axis::{AxisStyle, push_bottom_axis, push_bottom_title};
use super::hover::{HoverIndex, LabelId, PointId};
use super::surface::{HoverLabel, PlotPoint, UpdateableLayer};
use super::{PlotConfig, PlotState, PlotSurface};

/// Removes the updateable subtree from `surface`.
///
/// Returns `true` when a subtree was present. Calling it on an
/// `Initialized` surface is a no-op.
pub fn clear_updateable(surface: &mut PlotSurface) -> bool {
    let removed = surface.take_updateable();
    if let Some(layer) = &removed {
        debug!(
            x_metric = %layer.x_metric,
            points = layer.points.len(),
            "cleared updateable subtree"
        );
    }
    removed.is_some()
}

/// Draws x-axis, x label, points and hidden hover labels for the current
/// x metric and installs them as the surface's updateable subtree.
///
/// Callers must clear first; [`update_plot`] does both.
pub fn draw_updateable(
    dataset: &Dataset,
    state: &PlotState,
    config: &PlotConfig,
    surface: &mut PlotSurface,
) -> PlotResult<()> {
    let geometry = surface.geometry();
    let x_metric = state.x_metric();
    let y_metric = state.y_metric();
    let x_max = dataset.max(x_metric);
    let x_scale = AxisScale::zero_based(x_max, (0.0, geometry.width))?;
    let y_scale = surface.y_scale();
    let style = AxisStyle::from_config(config);

    let mut layer = UpdateableLayer::new(x_metric, x_scale);
    push_bottom_axis(&mut layer.axis, x_scale, geometry, style);
    push_bottom_title(
        &mut layer.axis,
        x_metric,
        geometry,
        config.x_title_offset_px,
        style,
    );

    layer.points.reserve(dataset.len());
    layer.labels.reserve(dataset.len());
    for (index, record) in dataset.records().iter().enumerate() {
        let point = PointId(index);
        let cx = x_scale.map(record.metric(x_metric));
        let cy = y_scale.map(record.metric(y_metric));
        if !cx.is_finite() || !cy.is_finite() {
            warn!(
                index,
                x_metric, y_metric, "record has no numeric value for a plotted metric"
            );
        }

        layer.points.push(PlotPoint {
            id: point,
            cx,
            cy,
            radius: config.point_radius_px,
            color: config.point_color,
        });
        layer.labels.push(HoverLabel {
            id: LabelId::for_point(point),
            text: format!(
                "({}, {})",
                record.metric_text(x_metric),
                record.metric_text(y_metric)
            ),
            x: cx + config.label_offset_px,
            y: cy - config.label_offset_px,
            font_size_px: config.label_font_size_px,
            color: config.text_color,
            visible: false,
        });
    }
    layer.hover = HoverIndex::for_points(layer.points.len());

    debug!(
        x_metric,
        x_max = ?x_max,
        points = layer.points.len(),
        "drew updateable subtree"
    );
    surface.install_updateable(layer);
    Ok(())
}

/// Full replace of the updateable subtree: clear, then draw.
pub fn update_plot(
    dataset: &Dataset,
    state: &PlotState,
    config: &PlotConfig,
    surface: &mut PlotSurface,
) -> PlotResult<()> {
    clear_updateable(surface);
    draw_updateable(dataset, state, config, surface)
}

#[cfg(test)]
mod tests {
    use super::{clear_updateable, draw_updateable, update_plot};
    use crate::api::{PlotConfig, PlotPhase, PlotState, init_plot};
    use crate::core::{Dataset, Record};

    fn fixture() -> (Dataset, PlotState, PlotConfig) {
        let config = PlotConfig::new(1000.0, "x", "y");
        let state = PlotState::new("x", "y", config.geometry().expect("geometry"));
        let dataset = Dataset::new(vec![
            Record::from_pairs([("x", 10.0), ("y", 5.0), ("z", 1.0)]),
            Record::from_pairs([("x", 20.0), ("y", 15.0), ("z", 4.0)]),
        ]);
        (dataset, state, config)
    }

    #[test]
    fn clear_is_idempotent_on_initialized_surface() {
        let (dataset, state, config) = fixture();
        let mut surface = init_plot(&dataset, &state, &config).expect("init");
        assert!(!clear_updateable(&mut surface));
        assert!(!clear_updateable(&mut surface));
        assert_eq!(surface.phase(), PlotPhase::Initialized);
    }

    #[test]
    fn clear_then_draw_exposes_intermediate_state() {
        let (dataset, mut state, config) = fixture();
        let mut surface = init_plot(&dataset, &state, &config).expect("init");
        update_plot(&dataset, &state, &config, &mut surface).expect("update");
        let frame_layer = surface.frame_layer().clone();

        state.set_x_metric("z");
        assert!(clear_updateable(&mut surface));
        assert_eq!(surface.phase(), PlotPhase::Initialized);
        assert!(surface.points().is_empty());
        assert!(surface.labels().is_empty());
        assert_eq!(surface.frame_layer(), &frame_layer);

        draw_updateable(&dataset, &state, &config, &mut surface).expect("draw");
        assert_eq!(surface.phase(), PlotPhase::Rendered);
        assert_eq!(surface.x_scale().map(|s| s.domain()), Some((0.0, 4.0)));
        assert_eq!(surface.frame_layer(), &frame_layer);
    }

    #[test]
    fn missing_metric_yields_nan_coordinates() {
        let (dataset, mut state, config) = fixture();
        let mut surface = init_plot(&dataset, &state, &config).expect("init");
        state.set_x_metric("absent");
        update_plot(&dataset, &state, &config, &mut surface).expect("update");
        assert_eq!(surface.points().len(), 2);
        assert!(surface.points().iter().all(|point| point.cx.is_nan()));
        assert_eq!(surface.labels()[0].text, "(n/a, 5)");
    }
}
