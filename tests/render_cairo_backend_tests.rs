#![cfg(feature = "cairo-backend")]

use metric_plot::PlotError;
use metric_plot::api::{MetricPlot, PlotConfig};
use metric_plot::core::{Dataset, Record};
use metric_plot::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 450).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_points_axes_and_hovered_label() {
    let renderer = CairoRenderer::new(900, 450).expect("renderer");
    let dataset = Dataset::new(vec![
        Record::from_pairs([("x", 10.0), ("y", 5.0)]),
        Record::from_pairs([("x", 20.0), ("y", 15.0)]),
        Record::from_pairs([("x", 5.0), ("y", 12.0)]),
    ]);
    let mut plot =
        MetricPlot::new(renderer, dataset, PlotConfig::new(1000.0, "x", "y")).expect("plot init");
    plot.pointer_enter_point(2);

    plot.render().expect("render");
    let frame = plot.build_render_frame();
    let renderer = plot.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());
    assert!(frame.texts.iter().any(|text| text.text == "(5, 12)"));
    assert_eq!(renderer.surface().width(), 900);
}
