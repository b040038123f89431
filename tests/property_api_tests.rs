use metric_plot::api::{MetricPlot, PlotConfig};
use metric_plot::core::{Dataset, Record};
use metric_plot::render::NullRenderer;
use proptest::prelude::*;

fn dataset(samples: &[(f64, f64, f64)]) -> Dataset {
    Dataset::new(
        samples
            .iter()
            .map(|&(x, y, z)| Record::from_pairs([("x", x), ("y", y), ("z", z)]))
            .collect(),
    )
}

proptest! {
    #[test]
    fn points_stay_inside_plot_area_property(
        samples in prop::collection::vec(
            (0.5f64..10_000.0, 0.5f64..10_000.0, 0.5f64..10_000.0),
            1..40
        ),
        measured_width in 400.0f64..2_400.0
    ) {
        let plot = MetricPlot::new(
            NullRenderer::default(),
            dataset(&samples),
            PlotConfig::new(measured_width, "x", "y"),
        )
        .expect("plot init");
        let geometry = plot.surface().geometry();
        let tolerance = 1e-9 * geometry.width.max(geometry.height);

        for point in plot.surface().points() {
            prop_assert!(point.cx >= -tolerance && point.cx <= geometry.width + tolerance);
            prop_assert!(point.cy >= -tolerance && point.cy <= geometry.height + tolerance);
        }

        let x_max = samples.iter().map(|sample| sample.0).fold(f64::MIN, f64::max);
        let right_most = plot
            .surface()
            .points()
            .iter()
            .map(|point| point.cx)
            .fold(f64::MIN, f64::max);
        prop_assert!((right_most - geometry.width).abs() <= tolerance);
        prop_assert_eq!(plot.surface().x_scale().map(|scale| scale.domain()), Some((0.0, x_max)));
    }

    #[test]
    fn metric_round_trip_restores_snapshot_property(
        samples in prop::collection::vec(
            (0.5f64..10_000.0, 0.5f64..10_000.0, 0.5f64..10_000.0),
            1..20
        )
    ) {
        let mut plot = MetricPlot::new(
            NullRenderer::default(),
            dataset(&samples),
            PlotConfig::new(1000.0, "x", "y"),
        )
        .expect("plot init");
        let initial = plot.snapshot();
        let initial_frame = plot.build_render_frame();
        let initial_subtree = plot.surface().updateable().cloned();

        prop_assert!(plot.select_x_metric("z").expect("switch"));
        prop_assert!(plot.select_x_metric("x").expect("switch back"));
        prop_assert_eq!(plot.snapshot(), initial);
        prop_assert_eq!(plot.build_render_frame(), initial_frame);
        prop_assert_eq!(plot.surface().updateable().cloned(), initial_subtree);
    }

    #[test]
    fn at_most_one_label_visible_property(
        moves in prop::collection::vec((0.0f64..900.0, 0.0f64..450.0), 1..30)
    ) {
        let samples = [(1.0, 2.0, 3.0), (4.0, 5.0, 6.0), (7.0, 8.0, 9.0), (2.5, 7.5, 1.0)];
        let mut plot = MetricPlot::new(
            NullRenderer::default(),
            dataset(&samples),
            PlotConfig::new(1000.0, "x", "y"),
        )
        .expect("plot init");

        for (x, y) in moves {
            let hovered = plot.pointer_move(x, y);
            let visible = plot.surface().visible_labels();
            prop_assert!(visible.len() <= 1);
            prop_assert_eq!(visible.first().map(|label| label.0), hovered.map(|point| point.0));
        }
    }
}
