use approx::assert_abs_diff_eq;
use metric_plot::core::{AxisScale, DEFAULT_TICK_COUNT, Margins, PlotGeometry, format_tick};

#[test]
fn default_geometry_matches_container_ratios() {
    let geometry =
        PlotGeometry::from_container_width(1000.0, Margins::default()).expect("geometry");

    assert_eq!(geometry.container_width, 900.0);
    assert_eq!(geometry.container_height, 450.0);
    assert_eq!(geometry.width, 760.0);
    assert_eq!(geometry.height, 380.0);
    assert_eq!(geometry.viewport().width, 900);
    assert_eq!(geometry.viewport().height, 450);
}

#[test]
fn too_narrow_container_is_rejected() {
    let result = PlotGeometry::from_container_width(120.0, Margins::default());
    assert!(result.is_err());
}

#[test]
fn zero_based_scale_maps_endpoints_to_range() {
    let x = AxisScale::zero_based(Some(20.0), (0.0, 760.0)).expect("x scale");
    let y = AxisScale::zero_based(Some(15.0), (380.0, 0.0)).expect("y scale");

    assert_eq!(x.map(0.0), 0.0);
    assert_eq!(x.map(20.0), 760.0);
    assert_eq!(x.map(10.0), 380.0);
    assert_eq!(y.map(0.0), 380.0);
    assert_eq!(y.map(15.0), 0.0);
    assert_abs_diff_eq!(y.map(5.0), 380.0 - 380.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let empty = AxisScale::zero_based(None, (0.0, 760.0)).expect("scale");
    let zeros = AxisScale::zero_based(Some(0.0), (380.0, 0.0)).expect("scale");

    assert!(empty.is_degenerate());
    assert_eq!(empty.domain(), (0.0, 0.0));
    assert_eq!(empty.map(0.0), 380.0);
    assert_eq!(zeros.map(0.0), 190.0);
    assert_eq!(zeros.ticks(DEFAULT_TICK_COUNT).as_slice(), &[0.0]);
}

#[test]
fn nan_input_propagates() {
    let scale = AxisScale::zero_based(Some(10.0), (0.0, 100.0)).expect("scale");
    assert!(scale.map(f64::NAN).is_nan());
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(AxisScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    assert!(AxisScale::new((0.0, 1.0), (f64::NAN, 1.0)).is_err());
}

#[test]
fn ticks_use_round_steps() {
    let scale = AxisScale::zero_based(Some(20.0), (0.0, 760.0)).expect("scale");
    let ticks = scale.ticks(DEFAULT_TICK_COUNT);
    let expected: Vec<f64> = (0..=10).map(|i| f64::from(i) * 2.0).collect();
    assert_eq!(ticks.as_slice(), expected.as_slice());

    let fractional = AxisScale::zero_based(Some(0.93), (0.0, 760.0)).expect("scale");
    let ticks = fractional.ticks(DEFAULT_TICK_COUNT);
    assert_abs_diff_eq!(fractional.tick_step(DEFAULT_TICK_COUNT), 0.1, epsilon = 1e-12);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.get(3).copied(), Some(0.3));
    assert_eq!(ticks.last().copied(), Some(0.9));

    let wide = AxisScale::zero_based(Some(87.4), (380.0, 0.0)).expect("scale");
    assert_eq!(wide.tick_step(DEFAULT_TICK_COUNT), 10.0);
    assert_eq!(wide.ticks(DEFAULT_TICK_COUNT).last().copied(), Some(80.0));
}

#[test]
fn tick_labels_group_thousands_and_keep_step_precision() {
    assert_eq!(format_tick(250_000.0, 50_000.0), "250,000");
    assert_eq!(format_tick(1_000.0, 200.0), "1,000");
    assert_eq!(format_tick(0.3, 0.1), "0.3");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
    assert_eq!(format_tick(-1_200.0, 200.0), "-1,200");
    assert_eq!(format_tick(0.0, 2.0), "0");
}

#[test]
fn invert_recovers_domain_value() {
    let scale = AxisScale::zero_based(Some(15.0), (380.0, 0.0)).expect("scale");
    assert_abs_diff_eq!(scale.invert(scale.map(7.5)), 7.5, epsilon = 1e-12);
}
