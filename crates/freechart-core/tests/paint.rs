// File: crates/freechart-core/tests/paint.rs
// Purpose: Painter output recorded through DrawList: frame order, grid, axes, marks per chart kind.

use freechart_core::types::{GRID_STROKE, SCATTER_RADIUS};
use freechart_core::{
    compute_bounds, compute_scale, paint, Bounds, ChartKind, Color, Dataset, DrawList, DrawOp, GraphConfig, Point,
    ScaleConfig,
};

fn record(dataset: &Dataset, config: &GraphConfig) -> DrawList {
    let bounds = compute_bounds(dataset, config);
    let scale = compute_scale(&bounds, config.render.width, config.render.height, config);
    let mut list = DrawList::new();
    paint(&mut list, dataset, &scale, config);
    list
}

fn count(list: &DrawList, pred: impl Fn(&DrawOp) -> bool) -> usize {
    list.ops.iter().filter(|op| pred(op)).count()
}

fn polylines(list: &DrawList) -> Vec<&Vec<(f32, f32)>> {
    list.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Polyline { points, .. } => Some(points),
            _ => None,
        })
        .collect()
}

fn labels(list: &DrawList) -> Vec<&str> {
    list.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn frame_starts_with_background_then_grid() {
    let config = GraphConfig::default();
    let list = record(&Dataset::values(vec![vec![1.0, 2.0, 3.0]]), &config);

    assert_eq!(list.ops[0], DrawOp::Clear(config.render.background_color));
    // x in [-1, 3], y in [0, 4]: square of 520 px at (140, 40).
    assert_eq!(
        list.ops[1],
        DrawOp::Line { from: (140.0, 40.0), to: (140.0, 560.0), color: config.render.grid_color, width: GRID_STROKE }
    );
    let grid = count(&list, |op| matches!(op, DrawOp::Line { color, .. } if *color == config.render.grid_color));
    assert_eq!(grid, 12);
    assert_eq!(list.ops.len(), 1 + 12 + 4 + 1);
}

#[test]
fn axes_carry_span_labels() {
    let list = record(&Dataset::values(vec![vec![1.0, 2.0, 3.0]]), &GraphConfig::default());
    assert_eq!(labels(&list), vec!["4", "4"]);
}

#[test]
fn axes_hidden_when_origin_is_outside() {
    let config = GraphConfig::default().with_scale(ScaleConfig::manual(Bounds::new(10.0, 20.0, 10.0, 20.0)));
    let list = record(&Dataset::values(vec![vec![1.0]]), &config);
    assert!(labels(&list).is_empty());
    let axis = count(&list, |op| matches!(op, DrawOp::Line { color, .. } if *color == config.render.axis_color));
    assert_eq!(axis, 0);
}

#[test]
fn grid_and_axes_can_be_switched_off() {
    let mut config = GraphConfig::default();
    config.render.show_grid = false;
    config.render.show_axes = false;
    let list = record(&Dataset::values(vec![vec![1.0, 2.0]]), &config);
    assert_eq!(list.ops.len(), 2);
    assert!(matches!(list.ops[1], DrawOp::Polyline { .. }));
}

#[test]
fn scatter_draws_one_mark_per_point() {
    let config = GraphConfig::default().with_kind(ChartKind::Scatter);
    let ds = Dataset::points(vec![vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(-1.0, 3.0)]]);
    let list = record(&ds, &config);
    assert_eq!(count(&list, |op| matches!(op, DrawOp::Circle { radius, .. } if *radius == SCATTER_RADIUS)), 3);
    assert!(polylines(&list).is_empty());
}

#[test]
fn connected_kinds_draw_polylines_in_order() {
    for kind in [ChartKind::Line, ChartKind::Quadrant, ChartKind::QuadrantInverted] {
        let config = GraphConfig::default().with_kind(kind);
        let ds = Dataset::values(vec![vec![3.0, 1.0, 2.0], vec![5.0, 5.0]]);
        let list = record(&ds, &config);
        let lines = polylines(&list);
        assert_eq!(lines.len(), 2, "{kind}");
        assert_eq!(lines[0].len(), 3);
        assert!(lines[0].windows(2).all(|w| w[0].0 < w[1].0), "{kind}: index order on x");
        assert_eq!(count(&list, |op| matches!(op, DrawOp::Circle { .. })), 0);
    }
}

#[test]
fn inverted_quadrant_mirrors_vertically() {
    let ds = Dataset::points(vec![vec![Point::new(1.0, 2.0), Point::new(-2.0, -1.0)]]);
    let up = record(&ds, &GraphConfig::default().with_kind(ChartKind::Quadrant));
    let down = record(&ds, &GraphConfig::default().with_kind(ChartKind::QuadrantInverted));

    let (a, b) = (polylines(&up)[0], polylines(&down)[0]);
    // 520 px plot at y = 40: its vertical center is 300.
    let center = 300.0;
    for (p, q) in a.iter().zip(b.iter()) {
        assert_eq!(p.0, q.0);
        assert!((p.1 - center + (q.1 - center)).abs() < 1e-3, "{p:?} vs {q:?}");
    }
    // Positive y is above the center normally, below it when inverted.
    assert!(a[0].1 < center && b[0].1 > center);
}

#[test]
fn missing_style_uses_default_color() {
    let mut config = GraphConfig::default();
    config.series.clear();
    let list = record(&Dataset::values(vec![vec![1.0, 2.0]]), &config);
    assert!(list
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::Polyline { color, .. } if *color == Color::DEFAULT_SERIES)));
}

#[test]
fn hidden_series_are_skipped() {
    let mut config = GraphConfig::default();
    config.series[0].visible = false;
    config.series.push(freechart_core::SeriesStyle::new(Color::rgb(1, 2, 3)));
    let list = record(&Dataset::values(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]), &config);
    let lines: Vec<_> = list
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Polyline { color, points, .. } => Some((*color, points.len())),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![(Color::rgb(1, 2, 3), 3)]);
}

#[test]
fn non_finite_samples_are_not_drawn() {
    let list = record(&Dataset::values(vec![vec![1.0, f64::NAN, 3.0]]), &GraphConfig::default());
    assert_eq!(polylines(&list)[0].len(), 2);
}

#[test]
fn empty_dataset_still_draws_the_frame() {
    let list = record(&Dataset::values(vec![]), &GraphConfig::default());
    assert!(matches!(list.ops[0], DrawOp::Clear(_)));
    assert!(polylines(&list).is_empty());
    assert_eq!(labels(&list).len(), 2);
}

#[test]
fn repainting_replaces_the_previous_frame() {
    let config = GraphConfig::default();
    let ds = Dataset::values(vec![vec![1.0, 2.0, 3.0]]);
    let scale = compute_scale(&compute_bounds(&ds, &config), 800, 600, &config);
    let mut list = DrawList::new();
    paint(&mut list, &ds, &scale, &config);
    let first = list.ops.clone();
    paint(&mut list, &ds, &scale, &config);
    assert_eq!(list.ops, first);
}
