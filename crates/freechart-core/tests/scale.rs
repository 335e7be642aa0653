// File: crates/freechart-core/tests/scale.rs
// Purpose: Autoscale bounds, power-of-two normalization, unified scale and quadrant centering.

use freechart_core::{
    compute_bounds, compute_scale, next_pow2, Bounds, ChartKind, Dataset, GraphConfig, Point, ScaleConfig,
};

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

fn config(kind: ChartKind) -> GraphConfig {
    GraphConfig::default().with_kind(kind)
}

#[test]
fn next_pow2_rounds_up() {
    assert_eq!(next_pow2(0.0), 1.0);
    assert_eq!(next_pow2(1.0), 1.0);
    assert_eq!(next_pow2(3.0), 4.0);
    assert_eq!(next_pow2(4.0), 4.0);
    assert_eq!(next_pow2(5.0), 8.0);
    assert_eq!(next_pow2(0.3), 0.5);
    assert_eq!(next_pow2(0.0625), 0.0625);
    assert_eq!(next_pow2(-3.0), 4.0);
    assert_eq!(next_pow2(1000.0), 1024.0);
    assert_eq!(next_pow2(f64::NAN), 1.0);
}

#[test]
fn next_pow2_is_idempotent() {
    let mut v = 1e-6;
    while v < 1e9 {
        let once = next_pow2(v);
        assert!(once >= v, "{once} < {v}");
        assert_eq!(next_pow2(once), once, "not idempotent at {v}");
        v *= 1.37;
    }
}

#[test]
fn autoscale_values_use_index_as_x_and_pad_ten_percent() {
    let ds = Dataset::values(vec![vec![1.0, 2.0, 3.0]]);
    let b = compute_bounds(&ds, &config(ChartKind::Line));
    assert!(close(b.x_min, -0.2) && close(b.x_max, 2.2), "{b:?}");
    assert!(close(b.y_min, 0.8) && close(b.y_max, 3.2), "{b:?}");
}

#[test]
fn autoscale_spans_every_series() {
    let ds = Dataset::points(vec![
        vec![Point::new(-5.0, 1.0), Point::new(0.0, 2.0)],
        vec![Point::new(5.0, -10.0)],
    ]);
    let b = compute_bounds(&ds, &config(ChartKind::Scatter));
    assert!(close(b.x_min, -6.0) && close(b.x_max, 6.0), "{b:?}");
    assert!(close(b.y_min, -11.2) && close(b.y_max, 3.2), "{b:?}");
}

#[test]
fn manual_bounds_are_returned_verbatim() {
    let manual = Bounds::new(3.0, 3.0, -1.0, 7.0);
    let cfg = GraphConfig::default().with_scale(ScaleConfig::manual(manual));
    let ds = Dataset::values(vec![vec![100.0, 200.0]]);
    assert_eq!(compute_bounds(&ds, &cfg), manual);
}

#[test]
fn zero_range_data_gives_a_finite_scale() {
    let ds = Dataset::points(vec![vec![Point::new(3.0, 3.0)]]);
    for kind in ChartKind::ALL {
        let cfg = config(kind);
        let b = compute_bounds(&ds, &cfg);
        assert_eq!(b, Bounds::at(3.0, 3.0));
        let s = compute_scale(&b, 800, 600, &cfg);
        for v in [s.x_min, s.x_max, s.y_min, s.y_max, s.x_scale, s.offset_x, s.offset_y] {
            assert!(v.is_finite(), "{kind}: {s:?}");
        }
        assert!(s.x_max > s.x_min);
    }
    let flat = Dataset::values(vec![vec![2.0, 2.0, 2.0]]);
    let s = compute_scale(&compute_bounds(&flat, &config(ChartKind::Line)), 400, 400, &config(ChartKind::Line));
    assert!(s.x_scale.is_finite() && s.x_scale > 0.0);
}

#[test]
fn empty_dataset_falls_back_to_manual_bounds() {
    let cfg = config(ChartKind::Line);
    let b = compute_bounds(&Dataset::values(vec![]), &cfg);
    assert_eq!(b, cfg.scale.bounds());
    let b = compute_bounds(&Dataset::values(vec![vec![f64::NAN]]), &cfg);
    assert_eq!(b, cfg.scale.bounds());
}

#[test]
fn plot_area_is_a_centered_square() {
    let cfg = config(ChartKind::Line);
    let s = compute_scale(&Bounds::new(0.0, 10.0, 0.0, 3.0), 800, 600, &cfg);
    // 720 x 520 available inside the 40 px margin.
    assert_eq!(s.plot_size, 520.0);
    assert_eq!(s.offset_x, 140.0);
    assert_eq!(s.offset_y, 40.0);

    let tall = compute_scale(&Bounds::new(0.0, 10.0, 0.0, 3.0), 300, 900, &cfg);
    assert_eq!(tall.plot_size, 220.0);
    assert_eq!(tall.offset_x, 40.0);
    assert_eq!(tall.offset_y, 340.0);
}

#[test]
fn line_mode_recenters_on_data_midpoint() {
    let s = compute_scale(&Bounds::new(0.0, 10.0, 0.0, 3.0), 800, 600, &config(ChartKind::Line));
    // Widest range 10 -> 16 on both axes.
    assert_eq!((s.x_min, s.x_max), (-3.0, 13.0));
    assert_eq!((s.y_min, s.y_max), (-6.5, 9.5));
    assert_eq!(s.x_scale, 520.0 / 16.0);
}

#[test]
fn quadrant_modes_center_the_origin() {
    let skewed = [
        Bounds::new(1.0, 3.0, 2.0, 5.0),
        Bounds::new(-100.0, -90.0, 0.0, 1.0),
        Bounds::new(0.0, 0.0, 0.0, 0.0),
        Bounds::new(-0.3, 0.1, 7.0, 7.5),
    ];
    for kind in [ChartKind::Quadrant, ChartKind::QuadrantInverted] {
        for b in skewed {
            let s = compute_scale(&b, 640, 480, &config(kind));
            assert_eq!((s.x_min + s.x_max) / 2.0, 0.0, "{b:?}");
            assert_eq!((s.y_min + s.y_max) / 2.0, 0.0, "{b:?}");
            assert!(s.x_min <= b.x_min && s.x_max >= b.x_max, "{b:?} not contained in {s:?}");
            assert!(s.y_min <= b.y_min && s.y_max >= b.y_max, "{b:?} not contained in {s:?}");
        }
    }
    let s = compute_scale(&Bounds::new(1.0, 3.0, 2.0, 5.0), 640, 480, &config(ChartKind::Quadrant));
    // max(2, 3, 2 * 5) = 10 -> 16.
    assert_eq!((s.x_min, s.x_max, s.y_min, s.y_max), (-8.0, 8.0, -8.0, 8.0));
    let s = compute_scale(&Bounds::new(-100.0, -90.0, 0.0, 1.0), 640, 480, &config(ChartKind::Quadrant));
    assert_eq!((s.x_min, s.x_max), (-128.0, 128.0));
}

#[test]
fn scale_is_unified_for_every_input() {
    let bounds = [
        Bounds::new(0.0, 1.0, 0.0, 1000.0),
        Bounds::new(-1e-6, 1e-6, 5.0, 5.0),
        Bounds::new(10.0, 10.0, -3.0, 9.0),
        Bounds::new(-1e9, 1e9, 0.0, 1.0),
    ];
    let sizes = [(800, 600), (300, 900), (10, 10), (4096, 128)];
    for kind in ChartKind::ALL {
        for b in bounds {
            for (w, h) in sizes {
                let s = compute_scale(&b, w, h, &config(kind));
                assert_eq!(s.x_scale, s.y_scale, "{kind} {b:?} {w}x{h}");
                assert!(s.x_scale.is_finite() && s.x_scale > 0.0);
            }
        }
    }
}

#[test]
fn pixel_mapping_and_inversion() {
    let s = compute_scale(&Bounds::new(-1.0, 1.0, -1.0, 1.0), 480, 480, &config(ChartKind::Quadrant));
    let top = s.offset_y as f32;
    let bottom = (s.offset_y + s.plot_size) as f32;
    let center = (s.offset_y + s.plot_size / 2.0) as f32;

    assert_eq!(s.x_to_px(s.x_min), s.offset_x as f32);
    assert_eq!(s.y_to_px(s.y_min, false), bottom);
    assert_eq!(s.y_to_px(s.y_max, false), top);
    assert_eq!(s.y_to_px(s.y_min, true), top);
    assert_eq!(s.y_to_px(s.y_max, true), bottom);
    assert_eq!(s.y_to_px(0.0, false), center);
    assert_eq!(s.y_to_px(0.0, true), center);

    for inverted in [false, true] {
        let py = s.y_to_px(0.75, inverted);
        assert!((s.y_from_px(py, inverted) - 0.75).abs() < 1e-4);
    }
    assert!((s.x_from_px(s.x_to_px(-0.5)) + 0.5).abs() < 1e-4);

    let rect = s.plot_rect();
    assert_eq!(rect.width(), rect.height());
}

#[test]
fn scale_is_recomputed_not_cached() {
    let cfg = config(ChartKind::Line);
    let b = Bounds::new(0.0, 4.0, 0.0, 4.0);
    let small = compute_scale(&b, 200, 200, &cfg);
    let large = compute_scale(&b, 1000, 1000, &cfg);
    assert!(large.x_scale > small.x_scale);
    assert_eq!(compute_scale(&b, 200, 200, &cfg), small);
}
