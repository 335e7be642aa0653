// File: crates/freechart-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders small deterministic charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without failing to ease first run.

use freechart_core::{parse, ChartKind, GraphConfig};
use freechart_skia::{render_to_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(text: &str, kind: ChartKind) -> Vec<u8> {
    let dataset = parse(text).into_result().expect("parse");
    let config = GraphConfig::default().with_kind(kind).with_size(320, 240);
    let opts = RenderOptions { draw_labels: false }; // deterministic
    render_to_png_bytes(&dataset, &config, &opts).expect("render bytes")
}

#[test]
fn golden_line_chart() {
    write_or_compare("line_chart.png", &render("0, 1, 0, 1.5, 1", ChartKind::Line));
}

#[test]
fn golden_scatter_chart() {
    write_or_compare("scatter_chart.png", &render("[1, 2] [3, 4] [-2, 1]", ChartKind::Scatter));
}

#[test]
fn golden_quadrant_charts() {
    let text = "{x: [-3, -1, 2, 4], y: [2, -2, 3, -1]}";
    write_or_compare("quadrant_chart.png", &render(text, ChartKind::Quadrant));
    write_or_compare("quadrant_inverted_chart.png", &render(text, ChartKind::QuadrantInverted));
}

#[test]
fn decoded_size_matches_config() {
    let img = image::load_from_memory(&render("1 2 3", ChartKind::Line)).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 240));
}
