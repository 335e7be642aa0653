// File: crates/freechart-cli/src/main.rs
// Summary: CLI that parses pasted numeric text, prints its canonical form and renders it to PNG.

use anyhow::{Context, Result};
use freechart_core::{theme, to_text, ChartKind, ChartSession, Classifier, GraphConfig, ParseOptions};
use freechart_skia::RenderOptions;
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: freechart [INPUT|-] [--type line|scatter|quadrant|quadrant-inverted] \
[--theme NAME] [--config FILE.json] [--size WxH] [--out FILE.png] [--short-even]";

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    kind: Option<ChartKind>,
    theme: Option<String>,
    config: Option<PathBuf>,
    size: Option<(u32, u32)>,
    out: Option<PathBuf>,
    short_even: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args(std::env::args().skip(1))?;

    let raw = read_input(args.input.as_deref())?;
    info!("read {} bytes of input", raw.len());
    let mut config = match &args.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(kind) = args.kind {
        config = config.with_kind(kind);
    }
    if let Some((w, h)) = args.size {
        config = config.with_size(w, h);
    }

    let classifier = if args.short_even { Classifier::ShortEvenArrays } else { Classifier::ExactPairs };
    let mut session = ChartSession::new(config).with_parse_options(ParseOptions { classifier });

    let result = session.load_text(&raw);
    let dataset = match result.into_result() {
        Ok(dataset) => dataset,
        Err(message) => anyhow::bail!("could not parse input: {message}"),
    };
    println!("Parsed {} dataset with {} series", dataset.data_type(), dataset.series_count());
    println!("{}", to_text(&dataset));

    if let Some(name) = &args.theme {
        let theme = theme::find(name);
        info!("applying theme {}", theme.name);
        session.set_config(theme.apply(session.config(), dataset.series_count()));
    }

    if let Some(frame) = session.frame() {
        let s = frame.scale;
        println!(
            "Scale: x [{}, {}] y [{}, {}] at {:.3} px/unit",
            s.x_min, s.x_max, s.y_min, s.y_max, s.x_scale
        );
    }

    let out = args.out.clone().unwrap_or_else(|| out_name(args.input.as_deref()));
    freechart_skia::render_to_png(&dataset, session.config(), &RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value\n{USAGE}"));
        match arg.as_str() {
            "--type" => args.kind = Some(value("--type")?.parse()?),
            "--theme" => args.theme = Some(value("--theme")?),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--size" => args.size = Some(parse_size(&value("--size")?)?),
            "--out" => args.out = Some(PathBuf::from(value("--out")?)),
            "--short-even" => args.short_even = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            "-" => args.input = None,
            other if other.starts_with("--") => anyhow::bail!("unknown option {other}\n{USAGE}"),
            other => args.input = Some(PathBuf::from(other)),
        }
    }
    Ok(args)
}

/// Parse `WxH`, e.g. `800x600`.
fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("size '{s}' is not WxH"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("bad width in '{s}'"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("bad height in '{s}'"))?;
    if w == 0 || h == 0 {
        anyhow::bail!("size '{s}' must be non-zero");
    }
    Ok((w, h))
}

/// File contents, or stdin when no path (or `-`) was given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            eprintln!("Reading data from stdin...");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Produce output file name like target/out/freechart_<stem>.png
fn out_name(input: Option<&Path>) -> PathBuf {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("stdin");
    PathBuf::from("target/out").join(format!("freechart_{stem}.png"))
}
