// src/bin/compile.rs
//
// Development convenience, not the blueprint string codec (out of scope,
// see SPEC_FULL §10.3): reads a tiny textual fixture — one row per line, one
// ASCII letter per pixel — compiles it, and prints the lint report, timing
// stats, and GraphViz text.
use std::{env, fs};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use vcb_compiler::color::Color;
use vcb_compiler::complex_graph::ComplexGraph;
use vcb_compiler::graphviz::{GraphSettings, build_graphviz};
use vcb_compiler::ink_palette;
use vcb_compiler::lint::{self, AnalysisSettings};
use vcb_compiler::{RasterBlueprint, compile};

/// `--config <path>` payload (spec §10.4): both fields optional, falling
/// back to their own `Default` when the file omits them.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Config {
    graph: GraphSettings,
    analysis: AnalysisSettings,
}

fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {path}"))
}

/// Minimal demo vocabulary: enough ink kinds to exercise a small circuit
/// from the command line. Anything unrecognized maps to Empty.
fn code(c: char) -> Color {
    match c {
        'r' => ink_palette::READ,
        'w' => ink_palette::WRITE,
        '1'..='9' => trace_by_digit(c),
        'n' => ink_palette::NOT,
        'a' => ink_palette::AND,
        'o' => ink_palette::OR,
        'b' => ink_palette::BUFFER,
        'x' => ink_palette::CROSS,
        't' => ink_palette::TUNNEL,
        'm' => ink_palette::MESH,
        'u' => ink_palette::BUS1,
        'L' => ink_palette::LED,
        _ => ink_palette::EMPTY,
    }
}

fn trace_by_digit(c: char) -> Color {
    match c {
        '1' => ink_palette::TRACE1,
        '2' => ink_palette::TRACE2,
        '3' => ink_palette::TRACE3,
        '4' => ink_palette::TRACE4,
        '5' => ink_palette::TRACE5,
        '6' => ink_palette::TRACE6,
        '7' => ink_palette::TRACE7,
        '8' => ink_palette::TRACE8,
        '9' => ink_palette::TRACE9,
        _ => ink_palette::EMPTY,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut fixture_path = None;
    let mut config_path = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(args.next().ok_or_else(|| anyhow!("--config needs a path"))?);
        } else {
            fixture_path = Some(arg);
        }
    }
    let path = fixture_path.ok_or_else(|| anyhow!("usage: compile <fixture-file> [--config <path>]"))?;
    let config = config_path.as_deref().map(load_config).transpose()?.unwrap_or_default();

    let text = fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
    let rows: Vec<&str> = text.lines().collect();
    if rows.is_empty() {
        return Err(anyhow!("{path} contains no rows"));
    }

    let bp = RasterBlueprint::from_rows(&rows, code);
    let compilation = compile(&bp).with_context(|| format!("compile {path}"))?;

    println!(
        "entities={} connections={}",
        compilation.graph.entities.len(),
        compilation.graph.connections.len()
    );
    for msg in compilation.diagnostics.messages() {
        println!("diagnostic: {msg}");
    }

    let complex = ComplexGraph::build(&compilation.graph);
    let report = lint::analyze(&complex, compilation.width, &config.analysis);
    println!("--- lint ---");
    for finding in &report.findings {
        println!("{finding}");
    }

    let settings = GraphSettings {
        timings: true,
        timinglabels: true,
        ..config.graph
    };
    let results = build_graphviz(&compilation.graph, compilation.width, compilation.height, &settings);
    println!("--- timing ---");
    println!("{:?}", results.stats);
    println!("--- graphviz ---");
    for line in &results.graphviz {
        println!("{line}");
    }

    Ok(())
}
