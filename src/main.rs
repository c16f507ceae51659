// src/main.rs
use anyhow::Result;
use vcb_compiler::{RasterBlueprint, compile};

fn main() -> Result<()> {
    env_logger::init();

    // Wire + inverter + output, the spec's smallest end-to-end scenario.
    let bp = RasterBlueprint::from_rows(&["rnw11"], |c| match c {
        'r' => vcb_compiler::ink_palette::READ,
        'n' => vcb_compiler::ink_palette::NOT,
        'w' => vcb_compiler::ink_palette::WRITE,
        '1' => vcb_compiler::ink_palette::TRACE1,
        _ => vcb_compiler::ink_palette::EMPTY,
    });

    let compilation = compile(&bp)?;
    println!(
        "compiled {}x{}: {} entities, {} connections",
        compilation.width,
        compilation.height,
        compilation.graph.entities.len(),
        compilation.graph.connections.len()
    );
    for msg in compilation.diagnostics.messages() {
        println!("diagnostic: {msg}");
    }

    Ok(())
}
