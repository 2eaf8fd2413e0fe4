//! Compile command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;

use crate::loader;

/// Execute the compile command.
pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
    eprintln!(
        "{} Compiling {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let source =
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {input}"))?;
    let (set, program) = loader::load(&source)?;

    let gates = program.flatten();
    eprintln!(
        "  Loaded: {} gates, {} wires",
        gates.len(),
        alsvid_ir::wire_count(&gates)
    );

    let qasm = alsvid_qasm3::emit_flat(&gates, &set).context("Compilation failed")?;

    match output {
        Some(path) => {
            fs::write(path, &qasm).with_context(|| format!("Failed to write file: {path}"))?;
            eprintln!(
                "{} Output: {}",
                style("✓").green().bold(),
                style(path).green()
            );
        }
        None => print!("{qasm}"),
    }

    Ok(())
}
