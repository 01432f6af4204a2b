use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::commands::{print_error, print_source};
use crate::synth::{analyze, synthesize_from};

pub fn run(cli: &Cli) -> Result<()> {
    run_with(cli, &mut std::io::stdout().lock())
}

/// Synthesis failures are written to `out` and never returned as errors.
/// Source diagnostics are written before the icon is built.
pub fn run_with(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (input, output) = cli.resolve_paths()?;

    let (img, source) = match analyze(&input) {
        Ok(analyzed) => analyzed,
        Err(e) => {
            print_error(out, &e)?;
            return Ok(());
        }
    };
    print_source(out, &source)?;

    match synthesize_from(&img, source, &output) {
        Ok(synthesis) => {
            writeln!(
                out,
                "{} Generated {}",
                "✓".green(),
                synthesis.output.display()
            )?;
            writeln!(out, "Output info: {}", synthesis.output_info)?;
            writeln!(out, "blake3: {}", synthesis.hash)?;
        }
        Err(e) => print_error(out, &e)?,
    }

    Ok(())
}
