use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::commands::{print_error, print_source};
use crate::synth::analyze;

pub fn run(cli: &Cli) -> Result<()> {
    run_with(cli, &mut std::io::stdout().lock())
}

pub fn run_with(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (input, _) = cli.resolve_paths()?;

    match analyze(&input) {
        Ok((_, report)) => {
            print_source(out, &report)?;
            let a = &report.alpha;
            writeln!(
                out,
                "Alpha: min={}, max={} ({} transparent, {} partial, {} opaque of {} pixels)",
                a.min,
                a.max,
                a.transparent,
                a.partial,
                a.opaque,
                a.total()
            )?;
            if report.warnings.is_empty() {
                writeln!(out, "{} {} is ready to convert.", "✓".green(), input.display())?;
            }
        }
        Err(e) => print_error(out, &e)?,
    }

    Ok(())
}
