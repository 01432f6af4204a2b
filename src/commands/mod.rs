pub mod check;
pub mod generate;
pub mod init;

use std::io::{self, Write};

use colored::Colorize;

use crate::synth::{SourceReport, SynthError};

fn print_source(out: &mut impl Write, report: &SourceReport) -> io::Result<()> {
    writeln!(out, "Original image size: {}x{}", report.width, report.height)?;
    writeln!(out, "Has transparency: {}", report.alpha.has_transparency())?;
    for warning in &report.warnings {
        writeln!(out, "{} {}", "!".yellow(), warning)?;
    }
    Ok(())
}

fn print_error(out: &mut impl Write, err: &SynthError) -> io::Result<()> {
    match err {
        SynthError::MissingInput(_) => writeln!(out, "{} Error: {}", "✗".red(), err),
        SynthError::Processing(e) => writeln!(out, "{} An error occurred: {:#}", "✗".red(), e),
    }
}
