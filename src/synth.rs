use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

use crate::icon::{self, ImageInfo};
use crate::silhouette::{self, AlphaStats};

pub const NO_TRANSPARENCY_WARNING: &str =
    "Source has no transparency. The icon will be a solid white square.";

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("{} not found", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Processing(#[from] anyhow::Error),
}

/// What the source looked like before any output was produced.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub width: u32,
    pub height: u32,
    pub alpha: AlphaStats,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Synthesis {
    pub source: SourceReport,
    pub output: PathBuf,
    pub output_info: ImageInfo,
    pub hash: String,
}

/// Loads `input` and runs the transparency diagnostic without writing anything.
pub fn analyze(input: &Path) -> Result<(RgbaImage, SourceReport), SynthError> {
    if !input.is_file() {
        return Err(SynthError::MissingInput(input.to_path_buf()));
    }

    let img = icon::load_rgba(input)?;
    let alpha = AlphaStats::of(&silhouette::alpha_mask(&img));

    let mut warnings = Vec::new();
    if !alpha.has_transparency() {
        warnings.push(NO_TRANSPARENCY_WARNING.to_string());
    }

    let report = SourceReport {
        width: img.width(),
        height: img.height(),
        alpha,
        warnings,
    };
    Ok((img, report))
}

/// Writes the white-silhouette icon of `input` to `output` and reads it back.
pub fn synthesize(input: &Path, output: &Path) -> Result<Synthesis, SynthError> {
    let (img, source) = analyze(input)?;
    synthesize_from(&img, source, output)
}

/// Builds, writes and re-opens the icon for an already analyzed source.
pub fn synthesize_from(
    img: &RgbaImage,
    source: SourceReport,
    output: &Path,
) -> Result<Synthesis, SynthError> {
    let canvas = silhouette::white_silhouette(img);
    let bytes = icon::encode_png(&canvas)?;
    icon::write_file(output, &bytes)?;

    let output_info = icon::inspect(output)?;

    Ok(Synthesis {
        source,
        output: output.to_path_buf(),
        output_info,
        hash: icon::hash_bytes(&bytes),
    })
}
