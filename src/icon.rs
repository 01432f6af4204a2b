use std::fmt;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ColorType, ImageFormat, ImageReader, RgbaImage};

/// Opens an image from disk and normalizes it to 8-bit RGBA. Sources without
/// an alpha channel come out fully opaque.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image: {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;

    Ok(img.to_rgba8())
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf)
}

/// Writes `bytes` to `path`, creating missing parent directories. An existing
/// file is overwritten.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = match self.format {
            Some(format) => format!("{format:?}"),
            None => "unknown".to_string(),
        };
        write!(
            f,
            "{}, {}x{}, {:?}",
            format, self.width, self.height, self.color
        )
    }
}

/// Re-opens an image file and reports what a reader sees in it.
pub fn inspect(path: &Path) -> Result<ImageInfo> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image: {}", path.display()))?;

    let format = reader.format();
    let img = reader
        .decode()
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;

    Ok(ImageInfo {
        format,
        width: img.width(),
        height: img.height(),
        color: img.color(),
    })
}
