//! Pixel operations for building a flat white silhouette out of a logo's
//! alpha channel.

use image::{GrayImage, Luma, Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Extracts the alpha channel as a standalone single-channel image.
pub fn alpha_mask(img: &RgbaImage) -> GrayImage {
    let (w, h) = img.dimensions();
    GrayImage::from_fn(w, h, |x, y| Luma([img.get_pixel(x, y)[3]]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaStats {
    pub min: u8,
    pub max: u8,
    pub transparent: u64,
    pub partial: u64,
    pub opaque: u64,
}

impl AlphaStats {
    pub fn of(mask: &GrayImage) -> Self {
        let mut stats = AlphaStats {
            min: u8::MAX,
            max: u8::MIN,
            transparent: 0,
            partial: 0,
            opaque: 0,
        };

        for Luma([a]) in mask.pixels() {
            stats.min = stats.min.min(*a);
            stats.max = stats.max.max(*a);
            match *a {
                0 => stats.transparent += 1,
                255 => stats.opaque += 1,
                _ => stats.partial += 1,
            }
        }

        // An empty image has nothing to see through.
        if mask.is_empty() {
            stats.min = u8::MAX;
            stats.max = u8::MAX;
        }

        stats
    }

    pub fn has_transparency(&self) -> bool {
        self.min < u8::MAX
    }

    pub fn total(&self) -> u64 {
        self.transparent + self.partial + self.opaque
    }
}

/// Composites `color` onto `canvas` with per-pixel coverage taken from `mask`
/// (source-over).
///
/// # Panics
///
/// Panics if `mask` and `canvas` differ in size.
pub fn paste_masked(canvas: &mut RgbaImage, color: Rgba<u8>, mask: &GrayImage) {
    assert_eq!(
        canvas.dimensions(),
        mask.dimensions(),
        "mask must match canvas size"
    );

    for (dst, Luma([m])) in canvas.pixels_mut().zip(mask.pixels()) {
        *dst = blend_over(*dst, color, *m);
    }
}

fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let sa = mul_div255(src[3] as u32, coverage as u32);
    let da = dst[3] as u32;
    let da_rest = mul_div255(da, 255 - sa);
    let out_a = sa + da_rest;

    if out_a == 0 {
        return Rgba([dst[0], dst[1], dst[2], 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let num = src[c] as u32 * sa + dst[c] as u32 * da_rest;
        out[c] = ((num + out_a / 2) / out_a) as u8;
    }
    out[3] = out_a as u8;
    Rgba(out)
}

fn mul_div255(a: u32, b: u32) -> u32 {
    (a * b + 127) / 255
}

/// Builds the notification icon: a transparent white canvas the size of
/// `img`, stamped with opaque white through `img`'s alpha channel.
pub fn white_silhouette(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let mask = alpha_mask(img);

    let mut canvas = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 0]));
    paste_masked(&mut canvas, WHITE, &mask);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_onto_transparent_keeps_coverage_as_alpha() {
        let base = Rgba([255, 255, 255, 0]);
        for m in 0..=255u8 {
            let out = blend_over(base, WHITE, m);
            assert_eq!(out, Rgba([255, 255, 255, m]));
        }
    }

    #[test]
    fn blend_full_coverage_replaces_pixel() {
        let out = blend_over(Rgba([10, 20, 30, 255]), WHITE, 255);
        assert_eq!(out, WHITE);
    }

    #[test]
    fn blend_zero_coverage_leaves_pixel() {
        let px = Rgba([10, 20, 30, 200]);
        assert_eq!(blend_over(px, WHITE, 0), px);
    }

    #[test]
    fn blend_half_over_opaque_black_is_grey() {
        let out = blend_over(Rgba([0, 0, 0, 255]), WHITE, 128);
        assert_eq!(out[3], 255);
        assert_eq!(out[0], 128);
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
    }

    #[test]
    fn stats_of_empty_mask() {
        let stats = AlphaStats::of(&GrayImage::new(0, 0));
        assert!(!stats.has_transparency());
        assert_eq!(stats.total(), 0);
    }
}
