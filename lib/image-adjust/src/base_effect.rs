use crate::{Effect, ImageAdjustResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Rec.601 luma, the same weighting the grayscale and saturation passes share.
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Brightness adjustment configuration
///
/// `percent` is a channel multiplier: 100 leaves the image unchanged,
/// 50 halves every channel, 150 scales by 1.5 with clamping.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    #[derivative(Default(value = "100"))]
    percent: i32,
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for BrightnessConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let factor = self.percent as f32 / 100.0;

        for pixel in image.pixels_mut() {
            for i in 0..3 {
                let new_val = pixel[i] as f32 * factor;
                pixel[i] = new_val.clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }
}

/// Contrast adjustment configuration
///
/// Scales each channel around mid-gray: new = (old - 127.5) * percent/100 + 127.5
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ContrastConfig {
    #[derivative(Default(value = "100"))]
    percent: i32,
}

impl ContrastConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for ContrastConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let factor = self.percent as f32 / 100.0;

        for pixel in image.pixels_mut() {
            for i in 0..3 {
                let val = pixel[i] as f32;
                let new_val = (val - 127.5) * factor + 127.5;
                pixel[i] = new_val.clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }
}

/// Saturation adjustment configuration
///
/// Interpolates each channel between its luma (percent 0) and an
/// oversaturated extrapolation (percent > 100).
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SaturationConfig {
    #[derivative(Default(value = "100"))]
    percent: i32,
}

impl SaturationConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for SaturationConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let adjustment = self.percent as f32 / 100.0;

        for pixel in image.pixels_mut() {
            let gray = luminance(pixel[0], pixel[1], pixel[2]);

            for i in 0..3 {
                let val = pixel[i] as f32;
                let new_val = gray + (val - gray) * adjustment;
                pixel[i] = new_val.clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }
}

/// Grayscale configuration
///
/// `percent` blends toward the luma: 0 is a no-op, 100 is fully desaturated.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GrayscaleConfig {
    #[derivative(Default(value = "0"))]
    percent: i32,
}

impl GrayscaleConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for GrayscaleConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let amount = (self.percent as f32 / 100.0).clamp(0.0, 1.0);

        for pixel in image.pixels_mut() {
            let gray = luminance(pixel[0], pixel[1], pixel[2]);

            for i in 0..3 {
                let val = pixel[i] as f32;
                let new_val = val + (gray - val) * amount;
                pixel[i] = new_val.clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }
}

/// Color inversion configuration
///
/// `percent` blends toward the inverse: 0 is a no-op, 100 maps each
/// channel to 255 - value.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct InvertConfig {
    #[derivative(Default(value = "0"))]
    percent: i32,
}

impl InvertConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for InvertConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let amount = (self.percent as f32 / 100.0).clamp(0.0, 1.0);

        for pixel in image.pixels_mut() {
            for i in 0..3 {
                let val = pixel[i] as f32;
                let inverted = 255.0 - val;
                let new_val = val + (inverted - val) * amount;
                pixel[i] = new_val.clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }
}

/// Hue rotation configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct HueRotateConfig {
    #[derivative(Default(value = "0"))]
    degrees: i32,
}

impl HueRotateConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for HueRotateConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        // Hue rotation using RGB to HSL conversion, rotate H, convert back
        let degrees = (self.degrees % 360 + 360) % 360; // Normalize to 0-360

        for pixel in image.pixels_mut() {
            let r = pixel[0] as f32 / 255.0;
            let g = pixel[1] as f32 / 255.0;
            let b = pixel[2] as f32 / 255.0;

            // Convert RGB to HSL
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            let delta = max - min;

            let lightness = (max + min) / 2.0;
            let saturation = if delta == 0.0 {
                0.0
            } else {
                delta / (1.0 - (2.0 * lightness - 1.0).abs())
            };

            let mut hue = if delta == 0.0 {
                0.0
            } else if max == r {
                60.0 * (((g - b) / delta) % 6.0)
            } else if max == g {
                60.0 * (((b - r) / delta + 2.0) % 6.0)
            } else {
                60.0 * (((r - g) / delta + 4.0) % 6.0)
            };

            if hue < 0.0 {
                hue += 360.0;
            }

            // Rotate hue
            let hue = (hue + degrees as f32) % 360.0;

            // Convert HSL back to RGB
            let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
            let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
            let m = lightness - c / 2.0;

            let (r_new, g_new, b_new) = if hue < 60.0 {
                (c, x, 0.0)
            } else if hue < 120.0 {
                (x, c, 0.0)
            } else if hue < 180.0 {
                (0.0, c, x)
            } else if hue < 240.0 {
                (0.0, x, c)
            } else if hue < 300.0 {
                (x, 0.0, c)
            } else {
                (c, 0.0, x)
            };

            pixel[0] = ((r_new + m) * 255.0).clamp(0.0, 255.0) as u8;
            pixel[1] = ((g_new + m) * 255.0).clamp(0.0, 255.0) as u8;
            pixel[2] = ((b_new + m) * 255.0).clamp(0.0, 255.0) as u8;
        }

        Ok(())
    }
}
