use crate::{Effect, ImageAdjustResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Sepia tone configuration
///
/// `percent` blends between the original pixel (0) and the classic sepia
/// matrix (100).
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SepiaConfig {
    #[derivative(Default(value = "0"))]
    percent: i32,
}

impl SepiaConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for SepiaConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let intensity = (self.percent as f32 / 100.0).clamp(0.0, 1.0);

        for pixel in image.pixels_mut() {
            let r = pixel[0] as f32;
            let g = pixel[1] as f32;
            let b = pixel[2] as f32;

            // Sepia tone transformation
            let tr = (0.393 * r + 0.769 * g + 0.189 * b).min(255.0);
            let tg = (0.349 * r + 0.686 * g + 0.168 * b).min(255.0);
            let tb = (0.272 * r + 0.534 * g + 0.131 * b).min(255.0);

            // Blend with original based on intensity
            pixel[0] = (r * (1.0 - intensity) + tr * intensity) as u8;
            pixel[1] = (g * (1.0 - intensity) + tg * intensity) as u8;
            pixel[2] = (b * (1.0 - intensity) + tb * intensity) as u8;
        }

        Ok(())
    }
}
