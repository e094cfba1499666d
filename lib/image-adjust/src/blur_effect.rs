use crate::{Effect, ImageAdjustResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Gaussian blur configuration
///
/// `radius` is the blur length in pixels and is used as the Gaussian sigma.
/// A radius of 0 leaves the image unchanged.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BlurConfig {
    #[derivative(Default(value = "0"))]
    radius: u32,
}

impl BlurConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for BlurConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        if self.radius == 0 {
            return Ok(());
        }

        // Use imageproc since it's more efficient
        let blurred = imageproc::filter::gaussian_blur_f32(image, self.radius as f32);

        // Keep the original alpha channel
        for (pixel, blurred_pixel) in image.pixels_mut().zip(blurred.pixels()) {
            *pixel = image::Rgba([blurred_pixel[0], blurred_pixel[1], blurred_pixel[2], pixel[3]]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn test_blur_zero_radius_is_noop() {
        let mut image = checkerboard(6, 6);
        let expected = image.clone();

        BlurConfig::new().apply(&mut image).unwrap();

        assert_eq!(image, expected);
    }

    #[test]
    fn test_blur_smooths_checkerboard() {
        let mut image = checkerboard(9, 9);

        BlurConfig::new().with_radius(2).apply(&mut image).unwrap();

        // The center pixel started at full white or black and must move
        // toward the mid-tones once its neighborhood is averaged in.
        let pixel = image.get_pixel(4, 4);
        assert!(pixel[0] > 0 && pixel[0] < 255);
    }

    #[test]
    fn test_blur_preserves_alpha() {
        let mut image = RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([255, 0, 0, ((x + y) * 10) as u8])
        });
        let alphas: Vec<u8> = image.pixels().map(|p| p[3]).collect();

        BlurConfig::new().with_radius(3).apply(&mut image).unwrap();

        let blurred_alphas: Vec<u8> = image.pixels().map(|p| p[3]).collect();
        assert_eq!(alphas, blurred_alphas);
    }

    #[test]
    fn test_blur_is_deterministic() {
        let mut first = checkerboard(7, 5);
        let mut second = checkerboard(7, 5);

        BlurConfig::new().with_radius(2).apply(&mut first).unwrap();
        BlurConfig::new().with_radius(2).apply(&mut second).unwrap();

        assert_eq!(first, second);
    }
}
