use crate::{Effect, ImageAdjustError, ImageAdjustResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Sharpen an RGBA buffer with a 3x3 convolution kernel.
///
/// The kernel is a cross with center weight `5 + intensity`:
///
/// ```text
/// [ 0,            -1,  0]
/// [-1,  5 + intensity, -1]
/// [ 0,            -1,  0]
/// ```
///
/// Each R, G and B channel of every interior pixel is replaced by the
/// weighted sum of its neighborhood, clamped to 0-255. Alpha bytes and the
/// 1-pixel border (which lacks a full neighborhood) pass through unchanged.
/// An intensity of 0 or less returns a copy of the input.
///
/// The output is a fresh buffer; neighbor reads always see the original
/// input, never partially sharpened values.
pub fn sharpen(buffer: &[u8], width: u32, height: u32, intensity: i32) -> ImageAdjustResult<Vec<u8>> {
    let expected = width as usize * height as usize * 4;
    if buffer.len() != expected {
        return Err(ImageAdjustError::InvalidBufferSize {
            expected,
            actual: buffer.len(),
        });
    }

    // Borders and alpha bytes keep their input values
    let mut output = buffer.to_vec();
    if intensity <= 0 {
        return Ok(output);
    }

    let kernel: [i32; 9] = [0, -1, 0, -1, 5 + intensity, -1, 0, -1, 0];
    let width = width as usize;
    let height = height as usize;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            for channel in 0..3 {
                let mut sum = 0i32;

                for ky in -1i32..=1 {
                    for kx in -1i32..=1 {
                        let px = (x as i32 + kx) as usize;
                        let py = (y as i32 + ky) as usize;

                        let ki = ((ky + 1) * 3 + (kx + 1)) as usize;
                        sum += buffer[(py * width + px) * 4 + channel] as i32 * kernel[ki];
                    }
                }

                output[(y * width + x) * 4 + channel] = sum.clamp(0, 255) as u8;
            }
        }
    }

    Ok(output)
}

/// Sharpen effect configuration
///
/// `intensity` is the kernel center boost, 0-50. 0 is a no-op.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SharpenConfig {
    #[derivative(Default(value = "0"))]
    intensity: i32,
}

impl SharpenConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for SharpenConfig {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        let (width, height) = image.dimensions();
        let sharpened = sharpen(image.as_raw(), width, height, self.intensity)?;
        image.copy_from_slice(&sharpened);

        Ok(())
    }
}
