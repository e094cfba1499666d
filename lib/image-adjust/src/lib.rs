pub mod adjustments;
pub mod base_effect;
pub mod blur_effect;
pub mod filter_effect;
pub mod sharpen_effect;

use image::RgbaImage;

pub type ImageAdjustResult<T> = Result<T, ImageAdjustError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageAdjustError {
    #[error("Invalid buffer size: expected {expected} bytes, got {actual}")]
    InvalidBufferSize { expected: usize, actual: usize },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()>;
}

#[derive(Debug, Clone)]
pub enum AdjustEffect {
    // Color adjustments
    Brightness(base_effect::BrightnessConfig),
    Contrast(base_effect::ContrastConfig),
    Saturation(base_effect::SaturationConfig),
    Grayscale(base_effect::GrayscaleConfig),
    Invert(base_effect::InvertConfig),
    HueRotate(base_effect::HueRotateConfig),

    // Tone filters
    Sepia(filter_effect::SepiaConfig),

    // Spatial filters
    Blur(blur_effect::BlurConfig),
    Sharpen(sharpen_effect::SharpenConfig),
}

impl Effect for AdjustEffect {
    fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        match self {
            // Color adjustments
            AdjustEffect::Brightness(config) => config.apply(image),
            AdjustEffect::Contrast(config) => config.apply(image),
            AdjustEffect::Saturation(config) => config.apply(image),
            AdjustEffect::Grayscale(config) => config.apply(image),
            AdjustEffect::Invert(config) => config.apply(image),
            AdjustEffect::HueRotate(config) => config.apply(image),

            // Tone filters
            AdjustEffect::Sepia(config) => config.apply(image),

            // Spatial filters
            AdjustEffect::Blur(config) => config.apply(image),
            AdjustEffect::Sharpen(config) => config.apply(image),
        }
    }
}
