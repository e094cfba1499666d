use crate::{
    AdjustEffect, Effect, ImageAdjustError, ImageAdjustResult,
    base_effect::{
        BrightnessConfig, ContrastConfig, GrayscaleConfig, HueRotateConfig, InvertConfig,
        SaturationConfig,
    },
    blur_effect::BlurConfig,
    filter_effect::SepiaConfig,
    sharpen_effect::SharpenConfig,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// One full set of slider values, applied as an ordered effect pipeline.
///
/// Fields left at their identity value contribute no effect. The struct
/// serializes to/from TOML so adjustment presets can be stored on disk;
/// missing keys deserialize to their identity values.
#[derive(Debug, Clone, PartialEq, Eq, Derivative, Setters, Serialize, Deserialize)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[serde(default)]
#[non_exhaustive]
pub struct Adjustments {
    /// Brightness percent, 50-150. 100 is identity.
    #[derivative(Default(value = "100"))]
    pub brightness: i32,

    /// Contrast percent, 50-150. 100 is identity.
    #[derivative(Default(value = "100"))]
    pub contrast: i32,

    /// Saturation percent, 0-200. 100 is identity.
    #[derivative(Default(value = "100"))]
    pub saturation: i32,

    /// Grayscale percent, 0-100. 0 is identity.
    #[derivative(Default(value = "0"))]
    pub grayscale: i32,

    /// Sepia percent, 0-100. 0 is identity.
    #[derivative(Default(value = "0"))]
    pub sepia: i32,

    /// Inversion percent, 0-100. 0 is identity.
    #[derivative(Default(value = "0"))]
    pub invert: i32,

    /// Hue rotation in degrees, 0-360. 0 and 360 are identity.
    #[derivative(Default(value = "0"))]
    pub hue_rotate: i32,

    /// Gaussian blur radius in pixels, 0-10. 0 is identity.
    #[derivative(Default(value = "0"))]
    pub blur: u32,

    /// Sharpening intensity, 0-50. 0 is identity.
    #[derivative(Default(value = "0"))]
    pub sharpness: i32,
}

fn check_range(name: &str, value: i64, min: i64, max: i64) -> ImageAdjustResult<()> {
    if value < min || value > max {
        return Err(ImageAdjustError::InvalidParameter(format!(
            "{name} must be in [{min}, {max}], got {value}"
        )));
    }

    Ok(())
}

impl Adjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> ImageAdjustResult<()> {
        check_range("brightness", self.brightness as i64, 50, 150)?;
        check_range("contrast", self.contrast as i64, 50, 150)?;
        check_range("saturation", self.saturation as i64, 0, 200)?;
        check_range("grayscale", self.grayscale as i64, 0, 100)?;
        check_range("sepia", self.sepia as i64, 0, 100)?;
        check_range("invert", self.invert as i64, 0, 100)?;
        check_range("hue_rotate", self.hue_rotate as i64, 0, 360)?;
        check_range("blur", self.blur as i64, 0, 10)?;
        check_range("sharpness", self.sharpness as i64, 0, 50)?;

        Ok(())
    }

    /// Build the ordered effect pipeline, skipping identity values.
    ///
    /// The cosmetic adjustments run in the same order the filter chain of
    /// the render step lists them; the sharpening pass runs last, on the
    /// already-filtered pixels.
    pub fn effects(&self) -> Vec<AdjustEffect> {
        let mut effects = Vec::new();

        if self.brightness != 100 {
            effects.push(AdjustEffect::Brightness(
                BrightnessConfig::new().with_percent(self.brightness),
            ));
        }

        if self.contrast != 100 {
            effects.push(AdjustEffect::Contrast(
                ContrastConfig::new().with_percent(self.contrast),
            ));
        }

        if self.saturation != 100 {
            effects.push(AdjustEffect::Saturation(
                SaturationConfig::new().with_percent(self.saturation),
            ));
        }

        if self.grayscale != 0 {
            effects.push(AdjustEffect::Grayscale(
                GrayscaleConfig::new().with_percent(self.grayscale),
            ));
        }

        if self.sepia != 0 {
            effects.push(AdjustEffect::Sepia(
                SepiaConfig::new().with_percent(self.sepia),
            ));
        }

        if self.invert != 0 {
            effects.push(AdjustEffect::Invert(
                InvertConfig::new().with_percent(self.invert),
            ));
        }

        if self.hue_rotate % 360 != 0 {
            effects.push(AdjustEffect::HueRotate(
                HueRotateConfig::new().with_degrees(self.hue_rotate),
            ));
        }

        if self.blur != 0 {
            effects.push(AdjustEffect::Blur(
                BlurConfig::new().with_radius(self.blur),
            ));
        }

        if self.sharpness > 0 {
            effects.push(AdjustEffect::Sharpen(
                SharpenConfig::new().with_intensity(self.sharpness),
            ));
        }

        effects
    }

    /// Validate, then run the pipeline over the image in place.
    pub fn apply(&self, image: &mut RgbaImage) -> ImageAdjustResult<()> {
        self.validate()?;

        for effect in self.effects() {
            log::debug!("applying {effect:?}");
            effect.apply(image)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_default_is_identity() {
        let adjustments = Adjustments::default();

        assert!(adjustments.effects().is_empty());

        let mut image = RgbaImage::from_pixel(4, 4, Rgba([12, 100, 230, 77]));
        let expected = image.clone();
        adjustments.apply(&mut image).unwrap();

        assert_eq!(image, expected);
    }

    #[test]
    fn test_effect_order_matches_filter_chain() {
        let adjustments = Adjustments::new()
            .with_brightness(120)
            .with_contrast(80)
            .with_saturation(150)
            .with_grayscale(10)
            .with_sepia(20)
            .with_invert(30)
            .with_hue_rotate(90)
            .with_blur(2)
            .with_sharpness(5);

        let effects = adjustments.effects();
        assert_eq!(effects.len(), 9);

        assert!(matches!(effects[0], AdjustEffect::Brightness(_)));
        assert!(matches!(effects[1], AdjustEffect::Contrast(_)));
        assert!(matches!(effects[2], AdjustEffect::Saturation(_)));
        assert!(matches!(effects[3], AdjustEffect::Grayscale(_)));
        assert!(matches!(effects[4], AdjustEffect::Sepia(_)));
        assert!(matches!(effects[5], AdjustEffect::Invert(_)));
        assert!(matches!(effects[6], AdjustEffect::HueRotate(_)));
        assert!(matches!(effects[7], AdjustEffect::Blur(_)));
        assert!(matches!(effects[8], AdjustEffect::Sharpen(_)));
    }

    #[test]
    fn test_full_hue_rotation_is_identity() {
        let adjustments = Adjustments::new().with_hue_rotate(360);

        assert!(adjustments.effects().is_empty());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        for adjustments in [
            Adjustments::new().with_brightness(49),
            Adjustments::new().with_brightness(151),
            Adjustments::new().with_contrast(200),
            Adjustments::new().with_saturation(201),
            Adjustments::new().with_grayscale(-1),
            Adjustments::new().with_sepia(101),
            Adjustments::new().with_invert(500),
            Adjustments::new().with_hue_rotate(361),
            Adjustments::new().with_blur(11),
            Adjustments::new().with_sharpness(51),
        ] {
            let err = adjustments.validate().unwrap_err();
            assert!(
                matches!(err, ImageAdjustError::InvalidParameter(_)),
                "expected InvalidParameter, got {err:?}"
            );
        }
    }

    #[test]
    fn test_apply_rejects_invalid_before_processing() {
        let adjustments = Adjustments::new().with_sharpness(99);
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([50, 50, 50, 255]));
        let expected = image.clone();

        assert!(adjustments.apply(&mut image).is_err());
        assert_eq!(image, expected);
    }

    #[test]
    fn test_partial_preset_uses_identity_defaults() {
        let adjustments: Adjustments = toml::from_str("brightness = 120\nsharpness = 5").unwrap();

        assert_eq!(adjustments.brightness, 120);
        assert_eq!(adjustments.sharpness, 5);
        assert_eq!(adjustments.contrast, 100);
        assert_eq!(adjustments.saturation, 100);
        assert_eq!(adjustments.blur, 0);
    }

    #[test]
    fn test_preset_round_trip() {
        let adjustments = Adjustments::new()
            .with_brightness(110)
            .with_saturation(140)
            .with_sepia(20)
            .with_blur(3)
            .with_sharpness(8);

        let text = toml::to_string(&adjustments).unwrap();
        let parsed: Adjustments = toml::from_str(&text).unwrap();

        assert_eq!(parsed, adjustments);
    }

    #[test]
    fn test_pipeline_applies_in_sequence() {
        // invert(100) then sharpen on a flat region: inversion runs first,
        // sharpening of a uniform image multiplies by (1 + intensity)
        let adjustments = Adjustments::new().with_invert(100).with_sharpness(1);
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([205, 205, 205, 255]));

        adjustments.apply(&mut image).unwrap();

        // inverted to 50 everywhere; center becomes 6 * 50 - 4 * 50 = 100
        assert_eq!(image.get_pixel(1, 1).0, [100, 100, 100, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [50, 50, 50, 255]);
    }
}
