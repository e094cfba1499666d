/// Sharpening example
/// Demonstrates the 3x3 convolution sharpening pass at a few intensities
use image::ImageReader;
use image_adjust::Effect;
use image_adjust::sharpen_effect::SharpenConfig;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image
    let img_path = Path::new("data/test.png");
    let original = ImageReader::open(img_path)?.decode()?.to_rgba8();

    for intensity in [5, 15, 50] {
        let mut img = original.clone();
        SharpenConfig::new().with_intensity(intensity).apply(&mut img)?;

        let output = output_dir.join(format!("sharpen_{intensity}.png"));
        img.save(&output)?;
        println!("✓ Sharpened with intensity {intensity}: {}", output.display());
    }

    Ok(())
}
