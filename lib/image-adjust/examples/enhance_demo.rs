/// Full pipeline example
/// Applies a warm, slightly sharpened look through the Adjustments pipeline
use image::ImageReader;
use image_adjust::adjustments::Adjustments;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image
    let img_path = Path::new("data/test.png");
    let mut img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    let adjustments = Adjustments::new()
        .with_brightness(110)
        .with_saturation(140)
        .with_sepia(20)
        .with_sharpness(10);

    adjustments.apply(&mut img)?;

    img.save(output_dir.join("enhanced.png"))?;

    println!("✓ Adjustments applied successfully!");
    println!("  Output:   tmp/enhanced.png");

    Ok(())
}
