use image::Rgba;
use image::RgbaImage;

fn main() {
    // Create a 640x480 gradient image for the demos to chew on
    let mut img = RgbaImage::new(640, 480);

    for y in 0..480 {
        for x in 0..640 {
            let r = (x * 255 / 640) as u8;
            let g = (y * 255 / 480) as u8;
            let b = 255 - ((x + y) * 255 / 1120) as u8;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    std::fs::create_dir_all("data").unwrap();
    img.save("data/test.png").unwrap();
    println!("Created data/test.png");
}
