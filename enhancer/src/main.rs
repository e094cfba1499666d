use anyhow::{Context, Result};
use clap::Parser;
use image::ImageReader;
use image_adjust::adjustments::Adjustments;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "enhancer", version, about = "Adjust an image and save it as a PNG")]
struct Cli {
    /// Input image (PNG or JPEG)
    #[arg(short, long)]
    input: PathBuf,

    /// Output path, written as PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Adjustment preset file (TOML). Flags below override preset values
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Brightness percent (50-150)
    #[arg(long)]
    brightness: Option<i32>,

    /// Contrast percent (50-150)
    #[arg(long)]
    contrast: Option<i32>,

    /// Saturation percent (0-200)
    #[arg(long)]
    saturation: Option<i32>,

    /// Grayscale percent (0-100)
    #[arg(long)]
    grayscale: Option<i32>,

    /// Sepia percent (0-100)
    #[arg(long)]
    sepia: Option<i32>,

    /// Inversion percent (0-100)
    #[arg(long)]
    invert: Option<i32>,

    /// Hue rotation in degrees (0-360)
    #[arg(long)]
    hue_rotate: Option<i32>,

    /// Gaussian blur radius in pixels (0-10)
    #[arg(long)]
    blur: Option<u32>,

    /// Sharpening intensity (0-50)
    #[arg(long)]
    sharpness: Option<i32>,
}

fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn load_adjustments(cli: &Cli) -> Result<Adjustments> {
    let mut adjustments = match &cli.preset {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read preset {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse preset {}", path.display()))?
        }
        None => Adjustments::default(),
    };

    if let Some(v) = cli.brightness {
        adjustments = adjustments.with_brightness(v);
    }
    if let Some(v) = cli.contrast {
        adjustments = adjustments.with_contrast(v);
    }
    if let Some(v) = cli.saturation {
        adjustments = adjustments.with_saturation(v);
    }
    if let Some(v) = cli.grayscale {
        adjustments = adjustments.with_grayscale(v);
    }
    if let Some(v) = cli.sepia {
        adjustments = adjustments.with_sepia(v);
    }
    if let Some(v) = cli.invert {
        adjustments = adjustments.with_invert(v);
    }
    if let Some(v) = cli.hue_rotate {
        adjustments = adjustments.with_hue_rotate(v);
    }
    if let Some(v) = cli.blur {
        adjustments = adjustments.with_blur(v);
    }
    if let Some(v) = cli.sharpness {
        adjustments = adjustments.with_sharpness(v);
    }

    Ok(adjustments)
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let adjustments = load_adjustments(&cli)?;

    let mut image = ImageReader::open(&cli.input)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", cli.input.display()))?
        .to_rgba8();

    log::info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        image.width(),
        image.height()
    );

    adjustments
        .apply(&mut image)
        .context("Failed to apply adjustments")?;

    image
        .save_with_format(&cli.output, image::ImageFormat::Png)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;

    log::info!("saved {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_build_adjustments() {
        let cli = Cli::parse_from([
            "enhancer",
            "--input",
            "in.png",
            "--output",
            "out.png",
            "--brightness",
            "120",
            "--sharpness",
            "10",
        ]);

        let adjustments = load_adjustments(&cli).unwrap();
        assert_eq!(adjustments.brightness, 120);
        assert_eq!(adjustments.sharpness, 10);
        assert_eq!(adjustments.contrast, 100);
    }

    #[test]
    fn test_flags_override_preset() {
        let mut preset = tempfile::NamedTempFile::new().unwrap();
        writeln!(preset, "brightness = 80\nsepia = 40").unwrap();

        let cli = Cli::parse_from([
            "enhancer",
            "--input",
            "in.png",
            "--output",
            "out.png",
            "--preset",
            preset.path().to_str().unwrap(),
            "--brightness",
            "130",
        ]);

        let adjustments = load_adjustments(&cli).unwrap();
        assert_eq!(adjustments.brightness, 130);
        assert_eq!(adjustments.sepia, 40);
    }

    #[test]
    fn test_missing_preset_file_is_an_error() {
        let cli = Cli::parse_from([
            "enhancer",
            "--input",
            "in.png",
            "--output",
            "out.png",
            "--preset",
            "/nonexistent/preset.toml",
        ]);

        assert!(load_adjustments(&cli).is_err());
    }
}
