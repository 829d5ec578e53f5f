mod logging;
mod wav;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use logging::StructuredLogger;
use sstv_core::{decode_with, DecodeLog, DecodeOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode a Slow-Scan Television recording to an image", long_about = None)]
struct Cli {
    /// Input WAV recording of the SSTV transmission
    input: PathBuf,

    /// Output image path (defaults to ./result.png)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Shift the detected header/line-sync alignment by this many samples
    #[arg(short = 'a', long, default_value_t = 0)]
    align_add: i64,

    /// Emit debug-level pipeline events in addition to info/warn/error
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let logger = StructuredLogger::new(args.verbose);

    logger.info("cli", &format!("loading {}", args.input.display()));
    if let Ok(summary) = wav::header_summary(&args.input) {
        logger.debug("cli", &format!("WAV header: {summary}"));
    }
    let stream = wav::load_mono(&args.input)
        .wrap_err_with(|| format!("failed to load {}", args.input.display()))?;
    logger.info(
        "cli",
        &format!(
            "loaded {} samples at {} Hz",
            stream.num_samples(),
            stream.sample_rate()
        ),
    );

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message("decoding");
    progress.enable_steady_tick(std::time::Duration::from_millis(100));

    let options = DecodeOptions::new().with_align_add(args.align_add);
    let result = decode_with(&stream, &options, &logger);

    progress.finish_and_clear();

    let image = match result {
        Ok(image) => image,
        Err(err) => {
            logger.fatal("cli", &err.to_string());
            std::process::exit(1);
        }
    };

    let output_path = args.output.unwrap_or_else(|| PathBuf::from("result.png"));
    write_png(&image, &output_path)
        .wrap_err_with(|| format!("failed to write {}", output_path.display()))?;

    logger.info(
        "cli",
        &format!(
            "wrote {} ({:.2}s elapsed, {} log events)",
            output_path.display(),
            logger.elapsed_secs(),
            logger.event_count()
        ),
    );

    Ok(())
}

fn write_png(image: &sstv_core::Image, path: &std::path::Path) -> Result<()> {
    let (height, width, _) = image.dim();
    let mut buffer = image::RgbImage::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            let pixel = image::Rgb([
                image[[y, x, 0]],
                image[[y, x, 1]],
                image[[y, x, 2]],
            ]);
            buffer.put_pixel(x as u32, y as u32, pixel);
        }
    }

    buffer.save(path)?;
    Ok(())
}
