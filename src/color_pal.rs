use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use distinct_palette::{write_palette, ColorSpace, GeneratorConfig, OutputFormat, Palette};

/// Program to generate a palette of visually distinct colors
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of colors to generate (16 when neither this nor a config file sets it)
    #[arg(value_name = "COUNT")]
    count: Option<usize>,

    /// Color space the sampling grid is laid out in: hsv or yiq
    #[arg(short = 's', long)]
    color_space: Option<ColorSpace>,

    /// Print every generated color with its source sample, plus a summary
    #[arg(short, long)]
    debug: bool,

    /// Print every distinct color with its source sample to stderr once generation is done
    #[arg(short, long)]
    report: bool,

    /// Output format: text, json or csv
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Path to the file where the palette will be written. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a json generator config; explicit flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config: GeneratorConfig = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(color_space) = args.color_space {
        config.color_space = color_space;
    }
    config.debug |= args.debug;

    let palette = Palette::generate(&config);
    if args.report {
        eprintln!("{}", palette.report());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_palette(&palette, &config, args.format, BufWriter::new(file))
                .with_context(|| format!("writing palette to {}", path.display()))?;
            eprintln!("colors: {} written to {}", palette.hex_codes().len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_palette(&palette, &config, args.format, &mut handle).context("writing palette to stdout")?;
            handle.flush()?;
        }
    }

    Ok(())
}

// logs go to stderr so stdout only carries the palette
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
