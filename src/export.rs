use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::colors::ColorSpace;
use crate::error::PaletteError;
use crate::palette::{GeneratorConfig, Palette};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(PaletteError::UnknownFormat(s.to_string())),
        }
    }
}

#[serde_as]
#[derive(Serialize, Debug)]
struct ColorEntry<'a> {
    hex: &'a str,
    components: [f64; 3],
    #[serde_as(as = "DisplayFromStr")]
    color_space: ColorSpace,
}

#[derive(Serialize, Debug)]
struct PaletteDocument<'a> {
    config: &'a GeneratorConfig,
    attempts: usize,
    colors: Vec<ColorEntry<'a>>,
}

#[serde_as]
#[derive(Serialize, Debug)]
struct CsvRow<'a> {
    hex: &'a str,
    c0: f64,
    c1: f64,
    c2: f64,
    #[serde_as(as = "DisplayFromStr")]
    color_space: ColorSpace,
}

/// Writes the colors handed out by `palette` in the requested format.
pub fn write_palette<W: Write>(
    palette: &Palette,
    config: &GeneratorConfig,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), PaletteError> {
    let color_space = palette.color_space();
    match format {
        OutputFormat::Text => {
            for (hex, _) in palette.colors() {
                writeln!(writer, "{}", hex)?;
            }
        }
        OutputFormat::Json => {
            let document = PaletteDocument {
                config,
                attempts: palette.attempts(),
                colors: palette
                    .colors()
                    .map(|(hex, sample)| ColorEntry { hex, components: *sample, color_space })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut writer);
            for (hex, [c0, c1, c2]) in palette.colors() {
                csv_writer.serialize(CsvRow { hex, c0: *c0, c1: *c1, c2: *c2, color_space })?;
            }
            csv_writer.flush()?;
        }
    }
    writer.flush()?;
    Ok(())
}
