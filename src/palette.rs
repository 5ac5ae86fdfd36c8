use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use tracing::{error, info};

use crate::colors::{ColorSpace, Rgb};
use crate::sampling::{HsvGrid, YiqGrid};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub count: usize,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub color_space: ColorSpace,
    #[serde(default)]
    pub debug: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 16,
            color_space: ColorSpace::Hsv,
            debug: false,
        }
    }
}

/// Ordered set of generated colors, keyed by hex code and remembering the
/// sample each color came from.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    colors: IndexMap<String, [f64; 3]>,
    color_space: ColorSpace,
    attempts: usize,
    limit: Option<usize>,
    debug: bool,
}

impl Palette {
    pub fn new(color_space: ColorSpace, debug: bool) -> Self {
        Self {
            color_space,
            debug,
            ..Default::default()
        }
    }

    pub fn generate(config: &GeneratorConfig) -> Self {
        let mut palette = Self::new(config.color_space, config.debug);
        let samples = match config.color_space {
            ColorSpace::Hsv => {
                // the hsv grid overshoots, only the first `count` colors are handed out
                palette.limit = Some(config.count);
                HsvGrid::for_count(config.count).samples()
            }
            ColorSpace::Yiq => YiqGrid::for_count(config.count).samples(),
        };
        for sample in samples {
            palette.add_sample(sample, config.color_space);
        }

        info!(
            color_space = %config.color_space,
            requested = config.count,
            attempts = palette.attempts,
            distinct = palette.distinct(),
            "generated palette"
        );
        if palette.debug {
            println!("{}", palette.summary());
        }
        palette
    }

    /// Converts one sample and records its hex code. Samples outside the rgb
    /// cube are logged and dropped. Every call counts as an attempt.
    pub fn add_sample(&mut self, sample: [f64; 3], color_space: ColorSpace) -> Option<Rgb> {
        self.attempts += 1;
        let unit = color_space.to_rgb(sample);
        let Some(rgb) = Rgb::from_unit(unit) else {
            error!(?unit, ?sample, %color_space, "RGB error: sample outside the rgb cube");
            if self.debug {
                println!("rejected {}: {}, rgb: {:?}", color_space, format_sample(&sample), unit);
            }
            return None;
        };

        let hex = rgb.to_hex();
        if self.debug {
            println!("rgb: {}, {}: {}", hex, color_space, format_sample(&sample));
        }
        // a repeated hex keeps its first position and takes the newer sample
        self.colors.insert(hex, sample);
        Some(rgb)
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn distinct(&self) -> usize {
        self.colors.len()
    }

    pub fn sample(&self, hex: &str) -> Option<[f64; 3]> {
        self.colors.get(hex).copied()
    }

    /// Colors handed out to callers, in generation order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &[f64; 3])> {
        let limit = self.limit.unwrap_or(self.colors.len());
        self.colors.iter().take(limit).map(|(hex, sample)| (hex.as_str(), sample))
    }

    pub fn hex_codes(&self) -> Vec<String> {
        self.colors().map(|(hex, _)| hex.to_string()).collect()
    }

    pub fn summary(&self) -> String {
        format!("Added {}: {}, Resultant rgb: {}", self.color_space, self.attempts, self.distinct())
    }

    /// Summary line followed by every distinct color and its sample.
    pub fn report(&self) -> String {
        let mut out = self.summary();
        for (hex, sample) in &self.colors {
            let _ = write!(out, "\nrgb: {}, {}: {}", hex, self.color_space, format_sample(sample));
        }
        out
    }
}

fn format_sample([a, b, c]: &[f64; 3]) -> String {
    format!("({:.2}, {:.2}, {:.2})", a, b, c)
}
