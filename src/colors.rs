use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

/// Color model a grid sample is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    #[default]
    Hsv,
    Yiq,
}

impl ColorSpace {
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Hsv => "hsv",
            ColorSpace::Yiq => "yiq",
        }
    }

    /// Converts a sample in this color space to normalized, unclamped rgb.
    pub fn to_rgb(&self, [a, b, c]: [f64; 3]) -> (f64, f64, f64) {
        match self {
            ColorSpace::Hsv => hsv_to_rgb(a, b, c),
            ColorSpace::Yiq => yiq_to_rgb(a, b, c),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsv" => Ok(ColorSpace::Hsv),
            "yiq" => Ok(ColorSpace::Yiq),
            _ => Err(PaletteError::UnknownColorSpace(s.to_string())),
        }
    }
}

/// 8 bit per channel rgb color, rendered as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scales normalized channels to 0..=255 by truncation. Returns `None` when
    /// any channel is negative, i.e. the source sample lies outside the rgb cube.
    pub fn from_unit((r, g, b): (f64, f64, f64)) -> Option<Self> {
        if r < 0.0 || g < 0.0 || b < 0.0 {
            return None;
        }
        // float to int casts saturate, so channels above 1.0 land on 255
        Some(Self::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8))
    }

    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let invalid = || PaletteError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// hue, saturation and value all in [0, 1]; hues past 1.0 wrap around
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (value, value, value);
    }
    let sector = (hue * 6.0).floor();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

// NTSC matrix; the result is not clamped, so out-of-gamut samples show up as
// negative channels or channels above 1.0
pub fn yiq_to_rgb(luma: f64, chroma_i: f64, chroma_q: f64) -> (f64, f64, f64) {
    let r = luma + 0.946_882_217_090_069_3 * chroma_i + 0.623_556_581_986_143_3 * chroma_q;
    let g = luma - 0.274_787_646_298_978_34 * chroma_i - 0.635_691_079_187_380_1 * chroma_q;
    let b = luma - 1.108_545_034_642_032_2 * chroma_i + 1.709_006_928_406_466_6 * chroma_q;
    (r, g, b)
}
