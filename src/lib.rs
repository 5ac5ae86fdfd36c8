pub mod colors;
pub mod error;
pub mod export;
pub mod palette;
pub mod sampling;

pub use colors::{ColorSpace, Rgb};
pub use error::PaletteError;
pub use export::{write_palette, OutputFormat};
pub use palette::{GeneratorConfig, Palette};

/// Generates up to `count` visually distinct colors as `#rrggbb` strings.
///
/// The hsv grid is truncated to `count`; the yiq grid returns everything that
/// survived gamut rejection, which is usually fewer.
pub fn generate(count: usize, color_space: ColorSpace, debug: bool) -> Vec<String> {
    Palette::generate(&GeneratorConfig { count, color_space, debug }).hex_codes()
}
