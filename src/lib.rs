// Copyright 2026 the vibrance developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the dominant colors of an image.
//!
//! Pixels are bucketed into a quantized RGB histogram, every bucket is scored
//! by population with a boost for saturated color, and the palette is drawn
//! from the buckets: the top scorers come first, then the remaining slots go
//! to candidates that best balance score against distance from the colors
//! already picked. The same image always produces the same palette, down to
//! swatch order.
//!
//! Extraction itself never fails. The convenience entry points such as
//! [`extract_colors`] map any decode problem to an empty result, so a caller
//! rendering a palette never has to branch on errors.
//!
//! ```no_run
//! use vibrance::Palette;
//!
//! let image = vibrance::image::io::Reader::open("photo.jpg")?
//!     .decode()?
//!     .to_rgba8();
//! let palette = Palette::from_image(image).generate();
//!
//! for swatch in palette.swatches() {
//!     println!("{} covers {} pixels", swatch.hex(), swatch.population());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decoder;
mod error;
mod format;
mod histogram;
mod select;
mod swatch;

pub const DEFAULT_MAX_COLORS: usize = 7;
pub const DEFAULT_DOMINANT_SLOTS: usize = 4;
pub const DEFAULT_MAX_DIMENSION: u32 = 280;

/// Significant bits kept per channel when bucketing colors.
pub const QUANTIZE_BITS: u32 = 5;
/// Alpha value below which a pixel counts as transparent and is skipped.
pub const MIN_OPAQUE_ALPHA: u8 = 128;
/// Multiplier applied to saturation when scoring a bucket.
pub const SATURATION_BOOST: f32 = 5.0;
/// Share of a candidate's score kept regardless of its distance to the
/// palette picked so far.
pub const DIVERSITY_FLOOR: f32 = 0.3;
/// Share of a candidate's score modulated by that distance.
pub const DIVERSITY_WEIGHT: f32 = 0.7;
/// Normalization divisor for RGB distances, the diagonal of the color cube.
pub const MAX_RGB_DISTANCE: f32 = 441.67;

pub use crate::{
    decoder::{decode_memory, FileDecoder, ImageDecoder},
    error::{DecodeError, Result},
    format::{sniff_image_kind, ImageKind},
    swatch::Swatch,
};
pub use image;

use histogram::ColorHistogram;
use image::{ImageBuffer, Pixel};
use log::debug;
use palette::IntoColor;
use select::select_diverse;

/// An ordered set of dominant color swatches, most dominant first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
}

/// Configures and runs palette extraction over a pixel buffer.
pub struct PaletteBuilder<P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    image: ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>,
    max_colors: usize,
    dominant_slots: usize,
    max_dimension: u32,
}

impl Palette {
    pub fn from_image<P>(image: ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>) -> PaletteBuilder<P>
    where
        P: Pixel<Subpixel = u8> + 'static,
    {
        PaletteBuilder::from_image(image)
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The palette colors as uppercase `#RRGGBB` strings, most dominant first.
    pub fn hex_colors(&self) -> Vec<String> {
        self.swatches.iter().map(|swatch| swatch.hex()).collect()
    }

    /// The single most dominant swatch, if the palette holds any.
    pub fn dominant_swatch(&self) -> Option<Swatch> {
        self.swatches.first().copied()
    }

    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.dominant_swatch().map(|swatch| swatch.rgb())
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    fn empty() -> Palette {
        Self { swatches: Vec::new() }
    }
}

impl<P> PaletteBuilder<P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    pub fn from_image(image: ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>) -> Self {
        Self {
            image,
            max_colors: DEFAULT_MAX_COLORS,
            dominant_slots: DEFAULT_DOMINANT_SLOTS,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }

    /// Cap the palette at `max_colors` swatches.
    pub fn max_colors(self, max_colors: usize) -> Self {
        Self { max_colors, ..self }
    }

    /// Reserve the first `dominant_slots` palette slots for the top-scored
    /// colors, exempting them from diversity weighting.
    pub fn dominant_slots(self, dominant_slots: usize) -> Self {
        Self {
            dominant_slots,
            ..self
        }
    }

    /// Longest image side to analyze at. Larger images are scaled down before
    /// sampling; zero disables the scaling entirely.
    pub fn max_dimension(self, max_dimension: u32) -> Self {
        Self {
            max_dimension,
            ..self
        }
    }

    pub fn generate(mut self) -> Palette {
        self.scale_image_down();

        let histogram = ColorHistogram::from_pixels(self.image.pixels().map(|pixel| pixel.to_rgba()));
        debug!(
            "bucketed {} opaque pixels into {} colors",
            histogram.pixel_count(),
            histogram.len()
        );

        let selected = select_diverse(histogram.entries(), self.max_colors, self.dominant_slots);

        Palette {
            swatches: selected.iter().map(Swatch::from_entry).collect(),
        }
    }

    fn scale_image_down(&mut self) {
        let (width, height) = self.image.dimensions();
        let longest = width.max(height);

        if self.max_dimension == 0 || longest <= self.max_dimension {
            return;
        }

        let scale = self.max_dimension as f32 / longest as f32;
        let scaled_width = ((width as f32 * scale).round() as u32).max(1);
        let scaled_height = ((height as f32 * scale).round() as u32).max(1);

        debug!("scaling {}x{} down to {}x{}", width, height, scaled_width, scaled_height);

        self.image = image::imageops::resize(
            &self.image,
            scaled_width,
            scaled_height,
            image::imageops::FilterType::Triangle,
        );
    }
}

/// Extract a palette from the image at `locator` using the given decoder.
///
/// Decode problems never surface: the caller always receives a palette,
/// possibly an empty one, and the failure detail goes to the debug log.
pub fn extract_palette_with<D: ImageDecoder>(decoder: &D, locator: &str) -> Palette {
    match decoder.decode(locator) {
        Ok(image) => Palette::from_image(image).generate(),
        Err(error) => {
            debug!("decode failed, yielding an empty palette: {}", error);
            Palette::empty()
        }
    }
}

/// Extract a palette from an image file, with default settings.
pub fn extract_palette(locator: &str) -> Palette {
    extract_palette_with(&FileDecoder, locator)
}

/// Extract the dominant colors of an image file as uppercase `#RRGGBB`
/// strings, most dominant first.
pub fn extract_colors(locator: &str) -> Vec<String> {
    extract_palette(locator).hex_colors()
}

fn rgb_to_hsv((red, green, blue): (f32, f32, f32)) -> (f32, f32, f32) {
    let raw = palette::Srgb::new(red / 255.0, green / 255.0, blue / 255.0);
    let hsv: palette::Hsv = raw.into_color();
    let (h, s, v) = hsv.into_components();

    (h.to_positive_degrees(), s, v)
}
