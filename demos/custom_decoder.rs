use std::io;

use vibrance::{
    image::{Rgba, RgbaImage},
    DecodeError, ImageDecoder, Result,
};

// serves a canned three-band image for the "bands" locator and fails every
// other lookup, standing in for an asset store or network fetch
struct CannedDecoder;

impl ImageDecoder for CannedDecoder {
    fn decode(&self, locator: &str) -> Result<RgbaImage> {
        if locator != "bands" {
            return Err(DecodeError::Open {
                locator: locator.to_owned(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        Ok(RgbaImage::from_fn(96, 64, |x, _| {
            if x < 32 {
                Rgba([220, 40, 40, 255])
            } else if x < 64 {
                Rgba([40, 180, 90, 255])
            } else {
                Rgba([250, 250, 250, 255])
            }
        }))
    }
}

fn main() {
    let palette = vibrance::extract_palette_with(&CannedDecoder, "bands");

    for swatch in palette.swatches() {
        println!(
            "{} population {} saturation {:.2}",
            swatch.hex(),
            swatch.population(),
            swatch.saturation()
        );
    }

    // a bad locator degrades to an empty palette instead of an error
    let missing = vibrance::extract_palette_with(&CannedDecoder, "missing");
    println!("missing locator produced {} swatches", missing.len());
}
