use crate::{MIN_OPAQUE_ALPHA, QUANTIZE_BITS, SATURATION_BOOST};
use image::Rgba;
use std::collections::HashMap;

/// One aggregation cell of the quantized color space. Channel sums are kept
/// over the raw, un-quantized values so the cell's color can be recovered as
/// a true mean instead of the quantization midpoint.
#[derive(Debug, Default)]
struct Bucket {
    sum_red: u64,
    sum_green: u64,
    sum_blue: u64,
    count: u32,
}

/// A scored color candidate derived from one bucket. The channel means stay
/// in floating point until the final palette is built, so distance checks in
/// the selection pass see the full tonal difference between buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColorEntry {
    pub(crate) red: f32,
    pub(crate) green: f32,
    pub(crate) blue: f32,
    pub(crate) population: u32,
    pub(crate) saturation: f32,
    pub(crate) score: f32,
}

/// Histogram of quantized pixel values, aggregated in first-seen order.
///
/// Buckets live in a plain `Vec`; the hash map only resolves a packed channel
/// key to its slot. Downstream sorting is stable, so keeping buckets in
/// first-seen order makes score ties resolve the same way on every run.
pub(crate) struct ColorHistogram {
    buckets: Vec<Bucket>,
}

impl ColorHistogram {
    /// Aggregate an iterator of RGBA pixels into quantized buckets.
    ///
    /// Every pixel is sampled; pixels with alpha below [`MIN_OPAQUE_ALPHA`]
    /// are treated as transparent and contribute to no bucket.
    pub(crate) fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = Rgba<u8>>,
    {
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut slots: HashMap<u32, usize> = HashMap::new();

        for Rgba([red, green, blue, alpha]) in pixels {
            if alpha < MIN_OPAQUE_ALPHA {
                continue;
            }

            let slot = *slots.entry(pack_key(red, green, blue)).or_insert_with(|| {
                buckets.push(Bucket::default());
                buckets.len() - 1
            });

            // accumulate the raw channel values under the quantized key
            let bucket = &mut buckets[slot];
            bucket.sum_red += red as u64;
            bucket.sum_green += green as u64;
            bucket.sum_blue += blue as u64;
            bucket.count += 1;
        }

        Self { buckets }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of opaque pixels that landed in a bucket.
    pub(crate) fn pixel_count(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.count as u64).sum()
    }

    /// Convert the buckets into scored color entries, preserving first-seen
    /// order. Score is the bucket population boosted by the saturation of its
    /// mean color, which lets a small vivid accent outrank a large neutral
    /// background.
    pub(crate) fn entries(self) -> Vec<ColorEntry> {
        self.buckets
            .into_iter()
            .map(|bucket| {
                let count = bucket.count as f32;
                let red = bucket.sum_red as f32 / count;
                let green = bucket.sum_green as f32 / count;
                let blue = bucket.sum_blue as f32 / count;
                let (_, saturation, _) = crate::rgb_to_hsv((red, green, blue));

                ColorEntry {
                    red,
                    green,
                    blue,
                    population: bucket.count,
                    saturation,
                    score: count * (1.0 + SATURATION_BOOST * saturation),
                }
            })
            .collect()
    }
}

// combine the quantized channels into a single integer where red is the most
// significant and blue the least
fn pack_key(red: u8, green: u8, blue: u8) -> u32 {
    let shift = 8 - QUANTIZE_BITS;
    (((red >> shift) as u32) << (QUANTIZE_BITS + QUANTIZE_BITS))
        | (((green >> shift) as u32) << QUANTIZE_BITS)
        | (blue >> shift) as u32
}
