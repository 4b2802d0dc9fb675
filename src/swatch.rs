use crate::histogram::ColorEntry;

/// A single palette color: the mean color of one histogram bucket, the number
/// of pixels that produced it, and the dominance score that ranked it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
    saturation: f32,
    score: f32,
}

impl Swatch {
    /// Build a swatch from a color and its pixel population, deriving the
    /// saturation and dominance score the same way extraction does.
    pub fn new((red, green, blue): (u8, u8, u8), population: u32) -> Swatch {
        let (_, saturation, _) = crate::rgb_to_hsv((red as f32, green as f32, blue as f32));

        Self {
            red,
            green,
            blue,
            population,
            saturation,
            score: population as f32 * (1.0 + crate::SATURATION_BOOST * saturation),
        }
    }

    pub(crate) fn from_entry(entry: &ColorEntry) -> Swatch {
        Self {
            red: entry.red.round() as u8,
            green: entry.green.round() as u8,
            blue: entry.blue.round() as u8,
            population: entry.population,
            saturation: entry.saturation,
            score: entry.score,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Uppercase `#RRGGBB` rendering of the swatch color.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    pub fn population(self) -> u32 {
        self.population
    }

    /// HSV saturation of the underlying mean color: 0 for grays, 1 for fully
    /// vivid colors.
    pub fn saturation(self) -> f32 {
        self.saturation
    }

    /// Dominance score: population boosted by saturation. Higher ranks first.
    pub fn score(self) -> f32 {
        self.score
    }
}
