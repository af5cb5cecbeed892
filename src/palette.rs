//! Brand Palette
//!
//! The templates embed these colors as literals; the constants here are the
//! reference the summary prints and the tests check the templates against.

use serde::Serialize;

pub const ORANGE: &str = "#ff6b35";
pub const CYAN: &str = "#40d4ff";
pub const GOLD: &str = "#f7931a";
/// Second stop of the cyan gradient. Not listed in the summary.
pub const SKY: &str = "#00bfff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: &'static str,
    pub role: &'static str,
    pub hex: &'static str,
    pub rgb: [u8; 3],
}

impl Swatch {
    pub fn rgb_label(&self) -> String {
        format!("RGB({}, {}, {})", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Summary order: primary, secondary, accent.
pub const PALETTE: [Swatch; 3] = [
    Swatch { name: "Orange", role: "Primary", hex: ORANGE, rgb: [255, 107, 53] },
    Swatch { name: "Cyan", role: "Secondary", hex: CYAN, rgb: [64, 212, 255] },
    Swatch { name: "Gold", role: "Accent", hex: GOLD, rgb: [247, 147, 26] },
];
