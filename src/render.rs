//! Presentation helpers for renderers drawing a universe
//!
//! The simulation core knows nothing about pixels. These types map cell
//! states to colors and grid positions to canvas coordinates, mirroring the
//! layout a canvas front end uses: every cell is a `cell_size` square with a
//! one pixel grid line on each side.

use crate::universe::{Cell, Universe};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB` value
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Accepts `#rrggbb` and the short `#rgb` form
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| anyhow::anyhow!("Color '{}' must start with '#'", s))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Color '{}' contains non-hex characters", s);
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            n => anyhow::bail!("Color '{}' has {} digits, expected 3 or 6", s, n),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16);
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Colors used to draw cells and grid lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
    pub grid: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color::WHITE,
            dead: Color::BLACK,
            grid: Color::rgb(0x33, 0x33, 0x33),
        }
    }
}

/// Largest accepted `cell_size`, in pixels
pub const MAX_CELL_SIZE: u32 = 256;

/// Pixel geometry of a drawn universe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub cell_size: u32,
}

impl CanvasLayout {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    fn pitch(&self) -> u64 {
        self.cell_size as u64 + 1
    }

    /// `pitch * cells + 1`, failing when it does not fit a `u32`
    fn span(&self, cells: u32) -> Result<u32> {
        let pixels = self.pitch() * cells as u64 + 1;
        u32::try_from(pixels).map_err(|_| {
            anyhow::anyhow!(
                "Canvas span of {} cells at cell size {} overflows ({} px)",
                cells,
                self.cell_size,
                pixels
            )
        })
    }

    /// Canvas `(width, height)` in pixels for a grid of the given size
    pub fn canvas_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        Ok((self.span(width)?, self.span(height)?))
    }

    pub fn canvas_width(&self, universe: &Universe) -> Result<u32> {
        self.span(universe.width())
    }

    pub fn canvas_height(&self, universe: &Universe) -> Result<u32> {
        self.span(universe.height())
    }

    /// Top-left pixel `(x, y)` of the square for `(row, col)`
    pub fn cell_origin(&self, row: u32, col: u32) -> Result<(u32, u32)> {
        Ok((self.span(col)?, self.span(row)?))
    }

    /// Fill color for every cell in row-major order
    pub fn fill_colors(&self, universe: &Universe, palette: &Palette) -> Vec<Color> {
        universe.cells().iter().map(|cell: &Cell| cell.color(palette)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::BlankSeeder;

    #[test]
    fn test_color_parsing() {
        assert_eq!("#333".parse::<Color>().unwrap(), Color::rgb(0x33, 0x33, 0x33));
        assert_eq!("#1a2B3c".parse::<Color>().unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
        assert!("333333".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_hex() {
        let color = Color::rgb(0x1a, 0x2b, 0x3c);
        assert_eq!(color.to_hex(), "#1a2b3c");
        assert_eq!(color.to_u32(), 0x1a2b3c);
        assert_eq!(color.to_string(), "#1a2b3c");
    }

    #[test]
    fn test_palette_yaml() {
        let yaml = serde_yaml::to_string(&Palette::default()).unwrap();
        assert!(yaml.contains("'#ffffff'") || yaml.contains("\"#ffffff\""));

        let palette: Palette =
            serde_yaml::from_str("alive: '#0f0'\ndead: '#000000'\ngrid: '#333333'\n").unwrap();
        assert_eq!(palette.alive, Color::rgb(0, 0xff, 0));
    }

    #[test]
    fn test_canvas_layout() {
        let universe = Universe::new(100, 50).unwrap();
        let layout = CanvasLayout::new(6);

        assert_eq!(layout.canvas_width(&universe).unwrap(), 701);
        assert_eq!(layout.canvas_height(&universe).unwrap(), 351);
        assert_eq!(layout.canvas_size(100, 50).unwrap(), (701, 351));
        assert_eq!(layout.cell_origin(0, 0).unwrap(), (1, 1));
        assert_eq!(layout.cell_origin(2, 3).unwrap(), (22, 15));
    }

    #[test]
    fn test_canvas_layout_overflow() {
        let universe = Universe::with_seeder(1000, 2, BlankSeeder).unwrap();
        let layout = CanvasLayout::new(5_000_000);

        assert!(layout.canvas_width(&universe).is_err());
        assert_eq!(layout.canvas_height(&universe).unwrap(), 10_000_003);
        assert!(layout.cell_origin(0, u32::MAX).is_err());
        assert!(layout.canvas_size(1000, 2).is_err());

        let widest = CanvasLayout::new(MAX_CELL_SIZE);
        assert!(widest.cell_origin(u32::MAX / 512, 0).is_ok());
    }

    #[test]
    fn test_fill_colors() {
        let universe = Universe::with_seeder(2, 2, BlankSeeder).unwrap();
        let layout = CanvasLayout::new(4);
        let colors = layout.fill_colors(&universe, &Palette::default());
        assert_eq!(colors, vec![Color::BLACK; 4]);
    }
}
