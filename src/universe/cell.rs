//! Cell state and the Life transition rule

use crate::render::{Color, Palette};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single grid position
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Apply Conway's rule to a cell given its live neighbor count
    pub fn next_state(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Alive, _) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }

    /// Presentation color for a renderer
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Cell::Alive => palette.alive,
            Cell::Dead => palette.dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Alive => '█',
            Cell::Dead => '·',
        };
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert_eq!(Cell::Alive.next_state(2), Cell::Alive);
        assert_eq!(Cell::Alive.next_state(3), Cell::Alive);
        assert_eq!(Cell::Dead.next_state(3), Cell::Alive);

        for count in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Alive.next_state(count), Cell::Dead, "alive with {}", count);
        }
        for count in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.next_state(count), Cell::Dead, "dead with {}", count);
        }
    }

    #[test]
    fn test_cell_color() {
        let palette = Palette::default();
        assert_eq!(Cell::Alive.color(&palette).to_hex(), "#ffffff");
        assert_eq!(Cell::Dead.color(&palette).to_hex(), "#000000");
    }

    #[test]
    fn test_cell_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert_eq!(Cell::default(), Cell::Dead);
        assert_eq!(Cell::Alive as u8, 1);
    }
}
