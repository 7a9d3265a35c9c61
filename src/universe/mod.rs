//! Toroidal Game of Life universe

pub mod cell;
pub mod error;
pub mod pattern;
pub mod seed;

pub use cell::Cell;
pub use error::UniverseError;
pub use pattern::{create_example_patterns, load_pattern, parse_pattern, Pattern};
pub use seed::{BlankSeeder, DivisibilitySeeder, PatternSeeder, RandomSeeder, Seeder};

use itertools::iproduct;
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Moore neighborhood offsets, the cell itself excluded
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size toroidal grid of cells
///
/// Cells are stored row-major in a flat buffer. Every mutation replaces the
/// buffer as a whole, so a reader never sees a half-computed generation.
#[derive(Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    generation: u64,
    seeder: Arc<dyn Seeder>,
}

impl Universe {
    /// Create a universe seeded with the default divisibility rule
    pub fn new(width: u32, height: u32) -> Result<Self, UniverseError> {
        Self::with_seeder(width, height, DivisibilitySeeder::default())
    }

    /// Create a universe seeded by `seeder`
    pub fn with_seeder<S>(width: u32, height: u32, seeder: S) -> Result<Self, UniverseError>
    where
        S: Seeder + 'static,
    {
        Self::with_shared_seeder(width, height, Arc::new(seeder))
    }

    pub fn with_shared_seeder(
        width: u32,
        height: u32,
        seeder: Arc<dyn Seeder>,
    ) -> Result<Self, UniverseError> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimension { width, height });
        }

        let cells = Self::seed_cells(width, height, seeder.as_ref());
        Ok(Self {
            width,
            height,
            cells,
            generation: 0,
            seeder,
        })
    }

    /// Re-apply the seeding rule, discarding all evolution so far
    pub fn reset(&mut self) {
        self.cells = Self::seed_cells(self.width, self.height, self.seeder.as_ref());
        self.generation = 0;
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        let width = self.width as usize;
        let mut next = vec![Cell::Dead; self.cells.len()];

        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, slot) in out.iter_mut().enumerate() {
                    let current = self.cells[row * width + col];
                    let neighbors = self.count_neighbors(row as u32, col as u32);
                    *slot = current.next_state(neighbors);
                }
            });

        self.cells = next;
        self.generation += 1;
    }

    /// Advance `generations` generations
    pub fn tick_n(&mut self, generations: u64) {
        for _ in 0..generations {
            self.tick();
        }
    }

    /// State of the cell at `(row, col)`
    pub fn cell(&self, row: u32, col: u32) -> Result<Cell, UniverseError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Live neighbors of `(row, col)`, wrapping around the edges
    pub fn live_neighbor_count(&self, row: u32, col: u32) -> Result<u8, UniverseError> {
        self.check_bounds(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of ticks since construction or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The whole grid, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Coordinates of all live cells as `(row, col)`
    pub fn living_cells(&self) -> Vec<(u32, u32)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.cells[self.index(row, col)].is_alive())
            .collect()
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<(), UniverseError> {
        if row >= self.height || col >= self.width {
            return Err(UniverseError::IndexOutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    fn count_neighbors(&self, row: u32, col: u32) -> u8 {
        let (height, width) = (self.height as i64, self.width as i64);

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                let r = (row as i64 + dr).rem_euclid(height) as u32;
                let c = (col as i64 + dc).rem_euclid(width) as u32;
                self.cells[self.index(r, c)].is_alive()
            })
            .count() as u8
    }

    fn seed_cells(width: u32, height: u32, seeder: &dyn Seeder) -> Vec<Cell> {
        (0..width as usize * height as usize)
            .map(|i| Cell::from(seeder.is_alive(i, width, height)))
            .collect()
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
