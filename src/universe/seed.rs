//! Seeding strategies used to populate (and reset) a universe
//!
//! A seeder decides the initial state of every cell from its row-major
//! index alone. The universe dimensions are passed along because they are
//! constant for a universe's lifetime, which lets pattern-based seeders map
//! an index back to a row and column.

use super::Pattern;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Injectable seeding strategy
///
/// Implementations must be pure: the same `(index, width, height)` always
/// yields the same answer. `Universe::reset` relies on this.
pub trait Seeder: Send + Sync {
    fn is_alive(&self, index: usize, width: u32, height: u32) -> bool;
}

impl<F> Seeder for F
where
    F: Fn(usize) -> bool + Send + Sync,
{
    fn is_alive(&self, index: usize, _width: u32, _height: u32) -> bool {
        self(index)
    }
}

/// Alive iff the index is divisible by any of the divisors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisibilitySeeder {
    divisors: Vec<usize>,
}

impl DivisibilitySeeder {
    pub fn new(divisors: Vec<usize>) -> Self {
        Self { divisors }
    }
}

impl Default for DivisibilitySeeder {
    fn default() -> Self {
        Self::new(vec![2, 7])
    }
}

impl Seeder for DivisibilitySeeder {
    fn is_alive(&self, index: usize, _width: u32, _height: u32) -> bool {
        self.divisors.iter().any(|&d| d != 0 && index % d == 0)
    }
}

/// Reproducible pseudo-random fill
///
/// Each index draws from its own ChaCha8 stream keyed by `seed`, so the
/// outcome for a cell does not depend on the order cells are visited.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSeeder {
    seed: u64,
    fill_rate: f64,
}

impl RandomSeeder {
    /// `fill_rate` is clamped to `[0, 1]`
    pub fn new(seed: u64, fill_rate: f64) -> Self {
        Self {
            seed,
            fill_rate: fill_rate.clamp(0.0, 1.0),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }
}

impl Seeder for RandomSeeder {
    fn is_alive(&self, index: usize, _width: u32, _height: u32) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(index as u64);
        rng.gen::<f64>() < self.fill_rate
    }
}

/// Stamps a pattern at an offset, wrapping around the universe edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSeeder {
    pattern: Pattern,
    offset_row: u32,
    offset_col: u32,
}

impl PatternSeeder {
    pub fn new(pattern: Pattern, offset_row: u32, offset_col: u32) -> Self {
        Self {
            pattern,
            offset_row,
            offset_col,
        }
    }
}

impl Seeder for PatternSeeder {
    fn is_alive(&self, index: usize, width: u32, height: u32) -> bool {
        let (width, height) = (width as usize, height as usize);
        let row = index / width;
        let col = index % width;

        let local_row = (row + height - self.offset_row as usize % height) % height;
        let local_col = (col + width - self.offset_col as usize % width) % width;

        self.pattern.get(local_row, local_col).is_alive()
    }
}

/// Every cell starts dead
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankSeeder;

impl Seeder for BlankSeeder {
    fn is_alive(&self, _index: usize, _width: u32, _height: u32) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::parse_pattern;

    #[test]
    fn test_default_divisibility() {
        let seeder = DivisibilitySeeder::default();
        let alive: Vec<usize> = (0..16).filter(|&i| seeder.is_alive(i, 4, 4)).collect();
        assert_eq!(alive, vec![0, 2, 4, 6, 7, 8, 10, 12, 14]);
    }

    #[test]
    fn test_zero_divisor_is_ignored() {
        let seeder = DivisibilitySeeder::new(vec![0, 5]);
        assert!(seeder.is_alive(10, 4, 4));
        assert!(!seeder.is_alive(3, 4, 4));
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = RandomSeeder::new(42, 0.5);
        let b = RandomSeeder::new(42, 0.5);
        let first: Vec<bool> = (0..256).map(|i| a.is_alive(i, 16, 16)).collect();
        let second: Vec<bool> = (0..256).rev().map(|i| b.is_alive(i, 16, 16)).collect();
        let second: Vec<bool> = second.into_iter().rev().collect();
        assert_eq!(first, second);

        let alive = first.iter().filter(|&&c| c).count();
        assert!(alive > 64 && alive < 192, "fill looks off: {}", alive);
    }

    #[test]
    fn test_random_fill_rate_bounds() {
        let never = RandomSeeder::new(7, -1.0);
        let always = RandomSeeder::new(7, 3.0);
        assert_eq!(never.fill_rate(), 0.0);
        assert_eq!(always.fill_rate(), 1.0);
        assert!((0..100).all(|i| !never.is_alive(i, 10, 10)));
        assert!((0..100).all(|i| always.is_alive(i, 10, 10)));
    }

    #[test]
    fn test_pattern_wraps_at_edges() {
        let pattern = parse_pattern("11\n11\n").unwrap();
        let seeder = PatternSeeder::new(pattern, 3, 3);

        // 4x4 universe, block stamped at (3, 3) wraps to the corners
        let alive: Vec<usize> = (0..16).filter(|&i| seeder.is_alive(i, 4, 4)).collect();
        assert_eq!(alive, vec![0, 3, 12, 15]);
    }

    #[test]
    fn test_closure_seeder() {
        let seeder = |i: usize| i % 3 == 1;
        assert!(seeder.is_alive(4, 3, 3));
        assert!(!seeder.is_alive(3, 3, 3));
        assert!(!BlankSeeder.is_alive(0, 1, 1));
    }
}
