//! Errors raised by the simulation core

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    #[error("invalid universe dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: u32, height: u32 },

    #[error("cell ({row}, {col}) is out of range for a {width}x{height} universe")]
    IndexOutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}
