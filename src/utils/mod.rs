//! Terminal output helpers

pub mod display;

pub use display::{ColorOutput, GenerationReport, ProgressIndicator, TermColor, UniverseFormatter};
