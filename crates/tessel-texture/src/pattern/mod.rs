//! Deterministic non-noise patterns.

mod checker;
mod waves;

pub use checker::CheckerPattern;
pub use waves::WavesPattern;
