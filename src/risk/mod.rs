//! Verdicts from classifier probabilities.

mod engine;

pub use engine::{ConfidenceLevel, RiskEngine, Verdict};
