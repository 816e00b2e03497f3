//! Structured logging setup and result-line output.

mod format;

pub use format::StructuredLogger;
