//! Per-column standardization fitted at training time.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Columns described by this scaler, or `None` when `mean` and `scale`
    /// disagree.
    pub fn width(&self) -> Option<usize> {
        (self.mean.len() == self.scale.len()).then_some(self.mean.len())
    }

    /// `(x - mean) / scale`, zero scale treated as 1.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f32>, ModelError> {
        if self.width() != Some(values.len()) {
            return Err(ModelError::InputWidth {
                expected: self.mean.len(),
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((x, m), s)| {
                let s = if *s == 0.0 { 1.0 } else { *s };
                ((x - m) / s) as f32
            })
            .collect())
    }
}
