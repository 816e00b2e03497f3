//! Trained classifier and the metadata exported alongside it: ordered feature
//! schema, detection threshold, and the fitted scaler.

mod onnx;
mod scaler;

pub use onnx::OnnxClassifier;
pub use scaler::StandardScaler;

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scores a scaled feature vector.
pub trait Classifier {
    /// Probability of the positive (illicit) class, in [0, 1].
    fn score(&self, scaled: &[f32]) -> Result<f32, ModelError>;
}

impl<T: Classifier + ?Sized> Classifier for Box<T> {
    fn score(&self, scaled: &[f32]) -> Result<f32, ModelError> {
        (**self).score(scaled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    /// Training feature list; defines input width and order
    pub feature_names: Vec<String>,
    /// Probability at or above which an address is flagged
    pub threshold: f64,
    pub scaler: StandardScaler,
}

impl ModelBundle {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle: ModelBundle = serde_json::from_str(&data)?;
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        let schema = self.feature_names.len();
        for scaler in [self.scaler.mean.len(), self.scaler.scale.len()] {
            if scaler != schema {
                return Err(ModelError::SchemaMismatch { schema, scaler });
            }
        }
        Ok(())
    }

    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_valid_bundle() {
        let f = write(
            r#"{"feature_names": ["total_txs", "Time step"], "threshold": 0.42,
                "scaler": {"mean": [1.0, 2.0], "scale": [0.5, 1.0]}}"#,
        );
        let bundle = ModelBundle::load(f.path()).unwrap();
        assert_eq!(bundle.feature_count(), 2);
        assert_eq!(bundle.threshold, 0.42);
    }

    #[test]
    fn rejects_scaler_width_mismatch() {
        let f = write(
            r#"{"feature_names": ["total_txs"], "threshold": 0.5,
                "scaler": {"mean": [1.0, 2.0], "scale": [1.0, 1.0]}}"#,
        );
        assert!(matches!(
            ModelBundle::load(f.path()),
            Err(ModelError::SchemaMismatch { schema: 1, scaler: 2 })
        ));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let f = write(r#"{"feature_names": [], "threshold": 1.5, "scaler": {"mean": [], "scale": []}}"#);
        assert!(matches!(ModelBundle::load(f.path()), Err(ModelError::InvalidThreshold(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            ModelBundle::load(Path::new("nonexistent_bundle.json")),
            Err(ModelError::NotFound(_))
        ));
    }
}
