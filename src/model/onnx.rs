//! ONNX Runtime inference for the ransomware probability. Input: [1, n] f32.
//! Output: the positive-class probability.

use super::Classifier;
use crate::error::ModelError;
use ndarray::{Array2, CowArray};
use ort::tensor::OrtOwnedTensor;
use ort::{Environment, GraphOptimizationLevel, Session, SessionBuilder, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct OnnxClassifier {
    // the session borrows runtime state owned by the environment
    _env: Arc<Environment>,
    session: Session,
    input_width: usize,
}

impl OnnxClassifier {
    /// Load the model at `path`; `input_width` is the schema length.
    pub fn load(path: &Path, input_width: usize) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let env = Environment::builder()
            .with_name("ransomware-screener")
            .build()?
            .into_arc();
        let session = SessionBuilder::new(&env)?
            .with_optimization_level(GraphOptimizationLevel::Level1)?
            .with_intra_threads(1)?
            .with_model_from_file(path)?;

        info!(
            path = %path.display(),
            inputs = session.inputs.len(),
            outputs = session.outputs.len(),
            "onnx model loaded"
        );
        Ok(Self {
            _env: env,
            session,
            input_width,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn score(&self, scaled: &[f32]) -> Result<f32, ModelError> {
        if scaled.len() != self.input_width {
            return Err(ModelError::InputWidth {
                expected: self.input_width,
                actual: scaled.len(),
            });
        }

        let arr = Array2::from_shape_vec((1, scaled.len()), scaled.to_vec())
            .map_err(|e| ModelError::Output(e.to_string()))?;
        let input = CowArray::from(arr.into_dyn());
        let outputs = self
            .session
            .run(vec![Value::from_array(self.session.allocator(), &input)?])?;

        // tree-ensemble exports emit (label, probabilities); plain ones just probabilities
        let probs = match outputs.len() {
            0 => return Err(ModelError::Output("model produced no outputs".into())),
            1 => &outputs[0],
            _ => &outputs[1],
        };
        let tensor: OrtOwnedTensor<f32, _> = probs.try_extract()?;
        let view = tensor.view();
        let flat: Vec<f32> = view.iter().copied().collect();
        let p = match flat.as_slice() {
            [] => return Err(ModelError::Output("empty probability tensor".into())),
            [single] => *single,
            [_, positive, ..] => *positive,
        };
        Ok(p.clamp(0.0, 1.0))
    }
}
