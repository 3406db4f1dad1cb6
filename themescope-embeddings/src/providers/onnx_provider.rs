//! ONNX Runtime sentence-embedding provider.
//!
//! Loads a MiniLM-style model through `ort` (v2), runs one text at a time,
//! mean-pools token outputs, and L2-normalizes. Input longer than the
//! model's position table is truncated, so full-text documents still embed.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use themescope_core::constants::DEFAULT_MAX_SEQUENCE_LENGTH;
use themescope_core::errors::EmbeddingError;
use themescope_core::traits::IEmbeddingProvider;
use tracing::debug;

/// BERT uncased vocabulary size; ids below `FIRST_WORD_ID` are reserved.
const VOCAB_SIZE: u32 = 30_522;
const FIRST_WORD_ID: u32 = 1_000;
const CLS: i64 = 101;
const SEP: i64 = 102;

pub struct OnnxProvider {
    /// `Session::run` takes `&mut self`; the mutex gives `&self` access.
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
    max_sequence_length: usize,
    token_type_ids: bool,
}

impl OnnxProvider {
    /// Load an ONNX model from `model_path`.
    ///
    /// # Errors
    /// `EmbeddingError::ModelLoadFailed` when the file is missing or the
    /// runtime rejects it.
    pub fn load(model_path: &str, dimensions: usize) -> Result<Self, EmbeddingError> {
        let load_failed = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_path.to_string(),
            reason,
        };

        let path = Path::new(model_path);
        if !path.exists() {
            return Err(load_failed("model file not found".to_string()));
        }

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            token_type_ids: true,
        })
    }

    /// Cap on token positions, [CLS] and [SEP] included.
    pub fn with_max_sequence_length(mut self, max_sequence_length: usize) -> Self {
        self.max_sequence_length = max_sequence_length;
        self
    }

    /// Whether the model takes a third `token_type_ids` input.
    pub fn with_token_type_ids(mut self, token_type_ids: bool) -> Self {
        self.token_type_ids = token_type_ids;
        self
    }

    fn infer(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let inference_failed = |reason: String| EmbeddingError::InferenceFailed { reason };
        let tensor = |values: Vec<i64>| {
            let shape = vec![1i64, values.len() as i64];
            Tensor::from_array((shape, values))
                .map_err(|e| inference_failed(format!("tensor creation error: {e}")))
        };

        let input_ids = encode(text, self.max_sequence_length);
        let seq_len = input_ids.len();
        let ids_tensor = tensor(input_ids)?;
        let mask_tensor = tensor(vec![1i64; seq_len])?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_failed(format!("session lock poisoned: {e}")))?;

        let outputs = if self.token_type_ids {
            let type_tensor = tensor(vec![0i64; seq_len])?;
            session.run(ort::inputs![ids_tensor, mask_tensor, type_tensor])
        } else {
            session.run(ort::inputs![ids_tensor, mask_tensor])
        }
        .map_err(|e| inference_failed(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_failed("no output tensor".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_failed(format!("tensor extraction failed: {e}")))?;

        let mut pooled = match shape.len() {
            // [batch=1, seq, dims]
            3 => {
                let seq = shape[1] as usize;
                let dims = shape[2] as usize;
                let mut pooled = vec![0.0f32; dims];
                for row in data.chunks_exact(dims).take(seq) {
                    for (acc, v) in pooled.iter_mut().zip(row) {
                        *acc += v;
                    }
                }
                for v in &mut pooled {
                    *v /= seq.max(1) as f32;
                }
                pooled
            }
            // [batch=1, dims], already pooled.
            2 => data[..shape[1] as usize].to_vec(),
            _ => {
                return Err(inference_failed(format!(
                    "unexpected output shape: {shape:?}"
                )))
            }
        };

        let norm: f32 = pooled.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut pooled {
                *v /= norm;
            }
        }

        pooled.resize(self.dimensions, 0.0);
        Ok(pooled)
    }
}

/// Word ids framed by [CLS] and [SEP], at most `max_len` positions long.
/// Words past the budget are dropped from the end.
fn encode(text: &str, max_len: usize) -> Vec<i64> {
    let words = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(max_len.saturating_sub(2))
        .map(word_id);
    std::iter::once(CLS)
        .chain(words)
        .chain(std::iter::once(SEP))
        .collect()
}

/// Case-insensitive blake3 bucket outside the reserved id range.
fn word_id(word: &str) -> i64 {
    let hash = blake3::hash(word.to_lowercase().as_bytes());
    let b = hash.as_bytes();
    let h = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    i64::from(FIRST_WORD_ID + h % (VOCAB_SIZE - FIRST_WORD_ID))
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.infer(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
