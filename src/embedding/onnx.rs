//! Sentence-transformer embeddings through ONNX Runtime.
//!
//! [`OnnxEmbedder`] runs a transformer exported to ONNX, such as
//! `paraphrase-multilingual-MiniLM-L12-v2`, with the Hugging Face
//! `tokenizer.json` that ships with it. The last hidden state is
//! mean-pooled over the attention mask. Exports that already apply pooling
//! (a `[batch, hidden]` output) are used as is.
//!
//! Only available with the `onnx` cargo feature.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;

use crate::embedding::text_embedder::TextEmbedder;
use crate::embedding::vector::Vector;
use crate::error::{HumaniseurError, Result};

/// Token limit per text; longer texts are truncated.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 128;

const TOKENIZER_FILE: &str = "tokenizer.json";

const SUPPORTED_INPUTS: [&str; 3] = ["input_ids", "attention_mask", "token_type_ids"];

/// The tokenizer expected next to a model file.
pub fn default_tokenizer_path(model_path: &Path) -> PathBuf {
    model_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(TOKENIZER_FILE)
}

/// Embedder backed by an ONNX sentence-transformer model.
pub struct OnnxEmbedder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    input_names: Vec<String>,
    max_sequence_length: usize,
    dimension: usize,
    name: String,
}

impl OnnxEmbedder {
    /// Load a model, reading `tokenizer.json` from the model's directory.
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let model_path = model_path.as_ref();
        Self::load_with_tokenizer(model_path, default_tokenizer_path(model_path))
    }

    /// Load a model and an explicit tokenizer file.
    ///
    /// One short text is embedded up front to learn the output dimension.
    pub fn load_with_tokenizer<P, Q>(model_path: P, tokenizer_path: Q) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        let tokenizer = Tokenizer::from_file(tokenizer_path).map_err(|e| {
            HumaniseurError::storage(format!(
                "Failed to load tokenizer '{}': {}",
                tokenizer_path.display(),
                e
            ))
        })?;

        let model_error = |e: ort::Error| {
            HumaniseurError::storage(format!(
                "Failed to load ONNX model '{}': {}",
                model_path.display(),
                e
            ))
        };
        let session = Session::builder()
            .map_err(model_error)?
            .commit_from_file(model_path)
            .map_err(model_error)?;

        let input_names: Vec<String> = session
            .inputs
            .iter()
            .map(|input| input.name.clone())
            .collect();
        check_inputs(&input_names)?;

        let name = format!(
            "onnx:{}",
            model_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        );

        let mut embedder = Self {
            session: Mutex::new(session),
            tokenizer,
            input_names,
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            dimension: 0,
            name,
        };

        embedder.dimension = embedder
            .run(&["."])?
            .first()
            .map(Vector::dimension)
            .ok_or_else(|| HumaniseurError::embedding("model returned no outputs"))?;

        log::info!(
            "loaded ONNX model '{}' (dimension {}, inputs {:?})",
            model_path.display(),
            embedder.dimension,
            embedder.input_names
        );

        Ok(embedder)
    }

    /// Set the token limit per text.
    pub fn with_max_sequence_length(mut self, max_sequence_length: usize) -> Self {
        self.max_sequence_length = max_sequence_length.max(1);
        self
    }

    fn run(&self, texts: &[&str]) -> Result<Vec<Vector>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let batch = encode_batch(&self.tokenizer, texts, self.max_sequence_length)?;
        let shape = [batch.size, batch.seq_len];

        let mut inputs = Vec::with_capacity(self.input_names.len());
        for name in &self.input_names {
            let data = match name.as_str() {
                "input_ids" => batch.ids.clone(),
                "attention_mask" => batch.mask.clone(),
                _ => vec![0_i64; batch.ids.len()],
            };
            let tensor = Tensor::from_array((shape, data))
                .map_err(|e| HumaniseurError::embedding(format!("input tensor '{name}': {e}")))?;
            inputs.push((name.clone(), tensor));
        }

        let (dims, hidden) = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| HumaniseurError::embedding("ONNX session mutex poisoned"))?;
            let outputs = session
                .run(inputs)
                .map_err(|e| HumaniseurError::embedding(format!("forward pass: {e}")))?;
            if outputs.len() == 0 {
                return Err(HumaniseurError::embedding("model produced no outputs"));
            }
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| HumaniseurError::embedding(format!("extract output: {e}")))?;
            let dims: Vec<i64> = shape.iter().copied().collect();
            (dims, data.to_vec())
        };

        mean_pool(&dims, &hidden, &batch.mask, batch.size)
    }
}

impl TextEmbedder for OnnxEmbedder {
    fn embed(&self, text: &str) -> Result<Vector> {
        self.run(&[text])?
            .pop()
            .ok_or_else(|| HumaniseurError::embedding("model returned no outputs"))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vector>> {
        self.run(texts)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn check_inputs(names: &[String]) -> Result<()> {
    if let Some(name) = names
        .iter()
        .find(|name| !SUPPORTED_INPUTS.contains(&name.as_str()))
    {
        return Err(HumaniseurError::invalid_config(format!(
            "unsupported model input '{name}'"
        )));
    }
    if !names.iter().any(|name| name == "input_ids") {
        return Err(HumaniseurError::invalid_config(
            "model does not declare an `input_ids` input",
        ));
    }
    Ok(())
}

/// Token ids and attention mask for a batch, row-major and zero-padded.
struct EncodedBatch {
    ids: Vec<i64>,
    mask: Vec<i64>,
    size: usize,
    seq_len: usize,
}

fn encode_batch(
    tokenizer: &Tokenizer,
    texts: &[&str],
    max_sequence_length: usize,
) -> Result<EncodedBatch> {
    let mut rows = Vec::with_capacity(texts.len());
    for text in texts {
        let encoding = tokenizer
            .encode(*text, true)
            .map_err(|e| HumaniseurError::embedding(format!("tokenize '{text}': {e}")))?;
        let len = encoding.get_ids().len().min(max_sequence_length);
        let ids: Vec<i64> = encoding.get_ids()[..len].iter().map(|&id| id as i64).collect();
        let mask: Vec<i64> = encoding.get_attention_mask()[..len]
            .iter()
            .map(|&m| m as i64)
            .collect();
        rows.push((ids, mask));
    }

    let seq_len = rows.iter().map(|(ids, _)| ids.len()).max().unwrap_or(0).max(1);
    let mut batch = EncodedBatch {
        ids: Vec::with_capacity(rows.len() * seq_len),
        mask: Vec::with_capacity(rows.len() * seq_len),
        size: rows.len(),
        seq_len,
    };
    for (ids, mask) in rows {
        let pad = seq_len - ids.len();
        batch.ids.extend(ids);
        batch.ids.extend(std::iter::repeat_n(0, pad));
        batch.mask.extend(mask);
        batch.mask.extend(std::iter::repeat_n(0, pad));
    }
    Ok(batch)
}

/// Pool a model output into one vector per text.
///
/// `[batch, seq, hidden]` outputs are averaged over the positions where
/// `mask` is 1. `[batch, hidden]` outputs are split per row.
fn mean_pool(dims: &[i64], data: &[f32], mask: &[i64], batch: usize) -> Result<Vec<Vector>> {
    let dims: Vec<usize> = dims.iter().map(|&d| d.max(0) as usize).collect();
    if dims.first() != Some(&batch) || dims.iter().product::<usize>() != data.len() {
        return Err(HumaniseurError::embedding(format!(
            "unexpected output shape {dims:?} for batch of {batch}"
        )));
    }

    match dims[..] {
        [_, hidden] => Ok(data
            .chunks(hidden.max(1))
            .map(|row| Vector::new(row.to_vec()))
            .collect()),
        [_, seq_len, hidden] => {
            if mask.len() != batch * seq_len {
                return Err(HumaniseurError::embedding(format!(
                    "attention mask covers {} positions, output has {}",
                    mask.len(),
                    batch * seq_len
                )));
            }
            let mut vectors = Vec::with_capacity(batch);
            for b in 0..batch {
                let mut pooled = Vector::zeros(hidden);
                let mut count = 0.0_f32;
                for s in 0..seq_len {
                    if mask[b * seq_len + s] == 0 {
                        continue;
                    }
                    let offset = (b * seq_len + s) * hidden;
                    for (acc, value) in pooled.data.iter_mut().zip(&data[offset..offset + hidden]) {
                        *acc += value;
                    }
                    count += 1.0;
                }
                for value in &mut pooled.data {
                    *value /= count.max(1e-9);
                }
                vectors.push(pooled);
            }
            Ok(vectors)
        }
        _ => Err(HumaniseurError::embedding(format!(
            "unsupported output rank {}",
            dims.len()
        ))),
    }
}
