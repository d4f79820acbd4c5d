//! Command implementations for the humaniseur CLI.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::segmenter::french::FrenchSegmenter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::embedding::{PrecomputedEmbedder, TextEmbedder};
use crate::error::{HumaniseurError, Result};
use crate::humanizer::{HumanizerBuilder, HumanizerConfig};
use crate::stats::{TextStats, TransformationStats};
use crate::synonym::SynonymDictionary;

/// Message shown when there is no text to transform.
pub const EMPTY_INPUT_MESSAGE: &str = "Veuillez entrer ou téléverser un texte à transformer.";

/// Execute a CLI command.
pub fn execute_command(args: HumaniseurArgs) -> Result<()> {
    match &args.command {
        Command::Humanize(humanize_args) => humanize_text(humanize_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Resolve the input text.
///
/// A file wins over the positional text; stdin is read when neither is
/// given. File and stdin bytes go through [`decode_input`].
pub fn read_input(input: &InputArgs) -> Result<String> {
    let text = if let Some(path) = &input.file {
        let bytes = fs::read(path).map_err(|e| {
            HumaniseurError::storage(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        decode_input(&bytes)
    } else if let Some(text) = &input.text {
        text.clone()
    } else {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        decode_input(&bytes)
    };

    if text.trim().is_empty() {
        return Err(HumaniseurError::invalid_argument(EMPTY_INPUT_MESSAGE));
    }

    Ok(text)
}

/// Decode raw input as UTF-8, dropping invalid byte sequences.
pub fn decode_input(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Merge the config file, CLI defaults and flags.
///
/// Flags win over the file; the file wins over the CLI defaults.
pub fn resolve_config(args: &HumanizeArgs) -> Result<HumanizerConfig> {
    let mut config = match &args.config {
        Some(path) => HumanizerConfig::from_file(path)?,
        None => HumanizerConfig::default()
            .with_p_synonym_replacement(DEFAULT_P_SYNONYM)
            .with_p_academic_transition(DEFAULT_P_TRANSITION),
    };

    if let Some(p) = args.p_synonym {
        config.p_synonym_replacement = p;
    }
    if let Some(p) = args.p_transition {
        config.p_academic_transition = p;
    }

    config.validate()?;
    Ok(config)
}

/// Transform text and report statistics.
fn humanize_text(args: HumanizeArgs, cli_args: &HumaniseurArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let config = resolve_config(&args)?;

    let segmenter: Arc<dyn Segmenter> = Arc::new(FrenchSegmenter::new());
    let mut builder = HumanizerBuilder::new()
        .config(config)
        .segmenter(segmenter.clone());

    if let Some(path) = &args.synonym_dict {
        builder = builder.synonym_source(Arc::new(SynonymDictionary::load_from_file(path)?));
    }
    if let Some(path) = &args.vectors {
        builder = builder.embedder(Arc::new(PrecomputedEmbedder::load_from_file(path)?));
    }
    if let Some(path) = &args.model {
        builder = builder.embedder(load_model(path, args.tokenizer.as_deref())?);
    }

    let humanizer = builder.build()?;
    log::info!("transforming {} bytes of text", text.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let result = humanizer.humanize_document(&text, args.synonyms, &mut rng)?;
    let stats = TransformationStats::compute(&text, &result.text, segmenter.as_ref())?;

    output_result(
        "Texte transformé :",
        &HumanizeResult {
            transitions: result.transition_count(),
            substitutions: result.substitution_count(),
            input: stats.input,
            output: stats.output,
            sentences: (cli_args.verbosity() > 1).then(|| result.sentences.clone()),
            text: result.text,
        },
        cli_args,
    )
}

/// Load the sentence-embedding model given with `--model`.
#[cfg(feature = "onnx")]
fn load_model(model: &Path, tokenizer: Option<&Path>) -> Result<Arc<dyn TextEmbedder>> {
    use crate::embedding::OnnxEmbedder;

    let embedder = match tokenizer {
        Some(tokenizer) => OnnxEmbedder::load_with_tokenizer(model, tokenizer)?,
        None => OnnxEmbedder::load(model)?,
    };
    Ok(Arc::new(embedder))
}

#[cfg(not(feature = "onnx"))]
fn load_model(model: &Path, _tokenizer: Option<&Path>) -> Result<Arc<dyn TextEmbedder>> {
    Err(HumaniseurError::invalid_argument(format!(
        "cannot load '{}': humaniseur was built without the `onnx` feature",
        model.display()
    )))
}

/// Show word and sentence counts.
fn show_stats(args: StatsArgs, cli_args: &HumaniseurArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let stats = TextStats::compute(&text, &FrenchSegmenter::new())?;
    output_result("Statistiques du texte :", &stats, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn humanize_args() -> HumanizeArgs {
        HumanizeArgs {
            input: InputArgs::default(),
            synonyms: false,
            synonym_dict: None,
            vectors: None,
            model: None,
            tokenizer: None,
            p_synonym: None,
            p_transition: None,
            seed: None,
            config: None,
        }
    }

    #[test]
    fn test_read_input_text() {
        let input = InputArgs {
            text: Some("Le chat dort.".to_string()),
            file: None,
        };
        assert_eq!(read_input(&input).unwrap(), "Le chat dort.");
    }

    #[test]
    fn test_read_input_rejects_blank() {
        let input = InputArgs {
            text: Some("  \n\t".to_string()),
            file: None,
        };
        match read_input(&input) {
            Err(HumaniseurError::InvalidArgument(msg)) => assert_eq!(msg, EMPTY_INPUT_MESSAGE),
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn test_read_input_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("texte.txt");
        let mut bytes = "Il pleut. ".as_bytes().to_vec();
        bytes.push(0xff);
        fs::write(&path, &bytes).unwrap();

        let input = InputArgs {
            text: Some("ignoré".to_string()),
            file: Some(path),
        };
        assert_eq!(read_input(&input).unwrap(), "Il pleut. ");
    }

    #[test]
    fn test_decode_input_drops_invalid_bytes() {
        let mut bytes = b"Le ch".to_vec();
        bytes.extend([0xc3, 0x28]);
        bytes.extend("at dort. Été".as_bytes());
        bytes.push(0xff);

        assert_eq!(decode_input(&bytes), "Le ch(at dort. Été");
        assert_eq!(decode_input("déjà vu".as_bytes()), "déjà vu");
        assert_eq!(decode_input(&[0xff, 0xfe]), "");
    }

    #[test]
    fn test_read_input_missing_file() {
        let input = InputArgs {
            text: None,
            file: Some(PathBuf::from("/nonexistent/texte.txt")),
        };
        assert!(matches!(
            read_input(&input),
            Err(HumaniseurError::Storage(_))
        ));
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn test_model_requires_onnx_feature() {
        assert!(matches!(
            load_model(Path::new("model.onnx"), None),
            Err(HumaniseurError::InvalidArgument(_))
        ));
    }

    #[cfg(feature = "onnx")]
    #[test]
    fn test_model_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_model(&dir.path().join("model.onnx"), None),
            Err(HumaniseurError::Storage(_))
        ));
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(&humanize_args()).unwrap();
        assert_eq!(config.p_synonym_replacement, DEFAULT_P_SYNONYM);
        assert_eq!(config.p_academic_transition, DEFAULT_P_TRANSITION);
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "p_synonym_replacement": 0.8, "p_academic_transition": 0.1 }"#,
        )
        .unwrap();

        let mut args = humanize_args();
        args.config = Some(path);
        args.p_transition = Some(0.9);

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.p_synonym_replacement, 0.8);
        assert_eq!(config.p_academic_transition, 0.9);
    }

    #[test]
    fn test_resolve_config_rejects_bad_flag() {
        let mut args = humanize_args();
        args.p_synonym = Some(1.5);
        assert!(matches!(
            resolve_config(&args),
            Err(HumaniseurError::InvalidConfig(_))
        ));
    }
}
