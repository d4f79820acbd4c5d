//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HumaniseurArgs, OutputFormat};
use crate::error::Result;
use crate::humanizer::SentenceOutcome;
use crate::stats::TextStats;

/// Result structure for the humanize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct HumanizeResult {
    pub text: String,
    pub input: TextStats,
    pub output: TextStats,
    pub transitions: usize,
    pub substitutions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<SentenceOutcome>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(
    message: &str,
    result: &T,
    args: &HumaniseurArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &HumaniseurArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    match value.get("text").and_then(|t| t.as_str()) {
        Some(text) => {
            println!("{text}");
            println!();
            if args.verbosity() > 0 {
                println!("{}", format_humanize_summary(&value));
            }
            if let Some(sentences) = value.get("sentences").and_then(|s| s.as_array()) {
                output_sentences_human(sentences);
            }
        }
        None => output_generic_human(&value),
    }
    Ok(())
}

/// One-line statistics summary for the humanize command.
fn format_humanize_summary(value: &serde_json::Value) -> String {
    let count = |side: &str, field: &str| {
        value
            .get(side)
            .and_then(|s| s.get(field))
            .and_then(|c| c.as_u64())
            .unwrap_or(0)
    };
    format!(
        "Nombre de mots (entrée): {} | Nombre de phrases (entrée): {} | \
         Nombre de mots (sortie): {} | Nombre de phrases (sortie): {}",
        count("input", "word_count"),
        count("input", "sentence_count"),
        count("output", "word_count"),
        count("output", "sentence_count"),
    )
}

fn output_sentences_human(sentences: &[serde_json::Value]) {
    println!();
    println!("Détail par phrase :");
    println!("───────────────────");
    for (i, sentence) in sentences.iter().enumerate() {
        let transition = sentence
            .get("transition")
            .and_then(|t| t.as_str())
            .unwrap_or("-");
        println!("{}. transition: {}", i + 1, transition);
        if let Some(subs) = sentence.get("substitutions").and_then(|s| s.as_array()) {
            for sub in subs {
                println!(
                    "   {} -> {}",
                    sub.get("original").and_then(|o| o.as_str()).unwrap_or(""),
                    sub.get("replacement").and_then(|r| r.as_str()).unwrap_or("")
                );
            }
        }
    }
}

fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

fn output_json<T: Serialize>(result: &T, args: &HumaniseurArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_humanize_summary() {
        let result = HumanizeResult {
            text: "De plus, Il pleut.".to_string(),
            input: TextStats {
                word_count: 2,
                sentence_count: 1,
            },
            output: TextStats {
                word_count: 4,
                sentence_count: 1,
            },
            transitions: 1,
            substitutions: 0,
            sentences: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            format_humanize_summary(&value),
            "Nombre de mots (entrée): 2 | Nombre de phrases (entrée): 1 | \
             Nombre de mots (sortie): 4 | Nombre de phrases (sortie): 1"
        );
        assert!(value.get("sentences").is_none());
    }
}
