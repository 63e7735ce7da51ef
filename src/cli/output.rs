//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordsmithArgs};
use crate::error::Result;
use crate::language_model::{CompletionStatus, Suggestion};
use crate::spelling::{CostModel, SpellCheck};

/// Result structure for edit distance.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub costs: CostModel,
    pub distance: u64,
    pub distance_percentage: f64,
    pub similarity_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<u64>>>,
}

/// Result structure for snapshot training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResult {
    pub snapshot: String,
    pub format: String,
    pub sentences: usize,
    pub total_words: u64,
    pub vocabulary_size: usize,
}

/// Result structure for spelling correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub word: String,
    pub result: SpellCheck,
}

/// Result structure for next-word suggestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub prompt: Vec<String>,
    pub prefix: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub best: Option<String>,
    pub best_probability: f64,
}

/// Result structure for sentence completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResult {
    pub prompt: Vec<String>,
    pub completion: String,
    pub steps: usize,
    pub status: CompletionStatus,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordsmithArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordsmithArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Flatten a JSON value into `key: value` lines.
///
/// Arrays of objects are listed one element per line, indented.
fn human_lines(value: &serde_json::Value) -> Vec<String> {
    let mut lines = Vec::new();
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Array(items) if items.iter().any(|i| i.is_object()) => {
                        lines.push(format!("{key}:"));
                        for item in items {
                            lines.push(format!("  - {}", format_object_inline(item)));
                        }
                    }
                    serde_json::Value::Object(_) => {
                        lines.push(format!("{key}:"));
                        lines.extend(human_lines(val).into_iter().map(|l| format!("  {l}")));
                    }
                    _ => lines.push(format!("{key}: {}", format_value(val))),
                }
            }
        }
        _ => lines.push(format_value(value)),
    }
    lines
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordsmithArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_object_inline(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        _ => format_value(value),
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => format_object_inline(value),
        serde_json::Value::Null => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::Correction;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("tea")), "tea");
        assert_eq!(format_value(&json!(3)), "3");
        assert_eq!(format_value(&json!(["i", "like"])), "[i, like]");
        assert_eq!(format_value(&json!(null)), "-");
    }

    #[test]
    fn test_human_lines_list_corrections() {
        let result = CorrectionResult {
            word: "automatoin".to_string(),
            result: SpellCheck::Suggestions(vec![Correction::new(
                "automation".to_string(),
                0.5,
                1,
            )]),
        };
        let lines = human_lines(&serde_json::to_value(&result).unwrap());

        for expected in ["word: automatoin", "result:", "  status: suggestions", "  corrections:"] {
            assert!(lines.iter().any(|l| l == expected), "missing {expected:?}");
        }
        let entry = lines.iter().find(|l| l.starts_with("    - ")).unwrap();
        assert!(entry.contains("word=automation"));
        assert!(entry.contains("edits=1"));
    }

    #[test]
    fn test_distance_result_skips_missing_matrix() {
        let result = DistanceResult {
            source: "a".to_string(),
            target: "b".to_string(),
            costs: CostModel::default(),
            distance: 2,
            distance_percentage: 100.0,
            similarity_percentage: 0.0,
            matrix: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("matrix").is_none());
        assert_eq!(value["costs"]["replacement"], 2);
    }

    #[test]
    fn test_completion_status_serializes_snake_case() {
        let result = CompletionResult {
            prompt: vec!["i".to_string()],
            completion: "i like tea".to_string(),
            steps: 2,
            status: CompletionStatus::EndOfSentence,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "end_of_sentence");
    }
}
