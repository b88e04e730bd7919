// Input loaders — read files into `Document`s for the analyzer.

pub mod transcript;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::debug;

use crate::group::models::Document;

/// How to interpret an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `.json` files as JSON documents, anything else as transcripts
    Auto,
    /// `{"file_id": ..., "segments": [...]}`
    Json,
    /// `Speaker: text` lines, `---` between segments
    Transcript,
}

impl InputFormat {
    /// Resolve `Auto` against a path's extension.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("json"));
                if is_json {
                    InputFormat::Json
                } else {
                    InputFormat::Transcript
                }
            }
            other => other,
        }
    }
}

/// Parse a JSON document. A missing `file_id` falls back to `default_id`.
pub fn parse_json(content: &str, default_id: &str) -> Result<Document> {
    let mut value: serde_json::Value =
        serde_json::from_str(content).context("Input is not valid JSON")?;
    if let Some(obj) = value.as_object_mut() {
        obj.entry("file_id")
            .or_insert_with(|| serde_json::Value::String(default_id.to_string()));
    }
    let document: Document =
        serde_json::from_value(value).context("JSON does not match the document shape")?;
    Ok(document)
}

/// Read and parse one input file.
pub fn load_document(path: &Path, format: InputFormat) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let document = match format.resolve(path) {
        InputFormat::Json => parse_json(&content, &file_id)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        _ => transcript::parse_transcript(&content, &file_id),
    };

    debug!(
        path = %path.display(),
        segments = document.segments.len(),
        "Loaded input document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_by_extension() {
        assert_eq!(InputFormat::Auto.resolve(Path::new("a/b.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::Auto.resolve(Path::new("a/b.txt")), InputFormat::Transcript);
        assert_eq!(InputFormat::Json.resolve(Path::new("b.txt")), InputFormat::Json);
    }

    #[test]
    fn test_parse_json_fills_file_id() {
        let json = r#"{"segments": [{"segment_number": 1, "speakers": []}]}"#;
        let doc = parse_json(json, "stem").unwrap();
        assert_eq!(doc.file_id, "stem");
        assert_eq!(doc.segments.len(), 1);
    }

    #[test]
    fn test_parse_json_rejects_wrong_shape() {
        assert!(parse_json(r#"{"segments": 3}"#, "x").is_err());
        assert!(parse_json("not json", "x").is_err());
    }
}
