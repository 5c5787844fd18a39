//! Doc-source list parsing and validation.
//!
//! `MCPDOC_SOURCES_JSON` carries a JSON array of source objects. Validation
//! is strict and ordered: the whole parse fails on the first invalid
//! element, with the element's index carried in the error. Optional fields
//! that are absent, blank, or not strings are silently omitted from the
//! record — that leniency matches the deployed behavior this replaces.

use serde_json::Value;

use super::ConfigError;
use crate::doc_source::{DocSource, default_doc_sources};

/// Parse the raw `MCPDOC_SOURCES_JSON` value into validated records.
///
/// An absent or empty value yields the built-in default list. Input order is
/// preserved; no partial results are returned on failure.
pub fn parse_doc_sources(raw: Option<&str>) -> Result<Vec<DocSource>, ConfigError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default_doc_sources()),
    };

    let data: Value = serde_json::from_str(raw).map_err(ConfigError::SourcesNotJson)?;
    let Value::Array(items) = data else {
        return Err(ConfigError::SourcesNotList);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_source(index, item))
        .collect()
}

/// Validate one array element into a [`DocSource`].
fn validate_source(index: usize, item: &Value) -> Result<DocSource, ConfigError> {
    let Value::Object(object) = item else {
        return Err(ConfigError::SourceNotObject { index });
    };

    let llms_txt = object
        .get("llms_txt")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::SourceMissingLlmsTxt { index })?;

    let mut source = DocSource::new(llms_txt);
    source.name = optional_string(object.get("name"));
    source.description = optional_string(object.get("description"));
    Ok(source)
}

/// Trimmed string value, or `None` for absent/blank/non-string input.
fn optional_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_yields_builtin_defaults() {
        let sources = parse_doc_sources(None).unwrap();
        assert_eq!(sources, default_doc_sources());
        assert_eq!(sources.len(), 4);
    }

    #[test]
    fn empty_value_yields_builtin_defaults() {
        let sources = parse_doc_sources(Some("")).unwrap();
        assert_eq!(sources, default_doc_sources());
    }

    #[test]
    fn valid_array_parses_in_order_with_trimming() {
        let raw = r#"[
            {"llms_txt": " https://a.example/llms.txt ", "name": " A "},
            {"llms_txt": "https://b.example/llms.txt", "description": "B docs"}
        ]"#;
        let sources = parse_doc_sources(Some(raw)).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].llms_txt, "https://a.example/llms.txt");
        assert_eq!(sources[0].name.as_deref(), Some("A"));
        assert_eq!(sources[0].description, None);
        assert_eq!(sources[1].llms_txt, "https://b.example/llms.txt");
        assert_eq!(sources[1].name, None);
        assert_eq!(sources[1].description.as_deref(), Some("B docs"));
    }

    #[test]
    fn blank_and_non_string_optional_fields_are_omitted() {
        let raw = r#"[{"llms_txt": "https://x/llms.txt", "name": "  ", "description": 42}]"#;
        let sources = parse_doc_sources(Some(raw)).unwrap();
        assert_eq!(sources[0].name, None);
        assert_eq!(sources[0].description, None);
    }

    #[test]
    fn invalid_json_is_a_json_error_not_a_shape_error() {
        let err = parse_doc_sources(Some("not json")).unwrap_err();
        assert!(matches!(err, ConfigError::SourcesNotJson(_)));
        assert_eq!(err.to_string(), "MCPDOC_SOURCES_JSON must be valid JSON");
    }

    #[test]
    fn non_array_top_level_is_a_shape_error() {
        let err = parse_doc_sources(Some(r#"{"llms_txt": "https://x"}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::SourcesNotList));
    }

    #[test]
    fn non_object_element_reports_its_index() {
        let raw = r#"[{"llms_txt": "https://x/llms.txt"}, "oops"]"#;
        let err = parse_doc_sources(Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::SourceNotObject { index: 1 }));
        assert_eq!(
            err.to_string(),
            "MCPDOC_SOURCES_JSON[1] must be an object with llms_txt"
        );
    }

    #[test]
    fn empty_object_reports_missing_llms_txt_at_index_zero() {
        let err = parse_doc_sources(Some("[{}]")).unwrap_err();
        assert!(matches!(err, ConfigError::SourceMissingLlmsTxt { index: 0 }));
        assert_eq!(
            err.to_string(),
            "MCPDOC_SOURCES_JSON[0] is missing a non-empty llms_txt"
        );
    }

    #[test]
    fn blank_llms_txt_is_rejected() {
        let err = parse_doc_sources(Some(r#"[{"llms_txt": "   "}]"#)).unwrap_err();
        assert!(matches!(err, ConfigError::SourceMissingLlmsTxt { index: 0 }));
    }

    #[test]
    fn first_invalid_element_short_circuits() {
        let raw = r#"[{"llms_txt": "https://ok"}, {}, "also bad"]"#;
        let err = parse_doc_sources(Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::SourceMissingLlmsTxt { index: 1 }));
    }
}
