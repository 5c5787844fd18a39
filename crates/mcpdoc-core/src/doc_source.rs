//! Documentation source records.
//!
//! A doc source points at a remotely hosted `llms.txt` index file that the
//! documentation server fetches and exposes through its protocol.

use serde::{Deserialize, Serialize};

/// A single configured documentation source.
///
/// `llms_txt` is always present and non-blank; the optional fields are
/// omitted entirely (not serialized as empty strings) when they were absent
/// or blank in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSource {
    /// URL of the `llms.txt` index file.
    pub llms_txt: String,

    /// Human-readable name of the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short description of what the source covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DocSource {
    /// Create a source with only the required `llms_txt` URL.
    pub fn new(llms_txt: impl Into<String>) -> Self {
        Self {
            llms_txt: llms_txt.into(),
            name: None,
            description: None,
        }
    }

    /// Attach a name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The built-in source list used when no configuration is supplied.
///
/// These four entries are the canonical "no configuration" behavior and are
/// kept identical across deployments for environment compatibility.
pub fn default_doc_sources() -> Vec<DocSource> {
    vec![
        DocSource::new("https://langchain-ai.github.io/langgraph/llms.txt")
            .with_name("LangGraph Python"),
        DocSource::new("https://langchain-ai.github.io/langgraphjs/llms.txt")
            .with_name("LangGraph JS"),
        DocSource::new("https://python.langchain.com/llms.txt").with_name("LangChain Python"),
        DocSource::new("https://js.langchain.com/llms.txt").with_name("LangChain JS"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_has_four_named_sources() {
        let sources = default_doc_sources();
        assert_eq!(sources.len(), 4);
        for source in &sources {
            assert!(!source.llms_txt.is_empty());
            assert!(source.name.is_some());
            assert!(source.description.is_none());
        }
    }

    #[test]
    fn serialization_omits_absent_optional_fields() {
        let source = DocSource::new("https://example.com/llms.txt");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "llms_txt": "https://example.com/llms.txt" })
        );
    }

    #[test]
    fn serialization_includes_present_optional_fields() {
        let source = DocSource::new("https://example.com/llms.txt")
            .with_name("Example")
            .with_description("Example docs");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["name"], "Example");
        assert_eq!(json["description"], "Example docs");
    }
}
