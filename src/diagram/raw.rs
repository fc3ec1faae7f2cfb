use super::lenient::{Entry, Section, lenient_string};
use serde::Deserialize;

/// Node payload. Only the label is read, editor-specific fields are ignored.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RawNodeData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
}

/// A diagram node as the editor serializes it.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RawNode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub data: Entry<RawNodeData>,
}

impl RawNode {
    /// The nested `data.label`, or an empty string when `data` is absent or malformed.
    pub fn label(&self) -> &str {
        self.data
            .as_record()
            .map(|data| data.label.as_str())
            .unwrap_or("")
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RawEdge {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target: String,
}

/// Complete diagram document.
///
/// `nodes` and `edges` read as empty when missing, `null` or scalar. A populated object in
/// their place is a shape error raised by serde.
#[derive(Debug, Deserialize, Default)]
pub struct RawDiagram {
    #[serde(default)]
    pub nodes: Section<RawNode>,
    #[serde(default)]
    pub edges: Section<RawEdge>,
}

impl RawDiagram {
    pub fn nodes(&self) -> impl Iterator<Item = &RawNode> {
        self.nodes.records()
    }

    pub fn edges(&self) -> impl Iterator<Item = &RawEdge> {
        self.edges.records()
    }
}
