use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while decoding a flow diagram.
///
/// Record-level problems (a node without a label, an edge without a source) are not
/// errors: those records are filtered out. Only a document that cannot be read as a
/// diagram at all ends up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed JSON: {message}")]
    MalformedJson {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Expected a JSON object at the top level, but found {0}")]
    NotAnObject(&'static str),

    #[error("Diagram has an unexpected shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ParseError::UnexpectedShape(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => ParseError::MalformedJson {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        }
    }
}
