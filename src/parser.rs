use crate::diagram::{RawDiagram, RawEdge, RawNode};
use crate::error::ParseError;
use crate::plan::{BucketInfo, FlowPlan, JobInfo, SourceGroups};
use log::{debug, error};
use serde::Deserialize;
use serde_json::Value;

/// Turns flow diagram JSON into buckets and source-grouped jobs.
///
/// The parser holds no state; one instance can be shared and reused for any number of
/// documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagramParser;

impl DiagramParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a diagram, returning the plan or the reason the document was unreadable.
    ///
    /// Nodes without an `id` or `data.label` and edges without an `id`, `source` or
    /// `target` are dropped silently. Jobs are grouped by source, groups ordered by the
    /// first appearance of their source, edges within a group kept in document order.
    pub fn parse(&self, json: &str) -> Result<FlowPlan, ParseError> {
        let value: Value = serde_json::from_str(json)?;
        let diagram = match value {
            object @ Value::Object(_) => RawDiagram::deserialize(object)?,
            other => return Err(ParseError::NotAnObject(json_kind(&other))),
        };

        let buckets = self.extract_nodes(diagram.nodes());
        let jobs = self.create_jobs(diagram.edges());
        Ok(FlowPlan::new(buckets, jobs))
    }

    /// Like [`parse`](Self::parse), but logs the failure and returns `None` instead.
    pub fn parse_and_create_jobs(&self, json: &str) -> Option<FlowPlan> {
        match self.parse(json) {
            Ok(plan) => Some(plan),
            Err(e) => {
                error!("Error parsing JSON: {}", e);
                None
            }
        }
    }

    /// Keeps the nodes that have both an id and a label, in their original order.
    pub fn extract_nodes<'a, I>(&self, nodes: I) -> Vec<BucketInfo>
    where
        I: IntoIterator<Item = &'a RawNode>,
    {
        let mut dropped = 0usize;
        let buckets: Vec<BucketInfo> = nodes
            .into_iter()
            .filter_map(|node| {
                let label = node.label();
                if node.id.is_empty() || label.is_empty() {
                    dropped += 1;
                    return None;
                }
                Some(BucketInfo {
                    id: node.id.clone(),
                    label: label.to_string(),
                })
            })
            .collect();

        if dropped > 0 {
            debug!("Dropped {} node(s) without an id or label", dropped);
        }
        buckets
    }

    /// Keeps the complete edges and orders them by source group.
    pub fn create_jobs<'a, I>(&self, edges: I) -> Vec<JobInfo>
    where
        I: IntoIterator<Item = &'a RawEdge>,
    {
        let mut dropped = 0usize;
        let groups: SourceGroups = edges
            .into_iter()
            .filter_map(|edge| {
                if edge.id.is_empty() || edge.source.is_empty() || edge.target.is_empty() {
                    dropped += 1;
                    return None;
                }
                Some(JobInfo {
                    id: edge.id.clone(),
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                })
            })
            .collect();

        if dropped > 0 {
            debug!("Dropped {} edge(s) without an id, source or target", dropped);
        }
        debug!(
            "Grouped {} job(s) under {} source bucket(s)",
            groups.job_count(),
            groups.len()
        );
        groups.into_jobs()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiagramParser>();
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind(&Value::Null), "null");
        assert_eq!(json_kind(&serde_json::json!([1])), "an array");
        assert_eq!(json_kind(&serde_json::json!("x")), "a string");
    }

    #[test]
    fn test_raw_records_are_filtered_directly() {
        let parser = DiagramParser::new();
        let edges = vec![
            RawEdge {
                id: "e1".to_string(),
                source: "A".to_string(),
                target: "B".to_string(),
            },
            RawEdge {
                id: "e2".to_string(),
                source: String::new(),
                target: "B".to_string(),
            },
        ];
        let jobs = parser.create_jobs(&edges);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "e1");
    }
}
