//! Common test utilities for building diagram documents and expected records.
use flowjobs::prelude::*;

/// The three-node example diagram used throughout the docs.
///
/// Edges: `e1: A -> B`, `e2: B -> C`, `e3: A -> C`.
#[allow(dead_code)]
pub const SIMPLE_DIAGRAM_JSON: &str = r#"{
    "nodes": [
        {"id": "A", "data": {"label": "Bucket A"}},
        {"id": "B", "data": {"label": "Bucket B"}},
        {"id": "C", "data": {"label": "Bucket C"}}
    ],
    "edges": [
        {"id": "e1", "source": "A", "target": "B"},
        {"id": "e2", "source": "B", "target": "C"},
        {"id": "e3", "source": "A", "target": "C"}
    ]
}"#;

/// The sample diagram shipped in `data/`, as exported by a React Flow editor.
#[allow(dead_code)]
pub const REACT_FLOW_JSON: &str = include_str!("../data/ReactFlowObject.json");

/// Builds a diagram document from `(id, label)` nodes and `(id, source, target)` edges.
#[allow(dead_code)]
pub fn diagram_json(nodes: &[(&str, &str)], edges: &[(&str, &str, &str)]) -> String {
    let nodes: Vec<_> = nodes
        .iter()
        .map(|(id, label)| serde_json::json!({ "id": id, "data": { "label": label } }))
        .collect();
    let edges: Vec<_> = edges
        .iter()
        .map(|(id, source, target)| {
            serde_json::json!({ "id": id, "source": source, "target": target })
        })
        .collect();
    serde_json::json!({ "nodes": nodes, "edges": edges }).to_string()
}

#[allow(dead_code)]
pub fn bucket(id: &str, label: &str) -> BucketInfo {
    BucketInfo {
        id: id.to_string(),
        label: label.to_string(),
    }
}

#[allow(dead_code)]
pub fn job(id: &str, source: &str, target: &str) -> JobInfo {
    JobInfo {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Job ids in output order.
#[allow(dead_code)]
pub fn job_ids(plan: &FlowPlan) -> Vec<&str> {
    plan.jobs.iter().map(|j| j.id.as_str()).collect()
}
