use serde::{Deserialize, Serialize};

/// A diagram node that survived filtering: a storage bucket with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketInfo {
    pub id: String,
    pub label: String,
}

/// A diagram edge reinterpreted as a transfer job from `source` to `target`.
///
/// `source` and `target` name bucket ids, but nothing checks that those buckets exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobInfo {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The result of a successful parse: buckets in diagram order, jobs in source-grouped order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPlan {
    pub buckets: Vec<BucketInfo>,
    pub jobs: Vec<JobInfo>,
}

impl FlowPlan {
    pub fn new(buckets: Vec<BucketInfo>, jobs: Vec<JobInfo>) -> Self {
        Self { buckets, jobs }
    }

    /// Splits the plan into its `(buckets, jobs)` pair.
    pub fn into_parts(self) -> (Vec<BucketInfo>, Vec<JobInfo>) {
        (self.buckets, self.jobs)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty() && self.jobs.is_empty()
    }
}
