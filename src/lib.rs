//! # flowjobs - Flow Diagram to Transfer Jobs
//!
//! **flowjobs** reads a flow diagram (the `nodes` / `edges` JSON that node editors such as
//! React Flow export) and turns it into a plan of transfer jobs. Every node becomes a
//! bucket, every edge becomes a job moving data from its source bucket to its target.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Diagram**: Read the JSON text from wherever it lives.
//! 2.  **Parse**: `DiagramParser::parse` decodes the document leniently. Ids may be numbers,
//!     fields may be missing or `null`, unknown editor fields are ignored. Nodes without an
//!     id or label and edges without an id, source or target are dropped.
//! 3.  **Use the Plan**: The resulting `FlowPlan` lists buckets in diagram order and jobs
//!     grouped by source bucket. Groups appear in the order their source was first seen,
//!     and jobs inside a group keep their diagram order.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowjobs::prelude::*;
//!
//! let json = r#"{
//!     "nodes": [
//!         {"id": "A", "data": {"label": "raw-bucket"}},
//!         {"id": "B", "data": {"label": "staging-bucket"}},
//!         {"id": "C", "data": {"label": "archive-bucket"}}
//!     ],
//!     "edges": [
//!         {"id": "e1", "source": "A", "target": "B"},
//!         {"id": "e2", "source": "B", "target": "C"},
//!         {"id": "e3", "source": "A", "target": "C"}
//!     ]
//! }"#;
//!
//! let plan = DiagramParser::new().parse(json)?;
//! let order: Vec<_> = plan.jobs.iter().map(|job| job.id.as_str()).collect();
//! assert_eq!(order, ["e1", "e3", "e2"]);
//!
//! println!("{}", JobReport::format_jobs(&plan.jobs));
//! # Ok::<(), ParseError>(())
//! ```

pub mod diagram;
pub mod error;
pub mod parser;
pub mod plan;
pub mod prelude;
pub mod report;

pub use error::ParseError;
pub use parser::DiagramParser;
pub use plan::{BucketInfo, FlowPlan, JobInfo};
