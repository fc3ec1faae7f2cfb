//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need: the parser, the plan records, the report
//! formatter and the error type.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowjobs::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/diagram.json")?;
//! let plan = DiagramParser::new().parse(&json)?;
//! println!("{}", JobReport::format_jobs(&plan.jobs));
//! # Ok(())
//! # }
//! ```

// Parsing
pub use crate::parser::DiagramParser;

// Output records
pub use crate::plan::{BucketInfo, FlowPlan, JobInfo, SourceGroups};

// Report formatting
pub use crate::report::JobReport;

// Error types
pub use crate::error::ParseError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
