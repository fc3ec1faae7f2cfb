pub mod definition;
pub mod grouping;

pub use definition::*;
pub use grouping::*;
