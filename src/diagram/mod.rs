pub mod lenient;
pub mod raw;

pub use lenient::*;
pub use raw::*;
