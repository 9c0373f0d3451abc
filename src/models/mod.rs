pub mod clinic;
pub mod filters;

pub use clinic::*;
pub use filters::*;
