pub mod core;
pub mod diagnostic;
pub mod error;
pub mod math;
