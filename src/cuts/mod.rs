pub mod auto;
pub mod preset;
pub mod scheduler;
