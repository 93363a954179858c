pub mod artifact;
pub mod batch;
pub mod compiler;
pub mod fingerprint;
pub mod summary;
