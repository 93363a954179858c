pub mod director;
pub mod style;
