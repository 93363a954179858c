pub mod color;
pub mod rig;
pub mod style;
