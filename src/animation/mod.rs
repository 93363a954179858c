pub mod ease;
pub mod lerp;
pub mod motion;
pub mod spline;
