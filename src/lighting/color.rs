/// Linear RGB triple.
pub type Rgb = [f64; 3];

/// Accepted color temperature range in Kelvin.
pub const KELVIN_RANGE: (f64, f64) = (2700.0, 9000.0);

/// Reference white points, sorted by temperature.
pub const KELVIN_TABLE: [(f64, Rgb); 8] = [
    (2700.0, [1.0, 0.76, 0.54]),
    (3200.0, [1.0, 0.82, 0.65]),
    (4000.0, [1.0, 0.88, 0.78]),
    (5000.0, [1.0, 0.95, 0.90]),
    (5500.0, [1.0, 0.98, 0.95]),
    (6500.0, [0.95, 0.98, 1.0]),
    (7500.0, [0.88, 0.94, 1.0]),
    (9000.0, [0.80, 0.90, 1.0]),
];

/// Color of the nearest reference temperature. Ties resolve to the warmer entry.
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    let mut best = KELVIN_TABLE[0];
    for entry in KELVIN_TABLE {
        if (entry.0 - kelvin).abs() < (best.0 - kelvin).abs() {
            best = entry;
        }
    }
    best.1
}

/// Slightly cooler variant used for fill lights.
pub(crate) fn fill_tint(rgb: Rgb) -> Rgb {
    [rgb[0] * 0.9, rgb[1] * 0.95, (rgb[2] * 1.1).min(1.0)]
}

/// Colored gels used by the neon rig.
pub mod gel {
    use super::Rgb;

    /// Cyan tube.
    pub const CYAN: Rgb = [0.0, 1.0, 1.0];
    /// Magenta tube.
    pub const MAGENTA: Rgb = [1.0, 0.0, 1.0];
    /// Purple tube.
    pub const PURPLE: Rgb = [0.6, 0.2, 1.0];
    /// Pink tube.
    pub const PINK: Rgb = [1.0, 0.4, 0.7];
    /// Dim blue-grey fill under neon.
    pub const NEON_AMBIENT: Rgb = [0.1, 0.1, 0.15];
}

#[cfg(test)]
#[path = "../../tests/unit/lighting/color.rs"]
mod tests;
