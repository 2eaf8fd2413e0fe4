//! Literal angle formatting for bound gate parameters.

use std::f64::consts::PI;

/// Render an angle, preferring exact pi fractions over decimals.
pub fn format_angle(value: f64) -> String {
    if (value - PI).abs() < 1e-10 {
        "pi".into()
    } else if (value - PI / 2.0).abs() < 1e-10 {
        "pi/2".into()
    } else if (value - PI / 4.0).abs() < 1e-10 {
        "pi/4".into()
    } else if (value + PI / 2.0).abs() < 1e-10 {
        "-pi/2".into()
    } else if (value + PI / 4.0).abs() < 1e-10 {
        "-pi/4".into()
    } else {
        format!("{value:.6}")
    }
}
