/// Value every witness must reach
pub const TARGET: f64 = 24.0;

/// Largest absolute deviation from [`TARGET`] still counted as a match.
///
/// Changing this changes which puzzles are solvable: `8 / (1 / 3)` style
/// intermediates are not exact in floating point.
pub const EPSILON: f64 = 0.001;

/// Number of values a puzzle is made of
pub const INPUT_LEN: usize = 4;
