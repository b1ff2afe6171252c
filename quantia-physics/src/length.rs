//! Astronomical lengths in metres

/// Astronomical unit (IAU 2012 definition).
pub const METRES_PER_AU: f64 = 1.495_978_707e11;

/// Julian light year, rounded.
pub const METRES_PER_LIGHT_YEAR: f64 = 9.4607e15;

/// Parsec, rounded.
pub const METRES_PER_PARSEC: f64 = 3.0857e16;
