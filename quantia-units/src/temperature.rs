//! Temperature scale conversions
//!
//! These are the affine hooks of the `°C` and `°F` units; the physics crate
//! re-exports them for direct use.

/// Degrees between 0 K and 0 °C.
pub const CELSIUS_KELVIN_DIFF: f64 = 273.15;

/// Degrees Fahrenheit between 0 °F and 0 °C.
pub const CELSIUS_FAHRENHEIT_DIFF: f64 = 32.0;

/// Degrees Celsius (or kelvins) per degree Fahrenheit.
pub const CELSIUS_PER_FAHRENHEIT: f64 = 5.0 / 9.0;

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + CELSIUS_KELVIN_DIFF
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - CELSIUS_KELVIN_DIFF
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c / CELSIUS_PER_FAHRENHEIT + CELSIUS_FAHRENHEIT_DIFF
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - CELSIUS_FAHRENHEIT_DIFF) * CELSIUS_PER_FAHRENHEIT
}

pub fn fahrenheit_to_kelvin(f: f64) -> f64 {
    celsius_to_kelvin(fahrenheit_to_celsius(f))
}

pub fn kelvin_to_fahrenheit(k: f64) -> f64 {
    celsius_to_fahrenheit(kelvin_to_celsius(k))
}
