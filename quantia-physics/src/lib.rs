//! Quantia Physics - Constants and Helpers
//!
//! Convenience layer over quantia-units:
//! - Temperature scale conversions (K, °C, °F)
//! - Astronomical lengths, speed and density conversions
//! - CODATA physical constants as ready-made quantities
//! - Classification of a quantity into a physical kind (length, energy, money, ...)
//!
//! For general conversions between unit expressions, use `Quantity::convert`.

pub mod constants;
pub mod density;
pub mod kind;
pub mod length;
pub mod speed;

/// Temperature scale conversions, shared with the `°C` and `°F` units
pub mod temperature {
    pub use quantia_units::temperature::*;
}

pub use kind::UnitKind;
