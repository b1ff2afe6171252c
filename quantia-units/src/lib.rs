//! Quantia Units - Physical and Monetary Quantities
//!
//! Unit-aware quantities with dimensionally checked arithmetic.
//!
//! Text goes through one of two grammars (money such as `-$3.5M`, physical such
//! as `100km/h` or `kg*m/s2`), every unit token resolves against the
//! [`Registry`], and [`Registry::reduce`] rewrites a quantity into irreducible
//! units before it is combined with another.
//!
//! Unit groups:
//! - SI base (m, g, s, A, K, mol, cd) with all metric prefixes
//! - SI derived (Hz, N, Pa, J, W, C, V, F, Ω, S, Wb, T, H, °C, lm, lx, Bq, Gy, Sv, kat)
//! - Accepted for use with SI (min, h, d, AU, °, ′, ″, ha, L, t, Da, eV)
//! - Common (w, mon, a, ly, pc, cal, bar, atm)
//! - Imperial and US customary (in, ft, mi, lb, gal, USgal, °F, ...)
//! - Data (b, B) with binary and large metric prefixes
//! - Currencies ($, €, £, ¥, ₹, ₩, ฿, ₽)
//!
//! ```
//! use quantia_units::Quantity;
//!
//! let speed = Quantity::parse("100km/h").unwrap().reduce().unwrap();
//! assert_eq!(speed.units_string().unwrap(), "m/s");
//!
//! let mass = Quantity::parse("1 kg").unwrap().add(&Quantity::parse("500 g").unwrap()).unwrap();
//! assert_eq!(mass.to_string(), "1.5 kg");
//! ```

pub mod prefix;
pub mod temperature;
mod base_unit;
mod registry;
mod units;
mod unit;
mod quantity;
mod parse;
mod reduce;
mod arithmetic;
mod convert;
mod format;

pub use base_unit::{BaseUnit, MetricEquivalent, CURRENCY_SYMBOLS};
pub use format::FormatStyle;
pub use prefix::UnitPrefix;
pub use quantity::Quantity;
pub use reduce::MAX_REDUCTION_PASSES;
pub use registry::Registry;
pub use unit::Unit;

pub use quantia_core::{QuantityError, Result};
