//! Multiplicative unit prefixes (kilo, mebi, ...) and lookup helpers
//!
//! The tables are `'static`: prefixes are created once, never mutated and
//! shared by reference between every unit that accepts them.

use std::fmt;
use serde::Serialize;
use quantia_core::{QuantityError, Result};

/// Letters that may follow a monetary amount as a scale prefix, e.g. `$3M`.
pub const CURRENCY_PREFIXES: &str = "kKMBT";

/// A named scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitPrefix {
    pub symbol: &'static str,
    pub multiplier: f64,
}

impl UnitPrefix {
    pub const fn new(symbol: &'static str, multiplier: f64) -> Self {
        UnitPrefix { symbol, multiplier }
    }
}

impl fmt::Display for UnitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Metric prefixes, largest first.
/// <https://en.wikipedia.org/wiki/Metric_prefix>
pub static METRIC: [UnitPrefix; 24] = [
    UnitPrefix::new("Q", 1e30),
    UnitPrefix::new("R", 1e27),
    UnitPrefix::new("Y", 1e24),
    UnitPrefix::new("Z", 1e21),
    UnitPrefix::new("E", 1e18),
    UnitPrefix::new("P", 1e15),
    UnitPrefix::new("T", 1e12),
    UnitPrefix::new("G", 1e9),
    UnitPrefix::new("M", 1e6),
    UnitPrefix::new("k", 1e3),
    UnitPrefix::new("h", 1e2),
    UnitPrefix::new("da", 1e1),
    UnitPrefix::new("d", 1e-1),
    UnitPrefix::new("c", 1e-2),
    UnitPrefix::new("m", 1e-3),
    UnitPrefix::new("µ", 1e-6),
    UnitPrefix::new("n", 1e-9),
    UnitPrefix::new("p", 1e-12),
    UnitPrefix::new("f", 1e-15),
    UnitPrefix::new("a", 1e-18),
    UnitPrefix::new("z", 1e-21),
    UnitPrefix::new("y", 1e-24),
    UnitPrefix::new("r", 1e-27),
    UnitPrefix::new("q", 1e-30),
];

/// Binary prefixes, powers of 2^10.
/// <https://en.wikipedia.org/wiki/Binary_prefix>
pub static BINARY: [UnitPrefix; 8] = [
    UnitPrefix::new("Ki", 1_024.0),
    UnitPrefix::new("Mi", 1_048_576.0),
    UnitPrefix::new("Gi", 1_073_741_824.0),
    UnitPrefix::new("Ti", 1_099_511_627_776.0),
    UnitPrefix::new("Pi", 1_125_899_906_842_624.0),
    UnitPrefix::new("Ei", 1_152_921_504_606_846_976.0),
    UnitPrefix::new("Zi", 1_180_591_620_717_411_303_424.0),
    UnitPrefix::new("Yi", 1_208_925_819_614_629_174_706_176.0),
];

/// Extra prefixes used with money: both `k` and `K` mean thousand, `B` is billion.
/// `M` and `T` come from the metric table.
pub static CURRENCY: [UnitPrefix; 2] = [
    UnitPrefix::new("K", 1e3),
    UnitPrefix::new("B", 1e9),
];

/// Every metric prefix as a list of references.
pub fn metric() -> Vec<&'static UnitPrefix> {
    METRIC.iter().collect()
}

/// Every binary prefix as a list of references.
pub fn binary() -> Vec<&'static UnitPrefix> {
    BINARY.iter().collect()
}

/// Metric prefixes from kilo upwards (tonne, byte, ...).
pub fn large_metric() -> Vec<&'static UnitPrefix> {
    METRIC.iter().filter(|p| p.multiplier >= 1000.0).collect()
}

/// Metric prefixes from milli downwards.
pub fn small_metric() -> Vec<&'static UnitPrefix> {
    METRIC.iter().filter(|p| p.multiplier <= 0.001).collect()
}

/// Look up a prefix by symbol. Metric wins over binary, binary over currency.
pub fn get(symbol: &str) -> Option<&'static UnitPrefix> {
    METRIC
        .iter()
        .chain(BINARY.iter())
        .chain(CURRENCY.iter())
        .find(|p| p.symbol == symbol)
}

/// Multiplier of the prefix with the given symbol.
pub fn get_multiplier(symbol: &str) -> Result<f64> {
    get(symbol)
        .map(|p| p.multiplier)
        .ok_or_else(|| QuantityError::UnknownPrefix(symbol.to_string()))
}

/// Resolve a comma-separated list such as `"k,M,G"`. Fails as a whole if any
/// symbol is unknown.
pub fn get_multiple(csv: &str) -> Result<Vec<&'static UnitPrefix>> {
    csv.split(',')
        .map(|symbol| {
            get(symbol).ok_or_else(|| {
                QuantityError::format(format!(
                    "Invalid format '{}'. It should be a comma-separated string of valid prefixes, without spaces, e.g. \"k,M,G\"",
                    csv
                ))
            })
        })
        .collect()
}

/// Concatenate prefix groups. Duplicates are kept; order decides resolution priority.
pub fn combine(groups: &[Vec<&'static UnitPrefix>]) -> Vec<&'static UnitPrefix> {
    groups.iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(METRIC.len(), 24);
        assert_eq!(BINARY.len(), 8);
        assert_eq!(large_metric().len(), 10);
        assert_eq!(small_metric().len(), 10);
    }

    #[test]
    fn test_binary_multipliers() {
        for (i, p) in BINARY.iter().enumerate() {
            assert_eq!(p.multiplier, 2f64.powi(10 * (i as i32 + 1)), "{}", p.symbol);
        }
    }

    #[test]
    fn test_get() {
        assert_eq!(get("k").map(|p| p.multiplier), Some(1e3));
        assert_eq!(get("Ki").map(|p| p.multiplier), Some(1024.0));
        assert_eq!(get("B").map(|p| p.multiplier), Some(1e9));
        assert!(get("x").is_none());
        // "M" and "T" resolve to the metric entries
        assert!(std::ptr::eq(get("M").unwrap(), &METRIC[8]));
    }

    #[test]
    fn test_get_multiplier() {
        assert_eq!(get_multiplier("µ").unwrap(), 1e-6);
        assert_eq!(
            get_multiplier("xx"),
            Err(QuantityError::UnknownPrefix("xx".to_string()))
        );
    }

    #[test]
    fn test_get_multiple() {
        let prefixes = get_multiple("k,K,M,B,T").unwrap();
        let symbols: Vec<_> = prefixes.iter().map(|p| p.symbol).collect();
        assert_eq!(symbols, vec!["k", "K", "M", "B", "T"]);
    }

    #[test]
    fn test_get_multiple_is_atomic() {
        let err = get_multiple("k,zz,M").unwrap_err();
        assert!(matches!(err, QuantityError::Format(_)));
        assert!(get_multiple("k, M").is_err());
    }

    #[test]
    fn test_combine_keeps_order_and_duplicates() {
        let combined = combine(&[binary(), large_metric(), get_multiple("k").unwrap()]);
        assert_eq!(combined.len(), 8 + 10 + 1);
        assert_eq!(combined[0].symbol, "Ki");
        assert_eq!(combined[8].symbol, "Q");
        assert_eq!(combined[18].symbol, "k");
    }
}
