//! Base units: the registered symbols a unit token can resolve to

use std::fmt;
use crate::prefix::UnitPrefix;

/// Symbols treated as currencies by the parser and the formatter.
pub const CURRENCY_SYMBOLS: &str = "$€£¥₹₩฿₽";

/// How a base unit relates to metric units
#[derive(Debug, Clone)]
pub enum MetricEquivalent {
    /// SI base units and units with no metric decomposition (radian, currencies).
    Irreducible,
    /// `1 unit = amount × symbol`, e.g. `1 mi = 1609.344 m`.
    Linear { amount: f64, symbol: String },
    /// Offset scales such as Celsius: `metric = to_metric(value)`.
    Affine {
        symbol: String,
        to_metric: fn(f64) -> f64,
        from_metric: fn(f64) -> f64,
    },
}

impl MetricEquivalent {
    /// Metric symbol this unit decomposes into, if any
    pub fn symbol(&self) -> Option<&str> {
        match self {
            MetricEquivalent::Irreducible => None,
            MetricEquivalent::Linear { symbol, .. } | MetricEquivalent::Affine { symbol, .. } => {
                Some(symbol)
            }
        }
    }

    /// Scale factor used when the unit is reduced multiplicatively.
    /// For affine units this is the slope of the conversion.
    pub fn linear_amount(&self) -> f64 {
        match self {
            MetricEquivalent::Irreducible => 1.0,
            MetricEquivalent::Linear { amount, .. } => *amount,
            MetricEquivalent::Affine { to_metric, .. } => to_metric(1.0) - to_metric(0.0),
        }
    }
}

/// A unit of measure known to the registry
#[derive(Debug, Clone)]
pub struct BaseUnit {
    pub symbol: String,
    pub name: String,
    /// Prefixes this unit accepts, in resolution priority order
    pub valid_prefixes: Option<Vec<&'static UnitPrefix>>,
    pub metric: MetricEquivalent,
    /// Registration sequence number, the canonical sort key. Assigned by the registry.
    pub order: u32,
}

impl BaseUnit {
    /// An irreducible unit with no prefixes.
    pub fn new(symbol: &str, name: &str) -> Self {
        BaseUnit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            valid_prefixes: None,
            metric: MetricEquivalent::Irreducible,
            order: 0,
        }
    }

    /// A unit defined as a multiple of a metric unit expression.
    pub fn linear(symbol: &str, name: &str, amount: f64, metric_symbol: &str) -> Self {
        BaseUnit {
            metric: MetricEquivalent::Linear {
                amount,
                symbol: metric_symbol.to_string(),
            },
            ..BaseUnit::new(symbol, name)
        }
    }

    /// A unit on an offset scale, converted by functions rather than a factor.
    pub fn affine(
        symbol: &str,
        name: &str,
        metric_symbol: &str,
        to_metric: fn(f64) -> f64,
        from_metric: fn(f64) -> f64,
    ) -> Self {
        BaseUnit {
            metric: MetricEquivalent::Affine {
                symbol: metric_symbol.to_string(),
                to_metric,
                from_metric,
            },
            ..BaseUnit::new(symbol, name)
        }
    }

    pub fn with_prefixes(mut self, prefixes: Vec<&'static UnitPrefix>) -> Self {
        self.valid_prefixes = Some(prefixes);
        self
    }

    /// Prefixes accepted by this unit (empty when none)
    pub fn prefixes(&self) -> &[&'static UnitPrefix] {
        self.valid_prefixes.as_deref().unwrap_or(&[])
    }

    /// Find an accepted prefix by its symbol
    pub fn find_prefix(&self, symbol: &str) -> Option<&'static UnitPrefix> {
        self.prefixes().iter().copied().find(|p| p.symbol == symbol)
    }

    pub fn is_reducible(&self) -> bool {
        !matches!(self.metric, MetricEquivalent::Irreducible)
    }

    pub fn is_currency(&self) -> bool {
        let mut chars = self.symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => CURRENCY_SYMBOLS.contains(c),
            _ => false,
        }
    }

    /// Degree, arcminute and arcsecond marks attach directly to a numeral.
    pub fn attaches_to_numeral(&self) -> bool {
        matches!(self.symbol.as_str(), "°" | "′" | "″")
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
