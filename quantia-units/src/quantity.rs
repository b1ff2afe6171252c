//! Quantity type - an amount with a composite unit expression

use std::ops::Neg;
use quantia_core::{fuzzy_eq, Result};
use crate::registry::Registry;
use crate::unit::{exponent_overflow, Unit};

/// A physical or monetary quantity, e.g. `100 km/h` or `$3M`
///
/// Units are kept in tidy form by every operation that produces a canonical
/// result: one entry per base unit, no zero exponents, positive exponents
/// first and then registration order. Parsing keeps units as written.
#[derive(Debug, Clone)]
pub struct Quantity {
    pub amount: f64,
    pub units: Vec<Unit>,
}

impl Quantity {
    /// A dimensionless quantity (pure number)
    pub fn new(amount: f64) -> Self {
        Quantity { amount, units: Vec::new() }
    }

    /// A quantity from an amount and already-resolved units
    pub fn from_units(amount: f64, units: Vec<Unit>) -> Self {
        Quantity { amount, units }
    }

    /// An amount of a single unit
    pub fn from_unit(amount: f64, unit: Unit) -> Self {
        Quantity { amount, units: vec![unit] }
    }

    /// Parse `units` (e.g. `"kg*m/s2"`) and scale the result by `amount`.
    pub fn with_units(amount: f64, units: &str) -> Result<Self> {
        let mut quantity = Quantity::parse(units)?;
        quantity.amount *= amount;
        Ok(quantity)
    }

    /// Parse a quantity such as `"100km/h"` or `"-$3M"` against the global registry.
    pub fn parse(text: &str) -> Result<Self> {
        Registry::global().parse_quantity(text)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.units.is_empty()
    }

    /// Merge units sharing a base unit, drop zero exponents and sort.
    ///
    /// Merged units with different prefixes lose their prefix; its scale moves
    /// into the amount. Fails without touching `self` when a merged exponent
    /// leaves the `i32` range.
    pub fn tidy(&mut self) -> Result<()> {
        let mut merged: Vec<Unit> = Vec::with_capacity(self.units.len());
        let mut scale = 1.0;
        for unit in &self.units {
            match merged.iter_mut().find(|u| u.same_base(unit)) {
                Some(existing) => {
                    let exponent = existing
                        .exponent
                        .checked_add(unit.exponent)
                        .ok_or_else(|| exponent_overflow(unit))?;
                    let same_prefix =
                        existing.prefix.map(|p| p.symbol) == unit.prefix.map(|p| p.symbol);
                    if !same_prefix {
                        scale *= existing.prefix_multiplier().powi(existing.exponent)
                            * unit.prefix_multiplier().powi(unit.exponent);
                        existing.prefix = None;
                    }
                    existing.exponent = exponent;
                }
                None => merged.push(unit.clone()),
            }
        }
        merged.retain(|u| u.exponent != 0);
        merged.sort_by_key(|u| (u.exponent < 0, u.base.order));
        self.amount *= scale;
        self.units = merged;
        Ok(())
    }

    /// Consuming form of [`Quantity::tidy`]
    pub fn tidied(mut self) -> Result<Self> {
        self.tidy()?;
        Ok(self)
    }

    /// Whether both unit lists are identical, entry by entry
    pub fn has_same_units(&self, other: &Quantity) -> bool {
        self.units == other.units
    }

    /// Reciprocal: `1/amount`, every exponent negated. Does not reduce.
    pub fn inverse(&self) -> Result<Quantity> {
        let units = self.units.iter().map(Unit::inverted).collect::<Result<Vec<_>>>()?;
        Quantity::from_units(1.0 / self.amount, units).tidied()
    }

    /// Same units, opposite amount
    pub fn negate(&self) -> Quantity {
        Quantity { amount: -self.amount, units: self.units.clone() }
    }

    /// Raise to an integer power. Does not reduce.
    pub fn pow(&self, exponent: i32) -> Result<Quantity> {
        match exponent {
            0 => Ok(Quantity::new(1.0)),
            1 => Ok(self.clone()),
            n => {
                let units = self.units.iter().map(|u| u.raised(n)).collect::<Result<Vec<_>>>()?;
                Quantity::from_units(self.amount.powi(n), units).tidied()
            }
        }
    }

    /// Canonical form in irreducible units, see [`Registry::reduce`]
    pub fn reduce(&self) -> Result<Quantity> {
        Registry::global().reduce(self)
    }

    pub fn multiply(&self, other: &Quantity) -> Result<Quantity> {
        Registry::global().multiply(self, other)
    }

    pub fn divide(&self, other: &Quantity) -> Result<Quantity> {
        Registry::global().divide(self, other)
    }

    pub fn add(&self, other: &Quantity) -> Result<Quantity> {
        Registry::global().add(self, other)
    }

    pub fn subtract(&self, other: &Quantity) -> Result<Quantity> {
        Registry::global().subtract(self, other)
    }

    /// Whether both quantities reduce to the same units
    pub fn has_compatible_units(&self, other: &Quantity) -> Result<bool> {
        Registry::global().has_compatible_units(self, other)
    }

    /// Express this quantity in the units of `target`, e.g. `"km/h"`
    pub fn convert(&self, target: &str) -> Result<Quantity> {
        Registry::global().convert(self, target)
    }

    /// Convert a bare amount between two unit expressions.
    ///
    /// ```
    /// use quantia_units::Quantity;
    /// let feet = Quantity::convert_amount(1.0, "mi", "ft").unwrap();
    /// assert!((feet - 5280.0).abs() < 1e-6);
    /// ```
    pub fn convert_amount(amount: f64, from: &str, to: &str) -> Result<f64> {
        Ok(Quantity::with_units(amount, from)?.convert(to)?.amount)
    }
}

/// Fuzzy amounts, identical unit lists. No reduction: `1000 g != 1 kg`.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        fuzzy_eq(self.amount, other.amount) && self.has_same_units(other)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity { amount: -self.amount, ..self }
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.negate()
    }
}

impl From<f64> for Quantity {
    fn from(amount: f64) -> Self {
        Quantity::new(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Quantity {
        Quantity::parse(text).unwrap()
    }

    fn symbols(quantity: &Quantity) -> Vec<(String, i32)> {
        quantity
            .units
            .iter()
            .map(|u| (u.prefixed_symbol(), u.exponent))
            .collect()
    }

    #[test]
    fn test_tidy_merges_and_sorts() {
        let tidy = q("s*m/s*m").tidied().unwrap();
        assert_eq!(symbols(&tidy), vec![("m".to_string(), 2)]);

        let tidy = q("s-1*kg*m").tidied().unwrap();
        assert_eq!(
            symbols(&tidy),
            vec![("m".to_string(), 1), ("kg".to_string(), 1), ("s".to_string(), -1)]
        );
    }

    #[test]
    fn test_tidy_folds_mixed_prefixes() {
        let tidy = q("3 km*m").tidied().unwrap();
        assert!(fuzzy_eq(tidy.amount, 3000.0));
        assert_eq!(symbols(&tidy), vec![("m".to_string(), 2)]);
    }

    #[test]
    fn test_tidy_keeps_shared_prefix() {
        let tidy = q("km2/km").tidied().unwrap();
        assert_eq!(symbols(&tidy), vec![("km".to_string(), 1)]);
        assert_eq!(tidy.amount, 1.0);
    }

    #[test]
    fn test_inverse() {
        let inv = q("4 m/s").inverse().unwrap();
        assert_eq!(inv.amount, 0.25);
        assert_eq!(symbols(&inv), vec![("s".to_string(), 1), ("m".to_string(), -1)]);
    }

    #[test]
    fn test_exponent_out_of_range() {
        let err = q("2 m2").pow(2_000_000_000).unwrap_err();
        assert_eq!(err.code(), "FORMAT_ERROR");
        assert!(q("m-2147483648").inverse().is_err());

        let mut crowded = q("3 m2147483647*m");
        assert!(crowded.tidy().is_err());
        assert_eq!(crowded.amount, 3.0);
        assert_eq!(crowded.units.len(), 2);

        let cancelled = q("m2147483647/m").tidied().unwrap();
        assert_eq!(symbols(&cancelled), vec![("m".to_string(), 2_147_483_646)]);
    }

    #[test]
    fn test_negate_does_not_touch_input() {
        let speed = q("5 m/s");
        let neg = -&speed;
        assert_eq!(neg.amount, -5.0);
        assert_eq!(speed.amount, 5.0);
        assert_eq!((-speed).amount, -5.0);
    }

    #[test]
    fn test_pow() {
        let cube = q("2 m").pow(3).unwrap();
        assert_eq!(cube.amount, 8.0);
        assert_eq!(symbols(&cube), vec![("m".to_string(), 3)]);

        assert_eq!(q("7 kg").pow(0).unwrap(), Quantity::new(1.0));
        assert_eq!(q("7 kg").pow(1).unwrap(), q("7 kg"));

        let inv_sq = q("2 s").pow(-2).unwrap();
        assert_eq!(inv_sq.amount, 0.25);
        assert_eq!(symbols(&inv_sq), vec![("s".to_string(), -2)]);
    }

    #[test]
    fn test_equality_without_reduction() {
        assert_eq!(q("1 kg"), q("1.0000000001 kg"));
        assert_ne!(q("1000 g"), q("1 kg"));
        assert_ne!(q("1 m/s"), q("1 s-1*m"));
        assert_eq!(q("1000 g").reduce().unwrap(), q("1 kg").reduce().unwrap());
    }

    #[test]
    fn test_with_units() {
        let force = Quantity::with_units(3.0, "kg*m/s2").unwrap();
        assert_eq!(force.amount, 3.0);
        assert_eq!(force.units.len(), 3);
        assert!(Quantity::with_units(1.0, "furlong").is_err());
    }

    #[test]
    fn test_dimensionless() {
        assert!(Quantity::new(2.5).is_dimensionless());
        assert!(Quantity::from(1.0).is_dimensionless());
        assert!(!q("1 m").is_dimensionless());
    }
}
