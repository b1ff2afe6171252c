//! Conversion into a requested unit expression

use tracing::debug;
use quantia_core::{fuzzy_eq, QuantityError, Result};
use crate::base_unit::MetricEquivalent;
use crate::quantity::Quantity;
use crate::registry::Registry;

impl Registry {
    /// Express `quantity` in the units of `target`, e.g. `"km/h"` or `"°F"`.
    ///
    /// Both sides are reduced; their canonical units must match. The target must
    /// be a unit expression without an amount (or with amount 1). A lone offset
    /// scale such as `°C` is converted with its inverse scale function.
    pub fn convert(&self, quantity: &Quantity, target: &str) -> Result<Quantity> {
        let parsed = self.parse_quantity(target)?;
        if !fuzzy_eq(parsed.amount, 1.0) {
            return Err(QuantityError::format(format!(
                "The conversion target '{}' must be a unit expression without an amount.",
                target.trim()
            )));
        }

        let mut target_units = parsed.tidied()?;
        target_units.amount = 1.0;

        let source = self.reduce(quantity)?;
        let canonical = self.reduce(&target_units)?;
        if !source.has_same_units(&canonical) {
            let (left, right) = (source.unit_label(), canonical.unit_label());
            debug!(%left, %right, to = target, "rejected conversion between incompatible units");
            return Err(QuantityError::incompatible(left, right));
        }

        let amount = match target_units.units.as_slice() {
            [unit] if unit.prefix.is_none() && unit.exponent == 1 => match &unit.base.metric {
                MetricEquivalent::Affine { from_metric, .. } => from_metric(source.amount),
                _ => source.amount / canonical.amount,
            },
            _ => source.amount / canonical.amount,
        };
        Ok(Quantity { amount, ..target_units })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Quantity {
        Quantity::parse(text).unwrap()
    }

    #[test]
    fn test_speed() {
        let speed = q("27.7777777778 m/s").convert("km/h").unwrap();
        assert!(fuzzy_eq(speed.amount, 100.0));
        assert_eq!(speed.units_string().unwrap(), "km/h");
    }

    #[test]
    fn test_to_larger_unit() {
        let distance = q("5280 ft").convert("mi").unwrap();
        assert!(fuzzy_eq(distance.amount, 1.0));
    }

    #[test]
    fn test_data() {
        let size = q("8 Kib").convert("B").unwrap();
        assert!(fuzzy_eq(size.amount, 1_024.0));
    }

    #[test]
    fn test_temperature_scales() {
        let boiling = q("100 °C").convert("°F").unwrap();
        assert!(fuzzy_eq(boiling.amount, 212.0));

        let absolute = q("-40 °F").convert("°C").unwrap();
        assert!(fuzzy_eq(absolute.amount, -40.0));

        let kelvin = q("25 °C").convert("K").unwrap();
        assert!(fuzzy_eq(kelvin.amount, 298.15));
    }

    #[test]
    fn test_energy() {
        let kwh = q("3.6 MJ").convert("kW*h").unwrap();
        assert!(fuzzy_eq(kwh.amount, 1.0));
        assert_eq!(kwh.units.len(), 2);
    }

    #[test]
    fn test_incompatible() {
        let err = q("1 m").convert("s").unwrap_err();
        assert!(matches!(err, QuantityError::IncompatibleUnits { .. }));
    }

    #[test]
    fn test_target_with_amount() {
        assert!(matches!(q("1 m").convert("2 m"), Err(QuantityError::Format(_))));
        assert!(q("1 m").convert("1 cm").is_ok());
    }

    #[test]
    fn test_convert_amount() {
        let litres = Quantity::convert_amount(1.0, "gal", "L").unwrap();
        assert!(fuzzy_eq(litres, 4.54609));
        assert!(Quantity::convert_amount(1.0, "gal", "kg").is_err());
    }
}
