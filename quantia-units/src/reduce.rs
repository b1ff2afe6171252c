//! Reduction to irreducible units
//!
//! Every reducible unit is replaced by its metric expansion and every prefix is
//! folded into the amount, pass after pass, until only irreducible unprefixed
//! units are left. Kilograms are restored at the end.

use tracing::trace;
use quantia_core::{QuantityError, Result};
use crate::base_unit::MetricEquivalent;
use crate::prefix;
use crate::quantity::Quantity;
use crate::registry::Registry;
use crate::unit::Unit;

/// Upper bound on rewrite passes; the built-in tables need at most four.
pub const MAX_REDUCTION_PASSES: usize = 64;

/// Symbol of the mass unit registered in place of the kilogram
const GRAM: &str = "g";

fn needs_reduction(unit: &Unit) -> bool {
    unit.base.is_reducible() || unit.prefix.is_some()
}

impl Registry {
    /// Rewrite a quantity using only irreducible units (SI base units, radian,
    /// currencies, ...), in tidy form.
    ///
    /// Offset scales (`°C`, `°F`) are converted exactly only when they are the
    /// sole unit, unprefixed and with exponent 1; anywhere else they scale like
    /// a temperature difference.
    pub fn reduce(&self, quantity: &Quantity) -> Result<Quantity> {
        let mut current = quantity.clone().tidied()?;
        let mut passes = 0;

        while current.units.iter().any(needs_reduction) {
            passes += 1;
            if passes > MAX_REDUCTION_PASSES {
                return Err(QuantityError::format(format!(
                    "Could not reduce the units of '{}' in {} passes.",
                    quantity, MAX_REDUCTION_PASSES
                )));
            }
            current = self.reduction_pass(&current)?;
            trace!(pass = passes, amount = current.amount, units = current.units.len(), "reduction pass");
        }

        if let Some(gram) = current
            .units
            .iter_mut()
            .find(|u| u.base.symbol == GRAM && !u.base.is_reducible())
        {
            current.amount /= 1000f64.powi(gram.exponent);
            gram.prefix = prefix::get("k");
        }
        Ok(current)
    }

    fn reduction_pass(&self, quantity: &Quantity) -> Result<Quantity> {
        let sole = quantity.units.len() == 1;
        let mut amount = quantity.amount;
        let mut units = Vec::with_capacity(quantity.units.len());

        for unit in &quantity.units {
            match &unit.base.metric {
                MetricEquivalent::Affine { symbol, to_metric, .. }
                    if sole && unit.prefix.is_none() && unit.exponent == 1 =>
                {
                    amount = to_metric(amount);
                    units.extend(self.parse_quantity(symbol)?.units);
                }
                MetricEquivalent::Irreducible => {
                    if let Some(p) = unit.prefix {
                        amount *= p.multiplier.powi(unit.exponent);
                    }
                    units.push(Unit::new(unit.base.clone(), None, unit.exponent));
                }
                metric => {
                    let symbol = metric.symbol().unwrap_or_default();
                    let mut expansion = self.parse_quantity(symbol)?;
                    expansion.amount *= unit.prefix_multiplier() * metric.linear_amount();
                    if unit.exponent != 1 {
                        expansion = expansion.pow(unit.exponent)?;
                    }
                    amount *= expansion.amount;
                    units.extend(expansion.units);
                }
            }
        }

        Quantity::from_units(amount, units).tidied()
    }
}
