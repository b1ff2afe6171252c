//! Dimensionally checked arithmetic
//!
//! Operands are reduced before they are combined, so `1 kg + 500 g` is fine
//! and `1 m + 1 s` is an error. Inputs are never modified.

use tracing::debug;
use quantia_core::{QuantityError, Result};
use crate::quantity::Quantity;
use crate::registry::Registry;

impl Registry {
    pub fn multiply(&self, a: &Quantity, b: &Quantity) -> Result<Quantity> {
        let mut product = self.reduce(a)?;
        let other = self.reduce(b)?;
        product.amount *= other.amount;
        product.units.extend(other.units);
        product.tidied()
    }

    pub fn divide(&self, a: &Quantity, b: &Quantity) -> Result<Quantity> {
        self.multiply(a, &b.inverse()?)
    }

    /// Sum of two quantities with identical reduced units
    pub fn add(&self, a: &Quantity, b: &Quantity) -> Result<Quantity> {
        let mut sum = self.reduce(a)?;
        let other = self.reduce(b)?;
        if !sum.has_same_units(&other) {
            let (left, right) = (sum.unit_label(), other.unit_label());
            debug!(%left, %right, "rejected addition of incompatible quantities");
            return Err(QuantityError::incompatible(left, right));
        }
        sum.amount += other.amount;
        Ok(sum)
    }

    pub fn subtract(&self, a: &Quantity, b: &Quantity) -> Result<Quantity> {
        self.add(a, &b.negate())
    }

    /// Whether both quantities reduce to the same units
    pub fn has_compatible_units(&self, a: &Quantity, b: &Quantity) -> Result<bool> {
        Ok(self.reduce(a)?.has_same_units(&self.reduce(b)?))
    }
}
