//! Density conversions

/// g/cm³ to kg/m³: a factor of 1000.
pub fn grams_per_cm3_to_kg_per_m3(grams_per_cm3: f64) -> f64 {
    grams_per_cm3 * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantia_core::fuzzy_eq;
    use quantia_units::Quantity;

    #[test]
    fn test_water() {
        assert_eq!(grams_per_cm3_to_kg_per_m3(1.0), 1_000.0);
    }

    #[test]
    fn test_matches_engine() {
        // Iron
        let engine = Quantity::convert_amount(7.874, "g/cm3", "kg/m3").unwrap();
        assert!(fuzzy_eq(grams_per_cm3_to_kg_per_m3(7.874), engine));
    }
}
