//! Built-in unit tables
//!
//! Registration order matters: it is the canonical sort order of units in a
//! quantity, and the tie-break when a token could be read more than one way.
//!
//! Grams, not kilograms, are registered as the SI base unit of mass so that
//! prefixes work uniformly; reduction turns grams back into kilograms.

use std::f64::consts::PI;
use quantia_core::Result;
use crate::base_unit::BaseUnit;
use crate::prefix;
use crate::registry::Registry;
use crate::temperature;

impl Registry {
    pub(crate) fn register_builtin_units(&mut self) -> Result<()> {
        self.register_si_base_units()?;
        self.register_si_derived_units()?;
        self.register_si_accepted_units()?;
        self.register_common_units()?;
        self.register_imperial_units()?;
        self.register_us_customary_units()?;
        self.register_binary_units()?;
        self.register_currency_units()?;
        Ok(())
    }

    /// SI base units, in the order of the International System of Quantities.
    /// <https://en.wikipedia.org/wiki/SI_base_unit>
    fn register_si_base_units(&mut self) -> Result<()> {
        let metric = prefix::metric();
        self.insert(BaseUnit::new("m", "meter").with_prefixes(metric.clone()))?;
        self.insert(BaseUnit::new("g", "gram").with_prefixes(metric.clone()))?;
        self.insert(BaseUnit::new("s", "second").with_prefixes(metric.clone()))?;
        self.insert(BaseUnit::new("A", "ampere").with_prefixes(metric.clone()))?;
        self.insert(BaseUnit::new("K", "kelvin").with_prefixes(metric.clone()))?;
        self.insert(BaseUnit::new("mol", "mole").with_prefixes(metric.clone()))?;
        self.insert(BaseUnit::new("cd", "candela").with_prefixes(metric))?;
        Ok(())
    }

    /// <https://en.wikipedia.org/wiki/SI_derived_unit>
    fn register_si_derived_units(&mut self) -> Result<()> {
        let metric = prefix::metric;
        self.insert(BaseUnit::linear("Hz", "hertz", 1.0, "/s").with_prefixes(metric()))?;
        self.insert(BaseUnit::new("rad", "radian"))?;
        self.insert(BaseUnit::new("sr", "steradian"))?;
        self.insert(BaseUnit::linear("N", "newton", 1.0, "kg*m/s2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("Pa", "pascal", 1.0, "kg/m/s2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("J", "joule", 1.0, "kg*m2/s2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("W", "watt", 1.0, "kg*m2/s3").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("C", "coulomb", 1.0, "s*A").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("V", "volt", 1.0, "kg*m2/s3/A").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("F", "farad", 1.0, "s4*A2/kg/m2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("Ω", "ohm", 1.0, "kg*m2/s3/A2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("S", "siemens", 1.0, "s3*A2/kg/m2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("Wb", "weber", 1.0, "kg*m2/s2/A").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("T", "tesla", 1.0, "kg/s2/A").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("H", "henry", 1.0, "kg*m2/s2/A2").with_prefixes(metric()))?;
        self.insert(BaseUnit::affine(
            "°C",
            "Celsius",
            "K",
            temperature::celsius_to_kelvin,
            temperature::kelvin_to_celsius,
        ))?;
        self.insert(BaseUnit::linear("lm", "lumen", 1.0, "cd").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("lx", "lux", 1.0, "cd/m2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("Bq", "becquerel", 1.0, "/s").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("Gy", "gray", 1.0, "m2/s2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("Sv", "sievert", 1.0, "m2/s2").with_prefixes(metric()))?;
        self.insert(BaseUnit::linear("kat", "katal", 1.0, "mol/s").with_prefixes(metric()))?;
        Ok(())
    }

    /// Non-SI units accepted for use with SI.
    /// <https://en.wikipedia.org/wiki/International_System_of_Units#Non-SI_units_accepted_for_use_with_SI>
    fn register_si_accepted_units(&mut self) -> Result<()> {
        // Time
        self.insert(BaseUnit::linear("min", "minute", 60.0, "s"))?;
        self.insert(BaseUnit::linear("h", "hour", 3_600.0, "s"))?;
        self.insert(BaseUnit::linear("d", "day", 86_400.0, "s"))?;

        // Length
        self.insert(BaseUnit::linear("AU", "astronomical unit", 149_597_870_700.0, "m"))?;

        // Angle
        self.insert(BaseUnit::linear("°", "degree", PI / 180.0, "rad"))?;
        self.insert(BaseUnit::linear("′", "arcminute", PI / 10_800.0, "rad"))?;
        self.insert(BaseUnit::linear("″", "arcsecond", PI / 648_000.0, "rad"))?;

        // Area
        self.insert(BaseUnit::linear("ha", "hectare", 10_000.0, "m2"))?;

        // Volume
        self.insert(BaseUnit::linear("L", "liter", 0.001, "m3").with_prefixes(prefix::metric()))?;

        // Mass
        self.insert(BaseUnit::linear("t", "tonne", 1_000.0, "kg").with_prefixes(prefix::large_metric()))?;
        self.insert(BaseUnit::linear("Da", "dalton", 1.660_539_040e-27, "kg").with_prefixes(prefix::large_metric()))?;

        // Energy
        self.insert(BaseUnit::linear("eV", "electron volt", 1.602_176_634e-19, "J").with_prefixes(prefix::metric()))?;
        Ok(())
    }

    /// Common units that fit none of the other groups.
    fn register_common_units(&mut self) -> Result<()> {
        // Time. A month is a twelfth of a Gregorian year.
        self.insert(BaseUnit::linear("w", "week", 604_800.0, "s"))?;
        self.insert(BaseUnit::linear("mon", "month", 2_629_746.0, "s"))?;
        // Gregorian year, 365.2425 d. Only k, M and G: "Pa" is the pascal.
        self.insert(BaseUnit::linear("a", "year", 31_556_952.0, "s").with_prefixes(prefix::get_multiple("k,M,G")?))?;

        // Length
        self.insert(BaseUnit::linear("ly", "light year", 9_460_730_472_580_800.0, "m"))?;
        self.insert(BaseUnit::linear("pc", "parsec", 3.085_677_581_491_367_3e16, "m"))?;

        // Energy
        self.insert(BaseUnit::linear("cal", "small calorie", 4.184, "J").with_prefixes(prefix::get_multiple("k")?))?;

        // Pressure
        self.insert(BaseUnit::linear("bar", "bar", 100_000.0, "Pa").with_prefixes(prefix::metric()))?;
        self.insert(BaseUnit::linear("atm", "atmosphere", 101_325.0, "Pa"))?;
        Ok(())
    }

    /// <https://en.wikipedia.org/wiki/Imperial_units>
    fn register_imperial_units(&mut self) -> Result<()> {
        // Length
        self.insert(BaseUnit::linear("in", "inch", 0.0254, "m"))?;
        self.insert(BaseUnit::linear("ft", "foot", 0.3048, "m"))?;
        self.insert(BaseUnit::linear("yd", "yard", 0.9144, "m"))?;
        self.insert(BaseUnit::linear("mi", "mile", 1_609.344, "m"))?;

        // Area
        self.insert(BaseUnit::linear("ac", "acre", 4_046.856_422_4, "m2"))?;

        // Volume
        self.insert(BaseUnit::linear("pt", "imperial pint", 568.261_25, "mL"))?;
        self.insert(BaseUnit::linear("qt", "imperial quart", 1.136_522_5, "L"))?;
        self.insert(BaseUnit::linear("gal", "imperial gallon", 4.546_09, "L"))?;

        // Mass
        self.insert(BaseUnit::linear("oz", "ounce", 28.349_523_125, "g"))?;
        self.insert(BaseUnit::linear("lb", "pound", 453.592_37, "g"))?;
        self.insert(BaseUnit::linear("st", "stone", 6.350_293_18, "kg"))?;
        self.insert(BaseUnit::linear("ton", "long ton", 1_016.046_908_8, "kg"))?;

        // Force
        self.insert(BaseUnit::linear("lbf", "pound force", 4.448_221_615_260_5, "N"))?;

        // Pressure
        self.insert(BaseUnit::linear("psi", "pound force per square inch", 6_894.757_293_168_36, "Pa"))?;
        Ok(())
    }

    /// <https://en.wikipedia.org/wiki/United_States_customary_units>
    fn register_us_customary_units(&mut self) -> Result<()> {
        // Volume
        self.insert(BaseUnit::linear("USpt", "US liquid pint", 473.176_473, "mL"))?;
        self.insert(BaseUnit::linear("USqt", "US liquid quart", 946.352_946, "mL"))?;
        self.insert(BaseUnit::linear("USgal", "US liquid gallon", 3.785_411_784, "L"))?;

        // Mass
        self.insert(BaseUnit::linear("tn", "short ton", 907.184_74, "kg"))?;

        // Temperature
        self.insert(BaseUnit::affine(
            "°F",
            "Fahrenheit",
            "K",
            temperature::fahrenheit_to_kelvin,
            temperature::kelvin_to_fahrenheit,
        ))?;
        Ok(())
    }

    /// Data storage units.
    fn register_binary_units(&mut self) -> Result<()> {
        let prefixes = prefix::combine(&[prefix::binary(), prefix::large_metric()]);
        self.insert(BaseUnit::linear("b", "bit", 0.125, "B").with_prefixes(prefixes.clone()))?;
        self.insert(BaseUnit::new("B", "byte").with_prefixes(prefixes))?;
        Ok(())
    }

    /// Currencies. Their prefixes follow the number even though the symbol precedes it.
    fn register_currency_units(&mut self) -> Result<()> {
        let prefixes = prefix::get_multiple("k,K,M,B,T")?;
        for (symbol, name) in [
            ("$", "dollar"),
            ("€", "euro"),
            ("£", "pound sterling"),
            ("¥", "yuan"),
            ("₹", "rupee"),
            ("₩", "won"),
            ("฿", "baht"),
            ("₽", "ruble"),
        ] {
            self.insert(BaseUnit::new(symbol, name).with_prefixes(prefixes.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::base_unit::CURRENCY_SYMBOLS;
    use crate::registry::Registry;

    #[test]
    fn test_si_base_order() {
        let registry = Registry::build().unwrap();
        let first: Vec<&str> = registry.units().take(7).map(|u| u.symbol.as_str()).collect();
        assert_eq!(first, vec!["m", "g", "s", "A", "K", "mol", "cd"]);
    }

    #[test]
    fn test_every_currency_symbol_registered() {
        let registry = Registry::build().unwrap();
        for c in CURRENCY_SYMBOLS.chars() {
            let unit = registry.get(&c.to_string()).unwrap();
            assert!(unit.is_currency());
            assert_eq!(unit.prefixes().len(), 5);
        }
    }

    #[test]
    fn test_currencies_come_last() {
        let registry = Registry::build().unwrap();
        let last = registry.units().last().unwrap();
        assert_eq!(last.symbol, "₽");
        assert_eq!(last.order as usize, registry.len());
    }

    #[test]
    fn test_prefixed_resolution() {
        let registry = Registry::build().unwrap();
        let cases = [
            ("km", "m", "k"),
            ("kg", "g", "k"),
            ("µs", "s", "µ"),
            ("kWh", "", ""),
            ("MiB", "B", "Mi"),
            ("kcal", "cal", "k"),
            ("hPa", "Pa", "h"),
            ("Ma", "a", "M"),
        ];
        for (token, base, prefix) in cases {
            match registry.resolve(token, 1) {
                Ok(unit) => {
                    assert_eq!(unit.base.symbol, base, "{}", token);
                    assert_eq!(unit.prefix.map(|p| p.symbol).unwrap_or(""), prefix, "{}", token);
                }
                Err(_) => assert!(base.is_empty(), "{} should resolve", token),
            }
        }
    }

    #[test]
    fn test_bare_symbols_resolve_unprefixed() {
        let registry = Registry::build().unwrap();
        for unit in registry.units() {
            let resolved = registry.resolve(&unit.symbol, 1).unwrap();
            assert_eq!(resolved.base.order, unit.order);
            assert!(resolved.prefix.is_none());
        }
    }
}
