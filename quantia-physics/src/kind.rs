//! Physical kinds of quantity

use std::fmt;
use serde::Serialize;
use quantia_core::Result;
use quantia_units::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Time,
    Length,
    Mass,
    Current,
    Temperature,
    Amount,
    LuminousIntensity,
    Frequency,
    Angle,
    Force,
    Pressure,
    Energy,
    Power,
    Charge,
    Voltage,
    Capacitance,
    Resistance,
    Conductance,
    MagneticFlux,
    MagneticInduction,
    Inductance,
    LuminousFlux,
    Illuminance,
    Radioactivity,
    RadiationDose,
    CatalyticActivity,
    DataStorage,
    Money,
}

impl UnitKind {
    pub const ALL: [UnitKind; 28] = [
        UnitKind::Time,
        UnitKind::Length,
        UnitKind::Mass,
        UnitKind::Current,
        UnitKind::Temperature,
        UnitKind::Amount,
        UnitKind::LuminousIntensity,
        UnitKind::Frequency,
        UnitKind::Angle,
        UnitKind::Force,
        UnitKind::Pressure,
        UnitKind::Energy,
        UnitKind::Power,
        UnitKind::Charge,
        UnitKind::Voltage,
        UnitKind::Capacitance,
        UnitKind::Resistance,
        UnitKind::Conductance,
        UnitKind::MagneticFlux,
        UnitKind::MagneticInduction,
        UnitKind::Inductance,
        UnitKind::LuminousFlux,
        UnitKind::Illuminance,
        UnitKind::Radioactivity,
        UnitKind::RadiationDose,
        UnitKind::CatalyticActivity,
        UnitKind::DataStorage,
        UnitKind::Money,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Time => "time",
            UnitKind::Length => "length",
            UnitKind::Mass => "mass",
            UnitKind::Current => "electric current",
            UnitKind::Temperature => "temperature",
            UnitKind::Amount => "amount of substance",
            UnitKind::LuminousIntensity => "luminous intensity",
            UnitKind::Frequency => "frequency",
            UnitKind::Angle => "angle",
            UnitKind::Force => "force",
            UnitKind::Pressure => "pressure",
            UnitKind::Energy => "energy",
            UnitKind::Power => "power",
            UnitKind::Charge => "electric charge",
            UnitKind::Voltage => "voltage",
            UnitKind::Capacitance => "capacitance",
            UnitKind::Resistance => "resistance",
            UnitKind::Conductance => "conductance",
            UnitKind::MagneticFlux => "magnetic flux",
            UnitKind::MagneticInduction => "magnetic induction",
            UnitKind::Inductance => "inductance",
            UnitKind::LuminousFlux => "luminous flux",
            UnitKind::Illuminance => "illuminance",
            UnitKind::Radioactivity => "radioactivity",
            UnitKind::RadiationDose => "radiation dose",
            UnitKind::CatalyticActivity => "catalytic activity",
            UnitKind::DataStorage => "data storage",
            UnitKind::Money => "money",
        }
    }

    /// The SI unit of this kind; `None` for money, which has one unit per currency
    pub fn si_unit(self) -> Option<&'static str> {
        Some(match self {
            UnitKind::Time => "s",
            UnitKind::Length => "m",
            UnitKind::Mass => "kg",
            UnitKind::Current => "A",
            UnitKind::Temperature => "K",
            UnitKind::Amount => "mol",
            UnitKind::LuminousIntensity => "cd",
            UnitKind::Frequency => "Hz",
            UnitKind::Angle => "rad",
            UnitKind::Force => "N",
            UnitKind::Pressure => "Pa",
            UnitKind::Energy => "J",
            UnitKind::Power => "W",
            UnitKind::Charge => "C",
            UnitKind::Voltage => "V",
            UnitKind::Capacitance => "F",
            UnitKind::Resistance => "Ω",
            UnitKind::Conductance => "S",
            UnitKind::MagneticFlux => "Wb",
            UnitKind::MagneticInduction => "T",
            UnitKind::Inductance => "H",
            UnitKind::LuminousFlux => "lm",
            UnitKind::Illuminance => "lx",
            UnitKind::Radioactivity => "Bq",
            UnitKind::RadiationDose => "Gy",
            UnitKind::CatalyticActivity => "kat",
            UnitKind::DataStorage => "B",
            UnitKind::Money => return None,
        })
    }

    /// The first kind whose SI unit reduces to the same units as `quantity`.
    ///
    /// Kinds sharing a dimension resolve to the one listed first: `/s` is a
    /// frequency, never a radioactivity, and `cd` is a luminous intensity.
    pub fn classify(quantity: &Quantity) -> Result<Option<UnitKind>> {
        let reduced = quantity.reduce()?;
        if let [unit] = reduced.units.as_slice() {
            if unit.exponent == 1 && unit.base.is_currency() {
                return Ok(Some(UnitKind::Money));
            }
        }
        for kind in UnitKind::ALL {
            if let Some(symbol) = kind.si_unit() {
                if reduced.has_compatible_units(&Quantity::parse(symbol)?)? {
                    return Ok(Some(kind));
                }
            }
        }
        Ok(None)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<UnitKind> {
        UnitKind::classify(&Quantity::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn test_si_units_parse() {
        for kind in UnitKind::ALL {
            if let Some(symbol) = kind.si_unit() {
                assert!(Quantity::parse(symbol).is_ok(), "{}", symbol);
            }
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("3 mi"), Some(UnitKind::Length));
        assert_eq!(classify("2 lb"), Some(UnitKind::Mass));
        assert_eq!(classify("1 kW*h"), Some(UnitKind::Energy));
        assert_eq!(classify("30 psi"), Some(UnitKind::Pressure));
        assert_eq!(classify("72 °F"), Some(UnitKind::Temperature));
        assert_eq!(classify("45°"), Some(UnitKind::Angle));
        assert_eq!(classify("4.7 kΩ"), Some(UnitKind::Resistance));
        assert_eq!(classify("16 GiB"), Some(UnitKind::DataStorage));
        assert_eq!(classify("€20"), Some(UnitKind::Money));
    }

    #[test]
    fn test_shared_dimension_takes_first_kind() {
        assert_eq!(classify("5 Bq"), Some(UnitKind::Frequency));
        assert_eq!(classify("2 Sv"), Some(UnitKind::RadiationDose));
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("3 m/s"), None);
        assert_eq!(classify("£20/h"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(UnitKind::MagneticFlux.to_string(), "magnetic flux");
    }
}
