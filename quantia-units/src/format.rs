//! Rendering quantities as text
//!
//! Two styles: `Nice` uses superscript exponents, `×10ⁿ` amounts and `⋅`
//! between units; `Ascii` sticks to plain integers and `*`.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use quantia_core::numeral::{general_format, nice_format, superscript};
use quantia_core::{QuantityError, Result};
use crate::quantity::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    #[default]
    Nice,
    Ascii,
}

impl FormatStyle {
    /// Unit exponent text: `²` or `2`
    pub fn exponent(self, exponent: i64) -> String {
        match self {
            FormatStyle::Nice => superscript(exponent),
            FormatStyle::Ascii => exponent.to_string(),
        }
    }

    pub fn amount(self, amount: f64) -> String {
        match self {
            FormatStyle::Nice => nice_format(amount),
            FormatStyle::Ascii => general_format(amount),
        }
    }

    fn separator(self) -> &'static str {
        match self {
            FormatStyle::Nice => "⋅",
            FormatStyle::Ascii => "*",
        }
    }
}

impl FromStr for FormatStyle {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nice" => Ok(FormatStyle::Nice),
            "ascii" => Ok(FormatStyle::Ascii),
            other => Err(QuantityError::format(format!(
                "Unknown format style '{}', expected 'nice' or 'ascii'.",
                other
            ))),
        }
    }
}

impl Quantity {
    /// Render the amount, the units, or both.
    ///
    /// A currency with exponent 1 wraps the amount (`-$3k`). The first other
    /// positive unit follows the amount after a space, except for the angle
    /// marks `°`, `′` and `″`, which attach to the numeral. Units with negative
    /// exponents are written as divisions.
    pub fn format(&self, include_amount: bool, include_units: bool, style: FormatStyle) -> Result<String> {
        if !include_amount && !include_units {
            return Err(QuantityError::Render(
                "Either the amount or the units or both must be included in the output string."
                    .to_string(),
            ));
        }

        let mut out = if include_amount { style.amount(self.amount) } else { String::new() };
        if !include_units {
            return Ok(out);
        }

        let mut units = String::new();
        let mut first = true;
        for unit in &self.units {
            if unit.exponent < 0 {
                units.push('/');
                units.push_str(&unit.render_reciprocal(style));
                continue;
            }
            if unit.exponent == 1 && unit.base.is_currency() {
                let at = usize::from(out.starts_with('-'));
                out.insert_str(at, &unit.base.symbol);
                if let Some(p) = unit.prefix {
                    out.push_str(p.symbol);
                }
                continue;
            }
            if !first {
                units.push_str(style.separator());
            } else if !out.is_empty() && !unit.base.attaches_to_numeral() {
                units.push(' ');
            }
            first = false;
            units.push_str(&unit.render(style));
        }

        out.push_str(&units);
        Ok(out)
    }

    /// Plain ASCII rendering of amount and units
    pub fn to_ascii_string(&self) -> String {
        self.format(true, true, FormatStyle::Ascii).unwrap_or_default()
    }

    pub fn amount_string(&self) -> Result<String> {
        self.format(true, false, FormatStyle::Nice)
    }

    pub fn units_string(&self) -> Result<String> {
        self.format(false, true, FormatStyle::Nice)
    }

    /// Units for messages; `1` when dimensionless
    pub(crate) fn unit_label(&self) -> String {
        match self.units_string() {
            Ok(label) if !label.is_empty() => label,
            _ => "1".to_string(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.format(true, true, FormatStyle::Nice).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
