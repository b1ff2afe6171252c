//! Unit: a base unit, an optional prefix and an integer exponent

use std::fmt;
use std::sync::Arc;
use quantia_core::{QuantityError, Result};
use crate::base_unit::{BaseUnit, CURRENCY_SYMBOLS};
use crate::format::FormatStyle;
use crate::prefix::UnitPrefix;
use crate::registry::Registry;

/// Longest `prefix + symbol` spelling a unit token may have
pub const MAX_TOKEN_LETTERS: usize = 6;

/// One factor of a composite unit expression, e.g. `km²` or `s⁻¹`
#[derive(Debug, Clone)]
pub struct Unit {
    pub base: Arc<BaseUnit>,
    pub prefix: Option<&'static UnitPrefix>,
    pub exponent: i32,
}

impl Unit {
    pub fn new(base: Arc<BaseUnit>, prefix: Option<&'static UnitPrefix>, exponent: i32) -> Self {
        Unit { base, prefix, exponent }
    }

    /// Parse a token such as `km2` or `s-1` against the global registry.
    pub fn parse(token: &str) -> Result<Unit> {
        Registry::global().parse_unit(token)
    }

    /// Multiplier of the prefix, 1 when there is none
    pub fn prefix_multiplier(&self) -> f64 {
        self.prefix.map_or(1.0, |p| p.multiplier)
    }

    /// The same unit raised to a different exponent
    pub fn with_exponent(&self, exponent: i32) -> Unit {
        Unit { exponent, ..self.clone() }
    }

    /// The same unit with its exponent multiplied by `n`
    pub fn raised(&self, n: i32) -> Result<Unit> {
        let exponent = self.exponent.checked_mul(n).ok_or_else(|| exponent_overflow(self))?;
        Ok(self.with_exponent(exponent))
    }

    /// The same unit with its exponent negated
    pub fn inverted(&self) -> Result<Unit> {
        let exponent = self.exponent.checked_neg().ok_or_else(|| exponent_overflow(self))?;
        Ok(self.with_exponent(exponent))
    }

    /// Whether both units refer to the same base unit, ignoring prefix and exponent
    pub fn same_base(&self, other: &Unit) -> bool {
        Arc::ptr_eq(&self.base, &other.base) || self.base.symbol == other.base.symbol
    }

    /// Prefix and symbol without the exponent, e.g. `km`
    pub fn prefixed_symbol(&self) -> String {
        match self.prefix {
            Some(p) => format!("{}{}", p.symbol, self.base.symbol),
            None => self.base.symbol.clone(),
        }
    }

    /// Render as `prefix symbol exponent`; the exponent is omitted when it is 1.
    pub fn render(&self, style: FormatStyle) -> String {
        let mut out = self.prefixed_symbol();
        if self.exponent != 1 {
            out.push_str(&style.exponent(self.exponent.into()));
        }
        out
    }

    /// Render as the denominator of a division: `s⁻²` becomes `s²`.
    pub(crate) fn render_reciprocal(&self, style: FormatStyle) -> String {
        let mut out = self.prefixed_symbol();
        let exponent = -i64::from(self.exponent);
        if exponent != 1 {
            out.push_str(&style.exponent(exponent));
        }
        out
    }
}

/// Exponent arithmetic left the `i32` range
pub(crate) fn exponent_overflow(unit: &Unit) -> QuantityError {
    QuantityError::format(format!(
        "The exponent of unit '{}' is out of range.",
        unit.prefixed_symbol()
    ))
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.same_base(other)
            && self.prefix.map(|p| p.symbol) == other.prefix.map(|p| p.symbol)
            && self.exponent == other.exponent
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(FormatStyle::Nice))
    }
}

/// Characters allowed in the `prefix + symbol` part of a unit token
pub(crate) fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'Ω' | '°' | '″' | '′' | 'µ' | '"' | '\'')
}

/// Split a unit token into its `prefix + symbol` text and optional exponent.
///
/// Accepts 1 to 6 symbol characters, or a single currency symbol, followed by
/// an optional `-?digits` exponent. Returns `None` when the token has any other shape.
pub(crate) fn split_token(token: &str) -> Option<(&str, Option<i32>)> {
    let mut chars = token.char_indices();
    let symbol_end = match chars.next() {
        Some((_, c)) if CURRENCY_SYMBOLS.contains(c) => c.len_utf8(),
        Some((_, c)) if is_symbol_char(c) => {
            let mut count = 1;
            let mut end = c.len_utf8();
            for (i, c) in chars {
                if !is_symbol_char(c) {
                    break;
                }
                count += 1;
                end = i + c.len_utf8();
            }
            if count > MAX_TOKEN_LETTERS {
                return None;
            }
            end
        }
        _ => return None,
    };

    let (symbol, rest) = token.split_at(symbol_end);
    if rest.is_empty() {
        return Some((symbol, None));
    }
    let digits = rest.strip_prefix('-').unwrap_or(rest);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse::<i32>().ok().map(|exp| (symbol, Some(exp)))
}

impl Registry {
    /// Parse a unit token such as `km2`, `s-1` or `$` against this registry.
    pub fn parse_unit(&self, token: &str) -> Result<Unit> {
        let (prefix_base, exponent) = split_token(token).ok_or_else(|| {
            QuantityError::format(format!(
                "The unit '{}' is in an incorrect format or invalid or unknown.",
                token
            ))
        })?;
        self.resolve(prefix_base, exponent.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token() {
        assert_eq!(split_token("m"), Some(("m", None)));
        assert_eq!(split_token("km2"), Some(("km", Some(2))));
        assert_eq!(split_token("s-1"), Some(("s", Some(-1))));
        assert_eq!(split_token("°C"), Some(("°C", None)));
        assert_eq!(split_token("µs"), Some(("µs", None)));
        assert_eq!(split_token("$"), Some(("$", None)));
        assert_eq!(split_token("USgal"), Some(("USgal", None)));
    }

    #[test]
    fn test_split_token_rejects() {
        assert_eq!(split_token(""), None);
        assert_eq!(split_token("2m"), None);
        assert_eq!(split_token("m-"), None);
        assert_eq!(split_token("m+2"), None);
        assert_eq!(split_token("abcdefg"), None);
        assert_eq!(split_token("$$"), None);
        assert_eq!(split_token("m 2"), None);
    }

    #[test]
    fn test_parse_prefixed() {
        let unit = Unit::parse("km2").unwrap();
        assert_eq!(unit.base.symbol, "m");
        assert_eq!(unit.prefix.map(|p| p.symbol), Some("k"));
        assert_eq!(unit.exponent, 2);
        assert_eq!(unit.prefix_multiplier(), 1e3);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(Unit::parse("zz"), Err(QuantityError::Format(_))));
        assert!(matches!(Unit::parse("k m"), Err(QuantityError::Format(_))));
    }

    #[test]
    fn test_render() {
        let unit = Unit::parse("s-2").unwrap();
        assert_eq!(unit.render(FormatStyle::Nice), "s⁻²");
        assert_eq!(unit.render(FormatStyle::Ascii), "s-2");
        assert_eq!(Unit::parse("MiB").unwrap().to_string(), "MiB");
    }

    #[test]
    fn test_render_reciprocal() {
        let unit = Unit::parse("s-2").unwrap();
        assert_eq!(unit.render_reciprocal(FormatStyle::Nice), "s²");
        assert_eq!(Unit::parse("h-1").unwrap().render_reciprocal(FormatStyle::Ascii), "h");

        let extreme = Unit::parse("m-2147483648").unwrap();
        assert_eq!(extreme.render_reciprocal(FormatStyle::Ascii), "m2147483648");
    }

    #[test]
    fn test_exponent_overflow() {
        let unit = Unit::parse("m2000000000").unwrap();
        assert_eq!(unit.raised(-1).unwrap().exponent, -2_000_000_000);
        assert!(matches!(unit.raised(2), Err(QuantityError::Format(_))));

        let lowest = Unit::parse("m-2147483648").unwrap();
        let err = lowest.inverted().unwrap_err();
        assert!(err.to_string().contains("'m'"));
        assert_eq!(Unit::parse("s-3").unwrap().inverted().unwrap().exponent, 3);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Unit::parse("km").unwrap();
        assert_eq!(a, Unit::parse("km").unwrap());
        assert_ne!(a, Unit::parse("m").unwrap());
        assert_ne!(a, Unit::parse("km2").unwrap());
        assert!(a.same_base(&Unit::parse("mm3").unwrap()));
    }

    #[test]
    fn test_every_bare_symbol_round_trips() {
        for base in Registry::global().units() {
            let unit = Unit::parse(&base.symbol).unwrap();
            assert_eq!(unit.to_string(), base.symbol);
            assert!(unit.prefix.is_none());
        }
    }
}
