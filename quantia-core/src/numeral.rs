//! Numeral rendering: superscript integers and general-format floats

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUPERSCRIPT_MINUS: char = '⁻';

/// Exponents outside `[MIN_PLAIN_EXPONENT, MAX_PLAIN_EXPONENT]` switch to scientific form.
const MIN_PLAIN_EXPONENT: i32 = -5;
const MAX_PLAIN_EXPONENT: i32 = 14;

/// Render an integer with Unicode superscript digits, e.g. `-12` -> `⁻¹²`.
pub fn superscript(n: i64) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push(SUPERSCRIPT_MINUS);
    }
    for c in n.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            out.push(SUPERSCRIPT_DIGITS[d as usize]);
        }
    }
    out
}

/// Format a float the compact way: plain decimal for ordinary magnitudes,
/// `mantissa e exponent` for very large or very small ones.
///
/// ```
/// use quantia_core::numeral::general_format;
/// assert_eq!(general_format(27.5), "27.5");
/// assert_eq!(general_format(1.5e20), "1.5e20");
/// assert_eq!(general_format(-2e-7), "-2e-7");
/// ```
pub fn general_format(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let scientific = format!("{:e}", value);
    let exponent = split_exponent(&scientific).1.unwrap_or(0);
    if (MIN_PLAIN_EXPONENT..=MAX_PLAIN_EXPONENT).contains(&exponent) {
        value.to_string()
    } else {
        scientific
    }
}

/// Split a general-format numeral into its mantissa text and optional base-10 exponent.
pub fn split_exponent(numeral: &str) -> (&str, Option<i32>) {
    match numeral.find(['e', 'E']) {
        Some(pos) => match numeral[pos + 1..].parse::<i32>() {
            Ok(exp) => (&numeral[..pos], Some(exp)),
            Err(_) => (numeral, None),
        },
        None => (numeral, None),
    }
}

/// Render a float with a superscript power of ten when it needs one,
/// e.g. `1.5e20` -> `1.5×10²⁰`.
pub fn nice_format(value: f64) -> String {
    let general = general_format(value);
    match split_exponent(&general) {
        (mantissa, Some(exp)) => format!("{}×10{}", mantissa, superscript(exp.into())),
        (mantissa, None) => mantissa.to_string(),
    }
}
