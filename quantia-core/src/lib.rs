//! Quantia Core - Shared helpers
//!
//! This crate provides the pieces every other Quantia crate leans on:
//! - `QuantityError`: the error type, with machine-readable codes
//! - `fuzzy`: tolerant floating-point equality
//! - `numeral`: superscript digits and general-format float rendering

mod error;
pub mod fuzzy;
pub mod numeral;

pub use error::{codes, ErrorReport, QuantityError, Result};
pub use fuzzy::{fuzzy_eq, FuzzyEq};

#[cfg(test)]
mod tests {
    use super::*;

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(QuantityError::format("bad").code(), codes::FORMAT_ERROR);
            assert_eq!(
                QuantityError::incompatible("m", "s").code(),
                codes::INCOMPATIBLE_UNITS
            );
            assert_eq!(
                QuantityError::DuplicateSymbol("m".into()).code(),
                codes::DUPLICATE_SYMBOL
            );
        }

        #[test]
        fn test_error_display() {
            let err = QuantityError::UnknownPrefix("x".into());
            assert_eq!(err.to_string(), "Unknown prefix: 'x'");

            let err = QuantityError::incompatible("m", "s");
            assert!(err.to_string().contains("'m' and 's'"));
        }

        #[test]
        fn test_error_report() {
            let report = QuantityError::format("The string 'zz' is not in the correct format.").report();
            assert_eq!(report.code, "FORMAT_ERROR");
            assert!(report.message.contains("'zz'"));
        }
    }
}
