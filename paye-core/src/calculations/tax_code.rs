//! Lenient tax-code handling.
//!
//! Parsing never fails: a code the parser does not recognise falls back to
//! the year's default allowance, so a typo in the free-form field cannot
//! sink the whole calculation. Known simplification, kept on purpose:
//! `K`-prefixed and flat-rate codes (`BR`, `D0`, `D1`) only zero the
//! allowance here; the progressive band schedule still applies to all
//! income.

use rust_decimal::Decimal;
use tracing::warn;

/// A classified tax code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxCode {
    /// Numeric code such as `1257L`: the allowance is the digits times ten.
    Numeric(Decimal),

    /// `K`-prefixed or flat-rate (`BR`/`D0`/`D1`) code: no allowance.
    NoAllowance,

    /// Anything else: the year's standard allowance applies.
    Unrecognised,
}

impl TaxCode {
    /// Classifies a tax-code string. Case-insensitive, surrounding
    /// whitespace ignored, total over arbitrary input.
    pub fn parse(code: &str) -> Self {
        let code = code.trim();

        let digits: String = code.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            return match digits.parse::<u64>() {
                Ok(value) => Self::Numeric(Decimal::from(value) * Decimal::TEN),
                // A digit run too long for u64 is no real HMRC code.
                Err(_) => {
                    warn!(code, "implausible numeric tax code; using the default allowance");
                    Self::Unrecognised
                }
            };
        }

        let upper = code.to_ascii_uppercase();
        if upper.starts_with('K') {
            return Self::NoAllowance;
        }
        match upper.as_str() {
            "BR" | "D0" | "D1" => Self::NoAllowance,
            _ => {
                warn!(code, "unrecognised tax code; using the default allowance");
                Self::Unrecognised
            }
        }
    }

    /// The base personal allowance this code grants, before tapering.
    pub fn base_allowance(
        &self,
        default_allowance: Decimal,
    ) -> Decimal {
        match self {
            Self::Numeric(allowance) => *allowance,
            Self::NoAllowance => Decimal::ZERO,
            Self::Unrecognised => default_allowance,
        }
    }
}
