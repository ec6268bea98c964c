//! # Input Parsing
//!
//! Turns raw command-line strings into the exact values the core consumes.
//! This is the "external parsing layer" the allocator assumes: everything
//! downstream of this module is already a validated exact decimal.
//!
//! ## Money Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Permissive (default)                Strict (--strict)                  │
//! │  ─────────────────────               ─────────────────────              │
//! │  "$1,234.56"  → 1234.56              "$1,234.56"  → 1234.56             │
//! │  " 1234.56 $" → 1234.56              "1234.5"     → 1234.50             │
//! │  " .5 "       → 0.50                 "1234.56$"   → rejected            │
//! │  "$ 1,234.5"  → 1234.50              "$12,34.56"  → rejected            │
//! │                                      "1 234.56"   → rejected            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are quantized to cents with HALF-UP rounding, the same rule the
//! core uses, so a parsed string never re-enters the calculation pipeline
//! with more precision than a cent.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tipsplit_core::{Money, SplitError, TipPercent};

// =============================================================================
// Parse Error
// =============================================================================

/// Errors from turning user strings into exact values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("enter a valid dollar amount (e.g., 12.34), got {input:?}")]
    InvalidMoney { input: String },

    #[error("enter a valid dollar amount like $1,234.56, got {input:?}")]
    StrictMoney { input: String },

    #[error("amount must not be negative, got {input:?}")]
    NegativeMoney { input: String },

    #[error("enter a valid percentage (e.g., 18 or 18%), got {input:?}")]
    InvalidPercentage { input: String },

    #[error("percentage must be between 0 and 100, got {value}")]
    PercentageOutOfRange { value: Decimal },

    #[error("people must be a whole number >= 1, got {input:?}")]
    InvalidPeople { input: String },

    #[error("weights must be comma-separated positive numbers, got {input:?}")]
    InvalidWeights { input: String },
}

// =============================================================================
// Money
// =============================================================================

/// Parses a money string into exact cents.
///
/// Permissive mode strips `$`, commas, and inner whitespace before parsing.
/// Strict mode first insists on `$1,234.56`-style formatting (optional `$`,
/// correct comma grouping, at most two decimals). Negative amounts are
/// rejected in both modes.
pub fn parse_money(text: &str, strict: bool) -> Result<Money, ParseError> {
    let trimmed = text.trim();

    if strict && !is_strict_money(trimmed) {
        return Err(ParseError::StrictMoney {
            input: text.to_string(),
        });
    }

    let mut cleaned: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '$')
        .collect();
    if cleaned.starts_with('.') {
        cleaned.insert(0, '0');
    }

    let value: Decimal = cleaned.parse().map_err(|_| ParseError::InvalidMoney {
        input: text.to_string(),
    })?;
    if value.is_sign_negative() {
        return Err(ParseError::NegativeMoney {
            input: text.to_string(),
        });
    }

    let cents = (value * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| ParseError::InvalidMoney {
            input: text.to_string(),
        })?;

    Ok(Money::from_cents(cents))
}

/// Strict money shape: optional `$`, then either plain digits or comma
/// groups of three, then an optional fraction of one or two digits.
fn is_strict_money(text: &str) -> bool {
    let body = text.strip_prefix('$').unwrap_or(text);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    if let Some(frac) = frac_part {
        if frac.is_empty() || frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }

    if int_part.is_empty() {
        return false;
    }
    if int_part.contains(',') {
        let mut groups = int_part.split(',');
        let lead = groups.next().unwrap_or("");
        if lead.is_empty() || lead.len() > 3 || !lead.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
    } else {
        int_part.chars().all(|c| c.is_ascii_digit())
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// Parses a tip percentage ("18", "18%", "18.567%"), quantized HALF-UP to
/// two decimals and validated against [0, 100] by the core type.
pub fn parse_percentage(text: &str) -> Result<TipPercent, ParseError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%' && *c != ',')
        .collect();

    let value: Decimal = cleaned.parse().map_err(|_| ParseError::InvalidPercentage {
        input: text.to_string(),
    })?;

    TipPercent::from_decimal(value).map_err(|err| match err {
        SplitError::InvalidPercentage { value } => ParseError::PercentageOutOfRange { value },
        _ => ParseError::InvalidPercentage {
            input: text.to_string(),
        },
    })
}

// =============================================================================
// Participants
// =============================================================================

/// Parses a participant count (whole number >= 1).
pub fn parse_people(text: &str) -> Result<usize, ParseError> {
    match text.trim().parse::<usize>() {
        Ok(people) if people >= 1 => Ok(people),
        _ => Err(ParseError::InvalidPeople {
            input: text.to_string(),
        }),
    }
}

/// Parses a comma-separated weight list ("2,1,1" or "1.5,1,0.5").
pub fn parse_weights(text: &str) -> Result<Vec<Decimal>, ParseError> {
    let invalid = || ParseError::InvalidWeights {
        input: text.to_string(),
    };

    let weights = text
        .split(',')
        .map(|part| part.trim().parse::<Decimal>().map_err(|_| invalid()))
        .collect::<Result<Vec<Decimal>, ParseError>>()?;

    if weights.is_empty() || weights.iter().any(|w| *w <= Decimal::ZERO) {
        return Err(invalid());
    }

    Ok(weights)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money_permissive_variants() {
        assert_eq!(parse_money("$1,234.56", false).unwrap().cents(), 123456);
        assert_eq!(parse_money(" 1234.56 $", false).unwrap().cents(), 123456);
        assert_eq!(parse_money(" .5 ", false).unwrap().cents(), 50);
        assert_eq!(parse_money("$ 1,234.5", false).unwrap().cents(), 123450);
    }

    #[test]
    fn test_parse_money_rounds_half_up_to_cents() {
        assert_eq!(parse_money("1.005", false).unwrap().cents(), 101);
        assert_eq!(parse_money("1.004", false).unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_money_strict_validation() {
        assert_eq!(parse_money("$1,234.56", true).unwrap().cents(), 123456);
        assert_eq!(parse_money("1234.5", true).unwrap().cents(), 123450);

        for bad in ["1234.56$", "$12,34.56", "1 234.56", "$.50."] {
            assert!(
                matches!(parse_money(bad, true), Err(ParseError::StrictMoney { .. })),
                "strict should reject: {bad}"
            );
        }
    }

    #[test]
    fn test_parse_money_rejects_garbage_and_negatives() {
        assert!(matches!(
            parse_money("abc", false),
            Err(ParseError::InvalidMoney { .. })
        ));
        assert!(matches!(
            parse_money("-5.00", false),
            Err(ParseError::NegativeMoney { .. })
        ));
    }

    #[test]
    fn test_parse_percentage_clamps_and_spaces() {
        assert_eq!(parse_percentage("18.567%").unwrap().bps(), 1857);
        assert_eq!(parse_percentage("15 %").unwrap().bps(), 1500);
        assert_eq!(parse_percentage("100").unwrap().bps(), 10000);

        assert!(matches!(
            parse_percentage("120%"),
            Err(ParseError::PercentageOutOfRange { .. })
        ));
        assert!(matches!(
            parse_percentage("tip"),
            Err(ParseError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn test_parse_people() {
        assert_eq!(parse_people("3").unwrap(), 3);
        assert_eq!(parse_people(" 12 ").unwrap(), 12);
        assert!(parse_people("0").is_err());
        assert!(parse_people("two").is_err());
    }

    #[test]
    fn test_parse_weights() {
        assert_eq!(
            parse_weights("2,1,1").unwrap(),
            vec![Decimal::from(2), Decimal::ONE, Decimal::ONE]
        );
        assert_eq!(
            parse_weights("1.5, 1, 0.5").unwrap(),
            vec![Decimal::new(15, 1), Decimal::ONE, Decimal::new(5, 1)]
        );
        assert!(parse_weights("2,0,1").is_err());
        assert!(parse_weights("2,,1").is_err());
        assert!(parse_weights("a,b").is_err());
    }
}
