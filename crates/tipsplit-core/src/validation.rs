//! # Validation Module
//!
//! Request validation for the allocator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI parsing (apps/cli)                                        │
//! │  ├── Money/percentage string formats, weight list syntax                │
//! │  └── Immediate user feedback with usage text                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (core contract)                                   │
//! │  ├── Weight positivity and participant count                            │
//! │  ├── Non-negative amounts                                               │
//! │  └── Granularity/weight compatibility                                   │
//! │                                                                         │
//! │  The core re-checks everything the CLI already checked: other callers  │
//! │  exist (tests, future front ends) and the exact-sum guarantee is only  │
//! │  meaningful for requests that passed this gate                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::{CoreResult, SplitError};
use crate::money::Money;
use crate::types::{Granularity, SplitRequest};

// =============================================================================
// Weight Validators
// =============================================================================

/// Validates the participant weights sequence.
///
/// ## Rules
/// - Must contain at least one weight (one weight = one participant)
/// - Every weight must be strictly positive
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tipsplit_core::validation::validate_weights;
///
/// assert!(validate_weights(&[Decimal::from(2), Decimal::ONE]).is_ok());
/// assert!(validate_weights(&[]).is_err());
/// assert!(validate_weights(&[Decimal::ZERO]).is_err());
/// ```
pub fn validate_weights(weights: &[Decimal]) -> CoreResult<()> {
    if weights.is_empty() {
        return Err(SplitError::InvalidParticipants {
            reason: "at least one participant is required".to_string(),
        });
    }

    for (index, weight) in weights.iter().enumerate() {
        if *weight <= Decimal::ZERO {
            return Err(SplitError::InvalidParticipants {
                reason: format!("weight {weight} at position {index} is not positive"),
            });
        }
    }

    Ok(())
}

/// Returns true when every weight equals the first one (the equal-split case).
///
/// Comparison is on exact decimal values, so `1`, `1.0` and `1.00` all
/// count as equal.
pub fn weights_all_equal(weights: &[Decimal]) -> bool {
    weights.windows(2).all(|pair| pair[0] == pair[1])
}

/// Validates granularity against the weight shape.
///
/// ## Rules
/// - Equal splits may use any granularity
/// - Weighted splits must stay at cent precision; a coarser grid is a
///   caller-side configuration error and is rejected, never ignored
pub fn validate_granularity(granularity: Granularity, weights: &[Decimal]) -> CoreResult<()> {
    if granularity != Granularity::Cent && !weights_all_equal(weights) {
        return Err(SplitError::InvalidGranularityForWeightedSplit { granularity });
    }

    Ok(())
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates that a monetary input is non-negative.
///
/// ## Example
/// ```rust
/// use tipsplit_core::money::Money;
/// use tipsplit_core::validation::validate_amount;
///
/// assert!(validate_amount("subtotal", Money::from_cents(0)).is_ok());
/// assert!(validate_amount("subtotal", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_amount(field: &'static str, amount: Money) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(SplitError::NegativeAmount { field, amount });
    }

    Ok(())
}

// =============================================================================
// Request Validator
// =============================================================================

/// Validates a full request. Called once at the top of `SplitRequest::compute`.
pub fn validate_request(request: &SplitRequest) -> CoreResult<()> {
    validate_amount("subtotal", request.subtotal_before_tax)?;
    validate_amount("tax amount", request.tax_amount)?;
    validate_weights(&request.weights)?;
    validate_granularity(request.granularity, &request.weights)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_weights() {
        assert!(validate_weights(&[Decimal::ONE]).is_ok());
        assert!(validate_weights(&[Decimal::from(2), Decimal::new(15, 1)]).is_ok());

        assert!(matches!(
            validate_weights(&[]),
            Err(SplitError::InvalidParticipants { .. })
        ));
        assert!(matches!(
            validate_weights(&[Decimal::ONE, Decimal::ZERO]),
            Err(SplitError::InvalidParticipants { .. })
        ));
        assert!(matches!(
            validate_weights(&[Decimal::from(-1)]),
            Err(SplitError::InvalidParticipants { .. })
        ));
    }

    #[test]
    fn test_weights_all_equal() {
        assert!(weights_all_equal(&[Decimal::ONE, Decimal::ONE]));
        // Different representations of the same value still count as equal
        assert!(weights_all_equal(&[Decimal::ONE, Decimal::new(100, 2)]));
        assert!(!weights_all_equal(&[Decimal::from(2), Decimal::ONE]));
        // Degenerate cases
        assert!(weights_all_equal(&[Decimal::from(3)]));
        assert!(weights_all_equal(&[]));
    }

    #[test]
    fn test_validate_granularity() {
        let equal = [Decimal::ONE, Decimal::ONE];
        let weighted = [Decimal::from(2), Decimal::ONE];

        assert!(validate_granularity(Granularity::Quarter, &equal).is_ok());
        assert!(validate_granularity(Granularity::Cent, &weighted).is_ok());

        assert_eq!(
            validate_granularity(Granularity::Nickel, &weighted),
            Err(SplitError::InvalidGranularityForWeightedSplit {
                granularity: Granularity::Nickel
            })
        );
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("tax amount", Money::zero()).is_ok());
        assert_eq!(
            validate_amount("tax amount", Money::from_cents(-5)),
            Err(SplitError::NegativeAmount {
                field: "tax amount",
                amount: Money::from_cents(-5)
            })
        );
    }
}
