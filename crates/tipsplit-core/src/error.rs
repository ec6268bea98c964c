//! # Error Types
//!
//! Typed errors raised by the allocator.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                       │
//! │  └── SplitError  - invalid request, detected at the single compute call │
//! │                                                                         │
//! │  apps/cli errors                                                        │
//! │  └── usage/parse failures, plus SplitError surfaced verbatim            │
//! │                                                                         │
//! │  Flow: SplitError ──► CLI stderr message ──► exit code 2                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (which field, which value)
//! 3. Errors are enum variants, never String
//! 4. The core never logs or swallows errors; they surface synchronously
//!    from the compute call, with no retry and no partial result

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;
use crate::types::Granularity;

// =============================================================================
// Split Error
// =============================================================================

/// Errors raised by the allocator for an invalid request.
///
/// The computation is pure and deterministic, so none of these are
/// retryable: an erroring request errors forever until the caller fixes it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    /// Weights sequence is empty, or contains a non-positive weight.
    ///
    /// ## When This Occurs
    /// - Caller constructed a request with zero participants
    /// - A weight of `0` or a negative weight slipped past upstream parsing
    #[error("invalid participants: {reason}")]
    InvalidParticipants { reason: String },

    /// A coarse granularity was requested together with non-uniform weights.
    ///
    /// Weighted splits stay at cent precision. Silently ignoring the
    /// requested grid would hand users a cent of unexplained drift, so the
    /// combination is rejected instead.
    #[error("granularity {} is not supported for weighted splits; weighted shares stay at cent precision", granularity.as_str())]
    InvalidGranularityForWeightedSplit { granularity: Granularity },

    /// Tip percent outside [0, 100].
    #[error("tip percent must be between 0 and 100, got {value}")]
    InvalidPercentage { value: Decimal },

    /// Subtotal, tax, or the resulting grand total is negative.
    #[error("{field} must not be negative, got {amount}")]
    NegativeAmount { field: &'static str, amount: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SplitError.
pub type CoreResult<T> = Result<T, SplitError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SplitError::InvalidParticipants {
            reason: "at least one participant is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid participants: at least one participant is required"
        );

        let err = SplitError::InvalidGranularityForWeightedSplit {
            granularity: Granularity::Quarter,
        };
        assert_eq!(
            err.to_string(),
            "granularity 0.25 is not supported for weighted splits; \
             weighted shares stay at cent precision"
        );

        let err = SplitError::NegativeAmount {
            field: "tax amount",
            amount: Money::from_cents(-550),
        };
        assert_eq!(err.to_string(), "tax amount must not be negative, got -$5.50");
    }
}
