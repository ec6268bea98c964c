//! # Domain Types
//!
//! Core domain types for the bill-split allocator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  SplitRequest   │   │   SplitResult   │   │   TipPercent    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  subtotal       │   │  tip            │   │  bps (u32)      │       │
//! │  │  tax_amount     │   │  grand_total    │   │  1825 = 18.25%  │       │
//! │  │  tip_percent    │   │  per_person[]   │   └─────────────────┘       │
//! │  │  weights[]      │   └─────────────────┘                             │
//! │  │  policy flags   │                                                   │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │  RoundingMode   │   │   Granularity   │       │
//! │  ┌─────────────────┐   │  ─────────────  │   │  ─────────────  │       │
//! │  │    TipBasis     │   │  Nearest        │   │  Cent   (0.01)  │       │
//! │  │  ─────────────  │   │  Up             │   │  Nickel (0.05)  │       │
//! │  │  PreTax         │   │  Down           │   │  Quarter (0.25) │       │
//! │  │  PostTax        │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All policy travels inside `SplitRequest`. There is no ambient
//! configuration: two identical requests always produce identical results.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SplitError;
use crate::money::Money;

/// Upper bound of a valid tip percentage, in basis points (100%).
pub const MAX_TIP_BPS: u32 = 10_000;

// =============================================================================
// Tip Percent
// =============================================================================

/// Tip percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so a `u32` of basis points *is* a
/// percentage carried to exactly two decimal places. That matches the
/// allocator's contract (percent precision is clamped to two decimals
/// before calculation) without ever touching floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TipPercent(u32);

impl TipPercent {
    /// Creates a tip percentage from basis points.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::types::TipPercent;
    ///
    /// let pct = TipPercent::from_bps(1800); // 18%
    /// assert_eq!(pct.bps(), 1800);
    /// ```
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TipPercent(bps)
    }

    /// Creates a tip percentage from an exact decimal value in [0, 100].
    ///
    /// The value is quantized to two decimal places with HALF-UP rounding
    /// before use, then rejected if it falls outside the valid range.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tipsplit_core::types::TipPercent;
    ///
    /// let pct = TipPercent::from_decimal(Decimal::new(18567, 3)).unwrap();
    /// assert_eq!(pct.bps(), 1857); // 18.567% → 18.57%
    ///
    /// assert!(TipPercent::from_decimal(Decimal::from(120)).is_err());
    /// ```
    pub fn from_decimal(value: Decimal) -> Result<Self, SplitError> {
        let scaled = (value * Decimal::from(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        match scaled.to_u32() {
            Some(bps) if bps <= MAX_TIP_BPS => Ok(TipPercent(bps)),
            // None covers negatives and values too large for u32
            _ => Err(SplitError::InvalidPercentage { value }),
        }
    }

    /// Returns the percentage in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tip.
    #[inline]
    pub const fn zero() -> Self {
        TipPercent(0)
    }
}

impl Default for TipPercent {
    fn default() -> Self {
        TipPercent::zero()
    }
}

/// Renders the percentage with up to two decimals, trimming trailing zeros
/// ("18", "18.5", "18.57").
impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}")
        }
    }
}

// =============================================================================
// Policy Enums
// =============================================================================

/// What the tip percentage is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipBasis {
    /// Tip on the pre-tax subtotal (the common convention).
    PreTax,
    /// Tip on subtotal + tax.
    PostTax,
}

impl TipBasis {
    /// Human label used in the rendered results ("pre-tax" / "post-tax").
    pub const fn label(&self) -> &'static str {
        match self {
            TipBasis::PreTax => "pre-tax",
            TipBasis::PostTax => "post-tax",
        }
    }
}

impl Default for TipBasis {
    fn default() -> Self {
        TipBasis::PreTax
    }
}

/// How a per-person share is pushed onto the granularity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to the nearest step; ties round away from zero.
    /// Shares are non-negative, so a tie always rounds up.
    Nearest,
    /// Round up to the next step (ceiling).
    Up,
    /// Round down to the previous step (floor).
    Down,
}

impl RoundingMode {
    /// Canonical textual form ("nearest", "up", "down").
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Nearest => "nearest",
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
        }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::Nearest
    }
}

/// The rounding step applied to per-person shares.
///
/// A closed set on purpose: these are the only grids the allocator supports,
/// and the weighted path supports only `Cent` (see the split module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Exact cents (0.01) - the default, and the only weighted-split option.
    Cent,
    /// Nearest nickel (0.05).
    Nickel,
    /// Nearest quarter (0.25).
    Quarter,
}

impl Granularity {
    /// The step size in cents.
    #[inline]
    pub const fn step_cents(&self) -> i64 {
        match self {
            Granularity::Cent => 1,
            Granularity::Nickel => 5,
            Granularity::Quarter => 25,
        }
    }

    /// Canonical textual form ("0.01", "0.05", "0.25").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Granularity::Cent => "0.01",
            Granularity::Nickel => "0.05",
            Granularity::Quarter => "0.25",
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Cent
    }
}

// =============================================================================
// Split Request
// =============================================================================

/// Immutable input to the allocator. Built fresh per invocation, used once.
///
/// The weights sequence defines the participants: one positive decimal weight
/// per person, in seating order. All-equal weights (the common "split N ways"
/// case) take the equal path; anything else takes the weighted path.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Bill subtotal before tax.
    pub subtotal_before_tax: Money,
    /// Tax amount (already a currency amount, not a rate).
    pub tax_amount: Money,
    /// Tip percentage in [0, 100].
    pub tip_percent: TipPercent,
    /// Whether the tip is computed on the pre-tax or post-tax amount.
    pub tip_basis: TipBasis,
    /// One positive weight per participant, in order.
    pub weights: Vec<Decimal>,
    /// Rounding mode for the equal path.
    pub rounding_mode: RoundingMode,
    /// Rounding step for the equal path.
    pub granularity: Granularity,
}

impl SplitRequest {
    /// Builds a request that splits equally across `people` participants.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    /// use tipsplit_core::types::*;
    ///
    /// let req = SplitRequest::even(
    ///     Money::from_cents(11322), // $113.22 subtotal
    ///     Money::from_cents(1023),  // $10.23 tax
    ///     TipPercent::from_bps(1800),
    ///     TipBasis::PreTax,
    ///     3,
    ///     RoundingMode::Nearest,
    ///     Granularity::Cent,
    /// );
    /// assert_eq!(req.weights.len(), 3);
    /// ```
    pub fn even(
        subtotal_before_tax: Money,
        tax_amount: Money,
        tip_percent: TipPercent,
        tip_basis: TipBasis,
        people: usize,
        rounding_mode: RoundingMode,
        granularity: Granularity,
    ) -> Self {
        SplitRequest {
            subtotal_before_tax,
            tax_amount,
            tip_percent,
            tip_basis,
            weights: vec![Decimal::ONE; people],
            rounding_mode,
            granularity,
        }
    }

    /// Builds a weighted request. Weighted splits stay at cent precision,
    /// so no granularity parameter exists on this constructor.
    pub fn weighted(
        subtotal_before_tax: Money,
        tax_amount: Money,
        tip_percent: TipPercent,
        tip_basis: TipBasis,
        weights: Vec<Decimal>,
    ) -> Self {
        SplitRequest {
            subtotal_before_tax,
            tax_amount,
            tip_percent,
            tip_basis,
            weights,
            rounding_mode: RoundingMode::Nearest,
            granularity: Granularity::Cent,
        }
    }

    /// Number of participants.
    #[inline]
    pub fn people(&self) -> usize {
        self.weights.len()
    }
}

// =============================================================================
// Split Result
// =============================================================================

/// Finalized split produced by the allocator.
///
/// Invariant (exact-sum): `per_person` sums to `grand_total` exactly, for
/// every valid request, regardless of rounding mode or granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitResult {
    /// Computed tip amount.
    pub tip: Money,
    /// `subtotal + tax + tip`, exact.
    pub grand_total: Money,
    /// One share per participant, same order as the request weights.
    pub per_person: Vec<Money>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percent_from_bps() {
        let pct = TipPercent::from_bps(1800);
        assert_eq!(pct.bps(), 1800);
    }

    #[test]
    fn test_tip_percent_from_decimal_quantizes_half_up() {
        // 18.567% → 18.57%
        let pct = TipPercent::from_decimal(Decimal::new(18567, 3)).unwrap();
        assert_eq!(pct.bps(), 1857);

        // 18.565% → 18.57% (HALF-UP at the second decimal)
        let pct = TipPercent::from_decimal(Decimal::new(18565, 3)).unwrap();
        assert_eq!(pct.bps(), 1857);
    }

    #[test]
    fn test_tip_percent_bounds() {
        assert!(TipPercent::from_decimal(Decimal::ZERO).is_ok());
        assert!(TipPercent::from_decimal(Decimal::from(100)).is_ok());
        assert!(TipPercent::from_decimal(Decimal::from(120)).is_err());
        assert!(TipPercent::from_decimal(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_tip_percent_display_trims_zeros() {
        assert_eq!(TipPercent::from_bps(1800).to_string(), "18");
        assert_eq!(TipPercent::from_bps(1850).to_string(), "18.5");
        assert_eq!(TipPercent::from_bps(1857).to_string(), "18.57");
        assert_eq!(TipPercent::from_bps(0).to_string(), "0");
    }

    #[test]
    fn test_granularity_steps() {
        assert_eq!(Granularity::Cent.step_cents(), 1);
        assert_eq!(Granularity::Nickel.step_cents(), 5);
        assert_eq!(Granularity::Quarter.step_cents(), 25);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TipBasis::default(), TipBasis::PreTax);
        assert_eq!(RoundingMode::default(), RoundingMode::Nearest);
        assert_eq!(Granularity::default(), Granularity::Cent);
    }

    #[test]
    fn test_split_result_serializes() {
        let result = SplitResult {
            tip: Money::from_cents(2038),
            grand_total: Money::from_cents(14383),
            per_person: vec![Money::from_cents(4794), Money::from_cents(9589)],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["tip"], 2038);
        assert_eq!(value["per_person"][1], 9589);
    }

    #[test]
    fn test_even_request_has_unit_weights() {
        let req = SplitRequest::even(
            Money::from_cents(1000),
            Money::zero(),
            TipPercent::from_bps(2000),
            TipBasis::PreTax,
            4,
            RoundingMode::Nearest,
            Granularity::Cent,
        );
        assert_eq!(req.people(), 4);
        assert!(req.weights.iter().all(|w| *w == Decimal::ONE));
    }
}
