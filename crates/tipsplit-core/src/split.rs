//! # Split Module
//!
//! The allocator: tip computation and per-person share allocation.
//!
//! ## The Exact-Sum Guarantee
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every valid request satisfies:                                         │
//! │                                                                         │
//! │      sum(per_person) == grand_total        (to the cent, always)        │
//! │                                                                         │
//! │  Two allocation paths uphold it:                                        │
//! │                                                                         │
//! │  Equal path (all weights equal)                                         │
//! │  ├── q = grand_total / N (unrounded)                                    │
//! │  ├── first N-1 shares: q rounded onto the granularity grid              │
//! │  └── last share: grand_total - sum(first N-1)   ← absorbs the residual  │
//! │                                                                         │
//! │  Weighted path (weights differ)                                         │
//! │  ├── base_i = floor(grand_total × w_i / Σw) in cents                    │
//! │  └── shortfall handed out a cent at a time, largest discarded           │
//! │      remainder first, ties to the lowest index                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic is integer arithmetic (i128 intermediates). Weights enter
//! as exact decimals and are normalized to integer numerators over a common
//! power-of-ten denominator, so even the weighted remainder comparison is an
//! exact integer comparison.

use rust_decimal::Decimal;

use crate::error::{CoreResult, SplitError};
use crate::money::Money;
use crate::types::{Granularity, RoundingMode, SplitRequest, SplitResult, TipBasis, TipPercent};
use crate::validation;

// =============================================================================
// Tip Computation
// =============================================================================

/// Computes the tip amount for a given basis.
///
/// - `PreTax`: tip on the subtotal alone
/// - `PostTax`: tip on subtotal + tax
///
/// Rounding is decimal HALF-UP at the cent (see [`Money::tip_at`]).
///
/// ## Example
/// ```rust
/// use tipsplit_core::money::Money;
/// use tipsplit_core::split::compute_tip;
/// use tipsplit_core::types::{TipBasis, TipPercent};
///
/// let subtotal = Money::from_cents(11322); // $113.22
/// let tax = Money::from_cents(1023);       // $10.23
/// let pct = TipPercent::from_bps(1800);    // 18%
///
/// // Pre-tax: 18% of $113.22 = $20.38
/// assert_eq!(compute_tip(subtotal, tax, pct, TipBasis::PreTax).cents(), 2038);
///
/// // Post-tax: 18% of $123.45 = $22.22
/// assert_eq!(compute_tip(subtotal, tax, pct, TipBasis::PostTax).cents(), 2222);
/// ```
pub fn compute_tip(
    subtotal_before_tax: Money,
    tax_amount: Money,
    tip_percent: TipPercent,
    tip_basis: TipBasis,
) -> Money {
    let base = match tip_basis {
        TipBasis::PreTax => subtotal_before_tax,
        TipBasis::PostTax => subtotal_before_tax + tax_amount,
    };
    base.tip_at(tip_percent)
}

// =============================================================================
// Share Allocation
// =============================================================================

/// Splits `grand_total` into one share per weight.
///
/// Dispatches to the equal path when every weight is the same value, and to
/// the weighted path otherwise. Validates its own inputs, so it is safe to
/// call directly with a total obtained elsewhere.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use tipsplit_core::money::Money;
/// use tipsplit_core::split::allocate_shares;
/// use tipsplit_core::types::{Granularity, RoundingMode};
///
/// let total = Money::from_cents(12345); // $123.45
/// let weights = vec![Decimal::from(2), Decimal::ONE, Decimal::ONE];
///
/// let shares =
///     allocate_shares(total, &weights, RoundingMode::Nearest, Granularity::Cent).unwrap();
/// assert_eq!(
///     shares,
///     vec![
///         Money::from_cents(6173), // $61.72 base + the remainder cent
///         Money::from_cents(3086),
///         Money::from_cents(3086),
///     ]
/// );
/// ```
pub fn allocate_shares(
    grand_total: Money,
    weights: &[Decimal],
    rounding_mode: RoundingMode,
    granularity: Granularity,
) -> CoreResult<Vec<Money>> {
    validation::validate_weights(weights)?;
    validation::validate_granularity(granularity, weights)?;
    validation::validate_amount("grand total", grand_total)?;

    if validation::weights_all_equal(weights) {
        Ok(allocate_equal(
            grand_total,
            weights.len(),
            rounding_mode,
            granularity,
        ))
    } else {
        allocate_weighted(grand_total, weights)
    }
}

impl SplitRequest {
    /// Runs the full allocation: validate, compute the tip, derive the grand
    /// total, and allocate per-person shares.
    ///
    /// Pure and deterministic, errors surface synchronously, and no partial
    /// result is ever returned.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    /// use tipsplit_core::types::*;
    ///
    /// let req = SplitRequest::even(
    ///     Money::from_cents(11322),
    ///     Money::from_cents(1023),
    ///     TipPercent::from_bps(1800),
    ///     TipBasis::PreTax,
    ///     3,
    ///     RoundingMode::Nearest,
    ///     Granularity::Cent,
    /// );
    ///
    /// let result = req.compute().unwrap();
    /// assert_eq!(result.tip, Money::from_cents(2038));
    /// assert_eq!(result.grand_total, Money::from_cents(14383));
    /// assert_eq!(result.per_person.iter().copied().sum::<Money>(), result.grand_total);
    /// ```
    pub fn compute(&self) -> CoreResult<SplitResult> {
        validation::validate_request(self)?;

        let tip = compute_tip(
            self.subtotal_before_tax,
            self.tax_amount,
            self.tip_percent,
            self.tip_basis,
        );
        let grand_total = self.subtotal_before_tax + self.tax_amount + tip;
        let per_person =
            allocate_shares(grand_total, &self.weights, self.rounding_mode, self.granularity)?;

        debug_assert_eq!(per_person.iter().copied().sum::<Money>(), grand_total);

        Ok(SplitResult {
            tip,
            grand_total,
            per_person,
        })
    }
}

// =============================================================================
// Equal Path
// =============================================================================

/// Equal split: first N-1 shares are the unrounded quotient pushed onto the
/// granularity grid; the last share absorbs the residual.
fn allocate_equal(
    grand_total: Money,
    people: usize,
    rounding_mode: RoundingMode,
    granularity: Granularity,
) -> Vec<Money> {
    let total = grand_total.cents();

    // Sole diner pays the whole bill, whatever the grid says.
    if people == 1 {
        return vec![grand_total];
    }

    let step = granularity.step_cents();
    let share = round_quotient(total, people as i64, step, rounding_mode);
    let mut leading = vec![share; people - 1];

    // Up/Nearest rounding of a small total can overshoot the grand total.
    // Walk the overshoot back so the last share never goes negative: each
    // leading share gives up at most one step, and never drops below zero.
    let mut overshoot = leading.iter().sum::<i64>() - total;
    if overshoot > 0 {
        for cents in leading.iter_mut() {
            if overshoot == 0 {
                break;
            }
            let give_back = overshoot.min(step).min(*cents);
            *cents -= give_back;
            overshoot -= give_back;
        }
    }

    let leading_sum: i64 = leading.iter().sum();
    let mut shares: Vec<Money> = leading.into_iter().map(Money::from_cents).collect();
    shares.push(Money::from_cents(total - leading_sum));
    shares
}

/// Rounds the exact quotient `total / people` onto a grid of `step` cents.
///
/// Works on the rational value directly (numerator `total`, denominator
/// `people × step`), so no intermediate cent rounding sneaks in before the
/// grid rounding. `Nearest` ties round away from zero; totals are validated
/// non-negative, so a tie always rounds up.
fn round_quotient(total_cents: i64, people: i64, step_cents: i64, mode: RoundingMode) -> i64 {
    let t = total_cents as i128;
    let d = people as i128 * step_cents as i128;
    let steps = match mode {
        RoundingMode::Nearest => (2 * t + d) / (2 * d),
        RoundingMode::Up => (t + d - 1) / d,
        RoundingMode::Down => t / d,
    };
    (steps * step_cents as i128) as i64
}

// =============================================================================
// Weighted Path
// =============================================================================

/// Weighted split at cent precision: floor every ideal share to cents, then
/// hand the shortfall out one cent at a time by largest discarded remainder,
/// ties broken by lowest participant index.
///
/// Weights whose combined magnitude cannot be represented in i128 (e.g. a
/// 29-digit weight next to a 28-decimal-place one) are rejected rather than
/// allowed to wrap.
fn allocate_weighted(grand_total: Money, weights: &[Decimal]) -> CoreResult<Vec<Money>> {
    let numerators = weight_numerators(weights)?;
    let weight_sum = numerators
        .iter()
        .try_fold(0_i128, |sum, n| sum.checked_add(*n))
        .ok_or_else(weights_out_of_range)?;
    let total = grand_total.cents() as i128;

    let mut shares: Vec<i64> = Vec::with_capacity(weights.len());
    let mut remainders: Vec<(usize, i128)> = Vec::with_capacity(weights.len());
    for (index, numerator) in numerators.iter().enumerate() {
        // ideal_i = total × w_i / Σw; keep numerator and residue exact
        let scaled = total
            .checked_mul(*numerator)
            .ok_or_else(weights_out_of_range)?;
        shares.push((scaled / weight_sum) as i64);
        remainders.push((index, scaled % weight_sum));
    }

    // Truncation always leaves 0..people-1 whole cents on the table.
    let shortfall = grand_total.cents() - shares.iter().sum::<i64>();
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for &(index, _) in remainders.iter().take(shortfall as usize) {
        shares[index] += 1;
    }

    Ok(shares.into_iter().map(Money::from_cents).collect())
}

/// Normalizes exact decimal weights to integer numerators over a common
/// power-of-ten denominator, reduced by their GCD to keep magnitudes small.
///
/// `[2, 1, 1]` → `[2, 1, 1]`; `[1.5, 1.5, 3]` → `[1, 1, 2]`.
///
/// Errors when a numerator would exceed i128, which takes a weight spread of
/// roughly 38 orders of magnitude.
fn weight_numerators(weights: &[Decimal]) -> CoreResult<Vec<i128>> {
    let normalized: Vec<Decimal> = weights.iter().map(|w| w.normalize()).collect();
    let max_scale = normalized.iter().map(Decimal::scale).max().unwrap_or(0);

    // Decimal scales top out at 28, so the power itself always fits; only
    // the mantissa scaling can overflow.
    let mut numerators = Vec::with_capacity(normalized.len());
    for w in &normalized {
        let numerator = w
            .mantissa()
            .checked_mul(10_i128.pow(max_scale - w.scale()))
            .ok_or_else(weights_out_of_range)?;
        numerators.push(numerator);
    }

    let common = numerators.iter().copied().fold(0, gcd);
    if common > 1 {
        for numerator in numerators.iter_mut() {
            *numerator /= common;
        }
    }

    Ok(numerators)
}

fn weights_out_of_range() -> SplitError {
    SplitError::InvalidParticipants {
        reason: "weights span too many orders of magnitude to compare exactly".to_string(),
    }
}

fn gcd(a: i128, b: i128) -> i128 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
