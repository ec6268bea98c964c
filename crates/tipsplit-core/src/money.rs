//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a naive bill splitter:                                              │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents / 3 = 333 cents (×3 = 999 cents)                          │
//! │    We KNOW where every cent went, and assign the leftover explicitly    │
//! │    (see the split module for the exact-sum guarantee)                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::money::Money;
//!
//! // Create from cents (preferred)
//! let subtotal = Money::from_cents(11322); // $113.22
//!
//! // Arithmetic operations
//! let with_tax = subtotal + Money::from_cents(1023); // $123.45
//!
//! // NEVER do this:
//! // let bad = Money::from_float(113.22); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::TipPercent;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate differences may be negative, and the
///   validation layer needs to *name* a negative input rather than silently
///   saturate it away
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for the JSON/CSV export path
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  SplitRequest.subtotal_before_tax ──┐                                   │
/// │  SplitRequest.tax_amount ───────────┼──► tip ──► grand_total            │
/// │                                     │                  │                │
/// │                                     │                  ▼                │
/// │                                     │        per-person shares          │
/// │                                     │     (sum == grand_total, always)  │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let amount = Money::from_cents(12345); // Represents $123.45
    /// assert_eq!(amount.cents(), 12345);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let amount = Money::from_major_minor(123, 45); // $123.45
    /// assert_eq!(amount.cents(), 12345);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a tip percentage using decimal HALF-UP rounding.
    ///
    /// This is the documented `round2` of the allocator: the product is
    /// rounded to the nearest cent, with the half-cent case rounding up.
    /// The same rule is used everywhere money is rounded in this crate, so
    /// the tip computation and the share rounding can never disagree.
    ///
    /// ## Implementation
    /// Integer math with an i128 intermediate: `(cents × bps + 5000) / 10000`.
    /// The `+5000` term is half the divisor, which is exactly HALF-UP for the
    /// non-negative bases the validation layer guarantees.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    /// use tipsplit_core::types::TipPercent;
    ///
    /// let base = Money::from_cents(11322);      // $113.22
    /// let pct = TipPercent::from_bps(1800);     // 18%
    ///
    /// // $113.22 × 18% = $20.3796 → rounds to $20.38
    /// assert_eq!(base.tip_at(pct).cents(), 2038);
    /// ```
    pub fn tip_at(&self, percent: TipPercent) -> Money {
        // i128 prevents overflow on large amounts
        let tip_cents = (self.0 as i128 * percent.bps() as i128 + 5_000) / 10_000;
        Money::from_cents(tip_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is a fixed `$D.CC` rendering used for debugging and the plain
/// CLI output. Locale-aware formatting is deliberately not this crate's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation over an iterator of shares.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
