//! # tipsplit-core: Pure Allocation Logic for tipsplit
//!
//! This crate is the **heart** of tipsplit. It contains the bill-split
//! allocator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       tipsplit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      apps/cli (`tipsplit`)                       │   │
//! │  │   arg parsing ──► money/percent parsing ──► text/JSON/CSV out   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one call per invocation                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tipsplit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   split   │  │ validation│  │   │
//! │  │   │  Request  │  │   Money   │  │ Allocator │  │   rules   │  │   │
//! │  │   │  Result   │  │  rounding │  │ two paths │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONFIG • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SplitRequest, SplitResult, policy enums)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`split`] - The allocator: tip computation and share allocation
//! - [`error`] - Typed allocator errors
//! - [`validation`] - Request validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every invocation is deterministic - same request,
//!    same result
//! 2. **No I/O**: file system, network, terminal, and config access are
//!    FORBIDDEN here; policy travels inside the request value
//! 3. **Integer Money**: all monetary values are cents (i64); weights are
//!    exact decimals reduced to integer ratios - binary floating point never
//!    enters the pipeline
//! 4. **Exact Sums**: per-person shares always reconstruct the grand total
//!    to the cent, whatever the rounding mode or granularity
//!
//! Single-threaded and synchronous with no suspension points; invocations
//! share no state, so concurrent callers need no coordination.
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::money::Money;
//! use tipsplit_core::types::*;
//!
//! let request = SplitRequest::even(
//!     Money::from_cents(11322),   // $113.22 subtotal
//!     Money::from_cents(1023),    // $10.23 tax
//!     TipPercent::from_bps(1800), // 18%
//!     TipBasis::PreTax,
//!     3,
//!     RoundingMode::Nearest,
//!     Granularity::Cent,
//! );
//!
//! let result = request.compute().unwrap();
//! let recombined: Money = result.per_person.iter().copied().sum();
//! assert_eq!(recombined, result.grand_total);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod split;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tipsplit_core::Money` instead of
// `use tipsplit_core::money::Money`

pub use error::{CoreResult, SplitError};
pub use money::Money;
pub use split::{allocate_shares, compute_tip};
pub use types::*;
