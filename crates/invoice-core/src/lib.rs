//! # invoice-core: Pure Invoice Pricing
//!
//! Computes the payable total of a customer invoice from its line items,
//! destination country, membership tier and an optional coupon code.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Embedding service (caller-owned)                  │   │
//! │  │      parse request ──► Invoice ... InvoiceQuote ──► render      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ invoice-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   rules   │  │ validation│  │   │
//! │  │   │  Invoice  │  │   Money   │  │ shipping  │  │  problems │  │   │
//! │  │   │ LineItem  │  │   Rate    │  │ tax, disc │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌────────────────────────────┐               │   │
//! │  │   │  config   │  │ calculator                 │               │   │
//! │  │   │  coupons  │  │ InvoiceCalculator pipeline │               │   │
//! │  │   └───────────┘  └────────────────────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Invoice, LineItem, InvoiceQuote, Rate, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Pricing, validation and configuration errors
//! - [`validation`] - Invoice structure checks
//! - [`rules`] - Shipping, tax and membership discount tables
//! - [`config`] - Coupon table and coupon application
//! - [`calculator`] - The pricing pipeline
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same invoice in, same quote out
//! 2. **No I/O**: the library emits `tracing` events but never installs a subscriber
//! 3. **Integer Money**: all amounts are cents (i64), all rates basis points
//! 4. **Explicit Errors**: validation problems are typed, never bare strings
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::{Invoice, InvoiceCalculator, LineItem, Money};
//!
//! let invoice = Invoice::new(
//!     "INV-2001",
//!     "CUST-42",
//!     "US",
//!     "gold",
//!     vec![LineItem::new("E1", "electronics", Money::from_major_minor(50, 0), 2)],
//! )
//! .with_coupon("WELCOME10");
//!
//! let quote = InvoiceCalculator::new().compute_total(&invoice)?;
//!
//! // $100 + $8 shipping + $6.96 tax - $13 discount
//! assert_eq!(quote.total().to_string(), "$101.96");
//! # Ok::<(), invoice_core::PricingError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod config;
pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::InvoiceCalculator;
pub use config::PricingConfig;
pub use error::{ConfigError, InvoiceProblem, PricingError, PricingResult};
pub use money::Money;
pub use types::*;
