//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PricingError                                                           │
//! │  ├── InvalidInvoice(Vec<InvoiceProblem>)  - validation failed          │
//! │  └── Config(ConfigError)                  - bad coupon configuration   │
//! │                                                                         │
//! │  InvoiceProblem   - one per failed validation rule                     │
//! │  ConfigError      - TOML parse / rate range failures                   │
//! │                                                                         │
//! │  Flow: InvoiceProblem* → PricingError::InvalidInvoice → caller         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, coupon code)
//! 3. Problems stay structured; the joined string is only a rendering
//!
//! Unknown coupons and upgrade suggestions are *not* errors, see
//! [`PricingWarning`](crate::types::PricingWarning).

use thiserror::Error;

// =============================================================================
// Invoice Problem
// =============================================================================

/// A single validation failure.
///
/// `Display` renders the exact user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceProblem {
    /// No invoice was supplied at all. Always reported alone.
    #[error("Invoice is missing")]
    Missing,

    #[error("Missing invoice_id")]
    MissingInvoiceId,

    #[error("Missing customer_id")]
    MissingCustomerId,

    #[error("Invoice must contain items")]
    NoItems,

    #[error("Item sku is missing")]
    MissingSku,

    #[error("Invalid qty for {sku}")]
    InvalidQuantity { sku: String },

    #[error("Invalid price for {sku}")]
    InvalidPrice { sku: String },

    #[error("Unknown category for {sku}")]
    UnknownCategory { sku: String },

    /// The line value or fragile surcharge does not fit in i64 cents.
    #[error("Amount too large for {sku}")]
    AmountTooLarge { sku: String },

    /// Subtotal or fragile fee is above [`MAX_INVOICE_AMOUNT`](crate::validation::MAX_INVOICE_AMOUNT).
    #[error("Invoice amount too large")]
    InvoiceTooLarge,
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by [`InvoiceCalculator`](crate::calculator::InvoiceCalculator).
#[derive(Debug, Error)]
pub enum PricingError {
    /// The invoice failed validation. Carries every problem found, in rule
    /// order; `Display` joins them with `"; "`.
    ///
    /// ## User Workflow
    /// ```text
    /// Invoice { qty: 0, category: "toy", sku: "X1" }
    ///      │
    ///      ▼
    /// InvalidInvoice([InvalidQuantity{X1}, UnknownCategory{X1}])
    ///      │
    ///      ▼
    /// "Invalid qty for X1; Unknown category for X1"
    /// ```
    #[error("{}", join_problems(.0))]
    InvalidInvoice(Vec<InvoiceProblem>),

    /// The calculator configuration was rejected.
    #[error("Invalid pricing configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PricingError {
    /// The structured problems behind an `InvalidInvoice`, empty otherwise.
    pub fn problems(&self) -> &[InvoiceProblem] {
        match self {
            PricingError::InvalidInvoice(problems) => problems,
            PricingError::Config(_) => &[],
        }
    }
}

fn join_problems(problems: &[InvoiceProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Config Error
// =============================================================================

/// Pricing configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse pricing config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Coupon rate outside 0..=10000 bps.
    #[error("coupon {code} has rate {bps} bps, must be between 0 and 10000")]
    InvalidRate { code: String, bps: u32 },

    /// Coupon code is blank after trimming.
    #[error("coupon code must not be blank")]
    EmptyCouponCode,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
