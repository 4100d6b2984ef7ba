//! # Validation Module
//!
//! Structural validation of invoices before pricing, plus the range checks
//! used when loading coupon configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Validation Rules                           │
//! │                                                                         │
//! │  invoice absent? ──► [Missing]  (stop, nothing else is checked)        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  invoice_id empty? ──────► MissingInvoiceId                            │
//! │  customer_id empty? ─────► MissingCustomerId                           │
//! │  items empty? ───────────► NoItems                                     │
//! │        │                                                                │
//! │        ▼  for EVERY item (never short-circuits)                        │
//! │  sku empty? ─────────────► MissingSku                                  │
//! │  qty <= 0? ──────────────► InvalidQuantity { sku }                     │
//! │  unit_price < 0? ────────► InvalidPrice { sku }                        │
//! │  category unknown? ──────► UnknownCategory { sku }                     │
//! │  qty × price overflows? ─► AmountTooLarge { sku }                      │
//! │        │                                                                │
//! │        ▼  only if nothing above fired                                   │
//! │  subtotal or fragile fee                                                │
//! │  over MAX_INVOICE_AMOUNT? ► InvoiceTooLarge                            │
//! │                                                                         │
//! │  Result: every problem, in the order above                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Emptiness is exact: `" "` is a present (if odd) identifier.
//!
//! ## Usage
//! ```rust
//! use invoice_core::validation::validate_invoice;
//! use invoice_core::error::InvoiceProblem;
//!
//! assert_eq!(validate_invoice(None), vec![InvoiceProblem::Missing]);
//! ```

use crate::calculator::aggregate_lines;
use crate::error::{ConfigError, ConfigResult, InvoiceProblem};
use crate::money::Money;
use crate::types::{Invoice, LineItem};

/// Upper bound for any rate: 100%.
pub const MAX_RATE_BPS: u32 = 10_000;

/// Largest subtotal (and largest fragile fee) an invoice may carry.
///
/// With every rate capped at 100%, a quarter of the i64 range leaves room
/// for discount, tax and shipping without overflowing the total.
pub const MAX_INVOICE_AMOUNT: Money = Money::from_cents(i64::MAX / 4);

// =============================================================================
// Invoice Validators
// =============================================================================

/// Collects every structural problem with an invoice.
///
/// An empty result means the invoice can be priced.
pub fn validate_invoice(invoice: Option<&Invoice>) -> Vec<InvoiceProblem> {
    let Some(invoice) = invoice else {
        return vec![InvoiceProblem::Missing];
    };

    let mut problems = Vec::new();

    if invoice.invoice_id.is_empty() {
        problems.push(InvoiceProblem::MissingInvoiceId);
    }
    if invoice.customer_id.is_empty() {
        problems.push(InvoiceProblem::MissingCustomerId);
    }
    if invoice.items.is_empty() {
        problems.push(InvoiceProblem::NoItems);
    }

    for item in &invoice.items {
        problems.extend(validate_line_item(item));
    }

    if problems.is_empty() && aggregate_lines(&invoice.items).is_none() {
        problems.push(InvoiceProblem::InvoiceTooLarge);
    }

    problems
}

/// Checks a single line item. All rules are evaluated; the overflow check
/// only applies once quantity and price are otherwise valid.
///
/// ## Example
/// ```rust
/// use invoice_core::money::Money;
/// use invoice_core::types::LineItem;
/// use invoice_core::validation::validate_line_item;
///
/// let ok = LineItem::new("B1", "book", Money::from_cents(100), 1);
/// assert!(validate_line_item(&ok).is_empty());
///
/// let bad = LineItem::new("X1", "toy", Money::from_cents(-1), 0);
/// assert_eq!(validate_line_item(&bad).len(), 3);
/// ```
pub fn validate_line_item(item: &LineItem) -> Vec<InvoiceProblem> {
    let mut problems = Vec::new();

    if item.sku.is_empty() {
        problems.push(InvoiceProblem::MissingSku);
    }
    if item.qty <= 0 {
        problems.push(InvoiceProblem::InvalidQuantity {
            sku: item.sku.clone(),
        });
    }
    if item.unit_price.is_negative() {
        problems.push(InvoiceProblem::InvalidPrice {
            sku: item.sku.clone(),
        });
    }
    if item.category().is_none() {
        problems.push(InvoiceProblem::UnknownCategory {
            sku: item.sku.clone(),
        });
    }
    if item.qty > 0
        && !item.unit_price.is_negative()
        && (item.line_total().is_none() || item.fragile_fee().is_none())
    {
        problems.push(InvoiceProblem::AmountTooLarge {
            sku: item.sku.clone(),
        });
    }

    problems
}

// =============================================================================
// Configuration Validators
// =============================================================================

/// Validates a coupon code. Codes are matched after trimming, so a code that
/// trims to nothing could never be redeemed.
pub fn validate_coupon_code(code: &str) -> ConfigResult<()> {
    if code.trim().is_empty() {
        return Err(ConfigError::EmptyCouponCode);
    }

    Ok(())
}

/// Validates a coupon rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(code: &str, bps: u32) -> ConfigResult<()> {
    if bps > MAX_RATE_BPS {
        return Err(ConfigError::InvalidRate {
            code: code.to_string(),
            bps,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn book(sku: &str) -> LineItem {
        LineItem::new(sku, "book", Money::from_cents(1000), 1)
    }

    fn invoice(items: Vec<LineItem>) -> Invoice {
        Invoice::new("INV-1", "C-1", "TH", "regular", items)
    }

    #[test]
    fn test_valid_invoice_has_no_problems() {
        assert!(validate_invoice(Some(&invoice(vec![book("B1")]))).is_empty());
    }

    #[test]
    fn test_missing_invoice_stops_immediately() {
        assert_eq!(validate_invoice(None), vec![InvoiceProblem::Missing]);
    }

    #[test]
    fn test_header_problems_are_all_reported() {
        let inv = Invoice::new("", "", "TH", "regular", vec![]);
        assert_eq!(
            validate_invoice(Some(&inv)),
            vec![
                InvoiceProblem::MissingInvoiceId,
                InvoiceProblem::MissingCustomerId,
                InvoiceProblem::NoItems,
            ]
        );
    }

    #[test]
    fn test_whitespace_ids_are_not_empty() {
        let inv = Invoice::new(" ", " ", "TH", "regular", vec![book("B1")]);
        assert!(validate_invoice(Some(&inv)).is_empty());
    }

    #[test]
    fn test_item_problems_collected_across_items() {
        let inv = invoice(vec![
            LineItem::new("A1", "book", Money::from_cents(100), 0),
            book("OK"),
            LineItem::new("B2", "toy", Money::from_cents(-5), 2),
        ]);

        assert_eq!(
            validate_invoice(Some(&inv)),
            vec![
                InvoiceProblem::InvalidQuantity { sku: "A1".to_string() },
                InvoiceProblem::InvalidPrice { sku: "B2".to_string() },
                InvoiceProblem::UnknownCategory { sku: "B2".to_string() },
            ]
        );
    }

    #[test]
    fn test_missing_sku_still_checks_other_rules() {
        let item = LineItem::new("", "gadget", Money::from_cents(100), -1);
        assert_eq!(
            validate_line_item(&item),
            vec![
                InvoiceProblem::MissingSku,
                InvoiceProblem::InvalidQuantity { sku: String::new() },
                InvoiceProblem::UnknownCategory { sku: String::new() },
            ]
        );
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let item = LineItem::new("FREE", "other", Money::zero(), 1);
        assert!(validate_line_item(&item).is_empty());
    }

    #[test]
    fn test_line_value_overflow_names_sku() {
        let inv = invoice(vec![LineItem::new(
            "B1",
            "book",
            Money::from_cents(i64::MAX / 2 + 1),
            2,
        )]);
        assert_eq!(
            validate_invoice(Some(&inv)),
            vec![InvoiceProblem::AmountTooLarge { sku: "B1".to_string() }]
        );
    }

    #[test]
    fn test_fragile_fee_overflow_names_sku() {
        let glass = LineItem::new("G1", "other", Money::zero(), i64::MAX / 100).fragile();
        assert_eq!(
            validate_line_item(&glass),
            vec![InvoiceProblem::AmountTooLarge { sku: "G1".to_string() }]
        );
    }

    #[test]
    fn test_invalid_qty_skips_overflow_check() {
        let item = LineItem::new("B1", "book", Money::from_cents(i64::MAX), -2);
        assert_eq!(
            validate_line_item(&item),
            vec![InvoiceProblem::InvalidQuantity { sku: "B1".to_string() }]
        );
    }

    #[test]
    fn test_invoice_amount_ceiling() {
        let at_limit = LineItem::new("E1", "electronics", MAX_INVOICE_AMOUNT, 1);
        assert!(validate_invoice(Some(&invoice(vec![at_limit.clone()]))).is_empty());

        let one_cent = LineItem::new("E2", "electronics", Money::from_cents(1), 1);
        assert_eq!(
            validate_invoice(Some(&invoice(vec![at_limit.clone(), one_cent]))),
            vec![InvoiceProblem::InvoiceTooLarge]
        );

        // each line fits in i64 but their sum does not
        assert_eq!(
            validate_invoice(Some(&invoice(vec![at_limit.clone(); 5]))),
            vec![InvoiceProblem::InvoiceTooLarge]
        );
    }

    #[test]
    fn test_validate_rate_bps() {
        assert!(validate_rate_bps("X", 0).is_ok());
        assert!(validate_rate_bps("X", 1000).is_ok());
        assert!(validate_rate_bps("X", 10_000).is_ok());
        assert!(matches!(
            validate_rate_bps("X", 10_001),
            Err(ConfigError::InvalidRate { bps: 10_001, .. })
        ));
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("WELCOME10").is_ok());
        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("   ").is_err());
    }
}
