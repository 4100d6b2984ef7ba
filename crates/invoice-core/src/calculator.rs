//! # Invoice Calculator
//!
//! Orchestrates the pricing pipeline for a single invoice.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         compute_total(invoice)                          │
//! │                                                                         │
//! │  1. validate ───────────► problems? ──► Err(InvalidInvoice)            │
//! │  2. aggregate lines ────► subtotal, fragile_fee                        │
//! │  3. shipping ───────────► rules::shipping_for(subtotal, country)       │
//! │  4. base discount ──────► rules::membership_discount(tier, subtotal)   │
//! │  5. coupon ─────────────► config.apply_coupon(..)  (+UnknownCoupon)    │
//! │  6. tax ────────────────► (subtotal - discount) × tax_rate             │
//! │  7. total ──────────────► max(0, sub + ship + fragile + tax - disc)    │
//! │                           (checked: overflow ──► InvoiceTooLarge)      │
//! │  8. upgrade hint ───────► (+ConsiderMembershipUpgrade)                 │
//! │                                                                         │
//! │  Either a full InvoiceQuote or an error. Never a partial result.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The calculator only holds its read-only [`PricingConfig`], so one instance
//! can be shared (`&self`, `Arc`) across threads freely.

use tracing::{debug, instrument, warn};

use crate::config::PricingConfig;
use crate::error::{InvoiceProblem, PricingError, PricingResult};
use crate::money::Money;
use crate::rules;
use crate::types::{Invoice, InvoiceQuote, LineItem, PricingWarning};
use crate::validation::{validate_invoice, MAX_INVOICE_AMOUNT};

// =============================================================================
// Line Aggregation
// =============================================================================

/// Sums accumulated in one pass over the invoice lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTotals {
    pub subtotal: Money,
    pub fragile_fee: Money,
}

/// Adds up line values and fragile surcharges, in line order.
///
/// `None` if either sum overflows or ends above [`MAX_INVOICE_AMOUNT`].
pub fn aggregate_lines(items: &[LineItem]) -> Option<LineTotals> {
    let totals = items
        .iter()
        .try_fold(LineTotals::default(), |totals, item| {
            Some(LineTotals {
                subtotal: totals.subtotal.checked_add(item.line_total()?)?,
                fragile_fee: totals.fragile_fee.checked_add(item.fragile_fee()?)?,
            })
        })?;

    (totals.subtotal <= MAX_INVOICE_AMOUNT && totals.fragile_fee <= MAX_INVOICE_AMOUNT)
        .then_some(totals)
}

fn too_large() -> PricingError {
    PricingError::InvalidInvoice(vec![InvoiceProblem::InvoiceTooLarge])
}

// =============================================================================
// Calculator
// =============================================================================

/// Prices invoices against a fixed coupon table.
///
/// ## Example
/// ```rust
/// use invoice_core::{Invoice, InvoiceCalculator, LineItem, Money};
///
/// let invoice = Invoice::new(
///     "INV-1001",
///     "CUST-7",
///     "TH",
///     "regular",
///     vec![LineItem::new("B1", "book", Money::from_major_minor(100, 0), 6)],
/// );
///
/// let quote = InvoiceCalculator::new().compute_total(&invoice).unwrap();
/// assert_eq!(quote.total(), Money::from_major_minor(642, 0));
/// assert!(quote.warnings().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvoiceCalculator {
    config: PricingConfig,
}

impl InvoiceCalculator {
    /// A calculator with the standard coupon table.
    pub fn new() -> Self {
        InvoiceCalculator {
            config: PricingConfig::default(),
        }
    }

    /// A calculator with a custom coupon table.
    pub fn with_config(config: PricingConfig) -> PricingResult<Self> {
        config.validate()?;
        Ok(InvoiceCalculator { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Validates and prices an invoice.
    ///
    /// Accepts `&Invoice` or `Option<&Invoice>`; `None` fails with
    /// "Invoice is missing".
    ///
    /// ## Errors
    /// [`PricingError::InvalidInvoice`] with every validation problem found.
    pub fn compute_total<'a>(
        &self,
        invoice: impl Into<Option<&'a Invoice>>,
    ) -> PricingResult<InvoiceQuote> {
        let invoice = invoice.into();
        let problems = validate_invoice(invoice);

        match invoice {
            Some(invoice) if problems.is_empty() => self.price(invoice),
            _ => {
                warn!(
                    invoice_id = invoice.map(|i| i.invoice_id.as_str()).unwrap_or_default(),
                    problems = problems.len(),
                    "Rejected invalid invoice"
                );
                Err(PricingError::InvalidInvoice(problems))
            }
        }
    }

    /// Runs stages 2-8 on an invoice that already passed validation.
    #[instrument(skip_all, fields(invoice_id = %invoice.invoice_id))]
    fn price(&self, invoice: &Invoice) -> PricingResult<InvoiceQuote> {
        let mut warnings = Vec::new();
        let country = invoice.country();
        let tier = invoice.membership_tier();

        let LineTotals {
            subtotal,
            fragile_fee,
        } = aggregate_lines(&invoice.items).ok_or_else(too_large)?;
        debug!(%subtotal, %fragile_fee, items = invoice.items.len(), "Aggregated lines");

        let shipping = rules::shipping_for(subtotal, country);

        let discount = rules::membership_discount(tier, subtotal);
        let discount =
            self.config
                .apply_coupon(invoice.coupon.as_deref(), subtotal, discount, &mut warnings);

        let tax_rate = rules::tax_rate_for(country);
        let tax = rules::tax_on(subtotal, discount, tax_rate);

        let total = subtotal
            .checked_add(shipping)
            .and_then(|sum| sum.checked_add(fragile_fee))
            .and_then(|sum| sum.checked_add(tax))
            .and_then(|sum| sum.checked_sub(discount))
            .ok_or_else(too_large)?
            .floor_at_zero();

        if rules::suggests_upgrade(tier, subtotal) {
            warnings.push(PricingWarning::ConsiderMembershipUpgrade);
        }

        debug!(
            %shipping,
            %discount,
            %tax_rate,
            %tax,
            %total,
            warnings = warnings.len(),
            "Priced invoice"
        );

        Ok(InvoiceQuote {
            subtotal,
            fragile_fee,
            shipping,
            discount,
            tax_rate,
            tax,
            total,
            warnings,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
