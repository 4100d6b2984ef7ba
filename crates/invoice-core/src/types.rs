//! # Domain Types
//!
//! Core domain types used by the invoice pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Invoice      │   │    LineItem     │   │  InvoiceQuote   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  invoice_id     │   │  sku            │   │  subtotal       │       │
//! │  │  customer_id    │◄──│  category       │   │  shipping       │       │
//! │  │  country        │   │  unit_price     │   │  discount, tax  │       │
//! │  │  membership     │   │  qty            │   │  total          │       │
//! │  │  coupon, items  │   │  fragile        │   │  warnings       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │    Country      │   │ MembershipTier  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  TH, JP, US     │   │  Gold           │       │
//! │  │  700 = 7%       │   │  Other          │   │  Platinum       │       │
//! │  └─────────────────┘   └─────────────────┘   │  Standard       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Strings at the Edge
//! `Invoice.country`, `Invoice.membership` and `LineItem.category` are kept
//! as the strings the caller sent. Rules resolve them through [`Country`],
//! [`MembershipTier`] and [`Category`]; unknown countries and tiers fall back
//! to a default branch, unknown categories are reported by validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7% (Thai VAT), 1000 bps = 10% (WELCOME10 coupon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The closed set of line item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Book,
    Food,
    Electronics,
    Other,
}

impl Category {
    /// Resolves a raw category string. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "book" => Some(Category::Book),
            "food" => Some(Category::Food),
            "electronics" => Some(Category::Electronics),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Country
// =============================================================================

/// Country codes with dedicated shipping and tax rules.
///
/// Anything else resolves to [`Country::Other`], which uses the default
/// shipping branch and the default tax rate. Unknown codes are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Thailand.
    Th,
    /// Japan.
    Jp,
    /// United States.
    Us,
    /// Every other country string, including blank ones.
    Other,
}

impl Country {
    /// Resolves a raw country string by exact match ("th" is `Other`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "TH" => Country::Th,
            "JP" => Country::Jp,
            "US" => Country::Us,
            _ => Country::Other,
        }
    }
}

// =============================================================================
// Membership Tier
// =============================================================================

/// Membership tiers with special discount treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipTier {
    Gold,
    Platinum,
    /// Any membership string other than "gold" or "platinum".
    Standard,
}

impl MembershipTier {
    /// Resolves a raw membership string by exact match.
    pub fn from_code(code: &str) -> Self {
        match code {
            "gold" => MembershipTier::Gold,
            "platinum" => MembershipTier::Platinum,
            _ => MembershipTier::Standard,
        }
    }

    /// Gold and platinum members never get the upgrade suggestion.
    pub fn is_premium(&self) -> bool {
        matches!(self, MembershipTier::Gold | MembershipTier::Platinum)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// Handling surcharge per unit of a fragile item.
pub const FRAGILE_FEE_PER_UNIT: Money = Money::from_major_minor(5, 0);

/// A single line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Raw category string; see [`LineItem::category`].
    pub category: String,

    /// Price per unit in cents.
    pub unit_price: Money,

    /// Units ordered.
    pub qty: i64,

    /// Fragile items carry a per-unit handling surcharge.
    #[serde(default)]
    pub fragile: bool,
}

impl LineItem {
    /// Creates a non-fragile line item.
    pub fn new(
        sku: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        qty: i64,
    ) -> Self {
        LineItem {
            sku: sku.into(),
            category: category.into(),
            unit_price,
            qty,
            fragile: false,
        }
    }

    /// Marks the item as fragile.
    pub fn fragile(mut self) -> Self {
        self.fragile = true;
        self
    }

    /// The resolved category, or `None` if the raw string is not recognized.
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// unit_price × qty, or `None` if it does not fit in i64 cents.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_multiply_quantity(self.qty)
    }

    /// Handling surcharge for this line: zero unless fragile.
    pub fn fragile_fee(&self) -> Option<Money> {
        if self.fragile {
            FRAGILE_FEE_PER_UNIT.checked_multiply_quantity(self.qty)
        } else {
            Some(Money::zero())
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer invoice awaiting pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub invoice_id: String,
    pub customer_id: String,
    /// Raw country code; see [`Country::from_code`].
    pub country: String,
    /// Raw membership string; see [`MembershipTier::from_code`].
    pub membership: String,
    /// Optional coupon code. Blank codes are treated as absent.
    #[serde(default)]
    pub coupon: Option<String>,
    pub items: Vec<LineItem>,
}

impl Invoice {
    /// Creates an invoice without a coupon.
    pub fn new(
        invoice_id: impl Into<String>,
        customer_id: impl Into<String>,
        country: impl Into<String>,
        membership: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        Invoice {
            invoice_id: invoice_id.into(),
            customer_id: customer_id.into(),
            country: country.into(),
            membership: membership.into(),
            coupon: None,
            items,
        }
    }

    /// Attaches a coupon code.
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon = Some(code.into());
        self
    }

    #[inline]
    pub fn country(&self) -> Country {
        Country::from_code(&self.country)
    }

    #[inline]
    pub fn membership_tier(&self) -> MembershipTier {
        MembershipTier::from_code(&self.membership)
    }
}

// =============================================================================
// Pricing Warning
// =============================================================================

/// A non-fatal advisory returned alongside a successful quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PricingWarning {
    /// The coupon code is not in the coupon table; it was ignored.
    UnknownCoupon,
    /// Large order from a non-premium member.
    ConsiderMembershipUpgrade,
}

impl PricingWarning {
    /// The user-visible message.
    pub fn message(&self) -> &'static str {
        match self {
            PricingWarning::UnknownCoupon => "Unknown coupon",
            PricingWarning::ConsiderMembershipUpgrade => "Consider membership upgrade",
        }
    }
}

impl fmt::Display for PricingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Invoice Quote
// =============================================================================

/// The priced result of an invoice.
///
/// ## Formula
/// ```text
/// total = max(0, subtotal + shipping + fragile_fee + tax - discount)
/// tax   = (subtotal - discount) × tax_rate
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceQuote {
    pub subtotal: Money,
    pub fragile_fee: Money,
    pub shipping: Money,
    /// Membership discount plus coupon discount.
    pub discount: Money,
    pub tax_rate: Rate,
    /// May be negative when the discount exceeds the subtotal.
    pub tax: Money,
    /// Never negative.
    pub total: Money,
    /// In emission order: coupon warnings first, then upgrade suggestions.
    pub warnings: Vec<PricingWarning>,
}

impl InvoiceQuote {
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    #[inline]
    pub fn warnings(&self) -> &[PricingWarning] {
        &self.warnings
    }

    /// Warnings rendered as their user-visible strings.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.message().to_string()).collect()
    }

    /// The `(total, warnings)` pair.
    pub fn into_parts(self) -> (Money, Vec<PricingWarning>) {
        (self.total, self.warnings)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert_eq!(Rate::default(), Rate::zero());
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_bps(700).to_string(), "7.00%");
        assert_eq!(Rate::from_bps(825).to_string(), "8.25%");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("book"), Some(Category::Book));
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("electronics"), Some(Category::Electronics));
        assert_eq!(Category::parse("other"), Some(Category::Other));
        assert_eq!(Category::parse("toy"), None);
        assert_eq!(Category::parse("Book"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_country_falls_back_to_other() {
        assert_eq!(Country::from_code("TH"), Country::Th);
        assert_eq!(Country::from_code("JP"), Country::Jp);
        assert_eq!(Country::from_code("US"), Country::Us);
        assert_eq!(Country::from_code("us"), Country::Other);
        assert_eq!(Country::from_code("DE"), Country::Other);
        assert_eq!(Country::from_code(""), Country::Other);
    }

    #[test]
    fn test_membership_tier() {
        assert!(MembershipTier::from_code("gold").is_premium());
        assert!(MembershipTier::from_code("platinum").is_premium());
        assert_eq!(MembershipTier::from_code("Gold"), MembershipTier::Standard);
        assert!(!MembershipTier::from_code("regular").is_premium());
    }

    #[test]
    fn test_line_item_builder() {
        let item = LineItem::new("G1", "other", Money::from_cents(250), 4).fragile();
        assert!(item.fragile);
        assert_eq!(item.category(), Some(Category::Other));
        assert_eq!(item.line_total(), Some(Money::from_cents(1000)));
        assert_eq!(item.fragile_fee(), Some(Money::from_major_minor(20, 0)));
    }

    #[test]
    fn test_line_amounts_report_overflow() {
        let item = LineItem::new("B1", "book", Money::from_cents(i64::MAX / 2 + 1), 2);
        assert_eq!(item.line_total(), None);
        assert_eq!(item.fragile_fee(), Some(Money::zero()));

        let crate_of_glass = LineItem::new("G1", "other", Money::zero(), i64::MAX / 100).fragile();
        assert_eq!(crate_of_glass.line_total(), Some(Money::zero()));
        assert_eq!(crate_of_glass.fragile_fee(), None);
    }

    #[test]
    fn test_line_item_fragile_defaults_to_false() {
        let item: LineItem = serde_json::from_str(
            r#"{"sku":"B1","category":"book","unit_price":10000,"qty":6}"#,
        )
        .unwrap();
        assert!(!item.fragile);
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(PricingWarning::UnknownCoupon.to_string(), "Unknown coupon");
        assert_eq!(
            PricingWarning::ConsiderMembershipUpgrade.to_string(),
            "Consider membership upgrade"
        );
    }
}
