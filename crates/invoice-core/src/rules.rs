//! # Pricing Rules
//!
//! Fixed shipping, tax and membership discount tables. Every function here is
//! pure: same inputs, same output.
//!
//! ## Rule Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SHIPPING (by subtotal)                 TAX RATE                        │
//! │  ─────────────────────────────────      ─────────────                   │
//! │  TH     <  $500 → $60,  else $0         TH     7%                       │
//! │  JP     < $4000 → $600, else $0         JP    10%                       │
//! │  US     <  $100 → $15                   US     8%                       │
//! │         <  $300 → $8,   else $0         other  5%                       │
//! │  other  <  $200 → $25,  else $0                                         │
//! │                                                                         │
//! │  MEMBERSHIP DISCOUNT                                                    │
//! │  ─────────────────────────────────                                      │
//! │  gold      3% of subtotal                                               │
//! │  platinum  5% of subtotal                                               │
//! │  other     $20 flat if subtotal > $3000, else $0                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{Country, MembershipTier, Rate};

// =============================================================================
// Shipping
// =============================================================================

const TH_FREE_SHIPPING_FROM: Money = Money::from_major_minor(500, 0);
const TH_SHIPPING: Money = Money::from_major_minor(60, 0);

const JP_FREE_SHIPPING_FROM: Money = Money::from_major_minor(4000, 0);
const JP_SHIPPING: Money = Money::from_major_minor(600, 0);

const US_MID_TIER_FROM: Money = Money::from_major_minor(100, 0);
const US_FREE_SHIPPING_FROM: Money = Money::from_major_minor(300, 0);
const US_SMALL_ORDER_SHIPPING: Money = Money::from_major_minor(15, 0);
const US_MID_TIER_SHIPPING: Money = Money::from_major_minor(8, 0);

const DEFAULT_FREE_SHIPPING_FROM: Money = Money::from_major_minor(200, 0);
const DEFAULT_SHIPPING: Money = Money::from_major_minor(25, 0);

/// Shipping charge for a subtotal shipped to `country`.
///
/// Thresholds are inclusive on the free side: a US subtotal of exactly
/// $100.00 ships at the $8 tier.
pub fn shipping_for(subtotal: Money, country: Country) -> Money {
    match country {
        Country::Th => free_from(subtotal, TH_FREE_SHIPPING_FROM, TH_SHIPPING),
        Country::Jp => free_from(subtotal, JP_FREE_SHIPPING_FROM, JP_SHIPPING),
        Country::Us => {
            if subtotal < US_MID_TIER_FROM {
                US_SMALL_ORDER_SHIPPING
            } else if subtotal < US_FREE_SHIPPING_FROM {
                US_MID_TIER_SHIPPING
            } else {
                Money::zero()
            }
        }
        Country::Other => free_from(subtotal, DEFAULT_FREE_SHIPPING_FROM, DEFAULT_SHIPPING),
    }
}

fn free_from(subtotal: Money, threshold: Money, charge: Money) -> Money {
    if subtotal >= threshold {
        Money::zero()
    } else {
        charge
    }
}

// =============================================================================
// Tax
// =============================================================================

/// Tax rate for `country`; unlisted countries pay the default 5%.
pub fn tax_rate_for(country: Country) -> Rate {
    match country {
        Country::Th => Rate::from_bps(700),
        Country::Jp => Rate::from_bps(1000),
        Country::Us => Rate::from_bps(800),
        Country::Other => Rate::from_bps(500),
    }
}

/// Tax owed on the discounted subtotal.
///
/// Not clamped: if `discount > subtotal` the result is negative, and only
/// the invoice total is floored later.
pub fn tax_on(subtotal: Money, discount: Money, rate: Rate) -> Money {
    (subtotal - discount).apply_rate(rate)
}

// =============================================================================
// Membership Discount
// =============================================================================

const GOLD_DISCOUNT: Rate = Rate::from_bps(300);
const PLATINUM_DISCOUNT: Rate = Rate::from_bps(500);
const LARGE_ORDER_FROM: Money = Money::from_major_minor(3000, 0);
const LARGE_ORDER_DISCOUNT: Money = Money::from_major_minor(20, 0);

/// Base discount before any coupon.
///
/// The flat large-order discount only applies to non-premium tiers and only
/// strictly above $3000.
pub fn membership_discount(tier: MembershipTier, subtotal: Money) -> Money {
    match tier {
        MembershipTier::Gold => subtotal.apply_rate(GOLD_DISCOUNT),
        MembershipTier::Platinum => subtotal.apply_rate(PLATINUM_DISCOUNT),
        MembershipTier::Standard if subtotal > LARGE_ORDER_FROM => LARGE_ORDER_DISCOUNT,
        MembershipTier::Standard => Money::zero(),
    }
}

// =============================================================================
// Upgrade Suggestion
// =============================================================================

const UPGRADE_SUGGESTION_ABOVE: Money = Money::from_major_minor(10_000, 0);

/// Large orders from non-premium members get an upgrade suggestion.
pub fn suggests_upgrade(tier: MembershipTier, subtotal: Money) -> bool {
    subtotal > UPGRADE_SUGGESTION_ABOVE && !tier.is_premium()
}

// =============================================================================
// Unit Tests
// =============================================================================
