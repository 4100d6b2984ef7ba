//! # Pricing Configuration
//!
//! The coupon table, and how coupons are applied to a discount.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. PricingConfig::from_toml_str(..)   (caller loads the document)     │
//! │                                                                         │
//! │  2. PricingConfig::default()                                           │
//! │     WELCOME10 = 10%, VIP20 = 20%, STUDENT5 = 5%                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The config is read-only once handed to a calculator.
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [coupons]
//! WELCOME10 = 1000   # basis points
//! VIP20 = 2000
//! STUDENT5 = 500
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::ConfigResult;
use crate::money::Money;
use crate::types::{PricingWarning, Rate};
use crate::validation::{validate_coupon_code, validate_rate_bps};

// =============================================================================
// Pricing Config
// =============================================================================

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PricingConfig {
    /// Coupon code → discount rate on the subtotal.
    pub coupons: BTreeMap<String, Rate>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let coupons = [
            ("WELCOME10", Rate::from_bps(1000)),
            ("VIP20", Rate::from_bps(2000)),
            ("STUDENT5", Rate::from_bps(500)),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        PricingConfig { coupons }
    }
}

impl PricingConfig {
    /// Parses and validates a TOML document.
    ///
    /// A document without a `[coupons]` table yields the default coupons.
    /// Codes are trimmed, since redemption trims the code too.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let parsed: PricingConfig = toml::from_str(raw)?;
        let config = parsed.normalized()?;
        debug!(coupons = config.coupons.len(), "Loaded pricing config");
        Ok(config)
    }

    /// Checks every coupon entry.
    pub fn validate(&self) -> ConfigResult<()> {
        for (code, rate) in &self.coupons {
            validate_coupon_code(code)?;
            validate_rate_bps(code, rate.bps())?;
        }
        Ok(())
    }

    fn normalized(self) -> ConfigResult<Self> {
        self.validate()?;
        let coupons = self
            .coupons
            .into_iter()
            .map(|(code, rate)| (code.trim().to_string(), rate))
            .collect();
        Ok(PricingConfig { coupons })
    }

    /// Looks up an already-trimmed coupon code. Case-sensitive.
    pub fn coupon_rate(&self, code: &str) -> Option<Rate> {
        self.coupons.get(code).copied()
    }

    // =========================================================================
    // Coupon Application
    // =========================================================================

    /// Adds the coupon's share of `subtotal` to `discount`.
    ///
    /// ## Behavior
    /// ```text
    /// coupon None / blank ──► discount unchanged
    /// code in table ────────► discount + subtotal × rate
    /// code not in table ────► discount unchanged, push UnknownCoupon
    /// ```
    ///
    /// The coupon stacks on top of the membership discount; it never
    /// replaces it.
    pub fn apply_coupon(
        &self,
        coupon: Option<&str>,
        subtotal: Money,
        discount: Money,
        warnings: &mut Vec<PricingWarning>,
    ) -> Money {
        let Some(code) = coupon.map(str::trim).filter(|c| !c.is_empty()) else {
            return discount;
        };

        match self.coupon_rate(code) {
            Some(rate) => {
                let coupon_discount = subtotal.apply_rate(rate);
                debug!(code, rate = %rate, amount = %coupon_discount, "Applied coupon");
                discount + coupon_discount
            }
            None => {
                warn!(code, "Unknown coupon ignored");
                warnings.push(PricingWarning::UnknownCoupon);
                discount
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
