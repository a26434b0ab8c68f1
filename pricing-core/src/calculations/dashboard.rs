//! Dashboard calculator pricing.
//!
//! A simpler formula family than the survey engine: the desired margin is
//! treated as a markup on base cost, and the strategies shift that markup
//! by fixed percentage points.
//!
//! | Strategy     | Price                                |
//! |--------------|--------------------------------------|
//! | Conservative | base cost × (1 + margin/100 + 0.10)  |
//! | Balanced     | base cost × (1 + margin/100)         |
//! | Aggressive   | base cost × (1 + margin/100 - 0.05)  |
//!
//! Operating costs are totalled for display but never enter the price.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{OperatingCosts, ProductData, StrategyKind, StrategyPrices};

/// Pricing for the dashboard calculator tab.
pub struct DashboardPricing;

impl DashboardPricing {
    /// Markup shift in fractional points for each strategy.
    pub fn markup_offset(kind: StrategyKind) -> Decimal {
        match kind {
            StrategyKind::Conservative => Decimal::new(10, 2),
            StrategyKind::Balanced => Decimal::ZERO,
            StrategyKind::Aggressive => Decimal::new(-5, 2),
        }
    }

    /// Prices the product under each strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::ProductData;
    /// use pricing_core::calculations::DashboardPricing;
    ///
    /// let product = ProductData {
    ///     base_cost: dec!(100),
    ///     desired_margin: dec!(25),
    ///     ..ProductData::default()
    /// };
    ///
    /// let prices = DashboardPricing::strategy_prices(&product);
    ///
    /// assert_eq!(prices.conservative, dec!(135));
    /// assert_eq!(prices.balanced, dec!(125));
    /// assert_eq!(prices.aggressive, dec!(120));
    /// ```
    pub fn strategy_prices(product: &ProductData) -> StrategyPrices {
        let markup = product.desired_margin / Decimal::ONE_HUNDRED;
        let price = |kind| product.base_cost * (Decimal::ONE + markup + Self::markup_offset(kind));

        let prices = StrategyPrices {
            conservative: price(StrategyKind::Conservative),
            balanced: price(StrategyKind::Balanced),
            aggressive: price(StrategyKind::Aggressive),
        };

        debug!(
            base_cost = %product.base_cost,
            desired_margin = %product.desired_margin,
            balanced = %prices.balanced,
            "dashboard prices recomputed"
        );

        prices
    }

    /// Total monthly fixed costs shown under the calculator.
    pub fn operating_total(costs: &OperatingCosts) -> Decimal {
        costs.total()
    }
}
