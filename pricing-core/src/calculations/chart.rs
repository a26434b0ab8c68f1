//! Series behind the profit charts.
//!
//! The chart tab shows two views: strategy prices against their profit, and
//! the cost structure. Both are plain derivations of the dashboard records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::margin_percent;
use crate::{OperatingCosts, ProductData, StrategyKind, StrategyPrices};

/// One bar group of the strategy comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPoint {
    pub kind: StrategyKind,
    pub price: Decimal,
    pub profit: Decimal,
    /// Margin in percent of price; `None` for a zero price.
    pub margin: Option<Decimal>,
}

/// One slice of the cost breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostSlice {
    pub label: &'static str,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub slices: Vec<CostSlice>,
}

impl CostBreakdown {
    pub fn total(&self) -> Decimal {
        self.slices.iter().map(|s| s.amount).sum()
    }

    /// Share of the total taken by each slice, in percent.
    pub fn shares(&self) -> Vec<(&'static str, Decimal)> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| {
                let share = (s.amount * Decimal::ONE_HUNDRED)
                    .checked_div(total)
                    .unwrap_or(Decimal::ZERO);
                (s.label, share)
            })
            .collect()
    }
}

pub struct ProfitChart;

impl ProfitChart {
    /// Price, profit and margin for each strategy.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::{ProductData, StrategyPrices};
    /// use pricing_core::calculations::ProfitChart;
    ///
    /// let product = ProductData { base_cost: dec!(100), ..ProductData::default() };
    /// let prices = StrategyPrices {
    ///     conservative: dec!(135),
    ///     balanced: dec!(125),
    ///     aggressive: dec!(120),
    /// };
    ///
    /// let series = ProfitChart::strategy_series(&product, &prices);
    ///
    /// assert_eq!(series[1].profit, dec!(25));
    /// assert_eq!(series[1].margin, Some(dec!(20)));
    /// ```
    pub fn strategy_series(
        product: &ProductData,
        prices: &StrategyPrices,
    ) -> Vec<StrategyPoint> {
        prices
            .iter()
            .map(|(kind, price)| StrategyPoint {
                kind,
                price,
                profit: price - product.base_cost,
                margin: margin_percent(price, product.base_cost),
            })
            .collect()
    }

    /// Non-zero cost components, base cost first.
    pub fn cost_breakdown(
        product: &ProductData,
        costs: &OperatingCosts,
    ) -> CostBreakdown {
        let slices = [
            ("Base Cost", product.base_cost),
            ("Rent", costs.rent),
            ("Utilities", costs.utilities),
            ("Salaries", costs.salaries),
            ("Other", costs.other),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(label, amount)| CostSlice { label, amount })
        .collect();

        CostBreakdown { slices }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::DashboardPricing;

    fn product() -> ProductData {
        ProductData {
            base_cost: dec!(40),
            desired_margin: dec!(25),
            ..ProductData::default()
        }
    }

    #[test]
    fn strategy_series_has_three_rows_in_order() {
        let prices = DashboardPricing::strategy_prices(&product());

        let series = ProfitChart::strategy_series(&product(), &prices);

        let kinds: Vec<_> = series.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, StrategyKind::ALL.to_vec());
        assert_eq!(series[0].price, dec!(54));
        assert_eq!(series[0].profit, dec!(14));
        assert_eq!(series[2].profit, dec!(8));
    }

    #[test]
    fn zero_price_has_no_margin() {
        let free = ProductData {
            base_cost: dec!(0),
            ..product()
        };
        let prices = DashboardPricing::strategy_prices(&free);

        let series = ProfitChart::strategy_series(&free, &prices);

        assert!(series.iter().all(|p| p.margin.is_none()));
    }

    #[test]
    fn cost_breakdown_skips_zero_components() {
        let costs = OperatingCosts {
            rent: dec!(800),
            salaries: dec!(0),
            other: dec!(50),
            ..OperatingCosts::default()
        };

        let breakdown = ProfitChart::cost_breakdown(&product(), &costs);

        assert_eq!(
            breakdown.slices,
            vec![
                CostSlice {
                    label: "Base Cost",
                    amount: dec!(40),
                },
                CostSlice {
                    label: "Rent",
                    amount: dec!(800),
                },
                CostSlice {
                    label: "Other",
                    amount: dec!(50),
                },
            ]
        );
        assert_eq!(breakdown.total(), dec!(890));
    }

    #[test]
    fn empty_breakdown_totals_zero() {
        let free = ProductData {
            base_cost: dec!(0),
            ..product()
        };

        let breakdown = ProfitChart::cost_breakdown(&free, &OperatingCosts::default());

        assert!(breakdown.slices.is_empty());
        assert_eq!(breakdown.total(), dec!(0));
        assert!(breakdown.shares().is_empty());
    }

    #[test]
    fn shares_sum_to_hundred() {
        let costs = OperatingCosts {
            rent: dec!(60),
            ..OperatingCosts::default()
        };

        let shares = ProfitChart::cost_breakdown(&product(), &costs).shares();

        assert_eq!(shares, vec![("Base Cost", dec!(40)), ("Rent", dec!(60))]);
    }
}
