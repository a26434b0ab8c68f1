//! What-if scenario simulator.
//!
//! Applies slider multipliers to the dashboard product and operating costs
//! and derives the resulting price, unit profit, monthly profit and
//! break-even volume. The result is recomputed from scratch on every change.
//!
//! | Value             | Formula                                              |
//! |-------------------|------------------------------------------------------|
//! | adjusted cost     | base cost × cost multiplier                          |
//! | adjusted margin   | desired margin × margin multiplier                   |
//! | adjusted rent     | rent × rent multiplier                               |
//! | fixed costs       | adjusted rent + utilities + salaries + other         |
//! | new price         | adjusted cost × (1 + adjusted margin / 100)          |
//! | profit per unit   | new price - adjusted cost                            |
//! | monthly profit    | profit per unit × volume - fixed costs               |
//! | break-even units  | fixed costs / profit per unit (unreachable at 0)     |
//!
//! A break-even quotient too large for a decimal saturates at `Decimal::MAX`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::ceil_units;
use crate::{OperatingCosts, ProductData};

/// Range and step of a scenario slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl SliderRange {
    /// Range of the cost, margin and rent multipliers.
    pub const MULTIPLIER: SliderRange = SliderRange {
        min: Decimal::from_parts(5, 0, 0, false, 1),
        max: Decimal::from_parts(2, 0, 0, false, 0),
        step: Decimal::from_parts(1, 0, 0, false, 1),
    };

    /// Range of the monthly volume estimate.
    pub const VOLUME: SliderRange = SliderRange {
        min: Decimal::from_parts(10, 0, 0, false, 0),
        max: Decimal::from_parts(1000, 0, 0, false, 0),
        step: Decimal::from_parts(10, 0, 0, false, 0),
    };

    /// Clamps `value` into the range and snaps it to the nearest step.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::calculations::SliderRange;
    ///
    /// assert_eq!(SliderRange::MULTIPLIER.snap(dec!(1.26)), dec!(1.3));
    /// assert_eq!(SliderRange::MULTIPLIER.snap(dec!(7)), dec!(2.0));
    /// assert_eq!(SliderRange::VOLUME.snap(dec!(3)), dec!(10));
    /// ```
    pub fn snap(
        &self,
        value: Decimal,
    ) -> Decimal {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

/// Slider positions of the scenario simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    pub cost_multiplier: Decimal,
    pub margin_multiplier: Decimal,
    pub rent_multiplier: Decimal,
    /// Expected monthly sales in units.
    pub volume_estimate: Decimal,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            cost_multiplier: Decimal::ONE,
            margin_multiplier: Decimal::ONE,
            rent_multiplier: Decimal::ONE,
            volume_estimate: Decimal::ONE_HUNDRED,
        }
    }
}

impl ScenarioInputs {
    pub fn set_cost_multiplier(
        &mut self,
        value: Decimal,
    ) {
        self.cost_multiplier = SliderRange::MULTIPLIER.snap(value);
    }

    pub fn set_margin_multiplier(
        &mut self,
        value: Decimal,
    ) {
        self.margin_multiplier = SliderRange::MULTIPLIER.snap(value);
    }

    pub fn set_rent_multiplier(
        &mut self,
        value: Decimal,
    ) {
        self.rent_multiplier = SliderRange::MULTIPLIER.snap(value);
    }

    pub fn set_volume_estimate(
        &mut self,
        value: Decimal,
    ) {
        self.volume_estimate = SliderRange::VOLUME.snap(value);
    }

    /// Returns a copy with every slider clamped and snapped to its range.
    ///
    /// Used for values read from files, which bypass the setters.
    pub fn snapped(&self) -> Self {
        let mut inputs = *self;
        inputs.set_cost_multiplier(self.cost_multiplier);
        inputs.set_margin_multiplier(self.margin_multiplier);
        inputs.set_rent_multiplier(self.rent_multiplier);
        inputs.set_volume_estimate(self.volume_estimate);
        inputs
    }
}

/// Break-even volume of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakEven {
    /// Fixed costs divided by unit profit, unrounded.
    Units(Decimal),
    /// Unit profit is zero; no volume covers the fixed costs.
    Unreachable,
}

impl BreakEven {
    /// Whole units, rounded up, or `None` when unreachable.
    pub fn whole_units(&self) -> Option<Decimal> {
        match self {
            Self::Units(units) => Some(ceil_units(*units)),
            Self::Unreachable => None,
        }
    }
}

impl fmt::Display for BreakEven {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.whole_units() {
            Some(units) => write!(f, "{units}"),
            None => f.write_str("∞"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub adjusted_base_cost: Decimal,
    /// Adjusted margin in percent.
    pub adjusted_margin: Decimal,
    pub adjusted_rent: Decimal,
    pub total_fixed_costs: Decimal,
    pub new_price: Decimal,
    pub profit_per_unit: Decimal,
    pub monthly_profit: Decimal,
    pub break_even: BreakEven,
}

impl ScenarioResult {
    /// True when the scenario loses money each month.
    pub fn is_loss(&self) -> bool {
        self.monthly_profit < Decimal::ZERO
    }
}

pub struct ScenarioSimulator;

impl ScenarioSimulator {
    /// Recomputes the scenario for the current product, costs and sliders.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::{OperatingCosts, ProductData};
    /// use pricing_core::calculations::{BreakEven, ScenarioInputs, ScenarioSimulator};
    ///
    /// let product = ProductData {
    ///     base_cost: dec!(10),
    ///     desired_margin: dec!(50),
    ///     ..ProductData::default()
    /// };
    /// let costs = OperatingCosts {
    ///     rent: dec!(500),
    ///     ..OperatingCosts::default()
    /// };
    ///
    /// let result = ScenarioSimulator::simulate(&product, &costs, &ScenarioInputs::default());
    ///
    /// assert_eq!(result.new_price, dec!(15));
    /// assert_eq!(result.monthly_profit, dec!(0));
    /// assert_eq!(result.break_even, BreakEven::Units(dec!(100)));
    /// ```
    pub fn simulate(
        product: &ProductData,
        costs: &OperatingCosts,
        inputs: &ScenarioInputs,
    ) -> ScenarioResult {
        let adjusted_base_cost = product.base_cost * inputs.cost_multiplier;
        let adjusted_margin = product.desired_margin * inputs.margin_multiplier;
        let adjusted_rent = costs.rent * inputs.rent_multiplier;
        let total_fixed_costs = adjusted_rent + costs.utilities + costs.salaries + costs.other;

        let new_price =
            adjusted_base_cost * (Decimal::ONE + adjusted_margin / Decimal::ONE_HUNDRED);
        let profit_per_unit = new_price - adjusted_base_cost;
        let monthly_profit = profit_per_unit * inputs.volume_estimate - total_fixed_costs;

        let break_even = Self::break_even(total_fixed_costs, profit_per_unit);

        debug!(
            new_price = %new_price,
            profit_per_unit = %profit_per_unit,
            monthly_profit = %monthly_profit,
            break_even = %break_even,
            "scenario recomputed"
        );

        if monthly_profit < Decimal::ZERO {
            warn!(
                monthly_profit = %monthly_profit,
                volume = %inputs.volume_estimate,
                "Scenario results in negative monthly profit"
            );
        }

        ScenarioResult {
            adjusted_base_cost,
            adjusted_margin,
            adjusted_rent,
            total_fixed_costs,
            new_price,
            profit_per_unit,
            monthly_profit,
            break_even,
        }
    }

    /// Fixed costs over unit profit. A quotient beyond the decimal range
    /// saturates at the signed extreme instead of reading as unreachable.
    fn break_even(
        total_fixed_costs: Decimal,
        profit_per_unit: Decimal,
    ) -> BreakEven {
        if profit_per_unit.is_zero() {
            return BreakEven::Unreachable;
        }
        match total_fixed_costs.checked_div(profit_per_unit) {
            Some(units) => BreakEven::Units(units),
            None => {
                warn!(
                    fixed_costs = %total_fixed_costs,
                    profit_per_unit = %profit_per_unit,
                    "Break-even volume exceeds the decimal range"
                );
                let negative =
                    total_fixed_costs.is_sign_negative() != profit_per_unit.is_sign_negative();
                BreakEven::Units(if negative { Decimal::MIN } else { Decimal::MAX })
            }
        }
    }
}
