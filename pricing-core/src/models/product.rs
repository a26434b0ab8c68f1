use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product record edited on the dashboard calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductData {
    pub name: String,
    pub sku: String,
    pub base_cost: Decimal,
    /// Target margin in percent.
    pub desired_margin: Decimal,
}

impl ProductData {
    /// Lowest margin the calculator slider offers.
    pub const MIN_MARGIN: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
    /// Highest margin the calculator slider offers.
    pub const MAX_MARGIN: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

    /// Sets the desired margin the way the calculator slider would:
    /// whole percent steps between 5 and 100.
    pub fn set_desired_margin(
        &mut self,
        margin: Decimal,
    ) {
        self.desired_margin = margin
            .round()
            .clamp(Self::MIN_MARGIN, Self::MAX_MARGIN);
    }
}

impl Default for ProductData {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            base_cost: Decimal::ZERO,
            desired_margin: Decimal::from(25),
        }
    }
}

/// Monthly fixed expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingCosts {
    pub rent: Decimal,
    pub utilities: Decimal,
    pub salaries: Decimal,
    pub other: Decimal,
}

impl OperatingCosts {
    /// Total monthly fixed cost.
    pub fn total(&self) -> Decimal {
        self.rent + self.utilities + self.salaries + self.other
    }
}
