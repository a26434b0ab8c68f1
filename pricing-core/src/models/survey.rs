use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BrandPositioning, BusinessType};

/// Answers collected by the survey wizard.
///
/// Immutable once handed to the pricing engine; a new survey starts from a
/// fresh record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyData {
    pub product_name: String,
    pub category: String,
    pub unit_cost: Decimal,
    pub target_audience: String,
    pub monthly_sales_volume: Decimal,
    pub business_type: BusinessType,
    pub brand_positioning: BrandPositioning,
    #[serde(default = "SurveyData::default_desired_margin")]
    pub desired_margin: Decimal,
    /// Free-text notes on competitors and their prices.
    #[serde(default)]
    pub competitors: String,
}

impl SurveyData {
    /// Target margin offered before the user answers (25%).
    pub fn default_desired_margin() -> Decimal {
        Decimal::from(25)
    }

    /// True when the competitor notes quote a dollar amount.
    pub fn mentions_competitor_prices(&self) -> bool {
        self.competitors.contains('$')
    }
}
