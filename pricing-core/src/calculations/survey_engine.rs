//! Survey pricing engine.
//!
//! Turns the answers collected by the survey wizard into three priced
//! strategies, a break-even estimate and a short list of advisory hints.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Base price: unit cost / (1 - desired margin / 100) |
//! | 2    | Positioning multiplier from the brand positioning table |
//! | 3    | Business type multiplier from the business type table |
//! | 4    | Adjusted base price: Step 1 × Step 2 × Step 3 |
//! | 5    | Strategy prices: Step 4 × 1.15 / 1.00 / 0.85 |
//! | 6    | Strategy margins: (price - unit cost) / price × 100 |
//! | 7    | Break-even units: ceil(assumed fixed costs / (Balanced price - unit cost)) |
//!
//! # Assumed Fixed Costs
//!
//! Step 7 uses a flat $1,000 of monthly fixed costs. It is not connected to
//! the operating costs entered on the dashboard. A zero per-unit profit is
//! replaced by 1 so the division is always defined.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pricing_core::calculations::{SurveyEngineConfig, SurveyPricingEngine};
//! use pricing_core::{BrandPositioning, BusinessType, StrategyKind, SurveyData};
//!
//! let survey = SurveyData {
//!     product_name: "House Blend".to_string(),
//!     category: "Food & Beverage".to_string(),
//!     unit_cost: dec!(10.00),
//!     target_audience: "Commuters".to_string(),
//!     monthly_sales_volume: dec!(500),
//!     business_type: BusinessType::Other,
//!     brand_positioning: BrandPositioning::parse("Balanced-N/A"),
//!     desired_margin: dec!(25),
//!     competitors: String::new(),
//! };
//!
//! let engine = SurveyPricingEngine::new(SurveyEngineConfig::default());
//! let analysis = engine.analyze(&survey).unwrap();
//!
//! assert_eq!(analysis.display_price(StrategyKind::Balanced), Some(dec!(13.33)));
//! assert_eq!(analysis.display_price(StrategyKind::Conservative), Some(dec!(15.33)));
//! assert_eq!(analysis.display_price(StrategyKind::Aggressive), Some(dec!(11.33)));
//! assert_eq!(analysis.break_even_units, dec!(300));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{ceil_units, margin_percent, round_half_up};
use crate::{PricingStrategy, StrategyKind, SurveyData};

/// Errors that can occur while pricing survey answers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurveyPricingError {
    /// The unit cost must be positive.
    #[error("unit cost must be positive, got {0}")]
    NonPositiveUnitCost(Decimal),

    /// The desired margin must be at least 0 and below 100 percent.
    #[error("desired margin must be at least 0% and below 100%, got {0}%")]
    MarginOutOfRange(Decimal),

    /// A strategy price factor must be positive.
    #[error("{kind} price factor must be positive, got {factor}")]
    InvalidPriceFactor { kind: StrategyKind, factor: Decimal },

    /// The assumed monthly fixed costs must be non-negative.
    #[error("assumed fixed costs must be non-negative, got {0}")]
    InvalidAssumedFixedCosts(Decimal),

    /// An intermediate value exceeded the decimal range.
    #[error("{0} is out of range")]
    Overflow(&'static str),
}

/// Configuration parameters for the survey pricing engine.
///
/// The [`Default`] implementation carries the standard factors; the struct
/// exists so alternative factor sets can be compared side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyEngineConfig {
    /// Multiplier applied to the adjusted base price for the Conservative strategy.
    pub conservative_factor: Decimal,

    /// Multiplier applied to the adjusted base price for the Balanced strategy.
    pub balanced_factor: Decimal,

    /// Multiplier applied to the adjusted base price for the Aggressive strategy.
    pub aggressive_factor: Decimal,

    /// Monthly fixed costs assumed by the break-even estimate.
    pub assumed_fixed_costs: Decimal,
}

impl Default for SurveyEngineConfig {
    fn default() -> Self {
        Self {
            conservative_factor: Decimal::new(115, 2),
            balanced_factor: Decimal::ONE,
            aggressive_factor: Decimal::new(85, 2),
            assumed_fixed_costs: Decimal::ONE_THOUSAND,
        }
    }
}

impl SurveyEngineConfig {
    fn factor(
        &self,
        kind: StrategyKind,
    ) -> Decimal {
        match kind {
            StrategyKind::Conservative => self.conservative_factor,
            StrategyKind::Balanced => self.balanced_factor,
            StrategyKind::Aggressive => self.aggressive_factor,
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyPricingError`] if:
    /// - any strategy factor is zero or negative
    /// - `assumed_fixed_costs` is negative
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::StrategyKind;
    /// use pricing_core::calculations::{SurveyEngineConfig, SurveyPricingError};
    ///
    /// let config = SurveyEngineConfig {
    ///     aggressive_factor: dec!(0),
    ///     ..SurveyEngineConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(SurveyPricingError::InvalidPriceFactor {
    ///         kind: StrategyKind::Aggressive,
    ///         factor: dec!(0),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), SurveyPricingError> {
        for kind in StrategyKind::ALL {
            let factor = self.factor(kind);
            if factor <= Decimal::ZERO {
                return Err(SurveyPricingError::InvalidPriceFactor { kind, factor });
            }
        }
        if self.assumed_fixed_costs < Decimal::ZERO {
            return Err(SurveyPricingError::InvalidAssumedFixedCosts(
                self.assumed_fixed_costs,
            ));
        }
        Ok(())
    }
}

/// Advisory hints shown next to the strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Premium positioning favours the Conservative strategy.
    ConservativeForPremium,
    /// Low expected volume favours the Balanced strategy.
    BalancedForLowVolume,
    /// Competitor notes quote prices worth keeping an eye on.
    MonitorCompetitorPricing,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ConservativeForPremium => "Conservative strategy aligns with premium positioning",
            Self::BalancedForLowVolume => "Consider balanced approach for sustainable growth",
            Self::MonitorCompetitorPricing => "Monitor competitor pricing closely",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::ConservativeForPremium => "✓",
            Self::BalancedForLowVolume => "→",
            Self::MonitorCompetitorPricing => "⚠",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.message())
    }
}

/// Result of pricing one set of survey answers.
///
/// Prices and margins are kept at full precision; use
/// [`SurveyAnalysis::display_price`] or [`round_half_up`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnalysis {
    /// Margin-derived price before multipliers (Step 1).
    pub base_price: Decimal,

    /// Base price after positioning and business type multipliers (Step 4).
    pub adjusted_base_price: Decimal,

    /// Conservative, Balanced and Aggressive, in that order.
    pub strategies: Vec<PricingStrategy>,

    /// Monthly units needed to cover the assumed fixed costs at the Balanced price.
    ///
    /// Negative when the Balanced price is below unit cost.
    pub break_even_units: Decimal,

    pub recommendations: Vec<Recommendation>,
}

impl SurveyAnalysis {
    pub fn strategy(
        &self,
        kind: StrategyKind,
    ) -> Option<&PricingStrategy> {
        self.strategies.iter().find(|s| s.kind == kind)
    }

    /// Strategy price rounded to cents.
    pub fn display_price(
        &self,
        kind: StrategyKind,
    ) -> Option<Decimal> {
        self.strategy(kind).map(|s| round_half_up(s.price))
    }
}

/// Calculator for survey-based pricing.
#[derive(Debug, Clone, Default)]
pub struct SurveyPricingEngine {
    config: SurveyEngineConfig,
}

impl SurveyPricingEngine {
    pub fn new(config: SurveyEngineConfig) -> Self {
        Self { config }
    }

    /// Prices the survey answers and returns the full analysis.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyPricingError`] if the configuration is invalid, the
    /// unit cost is not positive, the desired margin is outside `[0, 100)`,
    /// or an intermediate value overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::calculations::{Recommendation, SurveyPricingEngine};
    /// use pricing_core::{BrandPositioning, BusinessType, StrategyKind, SurveyData};
    ///
    /// let survey = SurveyData {
    ///     product_name: "Analytics Suite".to_string(),
    ///     category: "Technology".to_string(),
    ///     unit_cost: dec!(20.00),
    ///     target_audience: "Small agencies".to_string(),
    ///     monthly_sales_volume: dec!(50),
    ///     business_type: BusinessType::SaasSoftware,
    ///     brand_positioning: BrandPositioning::PremiumLuxury,
    ///     desired_margin: dec!(50),
    ///     competitors: "Rival: $79".to_string(),
    /// };
    ///
    /// let analysis = SurveyPricingEngine::default().analyze(&survey).unwrap();
    ///
    /// // 20 / 0.5 = 40; 40 × 1.4 × 1.3 = 72.80
    /// assert_eq!(analysis.adjusted_base_price, dec!(72.80));
    /// assert_eq!(analysis.display_price(StrategyKind::Conservative), Some(dec!(83.72)));
    /// assert_eq!(analysis.recommendations, vec![
    ///     Recommendation::ConservativeForPremium,
    ///     Recommendation::BalancedForLowVolume,
    ///     Recommendation::MonitorCompetitorPricing,
    /// ]);
    /// ```
    pub fn analyze(
        &self,
        survey: &SurveyData,
    ) -> Result<SurveyAnalysis, SurveyPricingError> {
        self.config.validate()?;

        if survey.unit_cost <= Decimal::ZERO {
            return Err(SurveyPricingError::NonPositiveUnitCost(survey.unit_cost));
        }
        if survey.desired_margin < Decimal::ZERO || survey.desired_margin >= Decimal::ONE_HUNDRED {
            return Err(SurveyPricingError::MarginOutOfRange(survey.desired_margin));
        }

        // Step 1
        let base_price = self.base_price(survey.unit_cost, survey.desired_margin)?;

        // Steps 2-4
        let adjusted_base_price = self.adjusted_base_price(base_price, survey)?;

        // Steps 5-6
        let strategies = StrategyKind::ALL
            .into_iter()
            .map(|kind| self.strategy(kind, adjusted_base_price, survey))
            .collect::<Result<Vec<_>, _>>()?;

        // Step 7
        let balanced_price = adjusted_base_price
            .checked_mul(self.config.balanced_factor)
            .ok_or(SurveyPricingError::Overflow("balanced price"))?;
        let break_even_units = self.break_even_units(balanced_price, survey.unit_cost)?;

        let recommendations = self.recommendations(survey);

        debug!(
            product = %survey.product_name,
            base_price = %base_price,
            adjusted_base_price = %adjusted_base_price,
            break_even_units = %break_even_units,
            "survey pricing complete"
        );

        Ok(SurveyAnalysis {
            base_price,
            adjusted_base_price,
            strategies,
            break_even_units,
            recommendations,
        })
    }

    /// Price that yields the desired margin on the unit cost (Step 1).
    fn base_price(
        &self,
        unit_cost: Decimal,
        desired_margin: Decimal,
    ) -> Result<Decimal, SurveyPricingError> {
        let cost_share = Decimal::ONE - desired_margin / Decimal::ONE_HUNDRED;
        unit_cost
            .checked_div(cost_share)
            .ok_or(SurveyPricingError::Overflow("base price"))
    }

    /// Applies the positioning and business type multipliers (Steps 2-4).
    fn adjusted_base_price(
        &self,
        base_price: Decimal,
        survey: &SurveyData,
    ) -> Result<Decimal, SurveyPricingError> {
        let positioning = survey.brand_positioning.multiplier();
        let business = survey.business_type.multiplier();

        base_price
            .checked_mul(positioning)
            .and_then(|price| price.checked_mul(business))
            .ok_or(SurveyPricingError::Overflow("adjusted base price"))
    }

    /// Builds one strategy card (Steps 5-6).
    fn strategy(
        &self,
        kind: StrategyKind,
        adjusted_base_price: Decimal,
        survey: &SurveyData,
    ) -> Result<PricingStrategy, SurveyPricingError> {
        let price = adjusted_base_price
            .checked_mul(self.config.factor(kind))
            .ok_or(SurveyPricingError::Overflow("strategy price"))?;
        let margin = margin_percent(price, survey.unit_cost)
            .ok_or(SurveyPricingError::Overflow("strategy margin"))?;

        Ok(PricingStrategy {
            kind,
            price,
            margin,
            reasoning: reasoning(kind, survey),
            pros: kind.pros().iter().map(|s| s.to_string()).collect(),
            cons: kind.cons().iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Monthly units to cover the assumed fixed costs (Step 7).
    fn break_even_units(
        &self,
        balanced_price: Decimal,
        unit_cost: Decimal,
    ) -> Result<Decimal, SurveyPricingError> {
        let mut profit_per_unit = balanced_price - unit_cost;

        if profit_per_unit.is_zero() {
            warn!(
                balanced_price = %balanced_price,
                unit_cost = %unit_cost,
                "Balanced price equals unit cost; break-even uses a $1 unit profit"
            );
            profit_per_unit = Decimal::ONE;
        } else if profit_per_unit < Decimal::ZERO {
            warn!(
                balanced_price = %balanced_price,
                unit_cost = %unit_cost,
                "Balanced price is below unit cost; break-even units will be negative"
            );
        }

        self.config
            .assumed_fixed_costs
            .checked_div(profit_per_unit)
            .map(ceil_units)
            .ok_or(SurveyPricingError::Overflow("break-even units"))
    }

    fn recommendations(
        &self,
        survey: &SurveyData,
    ) -> Vec<Recommendation> {
        let mut hints = Vec::new();
        if survey.brand_positioning.is_premium() {
            hints.push(Recommendation::ConservativeForPremium);
        }
        if survey.monthly_sales_volume < Decimal::ONE_HUNDRED {
            hints.push(Recommendation::BalancedForLowVolume);
        }
        if survey.mentions_competitor_prices() {
            hints.push(Recommendation::MonitorCompetitorPricing);
        }
        hints
    }
}

fn reasoning(
    kind: StrategyKind,
    survey: &SurveyData,
) -> String {
    match kind {
        StrategyKind::Conservative => format!(
            "Higher margin strategy focusing on profitability and sustainable growth. \
             Based on your {} positioning and {} business model.",
            survey.brand_positioning.as_str().to_lowercase(),
            survey.business_type.as_str().to_lowercase(),
        ),
        StrategyKind::Balanced => format!(
            "Optimal balance between profitability and competitiveness. \
             Aligned with your target {}% margin and market positioning.",
            survey.desired_margin.normalize(),
        ),
        StrategyKind::Aggressive => format!(
            "Market penetration strategy for rapid customer acquisition. \
             Optimized for volume growth in the {} category.",
            survey.category.to_lowercase(),
        ),
    }
}
