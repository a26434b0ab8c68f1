//! Pricing calculations.
//!
//! Every calculator here is a pure function of its input records: the survey
//! engine prices questionnaire answers, the dashboard calculator prices a
//! product record, and the remaining modules derive competitor aggregates,
//! chart series and what-if scenarios from the dashboard state.

pub mod chart;
pub mod common;
pub mod competitors;
pub mod dashboard;
pub mod scenario;
pub mod survey_engine;

pub use chart::{CostBreakdown, CostSlice, ProfitChart, StrategyPoint};
pub use competitors::{CompetitorTracker, MarketSummary};
pub use dashboard::DashboardPricing;
pub use scenario::{BreakEven, ScenarioInputs, ScenarioResult, ScenarioSimulator, SliderRange};
pub use survey_engine::{
    Recommendation, SurveyAnalysis, SurveyEngineConfig, SurveyPricingEngine, SurveyPricingError,
};
