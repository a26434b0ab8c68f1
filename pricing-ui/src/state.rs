//! Application state for the PriceWise front end.
//!
//! Two independent flows live here: the survey session (landing, survey,
//! results) and the dashboard with its four tabs. Everything shown on screen
//! is derived from these records on demand; nothing derived is stored.

use clap::ValueEnum;
use pricing_core::calculations::{
    CompetitorTracker, CostBreakdown, DashboardPricing, MarketSummary, ProfitChart,
    ScenarioInputs, ScenarioResult, ScenarioSimulator, StrategyPoint, SurveyAnalysis,
    SurveyPricingEngine, SurveyPricingError,
};
use pricing_core::input::parse_amount_or_zero;
use pricing_core::questionnaire::SurveyWizard;
use pricing_core::{CompetitorId, NewCompetitor, OperatingCosts, ProductData, StrategyPrices, SurveyData};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Which screen of the survey session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Survey,
    Results,
}

/// Survey session state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    view: View,
    wizard: SurveyWizard,
    survey: Option<SurveyData>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Leaves the landing page for a fresh survey.
    pub fn start_survey(&mut self) {
        self.wizard = SurveyWizard::new();
        self.view = View::Survey;
    }

    pub fn wizard(&self) -> &SurveyWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut SurveyWizard {
        &mut self.wizard
    }

    /// Stores the finished answers and shows the results.
    pub fn complete_survey(
        &mut self,
        survey: SurveyData,
    ) {
        debug!(product = %survey.product_name, "showing results");
        self.survey = Some(survey);
        self.view = View::Results;
    }

    pub fn survey(&self) -> Option<&SurveyData> {
        self.survey.as_ref()
    }

    /// Prices the stored answers. `None` until a survey is complete.
    pub fn analysis(&self) -> Option<Result<SurveyAnalysis, SurveyPricingError>> {
        self.survey
            .as_ref()
            .map(|survey| SurveyPricingEngine::default().analyze(survey))
    }

    /// Discards the answers and returns to the landing page.
    pub fn start_over(&mut self) {
        self.survey = None;
        self.wizard = SurveyWizard::new();
        self.view = View::Landing;
    }
}

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tab {
    #[default]
    Calculator,
    Competitors,
    Charts,
    Scenarios,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Self::Calculator, Self::Competitors, Self::Charts, Self::Scenarios];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Competitors => "Competitors",
            Self::Charts => "Charts",
            Self::Scenarios => "Scenarios",
        }
    }
}

/// The "Add Competitor" form, holding the raw field text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitorDraft {
    pub name: String,
    pub price: String,
    pub features: String,
}

impl CompetitorDraft {
    /// Adds the drafted competitor to `tracker`.
    ///
    /// An unparseable price reads as zero and is rejected with the rest. The
    /// form is cleared only when the competitor was added.
    pub fn submit(
        &mut self,
        tracker: &mut CompetitorTracker,
    ) -> Option<CompetitorId> {
        let competitor = NewCompetitor {
            name: self.name.trim().to_string(),
            price: parse_amount_or_zero(&self.price),
            features: self.features.trim().to_string(),
        };
        let id = tracker.add(competitor)?;
        *self = Self::default();
        Some(id)
    }
}

/// Shared records behind the dashboard tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub product: ProductData,
    pub costs: OperatingCosts,
    pub competitors: CompetitorTracker,
    pub scenario: ScenarioInputs,
    pub competitor_form: CompetitorDraft,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            product: ProductData::default(),
            costs: OperatingCosts::default(),
            competitors: CompetitorTracker::with_examples(),
            scenario: ScenarioInputs::default(),
            competitor_form: CompetitorDraft::default(),
        }
    }
}

impl DashboardState {
    pub fn strategy_prices(&self) -> StrategyPrices {
        DashboardPricing::strategy_prices(&self.product)
    }

    pub fn operating_total(&self) -> Decimal {
        DashboardPricing::operating_total(&self.costs)
    }

    pub fn market_summary(&self) -> MarketSummary {
        self.competitors.summary()
    }

    pub fn strategy_series(&self) -> Vec<StrategyPoint> {
        ProfitChart::strategy_series(&self.product, &self.strategy_prices())
    }

    pub fn cost_breakdown(&self) -> CostBreakdown {
        ProfitChart::cost_breakdown(&self.product, &self.costs)
    }

    pub fn scenario_result(&self) -> ScenarioResult {
        ScenarioSimulator::simulate(&self.product, &self.costs, &self.scenario)
    }

    /// Every derived value at once, for JSON output.
    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot {
            product: &self.product,
            operating_costs: &self.costs,
            operating_total: self.operating_total(),
            strategy_prices: self.strategy_prices(),
            competitors: self.competitors.competitors(),
            market: self.market_summary(),
            strategy_series: self.strategy_series(),
            cost_breakdown: self.cost_breakdown(),
            scenario_inputs: self.scenario,
            scenario: self.scenario_result(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub product: &'a ProductData,
    pub operating_costs: &'a OperatingCosts,
    pub operating_total: Decimal,
    pub strategy_prices: StrategyPrices,
    pub competitors: &'a [pricing_core::Competitor],
    pub market: MarketSummary,
    pub strategy_series: Vec<StrategyPoint>,
    pub cost_breakdown: CostBreakdown,
    pub scenario_inputs: ScenarioInputs,
    pub scenario: ScenarioResult,
}
