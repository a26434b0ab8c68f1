//! End-to-end checks across the survey and dashboard calculators.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pricing_core::calculations::common::round_half_up;
use pricing_core::calculations::{
    BreakEven, CompetitorTracker, DashboardPricing, ProfitChart, ScenarioInputs,
    ScenarioSimulator, SurveyPricingEngine,
};
use pricing_core::questionnaire::{SurveyWizard, WizardStep};
use pricing_core::{NewCompetitor, OperatingCosts, ProductData, StrategyKind};

fn complete_survey(answers: &[&str]) -> pricing_core::SurveyData {
    let mut wizard = SurveyWizard::new();
    for raw in answers {
        wizard.set_answer(raw).expect("answer accepted");
        if let WizardStep::Complete(data) = wizard.next().expect("answer valid") {
            return data;
        }
    }
    panic!("survey did not complete");
}

#[test]
fn wizard_answers_price_through_engine() {
    let survey = complete_survey(&[
        "Web Design Package",
        "Services",
        "400",
        "Service Provider",
        "Local restaurants",
        "Premium/Luxury",
        "20",
        "60",
        "Agency X: $1,500",
    ]);

    let analysis = SurveyPricingEngine::default()
        .analyze(&survey)
        .expect("survey prices");

    // 400 / 0.4 = 1000; × 1.4 × 1.2 = 1680
    assert_eq!(analysis.adjusted_base_price, dec!(1680));
    assert_eq!(
        analysis.display_price(StrategyKind::Conservative),
        Some(dec!(1932.00))
    );
    assert_eq!(
        analysis.display_price(StrategyKind::Aggressive),
        Some(dec!(1428.00))
    );
    // 1000 / 1280 rounds up to one unit
    assert_eq!(analysis.break_even_units, dec!(1));
    assert_eq!(analysis.recommendations.len(), 3);
}

#[test]
fn survey_margins_descend_for_every_business_type() {
    for business_type in pricing_core::BusinessType::OPTIONS {
        let survey = pricing_core::SurveyData {
            product_name: "Item".to_string(),
            category: "General".to_string(),
            unit_cost: dec!(3.75),
            target_audience: "Everyone".to_string(),
            monthly_sales_volume: dec!(250),
            business_type,
            brand_positioning: pricing_core::BrandPositioning::EconomyBasic,
            desired_margin: dec!(15),
            competitors: String::new(),
        };

        let analysis = SurveyPricingEngine::default().analyze(&survey).unwrap();

        let margins: Vec<Decimal> = analysis.strategies.iter().map(|s| s.margin).collect();
        assert!(margins.windows(2).all(|w| w[0] > w[1]), "{margins:?}");
    }
}

#[test]
fn dashboard_flow_feeds_chart_and_scenario() {
    let mut product = ProductData {
        name: "Soy Candle".to_string(),
        sku: "SC-8".to_string(),
        ..ProductData::default()
    };
    product.base_cost = dec!(100);
    product.set_desired_margin(dec!(25));
    let costs = OperatingCosts {
        rent: dec!(1500),
        utilities: dec!(200),
        salaries: dec!(0),
        other: dec!(300),
    };

    let prices = DashboardPricing::strategy_prices(&product);
    let series = ProfitChart::strategy_series(&product, &prices);
    let breakdown = ProfitChart::cost_breakdown(&product, &costs);

    assert_eq!(
        series.iter().map(|p| p.price).collect::<Vec<_>>(),
        vec![dec!(135), dec!(125), dec!(120)]
    );
    assert_eq!(breakdown.slices.len(), 4);
    assert_eq!(breakdown.total(), dec!(2100));

    let mut inputs = ScenarioInputs::default();
    inputs.set_volume_estimate(dec!(80));
    let result = ScenarioSimulator::simulate(&product, &costs, &inputs);

    // 25 × 80 - 2000
    assert_eq!(result.monthly_profit, dec!(0));
    assert_eq!(result.break_even, BreakEven::Units(dec!(80)));

    inputs.set_margin_multiplier(dec!(0.5));
    let result = ScenarioSimulator::simulate(&product, &costs, &inputs);

    assert!(result.is_loss());
    assert_eq!(round_half_up(result.new_price), dec!(112.50));
    assert_eq!(result.break_even.whole_units(), Some(dec!(160)));
}

#[test]
fn competitor_aggregates_follow_edits() {
    let mut tracker = CompetitorTracker::with_examples();

    let id = tracker
        .add_at(
            NewCompetitor {
                name: "Discount Hub".to_string(),
                price: dec!(19.99),
                features: "No frills".to_string(),
            },
            1_000,
        )
        .expect("valid competitor");

    assert_eq!(tracker.lowest_price(), dec!(19.99));
    assert_eq!(round_half_up(tracker.average_price()), dec!(29.99));

    assert!(tracker.remove(id));
    assert!(!tracker.remove(id));
    assert_eq!(tracker.average_price(), dec!(34.99));
}
