//! Loads the on-disk fixtures and runs them through the batch pipeline.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use pricing_core::calculations::{CompetitorTracker, SurveyPricingEngine};
use pricing_data::{BatchReport, CompetitorLoader, StrategyWriter, SurveyLoader};
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn survey_fixture_loads_every_row() {
    let records = SurveyLoader::parse_file(&fixture("surveys.csv")).expect("fixture should load");

    assert_eq!(records.len(), 4);
    assert_eq!(records[2].survey.unit_cost, dec!(2.50));
    assert_eq!(records[2].survey.monthly_sales_volume, dec!(1200));
    assert_eq!(records[2].survey.desired_margin, dec!(40));
}

#[test]
fn batch_prices_fixture_and_skips_zero_cost() {
    let records = SurveyLoader::parse_file(&fixture("surveys.csv")).unwrap();

    let report = BatchReport::price(&SurveyPricingEngine::default(), &records);

    let names: Vec<_> = report.rows.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["Artisan Coffee Blend", "Analytics Suite", "Gel Pens"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].0, 4);

    let pens = &report.rows[2];
    // 2.50 / 0.6 × 0.9 = 3.75
    assert_eq!(pens.balanced_price, dec!(3.75));
    assert_eq!(pens.conservative_price, dec!(4.31));
    assert_eq!(pens.aggressive_price, dec!(3.19));
    assert_eq!(pens.break_even_units, dec!(800));

    let suite = &report.rows[1];
    assert_eq!(suite.conservative_price, dec!(83.72));
    assert_eq!(suite.break_even_units, dec!(19));
}

#[test]
fn strategies_csv_round_trips_through_a_file() {
    let records = SurveyLoader::parse_file(&fixture("surveys.csv")).unwrap();
    let report = BatchReport::price(&SurveyPricingEngine::default(), &records);
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("strategies.csv");

    let file = std::fs::File::create(&path).unwrap();
    StrategyWriter::write(file, &report.rows).expect("should write");

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let products: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0], "Artisan Coffee Blend");
}

#[test]
fn competitor_fixture_imports_through_tracker_rules() {
    let records =
        CompetitorLoader::parse_file(&fixture("competitors.csv")).expect("fixture should load");
    let mut tracker = CompetitorTracker::with_examples();

    let accepted = CompetitorLoader::import(&mut tracker, records);

    assert_eq!(accepted, 3);
    assert_eq!(tracker.len(), 5);
    assert_eq!(tracker.lowest_price(), dec!(19.99));
    assert_eq!(tracker.highest_price(), dec!(1050.00));
}
