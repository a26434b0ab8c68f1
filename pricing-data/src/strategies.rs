//! Batch pricing of survey rows and the strategies CSV it produces.

use std::io::Write;

use pricing_core::StrategyKind;
use pricing_core::calculations::common::{round_half_up, round_percent};
use pricing_core::calculations::{SurveyAnalysis, SurveyPricingEngine, SurveyPricingError};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::SurveyRecord;

/// One output row: the three strategies for one survey.
///
/// Prices are rounded to cents and margins to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyRow {
    pub product_name: String,
    pub conservative_price: Decimal,
    pub conservative_margin: Decimal,
    pub balanced_price: Decimal,
    pub balanced_margin: Decimal,
    pub aggressive_price: Decimal,
    pub aggressive_margin: Decimal,
    pub break_even_units: Decimal,
    /// Recommendation messages separated by `"; "`.
    pub recommendations: String,
}

impl StrategyRow {
    pub fn from_analysis(
        product_name: &str,
        analysis: &SurveyAnalysis,
    ) -> Self {
        let price_and_margin = |kind: StrategyKind| {
            analysis
                .strategy(kind)
                .map(|s| (round_half_up(s.price), round_percent(s.margin)))
                .unwrap_or_default()
        };
        let (conservative_price, conservative_margin) =
            price_and_margin(StrategyKind::Conservative);
        let (balanced_price, balanced_margin) = price_and_margin(StrategyKind::Balanced);
        let (aggressive_price, aggressive_margin) = price_and_margin(StrategyKind::Aggressive);

        Self {
            product_name: product_name.to_string(),
            conservative_price,
            conservative_margin,
            balanced_price,
            balanced_margin,
            aggressive_price,
            aggressive_margin,
            break_even_units: analysis.break_even_units,
            recommendations: analysis
                .recommendations
                .iter()
                .map(|r| r.message())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Outcome of pricing a batch of surveys.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rows: Vec<StrategyRow>,
    /// Input row number and reason for every survey that could not be priced.
    pub skipped: Vec<(usize, SurveyPricingError)>,
}

impl BatchReport {
    /// Prices every record. A survey the engine rejects is skipped, not fatal.
    pub fn price(
        engine: &SurveyPricingEngine,
        records: &[SurveyRecord],
    ) -> Self {
        let mut report = Self::default();
        for record in records {
            match engine.analyze(&record.survey) {
                Ok(analysis) => {
                    debug!(row = record.row, product = %record.survey.product_name, "survey priced");
                    report
                        .rows
                        .push(StrategyRow::from_analysis(&record.survey.product_name, &analysis));
                }
                Err(e) => {
                    warn!(row = record.row, product = %record.survey.product_name, "survey skipped: {}", e);
                    report.skipped.push((record.row, e));
                }
            }
        }
        report
    }
}

pub struct StrategyWriter;

impl StrategyWriter {
    /// Writes `rows` as CSV with a header line.
    pub fn write<W: Write>(
        writer: W,
        rows: &[StrategyRow],
    ) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
