//! Downloadable pricing report.
//!
//! The text report is the results screen without colour, preceded by a
//! title and the time it was generated. [`PricingReport`] is the same data
//! in serialisable form for `--json` output.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use pricing_core::SurveyData;
use pricing_core::calculations::SurveyAnalysis;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::views::Style;
use crate::views::results::render_results;

pub const REPORT_TITLE: &str = "PriceWise AI Pricing Report";

/// File name used when the user does not choose one.
pub const DEFAULT_REPORT_FILE: &str = "pricewise-report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingReport<'a> {
    pub generated_at: DateTime<Local>,
    pub survey: &'a SurveyData,
    pub analysis: &'a SurveyAnalysis,
}

impl<'a> PricingReport<'a> {
    pub fn new(
        survey: &'a SurveyData,
        analysis: &'a SurveyAnalysis,
    ) -> Self {
        Self {
            generated_at: Local::now(),
            survey,
            analysis,
        }
    }

    /// Plain-text rendering.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{REPORT_TITLE}\nGenerated {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M")
        );
        out.push_str(&render_results(self.survey, self.analysis, Style::PLAIN));
        out
    }

    /// Writes the text report to `path`, replacing any existing file.
    pub fn write(
        &self,
        path: &Path,
    ) -> Result<(), ReportError> {
        std::fs::write(path, self.render()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), product = %self.survey.product_name, "Report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pricing_core::calculations::SurveyPricingEngine;
    use pricing_core::{BrandPositioning, BusinessType};
    use rust_decimal_macros::dec;

    use super::*;

    fn survey() -> SurveyData {
        SurveyData {
            product_name: "Tote Bag".to_string(),
            category: "Fashion".to_string(),
            unit_cost: dec!(12),
            target_audience: "Students".to_string(),
            monthly_sales_volume: dec!(150),
            business_type: BusinessType::ECommerce,
            brand_positioning: BrandPositioning::MidRangeQuality,
            desired_margin: dec!(40),
            competitors: String::new(),
        }
    }

    #[test]
    fn report_starts_with_title_and_timestamp() {
        let survey = survey();
        let analysis = SurveyPricingEngine::default().analyze(&survey).unwrap();

        let text = PricingReport::new(&survey, &analysis).render();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(REPORT_TITLE));
        assert!(lines.next().is_some_and(|l| l.starts_with("Generated ")));
        assert!(text.contains("AI Pricing Analysis"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn write_reports_missing_directory() {
        let survey = survey();
        let analysis = SurveyPricingEngine::default().analyze(&survey).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let err = PricingReport::new(&survey, &analysis)
            .write(&path)
            .expect_err("should fail");

        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn json_carries_survey_and_analysis() {
        let survey = survey();
        let analysis = SurveyPricingEngine::default().analyze(&survey).unwrap();

        let value = serde_json::to_value(PricingReport::new(&survey, &analysis)).unwrap();

        assert_eq!(value["survey"]["product_name"], "Tote Bag");
        assert_eq!(value["analysis"]["strategies"].as_array().map(Vec::len), Some(3));
    }
}
