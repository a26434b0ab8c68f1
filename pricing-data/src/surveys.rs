//! CSV loader for survey answers.
//!
//! One row per product. Headers are matched by name, so column order does not
//! matter.
//!
//! | Column                 | Required | Notes                                   |
//! |------------------------|----------|-----------------------------------------|
//! | `product_name`         | yes      |                                         |
//! | `category`             | yes      |                                         |
//! | `unit_cost`            | yes      | Amount, `$` and thousands separators ok |
//! | `business_type`        | yes      | Survey option label, e.g. `Retail Store` |
//! | `brand_positioning`    | yes      | Survey option label, e.g. `Budget/Value` |
//! | `target_audience`      | no       |                                         |
//! | `monthly_sales_volume` | no       | Empty reads as 0                        |
//! | `desired_margin`       | no       | Percent, empty reads as 25              |
//! | `competitors`          | no       | Free text                               |
//!
//! Unknown option labels are kept verbatim and price with a neutral multiplier,
//! exactly as the survey wizard result would.

use std::io::Read;
use std::path::Path;

use pricing_core::input::parse_amount;
use pricing_core::{BrandPositioning, BusinessType, SurveyData};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based, the header is not counted.
    #[error("invalid {column} '{value}' on row {row}")]
    InvalidAmount {
        column: &'static str,
        value: String,
        row: usize,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for SurveyLoadError {
    fn from(err: csv::Error) -> Self {
        SurveyLoadError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct SurveyRow {
    product_name: String,
    category: String,
    unit_cost: String,
    business_type: String,
    brand_positioning: String,
    #[serde(default)]
    target_audience: String,
    #[serde(default)]
    monthly_sales_volume: String,
    #[serde(default)]
    desired_margin: String,
    #[serde(default)]
    competitors: String,
}

/// A parsed survey together with its row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    pub row: usize,
    pub survey: SurveyData,
}

fn amount(
    column: &'static str,
    value: &str,
    row: usize,
) -> Result<Decimal, SurveyLoadError> {
    parse_amount(value).map_err(|_| SurveyLoadError::InvalidAmount {
        column,
        value: value.to_string(),
        row,
    })
}

fn convert_row(
    row: SurveyRow,
    row_number: usize,
) -> Result<SurveyRecord, SurveyLoadError> {
    let unit_cost = amount("unit_cost", &row.unit_cost, row_number)?;
    let monthly_sales_volume =
        amount("monthly_sales_volume", &row.monthly_sales_volume, row_number)?;
    let desired_margin = if row.desired_margin.trim().is_empty() {
        SurveyData::default_desired_margin()
    } else {
        amount("desired_margin", &row.desired_margin, row_number)?
    };

    Ok(SurveyRecord {
        row: row_number,
        survey: SurveyData {
            product_name: row.product_name,
            category: row.category,
            unit_cost,
            target_audience: row.target_audience,
            monthly_sales_volume,
            business_type: BusinessType::parse(&row.business_type),
            brand_positioning: BrandPositioning::parse(&row.brand_positioning),
            desired_margin,
            competitors: row.competitors,
        },
    })
}

pub struct SurveyLoader;

impl SurveyLoader {
    /// Parses survey rows in file order.
    ///
    /// # Errors
    ///
    /// * [`SurveyLoadError::CsvParse`] when the CSV is malformed or a required
    ///   column is missing.
    /// * [`SurveyLoadError::InvalidAmount`] when a numeric cell cannot be read.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SurveyRecord>, SurveyLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<SurveyRow>()
            .enumerate()
            .map(|(idx, result)| convert_row(result?, idx + 1))
            .collect()
    }

    pub fn parse_file(path: &Path) -> Result<Vec<SurveyRecord>, SurveyLoadError> {
        let file = std::fs::File::open(path).map_err(|source| SurveyLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }
}
