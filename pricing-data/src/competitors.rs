//! Bulk import of competitors from CSV.
//!
//! | Column     | Required | Notes                                  |
//! |------------|----------|----------------------------------------|
//! | `name`     | yes      |                                        |
//! | `price`    | yes      | `29.99`, `$29.99` and `1,299` all work |
//! | `features` | no       | Free text, empty when the column is absent |
//!
//! ```csv
//! name,price,features
//! Corner Shop,24.50,Local delivery
//! Mega Mart,$19.99,
//! ```
//!
//! Parsing only checks the file structure. Rows are added to a tracker through
//! [`CompetitorLoader::import`], which applies the same rules as the
//! dashboard form: blank names and non-positive prices are skipped.

use std::io::Read;
use std::path::Path;

use pricing_core::NewCompetitor;
use pricing_core::calculations::CompetitorTracker;
use pricing_core::input::parse_amount;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CompetitorLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based, the header is not counted.
    #[error("invalid price '{value}' on row {row}")]
    InvalidPrice { value: String, row: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for CompetitorLoadError {
    fn from(err: csv::Error) -> Self {
        CompetitorLoadError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CompetitorRow {
    name: String,
    price: String,
    #[serde(default)]
    features: String,
}

pub struct CompetitorLoader;

impl CompetitorLoader {
    /// Parses competitor rows in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<NewCompetitor>, CompetitorLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<CompetitorRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                let price = parse_amount(&row.price).map_err(|_| {
                    CompetitorLoadError::InvalidPrice {
                        value: row.price.clone(),
                        row: idx + 1,
                    }
                })?;
                Ok(NewCompetitor {
                    name: row.name,
                    price,
                    features: row.features,
                })
            })
            .collect()
    }

    pub fn parse_file(path: &Path) -> Result<Vec<NewCompetitor>, CompetitorLoadError> {
        let file = std::fs::File::open(path).map_err(|source| CompetitorLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }

    /// Adds every record to `tracker` and returns how many were accepted.
    pub fn import(
        tracker: &mut CompetitorTracker,
        records: Vec<NewCompetitor>,
    ) -> usize {
        let total = records.len();
        let accepted = records
            .into_iter()
            .filter_map(|record| tracker.add(record))
            .count();

        if accepted < total {
            warn!(
                skipped = total - accepted,
                "Some imported competitors were skipped"
            );
        }
        info!(accepted, total, "competitors imported");
        accepted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_reads_rows_in_order() {
        let csv = "name,price,features\nCorner Shop,24.50,Local delivery\nMega Mart,19.99,\n";

        let records = CompetitorLoader::parse(csv.as_bytes()).expect("should parse");

        assert_eq!(
            records,
            vec![
                NewCompetitor {
                    name: "Corner Shop".to_string(),
                    price: dec!(24.50),
                    features: "Local delivery".to_string(),
                },
                NewCompetitor {
                    name: "Mega Mart".to_string(),
                    price: dec!(19.99),
                    features: String::new(),
                },
            ]
        );
    }

    #[test]
    fn parse_accepts_currency_formatting() {
        let csv = "name,price\nBig Box,\"$1,299.00\"\n";

        let records = CompetitorLoader::parse(csv.as_bytes()).expect("should parse");

        assert_eq!(records[0].price, dec!(1299.00));
        assert_eq!(records[0].features, "");
    }

    #[test]
    fn parse_reports_row_of_bad_price() {
        let csv = "name,price\nGood,10\nBad,ten dollars\n";

        let err = CompetitorLoader::parse(csv.as_bytes()).expect_err("should fail");

        match err {
            CompetitorLoadError::InvalidPrice { value, row } => {
                assert_eq!(value, "ten dollars");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidPrice, got {other:?}"),
        }
    }

    #[test]
    fn parse_requires_name_column() {
        let csv = "price,features\n10,Stuff\n";

        let err = CompetitorLoader::parse(csv.as_bytes()).expect_err("should fail");

        let CompetitorLoadError::CsvParse(msg) = err else {
            panic!("expected CsvParse, got {err:?}");
        };
        assert!(msg.contains("missing field"), "got: {msg}");
    }

    #[test]
    fn header_only_yields_nothing() {
        let records = CompetitorLoader::parse("name,price,features\n".as_bytes()).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn import_skips_what_the_form_would_reject() {
        let csv = "name,price\nValid,12\n,15\nFree,0\nAlso Valid,$8\n";
        let records = CompetitorLoader::parse(csv.as_bytes()).unwrap();
        let mut tracker = CompetitorTracker::default();

        let accepted = CompetitorLoader::import(&mut tracker, records);

        assert_eq!(accepted, 2);
        let names: Vec<_> = tracker.competitors().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Valid", "Also Valid"]);
        assert_eq!(tracker.lowest_price(), dec!(8));
    }

    #[test]
    fn import_keeps_average_in_range_for_huge_prices() {
        let csv = "name,price\nFair,20\nHuge A,50000000000000000000000000000\nHuge B,50000000000000000000000000000\n";
        let records = CompetitorLoader::parse(csv.as_bytes()).unwrap();
        let mut tracker = CompetitorTracker::default();

        let accepted = CompetitorLoader::import(&mut tracker, records);

        assert_eq!(accepted, 1);
        assert_eq!(tracker.average_price(), dec!(20));
    }
}
