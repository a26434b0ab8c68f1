//! TOML files that seed the dashboard and answer the survey.
//!
//! ```toml
//! [product]
//! name = "Artisan Coffee"
//! base_cost = "10.00"
//! desired_margin = "25"
//!
//! [operating_costs]
//! rent = "1200"
//!
//! [scenario]
//! margin_multiplier = "1.2"
//!
//! [[competitors]]
//! name = "Competitor A"
//! price = "29.99"
//! ```
//!
//! Every section is optional. Without a `competitors` list the dashboard
//! starts with the two example competitors; an empty list starts empty.

use std::path::{Path, PathBuf};

use pricing_core::calculations::common::MAX_AMOUNT;
use pricing_core::calculations::{CompetitorTracker, ScenarioInputs};
use pricing_core::{NewCompetitor, OperatingCosts, ProductData, SurveyData};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::state::DashboardState;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: Decimal,
        max: Decimal,
    },
}

/// Dashboard seed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub product: ProductData,
    pub operating_costs: OperatingCosts,
    pub scenario: ScenarioInputs,
    pub competitors: Option<Vec<NewCompetitor>>,
}

impl DashboardConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "dashboard config loaded");
        Ok(config)
    }

    /// Checks that every amount lies between zero and [`MAX_AMOUNT`].
    ///
    /// Competitor prices are checked by the tracker when the state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let amounts = [
            ("product.base_cost", self.product.base_cost),
            ("operating_costs.rent", self.operating_costs.rent),
            ("operating_costs.utilities", self.operating_costs.utilities),
            ("operating_costs.salaries", self.operating_costs.salaries),
            ("operating_costs.other", self.operating_costs.other),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(ConfigError::Negative { field, value });
            }
            if value > MAX_AMOUNT {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: MAX_AMOUNT,
                });
            }
        }
        Ok(())
    }

    /// Builds dashboard state, putting margin and sliders on their grids.
    pub fn into_state(self) -> DashboardState {
        let mut product = self.product;
        let requested_margin = product.desired_margin;
        product.set_desired_margin(requested_margin);
        if product.desired_margin != requested_margin {
            warn!(
                requested = %requested_margin,
                applied = %product.desired_margin,
                "Desired margin moved onto the 5-100% slider"
            );
        }

        let competitors = match self.competitors {
            Some(list) => {
                let mut tracker = CompetitorTracker::default();
                for competitor in list {
                    tracker.add(competitor);
                }
                tracker
            }
            None => CompetitorTracker::with_examples(),
        };

        DashboardState {
            product,
            costs: self.operating_costs,
            competitors,
            scenario: self.scenario.snapped(),
            ..DashboardState::default()
        }
    }
}

/// Loads survey answers from a TOML file using the survey field names.
///
/// `desired_margin` defaults to 25 and `competitors` to empty.
pub fn load_survey_answers(path: &Path) -> Result<SurveyData, ConfigError> {
    let text = read(path)?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
