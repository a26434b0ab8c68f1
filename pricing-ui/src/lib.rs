pub mod config;
pub mod logging;
pub mod report;
pub mod session;
pub mod state;
pub mod views;

pub use config::{ConfigError, DashboardConfig, load_survey_answers};
pub use report::{PricingReport, ReportError};
pub use session::Session;
pub use state::{AppState, DashboardState, Tab, View};
