pub mod competitors;
pub mod strategies;
pub mod surveys;

pub use competitors::{CompetitorLoadError, CompetitorLoader};
pub use strategies::{BatchReport, StrategyRow, StrategyWriter};
pub use surveys::{SurveyLoadError, SurveyLoader, SurveyRecord};
