mod competitor;
mod positioning;
mod product;
mod strategy;
mod survey;

pub use competitor::{Competitor, CompetitorId, NewCompetitor};
pub use positioning::{BrandPositioning, BusinessType};
pub use product::{OperatingCosts, ProductData};
pub use strategy::{PricingStrategy, StrategyKind, StrategyPrices};
pub use survey::SurveyData;
