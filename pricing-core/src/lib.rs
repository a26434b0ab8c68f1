pub mod calculations;
pub mod input;
pub mod models;
pub mod questionnaire;

pub use models::*;
