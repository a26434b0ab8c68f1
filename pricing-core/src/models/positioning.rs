use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of business the product is sold through.
///
/// Labels outside the survey's option list are kept verbatim in
/// [`BusinessType::Unlisted`] and price with a neutral multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BusinessType {
    RetailStore,
    ECommerce,
    ServiceProvider,
    Manufacturing,
    RestaurantFood,
    SaasSoftware,
    Other,
    Unlisted(String),
}

impl BusinessType {
    /// Survey options, in the order they are offered.
    pub const OPTIONS: [BusinessType; 7] = [
        Self::RetailStore,
        Self::ECommerce,
        Self::ServiceProvider,
        Self::Manufacturing,
        Self::RestaurantFood,
        Self::SaasSoftware,
        Self::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::RetailStore => "Retail Store",
            Self::ECommerce => "E-commerce",
            Self::ServiceProvider => "Service Provider",
            Self::Manufacturing => "Manufacturing",
            Self::RestaurantFood => "Restaurant/Food",
            Self::SaasSoftware => "SaaS/Software",
            Self::Other => "Other",
            Self::Unlisted(label) => label,
        }
    }

    /// Maps a survey label to a business type. Matching is exact.
    pub fn parse(s: &str) -> Self {
        match s {
            "Retail Store" => Self::RetailStore,
            "E-commerce" => Self::ECommerce,
            "Service Provider" => Self::ServiceProvider,
            "Manufacturing" => Self::Manufacturing,
            "Restaurant/Food" => Self::RestaurantFood,
            "SaaS/Software" => Self::SaasSoftware,
            "Other" => Self::Other,
            other => Self::Unlisted(other.to_string()),
        }
    }

    /// Price multiplier applied on top of the margin-derived base price.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::SaasSoftware => Decimal::new(13, 1),
            Self::ServiceProvider => Decimal::new(12, 1),
            Self::RetailStore => Decimal::new(11, 1),
            Self::RestaurantFood => Decimal::new(105, 2),
            Self::Manufacturing => Decimal::new(95, 2),
            Self::ECommerce | Self::Other | Self::Unlisted(_) => Decimal::ONE,
        }
    }
}

impl From<String> for BusinessType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BusinessType> for String {
    fn from(value: BusinessType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BusinessType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market tier the brand is positioned in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BrandPositioning {
    PremiumLuxury,
    MidRangeQuality,
    BudgetValue,
    EconomyBasic,
    Unlisted(String),
}

impl BrandPositioning {
    /// Survey options, in the order they are offered.
    pub const OPTIONS: [BrandPositioning; 4] = [
        Self::PremiumLuxury,
        Self::MidRangeQuality,
        Self::BudgetValue,
        Self::EconomyBasic,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::PremiumLuxury => "Premium/Luxury",
            Self::MidRangeQuality => "Mid-range/Quality",
            Self::BudgetValue => "Budget/Value",
            Self::EconomyBasic => "Economy/Basic",
            Self::Unlisted(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Premium/Luxury" => Self::PremiumLuxury,
            "Mid-range/Quality" => Self::MidRangeQuality,
            "Budget/Value" => Self::BudgetValue,
            "Economy/Basic" => Self::EconomyBasic,
            other => Self::Unlisted(other.to_string()),
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::PremiumLuxury => Decimal::new(14, 1),
            Self::MidRangeQuality => Decimal::new(11, 1),
            Self::BudgetValue => Decimal::new(9, 1),
            Self::EconomyBasic => Decimal::new(8, 1),
            Self::Unlisted(_) => Decimal::ONE,
        }
    }

    /// True when the label mentions the premium tier, listed or not.
    pub fn is_premium(&self) -> bool {
        self.as_str().contains("Premium")
    }
}

impl From<String> for BrandPositioning {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BrandPositioning> for String {
    fn from(value: BrandPositioning) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BrandPositioning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
