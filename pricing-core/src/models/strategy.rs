use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three pricing outcomes every calculator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Conservative,
    Balanced,
    Aggressive,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Conservative, Self::Balanced, Self::Aggressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Aggressive => "Aggressive",
        }
    }

    pub fn title(&self) -> String {
        format!("{} Strategy", self.as_str())
    }

    /// Accent colour used when the strategy is rendered as a card.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Conservative => "green",
            Self::Balanced => "blue",
            Self::Aggressive => "orange",
        }
    }

    pub fn pros(&self) -> &'static [&'static str] {
        match self {
            Self::Conservative => &[
                "Higher profit per unit",
                "Sustainable margins",
                "Premium perception",
                "Lower volume risk",
            ],
            Self::Balanced => &[
                "Market-competitive pricing",
                "Balanced growth",
                "Reasonable margins",
                "Flexible positioning",
            ],
            Self::Aggressive => &[
                "Fast market penetration",
                "High volume potential",
                "Competitive advantage",
                "Customer acquisition",
            ],
        }
    }

    pub fn cons(&self) -> &'static [&'static str] {
        match self {
            Self::Conservative => &[
                "Slower market penetration",
                "Higher price sensitivity",
                "Limited volume growth",
            ],
            Self::Balanced => &[
                "Moderate growth rate",
                "Average market position",
                "Margin pressure risk",
            ],
            Self::Aggressive => &[
                "Lower profit margins",
                "Sustainability concerns",
                "Price war risk",
            ],
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described strategy as shown on a results card.
///
/// Derived from survey answers on every render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingStrategy {
    pub kind: StrategyKind,
    pub price: Decimal,
    /// Margin in percent of price.
    pub margin: Decimal,
    pub reasoning: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Bare strategy prices, as produced by the dashboard calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPrices {
    pub conservative: Decimal,
    pub balanced: Decimal,
    pub aggressive: Decimal,
}

impl StrategyPrices {
    pub fn get(
        &self,
        kind: StrategyKind,
    ) -> Decimal {
        match kind {
            StrategyKind::Conservative => self.conservative,
            StrategyKind::Balanced => self.balanced,
            StrategyKind::Aggressive => self.aggressive,
        }
    }

    /// Prices in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StrategyKind, Decimal)> + '_ {
        StrategyKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
