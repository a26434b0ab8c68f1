//! Competitor price tracking.
//!
//! Keeps the ordered list of competitors entered on the dashboard and derives
//! the lowest, average and highest price from it on every read.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::MAX_AMOUNT;
use crate::{Competitor, CompetitorId, NewCompetitor};

/// Price aggregates over the tracked competitors.
///
/// All three prices are zero when no competitors are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub count: usize,
    pub lowest: Decimal,
    pub average: Decimal,
    pub highest: Decimal,
}

/// Ordered, append-only list of competitors with removal by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorTracker {
    competitors: Vec<Competitor>,
}

impl CompetitorTracker {
    pub fn new(competitors: Vec<Competitor>) -> Self {
        Self { competitors }
    }

    /// Tracker seeded with the two example competitors shown on first use.
    pub fn with_examples() -> Self {
        Self::new(vec![
            Competitor {
                id: CompetitorId(1),
                name: "Competitor A".to_string(),
                price: Decimal::new(2999, 2),
                features: "Basic features".to_string(),
            },
            Competitor {
                id: CompetitorId(2),
                name: "Competitor B".to_string(),
                price: Decimal::new(3999, 2),
                features: "Premium features".to_string(),
            },
        ])
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Adds a competitor stamped with the current time.
    ///
    /// Returns `None` and leaves the list unchanged when the name is blank
    /// (empty after trimming whitespace) or the price is not positive or is
    /// above [`MAX_AMOUNT`].
    pub fn add(
        &mut self,
        competitor: NewCompetitor,
    ) -> Option<CompetitorId> {
        self.add_at(competitor, Utc::now().timestamp_millis())
    }

    /// Adds a competitor using `now_millis` as the creation time.
    ///
    /// Ids stay unique and increasing even when several competitors are
    /// added within the same millisecond.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pricing_core::{CompetitorId, NewCompetitor};
    /// use pricing_core::calculations::CompetitorTracker;
    ///
    /// let mut tracker = CompetitorTracker::default();
    /// let entry = NewCompetitor {
    ///     name: "Corner Shop".to_string(),
    ///     price: dec!(24.50),
    ///     features: String::new(),
    /// };
    ///
    /// assert_eq!(tracker.add_at(entry.clone(), 1_700_000_000_000), Some(CompetitorId(1_700_000_000_000)));
    /// assert_eq!(tracker.add_at(entry, 1_700_000_000_000), Some(CompetitorId(1_700_000_000_001)));
    /// ```
    pub fn add_at(
        &mut self,
        competitor: NewCompetitor,
        now_millis: i64,
    ) -> Option<CompetitorId> {
        if competitor.name.trim().is_empty() {
            warn!("Competitor name is empty; entry ignored");
            return None;
        }
        if competitor.price <= Decimal::ZERO {
            warn!(
                name = %competitor.name,
                price = %competitor.price,
                "Competitor price must be positive; entry ignored"
            );
            return None;
        }
        if competitor.price > MAX_AMOUNT {
            warn!(
                name = %competitor.name,
                price = %competitor.price,
                "Competitor price is above the supported maximum; entry ignored"
            );
            return None;
        }

        let id = match self.competitors.iter().map(|c| c.id.0).max() {
            Some(last) if last >= now_millis => CompetitorId(last + 1),
            _ => CompetitorId(now_millis),
        };

        debug!(id = %id, name = %competitor.name, price = %competitor.price, "competitor added");

        self.competitors.push(Competitor {
            id,
            name: competitor.name,
            price: competitor.price,
            features: competitor.features,
        });
        Some(id)
    }

    /// Removes the competitor with `id`. Returns `false` if no entry matched.
    pub fn remove(
        &mut self,
        id: CompetitorId,
    ) -> bool {
        let before = self.competitors.len();
        self.competitors.retain(|c| c.id != id);
        let removed = self.competitors.len() != before;
        if removed {
            debug!(id = %id, "competitor removed");
        }
        removed
    }

    pub fn average_price(&self) -> Decimal {
        if self.competitors.is_empty() {
            return Decimal::ZERO;
        }
        let total: Decimal = self.competitors.iter().map(|c| c.price).sum();
        total / Decimal::from(self.competitors.len())
    }

    pub fn lowest_price(&self) -> Decimal {
        self.competitors
            .iter()
            .map(|c| c.price)
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn highest_price(&self) -> Decimal {
        self.competitors
            .iter()
            .map(|c| c.price)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn summary(&self) -> MarketSummary {
        MarketSummary {
            count: self.competitors.len(),
            lowest: self.lowest_price(),
            average: self.average_price(),
            highest: self.highest_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const NOW: i64 = 1_735_689_600_000;

    fn entry(
        name: &str,
        price: Decimal,
    ) -> NewCompetitor {
        NewCompetitor {
            name: name.to_string(),
            price,
            features: "Standard".to_string(),
        }
    }

    #[test]
    fn examples_seed_two_competitors() {
        let tracker = CompetitorTracker::with_examples();

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.competitors()[0].name, "Competitor A");
        assert_eq!(tracker.competitors()[1].price, dec!(39.99));
    }

    #[test]
    fn empty_tracker_reports_zero_aggregates() {
        let tracker = CompetitorTracker::default();

        assert_eq!(
            tracker.summary(),
            MarketSummary {
                count: 0,
                lowest: dec!(0),
                average: dec!(0),
                highest: dec!(0),
            }
        );
    }

    #[test]
    fn aggregates_over_examples() {
        let summary = CompetitorTracker::with_examples().summary();

        assert_eq!(summary.lowest, dec!(29.99));
        assert_eq!(summary.average, dec!(34.99));
        assert_eq!(summary.highest, dec!(39.99));
    }

    #[test]
    fn add_appends_with_timestamp_id() {
        let mut tracker = CompetitorTracker::with_examples();

        let id = tracker.add_at(entry("Competitor C", dec!(15.00)), NOW);

        assert_eq!(id, Some(CompetitorId(NOW)));
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.competitors()[2].name, "Competitor C");
        assert_eq!(tracker.lowest_price(), dec!(15.00));
    }

    #[test]
    fn add_ignores_blank_name() {
        let mut tracker = CompetitorTracker::with_examples();

        assert_eq!(tracker.add_at(entry("  ", dec!(10)), NOW), None);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn add_ignores_price_above_maximum() {
        let mut tracker = CompetitorTracker::default();

        assert_eq!(tracker.add_at(entry("Luxury", MAX_AMOUNT + dec!(0.01)), NOW), None);
        assert_eq!(tracker.add_at(entry("Yacht", MAX_AMOUNT), NOW), Some(CompetitorId(NOW)));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn add_ignores_zero_price() {
        let mut tracker = CompetitorTracker::with_examples();

        assert_eq!(tracker.add_at(entry("Freebie", dec!(0)), NOW), None);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn add_ignores_negative_price() {
        let mut tracker = CompetitorTracker::default();

        assert_eq!(tracker.add_at(entry("Refund Co", dec!(-5)), NOW), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn ids_increase_when_clock_does_not() {
        let mut tracker = CompetitorTracker::default();

        let first = tracker.add_at(entry("One", dec!(1)), NOW);
        let second = tracker.add_at(entry("Two", dec!(2)), NOW - 5);

        assert_eq!(first, Some(CompetitorId(NOW)));
        assert_eq!(second, Some(CompetitorId(NOW + 1)));
    }

    #[test]
    fn add_with_wall_clock_succeeds() {
        let mut tracker = CompetitorTracker::with_examples();

        let id = tracker.add(entry("Live", dec!(12)));

        assert!(id.is_some_and(|id| id > CompetitorId(2)));
    }

    #[test]
    fn remove_recomputes_aggregates() {
        let mut tracker = CompetitorTracker::with_examples();

        assert!(tracker.remove(CompetitorId(2)));

        let summary = tracker.summary();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.highest, dec!(29.99));
        assert_eq!(summary.average, dec!(29.99));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut tracker = CompetitorTracker::with_examples();
        let before = tracker.clone();

        assert!(!tracker.remove(CompetitorId(42)));
        assert_eq!(tracker, before);
    }

    #[test]
    fn removing_everything_returns_to_zero() {
        let mut tracker = CompetitorTracker::with_examples();

        tracker.remove(CompetitorId(1));
        tracker.remove(CompetitorId(2));

        assert_eq!(tracker.average_price(), dec!(0));
        assert_eq!(tracker.lowest_price(), dec!(0));
    }
}
