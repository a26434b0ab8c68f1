//! Dashboard tabs: calculator, competitors, charts and scenarios.

use pricing_core::StrategyKind;
use pricing_core::calculations::SliderRange;
use rust_decimal::Decimal;

use super::{Style, bar, heading, money, percent};
use crate::state::{DashboardState, Tab};

const BAR_WIDTH: usize = 30;

/// Renders one tab, or all of them in order when `tab` is `None`.
pub fn render_dashboard(
    state: &DashboardState,
    tab: Option<Tab>,
    style: Style,
) -> String {
    let tabs: Vec<Tab> = match tab {
        Some(tab) => vec![tab],
        None => Tab::ALL.to_vec(),
    };

    let labels: Vec<String> = Tab::ALL
        .iter()
        .map(|t| {
            if tabs.len() == 1 && tabs[0] == *t {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect();

    let mut out = format!("{}\n\n", labels.join(" | "));
    for (idx, tab) in tabs.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&render_tab(state, *tab, style));
    }
    out
}

pub fn render_tab(
    state: &DashboardState,
    tab: Tab,
    style: Style,
) -> String {
    match tab {
        Tab::Calculator => render_calculator(state, style),
        Tab::Competitors => render_competitors(state, style),
        Tab::Charts => render_charts(state, style),
        Tab::Scenarios => render_scenarios(state, style),
    }
}

pub fn render_calculator(
    state: &DashboardState,
    style: Style,
) -> String {
    let product = &state.product;
    let costs = &state.costs;
    let mut out = heading("Product Information", "Enter your product details and costs");

    out.push_str(&format!("  Product Name: {}\n", or_dash(&product.name)));
    out.push_str(&format!("  SKU: {}\n", or_dash(&product.sku)));
    out.push_str(&format!("  Base Cost: {}\n", money(product.base_cost)));
    out.push_str(&format!(
        "  Desired Profit Margin: {}%\n\n",
        product.desired_margin.normalize()
    ));

    for (kind, price) in state.strategy_prices().iter() {
        out.push_str(&format!(
            "  {:<13} {}\n",
            kind.as_str(),
            style.paint(kind.accent(), &money(price))
        ));
    }
    out.push('\n');

    out.push_str(&heading(
        "Fixed Operating Costs",
        "Monthly fixed expenses that affect your pricing",
    ));
    for (label, amount) in [
        ("Rent", costs.rent),
        ("Utilities", costs.utilities),
        ("Salaries", costs.salaries),
        ("Other Expenses", costs.other),
    ] {
        out.push_str(&format!("  {label:<15} {}\n", money(amount)));
    }
    out.push_str(&format!(
        "  Total Monthly Fixed Costs: {}\n",
        style.paint("blue", &money(state.operating_total()))
    ));
    out
}

pub fn render_competitors(
    state: &DashboardState,
    style: Style,
) -> String {
    let summary = state.market_summary();
    let mut out = heading("Market Analysis", "Competitive pricing insights");

    out.push_str(&format!(
        "  Lowest Price: {}   Average Price: {}   Highest Price: {}\n\n",
        style.paint("green", &money(summary.lowest)),
        style.paint("blue", &money(summary.average)),
        style.paint("orange", &money(summary.highest)),
    ));

    out.push_str("Competitors\n");
    if state.competitors.is_empty() {
        out.push_str("  (none tracked)\n");
    }
    for competitor in state.competitors.competitors() {
        out.push_str(&format!(
            "  #{} {}  {}\n",
            competitor.id,
            competitor.name,
            money(competitor.price)
        ));
        if !competitor.features.is_empty() {
            out.push_str(&format!("      {}\n", competitor.features));
        }
    }
    out
}

pub fn render_charts(
    state: &DashboardState,
    style: Style,
) -> String {
    let series = state.strategy_series();
    let best = best_strategy(state);
    let mut out = heading(
        "Pricing Strategy Comparison",
        "Compare profit margins across different strategies",
    );

    let max_price = series
        .iter()
        .map(|p| p.price)
        .max()
        .unwrap_or(Decimal::ZERO);
    for point in &series {
        let margin = point.margin.map(percent).unwrap_or_else(|| "—".to_string());
        let name = format!("{:<13}", point.kind.as_str());
        let name = if best == Some(point.kind) && point.profit > Decimal::ZERO {
            style.paint(point.kind.accent(), &name)
        } else {
            name
        };
        out.push_str(&format!(
            "  {name} price  {:<w$} {}\n",
            bar(point.price, max_price, BAR_WIDTH),
            money(point.price),
            w = BAR_WIDTH
        ));
        out.push_str(&format!(
            "  {:<13} profit {:<w$} {}  margin {}\n",
            "",
            bar(point.profit, max_price, BAR_WIDTH),
            money(point.profit),
            margin,
            w = BAR_WIDTH
        ));
    }
    out.push('\n');

    let breakdown = state.cost_breakdown();
    out.push_str(&heading("Cost Breakdown", "Visualize your cost structure"));
    if breakdown.slices.is_empty() {
        out.push_str("  No costs entered\n");
        return out;
    }
    let largest = breakdown
        .slices
        .iter()
        .map(|s| s.amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    for (slice, (_, share)) in breakdown.slices.iter().zip(breakdown.shares()) {
        out.push_str(&format!(
            "  {:<10} {:<w$} {} ({})\n",
            slice.label,
            bar(slice.amount, largest, BAR_WIDTH),
            money(slice.amount),
            percent(share),
            w = BAR_WIDTH
        ));
    }
    out.push_str(&format!("  Total: {}\n", money(breakdown.total())));
    out
}

fn slider_line(
    label: &str,
    value: Decimal,
) -> String {
    let change = ((value - Decimal::ONE) * Decimal::ONE_HUNDRED).round();
    let range = SliderRange::MULTIPLIER;
    format!(
        "  {label:<22} {}x  ({change:+}%)  [{} - {}]\n",
        value.normalize(),
        range.min.normalize(),
        range.max.normalize()
    )
}

pub fn render_scenarios(
    state: &DashboardState,
    style: Style,
) -> String {
    let inputs = &state.scenario;
    let result = state.scenario_result();
    let mut out = heading(
        "Scenario Simulator",
        "Adjust variables to see real-time impact on pricing",
    );

    out.push_str(&slider_line("Cost Change Factor", inputs.cost_multiplier));
    out.push_str(&slider_line("Margin Adjustment", inputs.margin_multiplier));
    out.push_str(&slider_line("Rent Change", inputs.rent_multiplier));
    out.push_str(&format!(
        "  {:<22} {} units  [{} - {}]\n\n",
        "Monthly Sales Volume",
        inputs.volume_estimate.normalize(),
        SliderRange::VOLUME.min,
        SliderRange::VOLUME.max
    ));

    out.push_str(&heading("Scenario Results", "See the impact of your adjustments"));
    let monthly = money(result.monthly_profit);
    out.push_str(&format!("  New Price: {}\n", money(result.new_price)));
    out.push_str(&format!("  Profit per Unit: {}\n", money(result.profit_per_unit)));
    out.push_str(&format!(
        "  Monthly Profit: {}\n",
        if result.is_loss() {
            style.paint("red", &monthly)
        } else {
            style.paint("purple", &monthly)
        }
    ));
    out.push_str(&format!("  Break-even Units: {}\n\n", result.break_even));

    out.push_str("Scenario Summary\n");
    out.push_str(&format!(
        "  Adjusted Base Cost: {}\n",
        money(result.adjusted_base_cost)
    ));
    out.push_str(&format!("  Adjusted Margin: {}\n", percent(result.adjusted_margin)));
    out.push_str(&format!("  Adjusted Rent: {}\n", money(result.adjusted_rent)));

    if result.is_loss() {
        out.push('\n');
        out.push_str(&style.paint("red", "⚠️ Warning"));
        out.push('\n');
        out.push_str(
            "Current scenario results in negative monthly profit. \
             Consider adjusting pricing or reducing costs.\n",
        );
    }
    out
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() { "—" } else { text }
}

/// Strategy with the highest profit per unit.
pub fn best_strategy(state: &DashboardState) -> Option<StrategyKind> {
    state
        .strategy_series()
        .into_iter()
        .max_by_key(|p| p.profit)
        .map(|p| p.kind)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn state() -> DashboardState {
        let mut state = DashboardState::default();
        state.product.name = "Soy Candle".to_string();
        state.product.base_cost = dec!(100);
        state.costs.rent = dec!(1500);
        state.costs.utilities = dec!(500);
        state
    }

    #[test]
    fn calculator_lists_prices_and_total() {
        let text = render_calculator(&state(), Style::PLAIN);

        assert!(text.contains("  Conservative  $135.00\n"));
        assert!(text.contains("  Balanced      $125.00\n"));
        assert!(text.contains("  Aggressive    $120.00\n"));
        assert!(text.contains("Total Monthly Fixed Costs: $2000.00"));
        assert!(text.contains("SKU: —"));
    }

    #[test]
    fn competitors_tab_shows_aggregates() {
        let text = render_competitors(&state(), Style::PLAIN);

        assert!(text.contains("Lowest Price: $29.99   Average Price: $34.99   Highest Price: $39.99"));
        assert!(text.contains("#1 Competitor A  $29.99"));
    }

    #[test]
    fn empty_competitor_list_reads_zero() {
        let mut state = state();
        state.competitors = Default::default();

        let text = render_competitors(&state, Style::PLAIN);

        assert!(text.contains("Lowest Price: $0.00"));
        assert!(text.contains("(none tracked)"));
    }

    #[test]
    fn charts_show_margin_dash_for_free_product() {
        let mut state = state();
        state.product.base_cost = dec!(0);

        let text = render_charts(&state, Style::PLAIN);

        assert!(text.contains("margin —"));
        assert!(text.contains("Rent"));
        assert!(!text.contains("Base Cost"));
    }

    #[test]
    fn scenario_warns_on_loss() {
        let text = render_scenarios(&state(), Style::PLAIN);

        // 25 × 100 - 2000 = 500
        assert!(text.contains("Monthly Profit: $500.00"));
        assert!(text.contains("Break-even Units: 80"));
        assert!(!text.contains("Warning"));

        let mut losing = state();
        losing.scenario.set_volume_estimate(dec!(40));
        let text = render_scenarios(&losing, Style::PLAIN);

        assert!(text.contains("Monthly Profit: -$1000.00"));
        assert!(text.contains("⚠️ Warning"));
    }

    #[test]
    fn zero_profit_break_even_is_infinite() {
        let mut state = state();
        state.product.base_cost = dec!(0);

        let text = render_scenarios(&state, Style::PLAIN);

        assert!(text.contains("Break-even Units: ∞"));
    }

    #[test]
    fn single_tab_is_marked() {
        let text = render_dashboard(&state(), Some(Tab::Charts), Style::PLAIN);

        assert!(text.starts_with("Calculator | Competitors | [Charts] | Scenarios\n"));
        assert!(!text.contains("Scenario Simulator"));
    }

    #[test]
    fn best_strategy_is_conservative_for_positive_markup() {
        assert_eq!(best_strategy(&state()), Some(StrategyKind::Conservative));
    }
}
