//! Results screen: analysis header, strategy cards and market context.

use std::sync::OnceLock;

use pricing_core::SurveyData;
use pricing_core::calculations::SurveyAnalysis;
use pricing_core::input::parse_amount;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use super::{Style, heading, money, percent};

static QUOTED_PRICE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Dollar amounts quoted in free-text competitor notes, in order.
///
/// `"A: $25, B: $1,299.99"` yields `[25, 1299.99]`. For a range such as
/// `$15-20` only the amount after the `$` is taken.
pub fn quoted_prices(notes: &str) -> Result<Vec<Decimal>, regex::Error> {
    let re = QUOTED_PRICE
        .get_or_init(|| Regex::new(r"\$\s?(\d[\d,]*(?:\.\d+)?)"))
        .as_ref()
        .map_err(Clone::clone)?;

    Ok(re
        .captures_iter(notes)
        .filter_map(|cap| parse_amount(&cap[1]).ok())
        .collect())
}

pub fn render_results(
    survey: &SurveyData,
    analysis: &SurveyAnalysis,
    style: Style,
) -> String {
    let mut out = String::new();

    out.push_str(&heading(
        "AI Pricing Analysis",
        &format!(
            "Based on your {} in the {} market",
            survey.product_name, survey.category
        ),
    ));
    out.push_str(&format!(
        "  Product Cost: {}   Target Margin: {}%   Break-even Units: {}/month\n\n",
        money(survey.unit_cost),
        survey.desired_margin.normalize(),
        analysis.break_even_units
    ));

    for strategy in &analysis.strategies {
        let title = strategy.kind.title();
        out.push_str(&style.paint(strategy.kind.accent(), &title));
        out.push('\n');
        out.push_str(&"-".repeat(title.chars().count()));
        out.push('\n');
        out.push_str(&format!(
            "  {}   ({} Margin)\n",
            style.paint(strategy.kind.accent(), &money(strategy.price)),
            percent(strategy.margin)
        ));
        out.push_str(&format!("  {}\n", strategy.reasoning));
        out.push_str("  Advantages\n");
        for pro in &strategy.pros {
            out.push_str(&format!("    • {pro}\n"));
        }
        out.push_str("  Considerations\n");
        for con in &strategy.cons {
            out.push_str(&format!("    • {con}\n"));
        }
        out.push('\n');
    }

    out.push_str(&heading("Market Context & Recommendations", ""));
    out.push_str("Business Profile Analysis\n");
    out.push_str(&format!("  Business Type: {}\n", survey.business_type));
    out.push_str(&format!("  Brand Position: {}\n", survey.brand_positioning));
    out.push_str(&format!(
        "  Target Volume: {} units/month\n",
        survey.monthly_sales_volume.normalize()
    ));

    out.push_str("AI Recommendations\n");
    for hint in &analysis.recommendations {
        out.push_str(&format!("  {hint}\n"));
    }

    out.push_str("Competitive Intelligence\n");
    if survey.competitors.trim().is_empty() {
        out.push_str("  Competitor Analysis: No specific competitor data provided\n");
    } else {
        out.push_str(&format!("  Competitor Analysis: {}\n", survey.competitors));
        let quoted = quoted_prices(&survey.competitors).unwrap_or_else(|e| {
            warn!("competitor price scan failed: {}", e);
            Vec::new()
        });
        if !quoted.is_empty() {
            let listed: Vec<String> = quoted.iter().map(|p| money(*p)).collect();
            out.push_str(&format!("  Quoted prices: {}\n", listed.join(", ")));
        }
    }
    out
}
