//! Landing page.

use super::{Style, heading};

const STEPS: [(&str, &str); 3] = [
    (
        "Answer Smart Questions",
        "A short conversational survey about your product, business and market.",
    ),
    (
        "Analyze Your Market",
        "Your answers are weighed against positioning and business model benchmarks.",
    ),
    (
        "Get Tailored Strategies",
        "Three pricing strategies with reasoning, advantages and considerations.",
    ),
];

pub fn render_landing(style: Style) -> String {
    let mut out = String::new();
    out.push_str(&style.paint("blue", "PriceWise AI"));
    out.push_str("\n\n");
    out.push_str("AI-Powered Pricing Made Simple\n");
    out.push_str(
        "Get pricing recommendations in minutes based on your business, \
         competitors and market positioning.\n\n",
    );

    out.push_str(&heading("How PriceWise AI Works", ""));
    for (number, (title, text)) in STEPS.iter().enumerate() {
        out.push_str(&format!("  {}. {title}\n     {text}\n", number + 1));
    }
    out.push('\n');
    out.push_str("Conservative, Balanced, and Aggressive strategies let you choose by your goals.\n");
    out.push_str("No signup required • Get results instantly • 100% free\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_lists_the_three_steps() {
        let text = render_landing(Style::PLAIN);

        assert!(text.starts_with("PriceWise AI\n"));
        assert!(text.contains("1. Answer Smart Questions"));
        assert!(text.contains("3. Get Tailored Strategies"));
    }
}
