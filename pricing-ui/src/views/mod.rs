//! Plain-text screens for the terminal front end.
//!
//! - `landing` - Welcome page and call to action
//! - `survey` - Interactive questionnaire driver
//! - `results` - Strategy cards and recommendations
//! - `dashboard` - Calculator, competitors, charts and scenario tabs
//!
//! Every screen renders to a `String` from the current state; nothing is
//! cached between renders.

pub mod dashboard;
pub mod landing;
pub mod results;
pub mod survey;

use pricing_core::calculations::common::{round_half_up, round_percent};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Whether output may contain ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub ansi: bool,
}

impl Style {
    pub const PLAIN: Style = Style { ansi: false };

    /// Colours `text` with a named accent.
    pub fn paint(
        &self,
        accent: &str,
        text: &str,
    ) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let code = match accent {
            "green" => "32",
            "blue" => "34",
            "orange" | "yellow" => "33",
            "red" => "31",
            "purple" => "35",
            _ => return format!("\x1b[1m{text}\x1b[0m"),
        };
        format!("\x1b[1;{code}m{text}\x1b[0m")
    }
}

/// `$12.30` style money, rounded half-up to cents.
pub fn money(value: Decimal) -> String {
    let rounded = round_half_up(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// `12.5%` style percentage with one decimal place.
pub fn percent(value: Decimal) -> String {
    format!("{:.1}%", round_percent(value))
}

/// Section heading with an underline.
pub fn heading(
    title: &str,
    description: &str,
) -> String {
    let mut out = format!("{title}\n{}\n", "=".repeat(title.chars().count()));
    if !description.is_empty() {
        out.push_str(description);
        out.push('\n');
    }
    out
}

/// Horizontal bar scaled so `max` fills `width` cells.
pub fn bar(
    value: Decimal,
    max: Decimal,
    width: usize,
) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let cells = (value / max * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    "█".repeat(cells)
}
