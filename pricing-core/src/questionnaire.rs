//! The pricing survey: its nine questions and the wizard that walks them.
//!
//! The wizard holds one answer per question and only moves forward when the
//! current answer passes a minimal check (non-empty text, a chosen option, a
//! positive number). Completing the last question yields a [`SurveyData`].

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::input::parse_amount_or_zero;
use crate::{BrandPositioning, BusinessType, SurveyData};

/// Field of [`SurveyData`] a question fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyField {
    ProductName,
    Category,
    UnitCost,
    BusinessType,
    TargetAudience,
    BrandPositioning,
    MonthlySalesVolume,
    DesiredMargin,
    Competitors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    Number,
    LongText,
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub field: SurveyField,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub placeholder: &'static str,
    /// Why the question matters, shown under the prompt.
    pub context: &'static str,
}

const BUSINESS_TYPE_OPTIONS: &[&str] = &[
    "Retail Store",
    "E-commerce",
    "Service Provider",
    "Manufacturing",
    "Restaurant/Food",
    "SaaS/Software",
    "Other",
];

const BRAND_POSITIONING_OPTIONS: &[&str] = &[
    "Premium/Luxury",
    "Mid-range/Quality",
    "Budget/Value",
    "Economy/Basic",
];

pub static QUESTIONS: [Question; 9] = [
    Question {
        field: SurveyField::ProductName,
        prompt: "What's the name of your product or service?",
        kind: QuestionKind::Text,
        placeholder: "e.g., Artisan Coffee Blend, Web Design Service",
        context: "Understanding the product helps determine industry standards and positioning.",
    },
    Question {
        field: SurveyField::Category,
        prompt: "What category does your product fall into?",
        kind: QuestionKind::Text,
        placeholder: "e.g., Food & Beverage, Technology, Fashion, Services",
        context: "Category determines pricing benchmarks and market expectations.",
    },
    Question {
        field: SurveyField::UnitCost,
        prompt: "What's your cost per unit (production or purchase cost)?",
        kind: QuestionKind::Number,
        placeholder: "Enter amount in dollars",
        context: "Base cost is crucial for calculating minimum viable pricing.",
    },
    Question {
        field: SurveyField::BusinessType,
        prompt: "What type of business are you running?",
        kind: QuestionKind::Select(BUSINESS_TYPE_OPTIONS),
        placeholder: "",
        context: "Business model affects pricing strategy and customer expectations.",
    },
    Question {
        field: SurveyField::TargetAudience,
        prompt: "Who is your target customer?",
        kind: QuestionKind::LongText,
        placeholder: "e.g., Young professionals aged 25-35, Small business owners, Budget-conscious families",
        context: "Customer profile influences pricing sensitivity and positioning strategy.",
    },
    Question {
        field: SurveyField::BrandPositioning,
        prompt: "How do you want to position your brand?",
        kind: QuestionKind::Select(BRAND_POSITIONING_OPTIONS),
        placeholder: "",
        context: "Brand positioning directly impacts pricing strategy and margins.",
    },
    Question {
        field: SurveyField::MonthlySalesVolume,
        prompt: "What's your estimated monthly sales volume (units)?",
        kind: QuestionKind::Number,
        placeholder: "e.g., 100, 500, 1000",
        context: "Volume helps calculate fixed cost distribution and economies of scale.",
    },
    Question {
        field: SurveyField::DesiredMargin,
        prompt: "What's your target profit margin percentage?",
        kind: QuestionKind::Number,
        placeholder: "e.g., 25 for 25%",
        context: "Desired margin helps balance profitability with competitiveness.",
    },
    Question {
        field: SurveyField::Competitors,
        prompt: "Who are your main competitors and their pricing (if known)?",
        kind: QuestionKind::LongText,
        placeholder: "e.g., Competitor A: $25, Competitor B: $30, Generic brands: $15-20",
        context: "Competitive landscape is essential for positioning and market-based pricing.",
    },
];

/// Why the wizard refused an answer or refused to move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("an answer is required")]
    Empty,

    #[error("enter a number greater than zero")]
    NotPositive,

    #[error("the margin must be below 100%")]
    MarginTooHigh,

    #[error("'{0}' is not one of the options")]
    UnknownOption(String),
}

/// Outcome of [`SurveyWizard::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// Moved on to the question at this index.
    Question(usize),
    /// The last question was answered.
    Complete(SurveyData),
}

/// Answers in progress, stored as the form fields hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    product_name: String,
    category: String,
    unit_cost: Decimal,
    target_audience: String,
    monthly_sales_volume: Decimal,
    business_type: String,
    brand_positioning: String,
    desired_margin: Decimal,
    competitors: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            category: String::new(),
            unit_cost: Decimal::ZERO,
            target_audience: String::new(),
            monthly_sales_volume: Decimal::ZERO,
            business_type: String::new(),
            brand_positioning: String::new(),
            desired_margin: SurveyData::default_desired_margin(),
            competitors: String::new(),
        }
    }
}

/// Step-by-step survey state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyWizard {
    step: usize,
    draft: Draft,
}

impl SurveyWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static Question {
        &QUESTIONS[self.step]
    }

    /// Current question number (1-based) and the number of questions.
    pub fn progress(&self) -> (usize, usize) {
        (self.step + 1, QUESTIONS.len())
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == QUESTIONS.len()
    }

    /// Current answer as it would appear in the input field.
    ///
    /// Numbers that are still zero show as empty, like an untouched number box.
    pub fn current_answer(&self) -> String {
        let number = |value: Decimal| {
            if value.is_zero() {
                String::new()
            } else {
                value.normalize().to_string()
            }
        };
        match self.current().field {
            SurveyField::ProductName => self.draft.product_name.clone(),
            SurveyField::Category => self.draft.category.clone(),
            SurveyField::UnitCost => number(self.draft.unit_cost),
            SurveyField::BusinessType => self.draft.business_type.clone(),
            SurveyField::TargetAudience => self.draft.target_audience.clone(),
            SurveyField::BrandPositioning => self.draft.brand_positioning.clone(),
            SurveyField::MonthlySalesVolume => number(self.draft.monthly_sales_volume),
            SurveyField::DesiredMargin => number(self.draft.desired_margin),
            SurveyField::Competitors => self.draft.competitors.clone(),
        }
    }

    /// Stores `raw` as the answer to the current question.
    ///
    /// Numbers that cannot be parsed are stored as zero. Select questions
    /// accept an option label or its 1-based position in the list.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::UnknownOption`] when a select answer matches no
    /// option; the previous answer is kept.
    pub fn set_answer(
        &mut self,
        raw: &str,
    ) -> Result<(), AnswerError> {
        let question = self.current();
        match question.kind {
            QuestionKind::Text | QuestionKind::LongText => {
                let slot = match question.field {
                    SurveyField::ProductName => &mut self.draft.product_name,
                    SurveyField::Category => &mut self.draft.category,
                    SurveyField::TargetAudience => &mut self.draft.target_audience,
                    _ => &mut self.draft.competitors,
                };
                *slot = raw.to_string();
            }
            QuestionKind::Number => {
                let value = parse_amount_or_zero(raw);
                match question.field {
                    SurveyField::UnitCost => self.draft.unit_cost = value,
                    SurveyField::MonthlySalesVolume => self.draft.monthly_sales_volume = value,
                    _ => self.draft.desired_margin = value,
                }
            }
            QuestionKind::Select(options) => {
                let option = resolve_option(options, raw)
                    .ok_or_else(|| AnswerError::UnknownOption(raw.trim().to_string()))?;
                match question.field {
                    SurveyField::BusinessType => self.draft.business_type = option.to_string(),
                    _ => self.draft.brand_positioning = option.to_string(),
                }
            }
        }
        Ok(())
    }

    /// Checks whether the current answer allows moving on.
    pub fn validate_current(&self) -> Result<(), AnswerError> {
        let question = self.current();
        match question.kind {
            QuestionKind::Number => {
                let value = match question.field {
                    SurveyField::UnitCost => self.draft.unit_cost,
                    SurveyField::MonthlySalesVolume => self.draft.monthly_sales_volume,
                    _ => self.draft.desired_margin,
                };
                if value <= Decimal::ZERO {
                    return Err(AnswerError::NotPositive);
                }
                if question.field == SurveyField::DesiredMargin && value >= Decimal::ONE_HUNDRED {
                    return Err(AnswerError::MarginTooHigh);
                }
                Ok(())
            }
            _ => {
                if self.current_answer().trim().is_empty() {
                    Err(AnswerError::Empty)
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn can_advance(&self) -> bool {
        self.validate_current().is_ok()
    }

    /// Moves to the next question, or completes the survey on the last one.
    ///
    /// # Errors
    ///
    /// Returns the validation failure of the current answer; the wizard
    /// stays on the same question.
    pub fn next(&mut self) -> Result<WizardStep, AnswerError> {
        if let Err(e) = self.validate_current() {
            warn!(question = self.step + 1, reason = %e, "survey answer rejected");
            return Err(e);
        }
        if self.is_last() {
            debug!("survey complete");
            return Ok(WizardStep::Complete(self.to_survey_data()));
        }
        self.step += 1;
        Ok(WizardStep::Question(self.step))
    }

    /// Goes back one question. Returns `false` on the first question.
    pub fn previous(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    fn to_survey_data(&self) -> SurveyData {
        SurveyData {
            product_name: self.draft.product_name.clone(),
            category: self.draft.category.clone(),
            unit_cost: self.draft.unit_cost,
            target_audience: self.draft.target_audience.clone(),
            monthly_sales_volume: self.draft.monthly_sales_volume,
            business_type: BusinessType::parse(&self.draft.business_type),
            brand_positioning: BrandPositioning::parse(&self.draft.brand_positioning),
            desired_margin: self.draft.desired_margin,
            competitors: self.draft.competitors.clone(),
        }
    }
}

fn resolve_option(
    options: &'static [&'static str],
    raw: &str,
) -> Option<&'static str> {
    let raw = raw.trim();
    if let Ok(index) = raw.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(raw))
        .copied()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn answer_and_advance(
        wizard: &mut SurveyWizard,
        raw: &str,
    ) -> WizardStep {
        wizard.set_answer(raw).expect("answer should be accepted");
        wizard.next().expect("answer should be valid")
    }

    const ANSWERS: [&str; 9] = [
        "Artisan Coffee Blend",
        "Food & Beverage",
        "12.50",
        "Retail Store",
        "Young professionals",
        "2",
        "300",
        "35",
        "Corner Cafe: $4.50",
    ];

    #[test]
    fn questions_follow_survey_order() {
        let fields: Vec<_> = QUESTIONS.iter().map(|q| q.field).collect();

        assert_eq!(
            fields,
            vec![
                SurveyField::ProductName,
                SurveyField::Category,
                SurveyField::UnitCost,
                SurveyField::BusinessType,
                SurveyField::TargetAudience,
                SurveyField::BrandPositioning,
                SurveyField::MonthlySalesVolume,
                SurveyField::DesiredMargin,
                SurveyField::Competitors,
            ]
        );
    }

    #[test]
    fn select_options_match_model_labels() {
        let business: Vec<_> = BusinessType::OPTIONS.iter().map(|b| b.as_str()).collect();
        let positioning: Vec<_> = BrandPositioning::OPTIONS.iter().map(|b| b.as_str()).collect();

        assert_eq!(business, BUSINESS_TYPE_OPTIONS.to_vec());
        assert_eq!(positioning, BRAND_POSITIONING_OPTIONS.to_vec());
    }

    #[test]
    fn full_walkthrough_completes_with_survey_data() {
        let mut wizard = SurveyWizard::new();

        let mut last = None;
        for raw in ANSWERS {
            last = Some(answer_and_advance(&mut wizard, raw));
        }

        let Some(WizardStep::Complete(data)) = last else {
            panic!("survey should be complete, got {last:?}");
        };
        assert_eq!(data.product_name, "Artisan Coffee Blend");
        assert_eq!(data.unit_cost, dec!(12.50));
        assert_eq!(data.business_type, BusinessType::RetailStore);
        assert_eq!(data.brand_positioning, BrandPositioning::MidRangeQuality);
        assert_eq!(data.monthly_sales_volume, dec!(300));
        assert_eq!(data.desired_margin, dec!(35));
        assert_eq!(data.competitors, "Corner Cafe: $4.50");
    }

    #[test]
    fn progress_counts_from_one() {
        let mut wizard = SurveyWizard::new();
        assert_eq!(wizard.progress(), (1, 9));

        answer_and_advance(&mut wizard, "Widget");

        assert_eq!(wizard.progress(), (2, 9));
    }

    #[test]
    fn next_refuses_blank_text() {
        let mut wizard = SurveyWizard::new();
        wizard.set_answer("   ").unwrap();

        assert_eq!(wizard.next(), Err(AnswerError::Empty));
        assert_eq!(wizard.step(), 0);
    }

    #[test]
    fn next_refuses_zero_and_garbage_numbers() {
        let mut wizard = SurveyWizard::new();
        answer_and_advance(&mut wizard, "Widget");
        answer_and_advance(&mut wizard, "Gadgets");

        wizard.set_answer("0").unwrap();
        assert_eq!(wizard.next(), Err(AnswerError::NotPositive));

        wizard.set_answer("cheap").unwrap();
        assert_eq!(wizard.current_answer(), "");
        assert_eq!(wizard.next(), Err(AnswerError::NotPositive));
    }

    #[test]
    fn margin_defaults_to_twenty_five() {
        let mut wizard = SurveyWizard::new();
        for raw in &ANSWERS[..7] {
            answer_and_advance(&mut wizard, raw);
        }

        assert_eq!(wizard.current().field, SurveyField::DesiredMargin);
        assert_eq!(wizard.current_answer(), "25");
        assert!(wizard.can_advance());
    }

    #[test]
    fn margin_of_hundred_is_refused() {
        let mut wizard = SurveyWizard::new();
        for raw in &ANSWERS[..7] {
            answer_and_advance(&mut wizard, raw);
        }

        wizard.set_answer("100").unwrap();

        assert_eq!(wizard.next(), Err(AnswerError::MarginTooHigh));
    }

    #[test]
    fn select_accepts_label_case_insensitively() {
        let mut wizard = SurveyWizard::new();
        for raw in &ANSWERS[..3] {
            answer_and_advance(&mut wizard, raw);
        }

        wizard.set_answer("saas/software").unwrap();

        assert_eq!(wizard.current_answer(), "SaaS/Software");
    }

    #[test]
    fn select_rejects_unknown_option_and_keeps_previous() {
        let mut wizard = SurveyWizard::new();
        for raw in &ANSWERS[..3] {
            answer_and_advance(&mut wizard, raw);
        }
        wizard.set_answer("1").unwrap();

        assert_eq!(
            wizard.set_answer("Food Truck"),
            Err(AnswerError::UnknownOption("Food Truck".to_string()))
        );
        assert_eq!(wizard.set_answer("0"), Err(AnswerError::UnknownOption("0".to_string())));
        assert_eq!(wizard.current_answer(), "Retail Store");
    }

    #[test]
    fn select_without_choice_cannot_advance() {
        let mut wizard = SurveyWizard::new();
        for raw in &ANSWERS[..3] {
            answer_and_advance(&mut wizard, raw);
        }

        assert_eq!(wizard.next(), Err(AnswerError::Empty));
    }

    #[test]
    fn previous_keeps_answers() {
        let mut wizard = SurveyWizard::new();
        answer_and_advance(&mut wizard, "Widget");

        assert!(wizard.previous());
        assert_eq!(wizard.current_answer(), "Widget");
        assert!(!wizard.previous());
    }
}
