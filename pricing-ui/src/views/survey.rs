//! Interactive survey driver.
//!
//! Reads one answer per line. Pressing Enter on an empty line keeps the
//! current answer (useful for the pre-filled margin). `:back` returns to the
//! previous question and `:quit` abandons the survey.

use std::io::{self, BufRead, Write};

use pricing_core::SurveyData;
use pricing_core::questionnaire::{AnswerError, QuestionKind, SurveyWizard, WizardStep};

use super::Style;

const BACK: &str = ":back";
const QUIT: &str = ":quit";

/// Renders the current question with its progress bar and options.
pub fn render_question(
    wizard: &SurveyWizard,
    style: Style,
) -> String {
    let question = wizard.current();
    let (number, total) = wizard.progress();
    let filled = number * 20 / total;

    let mut out = format!(
        "Question {number} of {total}  [{}{}]\n",
        "#".repeat(filled),
        "-".repeat(20 - filled)
    );
    out.push_str(&style.paint("blue", question.prompt));
    out.push('\n');
    out.push_str(&format!("  {}\n", question.context));

    if let QuestionKind::Select(options) = question.kind {
        for (idx, option) in options.iter().enumerate() {
            out.push_str(&format!("  {}) {option}\n", idx + 1));
        }
    } else if !question.placeholder.is_empty() {
        out.push_str(&format!("  ({})\n", question.placeholder));
    }

    let current = wizard.current_answer();
    if current.is_empty() {
        out.push_str("> ");
    } else {
        out.push_str(&format!("[{current}] > "));
    }
    out
}

/// Walks `wizard` to completion, reading answers from `input`.
///
/// Returns `None` if the user quits or input ends first.
pub fn run_survey<R: BufRead, W: Write>(
    wizard: &mut SurveyWizard,
    input: &mut R,
    output: &mut W,
    style: Style,
) -> io::Result<Option<SurveyData>> {
    let mut line = String::new();
    loop {
        write!(output, "\n{}", render_question(wizard, style))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);

        match answer.trim() {
            QUIT => return Ok(None),
            BACK => {
                if !wizard.previous() {
                    writeln!(output, "Already at the first question.")?;
                }
                continue;
            }
            "" => {}
            _ => {
                if let Err(e) = wizard.set_answer(answer) {
                    write_refusal(output, &e, style)?;
                    continue;
                }
            }
        }

        match wizard.next() {
            Ok(WizardStep::Question(_)) => {}
            Ok(WizardStep::Complete(data)) => return Ok(Some(data)),
            Err(e) => write_refusal(output, &e, style)?,
        }
    }
}

fn write_refusal<W: Write>(
    output: &mut W,
    error: &AnswerError,
    style: Style,
) -> io::Result<()> {
    writeln!(output, "{}", style.paint("red", &format!("✗ {error}")))
}
