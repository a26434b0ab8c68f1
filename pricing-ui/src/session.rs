//! Interactive survey session: landing page, survey, results and the
//! follow-up actions, driven over any line-based input and output.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::report::{DEFAULT_REPORT_FILE, PricingReport};
use crate::state::{AppState, View};
use crate::views::Style;
use crate::views::landing::render_landing;
use crate::views::results::render_results;
use crate::views::survey::run_survey;

const START_PROMPT: &str = "Press Enter to start your pricing analysis (:quit to exit) > ";

/// What the user picked after seeing the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultsAction {
    Download,
    AnalyzeAnother,
    Quit,
}

impl ResultsAction {
    fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "d" | "download" => Some(Self::Download),
            "2" | "a" | "another" => Some(Self::AnalyzeAnother),
            "3" | "q" | "quit" | ":quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct Session {
    state: AppState,
    style: Style,
    report_dir: PathBuf,
}

impl Session {
    /// New session at the landing page. Reports are saved under `report_dir`
    /// unless the user gives an absolute path.
    pub fn new(
        style: Style,
        report_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            state: AppState::new(),
            style,
            report_dir: report_dir.into(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        loop {
            match self.state.view() {
                View::Landing => {
                    write!(output, "{}\n{START_PROMPT}", render_landing(self.style))?;
                    output.flush()?;
                    match read_answer(input)? {
                        Some(answer) if answer.trim() != ":quit" => self.state.start_survey(),
                        _ => return Ok(()),
                    }
                }
                View::Survey => {
                    let finished =
                        run_survey(self.state.wizard_mut(), input, output, self.style)?;
                    match finished {
                        Some(survey) => self.state.complete_survey(survey),
                        None => {
                            debug!("survey abandoned");
                            return Ok(());
                        }
                    }
                }
                View::Results => {
                    if !self.show_results(input, output)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Shows the results and handles the follow-up menu. Returns `false`
    /// when the session should end.
    fn show_results<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<bool> {
        let Some(survey) = self.state.survey().cloned() else {
            self.state.start_over();
            return Ok(true);
        };
        let analysis = match self.state.analysis() {
            Some(Ok(analysis)) => analysis,
            Some(Err(e)) => {
                warn!(error = %e, "survey answers could not be priced");
                writeln!(output, "\n{}", self.style.paint("red", &format!("✗ {e}")))?;
                self.state.start_over();
                return Ok(true);
            }
            None => {
                self.state.start_over();
                return Ok(true);
            }
        };
        write!(output, "\n{}", render_results(&survey, &analysis, self.style))?;

        loop {
            write!(
                output,
                "\n1) Download Report  2) Analyze Another Product  3) Quit\n> "
            )?;
            output.flush()?;

            let Some(answer) = read_answer(input)? else {
                return Ok(false);
            };
            match ResultsAction::parse(&answer) {
                Some(ResultsAction::Download) => {
                    write!(output, "Save report as [{DEFAULT_REPORT_FILE}] > ")?;
                    output.flush()?;
                    let name = read_answer(input)?.unwrap_or_default();
                    let path = self.report_path(&name);
                    match PricingReport::new(&survey, &analysis).write(&path) {
                        Ok(()) => writeln!(output, "✓ Report saved to {}", path.display())?,
                        Err(e) => writeln!(output, "{}", self.style.paint("red", &format!("✗ {e}")))?,
                    }
                }
                Some(ResultsAction::AnalyzeAnother) => {
                    self.state.start_over();
                    return Ok(true);
                }
                Some(ResultsAction::Quit) => return Ok(false),
                None => writeln!(output, "Choose 1, 2 or 3.")?,
            }
        }
    }

    fn report_path(
        &self,
        name: &str,
    ) -> PathBuf {
        let name = name.trim();
        let name = if name.is_empty() { DEFAULT_REPORT_FILE } else { name };
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.report_dir.join(path)
        }
    }
}

/// One line without its terminator, or `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    const ANSWERS: &str = "Candle\nHome Goods\n8\n1\nGift shoppers\n1\n40\n\nNone\n";

    fn drive(
        session: &mut Session,
        script: &str,
    ) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn quit_on_landing_ends_immediately() {
        let mut session = Session::new(Style::PLAIN, ".");

        let output = drive(&mut session, ":quit\n");

        assert!(output.contains("How PriceWise AI Works"));
        assert!(!output.contains("Question 1 of 9"));
        assert_eq!(session.state().view(), View::Landing);
    }

    #[test]
    fn full_run_shows_results_then_quits() {
        let mut session = Session::new(Style::PLAIN, ".");

        let output = drive(&mut session, &format!("\n{ANSWERS}3\n"));

        assert!(output.contains("Question 9 of 9"));
        assert!(output.contains("Conservative Strategy"));
        assert!(output.contains("1) Download Report"));
        assert_eq!(session.state().view(), View::Results);
    }

    #[test]
    fn download_writes_report_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(Style::PLAIN, dir.path());

        let output = drive(&mut session, &format!("\n{ANSWERS}1\n\n3\n"));

        let path = dir.path().join(DEFAULT_REPORT_FILE);
        assert!(output.contains("✓ Report saved to"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("PriceWise AI Pricing Report\n"));
        assert!(text.contains("Based on your Candle in the Home Goods market"));
    }

    #[test]
    fn analyze_another_returns_to_landing() {
        let mut session = Session::new(Style::PLAIN, ".");

        let output = drive(&mut session, &format!("\n{ANSWERS}2\n:quit\n"));

        assert_eq!(output.matches("How PriceWise AI Works").count(), 2);
        assert_eq!(session.state().view(), View::Landing);
        assert!(session.state().survey().is_none());
    }

    #[test]
    fn unknown_menu_choice_repeats_menu() {
        let mut session = Session::new(Style::PLAIN, ".");

        let output = drive(&mut session, &format!("\n{ANSWERS}9\nq\n"));

        assert!(output.contains("Choose 1, 2 or 3."));
        assert_eq!(output.matches("2) Analyze Another Product").count(), 2);
    }

    #[test]
    fn report_path_defaults_and_joins() {
        let session = Session::new(Style::PLAIN, "/tmp/reports");

        assert_eq!(session.report_path(""), PathBuf::from("/tmp/reports/pricewise-report.txt"));
        assert_eq!(session.report_path("a.txt"), PathBuf::from("/tmp/reports/a.txt"));
        assert_eq!(session.report_path("/abs/b.txt"), PathBuf::from("/abs/b.txt"));
    }
}
