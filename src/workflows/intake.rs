//! Interactive collection of applicant inputs and the save dialog.
//!
//! Prompts are written to any `Write` and answers read from any `BufRead`, so
//! the binary wires stdin/stdout while tests use in-memory buffers. Nothing in
//! here exits the process; every outcome is returned to the caller.

use crate::workflows::qualifier::{ApplicantError, ApplicantProfile};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const CANCEL_KEYWORD: &str = "cancel";

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("no input received")]
    Closed,
    #[error("failed to read or write prompt: {0}")]
    Io(#[from] std::io::Error),
    #[error("{field} must be a number (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },
    #[error("please answer yes or no (got '{0}')")]
    InvalidChoice(String),
    #[error("a file path is required")]
    EmptyPath,
    #[error(transparent)]
    Applicant(#[from] ApplicantError),
}

/// Applicant values already known before prompting (e.g. from command-line flags).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApplicantDraft {
    pub credit_score: Option<u16>,
    pub monthly_debt: Option<f64>,
    pub monthly_income: Option<f64>,
    pub loan_amount: Option<f64>,
    pub home_value: Option<f64>,
}

/// What the applicant chose to do with the qualifying loans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDecision {
    Skip,
    Cancelled,
    SaveTo(PathBuf),
}

/// Question/answer helper over a pair of streams.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the prompt stream, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask a free-text question, returning the trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "? {question} ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(answer.trim().to_string())
    }

    pub fn ask_number<T: FromStr>(
        &mut self,
        field: &'static str,
        question: &str,
    ) -> Result<T, PromptError> {
        let answer = self.ask(question)?;
        answer
            .parse::<T>()
            .map_err(|_| PromptError::InvalidNumber {
                field,
                value: answer,
            })
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = self.ask(&format!("{question} (Yes/No)"))?;
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(PromptError::InvalidChoice(answer)),
        }
    }

    pub fn ask_rate_sheet_path(&mut self) -> Result<PathBuf, PromptError> {
        let answer = self.ask("Enter a file path to a rate-sheet (.csv):")?;
        if answer.is_empty() {
            return Err(PromptError::EmptyPath);
        }
        Ok(PathBuf::from(answer))
    }

    pub fn ask_save_decision(&mut self) -> Result<SaveDecision, PromptError> {
        if !self.confirm("Do you want to save your results?")? {
            return Ok(SaveDecision::Skip);
        }

        let answer = self.ask(&format!(
            "Please enter the desired file name (.csv). Type '{CANCEL_KEYWORD}' to cancel save:"
        ))?;
        if answer.eq_ignore_ascii_case(CANCEL_KEYWORD) {
            return Ok(SaveDecision::Cancelled);
        }
        if answer.is_empty() {
            return Err(PromptError::EmptyPath);
        }
        Ok(SaveDecision::SaveTo(PathBuf::from(answer)))
    }
}

/// Fill in any missing applicant values by prompting, then validate the profile.
pub fn collect_applicant<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    draft: ApplicantDraft,
) -> Result<ApplicantProfile, PromptError> {
    let credit_score = match draft.credit_score {
        Some(value) => value,
        None => prompter.ask_number("credit score", "What's your credit score?")?,
    };
    let monthly_debt = match draft.monthly_debt {
        Some(value) => value,
        None => prompter.ask_number(
            "monthly debt",
            "What's your current amount of monthly debt?",
        )?,
    };
    let monthly_income = match draft.monthly_income {
        Some(value) => value,
        None => prompter.ask_number("monthly income", "What's your total monthly income?")?,
    };
    let loan_amount = match draft.loan_amount {
        Some(value) => value,
        None => prompter.ask_number("loan amount", "What's your desired loan amount?")?,
    };
    let home_value = match draft.home_value {
        Some(value) => value,
        None => prompter.ask_number("home value", "What's your home value?")?,
    };

    Ok(ApplicantProfile::new(
        credit_score,
        monthly_debt,
        monthly_income,
        loan_amount,
        home_value,
    )?)
}
