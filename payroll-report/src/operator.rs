//! Operator prompts
//!
//! Everything the run needs from a human goes through [`OperatorInput`], so
//! reconciliation and pay calculation can be driven from tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorKind};

/// Source of operator answers
pub trait OperatorInput {
    /// Ask a yes/no question
    fn confirm(&mut self, question: &str) -> AppResult<bool>;

    /// Ask for a non-negative dollar amount
    fn dollar_amount(&mut self, prompt: &str) -> AppResult<Decimal>;
}

/// Normalize a yes/no answer
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a non-negative dollar amount (`12.50`, `$12.50`)
pub fn parse_dollar_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim().trim_start_matches('$');
    Decimal::from_str(trimmed).ok().filter(|v| !v.is_sign_negative())
}

/// Interactive prompts on a line-based reader/writer pair
///
/// Invalid answers are re-asked without a retry limit. End of input is an
/// [`ErrorKind::InputClosed`] error.
pub struct TerminalOperator<R, W> {
    input: R,
    output: W,
}

impl TerminalOperator<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process terminal
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask<T>(&mut self, prompt: &str, hint: &str, parse: impl Fn(&str) -> Option<T>) -> AppResult<T> {
        loop {
            write!(self.output, "{} ", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AppError::new(ErrorKind::InputClosed));
            }

            match parse(&line) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!(input = %line.trim(), "Rejected operator input");
                    writeln!(self.output, "{}", hint)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> OperatorInput for TerminalOperator<R, W> {
    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        self.ask(&format!("{} (y/n):", question), "Please answer y or n.", parse_yes_no)
    }

    fn dollar_amount(&mut self, prompt: &str) -> AppResult<Decimal> {
        self.ask(
            &format!("{}:", prompt),
            "Please enter a non-negative dollar amount.",
            parse_dollar_amount,
        )
    }
}

/// A scripted answer
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Confirm(bool),
    Amount(Decimal),
}

/// Pre-recorded answers, consumed in order
///
/// Running out of answers or asking the wrong kind of question is an
/// [`ErrorKind::InputClosed`] error.
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    answers: VecDeque<Answer>,
    /// Every prompt asked so far
    pub asked: Vec<String>,
}

impl ScriptedOperator {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> AppResult<Answer> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            AppError::with_message(ErrorKind::InputClosed, format!("no scripted answer for: {}", prompt))
        })
    }
}

impl OperatorInput for ScriptedOperator {
    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        match self.next(question)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(AppError::with_message(
                ErrorKind::InputClosed,
                format!("expected a yes/no answer for {:?}, scripted {:?}", question, other),
            )),
        }
    }

    fn dollar_amount(&mut self, prompt: &str) -> AppResult<Decimal> {
        match self.next(prompt)? {
            Answer::Amount(amount) => Ok(amount),
            other => Err(AppError::with_message(
                ErrorKind::InputClosed,
                format!("expected an amount for {:?}, scripted {:?}", prompt, other),
            )),
        }
    }
}
