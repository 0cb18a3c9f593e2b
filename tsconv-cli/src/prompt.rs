// ============================================================================
// tsconv-cli/src/prompt.rs
// ============================================================================
//
// INTERACTIVE PROMPTS: Line-Based Questions and Answers
//
// Every question re-asks until it gets a valid answer or an explicit cancel
// (`Q`). The prompt is generic over its input and output so the menu can be
// driven from in-memory buffers in tests. End of input is an error rather
// than an endless loop.
//
// AI-ASSISTANT-INFO: Prompt helpers used by the interactive menu

use crate::config::{CANCEL_KEY, COLORS_PER_LINE};
use crate::error::CliResult;
use crate::terminal;
use std::io::{BufRead, Write};
use tsconv_core::{CoreError, MarkerColor, format_clock_padded, parse_signed_clock};

/// Answer to a yes / no / cancel question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Cancel,
}

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

fn is_cancel(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(CANCEL_KEY)
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints `question` and returns the answer with surrounding whitespace
    /// removed.
    pub fn ask(&mut self, question: &str) -> CliResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(CoreError::OperationFailed("Input closed while waiting for an answer".into()));
        }
        Ok(answer.trim().to_string())
    }

    /// Asks a `(y/n)` question until answered.
    pub fn confirm(&mut self, question: &str) -> CliResult<bool> {
        loop {
            let answer = self.ask(&format!("{} (y/n): ", question))?;
            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            self.say(&format!("Incorrect answer: {}", answer))?;
        }
    }

    /// Asks a `(y/n/Q)` question until answered.
    pub fn confirm_or_cancel(&mut self, question: &str) -> CliResult<Answer> {
        loop {
            let answer =
                self.ask(&format!("{} (y - Yes, n - No, Q - cancel): ", question))?;
            if answer.eq_ignore_ascii_case("y") {
                return Ok(Answer::Yes);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(Answer::No);
            }
            if is_cancel(&answer) {
                return Ok(Answer::Cancel);
            }
            self.say(&format!("Invalid option: {}", answer))?;
        }
    }

    /// Asks for a 1-based index in `1..=max`, returning it 0-based, or `None`
    /// when cancelled.
    pub fn choose_index(&mut self, thing: &str, max: usize) -> CliResult<Option<usize>> {
        if max == 0 {
            self.say(&format!("There is no {} to pick", thing))?;
            return Ok(None);
        }
        loop {
            let answer = self.ask(&format!(
                "\nPick a {} by number (1-{}, {} to cancel): ",
                thing, max, CANCEL_KEY
            ))?;
            if is_cancel(&answer) {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(Some(n - 1)),
                _ => self.say(&format!("Incorrect option {}", answer))?,
            }
        }
    }

    /// Lists the palette and asks for a color name, or `None` when cancelled.
    pub fn choose_color(&mut self) -> CliResult<Option<MarkerColor>> {
        self.say("\nAvailable colors are:")?;
        for row in terminal::palette_rows(COLORS_PER_LINE) {
            self.say(&row)?;
        }
        loop {
            let answer = self.ask(&format!("\nType a color to use ({} to cancel): ", CANCEL_KEY))?;
            if is_cancel(&answer) {
                return Ok(None);
            }
            match answer.parse::<MarkerColor>() {
                Ok(color) => return Ok(Some(color)),
                Err(_) => self.say(&format!("Incorrect option {}", answer))?,
            }
        }
    }

    /// Asks for a signed `H:MM:SS` shift in seconds, or `None` when cancelled.
    pub fn ask_shift(&mut self) -> CliResult<Option<i64>> {
        loop {
            let answer = self.ask(&format!(
                "Provide time shift in \"H:MM:SS\" format, prefix with - to shift back ({} to cancel): ",
                CANCEL_KEY
            ))?;
            if is_cancel(&answer) {
                return Ok(None);
            }
            match parse_signed_clock(&answer) {
                Ok(seconds) => return Ok(Some(seconds)),
                Err(_) => self.say("Incorrect value provided")?,
            }
        }
    }
}

/// Human form of a signed shift, e.g. `-00:01:30`.
pub fn describe_shift(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    format!("{}{}", sign, format_clock_padded(seconds.unsigned_abs()))
}
