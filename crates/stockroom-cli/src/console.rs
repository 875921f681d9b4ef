//! Line-based operator prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use stockroom_store::codec::is_encodable;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `label` and read one line. Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt until the answer parses as `T`, re-asking with `hint` on failure.
    pub fn prompt_parsed<T: FromStr>(&mut self, label: &str, hint: &str) -> io::Result<Option<T>> {
        self.prompt_with(label, hint, |answer| answer.trim().parse())
    }

    /// Prompt until `parse` accepts the answer, re-asking with `hint` on failure.
    pub fn prompt_with<T, E>(
        &mut self,
        label: &str,
        hint: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(format!("Invalid input {answer:?}: {hint}").red())?,
            }
        }
    }

    /// Prompt for a text field that can be stored in the inventory file.
    pub fn prompt_field(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            if is_encodable(&answer) {
                return Ok(Some(answer));
            }
            self.say("Commas are not allowed in this field.".red())?;
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
