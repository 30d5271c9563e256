//! Line-based console input
//!
//! Wraps an input reader and an output writer so the game can run against the
//! real terminal or against scripted input in tests.

use std::io::{self, BufRead, Write};

/// Message shown when a number was expected but something else was typed
pub const INVALID_NUMBER_PROMPT: &str = "Invalid selection. Please enter a number: ";

/// Prompting reader/writer pair
///
/// All read methods return `Ok(None)` once the input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink, for the display functions
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a prompt without a trailing newline
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing the output fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    /// Read one raw line without its line ending
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input fails.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for a single token
    ///
    /// Blank lines re-prompt; anything after the first token is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
            self.prompt(prompt)?;
        }
    }

    /// Prompt for an integer, re-prompting until one is entered
    ///
    /// Only the first token of a line is parsed; the rest of the line is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.prompt(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.split_whitespace().next().map(str::parse::<i64>) {
                Some(Ok(number)) => return Ok(Some(number)),
                Some(Err(_)) => self.prompt(INVALID_NUMBER_PROMPT)?,
                // Blank line: keep waiting, like a stream extraction would
                None => {}
            }
        }
    }

    /// Print the continue prompt and wait for a line
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        writeln!(self.output, "Press \"Enter\" to continue.")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_number_parses_first_token() {
        let mut c = console("2 and more\n");
        assert_eq!(c.read_number("> ").unwrap(), Some(2));
        assert_eq!(output_of(c), "> ");
    }

    #[test]
    fn read_number_retries_invalid_input() {
        let mut c = console("abc\n\n  7\n");
        assert_eq!(c.read_number("Enter your selection: ").unwrap(), Some(7));
        let out = output_of(c);
        assert_eq!(
            out,
            format!("Enter your selection: {INVALID_NUMBER_PROMPT}")
        );
    }

    #[test]
    fn read_number_negative_values() {
        let mut c = console("-3\n");
        assert_eq!(c.read_number("").unwrap(), Some(-3));
    }

    #[test]
    fn read_number_end_of_input() {
        let mut c = console("oops\n");
        assert_eq!(c.read_number("> ").unwrap(), None);
    }

    #[test]
    fn read_token_skips_blank_lines() {
        let mut c = console("\n   \n guess extra\n");
        assert_eq!(c.read_token("? ").unwrap(), Some("guess".to_string()));
        assert_eq!(output_of(c), "? ? ? ");
    }

    #[test]
    fn read_line_strips_crlf() {
        let mut c = console("hello\r\nworld");
        assert_eq!(c.read_line().unwrap(), Some("hello".to_string()));
        assert_eq!(c.read_line().unwrap(), Some("world".to_string()));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn wait_for_enter_consumes_one_line() {
        let mut c = console("\n5\n");
        c.wait_for_enter().unwrap();
        assert_eq!(c.read_number("").unwrap(), Some(5));
    }
}
