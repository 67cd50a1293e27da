use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    console::{ConsoleError, ConsoleResult},
    core::db::Hours,
};

/// Prompted line input over any reader/writer pair.
///
/// Blank or whitespace-only lines come back as `None`, which callers treat as
/// "nothing entered".
pub struct InputReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `"<prompt>: "` and reads one line. End of input is [`ConsoleError::InputClosed`].
    ///
    /// A line that is not UTF-8 is consumed and reported as
    /// [`ConsoleError::InvalidEncoding`]; the stream stays usable.
    pub fn read_line(&mut self, prompt: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8(bytes).map_err(|_| ConsoleError::InvalidEncoding)?;
        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn read_integer<T: FromStr>(&mut self, prompt: &str) -> ConsoleResult<Option<T>> {
        let Some(input) = self.read_line(prompt)? else {
            return Ok(None);
        };
        input
            .parse()
            .map(Some)
            .map_err(|_| ConsoleError::InvalidNumber { input })
    }

    pub fn read_decimal(&mut self, prompt: &str) -> ConsoleResult<Option<Hours>> {
        let Some(input) = self.read_line(prompt)? else {
            return Ok(None);
        };
        input
            .parse()
            .map(Some)
            .map_err(|source| ConsoleError::InvalidDecimal { input, source })
    }
}
