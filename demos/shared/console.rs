//! Line-oriented prompting shared by the demo shells.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and reads one line without its line ending. `None`
    /// means the input is exhausted.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    /// Reads whitespace-separated values, asking again until the line holds
    /// exactly `count` of them.
    pub fn values<T: FromStr>(&mut self, prompt: &str, count: usize) -> io::Result<Option<Vec<T>>> {
        loop {
            let Some(line) = self.line(prompt)? else {
                return Ok(None);
            };
            let parsed: Result<Vec<T>, _> = line.split_whitespace().map(str::parse).collect();
            match parsed {
                Ok(values) if values.len() == count => return Ok(Some(values)),
                _ => writeln!(self.output, "Expected {count} number(s), try again.")?,
            }
        }
    }

    pub fn value<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        Ok(self.values(prompt, 1)?.and_then(|mut v| v.pop()))
    }
}
