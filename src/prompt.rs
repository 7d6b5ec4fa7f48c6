//! Resolving parameters from an ordered list of sources.
//!
//! Each source is asked in turn; the first one that yields a non-empty
//! value wins.

use std::io::{self, BufRead, Write};

pub trait ParamSource {
    fn fetch(&mut self) -> io::Result<Option<String>>;
}

/// A value that was (or was not) given on the command line.
pub struct Given(pub Option<String>);

impl ParamSource for Given {
    fn fetch(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.take())
    }
}

/// Asks the user on `output` and reads one line from `input`.
pub struct Prompt<'a, R, W> {
    message: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(message: &'a str, input: R, output: W) -> Self {
        Self {
            message,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> ParamSource for Prompt<'_, R, W> {
    fn fetch(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(Some(line.trim().to_string()))
    }
}

/// Returns the first non-empty value, or `None` if every source came up empty.
pub fn resolve(sources: &mut [&mut dyn ParamSource]) -> io::Result<Option<String>> {
    for source in sources.iter_mut() {
        if let Some(value) = source.fetch()? {
            if !value.is_empty() {
                return Ok(Some(value));
            }
        }
    }
    Ok(None)
}

/// Command-line value first, then an interactive prompt on stdin/stdout.
pub fn arg_or_prompt(arg: Option<String>, message: &str) -> io::Result<Option<String>> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(message, stdin.lock(), io::stdout());
    resolve(&mut [&mut Given(arg), &mut prompt])
}
