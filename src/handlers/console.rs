use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use crate::errors::{AppError, AppResult};

pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout, io::Stderr>;

/// Line-oriented prompt/answer I/O over any reader and pair of writers.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self { input, output, errors }
    }

    pub fn say(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn complain(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.errors, "{}", message)?;
        Ok(())
    }

    /// Reads one line without its line terminator.
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Re-prompts until the trimmed line parses as `T`.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> AppResult<T> {
        loop {
            let line = self.prompt(label)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!("Rejected numeric input: {:?}", line);
                    self.say("Please enter a valid number.")?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    #[cfg(test)]
    pub fn errors(&self) -> &E {
        &self.errors
    }
}
