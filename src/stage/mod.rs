// Purpose - where performances go: the console, a recording, or a ring buffer

use std::io::{self, Write};

#[cfg(feature = "rtrb")]
use rtrb::Producer;

use crate::error::Result;

/// Output sink receiving one line per tune or play.
pub trait Stage {
    fn emit(&mut self, line: String) -> Result<()>;
}

/// Writes each line, newline-terminated, to any [`Write`] target.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    /// Console backed by the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Stage for Console<W> {
    fn emit(&mut self, line: String) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// Recording stage: keeps every line in order.
impl Stage for Vec<String> {
    fn emit(&mut self, line: String) -> Result<()> {
        self.push(line);
        Ok(())
    }
}

#[cfg(feature = "rtrb")]
impl Stage for Producer<String> {
    fn emit(&mut self, line: String) -> Result<()> {
        self.push(line).map_err(|err| match err {
            rtrb::PushError::Full(line) => crate::error::PerformError::StageFull { line },
        })
    }
}
