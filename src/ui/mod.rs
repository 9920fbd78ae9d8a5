//! Line-oriented console boundary. The game only talks to a [`Console`], so
//! the whole turn loop runs against [`ScriptedConsole`] in tests.

use crossterm::style::Stylize;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

pub trait Console {
    /// Read one line without its line terminator. `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Error and outcome messages. Plain by default.
    fn alert(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line)
    }
}

/// stdin/stdout console. Alerts are styled only when writing to a terminal.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        let output = io::stdout();
        let styled = output.is_terminal();
        Self::new(io::stdin().lock(), output).styled(styled)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Plain text console; see [`TerminalConsole::styled`].
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let trimmed = input.trim_end_matches(['\r', '\n']).len();
        input.truncate(trimmed);
        Ok(Some(input))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    fn alert(&mut self, line: &str) -> io::Result<()> {
        if !self.styled {
            return self.write_line(line);
        }
        writeln!(self.output, "{}", line.bold().yellow())?;
        self.output.flush()
    }
}

/// Console fed from a fixed list of input lines, recording everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of output lines equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| *l == line).count()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
