use std::io::{self, BufRead, Stdout, StdinLock, Write};

use tracing::trace;

use crate::{error::GameError, model::messages::GameEvent};

/// Boundary between the game and whoever is playing it.
pub trait Console {
    /// Next line of input without its line ending, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, GameError>;

    fn emit(&mut self, event: GameEvent) -> Result<(), GameError>;

    // Emit a prompt and wait for the answer
    fn ask(&mut self, prompt: GameEvent) -> Result<Option<String>, GameError> {
        self.emit(prompt)?;
        self.read_line()
    }
}

/// Renders events as text on a writer and reads answers line by line.
pub struct TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    reader: R,
    writer: W,
}

impl<R, W> TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        TerminalConsole { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        TerminalConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Console for TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            trace!("Console reached end of input");
            return Ok(None);
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]).to_owned();
        trace!("Read line {:?}", line);
        Ok(Some(line))
    }

    fn emit(&mut self, event: GameEvent) -> Result<(), GameError> {
        if event.is_prompt() {
            write!(self.writer, "{}", event)?;
        } else {
            writeln!(self.writer, "{}", event)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
