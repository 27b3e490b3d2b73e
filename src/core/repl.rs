use crate::core::dispatcher::Dispatcher;
use crate::core::parser::{parse_command, ParseError};
use crate::core::{ApiCommand, Command, Outcome, Transport, Verb};
use crate::utils::console::{Console, MessageType};
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const PROMPT: &str = "Command prompt >>> ";
pub const EXIT_HINT: &str = "For exit enter 'q'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Read-eval-print loop: one line, one command, one request at a time.
pub struct Repl<T: Transport> {
    dispatcher: Dispatcher<T>,
    console: Console,
}

impl<T: Transport> Repl<T> {
    pub fn new(dispatcher: Dispatcher<T>, console: Console) -> Self {
        Self {
            dispatcher,
            console,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Runs until `q` or end of input. Errors are only returned when the
    /// terminal itself fails; request failures are printed and the loop
    /// carries on.
    pub async fn run<R, W>(&self, mut input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.print_banner(out)?;

        let mut buf = Vec::new();
        loop {
            self.console.write_text(out, PROMPT, MessageType::Weak)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                tracing::debug!("End of input, leaving prompt");
                writeln!(out)?;
                break;
            }
            let line = decode_line(&buf);
            writeln!(out)?;

            if self.handle_line(&line, out).await? == Flow::Exit {
                break;
            }

            writeln!(out)?;
            writeln!(out)?;
        }

        Ok(())
    }

    pub async fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> Result<Flow> {
        match parse_command(line) {
            Ok(Command::Quit) => return Ok(Flow::Exit),
            Ok(Command::Api(command)) => self.execute(&command, out).await?,
            Err(ParseError::Usage(verb)) => {
                tracing::debug!("Malformed {} command: {:?}", verb, line);
                self.console.write_line(out, verb.usage(), MessageType::Hint)?;
            }
            Err(ref e @ ParseError::Unknown(ref input)) => {
                tracing::debug!("Unknown command: {:?}", input);
                self.console.write_line(out, &e.to_string(), MessageType::Fail)?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn execute<W: Write>(&self, command: &ApiCommand, out: &mut W) -> Result<()> {
        match self.dispatcher.dispatch(command).await {
            Ok(outcome) => self.print_outcome(&outcome, out)?,
            Err(e) => {
                if e.is_transport() {
                    tracing::warn!("{} request failed: {}", command.verb(), e);
                } else {
                    tracing::error!("{} request could not be built: {}", command.verb(), e);
                }
                self.console.write_line(out, &e.chain_message(), MessageType::Fail)?;
                self.console.write_line(out, e.recovery_suggestion(), MessageType::Hint)?;
            }
        }
        Ok(())
    }

    fn print_outcome<W: Write>(&self, outcome: &Outcome, out: &mut W) -> Result<()> {
        self.console.write_line(out, "Server response:", MessageType::Weak)?;
        match outcome {
            Outcome::Body(body) => self.console.write_line(out, body, MessageType::Success)?,
            Outcome::Status(status) => self.console.write_line(
                out,
                &format!("Return code: {}", status),
                MessageType::Success,
            )?,
            Outcome::Failure { status, body } => self.console.write_line(
                out,
                &format!("Return code: {}\nMessage: {}", status, body),
                MessageType::Fail,
            )?,
        }
        Ok(())
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        for verb in Verb::all() {
            self.console.write_line(out, verb.usage(), MessageType::Hint)?;
        }
        self.console.write_line(out, EXIT_HINT, MessageType::Hint)?;
        writeln!(out)?;
        Ok(())
    }
}

// Invalid UTF-8 is replaced rather than rejected so one bad line cannot end the session.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
