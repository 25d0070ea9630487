//! Operator at the terminal acts as the oracle.
//!
//! One preset is shown at a time. The operator swaps between A and B as often
//! as they like and answers with whichever is currently shown.

use async_trait::async_trait;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use super::{ChoiceOracle, OracleError};
use crate::data::ParameterValues;
use crate::driver::Side;

enum Command {
    Swap,
    Answer,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "s" | "swap" => Command::Swap,
        "" | "a" | "answer" => Command::Answer,
        _ => Command::Unknown,
    }
}

pub struct TerminalOracle {
    input: Mutex<Box<dyn AsyncBufRead + Send + Unpin>>,
    output: Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
}

impl TerminalOracle {
    /// Prompt on stdout, read from stdin
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }

    pub fn with_io(
        input: impl AsyncBufRead + Send + Unpin + 'static,
        output: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }
}

impl Default for TerminalOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChoiceOracle for TerminalOracle {
    fn name(&self) -> &str {
        "terminal"
    }

    async fn prompt_choice(
        &self,
        a: &ParameterValues,
        b: &ParameterValues,
    ) -> Result<ParameterValues, OracleError> {
        let mut input = self.input.lock().await;
        let mut output = self.output.lock().await;

        let mut shown = Side::A;
        loop {
            let parameters = match shown {
                Side::A => a,
                Side::B => b,
            };
            let prompt = format!("Showing preset {}: {}\n[s]wap / [a]nswer: ", shown, parameters);
            output.write_all(prompt.as_bytes()).await?;
            output.flush().await?;

            let mut line = String::new();
            if input.read_line(&mut line).await? == 0 {
                return Err(OracleError::Closed);
            }

            match parse_command(&line) {
                Command::Swap => {
                    shown = match shown {
                        Side::A => Side::B,
                        Side::B => Side::A,
                    };
                }
                Command::Answer => return Ok(*parameters),
                Command::Unknown => {
                    output.write_all(b"Unknown command, type 's' or 'a'\n").await?;
                }
            }
        }
    }
}
