//! Oracle Module
//!
//! The external collaborator that picks one of two presets. The driver only
//! sees the [`ChoiceOracle`] trait; transports live behind it.

mod remote;
mod scripted;
mod terminal;

pub use remote::RemoteOracle;
pub use scripted::{ScriptedAnswer, ScriptedOracle};
pub use terminal::TerminalOracle;

use async_trait::async_trait;
use thiserror::Error;

use crate::data::ParameterValues;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("comparison service answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("credential required but none configured (set NEUROVIZ_SECRET)")]
    Credential,

    #[error("oracle closed before answering")]
    Closed,

    #[error("oracle I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability that resolves a forced choice between two parameter sets.
///
/// Implementations return one of the two inputs. Returning anything else is a
/// contract violation the driver treats as fatal.
#[async_trait]
pub trait ChoiceOracle: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    async fn prompt_choice(
        &self,
        a: &ParameterValues,
        b: &ParameterValues,
    ) -> Result<ParameterValues, OracleError>;
}
