use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{ChoiceOracle, OracleError};
use crate::data::ParameterValues;

/// One scripted reply
pub enum ScriptedAnswer {
    /// Pick the first argument
    A,
    /// Pick the second argument
    B,
    /// Return this value regardless of the inputs
    Value(ParameterValues),
    /// Fail with this error
    Fail(OracleError),
}

/// Replays a fixed list of answers and records every prompt.
///
/// Once the script runs out it reports [`OracleError::Closed`].
#[derive(Clone)]
pub struct ScriptedOracle {
    answers: Arc<Mutex<VecDeque<ScriptedAnswer>>>,
    prompts: Arc<Mutex<Vec<(ParameterValues, ParameterValues)>>>,
}

impl ScriptedOracle {
    pub fn new(answers: Vec<ScriptedAnswer>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(VecDeque::from(answers))),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answers with side A, `count` times
    pub fn always_a(count: usize) -> Self {
        Self::new((0..count).map(|_| ScriptedAnswer::A).collect())
    }

    /// Prompts received so far, in order
    pub async fn prompts(&self) -> Vec<(ParameterValues, ParameterValues)> {
        self.prompts.lock().await.clone()
    }

    pub async fn remaining(&self) -> usize {
        self.answers.lock().await.len()
    }
}

#[async_trait]
impl ChoiceOracle for ScriptedOracle {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn prompt_choice(
        &self,
        a: &ParameterValues,
        b: &ParameterValues,
    ) -> Result<ParameterValues, OracleError> {
        self.prompts.lock().await.push((*a, *b));

        match self.answers.lock().await.pop_front() {
            Some(ScriptedAnswer::A) => Ok(*a),
            Some(ScriptedAnswer::B) => Ok(*b),
            Some(ScriptedAnswer::Value(v)) => Ok(v),
            Some(ScriptedAnswer::Fail(e)) => Err(e),
            None => Err(OracleError::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order() {
        let a = ParameterValues { outline: 0.1, ..ParameterValues::default() };
        let b = ParameterValues { outline: 0.2, ..ParameterValues::default() };
        let oracle = ScriptedOracle::new(vec![ScriptedAnswer::B, ScriptedAnswer::A]);

        assert_eq!(oracle.prompt_choice(&a, &b).await.unwrap(), b);
        assert_eq!(oracle.prompt_choice(&a, &b).await.unwrap(), a);
        assert!(matches!(oracle.prompt_choice(&a, &b).await, Err(OracleError::Closed)));
        assert_eq!(oracle.prompts().await.len(), 3);
        assert_eq!(oracle.remaining().await, 0);
    }
}
