use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChoiceOracle, OracleError};
use crate::config::OracleConfig;
use crate::data::ParameterValues;

#[derive(Serialize)]
struct ChoiceRequest<'a> {
    a: &'a ParameterValues,
    b: &'a ParameterValues,
}

#[derive(Deserialize)]
struct ChoiceResponse {
    chosen: ParameterValues,
}

/// Comparison service reached over HTTP.
///
/// `POST {base_url}/prompt_choice` with `{"a": .., "b": ..}`, answered by
/// `{"chosen": ..}`. The request stays open until the service has an answer.
pub struct RemoteOracle {
    client: Client,
    base_url: String,
    credential: Option<String>,
}

impl RemoteOracle {
    pub fn new(base_url: impl Into<String>, credential: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credential,
        }
    }

    /// Build from config, refusing to start without a required credential
    pub fn from_config(config: &OracleConfig) -> Result<Self, OracleError> {
        let credential = if config.require_credential {
            Some(config.credential.clone().ok_or(OracleError::Credential)?)
        } else {
            None
        };
        Ok(Self::new(config.base_url(), credential))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChoiceOracle for RemoteOracle {
    fn name(&self) -> &str {
        "remote"
    }

    async fn prompt_choice(
        &self,
        a: &ParameterValues,
        b: &ParameterValues,
    ) -> Result<ParameterValues, OracleError> {
        let url = format!("{}/prompt_choice", self.base_url.trim_end_matches('/'));
        let mut request = self.client.post(url).json(&ChoiceRequest { a, b });

        if let Some(ref key) = self.credential {
            request = request.bearer_auth(key);
        }

        let res = request.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(OracleError::Status { status: status.as_u16(), body });
        }

        let body = res.text().await?;
        let parsed: ChoiceResponse = serde_json::from_str(&body)
            .map_err(|e| OracleError::Protocol(format!("undecodable choice response: {}", e)))?;

        Ok(parsed.chosen)
    }
}
