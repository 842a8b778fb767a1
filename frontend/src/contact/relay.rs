use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

use crate::config;
use crate::contact::error::SubmitError;
use crate::contact::fields::FormFieldSet;

/// JSON body the relay answers with.
#[derive(Debug, Default, Deserialize)]
pub struct RelayBody {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the relay said about a submission it received.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayReply {
    pub success: bool,
    pub message: Option<String>,
}

impl RelayReply {
    /// A submission only counts when the HTTP status is 2xx and `success`
    /// is truthy in the JS sense, so `1` or `"true"` count too.
    pub fn interpret(status: u16, body: RelayBody) -> Self {
        let status_ok = (200..300).contains(&status);
        let success = status_ok && is_truthy(&body.success);
        let message = match body.message {
            Some(m) => Some(m),
            None if !status_ok => Some(format!("HTTP status {}", status)),
            None => None,
        };
        Self { success, message }
    }

    pub fn into_result(self) -> Result<Option<String>, SubmitError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(SubmitError::Application(self.message))
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Anything that can deliver a contact form somewhere.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn submit(&self, fields: &FormFieldSet) -> Result<RelayReply, SubmitError>;
}

#[derive(Clone, Debug)]
pub struct Web3FormsRelay {
    endpoint: String,
}

impl Web3FormsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for Web3FormsRelay {
    fn default() -> Self {
        Self::new(config::FORM_RELAY_URL)
    }
}

impl FormRelay for Web3FormsRelay {
    async fn submit(&self, fields: &FormFieldSet) -> Result<RelayReply, SubmitError> {
        let body = fields
            .to_form_data()
            .map_err(|e| SubmitError::Transport(format!("could not build form data: {:?}", e)))?;

        let response = Request::post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        log::debug!("Form relay answered with status {}", status);

        let body = response
            .json::<RelayBody>()
            .await
            .map_err(|e| SubmitError::Transport(format!("status {}: {}", status, e)))?;

        Ok(RelayReply::interpret(status, body))
    }
}
