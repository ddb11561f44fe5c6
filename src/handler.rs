//! The prediction request handler.
//!
//! This is a thin adapter: decode the body, peel off the `sport` selector,
//! hand everything else to the model as named parameters, and turn whatever
//! comes back into a JSON response. Every failure along the way, whatever
//! its origin, ends up as a 500 with an `{"error": ...}` body.

use anyhow::{anyhow, Result};
use lambda_runtime::tracing;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::model::PoissonModel;

const SPORT_KEY: &str = "sport";

/// A decoded request body, split into the selector and the named parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionRequest {
    pub sport: Option<Value>,
    pub params: Map<String, Value>,
}

impl PredictionRequest {
    pub fn from_body(body: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(anyhow!("request body must be a JSON object")),
        }
    }

    pub fn from_map(mut params: Map<String, Value>) -> Self {
        let sport = params.shift_remove(SPORT_KEY);
        PredictionRequest { sport, params }
    }
}

/// The response record handed back to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub status_code: u16,
    pub body: String,
}

impl Reply {
    pub fn success(result: &Value) -> Self {
        Reply {
            status_code: 200,
            body: result.to_string(),
        }
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        let message: String = message.into();
        Reply {
            status_code: 500,
            body: json!({ "error": message }).to_string(),
        }
    }
}

/// Run one invocation from its (already extracted) body text.
pub async fn handle<M: PoissonModel>(body: Result<String>, model: &M) -> Reply {
    match predict(body, model).await {
        Ok(result) => Reply::success(&result),

        Err(e) => {
            let message = format!("{e:#}");
            tracing::warn!("prediction failed: {message}");
            Reply::failure(message)
        }
    }
}

async fn predict<M: PoissonModel>(body: Result<String>, model: &M) -> Result<Value> {
    let request = PredictionRequest::from_body(&body?)?;

    tracing::info!(
        sport = ?request.sport,
        params = ?request.params.keys().collect::<Vec<_>>(),
        "running poisson model"
    );

    model.run(request.sport, request.params).await
}
