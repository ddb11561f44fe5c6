//! The serverless Poisson prediction function
//!
//! This library crate implements the `poisson` function that backs the
//! sports model frontend. The frontend POSTs a JSON object naming a sport
//! along with whatever else the model wants (teams, date, mode, ...). We
//! split off the sport, pass the rest through to the Poisson model as named
//! parameters, and send the model's answer back as JSON.
//!
//! The common codebase is compiled into three executables:
//! `poisson-lambda-bare`, `poisson-lambda-proxyevent` and
//! `poisson-lambda-oneshot`. The first speaks the plain `{"body": ...}` event
//! format used by Netlify-style function hosts, the second handles API
//! Gateway "proxy events", and the third runs a single request from the
//! command line for local testing.
//!
//! The model itself is not part of this crate. See [`model`] for how we
//! reach it.

use anyhow::Result;
use lambda_runtime::{tracing, Error};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod event;
pub mod handler;
pub mod model;

pub use handler::Reply;

use config::Config;
use event::InvocationEvent;
use model::{CommandModel, PoissonModel};

pub struct Services<M = CommandModel> {
    model: M,
}

impl Services<CommandModel> {
    /// Create a state object for the Poisson function, set up logging, and
    /// bind to the model program named in the environment.
    pub fn init() -> Result<Self, Error> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_target(false) // don't print the module name
            .without_time() // don't print time (CloudWatch has it)
            .init();

        let config = Config::from_env();
        tracing::info!(
            "poisson model: {} {:?}",
            config.model_command,
            config.model_args
        );

        Ok(Services::new(CommandModel::from_config(&config)))
    }
}

impl<M: PoissonModel> Services<M> {
    pub fn new(model: M) -> Self {
        Services { model }
    }

    /// Handle a raw invocation event of the `{"body": "..."}` variety.
    pub async fn handle_event(&self, event: &Value) -> Reply {
        let body = InvocationEvent::from_value(event).and_then(|ev| ev.decoded_body());
        self.handle_body(body).await
    }

    /// Handle an invocation whose body has already been pulled out of the
    /// host's event. Failures to obtain the body are reported like any other
    /// failure.
    pub async fn handle_body(&self, body: Result<String>) -> Reply {
        handler::handle(body, &self.model).await
    }
}
