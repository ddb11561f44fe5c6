//! The Poisson prediction routine.
//!
//! The actual modeling lives outside of this crate. All we know about it is
//! that it takes a sport selector plus a bag of named parameters and hands
//! back some JSON. [`PoissonModel`] is that contract; [`CommandModel`] is how
//! we reach the real thing in deployment, by running it as a separate
//! program and talking JSON over its stdin and stdout.

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{json, Map, Value};
use std::{future::Future, io::ErrorKind, process::Stdio};
use tokio::{io::AsyncWriteExt, process::Command};

use crate::config::Config;

pub trait PoissonModel {
    /// Run the model for `sport` with `params` as its named parameters.
    ///
    /// Which sports exist, which parameters are required and what the
    /// result looks like are entirely up to the implementation.
    fn run(
        &self,
        sport: Option<Value>,
        params: Map<String, Value>,
    ) -> impl Future<Output = Result<Value>> + Send;
}

#[derive(Clone, Debug)]
pub struct CommandModel {
    program: String,
    args: Vec<String>,
}

impl CommandModel {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        CommandModel {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.model_command.clone(), config.model_args.clone())
    }

    async fn invoke(&self, request: &Value) -> Result<Value> {
        let input = serde_json::to_vec(request)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to launch poisson model `{}`", self.program))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("poisson model stdin unavailable"))?;

        // The request has to be fed in while the output is drained, or a model
        // that answers before it has read everything fills its pipes and we
        // deadlock. Dropping `stdin` at the end of the write closes it.
        let send = async move {
            match stdin.write_all(&input).await {
                // The model stopped reading; its exit status says whether
                // that was a problem.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };

        let (sent, output) = tokio::join!(send, child.wait_with_output());
        let output = output.context("failed to collect poisson model output")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();

            if stderr.is_empty() {
                bail!("poisson model failed ({})", output.status);
            } else {
                bail!("{stderr}");
            }
        }

        sent.context("failed to send request to poisson model")?;
        serde_json::from_slice(&output.stdout).context("poisson model produced invalid JSON")
    }
}

impl PoissonModel for CommandModel {
    fn run(
        &self,
        sport: Option<Value>,
        params: Map<String, Value>,
    ) -> impl Future<Output = Result<Value>> + Send {
        async move {
            let request = json!({
                "sport": sport,
                "params": params,
            });
            self.invoke(&request).await
        }
    }
}
