//! Environment-driven settings.

/// Program that implements the Poisson model, if none is configured.
pub const DEFAULT_MODEL_COMMAND: &str = "run-poisson-model";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub model_command: String,
    pub model_args: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_command = lookup("POISSON_MODEL_COMMAND")
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_COMMAND.to_owned());

        let model_args = lookup("POISSON_MODEL_ARGS")
            .map(|s| s.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default();

        Config {
            model_command,
            model_args,
        }
    }
}
