use crate::timeline::StepKind;
use std::path::PathBuf;
use thiserror::Error;

pub type FlowResult<T> = Result<T, FlowError>;

/// Unexpected faults raised by step bodies.
///
/// Declared failures never show up here; they live in the flow's
/// [`FlowState`](crate::state::FlowState).
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("step {index} ({kind}) of flow '{flow}' faulted: {source}")]
    Step {
        flow: String,
        index: usize,
        kind: StepKind,
        source: anyhow::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read flow config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid flow config: {0}")]
    Parse(#[from] toml::de::Error),
}
