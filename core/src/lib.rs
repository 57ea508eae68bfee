//! Weir Core - guard-and-dam flows
//!
//! A flow is a linear sequence of steps. Any guard may dam it; from then on
//! the remaining steps are skipped and only failure handlers run. Flows can
//! embed other flows and import selected results from them.
//!
//! **IMPORTANT**: This layer is synchronous - no IO, no async, no threads.

pub mod config;
pub mod error;
pub mod flow;
pub mod import;
pub mod outcome;
pub mod outflow;
pub mod state;
mod telemetry;
pub mod timeline;
pub mod truth;

pub use config::FlowConfig;
pub use error::{ConfigError, FlowError, FlowResult};
pub use flow::Flow;
pub use import::ImportSpec;
pub use outcome::FlowOutcome;
pub use outflow::Outflow;
pub use state::FlowState;
pub use timeline::{Disposition, StepKind, StepRecord, Timeline};
pub use truth::{Truth, Truthy};

pub mod prelude {
    pub use crate::config::FlowConfig;
    pub use crate::error::{FlowError, FlowResult};
    pub use crate::flow::Flow;
    pub use crate::import::ImportSpec;
    pub use crate::outcome::FlowOutcome;
    pub use crate::outflow::Outflow;
    pub use crate::state::FlowState;
    pub use crate::truth::{Truth, Truthy};
}
