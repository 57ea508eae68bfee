//! Weir facade crate.
//!
//! This crate re-exports the core, std and observe crates with a single entry point.

pub use weir_core as core;
#[cfg(feature = "observe")]
pub use weir_observe as observe;
#[cfg(feature = "std")]
pub use weir_std as std;

pub use weir_core::{Flow, FlowError, FlowOutcome, ImportSpec, Outflow, Truth, Truthy};

pub mod prelude {
    pub use weir_core::prelude::*;
    #[cfg(feature = "std")]
    pub use weir_std::prelude::*;
}
