//! Weir Std - reusable guards and steps
//!
//! Everything here works on JSON outflows (`Outflow<serde_json::Value>`)
//! and plugs straight into the executor methods of
//! [`Flow`](weir_core::Flow).

pub mod nodes {
    pub mod debug;
    pub mod logic;
    pub mod validation;
}

pub mod prelude;
