pub use crate::nodes::debug::{log_outflow, log_payload};
pub use crate::nodes::logic::{absent, all_present, equals, non_empty, present, truthy};
pub use crate::nodes::validation::Validation;
