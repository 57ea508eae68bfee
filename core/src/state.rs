//! FlowState - Open or Blocked
//!
//! A flow starts `Open` and is dammed at most once. The first block wins:
//! later attempts are discarded so the original cause is kept.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowState<P> {
    /// Steps keep executing
    Open,
    /// Steps are skipped; only failure handlers run
    Blocked { payload: Option<P> },
}

impl<P> FlowState<P> {
    pub fn is_open(&self) -> bool {
        matches!(self, FlowState::Open)
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, FlowState::Blocked { .. })
    }

    /// Payload captured when the flow was dammed, if one was supplied.
    pub fn payload(&self) -> Option<&P> {
        match self {
            FlowState::Blocked { payload } => payload.as_ref(),
            FlowState::Open => None,
        }
    }

    /// Transition `Open -> Blocked`.
    ///
    /// Returns `false` (and drops `payload`) when already blocked.
    pub fn block(&mut self, payload: Option<P>) -> bool {
        if self.is_blocked() {
            return false;
        }
        *self = FlowState::Blocked { payload };
        true
    }

    /// Fill in the payload of a blocked state that has none yet.
    pub fn supply(&mut self, payload: P) -> bool {
        match self {
            FlowState::Blocked { payload: slot @ None } => {
                *slot = Some(payload);
                true
            }
            _ => false,
        }
    }

    pub fn into_payload(self) -> Option<P> {
        match self {
            FlowState::Blocked { payload } => payload,
            FlowState::Open => None,
        }
    }
}

impl<P> Default for FlowState<P> {
    fn default() -> Self {
        FlowState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_open() {
        let state = FlowState::<String>::default();
        assert!(state.is_open());
        assert_eq!(state.payload(), None);
    }

    #[test]
    fn test_first_block_wins() {
        let mut state = FlowState::Open;

        assert!(state.block(Some("first")));
        assert!(!state.block(Some("second")));

        assert!(state.is_blocked());
        assert_eq!(state.payload(), Some(&"first"));
    }

    #[test]
    fn test_supply_only_fills_empty_payload() {
        let mut state = FlowState::Open;
        assert!(!state.supply("too early"));

        state.block(None);
        assert!(state.supply("cause"));
        assert!(!state.supply("late"));

        assert_eq!(state.into_payload(), Some("cause"));
    }
}
