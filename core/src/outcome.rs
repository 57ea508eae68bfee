use crate::outflow::Outflow;
use serde::{Deserialize, Serialize};

/// Terminal view of a flow, handed to whoever renders the result.
///
/// `FlowOutcome` is "Control Flow as Data": instead of inspecting the flow
/// piecemeal, a collaborator matches on the two possible endings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowOutcome<V = serde_json::Value, P = serde_json::Value> {
    /// Every step ran
    Open { outflow: Outflow<V> },
    /// A guard (or nested flow) dammed the flow
    Blocked {
        payload: Option<P>,
        outflow: Outflow<V>,
    },
}

impl<V, P> FlowOutcome<V, P> {
    pub fn is_blocked(&self) -> bool {
        matches!(self, FlowOutcome::Blocked { .. })
    }

    pub fn outflow(&self) -> &Outflow<V> {
        match self {
            FlowOutcome::Open { outflow } | FlowOutcome::Blocked { outflow, .. } => outflow,
        }
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            FlowOutcome::Blocked { payload, .. } => payload.as_ref(),
            FlowOutcome::Open { .. } => None,
        }
    }

    pub fn map_payload<Q, F: FnOnce(P) -> Q>(self, op: F) -> FlowOutcome<V, Q> {
        match self {
            FlowOutcome::Open { outflow } => FlowOutcome::Open { outflow },
            FlowOutcome::Blocked { payload, outflow } => FlowOutcome::Blocked {
                payload: payload.map(op),
                outflow,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn outflow() -> Outflow {
        [("email", json!("ada@example.com"))].into_iter().collect()
    }

    #[test]
    fn test_map_payload_open_keeps_outflow() {
        let outcome: FlowOutcome = FlowOutcome::Open { outflow: outflow() };
        let mapped: FlowOutcome<Value, usize> = outcome.map_payload(|_| unreachable!());
        assert!(!mapped.is_blocked());
        assert_eq!(mapped.payload(), None);
        assert_eq!(mapped.outflow(), &outflow());
    }

    #[test]
    fn test_map_payload_blocked() {
        let outcome: FlowOutcome = FlowOutcome::Blocked {
            payload: Some(json!("email is taken")),
            outflow: outflow(),
        };
        let mapped = outcome.map_payload(|p| p.as_str().map(str::len));
        assert!(mapped.is_blocked());
        assert_eq!(mapped.payload(), Some(&Some(14)));
        assert_eq!(mapped.outflow(), &outflow());
    }

    #[test]
    fn test_map_payload_blocked_without_payload() {
        let outcome: FlowOutcome = FlowOutcome::Blocked {
            payload: None,
            outflow: Outflow::new(),
        };
        let mapped: FlowOutcome<Value, String> = outcome.map_payload(|p| p.to_string());
        assert!(mapped.is_blocked());
        assert_eq!(mapped.payload(), None);
    }
}
