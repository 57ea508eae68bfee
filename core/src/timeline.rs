use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which executor operation produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum StepKind {
    Chain,
    /// Unconditional step writing its value under the given key
    ChainTo(String),
    WhenTruthy,
    WhenFalsy,
    Dam,
    OnDam,
    Block,
    Embed,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Chain => write!(f, "chain"),
            StepKind::ChainTo(key) => write!(f, "chain_to({key})"),
            StepKind::WhenTruthy => write!(f, "when_truthy"),
            StepKind::WhenFalsy => write!(f, "when_falsy"),
            StepKind::Dam => write!(f, "dam"),
            StepKind::OnDam => write!(f, "on_dam"),
            StepKind::Block => write!(f, "block"),
            StepKind::Embed => write!(f, "chain_wf"),
        }
    }
}

/// What happened when an operation was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// The body ran and the flow stayed as it was
    Ran,
    /// The body was not invoked
    Skipped,
    /// This operation dammed the flow
    Blocked,
    /// A block request arrived after the flow was already dammed
    Ignored,
    /// The body returned an error that aborted the call chain
    Faulted,
}

/// One executor call in a flow's life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub index: usize,
    pub kind: StepKind,
    pub disposition: Disposition,
    pub at: DateTime<Utc>,
}

impl StepRecord {
    pub fn new(index: usize, kind: StepKind, disposition: Disposition) -> Self {
        Self {
            index,
            kind,
            disposition,
            at: Utc::now(),
        }
    }
}

/// A sequential record of a flow's execution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Timeline {
    pub records: Vec<StepRecord>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose body was invoked
    pub fn executed(&self) -> impl Iterator<Item = &StepRecord> {
        self.records.iter().filter(|r| {
            matches!(
                r.disposition,
                Disposition::Ran | Disposition::Blocked | Disposition::Faulted
            )
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &StepRecord> {
        self.records
            .iter()
            .filter(|r| r.disposition == Disposition::Skipped)
    }

    /// The operation that dammed the flow, if any
    pub fn blocked_at(&self) -> Option<&StepRecord> {
        self.records
            .iter()
            .find(|r| r.disposition == Disposition::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters() {
        let mut timeline = Timeline::new();
        timeline.push(StepRecord::new(0, StepKind::WhenTruthy, Disposition::Ran));
        timeline.push(StepRecord::new(1, StepKind::WhenFalsy, Disposition::Blocked));
        timeline.push(StepRecord::new(2, StepKind::Chain, Disposition::Skipped));
        timeline.push(StepRecord::new(3, StepKind::OnDam, Disposition::Ran));

        assert_eq!(timeline.executed().count(), 3);
        assert_eq!(timeline.skipped().map(|r| r.index).collect::<Vec<_>>(), vec![2]);
        assert_eq!(timeline.blocked_at().map(|r| r.index), Some(1));
    }

    #[test]
    fn test_kind_serialization() {
        let kind = StepKind::ChainTo("user".into());
        let value = serde_json::to_value(&kind).ok();
        assert_eq!(
            value,
            Some(serde_json::json!({"kind": "chain_to", "key": "user"}))
        );
        assert_eq!(kind.to_string(), "chain_to(user)");
    }
}
