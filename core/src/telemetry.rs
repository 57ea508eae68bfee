//! # Telemetry: step events
//!
//! Every executor call is reported as a `tracing` event carrying the flow's
//! label and id, the step index and kind, and what happened to it.

use crate::timeline::{Disposition, StepKind};
use uuid::Uuid;

pub(crate) fn record_step(
    flow_id: &Uuid,
    label: &str,
    index: usize,
    kind: &StepKind,
    disposition: Disposition,
) {
    match disposition {
        Disposition::Blocked => {
            tracing::info!(
                weir.flow = %label,
                weir.flow_id = %flow_id,
                weir.step = index,
                %kind,
                "Flow dammed"
            );
        }
        Disposition::Ignored => {
            tracing::debug!(
                weir.flow = %label,
                weir.flow_id = %flow_id,
                weir.step = index,
                %kind,
                "Block discarded, flow already dammed"
            );
        }
        Disposition::Faulted => {
            tracing::error!(
                weir.flow = %label,
                weir.flow_id = %flow_id,
                weir.step = index,
                %kind,
                "Step faulted"
            );
        }
        Disposition::Ran | Disposition::Skipped => {
            tracing::debug!(
                weir.flow = %label,
                weir.flow_id = %flow_id,
                weir.step = index,
                %kind,
                ?disposition,
                "Step"
            );
        }
    }
}

pub(crate) fn record_embed(
    flow_id: &Uuid,
    label: &str,
    nested_id: &Uuid,
    imported: usize,
    nested_blocked: bool,
) {
    tracing::debug!(
        weir.flow = %label,
        weir.flow_id = %flow_id,
        weir.nested_flow_id = %nested_id,
        imported,
        nested_blocked,
        "Sub-flow embedded"
    );
}
