//! Flow - the guard-and-dam executor
//!
//! A [`Flow`] is driven by calling its executor methods in order. Each call
//! consults the [`FlowState`] and either runs its body or skips it, then
//! hands back the same flow so calls can be chained:
//!
//! ```rust
//! use serde_json::json;
//! use weir_core::Flow;
//!
//! let mut flow: Flow = Flow::new();
//! flow.when_truthy(|out| out.contains("email"))
//!     .dam(|_| json!("email is required"))
//!     .chain_to("user", |_| json!(42))
//!     .on_dam(|payload, _| eprintln!("rejected: {payload:?}"));
//!
//! assert!(flow.is_blocked());
//! assert_eq!(flow.payload(), Some(&json!("email is required")));
//! ```
//!
//! Once dammed, a flow never reopens. Step bodies and guard predicates are
//! skipped from then on; only `on_dam` handlers run.

use crate::config::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::import::ImportSpec;
use crate::outcome::FlowOutcome;
use crate::outflow::Outflow;
use crate::state::FlowState;
use crate::telemetry;
use crate::timeline::{Disposition, StepKind, StepRecord, Timeline};
use crate::truth::Truthy;
use uuid::Uuid;

/// One ordered sequence of guarded steps.
///
/// `V` is the value type of the [`Outflow`], `P` the payload recorded when
/// the flow is dammed. Both default to `serde_json::Value`.
#[derive(Debug)]
pub struct Flow<V = serde_json::Value, P = serde_json::Value> {
    id: Uuid,
    config: FlowConfig,
    state: FlowState<P>,
    outflow: Outflow<V>,
    timeline: Timeline,
    steps: usize,
    /// Set when the previous executor call was a guard that dammed the flow
    dam_armed: bool,
}

impl<V, P> Flow<V, P> {
    /// Start an open flow with an empty outflow.
    pub fn new() -> Self {
        Self::with_config(FlowConfig::default())
    }

    pub fn with_config(config: FlowConfig) -> Self {
        Flow {
            id: Uuid::new_v4(),
            config,
            state: FlowState::Open,
            outflow: Outflow::new(),
            timeline: Timeline::new(),
            steps: 0,
            dam_armed: false,
        }
    }

    /// Start an open flow whose outflow already holds `outflow`.
    pub fn seeded(outflow: Outflow<V>) -> Self {
        Self::new().with_outflow(outflow)
    }

    pub fn with_outflow(mut self, outflow: Outflow<V>) -> Self {
        self.outflow = outflow;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_blocked(&self) -> bool {
        self.state.is_blocked()
    }

    pub fn state(&self) -> &FlowState<P> {
        &self.state
    }

    pub fn payload(&self) -> Option<&P> {
        self.state.payload()
    }

    pub fn outflow(&self) -> &Outflow<V> {
        &self.outflow
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Consume the flow into its terminal outcome.
    pub fn into_outcome(self) -> FlowOutcome<V, P> {
        let outflow = self.outflow;
        match self.state {
            FlowState::Open => FlowOutcome::Open { outflow },
            FlowState::Blocked { payload } => FlowOutcome::Blocked { payload, outflow },
        }
    }

    pub fn into_parts(self) -> (FlowState<P>, Outflow<V>) {
        (self.state, self.outflow)
    }

    // --- Step executor ---

    /// Unconditional step with write access to the outflow.
    ///
    /// Runs only while the flow is open. It never dams the flow.
    pub fn chain<F>(&mut self, step: F) -> &mut Self
    where
        F: FnOnce(&mut Outflow<V>),
    {
        let index = self.next_index();
        if self.state.is_blocked() {
            return self.settle(index, StepKind::Chain, Disposition::Skipped);
        }
        step(&mut self.outflow);
        self.settle(index, StepKind::Chain, Disposition::Ran)
    }

    /// Unconditional step whose value is written under `key`.
    pub fn chain_to<F>(&mut self, key: impl Into<String>, step: F) -> &mut Self
    where
        F: FnOnce(&Outflow<V>) -> V,
    {
        let index = self.next_index();
        let key = key.into();
        if self.state.is_blocked() {
            return self.settle(index, StepKind::ChainTo(key), Disposition::Skipped);
        }
        let value = step(&self.outflow);
        self.outflow.set(key.clone(), value);
        self.settle(index, StepKind::ChainTo(key), Disposition::Ran)
    }

    /// Fallible variant of [`chain`](Self::chain).
    ///
    /// An `Err` is a fault, not a declared failure: it is returned to the
    /// caller so `?` aborts the rest of the call chain, and the flow state is
    /// left untouched.
    pub fn try_chain<F, E>(&mut self, step: F) -> FlowResult<&mut Self>
    where
        F: FnOnce(&mut Outflow<V>) -> Result<(), E>,
        E: Into<anyhow::Error>,
    {
        let index = self.next_index();
        if self.state.is_blocked() {
            return Ok(self.settle(index, StepKind::Chain, Disposition::Skipped));
        }
        match step(&mut self.outflow) {
            Ok(()) => Ok(self.settle(index, StepKind::Chain, Disposition::Ran)),
            Err(err) => Err(self.fault(index, StepKind::Chain, err.into())),
        }
    }

    /// Fallible variant of [`chain_to`](Self::chain_to).
    pub fn try_chain_to<F, E>(&mut self, key: impl Into<String>, step: F) -> FlowResult<&mut Self>
    where
        F: FnOnce(&Outflow<V>) -> Result<V, E>,
        E: Into<anyhow::Error>,
    {
        let index = self.next_index();
        let key = key.into();
        if self.state.is_blocked() {
            return Ok(self.settle(index, StepKind::ChainTo(key), Disposition::Skipped));
        }
        match step(&self.outflow) {
            Ok(value) => {
                self.outflow.set(key.clone(), value);
                Ok(self.settle(index, StepKind::ChainTo(key), Disposition::Ran))
            }
            Err(err) => Err(self.fault(index, StepKind::ChainTo(key), err.into())),
        }
    }

    /// Guard: dam the flow unless the predicate is truthy.
    pub fn when_truthy<F, T>(&mut self, predicate: F) -> &mut Self
    where
        F: FnOnce(&Outflow<V>) -> T,
        T: Truthy,
    {
        self.guard(StepKind::WhenTruthy, predicate, false)
    }

    /// Guard: dam the flow when the predicate is truthy.
    pub fn when_falsy<F, T>(&mut self, predicate: F) -> &mut Self
    where
        F: FnOnce(&Outflow<V>) -> T,
        T: Truthy,
    {
        self.guard(StepKind::WhenFalsy, predicate, true)
    }

    /// Record the payload for the block caused by the previous guard.
    ///
    /// The expression is only evaluated right after a guard that dammed the
    /// flow. Anywhere else this is a no-op: after a passing guard, after
    /// `block`, after a dammed nested flow, or as a second `dam`.
    pub fn dam<F>(&mut self, payload: F) -> &mut Self
    where
        F: FnOnce(&Outflow<V>) -> P,
    {
        let index = self.next_index();
        if !self.dam_armed || self.state.payload().is_some() {
            return self.settle(index, StepKind::Dam, Disposition::Skipped);
        }
        let payload = payload(&self.outflow);
        self.state.supply(payload);
        self.settle(index, StepKind::Dam, Disposition::Ran)
    }

    /// Failure handler: runs only while the flow is dammed.
    pub fn on_dam<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnOnce(Option<&P>, &Outflow<V>),
    {
        let index = self.next_index();
        if self.state.is_open() {
            return self.settle(index, StepKind::OnDam, Disposition::Skipped);
        }
        handler(self.state.payload(), &self.outflow);
        self.settle(index, StepKind::OnDam, Disposition::Ran)
    }

    /// Dam the flow directly with `payload`.
    ///
    /// Discarded when the flow is already dammed.
    pub fn block(&mut self, payload: P) -> &mut Self {
        let index = self.next_index();
        let disposition = if self.state.block(Some(payload)) {
            Disposition::Blocked
        } else {
            Disposition::Ignored
        };
        self.settle(index, StepKind::Block, disposition)
    }

    // --- Sub-flow embedding ---

    /// Run a nested flow and take over part of its outflow.
    ///
    /// `factory` receives a read-only view of this flow's outflow and must
    /// return the nested flow already driven to its end. Every
    /// `(parent, nested)` pair in `imports` whose nested key exists is copied
    /// into this flow; missing keys are skipped. A dammed nested flow dams
    /// this one with the same payload.
    pub fn chain_wf<I, F>(&mut self, imports: I, factory: F) -> &mut Self
    where
        I: Into<ImportSpec>,
        F: FnOnce(&Outflow<V>) -> Flow<V, P>,
        V: Clone,
    {
        let index = self.next_index();
        if self.state.is_blocked() {
            return self.settle(index, StepKind::Embed, Disposition::Skipped);
        }

        let nested = factory(&self.outflow);
        let imports: ImportSpec = imports.into();
        let mut imported = 0;
        for (parent_key, nested_key) in imports.iter() {
            if let Some(value) = nested.outflow.get(nested_key) {
                self.outflow.set(parent_key, value.clone());
                imported += 1;
            }
        }

        let nested_id = nested.id;
        let (nested_state, _) = nested.into_parts();
        let nested_blocked = nested_state.is_blocked();
        if self.config.trace_steps {
            telemetry::record_embed(
                &self.id,
                &self.config.label,
                &nested_id,
                imported,
                nested_blocked,
            );
        }

        if nested_blocked {
            self.state.block(nested_state.into_payload());
            return self.settle(index, StepKind::Embed, Disposition::Blocked);
        }
        self.settle(index, StepKind::Embed, Disposition::Ran)
    }

    fn guard<F, T>(&mut self, kind: StepKind, predicate: F, block_when_truthy: bool) -> &mut Self
    where
        F: FnOnce(&Outflow<V>) -> T,
        T: Truthy,
    {
        let index = self.next_index();
        if self.state.is_blocked() {
            return self.settle(index, kind, Disposition::Skipped);
        }
        let truthy = predicate(&self.outflow).is_truthy();
        if truthy == block_when_truthy {
            self.state.block(None);
            self.settle(index, kind, Disposition::Blocked);
            self.dam_armed = true;
            return self;
        }
        self.settle(index, kind, Disposition::Ran)
    }

    fn next_index(&mut self) -> usize {
        let index = self.steps;
        self.steps += 1;
        index
    }

    fn settle(&mut self, index: usize, kind: StepKind, disposition: Disposition) -> &mut Self {
        if self.config.trace_steps {
            telemetry::record_step(&self.id, &self.config.label, index, &kind, disposition);
        }
        if self.config.record_timeline {
            self.timeline.push(StepRecord::new(index, kind, disposition));
        }
        self.dam_armed = false;
        self
    }

    fn fault(&mut self, index: usize, kind: StepKind, source: anyhow::Error) -> FlowError {
        self.settle(index, kind.clone(), Disposition::Faulted);
        FlowError::Step {
            flow: self.config.label.clone(),
            index,
            kind,
            source,
        }
    }
}

impl<V: Clone, P: Clone> Flow<V, P> {
    /// Snapshot of the terminal outcome without consuming the flow.
    pub fn outcome(&self) -> FlowOutcome<V, P> {
        match &self.state {
            FlowState::Open => FlowOutcome::Open {
                outflow: self.outflow.clone(),
            },
            FlowState::Blocked { payload } => FlowOutcome::Blocked {
                payload: payload.clone(),
                outflow: self.outflow.clone(),
            },
        }
    }
}

impl<V, P> Default for Flow<V, P> {
    fn default() -> Self {
        Self::new()
    }
}
