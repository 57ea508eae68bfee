use std::fmt::Debug;
use weir_core::Outflow;

/// Step that logs the outflow keys at info level.
///
/// ```rust,ignore
/// flow.chain(log_outflow("after lookup"));
/// ```
pub fn log_outflow<V: Debug>(message: impl Into<String>) -> impl FnOnce(&mut Outflow<V>) {
    let message = message.into();
    move |outflow: &mut Outflow<V>| {
        let keys: Vec<&str> = outflow.keys().collect();
        tracing::info!(?keys, "{}: {:?}", message, outflow);
    }
}

/// Failure handler that logs the dam payload at warn level.
pub fn log_payload<V, P: Debug>(message: impl Into<String>) -> impl FnOnce(Option<&P>, &Outflow<V>) {
    let message = message.into();
    move |payload: Option<&P>, outflow: &Outflow<V>| {
        tracing::warn!(outflow_len = outflow.len(), "{}: {:?}", message, payload);
    }
}
