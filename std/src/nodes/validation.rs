use serde::{Deserialize, Serialize};
use serde_json::Value;
use weir_core::{Outflow, Truth, Truthy};

/// Accumulates validation messages; valid when none were collected.
///
/// A `Validation` is itself [`Truthy`], so the same check can feed a guard
/// and, through [`into_payload`](Validation::into_payload), the `dam` that
/// follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validation {
    messages: Vec<String>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless `ok` holds
    pub fn check(mut self, ok: bool, message: impl Into<String>) -> Self {
        if !ok {
            self.messages.push(message.into());
        }
        self
    }

    /// Record `message` when `key` is missing or null
    pub fn require(self, outflow: &Outflow, key: &str, message: impl Into<String>) -> Self {
        let ok = !matches!(outflow.get(key), None | Some(Value::Null));
        self.check(ok, message)
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// JSON array of the collected messages
    pub fn into_payload(self) -> Value {
        Value::from(self.messages)
    }
}

impl Truthy for Validation {
    fn truth(&self) -> Truth {
        Truth::from(self.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weir_core::Flow;

    fn validate(outflow: &Outflow) -> Validation {
        Validation::new()
            .require(outflow, "email", "email is required")
            .require(outflow, "password", "password is required")
            .check(
                outflow.get_as::<String>("password").is_none_or(|p| p.len() >= 8),
                "password is too short",
            )
    }

    #[test]
    fn test_collects_messages_in_order() {
        let outflow: Outflow = [("password", json!("short"))].into_iter().collect();
        let validation = validate(&outflow);

        assert!(!validation.is_valid());
        assert_eq!(
            validation.messages(),
            &["email is required".to_string(), "password is too short".to_string()]
        );
    }

    #[test]
    fn test_guard_and_dam_share_the_check() {
        let mut flow: Flow = Flow::new();
        flow.chain_to("email", |_| json!("ada@example.com"))
            .when_truthy(validate)
            .dam(|out| validate(out).into_payload());

        assert_eq!(flow.payload(), Some(&json!(["password is required"])));
    }

    #[test]
    fn test_valid_input_passes() {
        let outflow: Outflow = [
            ("email", json!("ada@example.com")),
            ("password", json!("correct horse")),
        ]
        .into_iter()
        .collect();

        let mut flow: Flow = Flow::seeded(outflow);
        flow.when_truthy(validate).dam(|out| validate(out).into_payload());

        assert!(flow.is_open());
    }
}
