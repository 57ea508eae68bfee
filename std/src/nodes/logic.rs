//! Guard predicates over JSON outflows.
//!
//! Each builder returns a reusable predicate for `when_truthy` /
//! `when_falsy`:
//!
//! ```rust
//! use weir_core::Flow;
//! use weir_std::prelude::*;
//!
//! let mut flow: Flow = Flow::new();
//! flow.when_truthy(present("email"));
//! assert!(flow.is_blocked());
//! ```

use serde_json::Value;
use weir_core::{Outflow, Truth, Truthy};

/// The key holds a non-null value. Missing and `null` are `Truth::Absent`.
pub fn present(key: impl Into<String>) -> impl Fn(&Outflow) -> Truth + Clone {
    let key = key.into();
    move |outflow: &Outflow| match outflow.get(&key) {
        None | Some(Value::Null) => Truth::Absent,
        Some(_) => Truth::True,
    }
}

/// The key is missing or `null`; the inverse of [`present`].
pub fn absent(key: impl Into<String>) -> impl Fn(&Outflow) -> Truth + Clone {
    let key = key.into();
    move |outflow: &Outflow| match outflow.get(&key) {
        None | Some(Value::Null) => Truth::True,
        Some(_) => Truth::False,
    }
}

/// The key's value is truthy under the flow convention.
pub fn truthy(key: impl Into<String>) -> impl Fn(&Outflow) -> Truth + Clone {
    let key = key.into();
    move |outflow: &Outflow| outflow.truth(&key)
}

/// Every key holds a non-null value.
pub fn all_present<I, K>(keys: I) -> impl Fn(&Outflow) -> Truth + Clone
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    move |outflow: &Outflow| {
        let missing = keys
            .iter()
            .any(|key| matches!(outflow.get(key), None | Some(Value::Null)));
        if missing { Truth::Absent } else { Truth::True }
    }
}

/// The key holds exactly `expected`.
pub fn equals(key: impl Into<String>, expected: Value) -> impl Fn(&Outflow) -> Truth + Clone {
    let key = key.into();
    move |outflow: &Outflow| match outflow.get(&key) {
        None => Truth::Absent,
        Some(value) => Truth::from(*value == expected),
    }
}

/// The key holds a string, array or object with content.
///
/// Unlike the flow convention, empty containers fail here.
pub fn non_empty(key: impl Into<String>) -> impl Fn(&Outflow) -> Truth + Clone {
    let key = key.into();
    move |outflow: &Outflow| match outflow.get(&key) {
        None | Some(Value::Null) => Truth::Absent,
        Some(Value::String(s)) => Truth::from(!s.trim().is_empty()),
        Some(Value::Array(items)) => Truth::from(!items.is_empty()),
        Some(Value::Object(fields)) => Truth::from(!fields.is_empty()),
        Some(other) => other.truth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weir_core::Flow;

    fn outflow() -> Outflow {
        [
            ("email", json!("ada@example.com")),
            ("blank", json!("   ")),
            ("tags", json!([])),
            ("role", json!("admin")),
            ("deleted", json!(null)),
            ("active", json!(false)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_present() {
        let out = outflow();
        assert_eq!(present("email")(&out), Truth::True);
        assert_eq!(present("active")(&out), Truth::True);
        assert_eq!(present("deleted")(&out), Truth::Absent);
        assert_eq!(present("missing")(&out), Truth::Absent);
    }

    #[test]
    fn test_absent() {
        let out = outflow();
        assert_eq!(absent("missing")(&out), Truth::True);
        assert_eq!(absent("deleted")(&out), Truth::True);
        assert_eq!(absent("active")(&out), Truth::False);
        assert_eq!(absent("blank")(&out), Truth::False);

        let mut flow: Flow = Flow::seeded(out);
        flow.when_truthy(absent("deleted"))
            .when_falsy(absent("email"))
            .when_truthy(absent("role"))
            .dam(|_| json!("role already assigned"));
        assert_eq!(flow.payload(), Some(&json!("role already assigned")));
    }

    #[test]
    fn test_truthy_follows_flow_convention() {
        let out = outflow();
        assert_eq!(truthy("tags")(&out), Truth::True);
        assert_eq!(truthy("active")(&out), Truth::False);
    }

    #[test]
    fn test_all_present() {
        let out = outflow();
        assert_eq!(all_present(["email", "role"])(&out), Truth::True);
        assert_eq!(all_present(["email", "deleted"])(&out), Truth::Absent);
        assert_eq!(all_present(Vec::<String>::new())(&out), Truth::True);
    }

    #[test]
    fn test_equals() {
        let out = outflow();
        assert_eq!(equals("role", json!("admin"))(&out), Truth::True);
        assert_eq!(equals("role", json!("guest"))(&out), Truth::False);
        assert_eq!(equals("missing", json!("admin"))(&out), Truth::Absent);
    }

    #[test]
    fn test_non_empty() {
        let out = outflow();
        assert_eq!(non_empty("email")(&out), Truth::True);
        assert_eq!(non_empty("blank")(&out), Truth::False);
        assert_eq!(non_empty("tags")(&out), Truth::False);
        assert_eq!(non_empty("active")(&out), Truth::False);
        assert_eq!(non_empty("missing")(&out), Truth::Absent);
    }

    #[test]
    fn test_predicates_drive_guards() {
        let is_admin = equals("role", json!("admin"));
        let mut flow: Flow = Flow::seeded(outflow());

        flow.when_truthy(is_admin.clone())
            .when_falsy(present("deleted"))
            .when_truthy(is_admin)
            .when_truthy(non_empty("tags"));

        assert!(flow.is_blocked());
        assert_eq!(flow.timeline().blocked_at().map(|r| r.index), Some(3));
    }
}
