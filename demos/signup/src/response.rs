use serde::Serialize;
use serde_json::{Value, json};
use weir::FlowOutcome;

/// HTTP-style response rendered from a finished flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

/// Map a terminal flow outcome onto a response.
///
/// Dam payloads are expected to look like `{"status": 4xx, "errors": [...]}`;
/// anything else becomes a plain 400 carrying the payload as its errors.
pub fn render(outcome: FlowOutcome) -> Response {
    match outcome {
        FlowOutcome::Open { outflow } => Response {
            status: 201,
            body: json!({ "user": outflow.get("user") }),
        },
        FlowOutcome::Blocked { payload, .. } => rejected(payload.unwrap_or(Value::Null)),
    }
}

fn rejected(payload: Value) -> Response {
    let status = payload
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
        .unwrap_or(400);
    let errors = match payload.get("errors") {
        Some(errors) => errors.clone(),
        None if payload.is_null() => json!(["request rejected"]),
        None => json!([payload]),
    };
    Response {
        status,
        body: json!({ "errors": errors }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weir::Outflow;

    #[test]
    fn test_open_flow_is_created() {
        let outflow: Outflow = [("user", json!({"id": 1}))].into_iter().collect();
        let response = render(FlowOutcome::Open { outflow });
        assert_eq!(response.status, 201);
        assert_eq!(response.body, json!({"user": {"id": 1}}));
    }

    #[test]
    fn test_structured_payload() {
        let response = render(FlowOutcome::Blocked {
            payload: Some(json!({"status": 409, "errors": ["taken"]})),
            outflow: Outflow::new(),
        });
        assert_eq!(response.status, 409);
        assert_eq!(response.body, json!({"errors": ["taken"]}));
    }

    #[test]
    fn test_bare_payloads() {
        let response = render(FlowOutcome::Blocked {
            payload: Some(json!("nope")),
            outflow: Outflow::new(),
        });
        assert_eq!(response, Response { status: 400, body: json!({"errors": ["nope"]}) });

        let response = render(FlowOutcome::Blocked {
            payload: None,
            outflow: Outflow::new(),
        });
        assert_eq!(response.body, json!({"errors": ["request rejected"]}));
    }
}
