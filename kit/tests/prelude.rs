use serde_json::json;
use weir::prelude::*;

#[test]
fn test_prelude_builds_a_flow() {
    let mut flow: Flow = Flow::new();
    flow.chain_to("email", |_| json!("ada@example.com"))
        .when_truthy(all_present(["email"]))
        .chain_wf(ImportSpec::from(["greeting"]), |out| {
            let email = out.get_as::<String>("email").unwrap_or_default();
            let mut nested: Flow = Flow::new();
            nested.chain_to("greeting", |_| json!(format!("hello {email}")));
            nested
        });

    match flow.into_outcome() {
        FlowOutcome::Open { outflow } => {
            assert_eq!(outflow.get("greeting"), Some(&json!("hello ada@example.com")));
        }
        FlowOutcome::Blocked { .. } => panic!("flow should stay open"),
    }
}
