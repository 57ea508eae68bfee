//! Weir signup demo
//!
//! Runs one signup request through a flow and prints the HTTP-style response
//! a web layer would send back.
//!
//! ```text
//! weir-signup --email ada@example.com --password "correct horse"
//! weir-signup --email taken@example.com --password "correct horse"
//! weir-signup --email bot@spam.test --password "correct horse"
//! ```

mod response;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};
use std::path::PathBuf;
use weir::prelude::*;

const REGISTERED: &[&str] = &["taken@example.com", "grace@example.com"];

/// Signup flow demo
#[derive(Parser)]
#[command(name = "weir-signup")]
#[command(version, about = "Handle a signup request with a Weir flow")]
struct Cli {
    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Flow config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit JSON log lines instead of plain text
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        weir::observe::init_json_tracing(None)?;
    } else {
        weir::observe::init_stdout_tracing()?;
    }

    let config = match &cli.config {
        Some(path) => FlowConfig::from_path(path)?,
        None => FlowConfig::new("signup"),
    };

    let params: Outflow = [("email", json!(cli.email)), ("password", json!(cli.password))]
        .into_iter()
        .collect();

    let flow = signup(config, params)?;
    let response = response::render(flow.into_outcome());
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn signup(config: FlowConfig, params: Outflow) -> Result<Flow, FlowError> {
    let mut flow: Flow = Flow::with_config(config).with_outflow(params);

    flow.when_truthy(validate)
        .dam(|out| json!({"status": 422, "errors": validate(out).into_payload()}))
        .chain_wf(ImportSpec::new().same("account"), lookup_account)
        .when_falsy(present("account"))
        .dam(|_| json!({"status": 409, "errors": ["email is already registered"]}))
        .try_chain_to("user", create_user)?
        .on_dam(log_payload("Signup rejected"));

    Ok(flow)
}

fn validate(params: &Outflow) -> Validation {
    let email = params.get_as::<String>("email").unwrap_or_default();
    let password = params.get_as::<String>("password").unwrap_or_default();

    Validation::new()
        .require(params, "email", "email is required")
        .require(params, "password", "password is required")
        .check(email.is_empty() || email.contains('@'), "email is malformed")
        .check(password.is_empty() || password.len() >= 8, "password is too short")
}

/// Nested flow: normalise the address and look for an existing account.
fn lookup_account(params: &Outflow) -> Flow {
    let email = params
        .get_as::<String>("email")
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let mut lookup: Flow = Flow::with_config(FlowConfig::new("lookup_account"));
    lookup
        .chain_to("normalized", |_| json!(email))
        .when_falsy(|_| email.ends_with("@spam.test"))
        .dam(|_| json!({"status": 403, "errors": ["email domain is not accepted"]}))
        .chain(|out| {
            if REGISTERED.contains(&email.as_str()) {
                out.set("account", json!({ "email": email }));
            }
        });
    lookup
}

fn create_user(params: &Outflow) -> Result<Value> {
    let email = params
        .get_as::<String>("email")
        .context("email missing after validation")?;
    tracing::info!(%email, "Creating user");
    Ok(json!({ "email": email.trim().to_lowercase(), "active": true }))
}
