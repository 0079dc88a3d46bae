//! The walkthrough scenario: one chain, four views, one audit log.

use std::time::{Duration, Instant};

use anyhow::Result;
use docward_config::Config;
use docward_core::{DocumentId, DocumentService, Lookup, User};
use serde_json::json;
use tracing::info;

use crate::config_bridge;
use crate::formatter::{self, OutputFormat};
use crate::theme::Theme;

/// `(user, document)` for each step, in call order.
const STEPS: &[(&str, &str)] = &[
    ("manager", "DOC-002"),
    ("employee", "DOC-002"),
    ("manager", "DOC-002"),
    ("employee", "DOC-003"),
];

struct StepResult {
    user: User,
    id: DocumentId,
    lookup: Lookup,
    elapsed: Duration,
}

/// Run the scenario against the configured chain and report the results.
pub(crate) fn run_demo(cfg: &Config, format: OutputFormat) -> Result<()> {
    let chain = config_bridge::build_chain(cfg)?;

    let mut results = Vec::with_capacity(STEPS.len());
    for (username, raw_id) in STEPS {
        let user = config_bridge::resolve_user(cfg, username)?;
        let id = DocumentId::new(*raw_id);

        let started = Instant::now();
        let lookup = chain.view(&id, &user);
        let elapsed = started.elapsed();

        info!(
            user = %user.username,
            document_id = %id,
            outcome = lookup.label(),
            elapsed_ms = elapsed.as_millis(),
            "demo step"
        );
        results.push(StepResult {
            user,
            id,
            lookup,
            elapsed,
        });
    }

    match format {
        OutputFormat::Json => {
            let steps = results
                .iter()
                .map(|step| {
                    Ok(json!({
                        "user": step.user.username,
                        "document_id": step.id,
                        "lookup": formatter::lookup_json(&step.lookup)?,
                        "elapsed_ms": step.elapsed.as_millis(),
                    }))
                })
                .collect::<Result<Vec<_>>>()?;
            formatter::emit_json(&json!({
                "layers": chain.kinds(),
                "steps": steps,
                "audit": formatter::audit_json(chain.audit_log())?,
                "cache": chain.cache().stats(),
            }))
        },
        OutputFormat::Pretty => {
            let layers: Vec<String> = chain.kinds().iter().map(ToString::to_string).collect();
            println!("\n{}", Theme::header("docward demo"));
            println!("{}", Theme::dimmed(&format!("chain: {} -> core", layers.join(" -> "))));
            println!("{}", Theme::separator());

            for (index, step) in results.iter().enumerate() {
                println!(
                    "{} {}",
                    Theme::dimmed(&format!("{}.", index.saturating_add(1))),
                    Theme::dimmed(&format!("{} ms", step.elapsed.as_millis()))
                );
                formatter::print_lookup(&step.user, &step.id, &step.lookup);
            }

            formatter::print_audit_log(chain.audit_log());
            formatter::print_cache_stats(&chain.cache().stats());
            Ok(())
        },
    }
}
