//! Single `view` and `update` operations against a fresh chain.

use anyhow::Result;
use docward_chain::ReferenceChain;
use docward_config::Config;
use docward_core::{DocumentId, DocumentService};
use serde_json::json;

use crate::config_bridge;
use crate::formatter::{self, OutputFormat};
use crate::theme::Theme;

/// View one document as a configured user.
pub(crate) fn view_document(
    cfg: &Config,
    raw_id: &str,
    username: &str,
    format: OutputFormat,
) -> Result<()> {
    let id = DocumentId::parse(raw_id)?;
    let user = config_bridge::resolve_user(cfg, username)?;
    let chain = config_bridge::build_chain(cfg)?;

    let lookup = chain.view(&id, &user);

    match format {
        OutputFormat::Json => formatter::emit_json(&json!({
            "user": user,
            "document_id": id,
            "lookup": formatter::lookup_json(&lookup)?,
            "audit": formatter::audit_json(chain.audit_log())?,
        })),
        OutputFormat::Pretty => {
            formatter::print_lookup(&user, &id, &lookup);
            formatter::print_audit_log(chain.audit_log());
            Ok(())
        },
    }
}

/// Replace one document's content as a configured user.
///
/// `update` reports nothing, so the result shown is a follow-up `view`
/// through the same chain, which is audited like any other call.
pub(crate) fn update_document(
    cfg: &Config,
    raw_id: &str,
    content: &str,
    username: &str,
    format: OutputFormat,
) -> Result<()> {
    let id = DocumentId::parse(raw_id)?;
    let user = config_bridge::resolve_user(cfg, username)?;
    let chain = config_bridge::build_chain(cfg)?;

    chain.update(&id, content, &user);
    let after = chain.view(&id, &user);
    let applied = after.document().is_some_and(|doc| doc.content() == content);

    match format {
        OutputFormat::Json => formatter::emit_json(&json!({
            "user": user,
            "document_id": id,
            "applied": applied,
            "lookup": formatter::lookup_json(&after)?,
            "audit": formatter::audit_json(chain.audit_log())?,
        })),
        OutputFormat::Pretty => {
            print_update_outcome(&chain, &id, applied);
            formatter::print_lookup(&user, &id, &after);
            formatter::print_audit_log(chain.audit_log());
            Ok(())
        },
    }
}

fn print_update_outcome(chain: &ReferenceChain, id: &DocumentId, applied: bool) {
    if applied {
        println!("{}", Theme::success(&format!("Updated {id}")));
    } else {
        println!("{}", Theme::error(&format!("Update of {id} was not applied")));
    }
    println!(
        "{}",
        Theme::dimmed(&format!(
            "chain: {}",
            chain
                .kinds()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> ")
        ))
    );
}
