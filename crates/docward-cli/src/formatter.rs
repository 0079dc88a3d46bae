//! Output rendering for command results.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use docward_audit::AuditLog;
use docward_cache::CacheStats;
use docward_core::{DocumentId, Lookup, User};
use serde_json::{Map, Value, json};

use crate::theme::Theme;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Pretty,
    Json,
}

/// JSON shape of a lookup.
pub(crate) fn lookup_json(lookup: &Lookup) -> Result<Value> {
    let mut object = Map::new();
    object.insert("outcome".to_owned(), json!(lookup.label()));
    match lookup {
        Lookup::Found(doc) => {
            object.insert("document".to_owned(), serde_json::to_value(doc)?);
        },
        Lookup::NotFound => {},
        Lookup::Denied {
            required,
            clearance,
        } => {
            object.insert("required".to_owned(), json!(required.get()));
            object.insert("clearance".to_owned(), json!(clearance.get()));
        },
    }
    Ok(Value::Object(object))
}

/// JSON shape of the audit log.
pub(crate) fn audit_json(log: &AuditLog) -> Result<Value> {
    Ok(serde_json::to_value(log.entries())?)
}

/// Print a JSON document to stdout.
pub(crate) fn emit_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one `view` result.
pub(crate) fn print_lookup(user: &User, id: &DocumentId, lookup: &Lookup) {
    println!(
        "{} {} {}  {}",
        Theme::id(&user.username),
        "viewed".dimmed(),
        Theme::id(id.as_str()),
        Theme::outcome(lookup)
    );

    match lookup {
        Lookup::Found(doc) => {
            println!("    {}", Theme::kv("title", doc.title()));
            println!(
                "    {}",
                Theme::kv("security level", &doc.security_level().to_string())
            );
            println!("    {}", Theme::kv("content", doc.content()));
        },
        Lookup::Denied {
            required,
            clearance,
        } => {
            println!(
                "    {}",
                Theme::dimmed(&format!("requires level {required}, user holds {clearance}"))
            );
        },
        Lookup::NotFound => {},
    }
}

/// Print the audit log as a table.
pub(crate) fn print_audit_log(log: &AuditLog) {
    let entries = log.entries();

    println!("\n{}", Theme::header("Audit Log"));
    if entries.is_empty() {
        println!("{}", Theme::info("No audit entries"));
        return;
    }

    println!(
        "{:>14} {:>12} {:>6} {:>10}  {}",
        "TIME".dimmed(),
        "USER".dimmed(),
        "OP".dimmed(),
        "DOCUMENT".dimmed(),
        "ENTRY".dimmed()
    );
    println!("{}", Theme::separator());

    for entry in &entries {
        println!(
            "{:>14} {:>12} {:>6} {:>10}  {}",
            Theme::timestamp(&entry.timestamp.0),
            entry.username,
            entry.operation,
            entry.document_id,
            Theme::dimmed(&entry.id.to_string())
        );
    }
    println!();
}

/// Print cache counters.
pub(crate) fn print_cache_stats(stats: &CacheStats) {
    println!("{}", Theme::header("Cache"));
    println!(
        "  {}  {}  {}  {}  {}",
        Theme::kv("entries", &stats.entries.to_string()),
        Theme::kv("hits", &stats.hits.to_string()),
        Theme::kv("misses", &stats.misses.to_string()),
        Theme::kv("invalidations", &stats.invalidations.to_string()),
        Theme::kv("evictions", &stats.evictions.to_string()),
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use docward_core::{ClearanceLevel, Document, SecurityLevel};

    #[test]
    fn test_found_lookup_json() {
        let doc = Document::new("DOC-003", "Employee Handbook", "rules", SecurityLevel::new(1));
        let value = lookup_json(&Lookup::Found(doc)).unwrap();
        assert_eq!(value["outcome"], "found");
        assert_eq!(value["document"]["title"], "Employee Handbook");
    }

    #[test]
    fn test_denied_lookup_json() {
        let value = lookup_json(&Lookup::Denied {
            required: SecurityLevel::new(5),
            clearance: ClearanceLevel::new(2),
        })
        .unwrap();
        assert_eq!(value["outcome"], "denied");
        assert_eq!(value["required"], 5);
        assert_eq!(value["clearance"], 2);
        assert!(value.get("document").is_none());
    }

    #[test]
    fn test_audit_json_is_an_array() {
        let log = AuditLog::new();
        log.append(
            "manager",
            docward_audit::AuditOperation::View,
            &DocumentId::new("DOC-002"),
        );
        let value = audit_json(&log).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["operation"], "view");
    }
}
