//! CLI theme and styling.

use colored::Colorize;
use docward_core::Lookup;

/// CLI theme configuration.
pub(crate) struct Theme;

impl Theme {
    /// Format a header.
    pub(crate) fn header(text: &str) -> String {
        format!("{}", text.bold().cyan())
    }

    /// Format a success message.
    pub(crate) fn success(text: &str) -> String {
        format!("{} {}", "✓".green(), text)
    }

    /// Format an error message.
    pub(crate) fn error(text: &str) -> String {
        format!("{} {}", "✗".red(), text.red())
    }

    /// Format an info message.
    pub(crate) fn info(text: &str) -> String {
        format!("{} {}", "i".blue(), text)
    }

    /// Format a dimmed message.
    pub(crate) fn dimmed(text: &str) -> String {
        format!("{}", text.dimmed())
    }

    /// Format a separator line.
    pub(crate) fn separator() -> String {
        "━".repeat(50).dimmed().to_string()
    }

    /// Format a key-value pair.
    pub(crate) fn kv(key: &str, value: &str) -> String {
        format!("{}: {}", key.bold(), value)
    }

    /// Format a lookup outcome label.
    pub(crate) fn outcome(lookup: &Lookup) -> String {
        match lookup {
            Lookup::Found(_) => "GRANTED".green().bold().to_string(),
            Lookup::NotFound => "NOT FOUND".yellow().to_string(),
            Lookup::Denied { .. } => "DENIED".red().bold().to_string(),
        }
    }

    /// Format a document or user identifier.
    pub(crate) fn id(text: &str) -> String {
        format!("{}", text.cyan())
    }

    /// Format a timestamp.
    pub(crate) fn timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
        dt.format("%H:%M:%S%.3f").to_string().dimmed().to_string()
    }
}
