//! Pretty output formatting.

use std::collections::BTreeMap;

use crate::commands::Report;

/// Past tense and infinitive of a write action.
type Action = (&'static str, &'static str);

const STORE: Action = ("Stored", "store");
const DELETE: Action = ("Deleted", "delete");

/// Format a command report for display.
pub fn format_report(report: &Report) -> String {
    match report {
        Report::Has { key, exists } => {
            let state = if *exists { "exists" } else { "does not exist" };
            format!("{} {}", key, state)
        }
        Report::Get { key, value } => format_value(key, value.as_deref()),
        Report::Set { key, stored } => format_outcome(STORE, key, *stored),
        Report::Delete { key, deleted } => format_outcome(DELETE, key, *deleted),
        Report::GetMany { values } => format_values(values),
        Report::SetMany { stored } => format_outcomes(STORE, stored),
        Report::DeleteMany { keys, deleted } => {
            format_outcome(DELETE, &keys.join(", "), *deleted)
        }
        Report::Clear { cleared } => {
            if *cleared {
                "Cleared namespace".to_string()
            } else {
                "Failed to clear namespace".to_string()
            }
        }
    }
}

/// Format a single key and its value.
pub fn format_value(key: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{} = {}", key, value),
        None => format!("{} (not found)", key),
    }
}

/// Format several keys and their values.
pub fn format_values(values: &BTreeMap<String, Option<String>>) -> String {
    if values.is_empty() {
        return "No keys requested.".to_string();
    }
    let mut output = format!("VALUES ({})\n", values.len());
    output.push_str(&"-".repeat(40));
    for (key, value) in values {
        output.push_str(&format!("\n{}", format_value(key, value.as_deref())));
    }
    output
}

fn format_outcome((done, verb): Action, key: &str, ok: bool) -> String {
    if ok {
        format!("{} {}", done, key)
    } else {
        format!("Failed to {} {}", verb, key)
    }
}

fn format_outcomes(action: Action, outcomes: &BTreeMap<String, bool>) -> String {
    outcomes
        .iter()
        .map(|(key, ok)| format_outcome(action, key, *ok))
        .collect::<Vec<_>>()
        .join("\n")
}
