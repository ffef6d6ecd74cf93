//! Formatting of the displayed key set into the primary label text

/// Shown when no keys are displayed.
pub const IDLE_PLACEHOLDER: &str = "Waiting for keys...";

/// Labels rendered first and never collapsed to a single character.
const MODIFIER_LABELS: [&str; 3] = ["Ctrl", "Alt", "Shift"];

pub fn is_modifier(label: &str) -> bool {
    MODIFIER_LABELS.contains(&label)
}

/// Format the displayed labels (in press order) into the overlay text.
///
/// Plain alphanumeric typing collapses to the most recently pressed key;
/// anything involving a modifier or a non-alphanumeric key renders the
/// whole combination joined with " + ", modifiers first, lexical within
/// each group. Returns `None` for an empty set so the caller can show
/// [`IDLE_PLACEHOLDER`] without logging it to history.
pub fn format_keys(displayed: &[String]) -> Option<String> {
    if displayed.is_empty() {
        return None;
    }

    let others: Vec<&str> = displayed
        .iter()
        .map(String::as_str)
        .filter(|l| !is_modifier(l))
        .collect();

    let only_alphanumeric = others.len() == displayed.len()
        && others.iter().all(|l| l.chars().all(char::is_alphanumeric));

    if only_alphanumeric {
        // Press order is tracked explicitly, so "most recent" is the tail
        return others.last().map(|l| l.to_string());
    }

    let mut keys: Vec<&str> = displayed.iter().map(String::as_str).collect();
    keys.sort_by_key(|l| (!is_modifier(l), *l));
    Some(keys.join(" + "))
}
