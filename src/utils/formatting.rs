//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Two-decimal money rendering for tables and summaries.
pub fn format_money(v: f64) -> String {
    format!("{:.2}", v)
}

/// Capitalize the first letter of each whitespace-separated word,
/// lowercasing the rest ("onsite" -> "Onsite", "half day" -> "Half Day").
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
