use regex::Regex;
use std::sync::OnceLock;

fn non_slug_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex"))
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex"))
}

/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-`, and strips leading/trailing dashes.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let replaced = non_slug_chars().replace_all(&lowered, "-");
    replaced.trim_matches('-').to_string()
}

/// `#rrggbb` validation for palette colors and category accents.
pub fn is_hex_color(value: &str) -> bool {
    hex_color_re().is_match(value)
}

/// Truncates a message for notification previews; appends an ellipsis when
/// anything was cut. Cuts on a char boundary.
pub fn preview(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_string();
    }
    let cut: String = message.chars().take(max_chars).collect();
    format!("{cut}...")
}
