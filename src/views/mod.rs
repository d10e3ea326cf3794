//! Text renderers for every screen element.
//!
//! Views take data (and, for forms, their local state) and return the text
//! to print. Larger views are `Display` types with a `render_*` shorthand.
//! They never talk to the backend.

pub mod card;
pub mod contact;
pub mod detail;
pub mod form;
pub mod home;
pub mod layout;
pub mod search_bar;

pub use form::{FormError, FormField, FormState};
pub use search_bar::SearchBar;

/// Format a price as whole US dollars, e.g. `$1,250,000`
pub fn format_price(price: f64) -> String {
    let whole = price.round().abs() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if price < 0.0 && whole > 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Drop a trailing `.0` from whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Clamp text to `max` characters, marking the cut with an ellipsis
pub fn clamp(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Capitalize the first letter (category labels)
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(950.0), "$950");
        assert_eq!(format_price(1_450.0), "$1,450");
        assert_eq!(format_price(2_450_000.0), "$2,450,000");
        assert_eq!(format_price(999.6), "$1,000");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(420.0), "420");
        assert_eq!(format_number(85.5), "85.5");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp("short", 10), "short");
        assert_eq!(clamp("a longer sentence here", 10), "a longer…");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("villa"), "Villa");
        assert_eq!(capitalize(""), "");
    }
}
