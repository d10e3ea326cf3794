use crate::navigation::Page;
use chrono::{Datelike, Utc};
use std::fmt;

pub const BRAND: &str = "Elite Estates";
pub const PHONE: &str = "+1 (555) 123-4567";
pub const EMAIL: &str = "info@eliteestates.com";

/// Top navigation bar, highlighting the active page
pub fn render_navbar(current: Page) -> String {
    let items = [
        (Page::Home, "Home"),
        (Page::Properties, "Properties"),
        (Page::Contact, "Contact"),
    ];

    let links: Vec<String> = items
        .iter()
        .map(|(page, label)| {
            if *page == current {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();

    format!("🏠 {}    {}\n{}\n", BRAND, links.join("  "), "=".repeat(60))
}

/// Site footer with contact details and the current year
pub struct Footer;

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(
            f,
            "{} · Your trusted partner in finding the perfect property.",
            BRAND
        )?;
        writeln!(f, "{} · {} · 123 Real Estate Ave, NY 10001", PHONE, EMAIL)?;
        writeln!(f, "© {} {}. All rights reserved.", Utc::now().year(), BRAND)
    }
}

pub fn render_footer() -> String {
    Footer.to_string()
}
