use crate::models::Property;
use crate::views::card::Cards;
use std::fmt;

const STATS: [(&str, &str); 4] = [
    ("Properties", "1000+"),
    ("Happy Clients", "500+"),
    ("Awards Won", "25+"),
    ("Years Experience", "15+"),
];

pub fn render_hero() -> String {
    [
        "Find Your Dream Home",
        "Discover the perfect property that matches your lifestyle",
        "[Search Properties]  (type `properties`)",
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

pub fn render_stats() -> String {
    let cells: Vec<String> = STATS
        .iter()
        .map(|(label, value)| format!("{} {}", value, label))
        .collect();
    format!("{}\n", cells.join("  |  "))
}

/// Featured section: spinner, cards, or an empty notice
pub struct Featured<'a> {
    pub loading: bool,
    pub properties: &'a [Property],
}

impl fmt::Display for Featured<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Featured Properties")?;
        writeln!(f, "Handpicked properties that match your dreams")?;
        writeln!(f)?;

        if self.loading {
            return writeln!(f, "Loading...");
        }
        if self.properties.is_empty() {
            return writeln!(f, "No featured properties available at the moment.");
        }
        write!(f, "{}", Cards(self.properties))
    }
}

pub fn render_featured(loading: bool, featured: &[Property]) -> String {
    Featured {
        loading,
        properties: featured,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_featured_notice() {
        assert!(render_featured(false, &[]).contains("No featured properties"));
        assert!(render_featured(true, &[]).contains("Loading..."));
    }

    #[tokio::test]
    async fn test_featured_cards_match_grid() {
        use crate::gateway::{ListOptions, MemoryStore, PropertyStore};
        use crate::views::card::render_cards;

        let featured = MemoryStore::demo()
            .list_available_properties(&ListOptions::featured(6))
            .await
            .unwrap();
        let text = render_featured(false, &featured);
        assert!(text.ends_with(&render_cards(&featured)));
        assert!(text.contains("[3] "));
    }

    #[test]
    fn test_hero_lines() {
        let hero = render_hero();
        assert!(hero.starts_with("Find Your Dream Home\n"));
        assert_eq!(hero.lines().count(), 3);
    }

    #[test]
    fn test_stats_strip() {
        let strip = render_stats();
        assert!(strip.contains("1000+ Properties"));
        assert!(strip.contains("15+ Years Experience"));
    }
}
