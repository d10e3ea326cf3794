use crate::filter::{FilterField, SearchFilters, ANY};
use std::fmt;

/// Search bar with a collapsible filter panel
///
/// Edits accumulate in local state; nothing is applied until
/// [`SearchBar::submit`] or [`SearchBar::reset`] hands filters back to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    filters: SearchFilters,
    show_filters: bool,
}

impl SearchBar {
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn filters_visible(&self) -> bool {
        self.show_filters
    }

    pub fn toggle_filters(&mut self) -> bool {
        self.show_filters = !self.show_filters;
        self.show_filters
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.set(field, value);
    }

    /// Emit the current filters
    pub fn submit(&self) -> SearchFilters {
        self.filters.clone()
    }

    /// Clear every field and emit the defaults
    pub fn reset(&mut self) -> SearchFilters {
        self.filters = SearchFilters::default();
        self.filters.clone()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters = &self.filters;
        let query = if filters.search_query.is_empty() {
            "Search by title, location, or description..."
        } else {
            &filters.search_query
        };
        let arrow = if self.show_filters { "▾" } else { "▸" };
        writeln!(f, "🔍 {}   [Search] [Filters {}]", query, arrow)?;

        if self.show_filters {
            writeln!(
                f,
                "   Property Type: {}   Listing Type: {}   Bedrooms: {}",
                choice(&filters.property_type, "All Types"),
                choice(&filters.listing_type, "All"),
                bedrooms(&filters.bedrooms)
            )?;
            writeln!(
                f,
                "   Min Price: {}   Max Price: {}   City: {}",
                text(&filters.min_price, "Min"),
                text(&filters.max_price, "Max"),
                text(&filters.city, "City name")
            )?;
            writeln!(f, "   [Reset Filters]")?;
        }

        Ok(())
    }
}

fn choice<'a>(value: &'a str, any_label: &'a str) -> &'a str {
    if value.is_empty() || value == ANY {
        any_label
    } else {
        value
    }
}

fn bedrooms(value: &str) -> String {
    if value.is_empty() || value == ANY {
        "Any".to_string()
    } else {
        format!("{}+", value)
    }
}

fn text<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
