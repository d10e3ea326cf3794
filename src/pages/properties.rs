use crate::filter::{filter_properties, FilterField, SearchFilters};
use crate::gateway::{ListOptions, PropertyStore};
use crate::models::Property;
use crate::views::card::Cards;
use crate::views::SearchBar;
use std::fmt;
use tracing::{debug, error};

/// Listings page: every available property, narrowed by the search bar
#[derive(Debug, Clone)]
pub struct PropertiesPage {
    /// Everything fetched on mount
    pub properties: Vec<Property>,
    /// What's currently shown
    pub filtered: Vec<Property>,
    pub loading: bool,
    pub search: SearchBar,
}

impl Default for PropertiesPage {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            filtered: Vec::new(),
            loading: true,
            search: SearchBar::default(),
        }
    }
}

impl PropertiesPage {
    /// Fetch all available listings, newest first
    pub async fn mount(store: &dyn PropertyStore) -> Self {
        let mut page = Self::default();

        match store
            .list_available_properties(&ListOptions::newest_first())
            .await
        {
            Ok(properties) => {
                page.filtered = properties.clone();
                page.properties = properties;
            }
            Err(e) => error!("Error fetching properties: {}", e),
        }

        page.loading = false;
        page
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.search.set(field, value);
    }

    pub fn toggle_filters(&mut self) -> bool {
        self.search.toggle_filters()
    }

    /// Apply the search bar's current values
    pub fn search(&mut self) -> usize {
        let filters = self.search.submit();
        self.apply(&filters)
    }

    /// Clear the search bar and show everything again
    pub fn reset(&mut self) -> usize {
        let filters = self.search.reset();
        self.apply(&filters)
    }

    fn apply(&mut self, filters: &SearchFilters) -> usize {
        self.filtered = filter_properties(&self.properties, filters);
        debug!(
            "Filtered {} properties down to {}",
            self.properties.len(),
            self.filtered.len()
        );
        self.filtered.len()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PropertiesPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Browse Properties")?;
        writeln!(f, "Find your perfect home from our extensive collection")?;
        writeln!(f)?;
        write!(f, "{}", self.search)?;
        writeln!(f)?;
        writeln!(f, "Showing {} properties", self.filtered.len())?;
        writeln!(f)?;

        if self.loading {
            writeln!(f, "Loading...")
        } else if self.filtered.is_empty() {
            writeln!(f, "No properties found")?;
            writeln!(
                f,
                "Try adjusting your search filters to find more properties"
            )
        } else {
            write!(f, "{}", Cards(&self.filtered))
        }
    }
}
