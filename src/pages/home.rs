use crate::gateway::{ListOptions, PropertyStore};
use crate::models::Property;
use crate::views::home::{render_featured, render_hero, render_stats};
use tracing::error;

/// Number of featured listings on the home page
pub const FEATURED_LIMIT: usize = 6;

/// Landing page with featured listings
#[derive(Debug, Clone)]
pub struct HomePage {
    pub featured: Vec<Property>,
    pub loading: bool,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            featured: Vec::new(),
            loading: true,
        }
    }
}

impl HomePage {
    /// Fetch featured listings; a failed fetch leaves the section empty
    pub async fn mount(store: &dyn PropertyStore) -> Self {
        let mut page = Self::default();

        match store
            .list_available_properties(&ListOptions::featured(FEATURED_LIMIT))
            .await
        {
            Ok(featured) => page.featured = featured,
            Err(e) => error!("Error fetching featured properties: {}", e),
        }

        page.loading = false;
        page
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n{}",
            render_hero(),
            render_stats(),
            render_featured(self.loading, &self.featured)
        )
    }
}
