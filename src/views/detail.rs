use crate::models::{PropertyImage, PropertyWithAgent};
use crate::views::form::{FormState, FormView};
use crate::views::{capitalize, format_number, format_price};
use chrono::{DateTime, Utc};
use std::fmt;

pub const INQUIRY_CONFIRMATION: &str = "Your inquiry has been sent successfully!";

pub fn render_loading() -> String {
    "Loading...\n".to_string()
}

/// Shown when the requested id doesn't exist
pub fn render_not_found() -> String {
    "Property not found\n[Back to Properties]  (type `back`)\n".to_string()
}

/// Full listing: header, gallery, specs, features, agent and the inquiry form
pub struct DetailView<'a> {
    pub listing: &'a PropertyWithAgent,
    pub images: &'a [PropertyImage],
    pub form: &'a FormState,
    pub now: DateTime<Utc>,
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = &self.listing.property;

        writeln!(f, "← Back to Properties  (type `back`)")?;
        writeln!(f)?;

        let mut badges = vec![property.listing_type.label()];
        if property.featured {
            badges.push("Featured");
        }
        writeln!(f, "{}", badges.join(" · "))?;
        writeln!(f, "{}    {}", property.title, format_price(property.price))?;
        writeln!(
            f,
            "📍 {}, {}, {}",
            property.address, property.city, property.country
        )?;
        writeln!(f, "🖼  {}", property.image_url)?;
        if !self.images.is_empty() {
            writeln!(f, "   Gallery: {} more photos", self.images.len())?;
            for image in self.images {
                writeln!(f, "   - {}", image.image_url)?;
            }
        }
        writeln!(f)?;

        writeln!(
            f,
            "Bedrooms: {}   Bathrooms: {}   Area: {} m²   Type: {}",
            property.bedrooms,
            property.bathrooms,
            format_number(property.area),
            capitalize(property.property_type.as_str())
        )?;
        writeln!(f)?;

        writeln!(f, "Description")?;
        writeln!(f, "{}", property.description)?;

        if !property.features.is_empty() {
            writeln!(f)?;
            writeln!(f, "Features & Amenities")?;
            for feature in &property.features {
                writeln!(f, "  ✓ {}", feature)?;
            }
        }

        if let Some(agent) = &self.listing.agent {
            writeln!(f)?;
            writeln!(f, "Contact Agent")?;
            writeln!(f, "  {} · Real Estate Agent", agent.name)?;
            writeln!(f, "  ✉ {}", agent.email)?;
            writeln!(f, "  ☎ {}", agent.phone)?;
        }

        writeln!(f)?;
        writeln!(f, "Send Inquiry")?;
        write!(
            f,
            "{}",
            FormView {
                form: self.form,
                now: self.now,
                confirmation: INQUIRY_CONFIRMATION,
            }
        )
    }
}

pub fn render_detail(
    listing: &PropertyWithAgent,
    images: &[PropertyImage],
    form: &FormState,
    now: DateTime<Utc>,
) -> String {
    DetailView {
        listing,
        images,
        form,
        now,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{MemoryStore, PropertyStore};

    #[tokio::test]
    async fn test_detail_with_agent_and_gallery() {
        let store = MemoryStore::demo();
        let villa = store.get_property_with_agent("demo-1").await.unwrap().unwrap();
        let images = store.list_property_images("demo-1").await.unwrap();

        let text = render_detail(&villa, &images, &FormState::default(), Utc::now());
        assert!(text.contains("Oceanfront Villa    $2,450,000"));
        assert!(text.contains("📍 18 Shoreline Dr, Malibu, USA"));
        assert!(text.contains("Gallery: 2 more photos"));
        assert!(text.contains("  ✓ Pool"));
        assert!(text.contains("Sarah Mitchell · Real Estate Agent"));
    }

    #[tokio::test]
    async fn test_detail_without_agent_or_features() {
        let store = MemoryStore::demo();
        let studio = store.get_property_with_agent("demo-4").await.unwrap().unwrap();

        let text = render_detail(&studio, &[], &FormState::default(), Utc::now());
        assert!(!text.contains("Contact Agent"));
        assert!(!text.contains("Features & Amenities"));
        assert!(text.contains("Send Inquiry"));
        assert!(text.ends_with("  [Send Message]\n"));
    }

    #[test]
    fn test_not_found_offers_way_back() {
        let text = render_not_found();
        assert!(text.contains("Property not found"));
        assert!(text.contains("Back to Properties"));
    }
}
