use crate::error::Result;
use crate::gateway::{ListOptions, PropertyStore};
use crate::models::{
    Agent, Inquiry, ListingType, NewInquiry, Property, PropertyImage, PropertyStatus,
    PropertyType, PropertyWithAgent,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// In-process store used when no backend is configured, and in tests
#[derive(Default)]
pub struct MemoryStore {
    properties: Vec<Property>,
    agents: Vec<Agent>,
    images: Vec<PropertyImage>,
    inquiries: RwLock<Vec<Inquiry>>,
}

impl MemoryStore {
    pub fn new(properties: Vec<Property>, agents: Vec<Agent>) -> Self {
        Self {
            properties,
            agents,
            ..Self::default()
        }
    }

    pub fn with_images(mut self, images: Vec<PropertyImage>) -> Self {
        self.images = images;
        self
    }

    /// Inquiries received so far
    pub async fn inquiries(&self) -> Vec<Inquiry> {
        self.inquiries.read().await.clone()
    }

    /// Demo catalogue shown when running without a backend
    pub fn demo() -> Self {
        info!("📋 Using the built-in demo catalogue");

        let base = Utc::now() - Duration::days(30);
        let agents = vec![
            Agent {
                id: "agent-1".to_string(),
                name: "Sarah Mitchell".to_string(),
                email: "sarah@eliteestates.com".to_string(),
                phone: "+1 (555) 201-3344".to_string(),
                avatar_url: "https://images.example.com/agents/sarah.jpg".to_string(),
                bio: "Fifteen years matching families with homes on the coast.".to_string(),
                created_at: base,
            },
            Agent {
                id: "agent-2".to_string(),
                name: "David Chen".to_string(),
                email: "david@eliteestates.com".to_string(),
                phone: "+1 (555) 201-7781".to_string(),
                avatar_url: "https://images.example.com/agents/david.jpg".to_string(),
                bio: "Downtown lofts and penthouses.".to_string(),
                created_at: base,
            },
        ];

        let listing = |n: i64,
                       agent: Option<&str>,
                       title: &str,
                       description: &str,
                       property_type: PropertyType,
                       listing_type: ListingType,
                       price: f64,
                       rooms: (u32, u32, f64),
                       place: (&str, &str),
                       features: &[&str],
                       featured: bool| Property {
            id: format!("demo-{}", n),
            agent_id: agent.map(str::to_string),
            title: title.to_string(),
            description: description.to_string(),
            property_type,
            listing_type,
            price,
            bedrooms: rooms.0,
            bathrooms: rooms.1,
            area: rooms.2,
            address: place.0.to_string(),
            city: place.1.to_string(),
            country: "USA".to_string(),
            latitude: None,
            longitude: None,
            image_url: format!("https://images.example.com/listings/{}.jpg", n),
            features: features.iter().map(|f| f.to_string()).collect(),
            status: PropertyStatus::Available,
            featured,
            created_at: base + Duration::days(n),
            updated_at: base + Duration::days(n),
        };

        let properties = vec![
            listing(
                1,
                Some("agent-1"),
                "Oceanfront Villa",
                "Private beach access, infinity pool and sunset views.",
                PropertyType::Villa,
                ListingType::Sale,
                2_450_000.0,
                (5, 4, 420.0),
                ("18 Shoreline Dr", "Malibu"),
                &["Pool", "Beach Access", "Garage"],
                true,
            ),
            listing(
                2,
                Some("agent-2"),
                "Skyline Penthouse",
                "Full-floor penthouse with wraparound terrace.",
                PropertyType::Penthouse,
                ListingType::Sale,
                3_900_000.0,
                (3, 3, 260.0),
                ("500 Park Ave", "New York"),
                &["Terrace", "Concierge", "Elevator"],
                true,
            ),
            listing(
                3,
                Some("agent-2"),
                "Modern Downtown Apartment",
                "Two bedrooms close to transit and restaurants.",
                PropertyType::Apartment,
                ListingType::Rent,
                3_200.0,
                (2, 1, 88.0),
                ("77 Main St", "Chicago"),
                &["Gym", "Doorman"],
                false,
            ),
            listing(
                4,
                None,
                "Cozy Studio",
                "Compact studio with a sunny reading nook.",
                PropertyType::Studio,
                ListingType::Rent,
                1_450.0,
                (0, 1, 32.0),
                ("9 Elm Ct", "Austin"),
                &[],
                false,
            ),
            listing(
                5,
                Some("agent-1"),
                "Family House with Garden",
                "Quiet street, large garden and a two-car garage.",
                PropertyType::House,
                ListingType::Sale,
                685_000.0,
                (4, 2, 210.0),
                ("42 Maple Ln", "Seattle"),
                &["Garden", "Garage", "Fireplace"],
                true,
            ),
        ];

        let images = vec![
            PropertyImage {
                id: "img-1".to_string(),
                property_id: "demo-1".to_string(),
                image_url: "https://images.example.com/listings/1-pool.jpg".to_string(),
                order_index: 1,
                created_at: base,
            },
            PropertyImage {
                id: "img-2".to_string(),
                property_id: "demo-1".to_string(),
                image_url: "https://images.example.com/listings/1-terrace.jpg".to_string(),
                order_index: 2,
                created_at: base,
            },
        ];

        Self::new(properties, agents).with_images(images)
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn list_available_properties(&self, options: &ListOptions) -> Result<Vec<Property>> {
        let mut properties: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.is_available() && p.has_valid_price())
            .filter(|p| !options.featured_only || p.featured)
            .cloned()
            .collect();

        if options.order_by_created_desc {
            properties.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        if let Some(limit) = options.limit {
            properties.truncate(limit);
        }

        debug!("Memory store returned {} properties", properties.len());
        Ok(properties)
    }

    async fn get_property_with_agent(&self, id: &str) -> Result<Option<PropertyWithAgent>> {
        let Some(property) = self.properties.iter().find(|p| p.id == id) else {
            return Ok(None);
        };

        let agent = property
            .agent_id
            .as_deref()
            .and_then(|agent_id| self.agents.iter().find(|a| a.id == agent_id))
            .cloned();

        Ok(Some(PropertyWithAgent {
            property: property.clone(),
            agent,
        }))
    }

    async fn list_property_images(&self, property_id: &str) -> Result<Vec<PropertyImage>> {
        let mut images: Vec<PropertyImage> = self
            .images
            .iter()
            .filter(|image| image.property_id == property_id)
            .cloned()
            .collect();
        images.sort_by_key(|image| image.order_index);
        Ok(images)
    }

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<()> {
        let stored = Inquiry {
            id: Uuid::new_v4().to_string(),
            property_id: inquiry.property_id.clone(),
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            status: inquiry.status,
            created_at: Utc::now(),
        };
        self.inquiries.write().await.push(stored);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "Demo catalogue"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_featured_query_respects_flag_and_limit() {
        let store = MemoryStore::demo();
        let featured = store
            .list_available_properties(&ListOptions::featured(2))
            .await
            .unwrap();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn test_newest_first_ordering() {
        let store = MemoryStore::demo();
        let all = store
            .list_available_properties(&ListOptions::newest_first())
            .await
            .unwrap();
        assert_eq!(all.first().map(|p| p.id.as_str()), Some("demo-5"));
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_lookup_joins_agent_or_none() {
        let store = MemoryStore::demo();

        let villa = store.get_property_with_agent("demo-1").await.unwrap().unwrap();
        assert_eq!(villa.agent.map(|a| a.name), Some("Sarah Mitchell".to_string()));

        let studio = store.get_property_with_agent("demo-4").await.unwrap().unwrap();
        assert!(studio.agent.is_none());

        assert!(store.get_property_with_agent("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_inquiry_appends() {
        let store = MemoryStore::demo();
        let inquiry = NewInquiry::new("demo-1", "Ann", "ann@example.com", "555", "Viewing?");
        store.create_inquiry(&inquiry).await.unwrap();

        let stored = store.inquiries().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].property_id, "demo-1");
    }

    #[tokio::test]
    async fn test_images_are_ordered() {
        let store = MemoryStore::demo();
        let images = store.list_property_images("demo-1").await.unwrap();
        assert_eq!(
            images.iter().map(|i| i.order_index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(store.list_property_images("demo-3").await.unwrap().is_empty());
    }
}
