use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Nullable array column: `null` reads as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Category of a property listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Penthouse,
    Studio,
    /// Any category the backend knows about that this client doesn't
    #[serde(other)]
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::House,
        PropertyType::Penthouse,
        PropertyType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Studio => "studio",
            PropertyType::Other => "other",
        }
    }

    /// Parse one of the selectable categories. `Other` is never selectable.
    pub fn from_selection(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a property is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }

    pub fn from_selection(value: &str) -> Option<Self> {
        match value {
            "sale" => Some(ListingType::Sale),
            "rent" => Some(ListingType::Rent),
            _ => None,
        }
    }

    /// Badge text shown on cards and the detail header
    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Sale => "For Sale",
            ListingType::Rent => "For Rent",
        }
    }
}

/// Availability of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    #[serde(other)]
    Unavailable,
}

/// Core property data model, one row of the `properties` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub agent_id: Option<String>,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Floor area in square meters
    pub area: f64,
    pub address: String,
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<String>,
    pub status: PropertyStatus,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Price must be a finite, non-negative amount
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }

    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }
}

/// Listing agent, one row of the `agents` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

/// Additional gallery image attached to a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImage {
    pub id: String,
    pub property_id: String,
    pub image_url: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of an inquiry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    #[serde(other)]
    Other,
}

/// Stored inquiry row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `inquiries` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewInquiry {
    pub property_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: InquiryStatus,
}

impl NewInquiry {
    pub fn new(
        property_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
            status: InquiryStatus::New,
        }
    }
}

/// A property joined with its (optional) agent at read time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyWithAgent {
    #[serde(flatten)]
    pub property: Property,
    #[serde(rename = "agents", default)]
    pub agent: Option<Agent>,
}
