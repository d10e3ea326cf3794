pub mod memory;
pub mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseGateway;

use crate::error::Result;
use crate::models::{NewInquiry, Property, PropertyImage, PropertyWithAgent};
use async_trait::async_trait;

/// Options for listing available properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only properties flagged as featured
    pub featured_only: bool,
    /// Maximum number of rows to return
    pub limit: Option<usize>,
    /// Newest listings first
    pub order_by_created_desc: bool,
}

impl ListOptions {
    /// Query used by the home page highlight section
    pub fn featured(limit: usize) -> Self {
        Self {
            featured_only: true,
            limit: Some(limit),
            order_by_created_desc: false,
        }
    }

    /// Query used by the full listings page
    pub fn newest_first() -> Self {
        Self {
            order_by_created_desc: true,
            ..Self::default()
        }
    }
}

/// Read/write access to the listings backend
///
/// Pages depend on this trait so the hosted backend can be swapped for an
/// in-memory catalogue.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Properties with status `available`
    async fn list_available_properties(&self, options: &ListOptions) -> Result<Vec<Property>>;

    /// Single property with its agent; `Ok(None)` when no such id exists
    async fn get_property_with_agent(&self, id: &str) -> Result<Option<PropertyWithAgent>>;

    /// Gallery images for a property, in display order
    async fn list_property_images(&self, property_id: &str) -> Result<Vec<PropertyImage>>;

    /// Append a new inquiry
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<()>;

    /// Get the name of the backing store
    fn backend_name(&self) -> &'static str;
}
