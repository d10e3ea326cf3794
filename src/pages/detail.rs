use crate::gateway::PropertyStore;
use crate::models::{NewInquiry, PropertyImage, PropertyWithAgent};
use crate::views::detail::{render_detail, render_loading, render_not_found};
use crate::views::{FormError, FormField, FormState};
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Alert text shown when an inquiry can't be delivered
pub const INQUIRY_FAILED: &str = "Failed to submit inquiry. Please try again.";

/// What the detail page currently knows about its property
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    NotFound,
    Loaded {
        listing: Box<PropertyWithAgent>,
        images: Vec<PropertyImage>,
    },
}

/// Result of pressing "Send Message"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Invalid(FormError),
    /// The backend rejected the write; the form keeps its contents
    Failed,
    /// There is no loaded property to inquire about
    Unavailable,
}

/// One property with its agent and an inquiry form
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub property_id: String,
    pub state: DetailState,
    pub form: FormState,
}

impl DetailPage {
    /// Look the property up. Unknown ids and failed reads both land on not-found.
    pub async fn mount(store: &dyn PropertyStore, property_id: &str) -> Self {
        let mut page = Self {
            property_id: property_id.to_string(),
            state: DetailState::Loading,
            form: FormState::default(),
        };

        page.state = match store.get_property_with_agent(property_id).await {
            Ok(Some(listing)) => {
                let images = store
                    .list_property_images(property_id)
                    .await
                    .unwrap_or_else(|e| {
                        warn!("Error fetching images for {}: {}", property_id, e);
                        Vec::new()
                    });
                DetailState::Loaded {
                    listing: Box::new(listing),
                    images,
                }
            }
            Ok(None) => {
                info!("Property {} not found", property_id);
                DetailState::NotFound
            }
            Err(e) => {
                error!("Error fetching property details: {}", e);
                DetailState::NotFound
            }
        };

        page
    }

    pub fn listing(&self) -> Option<&PropertyWithAgent> {
        match &self.state {
            DetailState::Loaded { listing, .. } => Some(listing.as_ref()),
            _ => None,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validate and send the inquiry
    pub async fn submit(
        &mut self,
        store: &dyn PropertyStore,
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        if self.listing().is_none() {
            return SubmitOutcome::Unavailable;
        }
        if let Err(e) = self.form.validate() {
            return SubmitOutcome::Invalid(e);
        }

        // sent as typed; validation only looks at trimmed text
        let inquiry = NewInquiry::new(
            self.property_id.clone(),
            self.form.name.clone(),
            self.form.email.clone(),
            self.form.phone.clone(),
            self.form.message.clone(),
        );

        self.form.submitting = true;
        let result = store.create_inquiry(&inquiry).await;
        self.form.submitting = false;

        match result {
            Ok(()) => {
                info!("Inquiry sent for property {}", self.property_id);
                self.form.mark_submitted(now);
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Error submitting inquiry: {}", e);
                self.form.mark_failed(INQUIRY_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        match &self.state {
            DetailState::Loading => render_loading(),
            DetailState::NotFound => render_not_found(),
            DetailState::Loaded { listing, images } => {
                render_detail(listing, images, &self.form, now)
            }
        }
    }
}
