use crate::config::BackendConfig;
use crate::error::{GatewayError, Result};
use crate::gateway::{ListOptions, PropertyStore};
use crate::models::{NewInquiry, Property, PropertyImage, PropertyWithAgent};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// PostgREST gateway for a hosted Supabase project
pub struct SupabaseGateway {
    client: Client,
    rest_url: String,
    anon_key: String,
}

/// Error body PostgREST sends on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl SupabaseGateway {
    /// Create a gateway for the given project
    pub fn new(config: &BackendConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("elite-estates/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// GET rows from a table with PostgREST query parameters
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = self.table_url(table);
        debug!("GET {} {:?}", url, query);

        let response = self
            .authorize(self.client.get(&url))
            .query(query)
            .send()
            .await?;

        let body = Self::check(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Turn a non-2xx response into a backend error
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        warn!("Backend returned status: {}", status);

        Err(GatewayError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PropertyStore for SupabaseGateway {
    async fn list_available_properties(&self, options: &ListOptions) -> Result<Vec<Property>> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("status", "eq.available".to_string()),
        ];
        if options.featured_only {
            query.push(("featured", "eq.true".to_string()));
        }
        if options.order_by_created_desc {
            query.push(("order", "created_at.desc".to_string()));
        }
        if let Some(limit) = options.limit {
            query.push(("limit", limit.to_string()));
        }

        let mut properties: Vec<Property> = self.select("properties", &query).await?;

        properties.retain(|property| {
            let valid = property.has_valid_price();
            if !valid {
                warn!("Skipping property {} with invalid price {}", property.id, property.price);
            }
            valid
        });

        debug!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    async fn get_property_with_agent(&self, id: &str) -> Result<Option<PropertyWithAgent>> {
        let query = [
            ("select", "*,agents(*)".to_string()),
            ("id", format!("eq.{}", id)),
        ];

        let mut rows: Vec<PropertyWithAgent> = self.select("properties", &query).await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            count => Err(GatewayError::MultipleRows {
                table: "properties",
                id: id.to_string(),
                count,
            }),
        }
    }

    async fn list_property_images(&self, property_id: &str) -> Result<Vec<PropertyImage>> {
        let query = [
            ("select", "*".to_string()),
            ("property_id", format!("eq.{}", property_id)),
            ("order", "order_index.asc".to_string()),
        ];
        self.select("property_images", &query).await
    }

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<()> {
        let url = self.table_url("inquiries");
        debug!("POST {} for property {}", url, inquiry.property_id);

        let response = self
            .authorize(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(inquiry)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "Supabase"
    }
}
