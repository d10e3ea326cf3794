use crate::models::{ListingType, Property, PropertyType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel used by the select-style fields for "no constraint"
pub const ANY: &str = "all";

/// Search/filter values as entered in the search bar
///
/// Every field is kept as raw text, exactly as the user typed or selected
/// it. Interpretation happens in [`SearchFilters::criteria`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    /// Matched against title, description, city and address
    pub search_query: String,
    /// `"all"` or a category name
    pub property_type: String,
    /// `"all"`, `"sale"` or `"rent"`
    pub listing_type: String,
    pub min_price: String,
    pub max_price: String,
    /// `"all"` or a minimum bedroom count
    pub bedrooms: String,
    pub city: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            property_type: ANY.to_string(),
            listing_type: ANY.to_string(),
            min_price: String::new(),
            max_price: String::new(),
            bedrooms: ANY.to_string(),
            city: String::new(),
        }
    }
}

/// Parsed, typed view of [`SearchFilters`]. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub city: Option<String>,
}

/// One editable field of the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    PropertyType,
    ListingType,
    MinPrice,
    MaxPrice,
    Bedrooms,
    City,
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "query" | "q" | "search" => Ok(FilterField::Query),
            "type" | "property_type" => Ok(FilterField::PropertyType),
            "listing" | "listing_type" => Ok(FilterField::ListingType),
            "min" | "min_price" => Ok(FilterField::MinPrice),
            "max" | "max_price" => Ok(FilterField::MaxPrice),
            "beds" | "bedrooms" => Ok(FilterField::Bedrooms),
            "city" => Ok(FilterField::City),
            other => Err(format!("unknown filter field '{}'", other)),
        }
    }
}

impl SearchFilters {
    /// Set a single field from raw input
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Query => self.search_query = value,
            FilterField::PropertyType => self.property_type = value,
            FilterField::ListingType => self.listing_type = value,
            FilterField::MinPrice => self.min_price = value,
            FilterField::MaxPrice => self.max_price = value,
            FilterField::Bedrooms => self.bedrooms = value,
            FilterField::City => self.city = value,
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Query => &self.search_query,
            FilterField::PropertyType => &self.property_type,
            FilterField::ListingType => &self.listing_type,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::Bedrooms => &self.bedrooms,
            FilterField::City => &self.city,
        }
    }

    /// Interpret the raw text. Anything that doesn't parse is dropped, never
    /// coerced to zero.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: non_empty_lowercase(&self.search_query),
            property_type: select(&self.property_type).and_then(PropertyType::from_selection),
            listing_type: select(&self.listing_type).and_then(ListingType::from_selection),
            min_price: parse_amount(&self.min_price),
            max_price: parse_amount(&self.max_price),
            min_bedrooms: select(&self.bedrooms).and_then(parse_bedrooms),
            city: non_empty_lowercase(&self.city),
        }
    }

    /// True when no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.criteria() == FilterCriteria::default()
    }
}

impl FilterCriteria {
    /// All active predicates must hold
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(query) = &self.query {
            let hit = [
                &property.title,
                &property.description,
                &property.city,
                &property.address,
            ]
            .iter()
            .any(|text| text.to_lowercase().contains(query.as_str()));
            if !hit {
                return false;
            }
        }

        if let Some(kind) = self.property_type {
            if property.property_type != kind {
                return false;
            }
        }

        if let Some(listing) = self.listing_type {
            if property.listing_type != listing {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }

        if let Some(beds) = self.min_bedrooms {
            if property.bedrooms < beds {
                return false;
            }
        }

        if let Some(city) = &self.city {
            if !property.city.to_lowercase().contains(city.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Narrow `properties` to those matching every active filter, keeping source order
pub fn filter_properties(properties: &[Property], filters: &SearchFilters) -> Vec<Property> {
    let criteria = filters.criteria();
    properties
        .iter()
        .filter(|property| criteria.matches(property))
        .cloned()
        .collect()
}

fn select(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value == ANY {
        None
    } else {
        Some(value)
    }
}

fn non_empty_lowercase(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Fractional counts truncate toward zero (`"2.5"` is at least 2 bedrooms).
/// Negative counts constrain nothing.
fn parse_bedrooms(value: &str) -> Option<u32> {
    parse_amount(value)
        .filter(|count| *count >= 0.0)
        .map(|count| count.trunc().min(u32::MAX as f64) as u32)
}
