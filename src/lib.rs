pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod shell;
pub mod views;

pub use config::Config;
pub use error::{GatewayError, Result};
pub use filter::{filter_properties, SearchFilters};
pub use gateway::{ListOptions, MemoryStore, PropertyStore, SupabaseGateway};
pub use navigation::{NavEvent, Navigator, Page};
pub use pages::App;
