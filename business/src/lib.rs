//! Toolkit-independent model of the catalog entity lists.

mod config;
mod entity;
mod entity_link;
mod entity_list;
mod entity_name;
mod entity_type;
mod error;
mod route;

pub use config::{CatalogConfig, DEFAULT_CARD_NAME_WIDTH, DEFAULT_PANEL_NAME_WIDTH};
pub use entity::EntityReference;
pub use entity_link::{CatalogLinkBuilder, LinkBuilder};
pub use entity_list::{
    DEFAULT_SKELETON_ROWS, EntityListConfig, EntityRow, ListBody, ListLayout, ListPhase, RowKey,
};
pub use entity_name::{DefaultNameResolver, NameResolver};
pub use entity_type::EntityType;
pub use error::CatalogError;
pub use route::{Route, Router};
