//! Entity references as the catalog API returns them.
//!
//! An [`EntityReference`] is read-only display and navigation data. The two
//! optional fields the list relies on (`type` and `fullyQualifiedName`) are
//! resolved to an empty string here, so rendering code never sees `None`.

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// A reference to a catalog entity (table, dashboard, pipeline, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    /// Unique identifier of the entity.
    #[serde(default)]
    pub id: String,
    /// Type tag of the entity, e.g. `table` or `dashboard`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl EntityReference {
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: Some(entity_type.into()),
            ..Self::default()
        }
    }

    pub fn with_fqn(mut self, fqn: impl Into<String>) -> Self {
        self.fully_qualified_name = Some(fqn.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The type tag, or `""` when the entity carries none.
    pub fn type_tag(&self) -> &str {
        self.entity_type.as_deref().unwrap_or_default()
    }

    /// The fully-qualified name, or `""` when the entity carries none.
    pub fn fqn(&self) -> &str {
        self.fully_qualified_name.as_deref().unwrap_or_default()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    /// Decodes a JSON array of entity references, keeping the array order.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, CatalogError> {
        let entities: Vec<Self> = serde_json::from_str(json)?;
        log::debug!("Decoded {} entity references", entities.len());
        Ok(entities)
    }

    /// Reads and decodes a JSON file of entity references.
    pub fn list_from_file(path: &str) -> Result<Vec<Self>, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::list_from_json(&json)
    }
}
