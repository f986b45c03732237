use serde::Deserialize;
use std::env::vars;

use crate::{CatalogError, DEFAULT_SKELETON_ROWS};

/// Default width of a truncated name in the card layout, in points.
pub const DEFAULT_CARD_NAME_WIDTH: f32 = 192.0;
/// Default width of a truncated name in the panel layout, in points.
pub const DEFAULT_PANEL_NAME_WIDTH: f32 = 288.0;

#[derive(Debug, Clone, Default, Deserialize)]
struct RawConfig {
    catalog_skeleton_rows: Option<usize>,
    catalog_card_name_width: Option<f32>,
    catalog_panel_name_width: Option<f32>,
    catalog_entities_file: Option<String>,
}

/// Presentation settings of the entity lists.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    skeleton_rows: usize,
    card_name_width: f32,
    panel_name_width: f32,
    entities_file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            skeleton_rows: DEFAULT_SKELETON_ROWS,
            card_name_width: DEFAULT_CARD_NAME_WIDTH,
            panel_name_width: DEFAULT_PANEL_NAME_WIDTH,
            entities_file: None,
        }
    }
}

impl CatalogConfig {
    /// Reads `CATALOG_*` environment variables, falling back to defaults
    /// for the ones that are not set.
    pub fn init() -> Result<Self, CatalogError> {
        log::info!("Loading catalog configuration from environment variables");
        let raw: RawConfig =
            serde_env::from_iter(vars()).map_err(|err| CatalogError::config(err.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, CatalogError> {
        let RawConfig {
            catalog_skeleton_rows,
            catalog_card_name_width,
            catalog_panel_name_width,
            catalog_entities_file,
        } = raw;

        let skeleton_rows = catalog_skeleton_rows.unwrap_or(DEFAULT_SKELETON_ROWS);
        if skeleton_rows == 0 {
            return Err(CatalogError::config(
                "CATALOG_SKELETON_ROWS must be at least 1",
            ));
        }

        let card_name_width = positive_width(
            "CATALOG_CARD_NAME_WIDTH",
            catalog_card_name_width,
            DEFAULT_CARD_NAME_WIDTH,
        )?;
        let panel_name_width = positive_width(
            "CATALOG_PANEL_NAME_WIDTH",
            catalog_panel_name_width,
            DEFAULT_PANEL_NAME_WIDTH,
        )?;

        if let Some(path) = &catalog_entities_file {
            log::info!("Entity lists will be loaded from {path}");
        }

        Ok(Self {
            skeleton_rows,
            card_name_width,
            panel_name_width,
            entities_file: catalog_entities_file,
        })
    }

    pub fn skeleton_rows(&self) -> usize {
        self.skeleton_rows
    }

    pub fn card_name_width(&self) -> f32 {
        self.card_name_width
    }

    pub fn panel_name_width(&self) -> f32 {
        self.panel_name_width
    }

    /// JSON file with the entity references shown on the landing page.
    pub fn entities_file(&self) -> Option<&str> {
        self.entities_file.as_deref()
    }
}

fn positive_width(name: &str, value: Option<f32>, default: f32) -> Result<f32, CatalogError> {
    match value {
        None => Ok(default),
        Some(width) if width.is_finite() && width > 0.0 => Ok(width),
        Some(width) => Err(CatalogError::config(format!(
            "{name} must be a positive width, got {width}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_defaults_without_variables() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");
        let config = CatalogConfig::from_raw(raw).expect("defaults should be valid");
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.skeleton_rows(), 5);
    }

    #[test]
    fn test_overrides_are_applied() {
        let raw: RawConfig = from_iter(vec![
            ("CATALOG_SKELETON_ROWS", "8"),
            ("CATALOG_PANEL_NAME_WIDTH", "320"),
            ("CATALOG_ENTITIES_FILE", "fixtures/entities.json"),
        ])
        .expect("RawConfig should deserialize");

        let config = CatalogConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.skeleton_rows(), 8);
        assert_eq!(config.card_name_width(), DEFAULT_CARD_NAME_WIDTH);
        assert_eq!(config.panel_name_width(), 320.0);
        assert_eq!(config.entities_file(), Some("fixtures/entities.json"));
    }

    #[test]
    fn test_zero_skeleton_rows_rejected() {
        let raw = RawConfig {
            catalog_skeleton_rows: Some(0),
            ..RawConfig::default()
        };
        let result = CatalogConfig::from_raw(raw);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("CATALOG_SKELETON_ROWS")
        );
    }

    #[test]
    fn test_negative_width_rejected() {
        let raw = RawConfig {
            catalog_card_name_width: Some(-1.0),
            ..RawConfig::default()
        };
        let err = CatalogConfig::from_raw(raw).expect_err("negative width must fail");
        assert!(err.to_string().contains("CATALOG_CARD_NAME_WIDTH"));
    }
}
