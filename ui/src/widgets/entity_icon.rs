//! Icons for entity types.

use catalog_business::EntityType;
use egui::{Color32, Response, RichText, Ui};

use crate::utils::colors::{
    COLOR_DASHBOARD, COLOR_GOVERNANCE, COLOR_ML_MODEL, COLOR_NEUTRAL, COLOR_PIPELINE, COLOR_TABLE,
    COLOR_TOPIC,
};

/// A glyph drawn in front of an entity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityIcon {
    pub glyph: &'static str,
    pub color: Color32,
}

impl EntityIcon {
    pub const UNKNOWN: Self = Self {
        glyph: "❔",
        color: COLOR_NEUTRAL,
    };

    pub fn rich_text(self) -> RichText {
        RichText::new(self.glyph).color(self.color)
    }

    pub fn ui(self, ui: &mut Ui) -> Response {
        ui.label(self.rich_text())
    }
}

/// Maps a type tag (possibly `""`) to an icon.
pub trait IconResolver {
    fn icon(&self, type_tag: &str) -> EntityIcon;
}

impl<F> IconResolver for F
where
    F: Fn(&str) -> EntityIcon,
{
    fn icon(&self, type_tag: &str) -> EntityIcon {
        self(type_tag)
    }
}

/// One glyph per known [`EntityType`], [`EntityIcon::UNKNOWN`] otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIconResolver;

impl IconResolver for DefaultIconResolver {
    fn icon(&self, type_tag: &str) -> EntityIcon {
        let Some(entity_type) = EntityType::from_tag(type_tag) else {
            return EntityIcon::UNKNOWN;
        };

        let (glyph, color) = match entity_type {
            EntityType::Table => ("▦", COLOR_TABLE),
            EntityType::Database => ("🗄", COLOR_TABLE),
            EntityType::DatabaseSchema => ("🗂", COLOR_TABLE),
            EntityType::StoredProcedure => ("📜", COLOR_TABLE),
            EntityType::Topic => ("📨", COLOR_TOPIC),
            EntityType::Dashboard => ("📊", COLOR_DASHBOARD),
            EntityType::DashboardDataModel => ("🧩", COLOR_DASHBOARD),
            EntityType::Pipeline => ("⛓", COLOR_PIPELINE),
            EntityType::MlModel => ("🤖", COLOR_ML_MODEL),
            EntityType::Container => ("📦", COLOR_PIPELINE),
            EntityType::SearchIndex => ("🔍", COLOR_TOPIC),
            EntityType::Glossary | EntityType::GlossaryTerm => ("📖", COLOR_GOVERNANCE),
            EntityType::Tag | EntityType::Classification => ("🏷", COLOR_GOVERNANCE),
            EntityType::User => ("👤", COLOR_NEUTRAL),
            EntityType::Team => ("👥", COLOR_NEUTRAL),
        };
        EntityIcon { glyph, color }
    }
}
