//! Known catalog entity types and the route segment each one lives under.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Table,
    Topic,
    Dashboard,
    Pipeline,
    #[serde(rename = "mlmodel")]
    MlModel,
    Container,
    Glossary,
    GlossaryTerm,
    Tag,
    Classification,
    User,
    Team,
    Database,
    DatabaseSchema,
    StoredProcedure,
    DashboardDataModel,
    SearchIndex,
}

impl EntityType {
    pub const ALL: [Self; 17] = [
        Self::Table,
        Self::Topic,
        Self::Dashboard,
        Self::Pipeline,
        Self::MlModel,
        Self::Container,
        Self::Glossary,
        Self::GlossaryTerm,
        Self::Tag,
        Self::Classification,
        Self::User,
        Self::Team,
        Self::Database,
        Self::DatabaseSchema,
        Self::StoredProcedure,
        Self::DashboardDataModel,
        Self::SearchIndex,
    ];

    /// Parses a type tag. Unknown and empty tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let entity_type = match tag {
            "table" => Self::Table,
            "topic" => Self::Topic,
            "dashboard" => Self::Dashboard,
            "pipeline" => Self::Pipeline,
            "mlmodel" => Self::MlModel,
            "container" => Self::Container,
            "glossary" => Self::Glossary,
            "glossaryTerm" => Self::GlossaryTerm,
            "tag" => Self::Tag,
            "classification" => Self::Classification,
            "user" => Self::User,
            "team" => Self::Team,
            "database" => Self::Database,
            "databaseSchema" => Self::DatabaseSchema,
            "storedProcedure" => Self::StoredProcedure,
            "dashboardDataModel" => Self::DashboardDataModel,
            "searchIndex" => Self::SearchIndex,
            _ => return None,
        };
        Some(entity_type)
    }

    /// Path segment of the entity's detail page.
    pub fn route_segment(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Topic => "topic",
            Self::Dashboard => "dashboard",
            Self::Pipeline => "pipeline",
            Self::MlModel => "mlmodel",
            Self::Container => "container",
            Self::Glossary | Self::GlossaryTerm => "glossary",
            Self::Tag | Self::Classification => "tags",
            Self::User => "users",
            Self::Team => "settings/members/teams",
            Self::Database => "database",
            Self::DatabaseSchema => "databaseSchema",
            Self::StoredProcedure => "storedProcedure",
            Self::DashboardDataModel => "dashboardDataModel",
            Self::SearchIndex => "searchIndex",
        }
    }

    /// Splits a detail page path into its route segment and the still
    /// percent-encoded fqn that follows it.
    ///
    /// Segments may span several path components (teams live under
    /// `settings/members/teams`), so the longest matching segment wins.
    /// Returns `None` for paths outside every known segment.
    pub fn split_path(path: &str) -> Option<(&'static str, &str)> {
        let path = path.trim_start_matches('/');
        Self::ALL
            .iter()
            .map(|entity_type| entity_type.route_segment())
            .filter_map(|segment| {
                let rest = path.strip_prefix(segment)?;
                if rest.is_empty() {
                    Some((segment, rest))
                } else {
                    rest.strip_prefix('/').map(|fqn| (segment, fqn))
                }
            })
            .max_by_key(|(segment, _)| segment.len())
    }
}
