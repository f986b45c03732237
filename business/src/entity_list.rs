//! What an entity list should draw, independent of the UI toolkit.
//!
//! A list is either [`ListPhase::Loading`] (a skeleton sized to the expected
//! row count) or [`ListPhase::Ready`], in which case its [`ListBody`] is the
//! resolved rows or the caller's placeholder. The loading flag is owned by
//! the caller; nothing here keeps state between renders.

use bon::Builder;

use crate::{EntityReference, LinkBuilder, NameResolver};

/// Skeleton rows shown while loading a list that is still empty.
pub const DEFAULT_SKELETON_ROWS: usize = 5;

/// Visual variant of an entity list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListLayout {
    /// Secondary header text followed by plain rows.
    #[default]
    Plain,
    /// Rows inside a titled card; names truncate at the card width.
    Card,
    /// Side-panel rows in a scrollable body; the icon sits inside the row button.
    Panel,
}

/// Per-call render configuration of an entity list.
#[derive(Debug, Clone, Builder)]
pub struct EntityListConfig<'a> {
    /// Display order is the slice order.
    pub entities: &'a [EntityReference],
    #[builder(into)]
    pub header_label: String,
    /// Adornment shown opposite the header label (card and panel layouts).
    #[builder(into)]
    pub header_text: Option<String>,
    /// Prefix of every row's test identifier.
    #[builder(into)]
    pub test_id_prefix: String,
    /// Absent means not loading.
    pub loading: Option<bool>,
    #[builder(default)]
    pub layout: ListLayout,
    #[builder(default = DEFAULT_SKELETON_ROWS)]
    pub skeleton_rows: usize,
}

/// Loading state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading { skeleton_rows: usize },
    Ready,
}

impl ListPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

impl EntityListConfig<'_> {
    pub fn is_loading(&self) -> bool {
        self.loading.unwrap_or(false)
    }

    /// Skeleton rows match the list length, or the configured default while
    /// the list is empty. Never fewer than one.
    pub fn skeleton_row_count(&self) -> usize {
        let count = if self.entities.is_empty() {
            self.skeleton_rows
        } else {
            self.entities.len()
        };
        count.max(1)
    }

    pub fn phase(&self) -> ListPhase {
        if self.is_loading() {
            ListPhase::Loading {
                skeleton_rows: self.skeleton_row_count(),
            }
        } else {
            ListPhase::Ready
        }
    }
}

/// Identity of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    /// Used only for references without an id.
    Index(usize),
}

/// One resolved row of an entity list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub key: RowKey,
    pub index: usize,
    pub display_name: String,
    /// `{prefix}-{display_name}`
    pub test_id: String,
    pub link: String,
    /// Resolved type tag, `""` when the entity has none.
    pub type_tag: String,
    /// Soft-deleted in the catalog; still listed, drawn muted.
    pub deleted: bool,
}

impl EntityRow {
    pub fn resolve(
        entity: &EntityReference,
        index: usize,
        test_id_prefix: &str,
        names: &dyn NameResolver,
        links: &dyn LinkBuilder,
    ) -> Self {
        let display_name = names.display_name(entity);
        let type_tag = entity.type_tag();
        let link = links.entity_link(type_tag, entity.fqn());
        let key = if entity.id.is_empty() {
            RowKey::Index(index)
        } else {
            RowKey::Id(entity.id.clone())
        };

        Self {
            key,
            index,
            test_id: format!("{test_id_prefix}-{display_name}"),
            display_name,
            link,
            type_tag: type_tag.to_owned(),
            deleted: entity.is_deleted(),
        }
    }
}

/// Ready-state content of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Placeholder,
    Rows(Vec<EntityRow>),
}

impl ListBody {
    pub fn compute(
        config: &EntityListConfig<'_>,
        names: &dyn NameResolver,
        links: &dyn LinkBuilder,
    ) -> Self {
        if config.entities.is_empty() {
            return Self::Placeholder;
        }

        let rows = config
            .entities
            .iter()
            .enumerate()
            .map(|(index, entity)| {
                EntityRow::resolve(entity, index, &config.test_id_prefix, names, links)
            })
            .collect();
        Self::Rows(rows)
    }

    pub fn rows(&self) -> &[EntityRow] {
        match self {
            Self::Placeholder => &[],
            Self::Rows(rows) => rows,
        }
    }
}
