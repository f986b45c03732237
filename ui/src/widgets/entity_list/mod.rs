//! Entity list widget.
//!
//! One widget covers the three list variants of the catalog landing page,
//! selected with [`ListLayout`]:
//! - `Plain`: secondary header text followed by rows
//! - `Card`: framed card with a header row, truncated names
//! - `Panel`: side-panel header row and a scrollable body, icon inside the row button
//!
//! Every variant shows the caller's placeholder instead of rows when the
//! list is empty, and a skeleton while the caller reports loading.

mod row;

use catalog_business::{
    CatalogConfig, CatalogLinkBuilder, DEFAULT_CARD_NAME_WIDTH, DEFAULT_PANEL_NAME_WIDTH,
    DefaultNameResolver, EntityListConfig, LinkBuilder, ListBody, ListLayout, ListPhase,
    NameResolver,
};
use egui::{Align, CornerRadius, Frame, Layout, Margin, RichText, ScrollArea, Stroke, Ui};

use super::entity_icon::{DefaultIconResolver, IconResolver};
use super::skeleton::SkeletonLoader;
use crate::utils::colors::COLOR_BORDER;

/// Max height of the scrollable body in the panel layout.
const PANEL_BODY_MAX_HEIGHT: f32 = 320.0;

/// Collaborators that turn an entity into its name, icon and link.
#[derive(Clone, Copy)]
pub struct Resolvers<'a> {
    pub names: &'a dyn NameResolver,
    pub icons: &'a dyn IconResolver,
    pub links: &'a dyn LinkBuilder,
}

impl Default for Resolvers<'_> {
    fn default() -> Self {
        Self {
            names: &DefaultNameResolver,
            icons: &DefaultIconResolver,
            links: &CatalogLinkBuilder,
        }
    }
}

impl<'a> Resolvers<'a> {
    pub fn with_names(mut self, names: &'a dyn NameResolver) -> Self {
        self.names = names;
        self
    }

    pub fn with_icons(mut self, icons: &'a dyn IconResolver) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_links(mut self, links: &'a dyn LinkBuilder) -> Self {
        self.links = links;
        self
    }
}

/// Truncation widths of the displayed names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameWidths {
    pub card: f32,
    pub panel: f32,
}

impl Default for NameWidths {
    fn default() -> Self {
        Self {
            card: DEFAULT_CARD_NAME_WIDTH,
            panel: DEFAULT_PANEL_NAME_WIDTH,
        }
    }
}

impl From<&CatalogConfig> for NameWidths {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            card: config.card_name_width(),
            panel: config.panel_name_width(),
        }
    }
}

/// What a list rendered during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityListOutput {
    pub phase: ListPhase,
    pub placeholder_shown: bool,
    /// Test identifiers of the rendered rows, in display order.
    pub rendered_test_ids: Vec<String>,
    /// Link target of the row activated this frame.
    pub navigate_to: Option<String>,
}

impl EntityListOutput {
    fn new(phase: ListPhase) -> Self {
        Self {
            phase,
            placeholder_shown: false,
            rendered_test_ids: Vec::new(),
            navigate_to: None,
        }
    }
}

pub struct EntityList<'a> {
    config: EntityListConfig<'a>,
    resolvers: Resolvers<'a>,
    widths: NameWidths,
}

impl<'a> EntityList<'a> {
    pub fn new(config: EntityListConfig<'a>) -> Self {
        Self {
            config,
            resolvers: Resolvers::default(),
            widths: NameWidths::default(),
        }
    }

    pub fn resolvers(mut self, resolvers: Resolvers<'a>) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn name_widths(mut self, widths: NameWidths) -> Self {
        self.widths = widths;
        self
    }

    pub fn show(self, ui: &mut Ui, placeholder: impl FnOnce(&mut Ui)) -> EntityListOutput {
        let phase = self.config.phase();
        let mut output = EntityListOutput::new(phase);
        let loader = SkeletonLoader::from(phase);

        log::trace!(
            "Entity list {:?} ({:?}): {} entities, {:?}",
            self.config.test_id_prefix,
            self.config.layout,
            self.config.entities.len(),
            phase
        );

        ui.push_id(("entity_list", self.config.test_id_prefix.as_str()), |ui| {
            match self.config.layout {
                ListLayout::Plain => {
                    ui.label(RichText::new(&self.config.header_label).strong().weak());
                    loader.show(ui, |ui| self.body_ui(ui, placeholder, &mut output));
                }
                ListLayout::Card => {
                    Frame::NONE
                        .stroke(Stroke::new(1.0, COLOR_BORDER))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(Margin::same(12))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            loader.show(ui, |ui| {
                                let label = RichText::new(&self.config.header_label).strong();
                                self.header_row(ui, label);
                                ui.add_space(8.0);
                                self.body_ui(ui, placeholder, &mut output);
                            });
                        });
                }
                ListLayout::Panel => {
                    loader.show(ui, |ui| {
                        self.header_row(
                            ui,
                            RichText::new(&self.config.header_label).strong().size(15.0),
                        );
                        ui.add_space(8.0);
                        ScrollArea::vertical()
                            .id_salt("entity_list_body")
                            .max_height(PANEL_BODY_MAX_HEIGHT)
                            .auto_shrink([false, true])
                            .show(ui, |ui| self.body_ui(ui, placeholder, &mut output));
                    });
                }
            }
        });

        output
    }

    /// Header label on the left, adornment on the right.
    fn header_row(&self, ui: &mut Ui, label: RichText) {
        ui.horizontal(|ui| {
            ui.label(label);
            if let Some(text) = &self.config.header_text {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(text);
                });
            }
        });
    }

    fn body_ui(
        &self,
        ui: &mut Ui,
        placeholder: impl FnOnce(&mut Ui),
        output: &mut EntityListOutput,
    ) {
        let body = ListBody::compute(&self.config, self.resolvers.names, self.resolvers.links);
        let rows = match body {
            ListBody::Placeholder => {
                placeholder(ui);
                output.placeholder_shown = true;
                return;
            }
            ListBody::Rows(rows) => rows,
        };

        for entity_row in &rows {
            let icon = self.resolvers.icons.icon(&entity_row.type_tag);
            let activated = row::row_ui(ui, entity_row, icon, self.config.layout, self.widths);
            output.rendered_test_ids.push(entity_row.test_id.clone());
            if activated.is_some() {
                output.navigate_to = activated;
            }
        }
    }
}
