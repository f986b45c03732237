//! Landing page with the recently viewed and owned entity lists.

use catalog_business::{EntityListConfig, ListLayout};
use egui::{RichText, Ui};

use crate::state::State;
use crate::widgets::{EntityList, NameWidths};

/// Renders the landing page. Returns the link of the row activated this frame.
pub fn home_page(state: &State, ui: &mut Ui) -> Option<String> {
    let widths = NameWidths::from(&state.config);

    let recent = EntityList::new(
        EntityListConfig::builder()
            .entities(&state.recently_viewed)
            .header_label("Recently Viewed")
            .test_id_prefix("recently-viewed")
            .layout(ListLayout::Plain)
            .loading(state.loading)
            .skeleton_rows(state.config.skeleton_rows())
            .build(),
    )
    .show(ui, |ui| {
        ui.label(RichText::new("No recently viewed data.").weak());
    });

    ui.add_space(16.0);

    let my_data = EntityList::new(
        EntityListConfig::builder()
            .entities(&state.my_data)
            .header_label("My Data")
            .header_text(format!("{} total", state.my_data.len()))
            .test_id_prefix("my-data")
            .layout(ListLayout::Card)
            .loading(state.loading)
            .skeleton_rows(state.config.skeleton_rows())
            .build(),
    )
    .name_widths(widths)
    .show(ui, |ui| {
        ui.label(RichText::new("You have not owned anything yet.").weak());
    });

    recent.navigate_to.or(my_data.navigate_to)
}
