use catalog_business::{EntityListConfig, ListLayout};
use egui::{RichText, Ui};

use crate::state::State;
use crate::widgets::{EntityList, NameWidths};

/// Side panel listing followed entities.
pub fn following_panel(state: &State, ui: &mut Ui) -> Option<String> {
    EntityList::new(
        EntityListConfig::builder()
            .entities(&state.following)
            .header_label("Following")
            .header_text(state.following.len().to_string())
            .test_id_prefix("following")
            .layout(ListLayout::Panel)
            .loading(state.loading)
            .skeleton_rows(state.config.skeleton_rows())
            .build(),
    )
    .name_widths(NameWidths::from(&state.config))
    .show(ui, |ui| {
        ui.label(RichText::new("Not following any data assets yet.").weak());
    })
    .navigate_to
}
