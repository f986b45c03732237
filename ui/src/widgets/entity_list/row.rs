//! Row rendering for the entity list.

use catalog_business::{EntityRow, ListLayout};
use egui::{Align, Button, Layout, Response, RichText, TextWrapMode, Ui, vec2};

use super::NameWidths;
use crate::utils::colors::COLOR_LINK;
use crate::widgets::entity_icon::EntityIcon;
use crate::widgets::routable_link::RoutableLink;

/// Renders one entity as a link button, keyed by the row identity.
///
/// - `Plain`: icon, then the full name
/// - `Card`: icon, then the name truncated at the card width
/// - `Panel`: icon and name inside one button, truncated at the panel width
///
/// The full name is always available as the hover text. Deleted entities
/// are struck through and muted.
///
/// Returns the link target when the row was activated.
pub(super) fn row_ui(
    ui: &mut Ui,
    row: &EntityRow,
    icon: EntityIcon,
    layout: ListLayout,
    widths: NameWidths,
) -> Option<String> {
    let name = RichText::new(&row.display_name);
    let name = if row.deleted {
        name.strikethrough().weak()
    } else {
        name.color(COLOR_LINK)
    };

    ui.push_id(&row.key, |ui| {
        ui.horizontal(|ui| {
            let link = RoutableLink::new(&row.link);
            match layout {
                ListLayout::Plain => {
                    icon.ui(ui);
                    link.show(ui, |ui| {
                        ui.add(Button::new(name).frame(false))
                            .on_hover_text(&row.display_name)
                    })
                }
                ListLayout::Card => {
                    icon.ui(ui);
                    link.show(ui, |ui| {
                        truncated(ui, Button::new(name), widths.card, &row.display_name)
                    })
                }
                ListLayout::Panel => link.show(ui, |ui| {
                    let button = Button::new((icon.rich_text(), name));
                    truncated(ui, button, widths.panel, &row.display_name)
                }),
            }
        })
        .inner
    })
    .inner
}

/// Left-aligned name, elided past `width`.
fn truncated(ui: &mut Ui, button: Button<'_>, width: f32, title: &str) -> Response {
    let height = ui.spacing().interact_size.y;
    ui.allocate_ui_with_layout(
        vec2(width, height),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.set_max_width(width);
            ui.add(button.frame(false).wrap_mode(TextWrapMode::Truncate))
        },
    )
    .inner
    .on_hover_text(title)
}
