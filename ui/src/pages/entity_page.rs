use std::borrow::Cow;

use catalog_business::EntityType;
use egui::{RichText, Ui};

/// Detail page of the entity addressed by `path`.
///
/// Only the path is known here; the page shows where the row led.
pub fn entity_page(path: &str, ui: &mut Ui) {
    let (kind, fqn) = match EntityType::split_path(path) {
        Some((segment, encoded)) => (
            segment,
            urlencoding::decode(encoded).unwrap_or(Cow::Borrowed(encoded)),
        ),
        None => ("", Cow::Borrowed(path)),
    };

    ui.heading(&*fqn);
    ui.label(RichText::new(kind).weak());
    ui.add_space(8.0);
    ui.label(RichText::new(path).monospace());
}

#[cfg(test)]
mod entity_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    fn page_harness(path: &'static str) -> Harness<'static> {
        let mut harness = Harness::new_ui(move |ui| entity_page(path, ui));
        harness.step();
        harness
    }

    #[test]
    fn test_team_heading_is_the_team_name() {
        let harness = page_harness("/settings/members/teams/Engineering");

        assert!(harness.query_by_label("Engineering").is_some());
        assert!(harness.query_by_label("settings/members/teams").is_some());
    }

    #[test]
    fn test_heading_decodes_the_fqn() {
        let harness = page_harness("/dashboard/superset.%22sales%20report%22");

        assert!(harness.query_by_label("superset.\"sales report\"").is_some());
        assert!(harness.query_by_label("dashboard").is_some());
    }
}
