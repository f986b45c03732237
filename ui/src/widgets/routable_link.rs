use egui::{CursorIcon, Response, Ui};

/// Wraps a clickable widget and reports its target path when activated.
///
/// Navigation itself belongs to whoever owns the
/// [`Router`](catalog_business::Router).
#[derive(Debug, Clone, Copy)]
pub struct RoutableLink<'a> {
    target: &'a str,
}

impl<'a> RoutableLink<'a> {
    pub fn new(target: &'a str) -> Self {
        Self { target }
    }

    /// Returns the target path on the frame the link was activated.
    pub fn show(self, ui: &mut Ui, content: impl FnOnce(&mut Ui) -> Response) -> Option<String> {
        let response = content(ui).on_hover_cursor(CursorIcon::PointingHand);

        response.clicked().then(|| {
            log::debug!("Link activated: {}", self.target);
            self.target.to_owned()
        })
    }
}

#[cfg(test)]
mod routable_link_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[test]
    fn test_click_reports_target() {
        let mut harness = Harness::new_ui_state(
            |ui, activated: &mut Vec<String>| {
                let target = RoutableLink::new("/table/db.schema.t1")
                    .show(ui, |ui| ui.button("t1"));
                activated.extend(target);
            },
            Vec::new(),
        );
        harness.step();
        assert!(harness.state().is_empty(), "nothing clicked yet");

        harness.get_by_label("t1").click();
        harness.step();
        harness.step();

        assert_eq!(harness.state(), &["/table/db.schema.t1"]);
    }
}
