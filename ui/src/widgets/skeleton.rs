//! Skeleton placeholder rows shown while a list is loading.

use bon::Builder;
use catalog_business::ListPhase;
use egui::{CornerRadius, Sense, Ui, vec2};

use crate::utils::colors::COLOR_SKELETON;

const ROW_HEIGHT: f32 = 20.0;
const AVATAR_SIZE: f32 = 16.0;
/// Seconds per fade cycle.
const PULSE_PERIOD: f64 = 1.4;

/// Renders `content` when not loading, otherwise `item_count` skeleton rows.
#[derive(Debug, Clone, Copy, Builder)]
pub struct SkeletonLoader {
    item_count: usize,
    #[builder(default)]
    loading: bool,
}

impl From<ListPhase> for SkeletonLoader {
    fn from(phase: ListPhase) -> Self {
        match phase {
            ListPhase::Loading { skeleton_rows } => {
                Self::builder().item_count(skeleton_rows).loading(true).build()
            }
            ListPhase::Ready => Self::builder().item_count(0).build(),
        }
    }
}

impl SkeletonLoader {
    /// Returns `None` while the skeleton is shown.
    pub fn show<R>(self, ui: &mut Ui, content: impl FnOnce(&mut Ui) -> R) -> Option<R> {
        if !self.loading {
            return Some(content(ui));
        }

        self.skeleton_ui(ui);
        None
    }

    fn skeleton_ui(self, ui: &mut Ui) {
        let time = ui.input(|input| input.time);
        let phase = (time % PULSE_PERIOD) / PULSE_PERIOD;
        let pulse = 0.55 + 0.35 * (phase * std::f64::consts::TAU).cos() as f32;
        let fill = COLOR_SKELETON.gamma_multiply(pulse);

        ui.vertical(|ui| {
            for row in 0..self.item_count.max(1) {
                // Staggered widths so the rows don't read as a single block.
                let width_factor = [0.9, 0.7, 0.8, 0.6][row % 4];
                let width = ui.available_width() * width_factor;
                let (rect, _) = ui.allocate_exact_size(vec2(width, ROW_HEIGHT), Sense::hover());

                let avatar = egui::Rect::from_min_size(
                    rect.left_top() + vec2(0.0, (ROW_HEIGHT - AVATAR_SIZE) / 2.0),
                    vec2(AVATAR_SIZE, AVATAR_SIZE),
                );
                let bar = egui::Rect::from_min_max(
                    egui::pos2(avatar.right() + 8.0, avatar.top() + 2.0),
                    egui::pos2(rect.right(), avatar.bottom() - 2.0),
                );

                let painter = ui.painter();
                painter.circle_filled(avatar.center(), AVATAR_SIZE / 2.0, fill);
                painter.rect_filled(bar, CornerRadius::same(4), fill);
            }
        });

        ui.ctx().request_repaint();
    }
}

#[cfg(test)]
mod skeleton_loader_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[test]
    fn test_content_shown_when_not_loading() {
        let mut harness = Harness::new_ui_state(
            |ui, shown: &mut Option<()>| {
                *shown = SkeletonLoader::builder()
                    .item_count(3)
                    .build()
                    .show(ui, |ui| {
                        ui.label("real content");
                    });
            },
            None,
        );
        harness.step();

        assert!(harness.query_by_label("real content").is_some());
        assert_eq!(*harness.state(), Some(()));
    }

    #[test]
    fn test_content_hidden_while_loading() {
        let mut harness = Harness::new_ui_state(
            |ui, shown: &mut Option<()>| {
                *shown = SkeletonLoader::from(ListPhase::Loading { skeleton_rows: 2 })
                    .show(ui, |ui| {
                        ui.label("real content");
                    });
            },
            Some(()),
        );
        harness.step();

        assert!(harness.query_by_label("real content").is_none());
        assert_eq!(*harness.state(), None);
    }

    #[test]
    fn test_skeleton_height_grows_with_item_count() {
        let heights: Vec<f32> = [1, 3, 5]
            .into_iter()
            .map(|item_count| {
                let mut harness = Harness::new_ui_state(
                    move |ui, height: &mut f32| {
                        let response = ui.vertical(|ui| {
                            SkeletonLoader::builder()
                                .item_count(item_count)
                                .loading(true)
                                .build()
                                .show(ui, |_| ());
                        });
                        *height = response.response.rect.height();
                    },
                    0.0,
                );
                harness.step();
                *harness.state()
            })
            .collect();

        assert!(heights[0] >= ROW_HEIGHT, "{heights:?}");
        assert!(heights[0] < heights[1] && heights[1] < heights[2], "{heights:?}");
        // Every row takes the same height.
        let step_1_to_3 = (heights[1] - heights[0]) / 2.0;
        let step_3_to_5 = (heights[2] - heights[1]) / 2.0;
        assert!((step_1_to_3 - step_3_to_5).abs() < 0.5, "{heights:?}");
        assert!(step_1_to_3 >= ROW_HEIGHT, "{heights:?}");
    }
}
