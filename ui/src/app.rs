use catalog_business::Route;
use egui::{Align, Button, Layout, RichText};

use crate::{pages, state::State};

pub struct CatalogApp {
    state: State,
}

impl CatalogApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for CatalogApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let back = ui.add_enabled(state.router.can_go_back(), Button::new("⬅ Back"));
                if back.clicked() {
                    state.router.back();
                }
                ui.label(RichText::new(state.router.current().path()).monospace());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.checkbox(&mut state.loading, "Loading");
                });
            });
        });

        let mut navigate_to = None;

        match state.router.current().clone() {
            Route::Home => {
                egui::SidePanel::right("following_panel")
                    .resizable(false)
                    .default_width(320.0)
                    .show(ctx, |ui| {
                        navigate_to = pages::following_panel(state, ui);
                    });

                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(target) = pages::home_page(state, ui) {
                        navigate_to = Some(target);
                    }
                });
            }
            Route::Entity { path } => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    pages::entity_page(&path, ui);
                });
            }
        }

        if let Some(target) = navigate_to {
            state.router.navigate(&target);
        }
    }
}
