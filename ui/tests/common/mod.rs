#![allow(dead_code)]

use catalog_business::{EntityListConfig, EntityReference, ListLayout};
use catalog_ui::CatalogApp;
use catalog_ui::state::State;
use catalog_ui::widgets::{EntityList, EntityListOutput};
use egui_kittest::Harness;

pub const PLACEHOLDER: &str = "Nothing to show here";

/// Captures what the list under test rendered.
#[derive(Debug, Default)]
pub struct ListRecorder {
    pub loading: Option<bool>,
    pub output: Option<EntityListOutput>,
    /// Every link activated since the harness started.
    pub navigated: Vec<String>,
}

impl ListRecorder {
    pub fn output(&self) -> &EntityListOutput {
        self.output.as_ref().expect("list should have rendered")
    }

    pub fn record(&mut self, output: EntityListOutput) {
        if let Some(target) = &output.navigate_to {
            self.navigated.push(target.clone());
        }
        self.output = Some(output);
    }
}

pub fn sample_entities() -> Vec<EntityReference> {
    vec![
        EntityReference::new("1", "table")
            .with_fqn("db.schema.dim_customer")
            .with_name("dim_customer"),
        EntityReference::new("2", "dashboard")
            .with_fqn("superset.sales")
            .with_display_name("Sales Overview"),
        EntityReference::new("3", "pipeline")
            .with_fqn("airflow.nightly_etl")
            .with_name("nightly_etl"),
    ]
}

/// Harness rendering one entity list with the default collaborators.
pub fn list_harness<'a>(
    entities: Vec<EntityReference>,
    layout: ListLayout,
    loading: Option<bool>,
) -> Harness<'a, ListRecorder> {
    Harness::new_ui_state(
        move |ui, recorder: &mut ListRecorder| {
            let config = EntityListConfig::builder()
                .entities(&entities)
                .header_label("Recently Viewed")
                .header_text("3 total")
                .test_id_prefix("recent")
                .layout(layout)
                .maybe_loading(recorder.loading)
                .build();
            let output = EntityList::new(config).show(ui, |ui| {
                ui.label(PLACEHOLDER);
            });
            recorder.record(output);
        },
        ListRecorder {
            loading,
            ..ListRecorder::default()
        },
    )
}

pub fn app_harness<'a>(state: State) -> Harness<'a, CatalogApp> {
    let app = CatalogApp::new(state);
    Harness::new_eframe(|_| app)
}
