#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use catalog_business::CatalogConfig;
use catalog_ui::state::State;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn load_config() -> CatalogConfig {
    CatalogConfig::init().unwrap_or_else(|err| {
        log::error!("{err}, using default catalog configuration");
        CatalogConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let state = State::new(load_config());

    eframe::run_native(
        "Catalog",
        native_options,
        Box::new(move |_cc| Ok(Box::new(catalog_ui::CatalogApp::new(state)))),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("egui_canvas")
            .expect("Failed to find egui_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("egui_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let state = State::new(load_config());
                    Ok(Box::new(catalog_ui::CatalogApp::new(state)))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
