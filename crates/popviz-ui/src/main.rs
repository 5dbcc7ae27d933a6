#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod theme;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("📊 PopViz")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PopViz",
        native_options,
        Box::new(|cc| {
            // Pulls in the SVG loader so flag images resolve from bytes:// URIs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app::PopVizApp::new(cc)))
        }),
    )
}
