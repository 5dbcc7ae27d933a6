// crates/popviz-ui/src/context.rs
//
// AppContext owns all runtime handles that are NOT chart state.
// PopVizApp holds one of these plus a ChartState and the modules — nothing else.
//
// Sub-struct layout:
//   AppContext
//     ├── data_worker — the fetch threads + result channel
//     └── flags       — country name → registered bytes:// SVG image URI

use crate::modules::FlagCache;
use eframe::egui;
use popviz_core::state::ChartState;
use popviz_data::{DataResult, DataWorker};

pub struct AppContext {
    pub data_worker: DataWorker,
    pub flags:       FlagCache,
}

impl AppContext {
    pub fn new(data_worker: DataWorker) -> Self {
        Self { data_worker, flags: FlagCache::new() }
    }

    /// Drain the DataWorker result channel into state and the flag cache.
    /// Called once per frame from `app::poll_data`, before the UI pass.
    ///
    /// This is the single translation layer between raw `DataWorker` output
    /// and UI-visible state — the series install, flag URL mutation, and SVG
    /// image registration all land here.
    pub fn ingest_data_results(&mut self, state: &mut ChartState, ctx: &egui::Context) {
        while let Ok(result) = self.data_worker.rx.try_recv() {
            match result {
                DataResult::Series(series) => {
                    state.install_series(series);
                    ctx.request_repaint();
                }

                DataResult::Flag { name, url, bytes } => {
                    state.apply_flag(&name, &url);
                    // Register the SVG under a bytes:// URI once; the chart
                    // paints it via egui_extras' image loaders from then on.
                    let uri = format!("bytes://flags/{name}.svg");
                    ctx.include_bytes(uri.clone(), bytes);
                    self.flags.insert(name, uri);
                    ctx.request_repaint();
                }

                DataResult::Error { msg } => {
                    // No retry, no error screen — the loading spinner stays
                    // up. The log line is the only trace.
                    eprintln!("[data] series fetch failed: {msg}");
                }
            }
        }
    }
}
