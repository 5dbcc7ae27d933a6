// crates/popviz-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing RaceModule
//   2. Add `pub mod mypanel;` below
//   3. Call it from the matching egui panel in app.rs

pub mod chart_module;
pub mod transport;

use egui::Ui;
use popviz_core::commands::ChartCommand;
use popviz_core::state::ChartState;
use std::collections::HashMap;

/// Resolved flag images: country name → registered `bytes://` image URI.
/// Filled by AppContext::ingest_data_results; entries never change once set.
pub type FlagCache = HashMap<String, String>;

/// Every panel implements this trait.
/// Modules read state, emit commands — they never mutate state directly.
pub trait RaceModule {
    fn name(&self) -> &str;
    fn ui(
        &mut self,
        ui:    &mut Ui,
        state: &ChartState,
        flags: &FlagCache,
        cmd:   &mut Vec<ChartCommand>,
    );
}
