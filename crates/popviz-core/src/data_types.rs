// crates/popviz-core/src/data_types.rs
//
// Types that flow across the channel between popviz-data and popviz-ui.
// No egui, no HTTP — just plain data.

use crate::series::PopulationSeries;

/// Results sent from the DataWorker background threads to the UI.
pub enum DataResult {
    /// The full series, parsed and validated. Sent exactly once on success.
    Series(PopulationSeries),
    /// A resolved flag for one country: the URL that replaces the placeholder
    /// plus the SVG bytes so the UI can display the image without a second
    /// round trip.
    Flag { name: String, url: String, bytes: Vec<u8> },
    /// Primary-fetch failure. The UI logs it and stays on the loading screen;
    /// there is no retry and no user-visible error state.
    Error { msg: String },
}
