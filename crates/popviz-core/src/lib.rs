// crates/popviz-core/src/lib.rs
//
// Pure chart data and logic — no egui, no network, no runtime handles.
//
// To add a new core capability:
//   1. Create a new module file here
//   2. Add `pub mod mymodule;` below
//   3. Emit a ChartCommand for it and handle it in popviz-ui/src/app.rs

pub mod commands;
pub mod data_types;
pub mod helpers;
pub mod playback;
pub mod series;
pub mod state;
pub mod view;
