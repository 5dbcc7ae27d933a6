// crates/popviz-data/src/lib.rs
//
// No egui dependency — communicates with popviz-ui via channels only.
//
// To add a new data source:
//   1. Add a fetch + parse pair in fetch.rs
//   2. Add a DataResult variant in popviz-core/src/data_types.rs
//   3. Spawn it from worker.rs and ingest it in popviz-ui/src/context.rs

pub mod fetch;
pub mod worker;

// Re-export the main public API so popviz-ui imports are simple.
pub use popviz_core::data_types::DataResult;
pub use worker::DataWorker;
