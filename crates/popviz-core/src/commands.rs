// crates/popviz-core/src/commands.rs
//
// Every user action in PopViz is expressed as a ChartCommand.
// Modules emit these; app.rs processes them after the UI pass.
// Adding a new interaction = add a variant here + one match arm in app.rs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCommand {
    // ── Playback ─────────────────────────────────────────────────────────────
    Play,
    Pause,
    /// Scrubber input: jump the cursor to a year without changing play state
    /// (the controller's end-of-range auto-stop still applies).
    SetCursor(i32),
}
