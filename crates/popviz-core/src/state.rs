// crates/popviz-core/src/state.rs
// The one mutable application state — no egui, no runtime handles.
// Modules read it; only app.rs (via ChartCommand processing and data-result
// ingest) writes it.

use crate::playback::PlaybackController;
use crate::series::PopulationSeries;
use crate::view::{self, ChartFrame};

#[derive(Default)]
pub struct ChartState {
    /// None until the primary fetch resolves; the UI shows the loading
    /// spinner for as long as this is None (including after a fetch failure).
    pub series:   Option<PopulationSeries>,
    pub playback: PlaybackController,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.series.is_none()
    }

    /// Install the fetched series and point the playback range at it.
    pub fn install_series(&mut self, series: PopulationSeries) {
        self.playback.configure(series.start_year(), series.end_year());
        self.series = Some(series);
    }

    /// Overwrite one country's flag URL everywhere in the series.
    pub fn apply_flag(&mut self, name: &str, url: &str) {
        if let Some(series) = &mut self.series {
            series.apply_flag(name, url);
        }
    }

    /// The derived view for the current cursor, or None while loading.
    pub fn frame(&self) -> Option<ChartFrame> {
        self.series
            .as_ref()
            .map(|s| view::project(s, self.playback.cursor()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{CountryEntry, Snapshot, PLACEHOLDER_FLAG_URL};

    fn two_year_series() -> PopulationSeries {
        let snaps = [(1950, 100u64), (1951, 110)]
            .iter()
            .map(|&(year, total)| Snapshot {
                year,
                total,
                countries: vec![CountryEntry {
                    name:       "China".into(),
                    population: total / 2,
                    flag_url:   PLACEHOLDER_FLAG_URL.into(),
                }],
            })
            .collect();
        PopulationSeries::new(snaps).unwrap()
    }

    #[test]
    fn starts_loading_with_no_frame() {
        let state = ChartState::new();
        assert!(state.loading());
        assert!(state.frame().is_none());
    }

    #[test]
    fn install_series_configures_playback_range() {
        let mut state = ChartState::new();
        state.install_series(two_year_series());
        assert!(!state.loading());
        assert_eq!(state.playback.cursor(), 1950);
        assert_eq!(state.playback.end_year(), 1951);
    }

    #[test]
    fn frame_tracks_the_cursor() {
        // One tick moves the chart from 1950 to 1951 data and playback
        // auto-pauses on the last year.
        let mut state = ChartState::new();
        state.install_series(two_year_series());
        assert_eq!(state.frame().unwrap().total_label, "Total: 100");

        state.playback.play();
        state.playback.advance(0.2);
        assert_eq!(state.playback.cursor(), 1951);
        assert_eq!(state.frame().unwrap().total_label, "Total: 110");
        assert!(!state.playback.is_playing());
    }

    #[test]
    fn apply_flag_reaches_the_projected_frame() {
        let mut state = ChartState::new();
        state.install_series(two_year_series());
        state.apply_flag("China", "https://flagcdn.com/cn.svg");
        let frame = state.frame().unwrap();
        assert_eq!(frame.bars[0].flag_url, "https://flagcdn.com/cn.svg");
    }
}
