// crates/popviz-core/src/view.rs
// Pure view projection: (series, cursor) → everything the chart draws.
// Recomputed every frame; no caching, no mutation.

use crate::helpers::format::group_thousands;
use crate::series::{PopulationSeries, TOP_N};

/// Every Nth year tick on the scrubber ruler carries a label.
pub const TICK_LABEL_EVERY: usize = 4;

/// One horizontal bar, top rank first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarEntry {
    pub name:       String,
    pub population: u64,
    pub flag_url:   String,
}

/// One mark on the year ruler under the scrubber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearTick {
    pub year:    i32,
    pub labeled: bool,
}

/// The fully derived frame for one cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartFrame {
    pub year:        i32,
    /// `Total: 2,536,274,721` — empty when no snapshot matches the cursor.
    pub total_label: String,
    pub bars:        Vec<BarEntry>,
    pub ticks:       Vec<YearTick>,
}

/// Project the chart for `cursor`. A cursor with no matching snapshot yields
/// empty bars and an empty total label — the ruler still shows all years.
pub fn project(series: &PopulationSeries, cursor: i32) -> ChartFrame {
    let (total_label, bars) = match series.snapshot_at(cursor) {
        Some(snap) => (
            format!("Total: {}", group_thousands(snap.total)),
            snap.countries
                .iter()
                .take(TOP_N)
                .map(|c| BarEntry {
                    name:       c.name.clone(),
                    population: c.population,
                    flag_url:   c.flag_url.clone(),
                })
                .collect(),
        ),
        None => (String::new(), Vec::new()),
    };

    let ticks = series
        .years()
        .enumerate()
        .map(|(i, year)| YearTick { year, labeled: i % TICK_LABEL_EVERY == 0 })
        .collect();

    ChartFrame { year: cursor, total_label, bars, ticks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{CountryEntry, Snapshot, PLACEHOLDER_FLAG_URL};

    fn series(snaps: Vec<Snapshot>) -> PopulationSeries {
        PopulationSeries::new(snaps).unwrap()
    }

    fn snap(year: i32, total: u64, count: usize) -> Snapshot {
        Snapshot {
            year,
            total,
            countries: (0..count)
                .map(|i| CountryEntry {
                    name:       format!("c{i:02}"),
                    population: (count - i) as u64 * 1000,
                    flag_url:   PLACEHOLDER_FLAG_URL.into(),
                })
                .collect(),
        }
    }

    #[test]
    fn bars_are_the_first_twelve_entries_in_order() {
        let s = series(vec![snap(1950, 100, 20)]);
        let frame = project(&s, 1950);
        assert_eq!(frame.bars.len(), TOP_N);
        for (i, bar) in frame.bars.iter().enumerate() {
            assert_eq!(bar.name, format!("c{i:02}"));
            assert_eq!(bar.population, (20 - i) as u64 * 1000);
        }
    }

    #[test]
    fn short_snapshot_yields_short_bar_list() {
        let s = series(vec![snap(1950, 100, 3)]);
        assert_eq!(project(&s, 1950).bars.len(), 3);
    }

    #[test]
    fn unmatched_cursor_yields_empty_view() {
        let s = series(vec![snap(1950, 100, 5), snap(1952, 120, 5)]);
        let frame = project(&s, 1951);
        assert!(frame.bars.is_empty());
        assert!(frame.total_label.is_empty());
        // The ruler is derived from the series, not the cursor.
        assert_eq!(frame.ticks.len(), 2);
    }

    #[test]
    fn total_label_is_grouped() {
        let s = series(vec![snap(1950, 2_536_274_721, 1)]);
        assert_eq!(project(&s, 1950).total_label, "Total: 2,536,274,721");
    }

    #[test]
    fn every_fourth_tick_is_labeled() {
        let s = series((1950..1960).map(|y| snap(y, 1, 0)).collect());
        let frame = project(&s, 1950);
        assert_eq!(frame.ticks.len(), 10);
        for (i, tick) in frame.ticks.iter().enumerate() {
            assert_eq!(tick.year, 1950 + i as i32);
            assert_eq!(tick.labeled, i % 4 == 0);
        }
    }

    #[test]
    fn cursor_follows_every_year_in_the_series() {
        // Every year in the series projects its own snapshot.
        let s = series((1950..1955).map(|y| snap(y, y as u64, 4)).collect());
        for y in 1950..1955 {
            let frame = project(&s, y);
            assert_eq!(frame.year, y);
            assert_eq!(frame.total_label, format!("Total: {y}"));
        }
    }
}
