// crates/popviz-core/src/series.rs
// The fetched population time series — plain data, no I/O.
// Used by both popviz-data (construction) and popviz-ui (display).
//
// There is deliberately no Deserialize on these types: the only way to build
// a PopulationSeries is `new()`, which is what upholds the non-empty and
// sorted invariants. The wire format lives in popviz-data's private structs.

use std::collections::BTreeSet;

/// How many top-ranked countries the chart shows per year.
pub const TOP_N: usize = 12;

/// Flag shown for every country until its real flag URL resolves.
/// Flag-lookup failures leave this in place permanently.
pub const PLACEHOLDER_FLAG_URL: &str = "https://flagcdn.com/fr.svg";

/// One country's row inside a yearly snapshot. Rank is implied by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryEntry {
    pub name:       String,
    pub population: u64,
    pub flag_url:   String,
}

/// One year's population data, countries ordered by rank (descending population
/// as delivered by the API — we do not re-rank).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub year:      i32,
    pub total:     u64,
    pub countries: Vec<CountryEntry>,
}

/// The full series, fetched once and held for the app's lifetime.
///
/// Invariants held by construction:
///   - never empty (`new` returns None for an empty input)
///   - sorted ascending by year (`new` sorts; an unsorted payload is repaired
///     rather than producing an undefined cursor range)
#[derive(Clone, Debug)]
pub struct PopulationSeries {
    snapshots: Vec<Snapshot>,
}

impl PopulationSeries {
    /// Build a series from raw snapshots. Empty input is rejected outright —
    /// every downstream consumer assumes first/last exist.
    pub fn new(mut snapshots: Vec<Snapshot>) -> Option<Self> {
        if snapshots.is_empty() {
            return None;
        }
        snapshots.sort_by_key(|s| s.year);
        Some(Self { snapshots })
    }

    pub fn start_year(&self) -> i32 {
        self.snapshots[0].year
    }

    pub fn end_year(&self) -> i32 {
        self.snapshots[self.snapshots.len() - 1].year
    }

    /// The snapshot whose year equals `year` exactly, if any.
    /// Years are sorted, so binary search applies.
    pub fn snapshot_at(&self, year: i32) -> Option<&Snapshot> {
        self.snapshots
            .binary_search_by_key(&year, |s| s.year)
            .ok()
            .map(|i| &self.snapshots[i])
    }

    /// All years in the series, ascending. Drives the scrubber tick ruler.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.snapshots.iter().map(|s| s.year)
    }

    /// Number of yearly snapshots. Never zero, so this is not a `len()` —
    /// there is no matching `is_empty()` and never will be.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Deduplicated names of every country that appears in the top TOP_N of
    /// any snapshot. One flag lookup per name covers the whole series.
    pub fn top_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for snap in &self.snapshots {
            for entry in snap.countries.iter().take(TOP_N) {
                names.insert(entry.name.clone());
            }
        }
        names.into_iter().collect()
    }

    /// Overwrite the flag URL for `name` in every snapshot.
    /// Keys are disjoint per country, so concurrent lookups resolving in any
    /// order land on their own entries only.
    pub fn apply_flag(&mut self, name: &str, url: &str) {
        for snap in &mut self.snapshots {
            for entry in &mut snap.countries {
                if entry.name == name {
                    entry.flag_url = url.to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, pop: u64) -> CountryEntry {
        CountryEntry {
            name:       name.into(),
            population: pop,
            flag_url:   PLACEHOLDER_FLAG_URL.into(),
        }
    }

    fn snap(year: i32, total: u64, names: &[(&str, u64)]) -> Snapshot {
        Snapshot {
            year,
            total,
            countries: names.iter().map(|(n, p)| entry(n, *p)).collect(),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(PopulationSeries::new(Vec::new()).is_none());
    }

    #[test]
    fn smallest_accepted_series_has_safe_bounds() {
        // new() is the only way to build a series, so the year-bound
        // accessors can never see an empty snapshot list.
        let s = PopulationSeries::new(vec![snap(1950, 1, &[])]).unwrap();
        assert_eq!(s.start_year(), 1950);
        assert_eq!(s.end_year(), 1950);
        assert_eq!(s.snapshot_count(), 1);
    }

    #[test]
    fn unsorted_input_is_sorted_by_year() {
        let s = PopulationSeries::new(vec![
            snap(1952, 3, &[]),
            snap(1950, 1, &[]),
            snap(1951, 2, &[]),
        ])
        .unwrap();
        assert_eq!(s.start_year(), 1950);
        assert_eq!(s.end_year(), 1952);
        assert_eq!(s.years().collect::<Vec<_>>(), vec![1950, 1951, 1952]);
    }

    #[test]
    fn snapshot_at_is_exact_match_only() {
        let s = PopulationSeries::new(vec![snap(1950, 1, &[]), snap(1952, 2, &[])]).unwrap();
        assert_eq!(s.snapshot_at(1950).map(|x| x.total), Some(1));
        assert!(s.snapshot_at(1951).is_none());
    }

    #[test]
    fn top_names_dedupes_across_snapshots() {
        let s = PopulationSeries::new(vec![
            snap(1950, 10, &[("China", 6), ("India", 4)]),
            snap(1951, 11, &[("India", 6), ("China", 5)]),
        ])
        .unwrap();
        assert_eq!(s.top_names(), vec!["China".to_string(), "India".to_string()]);
    }

    #[test]
    fn top_names_ignores_entries_past_top_n() {
        let names: Vec<(String, u64)> =
            (0..20).map(|i| (format!("c{i:02}"), 100 - i)).collect();
        let refs: Vec<(&str, u64)> = names.iter().map(|(n, p)| (n.as_str(), *p)).collect();
        let s = PopulationSeries::new(vec![snap(1950, 1, &refs)]).unwrap();
        assert_eq!(s.top_names().len(), TOP_N);
    }

    #[test]
    fn apply_flag_touches_only_the_named_country() {
        let mut s = PopulationSeries::new(vec![
            snap(1950, 10, &[("China", 6), ("India", 4)]),
            snap(1951, 11, &[("China", 7), ("India", 4)]),
        ])
        .unwrap();
        s.apply_flag("India", "https://flagcdn.com/in.svg");
        for year in [1950, 1951] {
            let snap = s.snapshot_at(year).unwrap();
            assert_eq!(snap.countries[0].flag_url, PLACEHOLDER_FLAG_URL);
            assert_eq!(snap.countries[1].flag_url, "https://flagcdn.com/in.svg");
        }
    }
}
