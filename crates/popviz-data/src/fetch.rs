// crates/popviz-data/src/fetch.rs
//
// HTTP + JSON for the two external endpoints. Wire structs are private to
// this module — the rest of the app only ever sees popviz-core types.

use anyhow::{Context, Result};
use popviz_core::series::{CountryEntry, PopulationSeries, Snapshot, PLACEHOLDER_FLAG_URL};
use serde::Deserialize;

/// The population-series endpoint. Fetched exactly once on startup.
const POPULATION_URL: &str = "https://sgn-exam-api-rr5efoci2a-as.a.run.app/api/population";

/// Per-country flag lookup, `{}` replaced by the percent-encoded name.
const FLAG_LOOKUP_URL: &str = "https://restcountries.com/v3.1/name/{}?fullText=true";

// ── Wire format ───────────────────────────────────────────────────────────────
// { "data": [ { "year", "total", "country": [ { "name", "population" } ] } ] }

#[derive(Deserialize)]
struct WirePayload {
    data: Vec<WireSnapshot>,
}

#[derive(Deserialize)]
struct WireSnapshot {
    year:    i32,
    total:   u64,
    country: Vec<WireCountry>,
}

#[derive(Deserialize)]
struct WireCountry {
    name:       String,
    population: u64,
}

// restcountries: an array whose first element carries flags.svg.

#[derive(Deserialize)]
struct WireFlagEntry {
    flags: WireFlags,
}

#[derive(Deserialize)]
struct WireFlags {
    svg: String,
}

// ── Series ────────────────────────────────────────────────────────────────────

/// GET the population series and build the validated core model.
pub fn fetch_series() -> Result<PopulationSeries> {
    let body = http_get_string(POPULATION_URL)
        .with_context(|| format!("GET {POPULATION_URL}"))?;
    parse_series(&body)
}

fn parse_series(body: &str) -> Result<PopulationSeries> {
    let payload: WirePayload =
        serde_json::from_str(body).context("population payload did not match wire format")?;

    let snapshots = payload
        .data
        .into_iter()
        .map(|s| Snapshot {
            year:      s.year,
            total:     s.total,
            countries: s
                .country
                .into_iter()
                .map(|c| CountryEntry {
                    name:       c.name,
                    population: c.population,
                    flag_url:   PLACEHOLDER_FLAG_URL.to_string(),
                })
                .collect(),
        })
        .collect();

    // Fail fast on an empty series — every consumer assumes year bounds exist.
    PopulationSeries::new(snapshots).context("population payload contained no snapshots")
}

// ── Flags ─────────────────────────────────────────────────────────────────────

/// Resolve one country's flag: the SVG URL from the lookup endpoint, then the
/// SVG bytes themselves so the UI can display the image directly.
pub fn fetch_flag(name: &str) -> Result<(String, Vec<u8>)> {
    let lookup = FLAG_LOOKUP_URL.replace("{}", &encode_country_name(name));
    let body   = http_get_string(&lookup).with_context(|| format!("GET {lookup}"))?;
    let url    = parse_flag_url(&body)?;
    let bytes  = http_get_bytes(&url).with_context(|| format!("GET {url}"))?;
    Ok((url, bytes))
}

fn parse_flag_url(body: &str) -> Result<String> {
    let entries: Vec<WireFlagEntry> =
        serde_json::from_str(body).context("flag lookup did not match wire format")?;
    entries
        .into_iter()
        .next()
        .map(|e| e.flags.svg)
        .context("flag lookup returned no entries")
}

/// Country names go into the lookup path verbatim apart from spaces
/// ("United States" → "United%20States"). The API accepts everything else
/// in the source data as-is.
fn encode_country_name(name: &str) -> String {
    name.replace(' ', "%20")
}

// ── HTTP plumbing ─────────────────────────────────────────────────────────────

fn http_get_string(url: &str) -> Result<String> {
    let resp = ureq::get(url).call()?;
    Ok(resp.into_body().read_to_string()?)
}

fn http_get_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = ureq::get(url).call()?;
    Ok(resp.into_body().read_to_vec()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_YEARS: &str = r#"{
        "data": [
            { "year": 1951, "total": 110,
              "country": [ { "name": "India", "population": 55 } ] },
            { "year": 1950, "total": 100,
              "country": [ { "name": "China", "population": 60 },
                           { "name": "India", "population": 50 } ] }
        ]
    }"#;

    #[test]
    fn parse_series_maps_and_sorts() {
        let series = parse_series(TWO_YEARS).unwrap();
        assert_eq!(series.start_year(), 1950);
        assert_eq!(series.end_year(), 1951);

        let snap = series.snapshot_at(1950).unwrap();
        assert_eq!(snap.total, 100);
        assert_eq!(snap.countries[0].name, "China");
        assert_eq!(snap.countries[0].population, 60);
        assert_eq!(snap.countries[0].flag_url, PLACEHOLDER_FLAG_URL);
    }

    #[test]
    fn parse_series_rejects_empty_data() {
        let err = parse_series(r#"{ "data": [] }"#).unwrap_err();
        assert!(err.to_string().contains("no snapshots"));
    }

    #[test]
    fn parse_series_rejects_malformed_payload() {
        assert!(parse_series(r#"{ "rows": [] }"#).is_err());
        assert!(parse_series("not json").is_err());
    }

    #[test]
    fn parse_flag_url_takes_the_first_entry() {
        let body = r#"[
            { "flags": { "png": "a.png", "svg": "https://flagcdn.com/th.svg" } },
            { "flags": { "svg": "https://flagcdn.com/other.svg" } }
        ]"#;
        assert_eq!(parse_flag_url(body).unwrap(), "https://flagcdn.com/th.svg");
    }

    #[test]
    fn parse_flag_url_rejects_empty_array() {
        assert!(parse_flag_url("[]").is_err());
    }

    #[test]
    fn country_names_with_spaces_are_encoded() {
        assert_eq!(encode_country_name("United States"), "United%20States");
        assert_eq!(encode_country_name("China"), "China");
    }
}
