// crates/popviz-core/src/helpers/format.rs
//
// Shared number-formatting utilities used by the view projection and the
// chart's value labels.
//
// Canonical source for group_thousands() — the chart subtitle and every bar
// label go through it, so the grouping style changes in exactly one place.

/// Format an integer with comma thousands separators.
///
/// ```
/// use popviz_core::helpers::format::group_thousands;
/// assert_eq!(group_thousands(0),             "0");
/// assert_eq!(group_thousands(999),           "999");
/// assert_eq!(group_thousands(1_000),         "1,000");
/// assert_eq!(group_thousands(2_536_274_721), "2,536,274,721");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
