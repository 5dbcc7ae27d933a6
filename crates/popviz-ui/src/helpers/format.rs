// crates/popviz-ui/src/helpers/format.rs
//
// UI-layer string utilities that don't belong in popviz-core.
//
// Number formatting lives in popviz_core::helpers::format — use that for
// anything involving population counts. This module holds utilities that are
// purely about rendering strings in the UI and have no meaning outside of a
// display context.

/// Truncates `text` to fit within `max_px` using a per-character width
/// heuristic (12px proportional ≈ 7 px/char average). Appends "…" when
/// truncated. Avoids egui font measurement, which requires `&mut Fonts`.
///
/// Used by the chart's country labels, which share a fixed-width column
/// regardless of name length.
pub fn fit_label(text: &str, max_px: f32) -> String {
    const AVG_CHAR_PX: f32 = 7.0;
    const ELLIPSIS: &str = "…";
    let max_chars = (max_px / AVG_CHAR_PX).max(0.0) as usize;
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    // Reserve one slot for the ellipsis character itself.
    let keep = max_chars.saturating_sub(1);
    text.chars().take(keep).collect::<String>() + ELLIPSIS
}
