// crates/popviz-ui/src/helpers/palette.rs
//
// Stable per-country bar colors. The chart re-sorts every year, so colors
// must follow the country, not the rank — hash the name into a fixed palette
// and the same country keeps its color across the whole run.

use egui::Color32;

/// 12 distinguishable hues on the dark theme, one per visible bar slot in the
/// worst case. Collisions are acceptable (two countries sharing a hue), bar
/// identity is carried by the label and flag.
pub const BAR_COLORS: [Color32; 12] = [
    Color32::from_rgb( 86, 156, 214),
    Color32::from_rgb(220, 120,  86),
    Color32::from_rgb( 96, 186, 120),
    Color32::from_rgb(214, 170,  80),
    Color32::from_rgb(170, 120, 220),
    Color32::from_rgb( 80, 190, 190),
    Color32::from_rgb(220,  96, 140),
    Color32::from_rgb(140, 180,  80),
    Color32::from_rgb(120, 140, 230),
    Color32::from_rgb(230, 150, 110),
    Color32::from_rgb( 90, 170, 150),
    Color32::from_rgb(200, 110, 200),
];

/// The bar color for `name`. FNV-1a over the name bytes — cheap, stable
/// across runs, and spreads typical country names well across the palette.
pub fn country_color(name: &str) -> Color32 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in name.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    BAR_COLORS[(hash % BAR_COLORS.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_color() {
        assert_eq!(country_color("India"), country_color("India"));
    }

    #[test]
    fn color_comes_from_the_palette() {
        for name in ["China", "India", "United States", "Indonesia", "Brazil"] {
            assert!(BAR_COLORS.contains(&country_color(name)));
        }
    }

    #[test]
    fn many_names_do_not_collapse_to_one_hue() {
        let mut distinct: Vec<Color32> = (0..64)
            .map(|i| country_color(&format!("country-{i}")))
            .collect();
        distinct.sort_by_key(|c| (c.r(), c.g(), c.b()));
        distinct.dedup();
        assert!(distinct.len() > 1);
    }
}
