// crates/popviz-ui/src/modules/chart_module.rs
//
// The bar-chart race itself: painter-drawn horizontal bars for the top
// countries of the cursor year, with the big year + total readout in the
// lower right. Bars animate toward their new length and rank whenever the
// cursor moves, so scrubbing and playback both read as one continuous race.

use super::{FlagCache, RaceModule};
use crate::helpers::format::fit_label;
use crate::helpers::palette::country_color;
use crate::theme::{ACCENT, DARK_BG_3, DARK_BORDER, DARK_TEXT, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, Id, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};
use popviz_core::commands::ChartCommand;
use popviz_core::helpers::format::group_thousands;
use popviz_core::series::TOP_N;
use popviz_core::state::ChartState;

// ── Chart layout constants ────────────────────────────────────────────────────
const LABEL_W:    f32 = 150.0; // right-aligned country names
const FLAG_SZ:    f32 = 20.0;  // flag image square
const COL_GAP:    f32 = 8.0;   // gap between label / flag / bar columns
const VALUE_PAD:  f32 = 6.0;   // gap between bar end and its value label
const ROW_PAD:    f32 = 4.0;   // vertical padding inside each rank slot
/// Bar length and rank animation time — matches the 200 ms tick closely
/// enough that playback reads as continuous motion.
const ANIM_SECS:  f32 = 0.5;

pub struct ChartModule;

impl RaceModule for ChartModule {
    fn name(&self) -> &str {
        "Chart"
    }

    fn ui(&mut self, ui: &mut Ui, state: &ChartState, flags: &FlagCache, _cmd: &mut Vec<ChartCommand>) {
        let Some(frame) = state.frame() else {
            draw_loading(ui);
            return;
        };

        // ── Header ───────────────────────────────────────────────────────────
        ui.label(
            RichText::new(format!(
                "Population growth per country, {} to {}",
                state.playback.start_year(),
                state.playback.end_year(),
            ))
            .size(15.0)
            .strong(),
        );
        ui.add_space(4.0);

        // ── Bar rows ─────────────────────────────────────────────────────────
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), ui.available_height()),
            Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        // Fixed TOP_N slots so row height doesn't jump for short snapshots.
        let row_h = rect.height() / TOP_N as f32;
        let bar_x0 = rect.left() + LABEL_W + COL_GAP + FLAG_SZ + COL_GAP;
        // Leave room for the widest value label at full bar length.
        let bar_avail = (rect.right() - bar_x0 - 120.0).max(40.0);

        // Animate values first: the length scale must track the animated
        // maximum, or the top bar would clip mid-transition.
        let animated: Vec<f32> = frame
            .bars
            .iter()
            .map(|bar| {
                ui.ctx().animate_value_with_time(
                    Id::new(("bar-value", &bar.name)),
                    bar.population as f32,
                    ANIM_SECS,
                )
            })
            .collect();
        let max_value = animated.iter().fold(1.0_f32, |m, v| m.max(*v));

        for (i, bar) in frame.bars.iter().enumerate() {
            let rank = ui.ctx().animate_value_with_time(
                Id::new(("bar-rank", &bar.name)),
                i as f32,
                ANIM_SECS,
            );
            let top    = rect.top() + rank * row_h + ROW_PAD;
            let bottom = rect.top() + (rank + 1.0) * row_h - ROW_PAD;
            let mid_y  = (top + bottom) * 0.5;

            // Country label, right-aligned against the label column edge.
            painter.text(
                Pos2::new(rect.left() + LABEL_W, mid_y),
                Align2::RIGHT_CENTER,
                fit_label(&bar.name, LABEL_W),
                FontId::proportional(12.0),
                DARK_TEXT,
            );

            // Flag — real image once the lookup resolved, neutral disc until then.
            let flag_rect = Rect::from_center_size(
                Pos2::new(rect.left() + LABEL_W + COL_GAP + FLAG_SZ * 0.5, mid_y),
                Vec2::splat(FLAG_SZ),
            );
            match flags.get(&bar.name) {
                Some(uri) => {
                    egui::Image::from_uri(uri.clone())
                        .corner_radius(FLAG_SZ * 0.5)
                        .paint_at(ui, flag_rect);
                }
                None => {
                    painter.circle_filled(flag_rect.center(), FLAG_SZ * 0.4, DARK_BG_3);
                    painter.circle_stroke(
                        flag_rect.center(),
                        FLAG_SZ * 0.4,
                        Stroke::new(1.0, DARK_BORDER),
                    );
                }
            }

            // The bar and its value label.
            let w = (animated[i] / max_value) * bar_avail;
            let bar_rect = Rect::from_min_max(
                Pos2::new(bar_x0, top),
                Pos2::new(bar_x0 + w.max(1.0), bottom),
            );
            painter.rect_filled(bar_rect, 3.0, country_color(&bar.name));
            painter.text(
                Pos2::new(bar_rect.right() + VALUE_PAD, mid_y),
                Align2::LEFT_CENTER,
                group_thousands(bar.population),
                FontId::proportional(11.0),
                DARK_TEXT_DIM,
            );
        }

        // ── Year + total readout, lower right ────────────────────────────────
        painter.text(
            rect.right_bottom() - Vec2::new(10.0, 30.0),
            Align2::RIGHT_BOTTOM,
            frame.year.to_string(),
            FontId::proportional(60.0),
            DARK_TEXT_DIM.gamma_multiply(0.9),
        );
        if !frame.total_label.is_empty() {
            painter.text(
                rect.right_bottom() - Vec2::new(10.0, 8.0),
                Align2::RIGHT_BOTTOM,
                &frame.total_label,
                FontId::proportional(16.0),
                DARK_TEXT,
            );
        }
    }
}

/// Centered spinner shown until the primary fetch resolves. Also what a
/// failed fetch leaves on screen — there is no separate error state.
fn draw_loading(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), ui.available_height()),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    painter.text(
        rect.center() - Vec2::new(0.0, 26.0),
        Align2::CENTER_CENTER,
        "Fetching population data…",
        FontId::proportional(13.0),
        Color32::from_gray(110),
    );

    let t  = ui.input(|i| i.time) as f32;
    let cx = rect.center() + Vec2::new(0.0, 10.0);
    let r  = 12.0_f32;
    painter.circle_stroke(cx, r, Stroke::new(1.5, Color32::from_gray(40)));
    let a = t * 3.5;
    painter.line_segment(
        [cx, cx + Vec2::new(a.cos() * r, a.sin() * r)],
        Stroke::new(2.0, ACCENT),
    );
    ui.ctx().request_repaint();
}
