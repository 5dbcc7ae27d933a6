// crates/popviz-ui/src/modules/transport.rs
//
// Playback controls: play/pause button, the year scrubber, and the painted
// year-tick ruler under it. Scrubbing is legal in any state — it emits
// SetCursor only, never Play or Pause.

use super::{FlagCache, RaceModule};
use crate::theme::{ACCENT, DARK_BORDER, DARK_TEXT_DIM};
use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2};
use popviz_core::commands::ChartCommand;
use popviz_core::state::ChartState;

// ── Layout constants ──────────────────────────────────────────────────────────
const BTN_W:    f32 = 64.0; // play/pause button width
const RULER_H:  f32 = 26.0; // painted year-tick ruler height
const TICK_H:   f32 = 5.0;  // unlabeled tick line height
const MAJOR_H:  f32 = 9.0;  // labeled tick line height

/// Standard transport button — consistent height, icon-forward.
fn tool_btn(label: impl Into<egui::WidgetText>) -> egui::Button<'static> {
    egui::Button::new(label).min_size(egui::vec2(BTN_W, 28.0))
}

pub struct TransportModule;

impl RaceModule for TransportModule {
    fn name(&self) -> &str {
        "Transport"
    }

    fn ui(&mut self, ui: &mut Ui, state: &ChartState, _flags: &FlagCache, cmd: &mut Vec<ChartCommand>) {
        let Some(frame) = state.frame() else {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Loading…").size(12.0).weak());
            });
            return;
        };
        let pb = &state.playback;

        // ── Keyboard ─────────────────────────────────────────────────────────
        if ui.input(|i| i.key_pressed(egui::Key::Space)) {
            if pb.is_playing() {
                cmd.push(ChartCommand::Pause);
            } else {
                cmd.push(ChartCommand::Play);
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            // ── Play / pause ─────────────────────────────────────────────────
            if ui
                .add(tool_btn(if pb.is_playing() { "⏸" } else { "▶" }))
                .on_hover_text("Play / pause  [Space]")
                .clicked()
            {
                if pb.is_playing() {
                    cmd.push(ChartCommand::Pause);
                } else {
                    cmd.push(ChartCommand::Play);
                }
            }

            // ── Scrubber + ruler ─────────────────────────────────────────────
            ui.vertical(|ui| {
                let mut year = pb.cursor();
                ui.spacing_mut().slider_width = ui.available_width() - 8.0;
                let changed = ui
                    .add(
                        egui::Slider::new(&mut year, pb.start_year()..=pb.end_year())
                            .show_value(false),
                    )
                    .changed();
                if changed && year != pb.cursor() {
                    cmd.push(ChartCommand::SetCursor(year));
                }

                draw_year_ruler(ui, &frame.ticks, pb.cursor());
            });
        });
        ui.add_space(4.0);
    }
}

/// One tick per year across the slider width, every 4th labeled (the view
/// projection decides which). The cursor year's tick is accented.
fn draw_year_ruler(ui: &mut Ui, ticks: &[popviz_core::view::YearTick], cursor: i32) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width() - 8.0, RULER_H),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    painter.line_segment(
        [rect.left_top(), Pos2::new(rect.right(), rect.top())],
        Stroke::new(1.0, DARK_BORDER),
    );

    let span = (ticks.len().saturating_sub(1)).max(1) as f32;
    for (i, tick) in ticks.iter().enumerate() {
        let x = rect.left() + rect.width() * (i as f32 / span);
        let h = if tick.labeled { MAJOR_H } else { TICK_H };
        let color = if tick.year == cursor { ACCENT } else { Color32::from_gray(90) };
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.top() + h)],
            Stroke::new(1.0, color),
        );
        if tick.labeled {
            painter.text(
                Pos2::new(x, rect.top() + MAJOR_H + 2.0),
                Align2::CENTER_TOP,
                tick.year.to_string(),
                FontId::proportional(9.0),
                DARK_TEXT_DIM,
            );
        }
    }
}
