// crates/popviz-ui/src/app.rs (popviz-ui)
use crate::context::AppContext;
use crate::modules::{chart_module::ChartModule, transport::TransportModule, RaceModule};
use crate::theme::{configure_style, ACCENT};
use eframe::egui;
use popviz_core::commands::ChartCommand;
use popviz_core::state::ChartState;
use popviz_data::DataWorker;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct PopVizApp {
    state:        ChartState,
    context:      AppContext,
    // Panel modules as concrete types — a typo'd module is a compile error,
    // not a silently blank panel.
    chart:        ChartModule,
    transport:    TransportModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<ChartCommand>,
}

impl PopVizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS
        // light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        // The one and only series fetch. No retry: a failure leaves the
        // loading screen up for the session.
        let data_worker = DataWorker::new();
        data_worker.fetch_series();

        Self {
            state:        ChartState::new(),
            context:      AppContext::new(data_worker),
            chart:        ChartModule,
            transport:    TransportModule,
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: ChartCommand) {
        match cmd {
            ChartCommand::Play => self.state.playback.play(),
            ChartCommand::Pause => self.state.playback.pause(),
            ChartCommand::SetCursor(year) => self.state.playback.set_cursor(year),
        }
    }

    fn poll_data(&mut self, ctx: &egui::Context) {
        self.context.ingest_data_results(&mut self.state, ctx);
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for PopVizApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.data_worker.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_data(ctx);

        egui::TopBottomPanel::top("top_panel")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("📊 PopViz")
                            .strong()
                            .size(15.0)
                            .color(ACCENT),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new("Population bar-chart race")
                            .size(12.0)
                            .weak(),
                    );
                });
            });

        egui::TopBottomPanel::bottom("transport_panel")
            .exact_height(88.0)
            .show(ctx, |ui| {
                self.transport
                    .ui(ui, &self.state, &self.context.flags, &mut self.pending_cmds);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart
                .ui(ui, &self.state, &self.context.flags, &mut self.pending_cmds);
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<ChartCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }

        // ── Playback tick ─────────────────────────────────────────────────────
        // The controller owns the tick accumulator; we just feed it wall-clock
        // time and keep frames coming while it's running.
        if self.state.playback.is_playing() {
            let dt = ctx.input(|i| i.stable_dt as f64);
            self.state.playback.advance(dt);
            ctx.request_repaint();
        }
    }
}
