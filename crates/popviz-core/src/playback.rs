// crates/popviz-core/src/playback.rs
//
// The playback state machine: a single year cursor advanced once per fixed
// tick while playing. egui is immediate-mode, so the "repeating timer" is a
// dt accumulator owned by this controller — the UI feeds it the per-frame
// wall-clock delta and there is exactly one tick source by construction.
//
// Auto-stop is a side effect of cursor mutation (`set_cursor`), not a
// separate poll: any cursor write that lands at or past the end year cancels
// playback, so a manual pause and the end-of-series stop can never race.

/// Milliseconds between cursor increments while playing.
pub const TICK_MS: u64 = 200;

const TICK_SECS: f64 = TICK_MS as f64 / 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
}

#[derive(Clone, Debug)]
pub struct PlaybackController {
    state:      PlayState,
    cursor:     i32,
    start_year: i32,
    end_year:   i32,
    /// Seconds accumulated toward the next tick. Reset on play and pause so
    /// a stale fraction never produces an immediate increment on resume.
    tick_acc:   f64,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    /// A controller with no year range yet. `configure` is called once the
    /// series arrives; until then every command is a harmless no-op.
    pub fn new() -> Self {
        Self {
            state:      PlayState::Paused,
            cursor:     0,
            start_year: 0,
            end_year:   0,
            tick_acc:   0.0,
        }
    }

    /// Set the year range from the fetched series and rewind to the start.
    pub fn configure(&mut self, start_year: i32, end_year: i32) {
        self.start_year = start_year;
        self.end_year   = end_year;
        self.cursor     = start_year;
        self.state      = PlayState::Paused;
        self.tick_acc   = 0.0;
    }

    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Paused → Playing. Restarting from the end rewinds to the start first.
    /// On a degenerate single-year range the rewind lands at the end year and
    /// the set_cursor auto-stop drops straight back to Paused.
    pub fn play(&mut self) {
        self.state    = PlayState::Playing;
        self.tick_acc = 0.0;
        if self.cursor >= self.end_year {
            self.set_cursor(self.start_year);
        }
    }

    /// Playing → Paused. Discards the accumulated tick fraction — this is the
    /// cancellation semantic: no increment can fire after pause() returns.
    pub fn pause(&mut self) {
        self.state    = PlayState::Paused;
        self.tick_acc = 0.0;
    }

    /// Move the cursor (scrubber input or tick). Legal in any state and does
    /// not start or stop playback, with one exception: landing at or past the
    /// end year cancels playback (the auto-stop side effect).
    /// Clamped to the last available year.
    pub fn set_cursor(&mut self, year: i32) {
        self.cursor = year.min(self.end_year);
        if self.cursor >= self.end_year {
            self.pause();
        }
    }

    /// Feed the per-frame wall-clock delta. Fires one cursor increment per
    /// elapsed TICK_MS while playing; a long frame can fire several. Returns
    /// true when the cursor moved (the caller requests a repaint).
    pub fn advance(&mut self, dt_secs: f64) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }
        self.tick_acc += dt_secs;
        let mut moved = false;
        while self.tick_acc >= TICK_SECS && self.state == PlayState::Playing {
            self.tick_acc -= TICK_SECS;
            self.set_cursor(self.cursor + 1);
            moved = true;
        }
        moved
    }
}
