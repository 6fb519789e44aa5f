//! Coin Run entry point
//!
//! Headless native demo: runs a scripted session through the frame driver
//! and logs each HUD snapshot as it is emitted. A graphical host would
//! wire the same pieces to a real event loop and a rasterizer.

use coin_run::Tuning;
use coin_run::consts::FRAME_INTERVAL_MS;
use coin_run::driver::{FrameDriver, Host};
use coin_run::hud::{HudEmitter, StatsSink};
use coin_run::renderer;
use coin_run::sim::{GameState, StatsSnapshot, TickInput, tick};

struct LogSink;

impl StatsSink for LogSink {
    fn publish(&mut self, snap: &StatsSnapshot) {
        log::info!(
            "score {:>5}  coins {}  lives {}  time {:>6.2}s  world 1-{}{}",
            snap.score,
            snap.coins,
            snap.lives,
            snap.time_secs,
            snap.level,
            if snap.won { "  (complete!)" } else { "" }
        );
    }
}

struct DemoHost {
    state: GameState,
    tuning: Tuning,
    input: TickInput,
    emitter: HudEmitter,
    sink: LogSink,
    last_vertex_count: usize,
}

impl Host for DemoHost {
    fn step(&mut self, dt: f32) {
        if let Some(snap) = tick(&mut self.state, &self.input, dt, &self.tuning) {
            self.emitter.emit(snap, &mut self.sink);
        }
    }

    fn render(&mut self) {
        let commands = renderer::render(&self.state);
        self.last_vertex_count = renderer::tessellate(&commands).len();
    }
}

fn main() {
    env_logger::init();
    log::info!("Coin Run (headless demo) starting...");

    let mut host = DemoHost {
        state: GameState::new(),
        tuning: Tuning::default(),
        // hold right the whole run: crosses the first platform stretch and
        // eventually drops into the pit
        input: TickInput {
            right: true,
            ..TickInput::default()
        },
        emitter: HudEmitter::new(),
        sink: LogSink,
        last_vertex_count: 0,
    };

    let mut driver = FrameDriver::new();
    for frame in 0..600u32 {
        driver.frame(frame as f64 * FRAME_INTERVAL_MS, &mut host);
    }
    driver.stop();

    log::info!(
        "demo finished at x {:.1} with {} vertices in the last frame",
        host.state.player.pos.x,
        host.last_vertex_count
    );
}
