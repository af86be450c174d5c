//! Tunnel Runner entry point
//!
//! The browser build is driven from JavaScript through `tunnel_runner::web`.
//! Natively this runs a headless autopilot session, useful for tuning.
//!
//! Usage: `tunnel-runner [--seed N] [--tuning FILE] [--runs N] [--max-ticks N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use tunnel_runner::sim::{Frame, GameState, Polygon, TickInput};
    use tunnel_runner::{Renderer, TickDriver, Tuning};

    /// Fastest the autopilot moves the pointer per tick (world units)
    const AUTOPILOT_SPEED: f64 = 0.6;

    struct Options {
        seed: u64,
        tuning: Option<PathBuf>,
        runs: u32,
        max_ticks: u64,
    }

    fn parse_args() -> Options {
        let mut options = Options {
            seed: 12345,
            tuning: None,
            runs: 3,
            max_ticks: 20_000,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            let value = args.next();
            match (arg.as_str(), value) {
                ("--seed", Some(v)) => options.seed = v.parse().unwrap_or(options.seed),
                ("--tuning", Some(v)) => options.tuning = Some(PathBuf::from(v)),
                ("--runs", Some(v)) => options.runs = v.parse().unwrap_or(options.runs),
                ("--max-ticks", Some(v)) => {
                    options.max_ticks = v.parse().unwrap_or(options.max_ticks)
                }
                (other, _) => log::warn!("Ignoring argument {}", other),
            }
        }
        options
    }

    /// Logs progress instead of drawing
    #[derive(Default)]
    struct LogRenderer {
        frames: u64,
    }

    impl Renderer for LogRenderer {
        fn draw(&mut self, frame: &Frame<'_>) {
            self.frames += 1;
            if frame.running() && frame.points > 0 && frame.points % 500 == 0 {
                log::info!(
                    "{} points, player at ({:.2}, {:.2}), {} segments live",
                    frame.points,
                    frame.player.x,
                    frame.player.y,
                    frame.world.len()
                );
            }
        }
    }

    /// Horizontal center of a segment's gap at world-y `y`, if it spans `y`
    fn gap_center_at(segment: &Polygon, y: f64) -> Option<f64> {
        let points = segment.points();
        let (far, near) = (points[0], points[1]);
        if y < far.y || y > near.y || near.y == far.y {
            return None;
        }
        let t = (y - far.y) / (near.y - far.y);
        let left = far.x + (near.x - far.x) * t;
        let width = points[3].x - points[0].x;
        Some(left + width / 2.0)
    }

    /// Steer toward the gap of the newest segment covering the next position
    fn autopilot(state: &GameState) -> Option<f64> {
        let y = state.player.y - state.tuning.scroll_step;
        let target = state
            .world
            .iter()
            .rev()
            .find_map(|segment| gap_center_at(segment, y))?;
        let dx = (target - state.player.x).clamp(-AUTOPILOT_SPEED, AUTOPILOT_SPEED);
        Some(state.player.x + dx)
    }

    pub fn run() {
        env_logger::init();
        log::info!("Tunnel Runner (native) starting...");

        let options = parse_args();
        let tuning = match &options.tuning {
            Some(path) => Tuning::load_or_default(path),
            None => Tuning::default(),
        };

        let mut state = GameState::new(options.seed, tuning);
        let mut driver = TickDriver::new(state.tuning.tick_interval_ms);
        let mut renderer = LogRenderer::default();
        let mut input = TickInput::default();
        // Headless: feed exactly one tick period per step
        let period = f64::from(state.tuning.tick_interval_ms) / 1000.0;

        driver.start();
        for run in 0..options.runs {
            if run > 0 {
                input.restart = true;
            }
            let mut ticks = 0;
            while ticks < options.max_ticks {
                input.pointer_x = if state.is_running() {
                    autopilot(&state)
                } else {
                    None
                };
                driver.advance(period, &mut state, &mut input, &mut renderer);
                ticks += 1;
                if !state.is_running() {
                    break;
                }
            }
            log::info!(
                "Run {} finished: {} points, width {:.3}, {} segments evicted",
                state.run,
                state.points,
                state.generator.width(),
                state.evicted
            );
            if state.is_running() {
                log::info!("Tick limit reached, stopping");
                break;
            }
        }
        driver.stop();

        println!(
            "Best score: {} ({} frames drawn)",
            state.best_points.max(state.points),
            renderer.frames
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is tunnel_runner::web::wasm_main, this is just to satisfy the compiler
}
