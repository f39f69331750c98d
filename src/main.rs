//! Mole Duel entry point
//!
//! Headless native host: loads settings, checks assets, then runs the
//! simulation loop with the autoplay bots standing in for the two players.
//! Cues go to a logging sink; the final snapshot can be dumped as JSON.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result, bail};
    use clap::Parser;
    use glam::Vec2;

    use mole_duel::Settings;
    use mole_duel::audio::{AudioManager, CueSink, MUSIC_TRACK, PlaybackRequest};
    use mole_duel::consts::{MALLET_FOOTPRINT, MAX_FRAME_DT};
    use mole_duel::demo::{Autopilot, DemoConfig};
    use mole_duel::sim::{FrameSnapshot, RoundSession, TickOutcome, step};
    use mole_duel::ui::Layout;

    #[derive(Parser)]
    #[command(name = "mole-duel")]
    #[command(about = "Two-player whack-a-mole, played headless by autoplay bots")]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Settings file (JSON)
        #[arg(long, default_value = "mole-duel.json")]
        settings: PathBuf,
        /// Frame rate override (otherwise from settings)
        #[arg(long)]
        fps: Option<u32>,
        /// Mallet sprite width in pixels
        #[arg(long, default_value_t = MALLET_FOOTPRINT.0)]
        mallet_width: f32,
        /// Mallet sprite height in pixels
        #[arg(long, default_value_t = MALLET_FOOTPRINT.1)]
        mallet_height: f32,
        /// Asset directory to verify before starting
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Rounds the bots play before choosing Exit
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Pause at this many seconds left, visit the menu, then resume
        #[arg(long)]
        pause_at: Option<u32>,
        /// Hard frame limit
        #[arg(long, default_value_t = 100_000)]
        max_frames: u64,
        /// Pace frames in real time instead of running flat out
        #[arg(long)]
        realtime: bool,
        /// Print the final snapshot as JSON
        #[arg(long)]
        dump_snapshot: bool,
    }

    /// Sink that logs requests and counts them per cue
    #[derive(Default)]
    struct LogSink {
        counts: BTreeMap<&'static str, u32>,
    }

    impl CueSink for LogSink {
        fn play(&mut self, request: PlaybackRequest) {
            log::debug!(
                "play {} ({}) at {:.2}",
                request.cue.as_str(),
                request.file,
                request.volume
            );
            *self.counts.entry(request.cue.as_str()).or_default() += 1;
        }
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let mut settings = Settings::load(&args.settings);
        if let Some(fps) = args.fps {
            settings.target_fps = fps;
            settings.sanitize();
        }
        settings.validate().context("key bindings")?;

        if let Some(root) = &args.assets {
            mole_duel::assets::verify(root).context("asset check failed, not starting")?;
        }

        if args.mallet_width <= 0.0 || args.mallet_height <= 0.0 {
            bail!(
                "mallet size must be positive, got {}x{}",
                args.mallet_width,
                args.mallet_height
            );
        }
        let layout =
            Layout::with_mallet_footprint(Vec2::new(args.mallet_width, args.mallet_height));
        layout.validate().context("screen layout")?;

        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
        log::info!("Mole Duel starting (seed {seed})");

        let audio = AudioManager::from_settings(&settings);
        log::info!("Music {} at {:.2}", MUSIC_TRACK, audio.music_volume());

        let demo = DemoConfig {
            rounds: args.rounds,
            pause_detour_at: args.pause_at,
        };
        let mut bot = Autopilot::new(seed, &demo);
        let mut session = RoundSession::with_layout(seed, layout);
        let mut sink = LogSink::default();
        let mut snapshot = FrameSnapshot::capture(&session);

        let fixed_dt = settings.frame_dt();
        let frame_budget = Duration::from_secs_f32(fixed_dt);
        let mut last = Instant::now();
        let mut exited = false;

        for _ in 0..args.max_frames {
            let dt = if args.realtime {
                let elapsed = last.elapsed();
                if elapsed < frame_budget {
                    std::thread::sleep(frame_budget - elapsed);
                }
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
                last = now;
                dt
            } else {
                fixed_dt
            };

            let input = bot.input(&snapshot, &settings.bindings);
            let frame = step(&mut session, &input, dt);
            audio.dispatch(&frame.cues, &mut sink);
            snapshot = frame.snapshot;

            if frame.outcome == TickOutcome::Exit {
                exited = true;
                break;
            }
        }

        if !exited {
            bail!("no exit after {} frames", args.max_frames);
        }

        log::info!(
            "Session over after {} frames: red {} blue {}",
            snapshot.frame,
            snapshot.scores.red,
            snapshot.scores.blue
        );
        for (cue, count) in &sink.counts {
            log::info!("  {cue}: {count}");
        }

        if args.dump_snapshot {
            let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
            println!("{json}");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is the product on wasm
}
