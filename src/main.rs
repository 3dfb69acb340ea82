mod display;
mod keys;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tile_dash::compute::{init_state, tick};
use tile_dash::config::GameConfig;
use tile_dash::entities::GameState;

use crate::keys::{HostCommand, KeyTracker};

/// Terminal side-scrolling platformer.
#[derive(Parser)]
#[command(version, about = "Run right, stomp, collect coins, reach the flag.")]
struct Cli {
    /// INI file with [game] and [display] sections.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Lives per session.
    #[arg(long)]
    lives: Option<u32>,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Fixed RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (the terminal itself is taken by the game).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Defaults → INI file → command line.
fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = GameConfig::new();
            config.load_if_present()?;
            config
        }
    };

    if let Some(lives) = cli.lives {
        config.lives = lives;
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Input is drained without blocking at the top
/// of each frame and sampled once, so the tick always sees the latest state.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let frame = config.frame_duration();
    let mut keys = KeyTracker::new();
    let (mut cols, _) = terminal::size()?;
    state.view_width = display::view_width_for(cols);

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => {
                    if keys.handle(key, frame_start) == Some(HostCommand::Quit) {
                        return Ok(());
                    }
                }
                Event::Resize(width, _) => {
                    cols = width;
                    state.view_width = display::view_width_for(cols);
                }
                _ => {}
            }
        }

        let held = keys.sample(frame_start);
        tick(state, &held, rng);
        display::render(out, state, cols)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let config = load_config(&cli)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "starting: lives={}, fps={}, seed={:?}",
        config.lives, config.fps, config.seed
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    let mut keyboard_enhanced = false;
    let result = run(&mut out, &config, &mut rng, &mut keyboard_enhanced);

    // Restore the terminal whatever `run` returned.
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let score = result.context("terminal I/O failed")?;
    info!("exiting with score {}", score);
    Ok(())
}

/// Everything that runs on the alternate screen.  Returns the final score.
fn run<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    keyboard_enhanced: &mut bool,
) -> std::io::Result<u32> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events let held keys drop immediately; unsupported terminals
    // fall back to the key tracker's hold window.
    *keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread; the frame loop only drains.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // game loop is gone
                }
            }
            Err(_) => break,
        }
    });

    let mut state = init_state(config.lives, 0.0, rng);
    game_loop(out, &mut state, &rx, config, rng)?;
    Ok(state.player.score)
}
