mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use dino_run::compute::{init_state, tick};
use dino_run::config::Config;
use dino_run::consts::{FIELD_COLS, MIN_TERMINAL_ROWS, TICKS_PER_SECOND};
use dino_run::entities::GameEvent;
use dino_run::highscore::{FileScoreStore, HighScore};
use dino_run::input::KeyTracker;
use dino_run::GameError;

/// One tick at 60 Hz. All tuning constants assume this cadence.
const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode, so logs go to a file.
fn init_logging(config: &Config) -> Result<(), GameError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-tick loop: drain input (non-blocking) → tick → persist → render →
/// sleep out the rest of the frame. Returns when quit is requested.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
) -> Result<(), GameError> {
    let mut rng = thread_rng();
    let mut high_score = HighScore::open(FileScoreStore::new(config.score_file.clone()));
    let mut state = init_state(high_score.best(), &mut rng);
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            keys.handle(&event, frame);
        }
        if keys.quit_requested() {
            log::info!("quit requested at score {}", state.display_score());
            return Ok(());
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        let input = keys.take_input(frame);
        state = tick(&state, &input, &mut rng);
        high_score.observe(&mut state);

        for event in &state.events {
            match event {
                GameEvent::Milestone(points) => {
                    log::info!("milestone {points}, speed now {}", state.velocity)
                }
                GameEvent::GameOver { score } => log::info!("game over at {score}"),
                GameEvent::Reset => log::info!("new run"),
                GameEvent::ObstacleSpawned => {}
            }
        }

        // ── Render ────────────────────────────────────────────────────────────
        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::info!("starting, high score file {}", config.score_file.display());

    let (cols, rows) = terminal::size()?;
    if cols < FIELD_COLS || rows < MIN_TERMINAL_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            need_cols: FIELD_COLS,
            need_rows: MIN_TERMINAL_ROWS,
        });
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events; terminals without the kitty protocol
    // fall back to the hold-window model.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("exiting on error: {e}");
    }
    log::info!("shutdown");
    result
}
