use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use thiserror::Error;
use torus_snake::config::{
    ConfigError, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_STEP_INTERVAL_MS, EngineConfig,
    GridSize, Theme, theme_by_name,
};
use torus_snake::game::{GameEngine, GameStatus, StepOutcome};
use torus_snake::input::{GameInput, poll_input};
use torus_snake::renderer;
use torus_snake::terminal_runtime::TerminalSession;
use torus_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Wrap-around snake for the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Base milliseconds between movement steps.
    #[arg(long = "speed-ms", default_value_t = DEFAULT_STEP_INTERVAL_MS)]
    speed_ms: u64,

    /// Color theme: classic, nokia, or neon.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = EngineConfig {
        grid: GridSize {
            width: cli.width,
            height: cli.height,
        },
        base_step_interval: Duration::from_millis(cli.speed_ms),
        ..EngineConfig::default()
    };
    config.validate()?;
    let theme = theme_by_name(&cli.theme)?;

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut engine, theme)?;
    Ok(())
}

fn run(
    session: &mut TerminalSession,
    engine: &mut GameEngine,
    theme: &'static Theme,
) -> io::Result<()> {
    let mut last_step = Instant::now();
    let mut score_flash = None;

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                engine,
                &HudInfo {
                    theme,
                    score_flash,
                    now: Instant::now(),
                },
            )
        })?;

        if let Some(input) = poll_input()? {
            match input {
                GameInput::Quit => break,
                GameInput::Confirm => match engine.status {
                    GameStatus::NotStarted => {
                        engine.start();
                        last_step = Instant::now();
                    }
                    GameStatus::GameOver => {
                        engine.reset();
                        engine.start();
                        last_step = Instant::now();
                    }
                    _ => {}
                },
                GameInput::Pause => engine.toggle_pause(),
                GameInput::Direction(direction) => engine.request_direction(direction),
            }
        }

        // The engine owns the cadence: speed may shrink on every food eaten,
        // so the interval is re-read from it on each pass.
        if last_step.elapsed() >= engine.speed {
            if engine.step() == StepOutcome::AteFood {
                score_flash = Some(Instant::now());
            }
            last_step = Instant::now();
        }

        thread::sleep(Duration::from_millis(8));
    }

    Ok(())
}
