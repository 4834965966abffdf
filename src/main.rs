//! Terminal 2048 runner (default binary).
//!
//! Event driven: block on the next terminal event, apply it to the game, then
//! redraw. Nothing happens between key presses.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, LevelFilter};

use tui_2048::config::Config;
use tui_2048::core::{GameState, MoveOutcome, SimpleRng};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::share::{publish_pending, JsonlShare, SharePost, ShareSink, StdoutShare};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    info!("starting: seed={} target={}", config.seed, config.target);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut pending = Vec::new();
    let result = run(&mut term, &config, &mut pending);

    // Always try to restore terminal state.
    let _ = term.exit();

    publish_pending(result, &pending, || open_sink(&config))
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, pending: &mut Vec<SharePost>) -> Result<()> {
    let mut game = GameState::with_rng(SimpleRng::new(config.seed), config.target);
    let view = GameView::default();
    let mut was_won = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(_, _) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if should_quit(key) {
            info!("quit at score {} after {} moves", game.score(), game.moves());
            return Ok(());
        }

        match handle_key_event(key) {
            Some(GameAction::Move(dir)) => match game.apply_move(dir) {
                MoveOutcome::Moved { gained, .. } => {
                    debug!("{}: +{} -> score {}", dir.as_str(), gained, game.score());
                    if game.won() && !was_won {
                        info!("reached {} after {} moves", game.target(), game.moves());
                    }
                    if game.game_over() {
                        info!("game over: score {} max tile {}", game.score(), game.grid().max_tile());
                    }
                }
                MoveOutcome::Blocked => debug!("{}: blocked", dir.as_str()),
                MoveOutcome::Finished => {}
            },
            Some(GameAction::Restart) => {
                game.restart();
                info!("restart: episode {}", game.episode_id());
            }
            Some(GameAction::Share) => {
                if let Some(post) = SharePost::from_game(&game) {
                    if pending.iter().all(|p| p.episode_id != post.episode_id) {
                        info!("queued share for episode {}", post.episode_id);
                        pending.push(post);
                    }
                }
            }
            None => {}
        }
        was_won = game.won();
    }
}

/// Sink for queued posts; only opened once the terminal is restored.
fn open_sink(config: &Config) -> Result<Box<dyn ShareSink>> {
    let sink: Box<dyn ShareSink> = match &config.share_path {
        Some(path) => Box::new(JsonlShare::open(path)?),
        None => Box::new(StdoutShare),
    };
    Ok(sink)
}
