//! Fixed-rate synchronous frame loop: poll input, step the world,
//! render, pace. One iteration per frame, no async.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::core::assets::SpriteSet;
use crate::core::audio::AudioSystem;
use crate::core::highscore::HighScoreStore;
use crate::game::renderer;
use crate::game::state::{GameState, Phase, CART_SPEED};

pub const FPS: u64 = 60;
const FRAME_BUDGET: Duration = Duration::from_millis(1000 / FPS);
/// How long the final summary stays on screen before the process exits.
const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

pub struct Engine {
    sprites: SpriteSet,
    audio: Option<AudioSystem>,
    store: HighScoreStore,
}

impl Engine {
    pub fn new(sprites: SpriteSet, audio: Option<AudioSystem>, store: HighScoreStore) -> Self {
        Self {
            sprites,
            audio,
            store,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        crossterm::execute!(io::stdout(), event::EnableMouseCapture)?;
        let result = self.run_screens(&mut terminal);
        crossterm::execute!(io::stdout(), event::DisableMouseCapture)?;
        result
    }

    fn run_screens(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut state = GameState::new(self.store.load());

        if !self.name_entry(terminal, &mut state)? {
            return Ok(());
        }

        self.play(terminal, &mut state)?;
        self.game_over(terminal, &state)
    }

    /// Title screen: collect a non-empty player name, confirmed with
    /// Enter or a click on the Start button. Returns false on quit.
    fn name_entry(&mut self, terminal: &mut DefaultTerminal, state: &mut GameState) -> Result<bool> {
        let mut start_button = Rect::default();
        loop {
            terminal.draw(|f| {
                start_button = renderer::draw_name_entry(f, &state.player_name);
            })?;

            if !event::poll(Duration::from_millis(16))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Esc => return Ok(false),
                    KeyCode::Enter if !state.player_name.is_empty() => break,
                    KeyCode::Backspace => {
                        state.player_name.pop();
                    }
                    KeyCode::Char(c) => state.player_name.push(c),
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if start_button.contains(Position::new(column, row))
                        && !state.player_name.is_empty()
                    {
                        break;
                    }
                }
                _ => {}
            }
        }

        state.start();
        info!(player = %state.player_name, "run started");
        Ok(true)
    }

    fn play(&mut self, terminal: &mut DefaultTerminal, state: &mut GameState) -> Result<()> {
        let mut rng = rand::rng();

        while state.phase == Phase::Playing {
            let frame_start = Instant::now();

            // drain everything queued since the last frame
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release {
                        self.handle_key(key, state);
                    }
                }
            }
            if state.phase != Phase::Playing {
                break;
            }

            state.step(&mut rng);

            terminal.draw(|f| renderer::draw_playing(f, state, &self.sprites))?;

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_BUDGET {
                std::thread::sleep(FRAME_BUDGET - elapsed);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, state: &mut GameState) {
        match key.code {
            // quit plays out as a regular game over
            KeyCode::Esc => state.phase = Phase::GameOver,
            KeyCode::Char(' ') => {
                let enabled = state.toggle_autopilot();
                if let Some(audio) = self.audio.as_mut() {
                    if let Err(err) = audio.play_toggle() {
                        warn!(%err, "toggle sound failed to play");
                    }
                }
                info!(enabled, "autopilot toggled");
            }
            KeyCode::Left if !state.autopilot => state.steer(-CART_SPEED),
            KeyCode::Right if !state.autopilot => state.steer(CART_SPEED),
            _ => {}
        }
    }

    /// Final summary: persist the high score when beaten, hold the
    /// frame, then fall through to process exit.
    fn game_over(&mut self, terminal: &mut DefaultTerminal, state: &GameState) -> Result<()> {
        match self.store.record(state.score, state.high_score) {
            Ok(true) => info!(score = state.score, "new high score"),
            Ok(false) => {}
            Err(err) => warn!(%err, "could not persist high score"),
        }

        terminal.draw(|f| renderer::draw_game_over(f, state))?;
        std::thread::sleep(GAME_OVER_HOLD);
        Ok(())
    }
}
