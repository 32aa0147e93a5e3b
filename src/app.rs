use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::session::clock::{Clock, SystemClock};
use crate::session::input::CommitEvent;
use crate::session::{SessionEngine, SessionResult, Snapshot, Update};
use crate::store::{KeyValueStore, Leaderboard, LeaderboardEntry, StoreError};
use crate::ui::line_input::{InputResult, LineInput};
use crate::ui::theme::Theme;
use crate::vocabulary::{Tier, VocabularyProvider};

pub const MAX_NAME_CHARS: usize = 24;
pub const SAVED_NOTICE: &str = "Score saved to leaderboard!";
pub const EMPTY_NAME_ERROR: &str = "Please enter your name";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Game,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Save-score prompt shown over the game-over screen.
pub struct NameDialog {
    pub input: LineInput,
    pub error: Option<String>,
}

pub struct App<C: Clock = SystemClock> {
    pub screen: AppScreen,
    pub tier: Tier,
    pub engine: SessionEngine<C>,
    pub leaderboard: Leaderboard<Box<dyn KeyValueStore>>,
    /// Top entries for `tier`, re-queried whenever the board may change.
    pub board: Vec<LeaderboardEntry>,
    /// Text of the typing input control.
    pub input: String,
    pub snapshot: Option<Snapshot>,
    pub last_commit: Option<CommitEvent>,
    pub last_result: Option<SessionResult>,
    pub name_dialog: Option<NameDialog>,
    pub notice: Option<Notice>,
    pub theme: Theme,
    pub config: Config,
    config_path: Option<PathBuf>,
    pub should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(config: Config, config_path: Option<PathBuf>, store: Box<dyn KeyValueStore>) -> Self {
        let engine = SessionEngine::new(VocabularyProvider::new(), config.session_config());
        Self::with_engine(config, config_path, store, engine)
    }
}

impl<C: Clock> App<C> {
    pub fn with_engine(
        config: Config,
        config_path: Option<PathBuf>,
        store: Box<dyn KeyValueStore>,
        engine: SessionEngine<C>,
    ) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_else(|| {
            log::warn!("theme '{}' not found, using default", config.theme);
            Theme::default()
        });
        let leaderboard = Leaderboard::with_limit(store, config.leaderboard_size);

        let mut app = Self {
            screen: AppScreen::Menu,
            tier: config.tier,
            engine,
            leaderboard,
            board: Vec::new(),
            input: String::new(),
            snapshot: None,
            last_commit: None,
            last_result: None,
            name_dialog: None,
            notice: None,
            theme,
            config,
            config_path,
            should_quit: false,
        };
        app.refresh_board();
        app
    }

    pub fn select_tier(&mut self, tier: Tier) {
        if self.screen != AppScreen::Menu || self.tier == tier {
            return;
        }
        self.tier = tier;
        self.refresh_board();
    }

    pub fn next_tier(&mut self) {
        self.select_tier(self.tier.next());
    }

    pub fn prev_tier(&mut self) {
        self.select_tier(self.tier.prev());
    }

    pub fn refresh_board(&mut self) {
        self.board = self.leaderboard.query(self.tier);
    }

    pub fn start_game(&mut self) {
        self.input.clear();
        self.last_commit = None;
        self.last_result = None;
        self.name_dialog = None;
        self.notice = None;
        self.snapshot = Some(self.engine.start(self.tier));
        self.screen = AppScreen::Game;

        if self.config.tier != self.tier {
            self.config.tier = self.tier;
            self.persist_preferences();
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if self.screen != AppScreen::Game {
            return;
        }
        self.input.push(ch);
        self.feed();
    }

    pub fn backspace(&mut self) {
        if self.screen != AppScreen::Game || self.input.pop().is_none() {
            return;
        }
        self.feed();
    }

    /// Hand the whole input text to the engine, as an input control would.
    fn feed(&mut self) {
        if let Some(update) = self.engine.on_keystroke(&self.input) {
            self.apply_update(update);
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(update) = self.engine.poll_timer() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: Update) {
        if update.commit.is_some() {
            self.input.clear();
            self.last_commit = update.commit;
        }
        self.snapshot = Some(update.snapshot);
        if let Some(result) = update.finished {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: SessionResult) {
        self.input.clear();
        self.screen = AppScreen::GameOver;
        if result.qualifies_for_leaderboard() {
            let prefill = self.config.player_name.as_deref().unwrap_or("");
            self.name_dialog = Some(NameDialog {
                input: LineInput::new(prefill, MAX_NAME_CHARS),
                error: None,
            });
        }
        self.last_result = Some(result);
    }

    pub fn abandon_game(&mut self) {
        self.engine.abandon();
        self.go_to_menu();
    }

    pub fn go_to_menu(&mut self) {
        if self.engine.is_running() {
            self.engine.abandon();
        }
        self.screen = AppScreen::Menu;
        self.snapshot = None;
        self.input.clear();
        self.name_dialog = None;
        self.refresh_board();
    }

    pub fn dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.name_dialog.as_mut() else {
            return;
        };
        match dialog.input.handle(key) {
            InputResult::Continue => {}
            InputResult::Submit => self.submit_name(),
            InputResult::Cancel => self.close_dialog(),
        }
    }

    pub fn submit_name(&mut self) {
        let (Some(dialog), Some(result)) = (self.name_dialog.as_mut(), self.last_result.as_ref())
        else {
            return;
        };

        match self.leaderboard.submit(dialog.input.value(), result) {
            Ok(entry) => {
                self.name_dialog = None;
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    text: SAVED_NOTICE.to_string(),
                });
                self.config.player_name = Some(entry.player_name);
                self.persist_preferences();
                self.refresh_board();
            }
            Err(StoreError::EmptyPlayerName) => {
                dialog.error = Some(EMPTY_NAME_ERROR.to_string());
            }
            Err(e) => {
                dialog.error = Some(format!("Could not save score: {e}"));
            }
        }
    }

    pub fn close_dialog(&mut self) {
        self.name_dialog = None;
    }

    /// Write back the tier and name the user picked, leaving every other
    /// field (including ones overridden on the command line) as on disk.
    fn persist_preferences(&self) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        let mut on_disk = match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("not saving preferences, config unreadable: {e:#}");
                return;
            }
        };
        on_disk.tier = self.config.tier;
        on_disk.player_name = self.config.player_name.clone();
        if let Err(e) = on_disk.save_to(path) {
            log::warn!("could not save preferences: {e:#}");
        }
    }
}
