use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use keyrush::app::{App, AppScreen};
use keyrush::config::Config;
use keyrush::event::{AppEvent, EventHandler};
use keyrush::logging;
use keyrush::store::FileKeyValueStore;
use keyrush::ui::components::leaderboard::LeaderboardTable;
use keyrush::ui::components::menu::Menu;
use keyrush::ui::components::name_dialog::NameDialogView;
use keyrush::ui::components::progress_bar::TimeBar;
use keyrush::ui::components::results::Results;
use keyrush::ui::components::stats_bar::StatsBar;
use keyrush::ui::components::word_stream::WordStream;
use keyrush::ui::layout::{GameLayout, MenuLayout, centered_rect, hint_line};
use keyrush::vocabulary::Tier;

#[derive(Parser)]
#[command(name = "keyrush", version, about = "Timed terminal typing game with a local leaderboard")]
struct Cli {
    #[arg(short, long, help = "Difficulty tier (easy, medium, hard)")]
    tier: Option<Tier>,

    #[arg(short, long, help = "Player name to prefill when saving a score")]
    name: Option<String>,

    #[arg(long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Session length in seconds")]
    seconds: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("keyrush: logging disabled: {e:#}");
    }

    let config_path = Config::default_path();
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        log::warn!("using default config: {e:#}");
        Config::default()
    });
    if let Some(tier) = cli.tier {
        config.tier = tier;
    }
    if let Some(name) = cli.name {
        config.player_name = Some(name);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(seconds) = cli.seconds {
        config.session_secs = seconds;
    }
    config.validate();

    let store = FileKeyValueStore::new();
    log::info!("leaderboard data in {}", store.base_dir().display());
    let mut app = App::new(config, Some(config_path), Box::new(store));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("exiting on error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        let event = events.next()?;
        // Owed countdown ticks land before the event, so a key pressed
        // after time ran out is not scored.
        app.on_tick();
        match event {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Game => handle_game_key(app, key),
        AppScreen::GameOver => handle_game_over_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.select_tier(Tier::Easy),
        KeyCode::Char('2') => app.select_tier(Tier::Medium),
        KeyCode::Char('3') => app.select_tier(Tier::Hard),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.prev_tier(),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.next_tier(),
        KeyCode::Enter | KeyCode::Char(' ') => app.start_game(),
        _ => {}
    }
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.abandon_game(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(ch),
        _ => {}
    }
}

fn handle_game_over_key(app: &mut App, key: KeyEvent) {
    if app.name_dialog.is_some() {
        app.dialog_key(key);
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => app.start_game(),
        KeyCode::Esc | KeyCode::Char('m') => app.go_to_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Game => render_game(frame, app),
        AppScreen::GameOver => render_game_over(frame, app),
    }
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect, hints: &[&str]) {
    let text = hint_line(hints, area.width as usize);
    let footer = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(app.theme.colors.muted()),
    )));
    frame.render_widget(footer, area);
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let layout = MenuLayout::new(frame.area());

    let menu = Menu::new(app.tier, &app.theme);
    frame.render_widget(&menu, layout.menu);

    let board = LeaderboardTable::new(&app.board, app.tier, &app.theme);
    frame.render_widget(board, layout.board);

    render_footer(
        frame,
        app,
        layout.footer,
        &["[Enter] Start", "[1-3] Tier", "[\u{2191}\u{2193}] Change tier", "[q] Quit"],
    );
}

fn render_game(frame: &mut ratatui::Frame, app: &App) {
    let Some(snapshot) = app.snapshot.as_ref() else {
        return;
    };
    let layout = GameLayout::new(frame.area());
    let colors = &app.theme.colors;

    frame.render_widget(StatsBar::new(snapshot, app.tier, &app.theme), layout.header);
    frame.render_widget(
        TimeBar::new(
            snapshot.time_remaining,
            app.engine.config().duration_secs,
            &app.theme,
        ),
        layout.timer,
    );
    frame.render_widget(WordStream::new(snapshot, &app.theme), layout.words);

    let input_block = Block::bordered()
        .title(" Type here, space to submit ")
        .border_style(Style::default().fg(colors.accent()));
    let input = Paragraph::new(Span::styled(
        app.input.clone(),
        Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
    ))
    .block(input_block);
    frame.render_widget(input, layout.input);

    let cursor_x = layout.input.x + 1 + app.input.chars().count() as u16;
    if cursor_x < layout.input.x + layout.input.width.saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, layout.input.y + 1));
    }

    render_footer(frame, app, layout.footer, &["[Esc] Quit to menu"]);
}

fn render_game_over(frame: &mut ratatui::Frame, app: &App) {
    let Some(result) = app.last_result.as_ref() else {
        return;
    };
    let area = frame.area();
    let panel = centered_rect(50, 60, 44, 16, area);
    frame.render_widget(Results::new(result, app.notice.as_ref(), &app.theme), panel);

    if let Some(dialog) = app.name_dialog.as_ref() {
        let popup = centered_rect(40, 20, 40, 7, area);
        frame.render_widget(NameDialogView::new(dialog, result.score, &app.theme), popup);
    }

    let footer = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
    let hints: &[&str] = if app.name_dialog.is_some() {
        &["[Enter] Save score", "[Esc] Skip"]
    } else {
        &["[Enter] Play again", "[m] Menu", "[q] Quit"]
    };
    render_footer(frame, app, footer, hints);
}
