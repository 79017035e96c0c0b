//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every input event is
//! handled synchronously: the session re-filters and re-renders the whole
//! list before the next event is read.

use crate::{
    event::{self, AppEvent, Direction},
    theme::Theme,
    view::ViewState,
    widgets::{
        card_list::CardList,
        help::HelpPopup,
        search_bar::{SearchBar, SearchBarState},
        status_bar::StatusBar,
        suggestions::{self, Suggestions},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gloss_core::{config::Config, search::normalize, Glossary, Session};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Position, Rect},
    Frame, Terminal,
};
use std::{cell::Cell, io, time::Duration};

// ---------------------------------------------------------------------------
// Focus + layout types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search input; keys type text.
    Search,
    /// The card list; keys navigate.
    Cards,
}

/// Screen regions from the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub search: Rect,
    /// Zero-sized when the dropdown is hidden.
    pub suggestions: Rect,
    pub cards: Rect,
    pub status: Rect,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub session: Session,
    pub view: ViewState,
    pub search: SearchBarState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
    /// Written by the draw pass, read by click handling.
    pub layout: Cell<ScreenLayout>,
}

impl AppState {
    fn card_count(&self) -> usize {
        self.view.view.cards.len()
    }

    fn select(&mut self, term: &str) {
        self.search.set(term);
        self.session.select(term, &mut self.view);
    }

    fn clear(&mut self) {
        self.search.reset();
        self.session.clear(&mut self.view);
    }

    fn handle_search(&mut self, event: AppEvent) {
        match event {
            AppEvent::Char(_) | AppEvent::Backspace => {
                if self.search.handle(&event) {
                    let query = self.search.query.clone();
                    self.session.input(&query, &mut self.view);
                }
            }
            AppEvent::Nav(Direction::Left) | AppEvent::Nav(Direction::Right) => {
                self.search.handle(&event);
            }
            AppEvent::Nav(Direction::Down) if self.view.suggestions_visible => {
                self.view.highlight_next();
            }
            AppEvent::Nav(Direction::Up) if self.view.suggestions_visible => {
                self.view.highlight_prev();
            }
            AppEvent::Nav(_) | AppEvent::ScrollUp | AppEvent::ScrollDown => {
                let count = self.card_count();
                self.view.cards.handle(&event, count);
            }
            AppEvent::Enter => {
                if let Some(term) = self.view.current_suggestion().map(str::to_owned) {
                    self.select(&term);
                }
            }
            AppEvent::Escape => {
                if self.view.suggestions_visible {
                    self.session.dismiss(&mut self.view);
                } else {
                    tracing::debug!("focus: Search -> Cards");
                    self.focus = Focus::Cards;
                }
            }
            _ => {}
        }
    }

    fn handle_cards(&mut self, event: AppEvent) {
        match event {
            AppEvent::QueryFocus => {
                tracing::debug!("focus -> Search");
                self.focus = Focus::Search;
            }
            AppEvent::Nav(_) | AppEvent::ScrollUp | AppEvent::ScrollDown => {
                let count = self.card_count();
                self.view.cards.handle(&event, count);
            }
            _ => {}
        }
    }

    fn click(&mut self, col: u16, row: u16) {
        let layout = self.layout.get();
        let pos = Position::new(col, row);

        if self.view.clear_visible && SearchBar::clear_button_area(layout.search).contains(pos) {
            tracing::debug!("click: clear");
            self.clear();
            self.focus = Focus::Search;
            return;
        }

        if self.view.suggestions_visible && layout.suggestions.contains(pos) {
            let hit = Suggestions::row_at(layout.suggestions, row, self.view.suggestions.len())
                .and_then(|i| self.view.suggestions.get(i).cloned());
            if let Some(term) = hit {
                tracing::debug!(term = %term, "click: suggestion");
                self.select(&term);
            }
            return;
        }

        if layout.search.contains(pos) {
            self.focus = Focus::Search;
            return;
        }

        // Anything outside the search region dismisses the dropdown.
        self.session.dismiss(&mut self.view);
        if layout.cards.contains(pos) {
            self.focus = Focus::Cards;
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(glossary: Glossary, config: Config, theme: Theme) -> Self {
        let mut session = Session::new(glossary);
        let mut view = ViewState::default();
        session.start(&mut view);

        let state = AppState {
            session,
            view,
            search: SearchBarState::default(),
            focus: Focus::Search,
            theme,
            config,
            show_help: false,
            quit: false,
            layout: Cell::new(ScreenLayout::default()),
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != ct_event::KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = match self.state.focus {
                    Focus::Search => event::to_app_event_insert(raw),
                    Focus::Cards => event::to_app_event(raw),
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    /// Apply one event to the application state.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                AppEvent::Quit => s.quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }
            AppEvent::Clear => s.clear(),
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Search => Focus::Cards,
                    Focus::Cards => Focus::Search,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }
            AppEvent::Click(col, row) => s.click(col, row),
            AppEvent::Wheel(_) => {
                let count = s.card_count();
                s.view.cards.handle(&event, count);
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => match s.focus {
                Focus::Search => s.handle_search(other),
                Focus::Cards => s.handle_cards(other),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line search bar | cards | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let view = &state.view;
    let needle = normalize(state.session.query());
    let needle = state.config.ui.highlight_matches.then_some(needle.as_str());

    frame.render_widget(
        SearchBar::new(
            &state.search,
            state.focus == Focus::Search,
            view.clear_visible,
            &state.theme,
        ),
        vert[0],
    );
    frame.render_widget(
        CardList::new(
            &view.view,
            &view.cards,
            needle,
            state.focus == Focus::Cards,
            &state.theme,
        ),
        vert[1],
    );
    frame.render_widget(
        StatusBar::new(view.view.status, state.config.ui.show_status, &state.theme),
        vert[2],
    );

    let mut layout = ScreenLayout {
        search: vert[0],
        suggestions: Rect::default(),
        cards: vert[1],
        status: vert[2],
    };

    if view.suggestions_visible && !view.suggestions.is_empty() {
        let bounds = Rect {
            height: vert[1].bottom().saturating_sub(area.y),
            ..area
        };
        let dropdown = Suggestions::area(vert[0], view.suggestions.len(), bounds);
        // Too short to draw: leave it out of hit-testing as well.
        if dropdown.height >= suggestions::MIN_HEIGHT {
            frame.render_widget(
                Suggestions::new(&view.suggestions, view.highlighted, &state.theme),
                dropdown,
            );
            layout.suggestions = dropdown;
        }
    }

    state.layout.set(layout);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        return;
    }

    if state.focus == Focus::Search {
        let sb = SearchBar::new(&state.search, true, view.clear_visible, &state.theme);
        let (cx, cy) = sb.cursor_position(vert[0]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
