// Terminal UI front end

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use generator::RandomSource;
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use session::{Directive, Session};
use strum_core::StrumEvent;

const FOOTER: &str = "[Enter] Regenerate [M] Enable mutes [Q] Quit";

/// Map a key press to a session directive; unmapped keys are ignored
pub fn directive_for_key(code: KeyCode) -> Option<Directive> {
    match code {
        KeyCode::Enter => Some(Directive::Regenerate),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Directive::EnableMuting),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Directive::Quit),
        _ => None,
    }
}

/// Short status text for the latest session event
fn status_for(event: &StrumEvent) -> Option<&'static str> {
    match event {
        StrumEvent::MutingEnabled => Some("Muted strums enabled"),
        StrumEvent::PatternGenerated(pattern) if pattern.mute_count() > 0 => {
            Some("This bar has a muted strum")
        }
        StrumEvent::PatternGenerated(_) => Some(""),
        StrumEvent::SessionEnded => None,
    }
}

pub struct App<R: RandomSource> {
    session: Session<R>,
    /// Fed by the session's event bus
    status: Arc<Mutex<String>>,
}

impl<R: RandomSource> App<R> {
    pub fn new(session: Session<R>) -> Self {
        let status = Arc::new(Mutex::new(String::new()));
        let status_clone = Arc::clone(&status);
        session.subscribe_to_events(move |event| {
            if let Some(text) = status_for(event) {
                if let Ok(mut status) = status_clone.lock() {
                    *status = text.to_string();
                }
            }
        });
        Self { session, status }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Returns false once the user has quit
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match directive_for_key(code) {
            Some(directive) => self.session.apply(directive).is_some(),
            None => true,
        }
    }

    fn status(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(3),
            ])
            .split(f.area());

        let mutes = if self.session.muting_enabled() { "ON" } else { "OFF" };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "STRUMMER",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " | MUTES:{} | BAR:{:03} | {}",
                mutes,
                self.session.generated_count(),
                self.status()
            )),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, chunks[0]);

        let grid = self.session.rendered().unwrap_or_default();
        let body = Paragraph::new(grid)
            .block(Block::default().title("PATTERN").borders(Borders::ALL));
        f.render_widget(body, chunks[1]);

        let footer = Paragraph::new(FOOTER).block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, chunks[2]);
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && !self.handle_key(key.code) {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Take over the terminal until the user quits
    pub fn run(mut self) -> io::Result<()> {
        if self.session.current().is_none() {
            self.session.regenerate();
        }

        let _guard = RestoreGuard::enter(
            || {
                enable_raw_mode()?;
                execute!(io::stdout(), EnterAlternateScreen)
            },
            restore_terminal,
        )?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let result = self.event_loop(&mut terminal);
        let cursor = terminal.show_cursor();
        result.and(cursor)
    }
}

fn restore_terminal() {
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!("Could not leave the alternate screen: {}", err);
    }
    if let Err(err) = disable_raw_mode() {
        warn!("Could not disable raw mode: {}", err);
    }
    info!("Terminal restored");
}

/// Runs `restore` when dropped, so every exit path puts the terminal back
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Run `setup` under the guard; a failed setup is restored straight away
    fn enter(setup: impl FnOnce() -> io::Result<()>, restore: F) -> io::Result<Self> {
        let guard = Self { restore };
        setup()?;
        Ok(guard)
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}
