//! Terminal front end: the event loop and all drawing.
//!
//! One tick: drain pending provider updates, draw, then poll for a key.
//! Updates apply in arrival order, so whichever roster snapshot landed
//! last is the one on screen.

pub mod app;
pub mod form;

pub use app::{App, Focus};
pub use form::{FormField, PlayerForm};

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::model::Player;
use crate::provider::Update;
use crate::render;

const TICK: Duration = Duration::from_millis(250);
/// Rows per card on screen: title, three body lines, one blank.
const CARD_HEIGHT: u16 = 5;

/// Run the UI until quit. Restores the terminal before returning.
pub fn run(app: &mut App, updates: Receiver<Update>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app, &updates);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    updates: &Receiver<Update>,
) -> io::Result<()> {
    loop {
        while let Ok(update) = updates.try_recv() {
            app.apply(update);
        }

        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);
    draw_roster(frame, app, chunks[1]);
    draw_form(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);

    if let Some(player) = &app.detail {
        draw_detail_overlay(frame, player);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Puppy Bowl",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   {} players on the roster", app.roster.len())),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_roster(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.focus {
        Focus::Roster => " Roster [focused] ",
        Focus::Form => " Roster ",
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.roster.is_empty() {
        frame.render_widget(Paragraph::new(render::EMPTY_ROSTER_NOTICE), inner);
        return;
    }

    let cards = render::roster_cards(&app.roster);
    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    let (start, end) = visible_range(app.selected, cards.len(), visible);

    for (row, index) in (start..end).enumerate() {
        let y = inner.y + (row as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, height);
        let card = &cards[index];

        let title_style = if index == app.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![Line::from(Span::styled(card.title.clone(), title_style))];
        for body in &card.lines {
            lines.push(Line::from(body.clone()));
        }
        frame.render_widget(Paragraph::new(lines), card_area);
    }
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form;
    let title = if focused {
        " Add a player [focused] "
    } else {
        " Add a player "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (i, field) in FormField::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let active = focused && app.form.focus == *field;
        let style = if active {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        let value = app.form.value(*field);
        let shown = if value.is_empty() {
            "_".to_string()
        } else {
            value
        };
        spans.push(Span::raw(format!("{}: ", field.label())));
        spans.push(Span::styled(shown, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = match app.focus {
        Focus::Roster => "j/k move   enter details   x remove   r refresh   tab form   q quit",
        Focus::Form => "type to edit   tab next field   space toggles status   enter submit   esc back",
    };
    let mut lines = vec![Line::from(Span::styled(
        keys,
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(status) = app.last_log() {
        lines.push(Line::from(status.to_string()));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_detail_overlay(frame: &mut Frame, player: &Player) {
    let area = centered_rect(60, 60, frame.size());
    let lines: Vec<Line> = render::detail_lines(player)
        .into_iter()
        .map(Line::from)
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Player details (any key to close) ");

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Window of card indices to draw so the selection stays on screen.
fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total <= visible {
        return (0, total);
    }
    let start = selected.saturating_sub(visible / 2).min(total - visible);
    (start, start + visible)
}

/// Centered sub-rectangle sized as a percentage of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
