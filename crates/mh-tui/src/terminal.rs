//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use mh_core::{Door, Phase, Strategy};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::doors::{self, DOOR_HEIGHT};
use crate::stats;

/// Launch the dashboard.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            tracing::info!(games = app.game.scoreboard().total_games(), "quitting");
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('?') | KeyCode::Esc => app.show_help = false,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(door) = c
                .to_digit(10)
                .and_then(|n| Door::from_number(n as usize).ok())
            {
                app.select_door(door);
            }
        }
        KeyCode::Char('m') => app.set_strategy(Strategy::Manual),
        KeyCode::Char('s') => app.set_strategy(Strategy::AlwaysStay),
        KeyCode::Char('w') => app.set_strategy(Strategy::AlwaysSwitch),
        KeyCode::Left => app.set_strategy(app.game.strategy().prev()),
        KeyCode::Right => app.set_strategy(app.game.strategy().next()),
        KeyCode::Char('n') => app.new_game(),
        KeyCode::Char('a') => app.auto_simulate(),
        KeyCode::Char('r') => app.clear_statistics(),
        _ => {}
    }
}

fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent) {
    if app.show_help {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
        && let Some(door) = app.door_at(mouse.column, mouse.row)
    {
        app.select_door(door);
    }
}

fn status_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Choosing => "1-3/click:pick a door  m/s/w:strategy  a:simulate 100  ?:help  q:quit",
        Phase::Deciding => "1-3/click:final pick  a:simulate 100  r:clear stats  ?:help  q:quit",
        Phase::Finished => "n:new game  a:simulate 100  r:clear stats  m/s/w:strategy  ?:help  q:quit",
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title and strategy selector
            Constraint::Length(DOOR_HEIGHT), // Doors
            Constraint::Length(4),           // Round status
            Constraint::Length(5),           // Statistics
            Constraint::Min(0),
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let title = Line::from(vec![
        Span::styled(" Monty Hall ", Style::default().fg(Color::Yellow).bold()),
        Span::raw("  "),
    ]);
    let mut header = title.spans;
    header.extend(stats::strategy_selector(app.game.strategy()).spans);
    frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    doors::draw_doors(frame, chunks[1], app);

    let mut status = vec![Line::from(Span::styled(
        app.game.status_message(),
        Style::default().fg(Color::White).bold(),
    ))];
    if let Some(notice) = &app.notice {
        status.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let status = Paragraph::new(status).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(status, chunks[2]);

    stats::draw_stats(frame, chunks[3], app.game.scoreboard());

    let hint = Paragraph::new(status_hint(app.game.session().phase()))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(hint, chunks[5]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
