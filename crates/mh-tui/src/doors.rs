//! Character art for the three doors.

use mh_core::{DoorContent, DoorView};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;

/// Width of a drawn door in cells, frame included.
pub const DOOR_WIDTH: u16 = 13;
/// Height of a drawn door in cells, frame and label included.
pub const DOOR_HEIGHT: u16 = 9;

const WOOD: Color = Color::Rgb(0x8B, 0x45, 0x13);
const SELECTED: Color = Color::Rgb(0x27, 0xAE, 0x60);
const CAR: Color = Color::Rgb(0xE7, 0x4C, 0x3C);
const GOAT: Color = Color::Rgb(0x95, 0xA5, 0xA6);
const KNOB: Color = Color::Rgb(0xFF, 0xD7, 0x00);

const CAR_ART: [&str; 6] = [
    "           ",
    "   ____    ",
    " _/__|_\\__ ",
    "|  _    _ |",
    "'-(_)--(_)'",
    "    CAR    ",
];

// Two blank leading columns leave room for the door leaf when half open.
const GOAT_ART: [&str; 6] = [
    "  __  __   ",
    "  (  \\/  ) ",
    "   \\ oo /  ",
    "    \\__/~~ ",
    "    || ||  ",
    "    GOAT   ",
];

/// The art for one door: a frame around six content rows, then a label.
pub fn door_art(view: &DoorView) -> Vec<Line<'static>> {
    let frame_style = Style::default().fg(if view.selected { SELECTED } else { WOOD });
    let frame = |left: &'static str, fill: &'static str, right: &'static str| {
        Line::from(vec![
            Span::styled(left, frame_style),
            Span::styled(fill.repeat(11), frame_style),
            Span::styled(right, frame_style),
        ])
    };
    let row = |content: Vec<Span<'static>>| {
        let mut spans = vec![Span::styled("║", frame_style)];
        spans.extend(content);
        spans.push(Span::styled("║", frame_style));
        Line::from(spans)
    };

    let body: Vec<Vec<Span<'static>>> = match view.content {
        DoorContent::Closed => closed_panel(view),
        DoorContent::Car => CAR_ART
            .into_iter()
            .map(|l| vec![Span::styled(l, Style::default().fg(CAR).bold())])
            .collect(),
        DoorContent::Goat => GOAT_ART
            .into_iter()
            .map(|l| {
                let goat = Style::default().fg(GOAT);
                if view.opening {
                    vec![
                        Span::styled("▓▌", Style::default().fg(WOOD)),
                        Span::styled(&l[2..], goat),
                    ]
                } else {
                    vec![Span::styled(l, goat)]
                }
            })
            .collect(),
    };

    let mut lines = vec![frame("╔", "═", "╗")];
    lines.extend(body.into_iter().map(row));
    lines.push(frame("╚", "═", "╝"));

    let label_style = if view.selected {
        Style::default().fg(SELECTED).bold()
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(Span::styled(view.door.to_string(), label_style)).centered());
    lines
}

fn closed_panel(view: &DoorView) -> Vec<Vec<Span<'static>>> {
    let wood = Style::default().fg(WOOD);
    let number = Style::default().fg(Color::White).bold();
    vec![
        vec![Span::styled(" ┌───────┐ ", wood)],
        vec![Span::styled(" │       │ ", wood)],
        vec![
            Span::styled(" │   ", wood),
            Span::styled(view.door.number().to_string(), number),
            Span::styled("   │ ", wood),
        ],
        vec![
            Span::styled(" │      ", wood),
            Span::styled("●", Style::default().fg(KNOB)),
            Span::styled("│ ", wood),
        ],
        vec![Span::styled(" │       │ ", wood)],
        vec![Span::styled(" └───────┘ ", wood)],
    ]
}

/// Draw the three doors side by side and record where each landed.
pub fn draw_doors(frame: &mut Frame, area: Rect, app: &mut TuiApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (i, view) in app.game.session().door_views().iter().enumerate() {
        let column = columns[i];
        let door_area = Rect {
            x: column.x + column.width.saturating_sub(DOOR_WIDTH) / 2,
            y: column.y,
            width: DOOR_WIDTH.min(column.width),
            height: DOOR_HEIGHT.min(column.height),
        };
        frame.render_widget(Paragraph::new(door_art(view)), door_area);
        app.door_areas[i] = door_area;
    }
}
