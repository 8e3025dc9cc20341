//! Win-rate gauges and the strategy selector.

use mh_core::{Scoreboard, Strategy, StrategyTally};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};

const STAY: Color = Color::Rgb(0x34, 0x98, 0xDB);
const SWITCH: Color = Color::Rgb(0xE6, 0x7E, 0x22);

/// Draw one gauge per strategy, filled to its win rate.
pub fn draw_stats(frame: &mut Frame, area: Rect, board: &Scoreboard) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(gauge("Stay", &board.stay, STAY), rows[0]);
    frame.render_widget(gauge("Switch", &board.switch, SWITCH), rows[2]);
}

fn gauge(name: &str, tally: &StrategyTally, color: Color) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(tally.win_rate())
        .label(gauge_label(name, tally))
}

/// Text drawn over a gauge, e.g. `Switch  Wins: 2/3 (66.7%)`.
pub fn gauge_label(name: &str, tally: &StrategyTally) -> String {
    format!("{name:<6}  {tally}")
}

/// One line listing every strategy with the active one highlighted.
pub fn strategy_selector(active: Strategy) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Strategy: ",
        Style::default().fg(Color::DarkGray),
    )];
    for strategy in Strategy::ALL {
        let style = if strategy == active {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", strategy.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mh_core::Decision;

    #[test]
    fn labels_use_the_tally_format() {
        let mut board = Scoreboard::new();
        board.record(Decision::Switch, true);
        board.record(Decision::Switch, true);
        board.record(Decision::Switch, false);
        assert_eq!(
            gauge_label("Switch", &board.switch),
            "Switch  Wins: 2/3 (66.7%)"
        );
        assert_eq!(gauge_label("Stay", &board.stay), "Stay    Wins: 0/0 (0.0%)");
    }

    #[test]
    fn selector_highlights_active_strategy() {
        let line = strategy_selector(Strategy::AlwaysStay);
        let active: Vec<_> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Yellow))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].content, " Always stay ");
    }
}
