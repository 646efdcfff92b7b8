use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, QUESTION_COUNT_CHOICES};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(15),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "FILL IN THE BLANKS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Each question has one or more blanks".fg(Color::DarkGray)),
        Line::from("1-4 pick an option · tab next blank · backspace clear".fg(Color::DarkGray)),
        Line::from("30 seconds per question".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("Questions per round".fg(Color::Gray)),
        Line::from(""),
        count_menu(app),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start  ·  q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn count_menu(app: &App) -> Line<'static> {
    let mut spans = Vec::with_capacity(QUESTION_COUNT_CHOICES.len() * 2);
    for (index, count) in QUESTION_COUNT_CHOICES.iter().enumerate() {
        let style = if index == app.count_choice_index() {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("  {:2}  ", count), style));
    }
    Line::from(spans)
}
