use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, NUM_OPTION_KEYS};
use crate::capture::BlankAssignment;
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app);
    render_question_text(frame, chunks[1], app.current_question(), app.capture());
    render_options(frame, chunks[2], app.current_question(), app.capture());
    render_status(frame, chunks[3], app.capture());
    render_controls(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let progress = format!(
        "question {}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), halves[0]);

    let remaining = app.timer().remaining_secs();
    let countdown = Paragraph::new(format!("{}s", remaining))
        .alignment(Alignment::Right)
        .fg(timer_color(remaining))
        .bold();
    frame.render_widget(countdown, halves[1]);
}

fn timer_color(remaining: u64) -> Color {
    if remaining > 10 {
        Color::Cyan
    } else if remaining > 5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Question text with the blanks inlined: filled blanks show their value,
/// the active blank is highlighted, unfilled ones show a placeholder.
fn render_question_text(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    capture: &BlankAssignment,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (index, part) in question.parts().enumerate() {
        if index > 0 {
            let blank_index = index - 1;
            spans.push(blank_span(capture, blank_index));
        }
        spans.push(Span::styled(
            part.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn blank_span(capture: &BlankAssignment, blank_index: usize) -> Span<'static> {
    let value = capture
        .answers()
        .get(blank_index)
        .map(String::as_str)
        .unwrap_or("");
    let text = if value.is_empty() {
        format!("[ blank {} ]", blank_index + 1)
    } else {
        format!("[ {} ]", value)
    };

    let mut style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };
    if blank_index == capture.active_blank() {
        style = style.fg(Color::Cyan).bold().underlined();
    }
    Span::styled(text, style)
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, capture: &BlankAssignment) {
    let mut lines: Vec<Line> = Vec::with_capacity(NUM_OPTION_KEYS * 2);
    lines.push(Line::from(""));

    for (index, option) in question.options.iter().take(NUM_OPTION_KEYS).enumerate() {
        let is_used = capture.answers().iter().any(|a| a == option);
        let style = if is_used {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_used { "x" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.clone(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, capture: &BlankAssignment) {
    let status = format!(
        "{} of {} blanks filled",
        capture.filled_count(),
        capture.blank_count()
    );
    let color = if capture.is_complete() {
        Color::Green
    } else {
        Color::DarkGray
    };
    frame.render_widget(Paragraph::new(status).fg(color), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.is_confirming_clear() {
        "clear all answers? y confirm · any other key cancels"
    } else if app.capture().is_complete() {
        "enter next question  ·  backspace clear blank  ·  c clear all  ·  q quit"
    } else {
        "1-4 select  ·  tab next blank  ·  backspace clear blank  ·  c clear all  ·  q quit"
    };
    let color = if app.is_confirming_clear() {
        Color::Red
    } else {
        Color::DarkGray
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}
