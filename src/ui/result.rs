use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::{AnswerRecord, Question, BLANK_MARKER};

const QUESTION_PREVIEW_LENGTH: usize = 60;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (correct, total, percentage) = app.score();
    let grade_color = grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], correct, total, percentage, grade_color);
    render_review(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    correct: usize,
    total: usize,
    percentage: u32,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", correct, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// Per-question review: a header line per question, then one line per
/// blank showing the chosen value against the correct one. Keep the line
/// layout in sync with App::max_result_scroll.
fn render_review(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, (question, record)) in app.questions().iter().zip(app.answers().iter()).enumerate()
    {
        lines.push(question_header(index, question, record));
        for blank in 0..record.answers.len() {
            lines.push(blank_line(question, record, blank));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn question_header(index: usize, question: &Question, record: &AnswerRecord) -> Line<'static> {
    let (symbol, color) = if record.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:2}. ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            truncate_question(&question.text),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn truncate_question(text: &str) -> String {
    let compact = text.replace(BLANK_MARKER, "____");
    let char_count = compact.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = compact.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        compact
    }
}

fn blank_line(question: &Question, record: &AnswerRecord, blank: usize) -> Line<'static> {
    let given = record.answers.get(blank).map(String::as_str).unwrap_or("");
    let expected = question
        .correct_answer
        .get(blank)
        .map(String::as_str)
        .unwrap_or("");
    let hit = !given.is_empty() && given == expected;

    let mut spans = vec![
        Span::styled(
            format!("      blank {}: ", blank + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            if given.is_empty() {
                "(no selection)".to_string()
            } else {
                given.to_string()
            },
            Style::default().fg(if hit { Color::Green } else { Color::Red }),
        ),
    ];
    if !hit {
        spans.push(Span::styled(
            format!("  -> {}", expected),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
