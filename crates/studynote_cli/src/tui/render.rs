//! Frame rendering for the note-taking screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use studynote_core::ui::{
    APP_TITLE, CLEAR_ALL_LABEL, DESCRIPTION_PLACEHOLDER, NOTIFICATION_TITLE, TITLE_PLACEHOLDER,
};
use studynote_core::{Focus, KeyValueRepository, NotesUi};
use unicode_width::UnicodeWidthChar;

use super::ViewState;

const FOCUS_COLOR: Color = Color::LightGreen;
const IDLE_BORDER_COLOR: Color = Color::DarkGray;
const PLACEHOLDER_COLOR: Color = Color::DarkGray;
const HEADING_COLOR: Color = Color::LightBlue;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const DESCRIPTION_HEIGHT: u16 = 7;

/// Draws the whole screen from controller state.
pub fn draw<R: KeyValueRepository>(frame: &mut Frame<'_>, ui: &NotesUi<R>, view: &ViewState) {
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(DESCRIPTION_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_heading(frame, rows[0]);
    render_title_input(frame, ui, rows[1]);
    render_description_input(frame, ui, rows[2]);
    render_buttons(frame, ui, rows[3]);
    render_notes(frame, ui, view, rows[4]);
    render_footer(frame, rows[5]);

    if ui.notification().is_visible() {
        render_notification(frame, ui.notification().message(), area);
    }
}

fn render_heading(frame: &mut Frame<'_>, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(HEADING_COLOR)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn field_block(label: &'static str, focused: bool) -> Block<'static> {
    let color = if focused {
        FOCUS_COLOR
    } else {
        IDLE_BORDER_COLOR
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(label)
}

/// Field text broken into rows of at most `width` display columns.
///
/// `cursor` is the (column, row) cell just past the last character; when the
/// last row is full the cursor moves to the start of the next row.
#[derive(Debug, PartialEq, Eq)]
struct FieldLayout {
    rows: Vec<String>,
    cursor: (usize, usize),
}

fn layout_field(value: &str, width: usize) -> FieldLayout {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut last_width = 0;

    for line in value.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row);
        last_width = row_width;
    }

    let last_row = rows.len() - 1;
    let cursor = if last_width >= width {
        (0, last_row + 1)
    } else {
        (last_width, last_row)
    };
    FieldLayout { rows, cursor }
}

fn to_cells(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Draws a bordered text input, scrolled so the cursor row stays visible.
fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &'static str,
    value: &str,
    placeholder: &'static str,
    cursor_visible: bool,
    focused: bool,
) {
    let block = field_block(label, focused);
    let inner = block.inner(area);

    if value.is_empty() {
        let hint = Paragraph::new(Span::styled(
            placeholder,
            Style::default().fg(PLACEHOLDER_COLOR),
        ))
        .block(block);
        frame.render_widget(hint, area);
        if cursor_visible && inner.width > 0 && inner.height > 0 {
            frame.set_cursor(inner.x, inner.y);
        }
        return;
    }

    let layout = layout_field(value, usize::from(inner.width));
    let height = usize::from(inner.height);
    let (cursor_col, cursor_row) = layout.cursor;
    let first = (cursor_row + 1).saturating_sub(height);
    let lines: Vec<Line<'static>> = layout
        .rows
        .into_iter()
        .skip(first)
        .take(height)
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if cursor_visible && inner.width > 0 && height > 0 {
        let x = inner.x.saturating_add(to_cells(cursor_col));
        let y = inner.y.saturating_add(to_cells(cursor_row - first));
        frame.set_cursor(x, y);
    }
}

fn render_title_input<R: KeyValueRepository>(frame: &mut Frame<'_>, ui: &NotesUi<R>, area: Rect) {
    let focused = ui.focus() == Focus::Title;
    render_field(
        frame,
        area,
        "Title",
        &ui.form().title,
        TITLE_PLACEHOLDER,
        focused && !ui.notification().is_visible(),
        focused,
    );
}

fn render_description_input<R: KeyValueRepository>(
    frame: &mut Frame<'_>,
    ui: &NotesUi<R>,
    area: Rect,
) {
    let focused = ui.focus() == Focus::Description;
    render_field(
        frame,
        area,
        "Description",
        &ui.form().description,
        DESCRIPTION_PLACEHOLDER,
        focused && !ui.notification().is_visible(),
        focused,
    );
}

fn render_buttons<R: KeyValueRepository>(frame: &mut Frame<'_>, ui: &NotesUi<R>, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("[ {} ]", ui.submit_label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Ctrl-S   ", Style::default().fg(FOOTER_LABEL_COLOR)),
        Span::styled(
            format!("[ {CLEAR_ALL_LABEL} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Ctrl-X", Style::default().fg(FOOTER_LABEL_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_notes<R: KeyValueRepository>(
    frame: &mut Frame<'_>,
    ui: &NotesUi<R>,
    view: &ViewState,
    area: Rect,
) {
    let focused = ui.focus() == Focus::Notes;
    let notes = ui.notes();
    let block = field_block("Notes", focused);

    if ui.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            ui.placeholder(),
            Style::default()
                .fg(PLACEHOLDER_COLOR)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem<'static>> = notes
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let mut lines = vec![Line::from(Span::styled(
                note.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(
                note.description
                    .split('\n')
                    .map(|line| Line::from(line.to_owned())),
            );
            if focused && index == view.selected {
                lines.push(Line::from(vec![
                    Span::styled("[e] ", Style::default().fg(FOOTER_KEY_COLOR)),
                    Span::raw("Edit  "),
                    Span::styled("[d] ", Style::default().fg(FOOTER_KEY_COLOR)),
                    Span::raw("Delete"),
                ]));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default();
    if focused {
        state.select(Some(view.selected.min(notes.len() - 1)));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints = [
        ("Tab", "focus"),
        ("Ctrl-S", "add/update"),
        ("Ctrl-X", "clear all"),
        ("↑/↓", "select"),
        ("e", "edit"),
        ("d", "delete"),
        ("Ctrl-Q", "quit"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key, Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notification(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(message.to_owned()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[ Close ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Enter/Esc", Style::default().fg(FOOTER_LABEL_COLOR)),
        ]),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FOCUS_COLOR))
                .title(NOTIFICATION_TITLE),
        );
    frame.render_widget(dialog, popup);
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}
