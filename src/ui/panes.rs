//! Pane rendering for the interactive session
//!
//! Each pane is a stateless render function; scroll offsets are clamped
//! here at render time so callers can use `usize::MAX` to pin a pane to its
//! bottom.

use crate::interpreter::vars::{format_value, VarTable};
use crate::ui::app::HistoryEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the history pane: one line per evaluated expression, with its
/// value or error.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[HistoryEntry],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if entries.is_empty() {
        let paragraph = Paragraph::new("(no expressions yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let mut spans = vec![
                Span::styled("› ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    entry.expression.as_str(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ];
            match &entry.outcome {
                Ok(value) => {
                    spans.push(Span::styled(
                        "  =  ",
                        Style::default().fg(DEFAULT_THEME.comment),
                    ));
                    spans.push(Span::styled(
                        format_value(*value),
                        Style::default().fg(DEFAULT_THEME.number),
                    ));
                }
                Err(err) => {
                    spans.push(Span::styled(
                        "  ✗  ",
                        Style::default().fg(DEFAULT_THEME.error),
                    ));
                    spans.push(Span::styled(
                        err.to_string(),
                        Style::default().fg(DEFAULT_THEME.error),
                    ));
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let visible = clamp_scroll(all_items.len(), area, scroll_offset);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Render the variables pane: the live table, sorted by name.
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    vars: &VarTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if vars.is_empty() {
        let paragraph = Paragraph::new("(no variables)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = vars
        .sorted()
        .into_iter()
        .map(|var| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    var.name.clone(),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format_value(var.value),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]))
        })
        .collect();

    let visible = clamp_scroll(all_items.len(), area, scroll_offset);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Render the expression input line.
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let line = Line::from(vec![
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "▏",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, entry_count: usize) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: expression count and last outcome
    let left_spans = vec![
        Span::styled(
            format!(" {} ", entry_count),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(" eval ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

/// Clamp a pane's scroll offset to its content, returning the number of
/// visible rows.  `usize::MAX` clamps to the bottom.
fn clamp_scroll(total_items: usize, area: Rect, scroll_offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    visible_height
}
