use super::state::{AppState, FilterForm, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, state: &AppState, form: &FilterForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, state, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(chunks[1]);

    draw_sidebar(f, form, body[0]);
    draw_results(f, state, form, body[1]);
    draw_footer(f, form, chunks[2]);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect) {
    let count = Span::styled(
        format!("{} of {} articles", state.rows.len(), state.total),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    );
    let line = Line::from(vec![
        Span::styled("Pocket Explorer", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("  |  "),
        count,
        Span::raw("  |  "),
        Span::styled(state.criteria_summary.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(header, area);
}

fn draw_sidebar(f: &mut Frame, form: &FilterForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    draw_tag_list(f, form, chunks[0]);
    draw_text_box(f, "Search (title/summary)", &form.keyword, form.focus == Focus::Keyword, false, chunks[1]);
    draw_text_box(
        f,
        "From (YYYY-MM-DD)",
        &form.date_start,
        form.focus == Focus::DateStart,
        FilterForm::date_invalid(&form.date_start),
        chunks[2],
    );
    draw_text_box(
        f,
        "To (YYYY-MM-DD)",
        &form.date_end,
        form.focus == Focus::DateEnd,
        FilterForm::date_invalid(&form.date_end),
        chunks[3],
    );
}

fn draw_tag_list(f: &mut Frame, form: &FilterForm, area: Rect) {
    let focused = form.focus == Focus::Tags;
    // Keep the cursor row visible inside the pane.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = form.tag_cursor.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = form
        .vocab
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible.max(1))
        .map(|(i, tag)| {
            let mark = if form.selected.contains(tag) { "[x]" } else { "[ ]" };
            let mut style = if form.selected.contains(tag) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            if focused && i == form.tag_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{} {}", mark, tag)).style(style)
        })
        .collect();

    let title = format!("Tags ({} selected)", form.selected.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(focused)),
    );
    f.render_widget(list, area);
}

fn draw_text_box(f: &mut Frame, title: &str, value: &str, focused: bool, invalid: bool, area: Rect) {
    let style = if invalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let shown = if focused {
        format!("{}\u{2588}", value) // block cursor
    } else {
        value.to_string()
    };
    let boxed = Paragraph::new(Span::styled(shown, style)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(focused)),
    );
    f.render_widget(boxed, area);
}

fn draw_results(f: &mut Frame, state: &AppState, form: &FilterForm, area: Rect) {
    let focused = form.focus == Focus::Results;

    let header = Row::new(
        crate::query::present::COLUMN_LABELS
            .iter()
            .map(|l| Cell::from(*l).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
    );

    let visible = (area.height.saturating_sub(3) as usize).min(state.page_rows);
    let offset = form.result_offset.min(state.rows.len().saturating_sub(1));

    let rows: Vec<Row> = state
        .rows
        .iter()
        .skip(offset)
        .take(visible)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.title.clone()),
                Cell::from(r.link.clone()).style(Style::default().fg(Color::Blue)),
                Cell::from(r.saved_at.clone()),
                Cell::from(r.short.clone()),
                Cell::from(r.tags.clone()).style(Style::default().fg(Color::Magenta)),
                Cell::from(r.summary.clone()),
            ])
        })
        .collect();

    let title = if state.rows.is_empty() {
        "Articles (none match)".to_string()
    } else {
        format!("Articles [{}-{} of {}]",
            offset + 1,
            (offset + visible).min(state.rows.len()),
            state.rows.len(),
        )
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Length(16),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(focused)),
    );

    f.render_widget(table, area);
}

fn draw_footer(f: &mut Frame, form: &FilterForm, area: Rect) {
    let hints = if form.focus.is_text() {
        " type to edit | Tab next pane | Esc clear field | Ctrl+C quit"
    } else {
        " Tab next pane | Up/Down move | Space toggle tag | Esc clear | c clear all | q quit"
    };
    let footer = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    f.render_widget(footer, area);
}
