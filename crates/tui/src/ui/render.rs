//! Frame rendering for the wizard view model.
//!
//! Layout, top to bottom: header, optional notice, step body, footer hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::theme::Theme;
use crate::app::{WizardBody, WizardView};

const HEADER_HEIGHT: u16 = 3;
const NOTICE_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;

const NO_DATA_MESSAGE: &str = "Couldn't find any Elasticsearch data.\n\
You'll need to index some data into Elasticsearch before you can create an index pattern.\n\n\
Press 'r' to check for new data.";

/// Draw `view` into the whole frame.
pub fn render(f: &mut Frame, view: &WizardView) {
    let theme = Theme::default();
    let notice_height = if view.notice.is_some() { NOTICE_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(notice_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    render_header(f, chunks[0], view, &theme);
    if let Some(notice) = &view.notice {
        let paragraph = Paragraph::new(notice.message.as_str())
            .style(theme.notice(notice.level))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.notice(notice.level))
                    .title(" Esc to dismiss "),
            );
        f.render_widget(paragraph, chunks[1]);
    }

    match &view.body {
        WizardBody::Loading { message } => {
            let paragraph = Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(theme.text_dim())
                .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
            f.render_widget(paragraph, chunks[2]);
        }
        WizardBody::NoData => render_no_data(f, chunks[2], view, &theme),
        WizardBody::IndexPattern { .. } => render_index_pattern(f, chunks[2], view, &theme),
        WizardBody::TimeField { .. } => render_time_field(f, chunks[2], view, &theme),
        WizardBody::Fatal { message } => {
            let text = format!("{message}\n\nPress any key to quit.");
            let paragraph = Paragraph::new(text)
                .style(theme.error())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.error())
                        .title(" Error "),
                );
            f.render_widget(paragraph, chunks[2]);
        }
    }

    render_footer(f, chunks[3], view, &theme);
}

fn render_header(f: &mut Frame, area: Rect, view: &WizardView, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(view.title.as_str(), theme.title()),
        Span::raw("  "),
        Span::styled(view.step_label, theme.text_dim()),
    ]);
    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, area: Rect, view: &WizardView, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, (key, label)) in view.footer_hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_dim()));
        }
        spans.push(Span::styled(*key, theme.key_hint()));
        spans.push(Span::raw(format!(" {label}")));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn toggle_line(included: bool, theme: &Theme) -> Line<'static> {
    let mark = if included { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(mark, theme.key_hint()),
        Span::raw(" Include system indices "),
        Span::styled("(Tab)", theme.text_dim()),
    ])
}

fn render_no_data(f: &mut Frame, area: Rect, view: &WizardView, theme: &Theme) {
    let mut lines: Vec<Line> = NO_DATA_MESSAGE.lines().map(Line::from).collect();
    if let Some(included) = view.system_indices_toggle {
        lines.push(Line::from(""));
        lines.push(toggle_line(included, theme));
    }
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" No data "),
        );
    f.render_widget(paragraph, area);
}

fn render_index_pattern(f: &mut Frame, area: Rect, view: &WizardView, theme: &Theme) {
    let WizardBody::IndexPattern {
        query,
        cursor,
        validation_error,
        status,
        indices,
        is_fetching,
        can_go_next,
    } = &view.body
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let (border_style, title) = match validation_error {
        Some(error) => (theme.error(), format!(" Index pattern: {error} ")),
        None if *can_go_next => (theme.success(), " Index pattern ".to_string()),
        None => (theme.border_focused(), " Index pattern ".to_string()),
    };
    let input = Paragraph::new(query.as_str()).style(theme.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(input, chunks[0]);

    let input_area = chunks[0];
    let max_x = input_area.x + input_area.width.saturating_sub(2);
    let cursor_x = (input_area.x + 1)
        .saturating_add(u16::try_from(*cursor).unwrap_or(u16::MAX))
        .min(max_x);
    f.set_cursor_position((cursor_x, input_area.y + 1));

    let status_line = if *is_fetching {
        Line::from(vec![
            Span::styled(view.spinner, theme.key_hint()),
            Span::styled(" Looking for matching indices...", theme.text_dim()),
        ])
    } else {
        let style = if *can_go_next {
            theme.success()
        } else {
            theme.text()
        };
        Line::from(Span::styled(status.as_str(), style))
    };
    f.render_widget(Paragraph::new(status_line), chunks[1]);

    if let Some(included) = view.system_indices_toggle {
        f.render_widget(Paragraph::new(toggle_line(included, theme)), chunks[2]);
    }

    let items: Vec<ListItem> = indices
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Indices "),
    );
    f.render_widget(list, chunks[3]);
}

fn render_time_field(f: &mut Frame, area: Rect, view: &WizardView, theme: &Theme) {
    let WizardBody::TimeField {
        pattern,
        options,
        selected,
        is_loading,
        is_creating,
    } = &view.body
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let summary = Line::from(vec![
        Span::raw("You've defined "),
        Span::styled(pattern.as_str(), theme.title()),
        Span::raw(" as your index pattern."),
    ]);
    f.render_widget(Paragraph::new(summary), chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .title(" Time filter field name ");

    if *is_loading || *is_creating {
        let message = if *is_creating {
            "Creating index pattern..."
        } else {
            "Loading time fields..."
        };
        let paragraph = Paragraph::new(format!("{} {message}", view.spinner))
            .style(theme.text_dim())
            .block(block);
        f.render_widget(paragraph, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| ListItem::new(option.as_str()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected((!options.is_empty()).then_some(*selected));
    f.render_stateful_widget(list, chunks[1], &mut state);
}
