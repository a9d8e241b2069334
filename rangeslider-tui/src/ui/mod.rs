//! Top-level UI layout — header, slider body, footer and status bar.

pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use widgets::slider::SliderWidget;

const HINTS: &str = " [h/l]step [H/L]x10 [Tab]handle [click]snap [r]reset [q]quit";

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(Block::default().style(app.theme.base_style()), f.area());
    draw_slider(f, chunks[0], app);
    draw_footer(f, chunks[1], app);
    draw_status(f, chunks[3], app);
}

fn draw_slider(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let title = format!(" {} ", app.connector.attribute_name());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(title)
        .title_style(theme.title_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.surface.view() {
        Some(view) => {
            app.surface.set_track(SliderWidget::track_rect(inner));
            f.render_widget(SliderWidget::new(&view, theme), inner);
        }
        None => {
            f.render_widget(
                Paragraph::new("Waiting for range…").style(theme.muted_style()),
                inner,
            );
        }
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let controller = app.adapter.controller();
    let [lo, hi] = app.adapter.state().start;
    let range = app.connector.range();

    let lines = vec![
        Line::from(vec![
            Span::styled(" Selection: ", theme.muted_style()),
            Span::raw(format!(
                "{} – {}",
                controller.format_tooltip(lo),
                controller.format_tooltip(hi)
            )),
            Span::styled(
                format!(
                    "  of {} – {}",
                    controller.format_tooltip(range.min),
                    controller.format_tooltip(range.max)
                ),
                theme.muted_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Matches: ", theme.muted_style()),
            Span::raw(format!("{} / {}", app.hits(), app.values.len())),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(HINTS, theme.muted_style())];
    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            msg.as_str(),
            ratatui::style::Style::default().fg(theme.status_color(*level)),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
