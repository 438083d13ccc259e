//! Screen layout: console on top, PIN pad below, key hints at the bottom

use crate::app::App;
use crate::keymap;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &App, f: &mut Frame) {
    let [console_area, pad_area, footer_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_console(app, console_area, f);
    render_pin_pad(app, pad_area, f);

    let footer = Paragraph::new(keymap::hints()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, footer_area);
}

fn render_console(app: &App, area: Rect, f: &mut Frame) {
    let title = match app.console.scroll_offset() {
        Some(offset) => format!(
            " Scene Console (size {}) - scrolled to {} ",
            app.console.font_size(),
            offset
        ),
        None => format!(" Scene Console (size {}) ", app.console.font_size()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(app.surface.text()).block(block);
    f.render_widget(paragraph, area);
}

fn render_pin_pad(app: &App, area: Rect, f: &mut Frame) {
    let max = app.pin_pad.max_length().unwrap_or(0);
    let typed = app.pin_pad.entered().chars().count();
    let slots: Vec<Span> = (0..max)
        .map(|i| {
            if i < typed {
                Span::styled("● ", Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::raw("_ ")
            }
        })
        .collect();

    let block = Block::default()
        .title(" PIN ")
        .title_bottom(Line::from(format!(" {} ", app.status.borrow())).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(glow_color(app.glow.opacity())));

    let paragraph = Paragraph::new(Line::from(slots)).block(block);
    f.render_widget(paragraph, area);
}

/// Blend from dark gray towards white as the glow opacity rises
fn glow_color(opacity: f32) -> Color {
    let base = 80.0;
    let level = (base + (255.0 - base) * opacity.clamp(0.0, 1.0)) as u8;
    Color::Rgb(level, level, level)
}
