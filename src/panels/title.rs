//! src/panels/title.rs
//!
//! Header: application name and the graph currently focused.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel<'a> {
    pub title: &'a str,
    pub focused: &'a str,
}

impl<'a> TitlePanel<'a> {
    pub fn new(title: &'a str, focused: &'a str) -> Self {
        Self { title, focused }
    }
}

impl crate::ui::Panel for TitlePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("   focus: {}", self.focused)),
        ]);
        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
