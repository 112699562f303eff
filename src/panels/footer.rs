//! src/panels/footer.rs
//!
//! Footer: key bindings plus the latest status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const CONTROLS: &str = "TAB=Focus  A=Autoscale  F=Fixed ceiling  I=Invert  Q=Quit";

pub struct FooterPanel<'a> {
    pub status: &'a str,
}

impl<'a> FooterPanel<'a> {
    pub fn new(status: &'a str) -> Self {
        Self { status }
    }

    fn line(&self) -> Line<'a> {
        Line::from(vec![
            Span::raw(CONTROLS),
            Span::raw("   "),
            Span::styled(self.status, Style::default().fg(Color::Green)),
        ])
    }
}

impl crate::ui::Panel for FooterPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.line())
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ends_with_status() {
        let line = FooterPanel::new("Source /dev/ttyACM0 closed.").line();
        assert_eq!(line.spans[0].content, CONTROLS);
        assert_eq!(line.spans[2].content, "Source /dev/ttyACM0 closed.");
        assert_eq!(line.spans[2].style.fg, Some(Color::Green));
    }
}
