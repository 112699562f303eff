//! src/panels/info.rs
//!
//! Graph info panel: identity, scale mode, orientation and window stats.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use braille_monitor::graph::{Graph, Orientation};

/// Read-only info panel; `highlighted` affects border style.
pub struct InfoPanel<'a> {
    pub graph: &'a Graph,
    pub title: &'a str,
    pub highlighted: bool,
}

impl<'a> InfoPanel<'a> {
    pub fn new(graph: &'a Graph, title: &'a str) -> Self {
        Self {
            graph,
            title,
            highlighted: false,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let g = self.graph;
        let orientation = match g.orientation() {
            Orientation::Upright => "upright",
            Orientation::Inverted => "inverted",
        };
        let updated = g
            .last_update()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());

        vec![
            Line::from(vec![
                Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  id={}", g.id())),
            ]),
            Line::from(format!("scale={}  {}", g.scale(), orientation)),
            Line::from(format!(
                "last={}  max={}",
                g.latest().unwrap_or(0),
                g.observed_max()
            )),
            Line::from(format!("size={}x{}", g.width(), g.height())),
            Line::from(format!("updated={}", updated)),
        ]
    }
}

impl crate::ui::Panel for InfoPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut block = Block::default().title("Info").borders(Borders::ALL);
        if self.highlighted {
            block = block.style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }

        f.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}
