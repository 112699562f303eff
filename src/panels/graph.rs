//! src/panels/graph.rs
//!
//! Graph panel: the braille frame of one graph inside a coloured border.
//!
//! The panel never sizes the graph. The UI loop reflows every graph to the
//! inner area of its block before drawing, so the frame fills it exactly.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use braille_monitor::graph::Graph;

pub struct GraphPanel<'a> {
    pub graph: &'a Graph,
    pub title: &'a str,
    pub color: Color,
    pub focused: bool,
}

impl<'a> GraphPanel<'a> {
    pub fn new(graph: &'a Graph, title: &'a str, color: Color) -> Self {
        Self {
            graph,
            title,
            color,
            focused: false,
        }
    }

    /// Block drawn around the frame; also used to compute the inner area.
    pub fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL)
    }

    fn heading(&self) -> String {
        match self.graph.latest() {
            Some(v) => format!("{} {}", self.title, v),
            None => self.title.to_string(),
        }
    }
}

impl crate::ui::Panel for GraphPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .graph
            .frame()
            .lines()
            .into_iter()
            .map(Line::from)
            .collect();

        let mut block = Self::block().title(self.heading());
        if self.focused {
            block = block.border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let p = Paragraph::new(lines)
            .style(Style::default().fg(self.color))
            .block(block);
        f.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Panel;
    use braille_monitor::graph::{GraphConfig, IdRegistry};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draws_frame_inside_border() {
        let mut graph = Graph::new(GraphConfig::new(4, 2).ceiling(100), &IdRegistry::new());
        for v in [25, 50, 75, 100] {
            graph.on_new_sample(v).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(6, 4)).unwrap();
        terminal
            .draw(|f| GraphPanel::new(&graph, "CPU", Color::Magenta).draw(f, f.area()))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(4, 1)].symbol(), "⣿");
        assert_eq!(buf[(1, 2)].symbol(), " ");
        assert_eq!(buf[(2, 2)].symbol(), "⢀");
        assert_eq!(buf[(4, 2)].symbol(), "⣿");
        assert_eq!(buf[(4, 2)].fg, Color::Magenta);
    }

    #[test]
    fn test_heading_shows_latest_sample() {
        let mut graph = Graph::new(GraphConfig::new(2, 1), &IdRegistry::new());
        let panel = GraphPanel::new(&graph, "GPU", Color::Blue);
        assert_eq!(panel.heading(), "GPU 0");
        graph.on_new_sample(37).unwrap();
        let panel = GraphPanel::new(&graph, "GPU", Color::Blue);
        assert_eq!(panel.heading(), "GPU 37");
    }

    #[test]
    fn test_block_inner_area_excludes_border() {
        let inner = GraphPanel::block().inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(1, 1, 8, 3));
    }
}
