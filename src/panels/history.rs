//! src/panels/history.rs
//!
//! History panel: the most recent samples of a graph, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use braille_monitor::graph::Graph;

pub struct HistoryPanel<'a> {
    pub graph: &'a Graph,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Up to `rows` lines, oldest first; the newest sample is highlighted.
    fn lines(&self, rows: usize) -> Vec<Line<'static>> {
        let mut recent: Vec<u64> = self.graph.samples().rev().take(rows).collect();
        recent.reverse();
        let last_index = recent.len().saturating_sub(1);

        recent
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let vs = if i == last_index {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled("y: ", Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{:>6}", v), vs),
                ])
            })
            .collect()
    }
}

impl crate::ui::Panel for HistoryPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = usize::from(area.height.saturating_sub(2));
        let block = Block::default().title("History").borders(Borders::ALL);
        f.render_widget(Paragraph::new(self.lines(rows)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille_monitor::graph::{GraphConfig, IdRegistry};

    #[test]
    fn test_shows_newest_samples_last() {
        let mut graph = Graph::new(GraphConfig::new(5, 2), &IdRegistry::new());
        for v in [1, 2, 3, 4] {
            graph.on_new_sample(v).unwrap();
        }
        let lines = HistoryPanel::new(&graph).lines(3);
        let values: Vec<String> = lines
            .iter()
            .map(|l| l.spans[1].content.trim().to_string())
            .collect();
        assert_eq!(values, vec!["2", "3", "4"]);
        assert_eq!(lines[2].spans[1].style.fg, Some(Color::Red));
        assert_eq!(lines[0].spans[1].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_zero_rows() {
        let graph = Graph::new(GraphConfig::new(5, 2), &IdRegistry::new());
        assert!(HistoryPanel::new(&graph).lines(0).is_empty());
    }
}
