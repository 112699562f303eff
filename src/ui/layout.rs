//! src/ui/layout.rs
//!
//! Splits the terminal into title, one region per graph, and footer.
//!
//! The same split is used both to size the graphs (before drawing) and to
//! place the panels, so a graph's ring always matches its on-screen width.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas belonging to one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphAreas {
    /// Bordered block holding the braille graph.
    pub chart: Rect,
    pub info: Rect,
    pub history: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub title: Rect,
    pub graphs: Vec<GraphAreas>,
    pub footer: Rect,
}

impl Screen {
    /// Lay out `area` for `graph_count` stacked graphs.
    pub fn new(area: Rect, graph_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let count = u32::try_from(graph_count.max(1)).unwrap_or(u32::MAX);
        let regions = Layout::default()
            .direction(Direction::Vertical)
            .constraints((0..graph_count).map(|_| Constraint::Ratio(1, count)))
            .split(rows[1]);

        let graphs = regions.iter().map(|region| split_region(*region)).collect();

        Self {
            title: rows[0],
            graphs,
            footer: rows[2],
        }
    }
}

/// Graph on the left, info above history on the right.
fn split_region(region: Rect) -> GraphAreas {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(region);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(cols[1]);
    GraphAreas {
        chart: cols[0],
        info: side[0],
        history: side[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_graphs_split_body() {
        let screen = Screen::new(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(screen.title, Rect::new(0, 0, 80, 3));
        assert_eq!(screen.footer, Rect::new(0, 21, 80, 3));
        assert_eq!(screen.graphs.len(), 2);

        let total: u16 = screen.graphs.iter().map(|g| g.chart.height).sum();
        assert_eq!(total, 18);
        for g in &screen.graphs {
            assert_eq!(g.chart.x, 0);
            assert_eq!(g.chart.width + g.info.width, 80);
            assert_eq!(g.info.height + g.history.height, g.chart.height);
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let screen = Screen::new(Rect::new(0, 0, 3, 2), 2);
        assert_eq!(screen.graphs.len(), 2);
    }
}
