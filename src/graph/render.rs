//! src/graph/render.rs
//!
//! Builds a width×height glyph grid from a graph and serialises it to text.
//!
//! The grid is rebuilt from scratch on every call. Columns run left to right
//! from the oldest to the newest sample; the newest always sits in the
//! rightmost column.

use std::fmt;

use super::error::MAX_DIMENSION;
use super::glyph::{self, BLANK};
use super::state::Graph;

/// Row-major grid of single-glyph cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl RenderFrame {
    /// A frame of blank cells.
    ///
    /// Each axis is capped at [`MAX_DIMENSION`], so the cell count cannot
    /// overflow `usize` on 32-bit or wider targets.
    pub fn blank(width: usize, height: usize) -> Self {
        let width = width.min(MAX_DIMENSION);
        let height = height.min(MAX_DIMENSION);
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at `(row, col)`, rows counted from the top.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    fn set(&mut self, row: usize, col: usize, glyph: char) {
        self.cells[row * self.width + col] = glyph;
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }

    /// Each row as a `String`, top first, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for RenderFrame {
    /// One newline-terminated line per row, cells concatenated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.width * 3 + 1);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter());
            line.push('\n');
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Render `graph` into a `width`×`height` frame.
///
/// When the ring holds more samples than `width`, only the newest `width`
/// are drawn; when it holds fewer, the leading columns stay blank. Sizes
/// past [`MAX_DIMENSION`] are capped.
pub fn render(graph: &Graph, width: usize, height: usize) -> RenderFrame {
    let mut frame = RenderFrame::blank(width, height);
    let (width, height) = (frame.width(), frame.height());
    let ring = graph.ring();
    let skip = ring.capacity().saturating_sub(width);
    let first_col = width.saturating_sub(ring.capacity());
    let scale = graph.scale();
    let observed_max = graph.observed_max();
    let orientation = graph.orientation();

    for (col, sample) in (first_col..width).zip(ring.iter().skip(skip)) {
        let rows = scale.rows(sample, height, observed_max);
        for (row, glyph) in glyph::column(rows, height, orientation) {
            frame.set(row, col, glyph);
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::glyph::FULL;
    use crate::graph::{GraphConfig, IdRegistry};

    fn graph_with(config: GraphConfig, samples: &[i64]) -> Graph {
        let mut graph = Graph::new(config, &IdRegistry::new());
        for &s in samples {
            graph.on_new_sample(s).unwrap();
        }
        graph
    }

    #[test]
    fn test_end_to_end_fixed_ceiling() {
        let graph = graph_with(GraphConfig::new(4, 4).ceiling(100), &[25, 50, 75, 100]);
        let text = render(&graph, 4, 4).to_string();
        assert_eq!(text, "   ⣿\n  ⢰⣿\n ⢠⣿⣿\n⢀⣿⣿⣿\n");
    }

    #[test]
    fn test_end_to_end_inverted() {
        let graph = graph_with(
            GraphConfig::new(4, 4).ceiling(100).inverted(true),
            &[25, 50, 75, 100],
        );
        let frame = render(&graph, 4, 4);
        assert_eq!(frame.lines(), vec!["⠈⣿⣿⣿", " ⠘⣿⣿", "  ⠸⣿", "   ⣿"]);
    }

    #[test]
    fn test_shape_is_always_width_by_height() {
        let graph = graph_with(GraphConfig::new(7, 3), &[1, 5, 2, 8, 0, 3]);
        for (w, h) in [(7, 3), (3, 5), (10, 1), (0, 4), (5, 0), (0, 0)] {
            let frame = render(&graph, w, h);
            let text = frame.to_string();
            let lines: Vec<&str> = text.split_terminator('\n').collect();
            assert_eq!(lines.len(), h, "{}x{}", w, h);
            for line in lines {
                assert_eq!(line.chars().count(), w, "{}x{}", w, h);
            }
        }
    }

    #[test]
    fn test_zero_samples_still_occupy_a_column() {
        let graph = graph_with(GraphConfig::new(3, 2).ceiling(10), &[10, 0, 10]);
        assert_eq!(render(&graph, 3, 2).lines(), vec!["⣿ ⣿", "⣿ ⣿"]);
    }

    #[test]
    fn test_all_zero_auto_scale_is_blank() {
        let graph = graph_with(GraphConfig::new(3, 3), &[0, 0, 0]);
        assert_eq!(render(&graph, 3, 3), RenderFrame::blank(3, 3));
    }

    #[test]
    fn test_auto_scale_tallest_column_is_full() {
        let graph = graph_with(GraphConfig::new(3, 4), &[2, 8, 4]);
        let frame = render(&graph, 3, 4);
        for row in 0..4 {
            assert_eq!(frame.get(row, 1), Some(FULL));
        }
        // 2 * 4 / 8 = 1 row
        assert_eq!(frame.get(3, 0), Some('⢀'));
        assert_eq!(frame.get(2, 0), Some(BLANK));
    }

    #[test]
    fn test_narrow_render_shows_newest_samples() {
        let graph = graph_with(GraphConfig::new(4, 1).ceiling(1), &[1, 0, 0, 1]);
        assert_eq!(render(&graph, 2, 1).lines(), vec![" ⣿"]);
    }

    #[test]
    fn test_wide_render_pads_left() {
        let graph = graph_with(GraphConfig::new(2, 1).ceiling(1), &[1, 1]);
        assert_eq!(render(&graph, 4, 1).lines(), vec!["  ⣿⣿"]);
    }

    #[test]
    fn test_upright_and_inverted_are_mirrors() {
        let samples = [3, 9, 0, 14, 6, 11, 1];
        let up = graph_with(GraphConfig::new(7, 5), &samples);
        let down = graph_with(GraphConfig::new(7, 5).inverted(true), &samples);
        let up = render(&up, 7, 5);
        let down = render(&down, 7, 5);
        for row in 0..5 {
            for col in 0..7 {
                let a = up.get(row, col) != Some(BLANK);
                let b = down.get(4 - row, col) != Some(BLANK);
                assert_eq!(a, b, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_blank_caps_each_axis() {
        let frame = RenderFrame::blank(3, usize::MAX);
        assert_eq!(frame.width(), 3);
        assert_eq!(frame.height(), MAX_DIMENSION);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let frame = RenderFrame::blank(2, 2);
        assert_eq!(frame.get(2, 0), None);
        assert_eq!(frame.get(0, 2), None);
    }
}
