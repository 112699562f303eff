//! src/ui.rs
//!
//! Top-level UI module: the `Panel` trait and screen layout.

pub mod layout;

pub use layout::Screen;

use ratatui::Frame;
use ratatui::layout::Rect;

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}
