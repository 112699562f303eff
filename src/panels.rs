//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod footer;
pub mod graph;
pub mod history;
pub mod info;
pub mod title;

pub use footer::FooterPanel;
pub use graph::GraphPanel;
pub use history::HistoryPanel;
pub use info::InfoPanel;
pub use title::TitlePanel;
