//! src/lib.rs
//!
//! Sample buffering and braille rendering engine for scrolling terminal graphs.

pub mod graph;
