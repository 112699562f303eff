//! src/net.rs
//!
//! Network-facing control surface.

pub mod remote;
