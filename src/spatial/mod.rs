//! Spatial layout of the board

pub mod grid;
