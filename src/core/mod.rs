//! Crate-wide plumbing shared by the domain and simulation layers

pub mod error;

pub use error::{PlagueError, PlagueResult};
