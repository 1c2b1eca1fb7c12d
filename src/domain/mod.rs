//! Domain types: cells, genetic code ring, configuration

pub mod cell;
pub mod code;
pub mod config;

pub use cell::{Cell, Infection, IMMUNE_MAX};
pub use config::PlagueConfig;
