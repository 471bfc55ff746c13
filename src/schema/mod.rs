//! Schema module - Configuration, genome and result types for seating search.

mod arrangement;
mod config;
mod evolution;

pub use arrangement::*;
pub use config::*;
pub use evolution::*;
