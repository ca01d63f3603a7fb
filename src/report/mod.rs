//! Report module - terminal tables and JSON export

pub mod export;
pub mod tables;

pub use export::*;
pub use tables::*;
