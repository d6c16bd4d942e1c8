// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod report;
pub mod runner;
pub mod slot;
pub mod specs;

pub use error::{Error, NetworkError, ParseError};
pub use slot::Slot;
