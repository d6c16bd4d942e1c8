// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read one remote page: which markers locate the ground
//! truth in the HTML and how to turn that text into typed values.
//!
//! ## What lives here
//! - **Pure parsing** over the `core::html::MarkupNode` capability, so specs can be
//!   fed a parsed document or a hand-built tree.
//! - **Marker choice** (`config::consts`) and the text formats hanging off them.
//! - A thin `fetch()` per page that pairs `core::net` with the parser.
//!
//! ## What does **not** live here
//! - Filtering and report formatting (`report`).
//! - Printing, logging setup, exit codes (`cli`).
//!
//! ## Conventions
//! - Page order is preserved; nothing is re-sorted.
//! - Malformed markup is an error, never a partial result.
//!
//! ## Current specs
//! - `planning` – dated time slots and their remaining capacity.
pub mod planning;
