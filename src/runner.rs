// src/runner.rs
use tracing::info;

use crate::{
    config::options::FetchOptions,
    error::{Error, ParseError},
    report::{format_report, select_available},
    slot::Slot,
    specs,
};

/// Top-level pipeline: fetch → parse → filter → format. Returns the report text.
pub fn run(opts: &FetchOptions) -> Result<String, Error> {
    let slots = specs::planning::fetch(opts)?;
    Ok(report_for(&slots))
}

/// Same as `run`, minus the network.
pub fn check(html_doc: &str) -> Result<String, ParseError> {
    let slots = specs::planning::parse_planning(html_doc)?;
    Ok(report_for(&slots))
}

fn report_for(slots: &[Slot]) -> String {
    let available = select_available(slots);
    info!(total = slots.len(), open = available.len(), "planning checked");
    format_report(&available)
}
