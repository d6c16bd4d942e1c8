// src/error.rs
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Anything that stops a run. There is no partial result.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("GET {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("GET {url}: could not read response body")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no date headings found on planning page")]
    NoDateHeadings,

    #[error("no slot cells found on planning page")]
    NoSlotCells,

    #[error("date heading {text:?} has no date token")]
    MissingDateToken { text: String },

    #[error("invalid date {token:?}, expected DD/MM/YYYY")]
    BadDate {
        token: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid hour range {text:?}, expected HH:MM - HH:MM")]
    BadTimeRange { text: String },

    #[error("invalid time {token:?}, expected HH:MM")]
    BadTime {
        token: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("hour range ends at {end} before it starts at {start}")]
    InvertedRange { start: NaiveTime, end: NaiveTime },

    #[error("slot cell #{slot}: missing {what}")]
    MissingElement { slot: usize, what: &'static str },

    #[error("invalid capacity text {text:?}")]
    BadCapacity { text: String },

    #[error("slot cell #{slot} starts a new day but all {headings} date headings are used (last: {last})")]
    DatesExhausted {
        slot: usize,
        headings: usize,
        last: NaiveDate,
    },

    #[error("invalid marker selector {0:?}")]
    Selector(String),
}
