// src/specs/planning.rs
use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::config::consts::{
    DATE_FORMAT, DATE_HEADING, FULLY_BOOKED_CLASS, SLOT_CELL, SLOT_SPAN, TIME_FORMAT, TIME_SEPARATOR,
};
use crate::config::options::FetchOptions;
use crate::core::html::{MarkupNode, Page, normalize_ws};
use crate::core::net;
use crate::error::{Error, ParseError};
use crate::slot::Slot;

/// Hours and capacity read from one slot cell, not yet tied to a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotCell {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub capacity: u32,
}

/// Date heading texts in document order.
/// A heading is only parsed when the date cursor reaches it.
#[derive(Clone, Debug, Default)]
pub struct DateHeadings {
    texts: Vec<String>,
}

impl DateHeadings {
    pub fn new(texts: Vec<String>) -> Self {
        Self { texts }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Starts over from the first heading on every call.
    pub fn dates(&self) -> impl Iterator<Item = Result<NaiveDate, ParseError>> + '_ {
        self.texts.iter().map(|t| parse_date(t))
    }
}

/// Decides which date each slot cell belongs to.
pub trait DateGrouping {
    fn assign(&self, headings: &DateHeadings, cells: &[SlotCell]) -> Result<Vec<Slot>, ParseError>;
}

/// Headings and cells are siblings on the page, not nested. Within one day the
/// start times never go down, so a start time earlier than the previous one
/// means the next heading has begun.
#[derive(Clone, Copy, Debug, Default)]
pub struct StartTimeWrap;

impl DateGrouping for StartTimeWrap {
    fn assign(&self, headings: &DateHeadings, cells: &[SlotCell]) -> Result<Vec<Slot>, ParseError> {
        let mut dates = headings.dates();
        let mut current = dates.next().ok_or(ParseError::NoDateHeadings)??;
        let mut used = 1usize;
        let mut prev_start: Option<NaiveTime> = None;

        let mut slots = Vec::with_capacity(cells.len());
        for (i, cell) in cells.iter().enumerate() {
            if let Some(prev) = prev_start {
                if cell.start < prev {
                    current = match dates.next() {
                        Some(date) => date?,
                        None => {
                            return Err(ParseError::DatesExhausted {
                                slot: i + 1,
                                headings: headings.len(),
                                last: current,
                            });
                        }
                    };
                    used += 1;
                } else if cell.start == prev {
                    // Could be two offers at the same hour, or a new day that
                    // happens to open at the same time. Nothing tells them apart.
                    warn!(slot = i + 1, date = %current, start = %cell.start,
                        "start time repeats previous slot; kept on the same date");
                }
            }
            prev_start = Some(cell.start);
            slots.push(Slot::on(current, cell.start, cell.end, cell.capacity));
        }

        if used < headings.len() {
            warn!(used, headings = headings.len(), "unused date headings; a day boundary may have been missed");
        }
        Ok(slots)
    }
}

/// Fetch the planning page and parse every slot on it, booked or not.
pub fn fetch(opts: &FetchOptions) -> Result<Vec<Slot>, Error> {
    let html_doc = net::fetch_planning_page(opts)?;
    Ok(parse_planning(&html_doc)?)
}

/// Parse every slot on a planning page, in page order.
pub fn parse_planning(html_doc: &str) -> Result<Vec<Slot>, ParseError> {
    parse_planning_with(html_doc, &StartTimeWrap)
}

pub fn parse_planning_with<G: DateGrouping>(html_doc: &str, grouping: &G) -> Result<Vec<Slot>, ParseError> {
    let t = Instant::now();
    let page = Page::parse(html_doc);
    let slots = parse_tree(&page.root(), grouping)?;
    debug!(slots = slots.len(), elapsed = ?t.elapsed(), "parsed planning page");
    Ok(slots)
}

/// Works on any `MarkupNode` tree, so fixtures don't need a real HTML parser.
pub fn parse_tree<N: MarkupNode, G: DateGrouping>(root: &N, grouping: &G) -> Result<Vec<Slot>, ParseError> {
    let headings = DateHeadings::new(
        root.find_all(&DATE_HEADING)?
            .iter()
            .map(|h| h.inner_text())
            .collect(),
    );
    if headings.is_empty() {
        return Err(ParseError::NoDateHeadings);
    }

    let cell_nodes = root.find_all(&SLOT_CELL)?;
    if cell_nodes.is_empty() {
        return Err(ParseError::NoSlotCells);
    }

    let cells = cell_nodes
        .iter()
        .enumerate()
        .map(|(i, node)| read_slot_cell(node, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(headings = headings.len(), cells = cells.len(), "planning markup located");
    grouping.assign(&headings, &cells)
}

/// Second span holds the hour range, last span the capacity.
fn read_slot_cell<N: MarkupNode>(cell: &N, slot: usize) -> Result<SlotCell, ParseError> {
    let spans = cell.find_all(&SLOT_SPAN)?;
    let hours = spans
        .get(1)
        .ok_or(ParseError::MissingElement { slot, what: "hour range" })?;
    let places = spans
        .last()
        .ok_or(ParseError::MissingElement { slot, what: "capacity" })?;

    let (start, end) = parse_time_range(&hours.inner_text())?;
    let capacity = parse_capacity(places.has_class(FULLY_BOOKED_CLASS), &places.inner_text())?;
    Ok(SlotCell { start, end, capacity })
}

/// Date token is the second word of the heading, e.g. `Mardi 05/03/2024`.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let token = text
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ParseError::MissingDateToken { text: normalize_ws(text) })?;

    NaiveDate::parse_from_str(token, DATE_FORMAT)
        .map_err(|source| ParseError::BadDate { token: String::from(token), source })
}

/// `HH:MM - HH:MM` → (start, end).
pub fn parse_time_range(text: &str) -> Result<(NaiveTime, NaiveTime), ParseError> {
    let clean = normalize_ws(text);
    let parts: Vec<&str> = clean.split(TIME_SEPARATOR).collect();
    let [start, end] = parts.as_slice() else {
        return Err(ParseError::BadTimeRange { text: clean.clone() });
    };

    let start = parse_time(start)?;
    let end = parse_time(end)?;
    if end < start {
        return Err(ParseError::InvertedRange { start, end });
    }
    Ok((start, end))
}

fn parse_time(token: &str) -> Result<NaiveTime, ParseError> {
    let token = token.trim();
    NaiveTime::parse_from_str(token, TIME_FORMAT)
        .map_err(|source| ParseError::BadTime { token: String::from(token), source })
}

/// Fully booked wins over whatever the text says.
pub fn parse_capacity(fully_booked: bool, text: &str) -> Result<u32, ParseError> {
    if fully_booked {
        return Ok(0);
    }
    text.split_whitespace()
        .next()
        .and_then(|first| first.parse::<u32>().ok())
        .ok_or_else(|| ParseError::BadCapacity { text: normalize_ws(text) })
}
