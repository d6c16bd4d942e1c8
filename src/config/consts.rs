// src/config/consts.rs
use crate::core::html::Marker;

// Net config
pub const PLANNING_URL: &str = "https://www.iclub.be/register.asp?ClubID=28&action2=Planning&LG=FR";
pub const USER_AGENT: &str = concat!("calypso_slots/", env!("CARGO_PKG_VERSION"));

// Page markers
pub const DATE_HEADING: Marker = Marker::exact("div", "change-date");
pub const SLOT_CELL: Marker = Marker::exact("td", "Formule");
pub const SLOT_SPAN: Marker = Marker::tag("span");
pub const FULLY_BOOKED_CLASS: &str = "place-complet";

// Text formats
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M";
pub const TIME_SEPARATOR: &str = " - ";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
