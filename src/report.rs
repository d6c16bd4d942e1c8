// src/report.rs
use crate::slot::Slot;

pub const NO_SLOTS: &str = "No slot available at the moment.";

/// Slots with capacity left, in their original order.
pub fn select_available(slots: &[Slot]) -> Vec<Slot> {
    slots.iter().filter(|s| s.is_available()).cloned().collect()
}

/// Human-readable report: a count line, then one line per slot.
pub fn format_report(available: &[Slot]) -> String {
    if available.is_empty() {
        return String::from(NO_SLOTS);
    }

    let mut lines = Vec::with_capacity(available.len() + 1);
    lines.push(format!("{} slot(s) open at the moment:", available.len()));
    lines.extend(available.iter().map(format_slot));
    lines.join("\n")
}

/// `Tuesday 05/03: 09:00 - 10:30: 3 place(s)`
pub fn format_slot(slot: &Slot) -> String {
    format!(
        "{}: {} - {}: {} place(s)",
        slot.start.format("%A %d/%m"),
        slot.start.format("%H:%M"),
        slot.end.format("%H:%M"),
        slot.remaining_capacity,
    )
}
