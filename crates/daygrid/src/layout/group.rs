//! Collision grouping pass.
//!
//! Splits a start-sorted entry sequence into collision groups: maximal
//! clusters in which every member is connected to every other by a chain
//! of pairwise time overlaps (directly or through intermediate events).
//! Groups never interact; each is laid out independently and may use the
//! full column width.

use chrono::NaiveDateTime;

use super::Entry;

/// Split `entries` (sorted by start instant) into collision groups.
///
/// A single scan keeps the maximum end instant seen in the current group;
/// an entry starting at or after that boundary cannot overlap any member
/// (directly or transitively) and opens a new group.
pub(crate) fn collision_groups(entries: &[Entry]) -> Vec<&[Entry]> {
    let mut groups = Vec::new();
    let mut group_start = 0;
    let mut boundary: Option<NaiveDateTime> = None;

    for (position, entry) in entries.iter().enumerate() {
        match boundary {
            Some(end) if entry.span.start() >= end => {
                groups.push(&entries[group_start..position]);
                group_start = position;
                boundary = Some(entry.span.end());
            }
            Some(end) => {
                boundary = Some(end.max(entry.span.end()));
            }
            None => {
                boundary = Some(entry.span.end());
            }
        }
    }
    if group_start < entries.len() {
        groups.push(&entries[group_start..]);
    }
    groups
}
