//! Greedy column assignment within one collision group.
//!
//! Entries are placed in the lowest-indexed column whose previous occupant
//! has ended; a new column opens only when every existing one is busy.
//! Because entries arrive sorted by start instant, this is interval-graph
//! coloring: the number of columns opened equals the maximum number of
//! entries active at any single instant in the group.

use chrono::NaiveDateTime;

use daygrid_core::time::TimeSpan;

use super::Entry;

/// One column of the group: the entries placed in it (as positions into
/// the group slice, in start order) and the end instant of the last one.
#[derive(Debug)]
pub(crate) struct Column {
    entries: Vec<usize>,
    end: NaiveDateTime,
}

impl Column {
    fn open(position: usize, end: NaiveDateTime) -> Self {
        Self {
            entries: vec![position],
            end,
        }
    }

    fn push(&mut self, position: usize, end: NaiveDateTime) {
        self.entries.push(position);
        self.end = end;
    }

    pub(crate) fn entries(&self) -> &[usize] {
        &self.entries
    }
}

/// Assign every entry of `group` (sorted by start instant) to a column.
pub(crate) fn assign(group: &[Entry]) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for (position, entry) in group.iter().enumerate() {
        // Lowest-indexed column that is free at this entry's start
        match columns
            .iter_mut()
            .find(|column| column.end <= entry.span.start())
        {
            Some(column) => column.push(position, entry.span.end()),
            None => columns.push(Column::open(position, entry.span.end())),
        }
    }
    columns
}

/// Count the columns an entry's frame can span, starting from its own.
///
/// Starting at the column to the right of `from`, consecutive columns with
/// no entry overlapping `span` are absorbed; the first column with a
/// concurrent occupant stops the expansion. This is what lets an event
/// widen into space whose column neighbors have already ended, without
/// ever intruding on a temporally concurrent event.
pub(crate) fn reachable_columns(
    columns: &[Column],
    from: usize,
    span: TimeSpan,
    group: &[Entry],
) -> usize {
    let mut reachable = 1;
    for column in &columns[from + 1..] {
        let occupied = column
            .entries
            .iter()
            .any(|&position| group[position].span.overlaps(&span));
        if occupied {
            break;
        }
        reachable += 1;
    }
    reachable
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entries(spans: &[((u32, u32), (u32, u32))]) -> Vec<Entry> {
        spans
            .iter()
            .enumerate()
            .map(|(index, &(start, end))| Entry {
                index,
                span: TimeSpan::new(
                    NaiveDate::from_ymd_opt(2026, 3, 14)
                        .unwrap()
                        .and_hms_opt(start.0, start.1, 0)
                        .unwrap(),
                    NaiveDate::from_ymd_opt(2026, 3, 14)
                        .unwrap()
                        .and_hms_opt(end.0, end.1, 0)
                        .unwrap(),
                ),
            })
            .collect()
    }

    #[test]
    fn test_non_overlapping_entries_share_one_column() {
        let group = entries(&[((9, 0), (9, 30)), ((9, 30), (10, 0)), ((10, 0), (11, 0))]);
        let columns = assign(&group);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].entries(), &[0, 1, 2]);
    }

    #[test]
    fn test_concurrent_entries_open_new_columns() {
        let group = entries(&[((9, 0), (10, 0)), ((9, 0), (10, 0)), ((9, 0), (10, 0))]);
        let columns = assign(&group);

        assert_eq!(columns.len(), 3);
        for (index, column) in columns.iter().enumerate() {
            assert_eq!(column.entries(), &[index]);
        }
    }

    #[test]
    fn test_freed_column_is_reused_lowest_first() {
        let group = entries(&[
            ((9, 0), (9, 30)),  // column 0
            ((9, 0), (11, 0)),  // column 1
            ((9, 30), (10, 0)), // column 0 is free again
        ]);
        let columns = assign(&group);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].entries(), &[0, 2]);
        assert_eq!(columns[1].entries(), &[1]);
    }

    #[test]
    fn test_column_count_equals_peak_concurrency() {
        // Peak of three concurrent entries at 09:45
        let group = entries(&[
            ((9, 0), (10, 0)),
            ((9, 30), (10, 30)),
            ((9, 45), (11, 0)),
            ((10, 30), (11, 30)),
        ]);
        assert_eq!(assign(&group).len(), 3);
    }

    #[test]
    fn test_reachable_columns_expand_over_ended_neighbors() {
        let group = entries(&[
            ((9, 0), (12, 0)),  // column 0
            ((9, 0), (9, 30)),  // column 1
            ((9, 0), (9, 30)),  // column 2
            ((10, 0), (11, 0)), // column 1, after the morning pair ends
        ]);
        let columns = assign(&group);
        assert_eq!(columns.len(), 3);

        // The late entry sees nothing concurrent in column 2
        assert_eq!(reachable_columns(&columns, 1, group[3].span, &group), 2);
        // The all-morning entry is blocked immediately by column 1
        assert_eq!(reachable_columns(&columns, 0, group[0].span, &group), 1);
        // The rightmost column has nowhere to go
        assert_eq!(reachable_columns(&columns, 2, group[2].span, &group), 1);
    }
}
