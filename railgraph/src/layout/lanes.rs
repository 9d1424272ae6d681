use std::collections::HashMap;

use crate::layout::types::ColumnIdx;

/// Tracks which columns are reserved and which commit each of them expects
/// next further down the stream.
///
/// A column stays active while some already-placed child is waiting for a
/// specific parent to appear. A commit claims the lane waiting for it when
/// one exists, otherwise it opens the lowest free lane. Scans probe column
/// indices upward instead of iterating the map, so results never depend on
/// hash iteration order.
#[derive(Debug, Default)]
pub(crate) struct LaneTracker {
    /// column -> commit id expected next in that column
    active: HashMap<ColumnIdx, String>,
}

impl LaneTracker {
    pub(crate) fn new() -> Self {
        Self {
            active: HashMap::new(),
        }
    }

    /// Column for the given commit: the lowest column already waiting for
    /// it, or the lowest free column when none is.
    pub(crate) fn assign(&self, id: &str) -> ColumnIdx {
        if let Some(column) = self.expected_column(id) {
            return column;
        }
        self.first_free(0)
    }

    /// After a commit has been placed at `column`, retire every lane that
    /// was waiting for it and reserve lanes for its parents: the first
    /// parent keeps the commit's own column so the primary lineage stays
    /// vertical, each further parent takes the first free column to the
    /// right of it.
    pub(crate) fn advance(&mut self, id: &str, column: ColumnIdx, parents: &[String]) {
        self.active.retain(|_, expected| expected != id);

        if let Some(first) = parents.first() {
            self.active.insert(column, first.clone());
        }
        for parent in parents.iter().skip(1) {
            let free = self.first_free(column + 1);
            self.active.insert(free, parent.clone());
        }
    }

    /// Lowest column at or above `from` with no reservation.
    fn first_free(&self, from: ColumnIdx) -> ColumnIdx {
        let mut column = from;
        while self.active.contains_key(&column) {
            column += 1;
        }
        column
    }

    /// Lowest column expecting `id`, if any. More than one lane can wait for
    /// the same commit when siblings share a parent.
    fn expected_column(&self, id: &str) -> Option<ColumnIdx> {
        self.active
            .iter()
            .filter(|(_, expected)| expected.as_str() == id)
            .map(|(&column, _)| column)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_history_reuses_lane() {
        let mut tracker = LaneTracker::new();
        // HEAD commit B with parent A
        let column_b = tracker.assign("B");
        assert_eq!(column_b, 0);
        tracker.advance("B", column_b, &["A".to_string()]);
        // Now A should reuse column 0
        assert_eq!(tracker.assign("A"), 0);
    }

    #[test]
    fn merge_reserves_second_lane() {
        let mut tracker = LaneTracker::new();
        // Merge M with parents A (main) and F (feature)
        let column_m = tracker.assign("M");
        assert_eq!(column_m, 0);
        tracker.advance("M", column_m, &["A".to_string(), "F".to_string()]);
        // A continues column 0, F gets column 1
        assert_eq!(tracker.assign("A"), 0);
        assert_eq!(tracker.assign("F"), 1);
    }

    #[test]
    fn root_frees_its_lane() {
        let mut tracker = LaneTracker::new();
        let column = tracker.assign("R");
        tracker.advance("R", column, &[]);
        // Nothing is waiting anymore, so an unrelated tip takes column 0
        assert_eq!(tracker.assign("X"), 0);
    }

    #[test]
    fn merge_parents_scan_past_occupied_lanes() {
        let mut tracker = LaneTracker::new();
        // Column 1 is already held by another branch
        let column_b = tracker.assign("B");
        tracker.advance("B", column_b, &["A".to_string()]);
        let column_t = tracker.assign("T");
        assert_eq!(column_t, 1);
        tracker.advance("T", column_t, &["S".to_string()]);

        // A arrives as a merge; its second parent must skip columns 0 and 1
        let column_a = tracker.assign("A");
        assert_eq!(column_a, 0);
        tracker.advance("A", column_a, &["P".to_string(), "Q".to_string()]);
        assert_eq!(tracker.assign("Q"), 2);
    }

    #[test]
    fn duplicate_expectations_resolve_to_lowest_column() {
        let mut tracker = LaneTracker::new();
        // Two siblings both waiting for parent P, in columns 0 and 1
        let column_a = tracker.assign("A");
        tracker.advance("A", column_a, &["P".to_string()]);
        let column_b = tracker.assign("B");
        assert_eq!(column_b, 1);
        tracker.advance("B", column_b, &["P".to_string()]);

        assert_eq!(tracker.assign("P"), 0);
    }
}
