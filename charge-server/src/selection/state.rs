//! Selection state: the anchor and the set of selected hours.

use std::collections::BTreeSet;

use crate::domain::{HourRange, SlotHour};

/// The user's current selection on a slot board.
///
/// `anchor` is the first tap of an in-progress range; `hours` is the set
/// of hours currently selected, kept sorted by the BTreeSet. The policy
/// in [`super::policy`] decides how taps mutate this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    anchor: Option<SlotHour>,
    hours: BTreeSet<SlotHour>,
}

impl SelectionState {
    /// An empty selection with no anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-progress range anchor, if any.
    pub fn anchor(&self) -> Option<SlotHour> {
        self.anchor
    }

    /// Set the anchor hour.
    pub fn set_anchor(&mut self, hour: SlotHour) {
        self.anchor = Some(hour);
    }

    /// Drop the anchor without touching the selected hours.
    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// Whether no hours are selected.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Number of selected hours.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Whether the given hour is selected.
    pub fn contains(&self, hour: SlotHour) -> bool {
        self.hours.contains(&hour)
    }

    /// Add an hour to the selection.
    pub fn insert(&mut self, hour: SlotHour) {
        self.hours.insert(hour);
    }

    /// Remove an hour from the selection.
    pub fn remove(&mut self, hour: SlotHour) {
        self.hours.remove(&hour);
    }

    /// Drop all hours and the anchor.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.hours.clear();
    }

    /// Iterate over the selected hours, ascending.
    pub fn hours(&self) -> impl Iterator<Item = SlotHour> + '_ {
        self.hours.iter().copied()
    }

    /// Snapshot of the selected hours, ascending.
    pub fn to_vec(&self) -> Vec<SlotHour> {
        self.hours.iter().copied().collect()
    }

    /// Remove every selected hour at or before `cutoff`, returning the
    /// removed hours in ascending order.
    pub fn drop_through(&mut self, cutoff: SlotHour) -> Vec<SlotHour> {
        let dropped: Vec<SlotHour> = self
            .hours
            .iter()
            .copied()
            .take_while(|h| *h <= cutoff)
            .collect();
        for h in &dropped {
            self.hours.remove(h);
        }
        dropped
    }

    /// Whether the selected hours form one gapless run.
    ///
    /// The empty selection counts as contiguous.
    pub fn is_contiguous(&self) -> bool {
        let mut prev: Option<SlotHour> = None;
        for h in self.hours.iter().copied() {
            if let Some(p) = prev {
                if h.as_u8() != p.as_u8() + 1 {
                    return false;
                }
            }
            prev = Some(h);
        }
        true
    }

    /// The range spanning the selection, `None` when empty.
    pub fn bounding_range(&self) -> Option<HourRange> {
        let first = *self.hours.first()?;
        let last = *self.hours.last()?;
        Some(HourRange::bounding(first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(h: u8) -> SlotHour {
        SlotHour::new(h).unwrap()
    }

    #[test]
    fn starts_empty() {
        let sel = SelectionState::new();
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
        assert!(sel.is_contiguous());
        assert_eq!(sel.bounding_range(), None);
    }

    #[test]
    fn insert_keeps_sorted_order() {
        let mut sel = SelectionState::new();
        sel.insert(hour(16));
        sel.insert(hour(13));
        sel.insert(hour(14));
        let hours: Vec<u8> = sel.to_vec().iter().map(|h| h.as_u8()).collect();
        assert_eq!(hours, vec![13, 14, 16]);
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut sel = SelectionState::new();
        sel.insert(hour(13));
        sel.insert(hour(13));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn clear_drops_hours_and_anchor() {
        let mut sel = SelectionState::new();
        sel.set_anchor(hour(13));
        sel.insert(hour(13));
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
    }

    #[test]
    fn drop_through_removes_cutoff_and_earlier() {
        let mut sel = SelectionState::new();
        for h in [13, 14, 15, 16] {
            sel.insert(hour(h));
        }
        let dropped = sel.drop_through(hour(14));
        let dropped: Vec<u8> = dropped.iter().map(|h| h.as_u8()).collect();
        assert_eq!(dropped, vec![13, 14]);
        let remaining: Vec<u8> = sel.to_vec().iter().map(|h| h.as_u8()).collect();
        assert_eq!(remaining, vec![15, 16]);
    }

    #[test]
    fn drop_through_no_match_is_noop() {
        let mut sel = SelectionState::new();
        sel.insert(hour(20));
        let dropped = sel.drop_through(hour(14));
        assert!(dropped.is_empty());
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn contiguity() {
        let mut sel = SelectionState::new();
        sel.insert(hour(13));
        sel.insert(hour(14));
        sel.insert(hour(15));
        assert!(sel.is_contiguous());

        sel.insert(hour(17));
        assert!(!sel.is_contiguous());
    }

    #[test]
    fn single_hour_is_contiguous() {
        let mut sel = SelectionState::new();
        sel.insert(hour(5));
        assert!(sel.is_contiguous());
    }

    #[test]
    fn bounding_range_spans_selection() {
        let mut sel = SelectionState::new();
        sel.insert(hour(13));
        sel.insert(hour(16));
        let range = sel.bounding_range().unwrap();
        assert_eq!(range.start().as_u8(), 13);
        assert_eq!(range.end_exclusive(), 17);
    }
}
