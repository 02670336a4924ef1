//! Tap policies: how a tap on the board mutates the selection.

use thiserror::Error;

use crate::domain::{HourRange, SlotBoard, SlotHour, SlotStatus};

use super::state::SelectionState;

/// A two-click range tap landed on a span with an occupied or past hour.
///
/// The selection and anchor are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("range {range} includes an unavailable hour")]
pub struct BlockedRange {
    range: HourRange,
}

impl BlockedRange {
    /// The rejected span.
    pub fn range(&self) -> HourRange {
        self.range
    }
}

/// What a tap did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The slot is occupied or past; nothing changed.
    Ignored,
    /// The tap hit a selected hour and wiped the whole selection.
    Cleared,
    /// First tap of a range: the hour is now anchored and selected.
    Anchored(SlotHour),
    /// Second tap of a range: every hour in the span is now selected.
    Completed(HourRange),
    /// Toggle mode only: the hour joined the selection.
    Added(SlotHour),
    /// Toggle mode only: the hour left the selection.
    Removed(SlotHour),
}

/// How taps translate into selection changes.
///
/// Two policies ship: [`RangeSelect`] (two-click span, the canonical
/// interaction) and [`ToggleSelect`] (per-hour on/off). A session picks
/// one policy at start and keeps it for its lifetime.
pub trait SelectionPolicy {
    fn tap(
        &self,
        board: &mut SlotBoard,
        selection: &mut SelectionState,
        hour: SlotHour,
    ) -> Result<TapOutcome, BlockedRange>;
}

/// Two-click range selection.
///
/// The first tap anchors an hour; the second tap selects every hour
/// between the anchor and the tapped hour inclusive, provided none of
/// them is occupied or past. Tapping any already-selected hour clears
/// the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeSelect;

impl SelectionPolicy for RangeSelect {
    fn tap(
        &self,
        board: &mut SlotBoard,
        selection: &mut SelectionState,
        hour: SlotHour,
    ) -> Result<TapOutcome, BlockedRange> {
        match board.status(hour) {
            SlotStatus::Occupied | SlotStatus::Past => return Ok(TapOutcome::Ignored),
            SlotStatus::Selected => {
                clear_selection(board, selection);
                return Ok(TapOutcome::Cleared);
            }
            SlotStatus::Available => {}
        }
        match selection.anchor() {
            None => {
                // A fresh anchor replaces any completed range left behind.
                clear_selection(board, selection);
                selection.set_anchor(hour);
                selection.insert(hour);
                board.set_status(hour, SlotStatus::Selected);
                Ok(TapOutcome::Anchored(hour))
            }
            Some(anchor) => {
                let range = HourRange::bounding(anchor, hour);
                if range.hours().any(|h| !board.status(h).is_selectable()) {
                    return Err(BlockedRange { range });
                }
                for h in range.hours() {
                    selection.insert(h);
                    board.set_status(h, SlotStatus::Selected);
                }
                selection.clear_anchor();
                Ok(TapOutcome::Completed(range))
            }
        }
    }
}

/// Per-hour toggle selection.
///
/// Each tap flips one hour in or out of the selection; the anchor is
/// never used and contiguity is not enforced here, so submission must
/// check it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleSelect;

impl SelectionPolicy for ToggleSelect {
    fn tap(
        &self,
        board: &mut SlotBoard,
        selection: &mut SelectionState,
        hour: SlotHour,
    ) -> Result<TapOutcome, BlockedRange> {
        match board.status(hour) {
            SlotStatus::Occupied | SlotStatus::Past => Ok(TapOutcome::Ignored),
            SlotStatus::Selected => {
                selection.remove(hour);
                board.set_status(hour, SlotStatus::Available);
                Ok(TapOutcome::Removed(hour))
            }
            SlotStatus::Available => {
                selection.insert(hour);
                board.set_status(hour, SlotStatus::Selected);
                Ok(TapOutcome::Added(hour))
            }
        }
    }
}

/// Reset every selected slot to available and empty the selection.
pub fn clear_selection(board: &mut SlotBoard, selection: &mut SelectionState) {
    for hour in selection.hours() {
        board.set_status(hour, SlotStatus::Available);
    }
    selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(h: u8) -> SlotHour {
        SlotHour::new(h).unwrap()
    }

    /// Board with the given hours occupied or past, everything else open.
    fn board(occupied: &[u8], past: &[u8]) -> SlotBoard {
        SlotBoard::build(|h| {
            if past.contains(&h.as_u8()) {
                SlotStatus::Past
            } else if occupied.contains(&h.as_u8()) {
                SlotStatus::Occupied
            } else {
                SlotStatus::Available
            }
        })
    }

    fn selected(board: &SlotBoard) -> Vec<u8> {
        board.selected_hours().iter().map(|h| h.as_u8()).collect()
    }

    #[test]
    fn tap_on_occupied_is_ignored() {
        let mut board = board(&[11], &[]);
        let mut sel = SelectionState::new();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(11)).unwrap();
        assert_eq!(outcome, TapOutcome::Ignored);
        assert!(sel.is_empty());
        assert_eq!(board.status(hour(11)), SlotStatus::Occupied);
    }

    #[test]
    fn tap_on_past_is_ignored() {
        let mut board = board(&[], &[3]);
        let mut sel = SelectionState::new();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(3)).unwrap();
        assert_eq!(outcome, TapOutcome::Ignored);
        assert!(sel.is_empty());
    }

    #[test]
    fn first_tap_anchors() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        assert_eq!(outcome, TapOutcome::Anchored(hour(13)));
        assert_eq!(sel.anchor(), Some(hour(13)));
        assert_eq!(selected(&board), vec![13]);
    }

    #[test]
    fn second_tap_completes_the_range() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(16)).unwrap();
        let range = HourRange::bounding(hour(13), hour(16));
        assert_eq!(outcome, TapOutcome::Completed(range));
        assert_eq!(sel.anchor(), None);
        assert_eq!(selected(&board), vec![13, 14, 15, 16]);
        assert!(sel.is_contiguous());
    }

    #[test]
    fn reversed_taps_select_the_same_range() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(16)).unwrap();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        assert_eq!(selected(&board), vec![13, 14, 15, 16]);
    }

    #[test]
    fn second_tap_on_anchor_clears() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        assert_eq!(outcome, TapOutcome::Cleared);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
        assert_eq!(board.status(hour(13)), SlotStatus::Available);
    }

    #[test]
    fn blocked_range_changes_nothing() {
        let mut board = board(&[15], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        let err = RangeSelect
            .tap(&mut board, &mut sel, hour(17))
            .unwrap_err();
        assert_eq!(err.range(), HourRange::bounding(hour(13), hour(17)));
        // Anchor survives so the user can pick a shorter span.
        assert_eq!(sel.anchor(), Some(hour(13)));
        assert_eq!(selected(&board), vec![13]);
        assert_eq!(board.status(hour(15)), SlotStatus::Occupied);
    }

    #[test]
    fn shorter_span_succeeds_after_a_block() {
        let mut board = board(&[15], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        assert!(RangeSelect.tap(&mut board, &mut sel, hour(17)).is_err());
        RangeSelect.tap(&mut board, &mut sel, hour(14)).unwrap();
        assert_eq!(selected(&board), vec![13, 14]);
        assert_eq!(sel.anchor(), None);
    }

    #[test]
    fn tap_inside_a_completed_range_clears_it() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        RangeSelect.tap(&mut board, &mut sel, hour(16)).unwrap();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(14)).unwrap();
        assert_eq!(outcome, TapOutcome::Cleared);
        assert!(sel.is_empty());
        assert_eq!(selected(&board), Vec::<u8>::new());
    }

    #[test]
    fn fresh_anchor_replaces_a_completed_range() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        RangeSelect.tap(&mut board, &mut sel, hour(14)).unwrap();
        let outcome = RangeSelect.tap(&mut board, &mut sel, hour(20)).unwrap();
        assert_eq!(outcome, TapOutcome::Anchored(hour(20)));
        assert_eq!(selected(&board), vec![20]);
    }

    #[test]
    fn toggle_adds_and_removes_single_hours() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        assert_eq!(
            ToggleSelect.tap(&mut board, &mut sel, hour(13)).unwrap(),
            TapOutcome::Added(hour(13))
        );
        assert_eq!(
            ToggleSelect.tap(&mut board, &mut sel, hour(16)).unwrap(),
            TapOutcome::Added(hour(16))
        );
        // Toggle mode happily holds a gap; submission catches it later.
        assert!(!sel.is_contiguous());
        assert_eq!(
            ToggleSelect.tap(&mut board, &mut sel, hour(13)).unwrap(),
            TapOutcome::Removed(hour(13))
        );
        assert_eq!(selected(&board), vec![16]);
        assert_eq!(sel.anchor(), None);
    }

    #[test]
    fn toggle_ignores_occupied() {
        let mut board = board(&[11], &[]);
        let mut sel = SelectionState::new();
        assert_eq!(
            ToggleSelect.tap(&mut board, &mut sel, hour(11)).unwrap(),
            TapOutcome::Ignored
        );
        assert!(sel.is_empty());
    }

    #[test]
    fn clear_selection_resets_board_and_state() {
        let mut board = board(&[], &[]);
        let mut sel = SelectionState::new();
        RangeSelect.tap(&mut board, &mut sel, hour(13)).unwrap();
        RangeSelect.tap(&mut board, &mut sel, hour(16)).unwrap();
        clear_selection(&mut board, &mut sel);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
        assert_eq!(selected(&board), Vec::<u8>::new());
        assert_eq!(board.status(hour(14)), SlotStatus::Available);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// Fixed board shaped like the canonical morning scenario: hours
    /// 0-9 past, 10 current and occupied, 11/17/18 taken.
    fn scenario_board() -> SlotBoard {
        SlotBoard::build(|h| match h.as_u8() {
            0..=9 => SlotStatus::Past,
            10 | 11 | 17 | 18 => SlotStatus::Occupied,
            _ => SlotStatus::Available,
        })
    }

    proptest! {
        #[test]
        fn range_mode_selection_stays_contiguous(taps in prop::collection::vec(0u8..24, 0..48)) {
            let mut board = scenario_board();
            let mut sel = SelectionState::new();
            for tap in taps {
                let hour = SlotHour::new(tap).unwrap();
                // Blocked ranges are fine; the state just must not corrupt.
                let _ = RangeSelect.tap(&mut board, &mut sel, hour);

                prop_assert!(sel.is_contiguous());
                for h in sel.hours() {
                    prop_assert_eq!(board.status(h), SlotStatus::Selected);
                }
                let on_board: Vec<SlotHour> = board.selected_hours();
                prop_assert_eq!(on_board, sel.to_vec());
                if let Some(anchor) = sel.anchor() {
                    prop_assert_eq!(sel.to_vec(), vec![anchor]);
                }
            }
        }

        #[test]
        fn toggle_mode_never_selects_unavailable_hours(taps in prop::collection::vec(0u8..24, 0..48)) {
            let mut board = scenario_board();
            let mut sel = SelectionState::new();
            for tap in taps {
                let hour = SlotHour::new(tap).unwrap();
                let _ = ToggleSelect.tap(&mut board, &mut sel, hour);
                for h in sel.hours() {
                    let u = h.as_u8();
                    prop_assert!((12..=16).contains(&u) || (19..=23).contains(&u));
                    prop_assert_eq!(board.status(h), SlotStatus::Selected);
                }
            }
        }
    }
}
