//! Selection state and the tap policies that drive it.

mod policy;
mod state;

pub use policy::{
    BlockedRange, RangeSelect, SelectionPolicy, TapOutcome, ToggleSelect, clear_selection,
};
pub use state::SelectionState;
