//! Slot-board generation and the hourly rollover that erodes it.

mod generate;
mod rollover;

pub use generate::generate;
pub use rollover::{RolloverReport, apply_rollover};
