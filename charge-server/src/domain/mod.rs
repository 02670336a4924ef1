//! Domain types for the charging reservation engine.
//!
//! This module contains the core model types: hours, slots, stations,
//! districts and contact numbers. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod district;
mod hour;
mod phone;
mod slot;
mod station;

pub use district::District;
pub use hour::{HourRange, InvalidHour, SlotHour};
pub use phone::{InvalidPhone, PhoneNumber};
pub use slot::{SLOTS_PER_DAY, Slot, SlotBoard, SlotStatus};
pub use station::{InvalidStationId, Station, StationId};
