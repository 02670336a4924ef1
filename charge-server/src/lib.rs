//! Charging-station slot reservation engine.
//!
//! A session-based model of the booking screen: a 24-hour slot board
//! per station, two-click range selection, hourly slot expiry, and the
//! request/response exchange with the reservation backend.

pub mod backend;
pub mod clock;
pub mod directory;
pub mod domain;
pub mod picker;
pub mod selection;
pub mod session;
pub mod slots;
pub mod surface;
