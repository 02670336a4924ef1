//! Outbound ports to the presentation layer.
//!
//! The session never draws anything itself; it pushes derived view state
//! and notices through [`Surface`]. The map provider is likewise behind
//! [`MapSurface`] so the picker works against the real SDK or a test
//! double without caring which.

use std::sync::{Arc, Mutex};

use crate::session::{BoardView, Notice};

/// Sink for session output.
pub trait Surface: Send + 'static {
    /// Draw the slot board.
    fn render(&mut self, view: &BoardView);

    /// Show a user-facing message.
    fn notify(&mut self, notice: &Notice);
}

/// Camera control over the map provider.
pub trait MapSurface: Send + 'static {
    /// Move the camera to the given coordinates.
    fn pan_to(&mut self, lat: f64, lng: f64);

    /// Set the camera zoom level.
    fn set_zoom(&mut self, level: u8);
}

/// Surface that discards everything. Useful for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn render(&mut self, _view: &BoardView) {}

    fn notify(&mut self, _notice: &Notice) {}
}

impl MapSurface for NullSurface {
    fn pan_to(&mut self, _lat: f64, _lng: f64) {}

    fn set_zoom(&mut self, _level: u8) {}
}

/// One observed surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Rendered(BoardView),
    Notified(Notice),
}

/// Surface double that records every call.
///
/// Clones share the same log, so a test can keep one handle and move the
/// other into the session.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls observed so far.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.lock().clone()
    }

    /// Notices observed so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Notified(notice) => Some(notice.clone()),
                SurfaceEvent::Rendered(_) => None,
            })
            .collect()
    }

    /// The most recently rendered view, if any.
    pub fn last_view(&self) -> Option<BoardView> {
        self.lock()
            .iter()
            .rev()
            .find_map(|e| match e {
                SurfaceEvent::Rendered(view) => Some(view.clone()),
                SurfaceEvent::Notified(_) => None,
            })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SurfaceEvent>> {
        // A poisoned lock only means another test thread panicked while
        // recording; the log is still readable.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Surface for RecordingSurface {
    fn render(&mut self, view: &BoardView) {
        self.lock().push(SurfaceEvent::Rendered(view.clone()));
    }

    fn notify(&mut self, notice: &Notice) {
        self.lock().push(SurfaceEvent::Notified(notice.clone()));
    }
}

/// One observed camera command.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    PanTo { lat: f64, lng: f64 },
    SetZoom { level: u8 },
}

/// Map double that records camera commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    commands: Arc<Mutex<Vec<MapCommand>>>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands observed so far.
    pub fn commands(&self) -> Vec<MapCommand> {
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn push(&self, command: MapCommand) {
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command);
    }
}

impl MapSurface for RecordingMap {
    fn pan_to(&mut self, lat: f64, lng: f64) {
        self.push(MapCommand::PanTo { lat, lng });
    }

    fn set_zoom(&mut self, level: u8) {
        self.push(MapCommand::SetZoom { level });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_shares_its_log() {
        let recorder = RecordingSurface::new();
        let mut surface = recorder.clone();

        surface.notify(&Notice::Error {
            message: "no time selected".to_string(),
        });

        assert_eq!(recorder.events().len(), 1);
        assert_eq!(recorder.notices().len(), 1);
        assert!(recorder.last_view().is_none());
    }

    #[test]
    fn recording_map_keeps_command_order() {
        let recorder = RecordingMap::new();
        let mut map = recorder.clone();

        map.pan_to(37.5172, 127.0473);
        map.set_zoom(14);

        assert_eq!(
            recorder.commands(),
            vec![
                MapCommand::PanTo {
                    lat: 37.5172,
                    lng: 127.0473
                },
                MapCommand::SetZoom { level: 14 },
            ]
        );
    }
}
