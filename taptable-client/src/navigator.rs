//! Page navigation hook
//!
//! When the backend rejects the credential while the user is inside the
//! admin section, the client sends them back to the admin login page. The
//! host application supplies the current location and performs the move.

use parking_lot::Mutex;
use std::fmt::Debug;

pub trait Navigator: Send + Sync + Debug {
    /// Path of the page currently shown, if there is one
    fn current_path(&self) -> Option<String>;
    /// Hard redirect to `path`
    fn redirect(&self, path: &str);
}

/// Headless hosts (CLI, services): no page, never redirects
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn redirect(&self, _path: &str) {}
}

/// Navigator that tracks a current path and records redirects instead of
/// performing them. A redirect also updates the current path.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    path: Mutex<Option<String>>,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(Some(path.into())),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn set_path(&self, path: impl Into<String>) {
        *self.path.lock() = Some(path.into());
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        self.path.lock().clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.lock().push(path.to_string());
        *self.path.lock() = Some(path.to_string());
    }
}
