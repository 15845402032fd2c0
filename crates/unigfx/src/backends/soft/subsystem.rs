//! Process-global video subsystem for the software backend
//!
//! The software stack keeps one process-wide subsystem (the analog of a
//! native library's global video init). Access is guarded by a reference
//! count of live backends: the first backend up initializes it, and only
//! the last backend down tears it down — never the first, so two coexisting
//! backends can be destroyed in any order safely.

use std::sync::Mutex;

use crate::backend::BackendError;

static LIVE_BACKENDS: Mutex<usize> = Mutex::new(0);

/// RAII guard for one backend's claim on the global subsystem.
///
/// Acquired first during backend construction and dropped last during
/// teardown.
pub(crate) struct VideoGuard(());

impl VideoGuard {
    /// Register a live backend, bringing the subsystem up if this is the
    /// first one.
    pub(crate) fn acquire() -> Result<Self, BackendError> {
        let mut count = LIVE_BACKENDS
            .lock()
            .map_err(|_| BackendError::Subsystem("software video state poisoned".to_string()))?;
        if *count == 0 {
            log::info!("software video subsystem initialized");
        }
        *count += 1;
        Ok(Self(()))
    }
}

impl Drop for VideoGuard {
    fn drop(&mut self) {
        let Ok(mut count) = LIVE_BACKENDS.lock() else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            log::info!("software video subsystem shut down");
        }
    }
}

/// Number of software backends currently alive.
#[must_use]
pub fn live_backend_count() -> usize {
    LIVE_BACKENDS.lock().map_or(0, |count| *count)
}

/// Whether the global subsystem is currently initialized.
#[must_use]
pub fn is_initialized() -> bool {
    live_backend_count() > 0
}
