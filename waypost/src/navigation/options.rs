//! Configuration of the navigation guard.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A handle for toggling middleware processing at runtime.
///
/// Clones share state: keep one around after installing the processor to
/// switch interception off and on again.
#[derive(Debug, Clone)]
pub struct ProcessingSwitch(Arc<AtomicBool>);

impl ProcessingSwitch {
    /// Create a new switch with the given initial state.
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Check if processing is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Enable processing.
    pub fn enable(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Disable processing.
    pub fn disable(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Toggle processing, returning the new state.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }

    /// Set the enabled state.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Release);
    }
}

impl Default for ProcessingSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Options of a [`MiddlewareProcessor`](super::MiddlewareProcessor).
#[derive(Debug, Clone)]
pub struct ProcessorOptions {
    self_redirect_guard: bool,
    switch: ProcessingSwitch,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorOptions {
    /// Default options: guard against self-redirects, processing enabled.
    pub fn new() -> Self {
        Self {
            self_redirect_guard: true,
            switch: ProcessingSwitch::default(),
        }
    }

    /// Turn a redirect to the navigation's own target into `Proceed`.
    ///
    /// On by default. With the guard off, a middleware that redirects to the
    /// route it guards sends the host into a redirect loop.
    pub fn with_self_redirect_guard(mut self, enabled: bool) -> Self {
        self.self_redirect_guard = enabled;
        self
    }

    /// Set the initial processing state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.switch = ProcessingSwitch::new(enabled);
        self
    }

    /// Whether self-redirects are turned into `Proceed`.
    pub fn self_redirect_guard(&self) -> bool {
        self.self_redirect_guard
    }

    /// Get a handle for toggling processing at runtime.
    pub fn switch(&self) -> ProcessingSwitch {
        self.switch.clone()
    }

    /// Check if processing is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.switch.is_enabled()
    }
}
