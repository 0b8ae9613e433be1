//! Cooperative stop flag shared between the render loop and the interrupt
//! handler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

/// Shared "keep running" flag.
///
/// Starts out running. The only transition is running to stopped, made by
/// [`RunFlag::stop`]; the loop polls [`RunFlag::is_running`] once per frame.
#[derive(Debug, Clone)]
pub struct RunFlag {
    running: Arc<AtomicBool>,
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RunFlag {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Request a stop. Lock-free and safe to call from a signal handler.
    #[inline]
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Stop this flag on Ctrl-C, SIGINT or SIGTERM.
    ///
    /// Only one handler can be installed per process; a second call fails
    /// with [`ctrlc::Error::MultipleHandlers`].
    pub fn install_interrupt_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || flag.stop())?;
        debug!("interrupt handler installed");
        Ok(())
    }
}
