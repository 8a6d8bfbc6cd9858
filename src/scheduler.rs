//! Headless frame driver.
//!
//! The windowed shell gets its "next frame" callback from the compositor;
//! outside a window something still has to call [`Engine::tick`] once per
//! frame. [`TickLoop`] is that driver: an explicit loop rather than
//! self-rescheduling recursion, so it can run a bounded number of ticks and
//! be cancelled cleanly from another thread via its [`CancelToken`].
//!
//! Pacing is optional. By default the loop runs flat out (the analogue of
//! an unthrottled repaint loop); [`TickLoop::with_interval`] holds each
//! tick to a fixed period for hosts that want, say, 60 Hz.
//!
//! ```ignore
//! let ticks = TickLoop::new()
//!     .with_interval(Duration::from_millis(16))
//!     .run(&mut engine, &mut pixmap, Some(600));
//! ```

use crate::engine::Engine;
use crate::surface::Surface;
use crate::time::Time;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cancellation handle for a running [`TickLoop`].
///
/// Clone it, hand it to whoever needs to stop the loop; the loop checks it
/// before every tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop before its next tick.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Explicit tick loop with cancellation and optional fixed pacing.
#[derive(Debug)]
pub struct TickLoop {
    cancel: CancelToken,
    interval: Option<Duration>,
}

impl TickLoop {
    /// Unpaced loop with a fresh cancel token.
    pub fn new() -> Self {
        Self {
            cancel: CancelToken::new(),
            interval: None,
        }
    }

    /// Hold every tick to a fixed period (sleeping out the remainder).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Handle for stopping this loop from elsewhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Drive the engine until `max_ticks` ticks have run (or forever if
    /// `None`) or the token is cancelled. Returns the number of ticks run.
    pub fn run(
        &self,
        engine: &mut Engine,
        surface: &mut dyn Surface,
        max_ticks: Option<u64>,
    ) -> u64 {
        self.run_with(engine, surface, max_ticks, |_, _| {})
    }

    /// Like [`TickLoop::run`], with a hook called before every tick.
    ///
    /// The hook is the pointer-source seam for headless hosts: it receives
    /// the engine and the upcoming tick index, and typically feeds
    /// [`Engine::pointer_moved`] from a script or a replay.
    pub fn run_with(
        &self,
        engine: &mut Engine,
        surface: &mut dyn Surface,
        max_ticks: Option<u64>,
        mut before_tick: impl FnMut(&mut Engine, u64),
    ) -> u64 {
        let mut time = Time::new();
        let mut ran = 0u64;

        while max_ticks.map_or(true, |max| ran < max) {
            if self.cancel.is_cancelled() {
                log::debug!("tick loop cancelled after {} ticks", ran);
                break;
            }

            let tick_start = Instant::now();
            before_tick(engine, ran);
            engine.tick(surface);
            time.update();
            ran += 1;

            if let Some(interval) = self.interval {
                let spent = tick_start.elapsed();
                if spent < interval {
                    std::thread::sleep(interval - spent);
                }
            }
        }

        ran
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new()
    }
}
