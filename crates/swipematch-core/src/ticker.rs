//! Wall-clock frame pacing.

use crate::FrameClock;
use web_time::Instant;

/// Converts wall-clock time into monotonically increasing frame times and
/// drains a [`FrameClock`] with them.
///
/// Hosts call [`FrameTicker::tick`] from their render loop
/// (`requestAnimationFrame` on the web, the redraw handler on desktop).
pub struct FrameTicker {
    started: Instant,
    last_nanos: u64,
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTicker {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            last_nanos: 0,
        }
    }

    /// Nanoseconds since the ticker was created, never smaller than the
    /// previous value.
    pub fn now_nanos(&mut self) -> u64 {
        let elapsed = self.started.elapsed().as_nanos();
        let nanos = u64::try_from(elapsed).unwrap_or(u64::MAX);
        self.last_nanos = self.last_nanos.max(nanos);
        self.last_nanos
    }

    /// Drains `clock` with the current frame time and returns that time.
    pub fn tick(&mut self, clock: &FrameClock) -> u64 {
        let now = self.now_nanos();
        clock.drain_frame_callbacks(now);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn ticker_time_is_monotonic() {
        let mut ticker = FrameTicker::new();
        let first = ticker.now_nanos();
        let second = ticker.now_nanos();
        assert!(second >= first);
    }

    #[test]
    fn tick_drains_clock() {
        let clock = FrameClock::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let _registration = clock.with_frame_nanos(move |_| flag.set(true));

        let mut ticker = FrameTicker::new();
        let time = ticker.tick(&clock);

        assert!(fired.get());
        assert_eq!(clock.last_frame_nanos(), Some(time));
    }
}
