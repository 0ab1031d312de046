//! Auto-rotating banner carousel for the home page.
//!
//! Time is fed in by the caller through [`Carousel::tick`], so the state
//! machine has no clock of its own and tests run without sleeping.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    #[serde(skip)]
    interval: Duration,
    #[serde(skip)]
    elapsed: Duration,
    paused: bool,
}

impl Carousel {
    #[must_use]
    pub const fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    /// Index of the slide on screen, or `None` with no slides.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 { None } else { Some(self.index) }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the timer by `dt`. Returns how many slides were advanced.
    ///
    /// A zero interval disables rotation.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if self.paused || self.len < 2 || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut advanced = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.len;
            advanced += 1;
        }
        advanced
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.elapsed = Duration::ZERO;
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.elapsed = Duration::ZERO;
    }

    /// Jump to a dot. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.elapsed = Duration::ZERO;
        true
    }

    pub const fn pause(&mut self) {
        self.paused = true;
    }

    pub const fn resume(&mut self) {
        self.paused = false;
    }

    /// Replace the slide count after the banner list reloads.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn tick_advances_after_interval_and_wraps() {
        let mut carousel = Carousel::new(3, SECOND * 5);
        assert_eq!(carousel.tick(SECOND * 4), 0);
        assert_eq!(carousel.current(), Some(0));
        assert_eq!(carousel.tick(SECOND), 1);
        assert_eq!(carousel.current(), Some(1));
        assert_eq!(carousel.tick(SECOND * 10), 2);
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn paused_carousel_does_not_rotate() {
        let mut carousel = Carousel::new(3, SECOND);
        carousel.pause();
        assert_eq!(carousel.tick(SECOND * 10), 0);
        assert_eq!(carousel.current(), Some(0));
        carousel.resume();
        assert_eq!(carousel.tick(SECOND), 1);
    }

    #[test]
    fn manual_navigation_wraps_and_resets_timer() {
        let mut carousel = Carousel::new(3, SECOND * 5);
        carousel.prev();
        assert_eq!(carousel.current(), Some(2));
        carousel.next();
        assert_eq!(carousel.current(), Some(0));

        carousel.tick(SECOND * 4);
        carousel.next();
        assert_eq!(carousel.tick(SECOND * 4), 0);
        assert_eq!(carousel.current(), Some(1));
    }

    #[test]
    fn empty_carousel_is_idle() {
        let mut carousel = Carousel::new(0, SECOND);
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.tick(SECOND * 3), 0);
        carousel.next();
        carousel.prev();
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.current(), None);
    }

    #[test]
    fn shrinking_resets_out_of_range_index() {
        let mut carousel = Carousel::new(5, SECOND);
        assert!(carousel.go_to(4));
        carousel.set_len(2);
        assert_eq!(carousel.current(), Some(0));
    }
}
