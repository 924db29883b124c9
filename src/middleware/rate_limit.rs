//! Rate limiting middleware
//!
//! Sliding-window command limiter with an injected clock.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    start: Instant,
    offset: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: std::rc::Rc::new(std::cell::Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

#[cfg(test)]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }
}

/// Accepts at most `max_requests` commands in any `window`.
pub struct RateLimiter<C: Clock = SystemClock> {
    requests: VecDeque<Instant>,
    max_requests: usize,
    window: Duration,
    enabled: bool,
    clock: C,
}

impl RateLimiter<SystemClock> {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self::with_clock(max_requests, window, SystemClock)
    }

    /// A limiter that accepts everything
    pub fn disabled() -> Self {
        let mut limiter = Self::new(0, Duration::ZERO);
        limiter.enabled = false;
        limiter
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(max_requests: usize, window: Duration, clock: C) -> Self {
        Self {
            requests: VecDeque::with_capacity(max_requests),
            max_requests,
            window,
            enabled: true,
            clock,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records a command and reports whether it fits in the window.
    pub fn is_allowed(&mut self) -> bool {
        if !self.enabled {
            return true;
        }

        let now = self.clock.now();

        // Drop requests that slid out of the window
        while let Some(&oldest) = self.requests.front() {
            if now.duration_since(oldest) > self.window {
                self.requests.pop_front();
            } else {
                break;
            }
        }

        if self.requests.len() < self.max_requests {
            self.requests.push_back(now);
            true
        } else {
            false
        }
    }
}
