//! Scroll-triggered reveal animations.
//!
//! Each animated element starts hidden and switches to visible the first time
//! it intersects the viewport. It never hides again.

use std::time::Duration;

/// One-shot visibility state of an animated element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection observation. Returns `true` only on the
    /// transition to revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Per-index delay for lists that reveal one item after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

pub const FACILITY_STAGGER: Stagger = Stagger::millis(50);
pub const TIMELINE_STAGGER: Stagger = Stagger::millis(300);
pub const METRIC_STAGGER: Stagger = Stagger::millis(100);
pub const ZONE_STAGGER: Stagger = Stagger::millis(20);

impl Stagger {
    pub const fn millis(step: u64) -> Self {
        Self {
            step: Duration::from_millis(step),
        }
    }

    pub fn delay(&self, index: usize) -> Duration {
        self.step * index as u32
    }

    /// Delay as a CSS time value, e.g. `0.15s`.
    pub fn css_delay(&self, index: usize) -> String {
        format!("{:.2}s", self.delay(index).as_secs_f64())
    }
}
