//! Scroll observation: the navigation bar switches to its opaque style once
//! the page has scrolled past a threshold.

use std::cell::Cell;
use std::rc::Rc;

/// Scroll offset (in CSS pixels) past which the navigation bar turns opaque.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Decides the scroll flag for a given vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollObserver {
    threshold: f64,
}

impl ScrollObserver {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `true` only when `offset` is strictly past the threshold.
    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Subscribe to `feed`. The returned handle tracks the flag until it is
    /// unmounted.
    ///
    /// The flag is evaluated against the feed's current offset right away, so
    /// a page restored mid-scroll starts in the right style.
    pub fn mount(&self, feed: &mut ScrollFeed) -> MountedObserver {
        let flag = Rc::new(Cell::new(self.is_scrolled(feed.offset())));
        let observer = *self;
        let listener_flag = Rc::clone(&flag);
        let id = feed.subscribe(move |offset| listener_flag.set(observer.is_scrolled(offset)));

        MountedObserver { id, flag }
    }
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

/// A scroll observer attached to a feed.
#[derive(Debug)]
pub struct MountedObserver {
    id: ListenerId,
    flag: Rc<Cell<bool>>,
}

impl MountedObserver {
    pub fn is_scrolled(&self) -> bool {
        self.flag.get()
    }

    /// Detach from the feed. The listener is removed.
    pub fn unmount(self, feed: &mut ScrollFeed) {
        feed.unsubscribe(self.id);
    }
}

/// Handle identifying a scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type ScrollListener = Box<dyn FnMut(f64)>;

/// Source of scroll events: the viewport's vertical offset and the
/// callbacks subscribed to it.
#[derive(Default)]
pub struct ScrollFeed {
    offset: f64,
    next_id: u64,
    listeners: Vec<(ListenerId, ScrollListener)>,
}

impl ScrollFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn subscribe(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Move the viewport and notify every listener.
    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.max(0.0);
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.offset);
        }
    }
}

impl std::fmt::Debug for ScrollFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollFeed")
            .field("offset", &self.offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
