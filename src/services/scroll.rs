//! Condensed navigation driven by the vertical scroll offset

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Offset in pixels past which the navigation bar condenses
pub const CONDENSE_THRESHOLD: f64 = 20.0;

/// Strictly greater than the threshold; no hysteresis.
pub fn is_condensed(offset: f64) -> bool {
    offset > CONDENSE_THRESHOLD
}

/// Live registration with a scroll source. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Delivers the current vertical offset on every scroll event
pub trait ScrollSource {
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Subscription;
}

/// Derives the condensed flag from a scroll source for as long as it lives.
///
/// `on_change` is called with the new flag whenever it flips. The flag starts
/// out expanded.
#[derive(Debug)]
pub struct ScrollObserver {
    condensed: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl ScrollObserver {
    pub fn attach(source: &impl ScrollSource, on_change: impl Fn(bool) + 'static) -> Self {
        let condensed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&condensed);
        let subscription = source.subscribe(Box::new(move |offset| {
            let next = is_condensed(offset);
            if flag.swap(next, Ordering::Relaxed) != next {
                on_change(next);
            }
        }));
        Self {
            condensed,
            _subscription: subscription,
        }
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed.load(Ordering::Relaxed)
    }
}

/// `window` scroll events
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

#[cfg(feature = "hydrate")]
impl ScrollSource for WindowScroll {
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Subscription {
        use leptos::ev;
        use leptos::prelude::window_event_listener;

        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = leptos::web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            on_scroll(offset);
        });
        Subscription::new(move || handle.remove())
    }
}

#[cfg(not(feature = "hydrate"))]
impl ScrollSource for WindowScroll {
    fn subscribe(&self, _on_scroll: Box<dyn Fn(f64)>) -> Subscription {
        Subscription::new(|| {})
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::FakeScroll;
    use super::*;

    #[test]
    fn threshold_is_strictly_greater_than_twenty() {
        assert!(!is_condensed(0.0));
        assert!(!is_condensed(20.0));
        assert!(is_condensed(21.0));
        assert!(is_condensed(20.5));
    }

    #[test]
    fn observer_reports_flips_only() {
        let source = FakeScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let observer = ScrollObserver::attach(&source, move |c| sink.borrow_mut().push(c));

        source.scroll_to(5.0);
        source.scroll_to(21.0);
        source.scroll_to(400.0);
        source.scroll_to(20.0);

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!observer.is_condensed());
    }

    #[test]
    fn flag_follows_every_crossing() {
        let source = FakeScroll::default();
        let observer = ScrollObserver::attach(&source, |_| {});

        for (offset, expected) in [(21.0, true), (20.0, false), (21.0, true), (19.0, false)] {
            source.scroll_to(offset);
            assert_eq!(observer.is_condensed(), expected, "offset {offset}");
        }
    }

    #[test]
    fn dropping_observer_unsubscribes() {
        let source = FakeScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let observer = ScrollObserver::attach(&source, move |c| sink.borrow_mut().push(c));
        assert_eq!(source.listener_count(), 1);

        drop(observer);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(100.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn explicit_cancel_runs_once() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = Subscription::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        subscription.cancel();
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }
}
