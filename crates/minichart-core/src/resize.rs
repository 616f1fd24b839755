// File: crates/minichart-core/src/resize.rs
// Summary: Single-threaded size-change notifications from the host to chart instances.
// Notes:
// - Hosts translate their own layout/density events into `ResizeEvent`s and call `notify`.
// - A `Subscription` owns its registration; dropping it unsubscribes.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::types::LogicalSize;

/// New layout size of the observed surface, plus its pixel ratio when that changed too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    pub size: LogicalSize,
    pub pixel_ratio: Option<f32>,
}

impl ResizeEvent {
    pub fn new(size: LogicalSize) -> Self {
        Self { size, pixel_ratio: None }
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = Some(ratio);
        self
    }
}

type Callback = Rc<RefCell<dyn FnMut(ResizeEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(e, _)| *e == id)
    }
}

/// Cloneable handle to one notification source; clones share subscribers.
#[derive(Clone, Default)]
pub struct ResizeBus {
    registry: Rc<RefCell<Registry>>,
}

impl ResizeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl FnMut(ResizeEvent) + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        let callback: Callback = Rc::new(RefCell::new(callback));
        reg.entries.push((id, callback));
        trace!(id, subscribers = reg.entries.len(), "resize subscription added");
        Subscription { id, registry: Rc::downgrade(&self.registry) }
    }

    /// Deliver `event` to every current subscriber; returns how many were invoked.
    /// Subscribers may (un)subscribe from inside a callback; a callback already
    /// running further up the stack is skipped.
    pub fn notify(&self, event: ResizeEvent) -> usize {
        let snapshot: Vec<(u64, Callback)> = self.registry.borrow().entries.clone();
        let mut delivered = 0;
        for (id, callback) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if let Ok(mut f) = callback.try_borrow_mut() {
                (*f)(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

impl fmt::Debug for ResizeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeBus").field("subscribers", &self.subscriber_count()).finish()
    }
}

/// Registration handle returned by [`ResizeBus::subscribe`].
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Unsubscribe now.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else { return };
        // The callback is released after the borrow ends; its captures may own subscriptions.
        let removed = {
            let Ok(mut reg) = registry.try_borrow_mut() else { return };
            let removed = reg.entries.iter().position(|(id, _)| *id == self.id).map(|at| reg.entries.remove(at));
            trace!(id = self.id, subscribers = reg.entries.len(), "resize subscription removed");
            removed
        };
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn event(w: f32) -> ResizeEvent {
        ResizeEvent::new(LogicalSize::new(w, 100.0))
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = ResizeBus::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = bus.subscribe(move |_| h.set(h.get() + 1));
        assert_eq!(bus.notify(event(10.0)), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.notify(event(20.0)), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn clones_share_subscribers() {
        let bus = ResizeBus::new();
        let other = bus.clone();
        let seen = Rc::new(Cell::new(0.0f32));
        let s = seen.clone();
        let _sub = bus.subscribe(move |e| s.set(e.size.width));
        other.notify(event(42.0));
        assert_eq!(seen.get(), 42.0);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = ResizeBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        sub.cancel();
    }

    #[test]
    fn callback_may_cancel_a_later_subscriber() {
        let bus = ResizeBus::new();
        let later: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let slot = later.clone();
        let _first = bus.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let hit = Rc::new(Cell::new(false));
        let h = hit.clone();
        *later.borrow_mut() = Some(bus.subscribe(move |_| h.set(true)));
        assert_eq!(bus.notify(event(1.0)), 1);
        assert!(!hit.get());
    }
}
