//! Scheduling abstraction for the animation driver.
//!
//! A [`TickSource`] decides *when* the driver runs. The browser shell supplies
//! a continuous `requestAnimationFrame` source; [`OnDemandTicks`] runs exactly
//! once per request and backs reduced-motion mode. Input handlers call
//! [`TickSource::request_frame`] after mutating state unless the source is
//! continuous.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the tick timestamp in seconds.
pub type TickCallback = Box<dyn FnMut(f64)>;

pub trait TickSource {
    /// Start delivering ticks to `callback` until the returned handle is dropped.
    fn subscribe(&self, callback: TickCallback) -> Subscription;
    /// Ask for one more tick because state changed outside the loop.
    fn request_frame(&self);
    /// True when ticks arrive on their own, every display refresh.
    fn is_continuous(&self) -> bool;
}

/// Cancels a subscription when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
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

type Slot = Rc<RefCell<Option<TickCallback>>>;

/// Runs the subscriber once on subscribe and once per [`TickSource::request_frame`].
pub struct OnDemandTicks {
    slot: Slot,
    epoch: Instant,
}

impl Default for OnDemandTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl OnDemandTicks {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            epoch: Instant::now(),
        }
    }

    fn fire(&self) {
        let now = self.epoch.elapsed().as_secs_f64();
        // A request raised from inside the running tick is already covered by it.
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => {
                if let Some(callback) = slot.as_mut() {
                    callback(now);
                }
            }
            Err(_) => log::debug!("[tick] request during tick ignored"),
        }
    }
}

impl TickSource for OnDemandTicks {
    fn subscribe(&self, callback: TickCallback) -> Subscription {
        *self.slot.borrow_mut() = Some(callback);
        self.fire();
        let slot = self.slot.clone();
        Subscription::new(move || {
            slot.borrow_mut().take();
        })
    }

    fn request_frame(&self) {
        self.fire();
    }

    fn is_continuous(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscription_cancels_once() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = Subscription::new(move || h.set(h.get() + 1));
        sub.unsubscribe();
        assert_eq!(hits.get(), 1);

        let h = hits.clone();
        drop(Subscription::new(move || h.set(h.get() + 1)));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn on_demand_fires_on_subscribe_and_per_request() {
        let ticks = OnDemandTicks::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = ticks.subscribe(Box::new(move |_| c.set(c.get() + 1)));
        assert_eq!(count.get(), 1);
        ticks.request_frame();
        ticks.request_frame();
        assert_eq!(count.get(), 3);
        drop(sub);
        ticks.request_frame();
        assert_eq!(count.get(), 3);
        assert!(!ticks.is_continuous());
    }

    #[test]
    fn timestamps_do_not_go_backwards() {
        let ticks = OnDemandTicks::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let _sub = ticks.subscribe(Box::new(move |t| s.borrow_mut().push(t)));
        ticks.request_frame();
        let seen = seen.borrow();
        assert!(seen[1] >= seen[0]);
    }
}
