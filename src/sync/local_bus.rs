//! In-process fan-out bus used during bring-up and in tests.

use core::cell::RefCell;

use heapless::{Deque, Vec};

use super::{PageChannel, SyncMessage};

/// Views one bus can carry.
pub const BUS_MAX_VIEWS: usize = 4;

/// Undelivered messages buffered per view. When a view falls behind,
/// the oldest message is dropped first; page sync only ever needs the
/// newest value.
pub const BUS_QUEUE_DEPTH: usize = 8;

#[derive(Debug, Default)]
struct BusSlot {
    queue: Deque<SyncMessage, BUS_QUEUE_DEPTH>,
    attached: bool,
}

/// Single-threaded bus delivering every published message to every
/// other attached view. One bus serves exactly one deck.
#[derive(Debug, Default)]
pub struct LocalBus {
    slots: RefCell<Vec<BusSlot, BUS_MAX_VIEWS>>,
}

impl LocalBus {
    pub const fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Attach one more view; `None` once [`BUS_MAX_VIEWS`] is reached.
    pub fn attach(&self) -> Option<BusView<'_>> {
        let mut slots = self.slots.borrow_mut();
        let slot = slots.len();
        slots
            .push(BusSlot {
                queue: Deque::new(),
                attached: true,
            })
            .ok()?;
        Some(BusView { bus: self, slot })
    }

    /// Messages still queued across all attached views.
    pub fn pending(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| slot.attached)
            .map(|slot| slot.queue.len())
            .sum()
    }
}

/// One view's handle on a [`LocalBus`]. Dropping the handle releases
/// the subscription; publishers skip released views.
#[derive(Debug)]
pub struct BusView<'a> {
    bus: &'a LocalBus,
    slot: usize,
}

impl PageChannel for BusView<'_> {
    type Error = core::convert::Infallible;

    fn publish(&mut self, message: SyncMessage) -> Result<(), Self::Error> {
        let mut slots = self.bus.slots.borrow_mut();
        for (index, slot) in slots.iter_mut().enumerate() {
            if index == self.slot || !slot.attached {
                continue;
            }
            if slot.queue.push_back(message).is_err() {
                slot.queue.pop_front();
                let _ = slot.queue.push_back(message);
            }
        }
        Ok(())
    }

    fn poll_message(&mut self) -> Result<Option<SyncMessage>, Self::Error> {
        let mut slots = self.bus.slots.borrow_mut();
        Ok(slots.get_mut(self.slot).and_then(|slot| slot.queue.pop_front()))
    }
}

impl Drop for BusView<'_> {
    fn drop(&mut self) {
        let mut slots = self.bus.slots.borrow_mut();
        if let Some(slot) = slots.get_mut(self.slot) {
            slot.attached = false;
            while slot.queue.pop_front().is_some() {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_every_view_but_the_sender() {
        let bus = LocalBus::new();
        let mut a = bus.attach().unwrap();
        let mut b = bus.attach().unwrap();
        let mut c = bus.attach().unwrap();

        a.publish(SyncMessage { page: 2 }).unwrap();

        assert_eq!(a.poll_message().unwrap(), None);
        assert_eq!(b.poll_message().unwrap(), Some(SyncMessage { page: 2 }));
        assert_eq!(c.poll_message().unwrap(), Some(SyncMessage { page: 2 }));
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn overflow_drops_the_oldest_message() {
        let bus = LocalBus::new();
        let mut a = bus.attach().unwrap();
        let mut b = bus.attach().unwrap();

        for page in 1..=(BUS_QUEUE_DEPTH as u16 + 2) {
            a.publish(SyncMessage { page }).unwrap();
        }

        assert_eq!(b.poll_message().unwrap(), Some(SyncMessage { page: 3 }));
        let mut last = None;
        while let Some(message) = b.poll_message().unwrap() {
            last = Some(message);
        }
        assert_eq!(last, Some(SyncMessage { page: BUS_QUEUE_DEPTH as u16 + 2 }));
    }

    #[test]
    fn dropping_a_view_releases_its_slot() {
        let bus = LocalBus::new();
        let mut a = bus.attach().unwrap();
        {
            let _b = bus.attach().unwrap();
            a.publish(SyncMessage { page: 2 }).unwrap();
            assert_eq!(bus.pending(), 1);
        }

        assert_eq!(bus.pending(), 0);
        a.publish(SyncMessage { page: 3 }).unwrap();
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn attach_limit_is_enforced() {
        let bus = LocalBus::new();
        let views = [
            bus.attach(),
            bus.attach(),
            bus.attach(),
            bus.attach(),
        ];
        assert!(views.iter().all(Option::is_some));
        assert!(bus.attach().is_none());
    }
}
