//! Door reed switch + latch solenoid (simulated).
//!
//! A locked door cannot be opened: [`DoorLatch::open`] is refused while the
//! latch is engaged.

use log::warn;

pub struct DoorLatch {
    closed: bool,
    locked: bool,
    lock_count: u32,
}

impl DoorLatch {
    /// A closed, unlocked door.
    pub fn new() -> Self {
        Self {
            closed: true,
            locked: false,
            lock_count: 0,
        }
    }

    /// Returns `false` if the latch held the door shut.
    pub fn open(&mut self) -> bool {
        if self.locked {
            warn!("DOOR sim: open refused, latch engaged");
            return false;
        }
        self.closed = false;
        true
    }

    pub fn engage(&mut self) {
        if self.locked {
            warn!("DOOR sim: latch already engaged");
        }
        self.locked = true;
        self.lock_count += 1;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Times the latch has been engaged since power-on.
    pub fn lock_count(&self) -> u32 {
        self.lock_count
    }
}

impl Default for DoorLatch {
    fn default() -> Self {
        Self::new()
    }
}
