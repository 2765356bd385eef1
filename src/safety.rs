//! Door interlock and filter safety checks.
//!
//! ## Door lock lifecycle
//!
//! 1. The controller confirms the door is closed.
//! 2. [`DoorLock::engage`] locks the latch and returns a guard.
//! 3. Every step after that runs while the guard is alive.
//! 4. Dropping the guard unlocks the latch, whichever way the cycle exits.
//!
//! The guard borrows the door mutably, so nothing else can touch the
//! latch while a cycle holds it.

use log::{info, warn};

use crate::app::ports::Door;
use crate::config::DishwasherConfig;

/// Scoped door lock.  Unlocks exactly once when dropped.
pub struct DoorLock<'a, D: Door> {
    door: &'a mut D,
}

impl<'a, D: Door> DoorLock<'a, D> {
    /// Lock `door` and hold it until the guard goes out of scope.
    pub fn engage(door: &'a mut D) -> Self {
        door.lock();
        info!("DOOR: locked");
        Self { door }
    }
}

impl<D: Door> Drop for DoorLock<'_, D> {
    fn drop(&mut self) {
        self.door.unlock();
        info!("DOOR: unlocked");
    }
}

/// Whether a filter reading is clean enough to wash with tablets.
///
/// `capacity` is the remaining capacity in percent.  A reading exactly at
/// the threshold passes.  NaN never passes.
pub fn filter_clean(capacity: f32, config: &DishwasherConfig) -> bool {
    let ok = capacity >= config.min_filter_capacity_percent;
    if !ok {
        warn!(
            "FILTER: capacity {:.1}% below minimum {:.1}%",
            capacity, config.min_filter_capacity_percent
        );
    }
    ok
}
